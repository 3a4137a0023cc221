use kmeans2d::*;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut rnd = StdRng::seed_from_u64(1337);
    let samples: Vec<Point<f64>> = generate_dataset(DEFAULT_SAMPLE_CNT, &mut rnd);
    let k = default_cluster_count(samples.len());

    let conf = KMeansConfig::build().random_generator(rnd).build();
    let kmean = KMeans::new(samples);
    for method in [InitMethod::Random, InitMethod::FarthestFirst, InitMethod::KMeansPlusPlus] {
        let result = kmean.run(k, method, &conf).expect("valid k");
        println!("{:>14}: {} rounds ({:?}), error {:.2}", method, result.iterations, result.termination, result.distsum);
    }

    let best = kmean.run_restarts(k, InitMethod::Random, 16, &conf).expect("valid k");
    println!("Best of 16 random restarts: error {:.2}", best.distsum);
    println!("Centroids: {:?}", best.centroids);
}
