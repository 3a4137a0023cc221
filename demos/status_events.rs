use kmeans2d::*;

fn main() {
    let k = 4;

    // Generate some random data
    let samples: Vec<Point<f64>> = generate_dataset(2000, &mut rand::thread_rng());

	let conf = KMeansConfig::build()
		.init_done(&|c| println!("Initialization completed: {} centroids.", c.len()))
		.iteration_done(&|s, nr|
			println!("Iteration {} - Error: {:.2} | Cluster sizes: {:?}",
				nr, s.distsum, s.centroid_frequency))
		.build();

    // Calculate kmeans, using farthest-first as initialization-method
    let kmean = KMeans::new(samples);
    let result = kmean.run(k, InitMethod::FarthestFirst, &conf).expect("valid k");

    println!("Centroids: {:?}", result.centroids);
    println!("Converged: {} after {} rounds", result.converged(), result.iterations);
    println!("Error: {}", result.distsum);
}
