//! Line-oriented stand-in for a clicking UI:
//!
//! ```text
//! method <Random|Farthest First|KMeans++|Manual>
//! k <n>
//! click <x> <y>
//! step | run | reset | new | show | quit
//! ```
use kmeans2d::*;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn show(state: &RunState) {
    println!("{:?} | method {} | k {} | rounds {}", state.phase(), state.method(), state.k(), state.iterations());
    for (idx, c) in state.centroids().iter().enumerate() {
        let members = state.assignments().iter().filter(|&&a| a == idx).count();
        println!("  centroid {}: ({:.2}, {:.2}) with {} points", idx, c.x, c.y, members);
    }
}

fn apply(state: &RunState, line: &str, conf: &KMeansConfig<'_, f64>) -> Result<RunState> {
    let (cmd, arg) = line.split_once(' ').unwrap_or((line, ""));
    match cmd {
        "method" => Ok(state.with_method(arg.parse()?)),
        "k" => state.with_k(arg.trim().parse().map_err(|_| Error::InvalidArgument { name: "k", message: format!("not a number: {}", arg) })?),
        "click" => {
            let coords: Vec<f64> = arg.split_whitespace().filter_map(|v| v.parse().ok()).collect();
            match coords.as_slice() {
                [x, y] => state.with_manual_centroid(Centroid::new(*x, *y)),
                _ => Err(Error::InvalidArgument { name: "click", message: "expected two coordinates".into() }),
            }
        }
        "step" => state.step(conf),
        "run" => state.run(conf),
        "reset" => Ok(state.reset()),
        "new" => state.with_dataset(generate_dataset(DEFAULT_SAMPLE_CNT, &mut rand::thread_rng())),
        _ => Ok(state.clone()),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kmeans2d=debug")))
        .init();

    let samples = generate_dataset(DEFAULT_SAMPLE_CNT, &mut rand::thread_rng());
    let k = default_cluster_count(samples.len());
    let mut state = RunState::new(samples, k, InitMethod::default()).expect("default k fits the dataset");
    let conf = KMeansConfig::default();

    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush().ok();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        if line == "quit" {
            break;
        }
        match apply(&state, line, &conf) {
            Ok(next) => {
                state = next;
                if matches!(state.phase(), Phase::IterationCapReached) {
                    println!("Did not converge within {} rounds", conf.max_iter());
                }
                show(&state);
            }
            Err(Error::NotReady { collected, k }) => println!("Place {} more centroids first (click <x> <y>)", k - collected),
            Err(e) => println!("{}", e),
        }
        print!("> ");
        io::stdout().flush().ok();
    }
}
