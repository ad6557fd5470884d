//! Performance benchmark comparing sequential and parallel neighbor counting

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use unbounded_life::domain::{Algorithm, Cell, LiveSet, SimulationEngine, presets, random_soup};

/// Average milliseconds per generation
fn benchmark(initial: &LiveSet, algorithm: Algorithm, generations: u32) -> f64 {
    let mut engine = SimulationEngine::new(initial.clone()).with_algorithm(algorithm);

    let start = Instant::now();
    for _ in 0..generations {
        engine.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / generations as f64
}

fn main() {
    env_logger::init();
    println!("=== Sparse Life Benchmark ===\n");

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let sizes = [64, 128, 256, 512, 1024];
    let generations = 20;

    println!("{:>10} {:>10} {:>12} {:>12} {:>10}", "Soup", "Cells", "Sparse", "Sparse+Par", "Speedup");
    println!("{:-<58}", "");

    for size in sizes {
        let soup = random_soup(&mut rng, Cell::default(), size, size, 0.3);
        let serial_ms = benchmark(&soup, Algorithm::Sequential, generations);
        let parallel_ms = benchmark(&soup, Algorithm::Parallel, generations);

        println!(
            "{:>10} {:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            soup.len(),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Acorn, 1000 generations ===\n");

    let acorn = presets::acorn().to_live_set(Cell::default());
    for algorithm in Algorithm::all() {
        let mut engine = SimulationEngine::new(acorn.clone()).with_algorithm(algorithm);
        let start = Instant::now();
        for _ in 0..1000 {
            engine.step();
        }
        println!(
            "{:<12} {:>8.1} ms total, population {}",
            algorithm.name(),
            start.elapsed().as_secs_f64() * 1000.0,
            engine.population()
        );
    }
}
