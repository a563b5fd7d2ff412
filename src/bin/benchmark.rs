//! Performance benchmark comparing the serial and parallel engines

use std::time::Instant;

use sparse_life::{Bounds, Pattern, World, evolve, evolve_parallel};

const SOUP_DENSITY: f64 = 0.3;

fn benchmark_serial(size: i64, iterations: u32) -> f64 {
    let mut world = World::soup(size, size, SOUP_DENSITY);

    let start = Instant::now();
    for _ in 0..iterations {
        world = evolve(&world);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel(size: i64, iterations: u32) -> f64 {
    let mut world = World::soup(size, size, SOUP_DENSITY);

    let start = Instant::now();
    for _ in 0..iterations {
        world = evolve_parallel(&world);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Sparse Life Performance Benchmark ===\n");

    let sizes = [50, 100, 200, 400, 800];
    let iterations = 20;

    println!(
        "{:>10} {:>12} {:>12} {:>10}",
        "Soup", "Serial", "Parallel", "Speedup"
    );
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark_serial(size, iterations);
        let parallel_ms = benchmark_parallel(size, iterations);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== R-pentomino Growth ===\n");

    let generations = 300u32;
    let mut world = Pattern::RPentomino.world();
    let start = Instant::now();
    for _ in 0..generations {
        world = evolve(&world);
    }
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    let span = Bounds::of(&world);

    println!(
        "{} generations in {:.2} ms ({:.3} ms/gen)",
        generations,
        elapsed_ms,
        elapsed_ms / generations as f64
    );
    println!(
        "final population {} over a {}x{} span",
        world.population(),
        span.width(),
        span.height()
    );
}
