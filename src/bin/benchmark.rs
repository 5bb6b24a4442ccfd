//! Tick throughput for serial and parallel stepping

use std::time::Instant;

use life_badge::domain::{BitGrid, LifeEngine, StepMode};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark(size: usize, iterations: u32, mode: StepMode) -> f64 {
    let source = StdRng::seed_from_u64(size as u64);
    let Ok(engine) = LifeEngine::new(size, size, source) else {
        return f64::NAN;
    };
    // Keep stagnation reseeds out of the measurement
    let Ok(engine) = engine.with_stagnation_threshold(u32::MAX) else {
        return f64::NAN;
    };
    let mut engine = engine.with_step_mode(mode);
    engine.randomize();

    let start = Instant::now();
    for _ in 0..iterations {
        engine.tick();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Life Badge Tick Benchmark ===\n");

    let sizes = [16, 64, 256, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, StepMode::Serial);
        let parallel_ms = benchmark(size, iterations, StepMode::Parallel);
        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Memory Usage (2000x2000) ===\n");

    let cells = 2000 * 2000;
    let byte_per_cell = cells;
    let packed = BitGrid::new(cells).map(|g| g.memory_bytes()).unwrap_or(0);

    println!("Byte per cell: {:>10} bytes ({:.1} MB)", byte_per_cell, byte_per_cell as f64 / 1_000_000.0);
    println!("Packed bits:   {:>10} bytes ({:.1} MB)", packed, packed as f64 / 1_000_000.0);
    println!("Reduction:     {:>10.1}x", byte_per_cell as f64 / packed as f64);
}
