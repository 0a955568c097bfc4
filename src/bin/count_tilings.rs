use std::io;
use std::time::Instant;

use tetrofit_engine::SearchEngine;

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let engine = SearchEngine::standard();
    println!("Counting tilings of the {} board...", engine.board());

    let start = Instant::now();
    let stats = engine.count();
    let elapsed = start.elapsed().as_secs_f64();

    println!("solutions:  {}", stats.solutions);
    println!("nodes:      {}", stats.nodes);
    println!("collisions: {}", stats.collisions);
    println!("time:       {elapsed:.3}s");
    if elapsed > 0.0 {
        println!("nodes/sec:  {:.0}", stats.nodes as f64 / elapsed);
    }
}
