use data_loader::Corpus;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data/movies");
    let cache_path = Path::new("corpus-cache.json");

    println!("Loading movie corpus...\n");

    let start = Instant::now();
    let corpus = Corpus::load(data_dir, cache_path).expect("Failed to load corpus");
    let elapsed = start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", corpus.len());
    println!(
        "\nPerformance: {:.0} movies/second",
        corpus.len() as f64 / elapsed.as_secs_f64()
    );
}
