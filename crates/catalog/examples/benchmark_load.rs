use catalog::Catalog;
use std::path::Path;
use std::time::Instant;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let data_file = Path::new("data/movies.json");

    println!("Loading movie catalog...\n");

    let start = Instant::now();
    let catalog = Catalog::load(data_file).expect("Failed to load catalog");
    let elapsed = start.elapsed();

    let summary = catalog.summary();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", summary.movie_count);
    println!("Genres: {}", summary.genre_count);
    println!("\nPerformance: {:.0} movies/second",
             summary.movie_count as f64 / elapsed.as_secs_f64());
}
