use data_loader::{Catalog, LoadOptions};
use std::path::Path;
use std::time::Instant;

fn main() {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let path = Path::new("data/movies.csv");

    println!("Loading {}...\n", path.display());

    let start = Instant::now();
    let report = Catalog::load_from_file(path, &LoadOptions::lenient())
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let catalog = &report.catalog;

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", catalog.len());
    println!("Distinct ids: {}", catalog.distinct_ids());
    println!("Genres: {}", catalog.genres().len());
    println!("Skipped lines: {}", report.skipped.len());
    println!("\nPerformance: {:.0} movies/second",
             catalog.len() as f64 / elapsed.as_secs_f64());
}
