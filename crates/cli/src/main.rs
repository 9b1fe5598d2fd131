mod display;
mod interactive;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{Catalog, LoadOptions, MalformedLinePolicy, MovieId, Year};
use query::{MovieQuery, QueryEngine, DEFAULT_RESULT_LIMIT};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;

use display::{format_row, print_genres, print_results};

/// ReelCatalog - in-memory movie lookup
#[derive(Parser)]
#[command(name = "reel-catalog")]
#[command(about = "Look up and filter movies from a MovieLens-style movies.csv", long_about = None)]
struct Cli {
    /// Path to the movies CSV file
    #[arg(short, long, default_value = "data/movies.csv")]
    data: PathBuf,

    /// Abort the load on the first malformed line instead of skipping it
    #[arg(long)]
    strict: bool,

    /// The file has no header line
    #[arg(long)]
    no_header: bool,

    /// Maximum number of search results
    #[arg(long, default_value_t = DEFAULT_RESULT_LIMIT)]
    limit: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a single movie by id
    Get {
        /// Movie ID to display
        id: MovieId,
    },

    /// Search for movies matching every given filter
    Search {
        /// Case-insensitive title substring
        #[arg(long)]
        title: Option<String>,

        /// Required genre; repeat for several
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Exact release year
        #[arg(long)]
        year: Option<Year>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Print how many movies match, ignoring --limit
        #[arg(long, conflicts_with = "json")]
        count: bool,
    },

    /// List every genre in the dataset
    Genres,

    /// Prompt-driven session (the default)
    Interactive,
}

fn main() -> Result<()> {
    // Initialize tracing; stderr keeps stdout for results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let options = LoadOptions {
        has_header: !cli.no_header,
        on_malformed: if cli.strict {
            MalformedLinePolicy::Abort
        } else {
            MalformedLinePolicy::Skip
        },
    };

    let start = Instant::now();
    let report = Catalog::load_from_file(&cli.data, &options)
        .with_context(|| format!("Failed to load movies from {}", cli.data.display()))?;
    if !report.skipped.is_empty() {
        warn!(count = report.skipped.len(), "some lines were skipped");
    }
    eprintln!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        report.catalog.len(),
        start.elapsed()
    );

    let engine = QueryEngine::new(Arc::new(report.catalog)).with_limit(cli.limit);

    // Dispatch to appropriate command handler
    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Get { id } => handle_get(&engine, id)?,
        Commands::Search {
            title,
            genres,
            year,
            json,
            count,
        } => {
            let query = build_query(title, &genres, year);
            let output = if count {
                SearchOutput::Count
            } else if json {
                SearchOutput::Json
            } else {
                SearchOutput::Rows
            };
            handle_search(&engine, &query, output, &mut io::stdout().lock())?
        }
        Commands::Genres => handle_genres(&engine)?,
        Commands::Interactive => {
            let stdin = io::stdin();
            interactive::run(&engine, &mut stdin.lock(), &mut io::stdout().lock())?
        }
    }

    Ok(())
}

/// Handle the 'get' command
fn handle_get(engine: &QueryEngine, id: MovieId) -> Result<()> {
    match engine.search(&MovieQuery::by_id(id)).first() {
        Some(movie) => println!("{}", format_row(movie)),
        None => println!("No movie found with ID: {}", id),
    }
    Ok(())
}

/// How `search` prints its answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchOutput {
    Rows,
    Json,
    /// Number of matches over the whole catalog
    Count,
}

fn build_query(title: Option<String>, genres: &[String], year: Option<Year>) -> MovieQuery {
    let mut query = MovieQuery::new().with_genres(genres);
    if let Some(title) = title {
        query = query.with_title(title);
    }
    if let Some(year) = year {
        query = query.with_year(year);
    }
    query
}

/// Handle the 'search' command
fn handle_search<W: Write>(
    engine: &QueryEngine,
    query: &MovieQuery,
    output: SearchOutput,
    out: &mut W,
) -> Result<()> {
    match output {
        SearchOutput::Count => {
            writeln!(out, "{}", engine.search_all(query).count())?;
        }
        SearchOutput::Json => {
            serde_json::to_writer_pretty(&mut *out, &engine.search(query))
                .context("Failed to write JSON")?;
            writeln!(out)?;
        }
        SearchOutput::Rows => {
            writeln!(out, "{}", "Search results:".bold().blue())?;
            print_results(out, &engine.search(query))?;
        }
    }
    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(engine: &QueryEngine) -> Result<()> {
    print_genres(&mut io::stdout().lock(), engine.catalog().genres())?;
    Ok(())
}
