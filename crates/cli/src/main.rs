use anyhow::{anyhow, Context, Result};
use catalog::{Catalog, Movie};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::filters::filter_by_numeric_range;
use pipeline::{MovieQuery, QueryOutcome, RatingRange, RatingScale};
use std::path::PathBuf;
use std::time::Instant;

/// movie-db - search and filter a movie catalog
#[derive(Parser)]
#[command(name = "movie-db")]
#[command(about = "Search and filter an in-memory movie catalog", long_about = None)]
struct Cli {
    /// Path to the JSON movie data file
    #[arg(short, long, default_value = "data/movies.json", env = "MOVIE_DATA_FILE")]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search titles and apply any combination of filters
    Search {
        /// Text to look for in titles (case-insensitive)
        #[arg(long)]
        terms: Option<String>,

        /// MPAA rating to include (repeat for several)
        #[arg(long = "rating")]
        ratings: Vec<String>,

        /// Major genre to include (repeat for several)
        #[arg(long = "genre")]
        genres: Vec<String>,

        #[arg(long)]
        imdb_min: Option<f64>,

        #[arg(long)]
        imdb_max: Option<f64>,

        /// Minimum Rotten Tomatoes score
        #[arg(long)]
        rt_min: Option<f64>,

        /// Maximum Rotten Tomatoes score
        #[arg(long)]
        rt_max: Option<f64>,

        /// Maximum number of results to print
        #[arg(long, default_value = "50")]
        limit: usize,
    },

    /// Run a query given as form parameters, e.g. `SearchTerms=king IMDBMin=7`
    Query {
        /// KEY=VALUE pairs using the search page's parameter names
        params: Vec<String>,

        /// Maximum number of results to print
        #[arg(long, default_value = "50")]
        limit: usize,
    },

    /// Filter the whole catalog on one rating scale
    Range {
        /// imdb or rotten-tomatoes (rt)
        #[arg(long)]
        scale: RatingScale,

        #[arg(long)]
        min: Option<f64>,

        #[arg(long)]
        max: Option<f64>,

        /// Maximum number of results to print
        #[arg(long, default_value = "50")]
        limit: usize,
    },

    /// List the genres present in the catalog
    Genres,

    /// List the MPAA rating classifications
    Ratings,

    /// Show record counts and missing-field statistics
    Summary,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // The catalog must load before any query runs; a failure here is fatal
    let start = Instant::now();
    let catalog = Catalog::load(&cli.data_file).with_context(|| {
        format!("Failed to load movie catalog from {}", cli.data_file.display())
    })?;
    tracing::info!("Catalog ready in {:?}", start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search {
            terms,
            ratings,
            genres,
            imdb_min,
            imdb_max,
            rt_min,
            rt_max,
            limit,
        } => {
            let mut query = MovieQuery::new()
                .with_rating_classifications(ratings)
                .with_genres(genres)
                .with_imdb_range(imdb_min, imdb_max)
                .with_rotten_tomatoes_range(rt_min, rt_max);
            query.search_terms = terms;
            handle_query(&catalog, &query, limit)
        }
        Commands::Query { params, limit } => handle_form_query(&catalog, &params, limit),
        Commands::Range {
            scale,
            min,
            max,
            limit,
        } => handle_range(&catalog, scale, RatingRange::new(min, max), limit),
        Commands::Genres => {
            handle_genres(&catalog);
            Ok(())
        }
        Commands::Ratings => {
            handle_ratings(&catalog);
            Ok(())
        }
        Commands::Summary => {
            handle_summary(&catalog);
            Ok(())
        }
    }
}

/// Handle the 'search' command
fn handle_query(catalog: &Catalog, query: &MovieQuery, limit: usize) -> Result<()> {
    let outcome = query.run(catalog);
    print_outcome(&outcome, limit);
    Ok(())
}

/// Handle the 'query' command
fn handle_form_query(catalog: &Catalog, params: &[String], limit: usize) -> Result<()> {
    let pairs = params
        .iter()
        .map(|param| {
            param
                .split_once('=')
                .ok_or_else(|| anyhow!("Expected KEY=VALUE, got {:?}", param))
        })
        .collect::<Result<Vec<_>>>()?;

    let query = MovieQuery::from_pairs(pairs).context("Invalid query parameters")?;
    handle_query(catalog, &query, limit)
}

/// Handle the 'range' command
fn handle_range(catalog: &Catalog, scale: RatingScale, range: RatingRange, limit: usize) -> Result<()> {
    let movies = filter_by_numeric_range(catalog.all().iter().collect(), scale, range);

    println!(
        "{}",
        format!("{} movies with {} rating in range:", movies.len(), scale)
            .bold()
            .blue()
    );
    print_movies(&movies, limit);
    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(catalog: &Catalog) {
    println!("{}", "Genres:".bold().blue());
    for genre in catalog.genres() {
        println!("{}{}", "• ".green(), genre);
    }
}

/// Handle the 'ratings' command
fn handle_ratings(catalog: &Catalog) {
    println!("{}", "MPAA ratings:".bold().blue());
    for rating in catalog.rating_classifications() {
        println!("{}{}", "• ".green(), rating);
    }
}

/// Handle the 'summary' command
fn handle_summary(catalog: &Catalog) {
    let summary = catalog.summary();

    println!("{}", "Catalog summary:".bold().blue());
    println!("{}Movies: {}", "• ".green(), summary.movie_count);
    println!("{}Genres: {}", "• ".green(), summary.genre_count);
    println!("Missing fields:");
    println!("{}Title: {}", "• ".cyan(), summary.missing_title);
    println!("{}Major genre: {}", "• ".cyan(), summary.missing_genre);
    println!("{}MPAA rating: {}", "• ".cyan(), summary.missing_mpaa_rating);
    println!("{}IMDB rating: {}", "• ".cyan(), summary.missing_imdb_rating);
    println!(
        "{}Rotten Tomatoes rating: {}",
        "• ".cyan(),
        summary.missing_rotten_tomatoes_rating
    );
}

/// Print a query outcome: the matches, then the filter choices available
fn print_outcome(outcome: &QueryOutcome<'_>, limit: usize) {
    println!(
        "{}",
        format!("{} matching movies:", outcome.movies.len()).bold().blue()
    );
    print_movies(&outcome.movies, limit);

    println!();
    println!("{} {}", "Ratings:".dimmed(), outcome.rating_classifications.join(", "));
    println!("{} {}", "Genres:".dimmed(), outcome.genres.join(", "));
}

/// Helper function to format and print movies
fn print_movies(movies: &[&Movie], limit: usize) {
    for (i, movie) in movies.iter().take(limit).enumerate() {
        println!(
            "{}. {} [{}] {} - IMDB: {} RT: {}",
            (i + 1).to_string().green(),
            movie.title.as_deref().unwrap_or("(untitled)").bold(),
            movie.major_genre.as_deref().unwrap_or("-"),
            movie.mpaa_rating.as_deref().unwrap_or("unrated"),
            format_rating(movie.imdb_rating),
            format_rating(movie.rotten_tomatoes_rating),
        );
    }

    if movies.len() > limit {
        println!("... and {} more", movies.len() - limit);
    }
}

fn format_rating(rating: Option<f64>) -> String {
    rating
        .map(|r| format!("{r}"))
        .unwrap_or_else(|| "n/a".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_flags_parse() {
        let cli = Cli::try_parse_from([
            "movie-db",
            "search",
            "--terms",
            "king",
            "--rating",
            "G",
            "--rating",
            "PG",
            "--rt-min",
            "60",
        ])
        .unwrap();

        match cli.command {
            Commands::Search {
                terms,
                ratings,
                rt_min,
                ..
            } => {
                assert_eq!(terms.as_deref(), Some("king"));
                assert_eq!(ratings, ["G", "PG"]);
                assert_eq!(rt_min, Some(60.0));
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_non_numeric_bound_is_rejected() {
        let result = Cli::try_parse_from(["movie-db", "search", "--imdb-min", "high"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_scale_is_rejected() {
        let result = Cli::try_parse_from(["movie-db", "range", "--scale", "metacritic"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(Some(7.5)), "7.5");
        assert_eq!(format_rating(None), "n/a");
    }
}
