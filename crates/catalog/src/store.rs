//! Catalog construction and read access.
//!
//! This module builds the [`Catalog`] from parsed movies:
//! - Keep the movies in source order
//! - Derive the distinct genre list in one scan
//! - Log what was loaded (and anything that looks off)
//!
//! Rust concepts you'll see:
//! - Constructors that only hand back a value once it is complete
//! - Returning borrowed slices (`&[T]`) so callers can't mutate the store
//! - HashSet for deduplication

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

impl Catalog {
    /// Load the catalog from a JSON data file
    ///
    /// This is the main entry point at process start. Any error here is
    /// fatal: there is no fallback catalog.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading movie catalog from {}", path.display());

        let movies = parser::parse_movies(path)?;
        let catalog = Self::from_movies(movies);

        info!(
            "Loaded {} movies across {} genres",
            catalog.movies.len(),
            catalog.genres.len()
        );
        Ok(catalog)
    }

    /// Load the catalog from any reader holding the JSON array
    pub fn from_reader<R: Read>(source: &str, reader: R) -> Result<Self> {
        let movies = parser::parse_movies_from_reader(source, reader)?;
        Ok(Self::from_movies(movies))
    }

    /// Load the catalog from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let movies = parser::parse_movies_from_str("<inline>", json)?;
        Ok(Self::from_movies(movies))
    }

    /// Build a catalog from movies that are already in memory
    ///
    /// The genre list is computed here, once, so later reads are free.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let genres = distinct_genres(&movies);
        let catalog = Self { movies, genres };
        catalog.warn_on_unconventional_ratings();
        catalog
    }

    /// Every movie, in source order
    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    /// The distinct genres present in the catalog
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// The fixed MPAA rating classifications
    ///
    /// Takes `&self` for symmetry with [`Catalog::genres`]; the answer never
    /// depends on the loaded data.
    pub fn rating_classifications(&self) -> &'static [&'static str] {
        &RATING_CLASSIFICATIONS
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Count records and the gaps in each field
    pub fn summary(&self) -> CatalogSummary {
        let mut summary = CatalogSummary {
            movie_count: self.movies.len(),
            genre_count: self.genres.len(),
            ..CatalogSummary::default()
        };

        for movie in &self.movies {
            summary.missing_title += movie.title.is_none() as usize;
            summary.missing_genre += movie.major_genre.is_none() as usize;
            summary.missing_mpaa_rating += movie.mpaa_rating.is_none() as usize;
            summary.missing_imdb_rating += movie.imdb_rating.is_none() as usize;
            summary.missing_rotten_tomatoes_rating +=
                movie.rotten_tomatoes_rating.is_none() as usize;
        }
        summary
    }

    /// Out-of-scale ratings are kept; range filters treat them like any
    /// other number. They are only worth a warning.
    fn warn_on_unconventional_ratings(&self) {
        let imdb = self
            .movies
            .iter()
            .filter(|m| m.imdb_rating.is_some_and(|r| !(0.0..=10.0).contains(&r)))
            .count();
        let rotten_tomatoes = self
            .movies
            .iter()
            .filter(|m| {
                m.rotten_tomatoes_rating
                    .is_some_and(|r| !(0.0..=100.0).contains(&r))
            })
            .count();

        if imdb > 0 {
            warn!("{} movies have an IMDB rating outside 0-10", imdb);
        }
        if rotten_tomatoes > 0 {
            warn!(
                "{} movies have a Rotten Tomatoes rating outside 0-100",
                rotten_tomatoes
            );
        }
    }
}

/// Distinct non-missing genres, in order of first appearance
fn distinct_genres(movies: &[Movie]) -> Vec<String> {
    let mut seen = HashSet::new();
    movies
        .iter()
        .filter_map(|movie| movie.major_genre.as_deref())
        .filter(|genre| seen.insert(*genre))
        .map(str::to_string)
        .collect()
}
