//! Core domain types for the movie catalog.
//!
//! Key Rust concepts demonstrated here:
//! - `Option<T>` for fields the data file may leave out
//! - Serde attributes to map the data file's key spellings onto Rust names
//! - A custom `deserialize_with` function for loosely typed input
//! - Read-only access through borrowed slices

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// The MPAA rating classifications, in order of increasing restriction.
///
/// This is a domain constant, not something derived from the loaded data.
pub const RATING_CLASSIFICATIONS: [&str; 5] = ["G", "PG", "PG-13", "R", "NC-17"];

// =============================================================================
// Movie
// =============================================================================

/// A single movie record from the data file.
///
/// Every field is optional: the source data has gaps, and a missing value
/// only matters to the filters that look at that particular field.
///
/// Rust concept: `#[serde(default)]` turns a missing key into `None`
/// instead of a parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(
        rename = "Title",
        alias = "title",
        default,
        deserialize_with = "text_or_number"
    )]
    pub title: Option<String>,

    #[serde(
        rename = "MajorGenre",
        alias = "Major Genre",
        alias = "major_genre",
        default
    )]
    pub major_genre: Option<String>,

    /// One of [`RATING_CLASSIFICATIONS`] in well-formed data, but the file
    /// may carry other labels ("Not Rated", "Open") which are kept as-is
    #[serde(
        rename = "MPAARating",
        alias = "MPAA Rating",
        alias = "mpaa_rating",
        default
    )]
    pub mpaa_rating: Option<String>,

    /// IMDB user rating, conventionally 0.0 - 10.0
    #[serde(
        rename = "IMDBRating",
        alias = "IMDB Rating",
        alias = "imdb_rating",
        default
    )]
    pub imdb_rating: Option<f64>,

    /// Rotten Tomatoes score, conventionally 0 - 100
    #[serde(
        rename = "RottenTomatoesRating",
        alias = "Rotten Tomatoes Rating",
        alias = "rotten_tomatoes_rating",
        default
    )]
    pub rotten_tomatoes_rating: Option<f64>,
}

impl Movie {
    /// Create a movie with only a title set
    ///
    /// Handy for building synthetic catalogs; chain the `with_*` methods
    /// to fill in the rest.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            major_genre: None,
            mpaa_rating: None,
            imdb_rating: None,
            rotten_tomatoes_rating: None,
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.major_genre = Some(genre.into());
        self
    }

    pub fn with_mpaa_rating(mut self, rating: impl Into<String>) -> Self {
        self.mpaa_rating = Some(rating.into());
        self
    }

    pub fn with_imdb_rating(mut self, rating: f64) -> Self {
        self.imdb_rating = Some(rating);
        self
    }

    pub fn with_rotten_tomatoes_rating(mut self, rating: f64) -> Self {
        self.rotten_tomatoes_rating = Some(rating);
        self
    }
}

/// Some titles in the wild are bare numbers ("1776", "9"), which JSON
/// encodes as numbers rather than strings. Accept both.
fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Text>::deserialize(deserializer)?.map(|text| match text {
        Text::Str(s) => s,
        Text::Int(n) => n.to_string(),
        Text::Float(f) => f.to_string(),
    }))
}

// =============================================================================
// Catalog - The Immutable Snapshot
// =============================================================================

/// The full set of movies plus the genre list derived from them.
///
/// A `Catalog` only exists once loading has finished, and nothing hands
/// out `&mut` access afterwards, so every query sees the same snapshot.
/// Share it across threads with `Arc<Catalog>`; no locking is needed.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Movies in source order
    pub(crate) movies: Vec<Movie>,
    /// Distinct genres in order of first appearance
    pub(crate) genres: Vec<String>,
}

/// Counts describing a loaded catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CatalogSummary {
    pub movie_count: usize,
    pub genre_count: usize,
    pub missing_title: usize,
    pub missing_genre: usize,
    pub missing_mpaa_rating: usize,
    pub missing_imdb_rating: usize,
    pub missing_rotten_tomatoes_rating: usize,
}
