//! Filter implementations for the query pipeline.
//!
//! Each filter is a plain function: it takes the candidate movies by value,
//! keeps the ones that match, and hands the rest back. Candidates are
//! borrowed from the [`catalog::Catalog`], so filtering never copies a
//! movie record.
//!
//! An empty selection (or a range with no bounds) means "no constraint"
//! and returns the candidates untouched.

pub mod genre;
pub mod numeric_range;
pub mod rating_classification;
pub mod search;

// Re-export for convenience
pub use genre::filter_by_genre;
pub use numeric_range::{
    filter_by_imdb_rating, filter_by_numeric_range, filter_by_rotten_tomatoes_rating,
    RatingRange, RatingScale,
};
pub use rating_classification::filter_by_rating_classification;
pub use search::search;

use catalog::Movie;
use std::collections::HashSet;

/// Keep movies whose `field` is present and one of `selection`
///
/// Shared by the categorical filters (genre, rating classification).
pub(crate) fn retain_selected<'a, S, F>(
    movies: Vec<&'a Movie>,
    selection: &[S],
    field: F,
) -> Vec<&'a Movie>
where
    S: AsRef<str>,
    F: Fn(&Movie) -> Option<&str>,
{
    if selection.is_empty() {
        return movies;
    }

    let wanted: HashSet<&str> = selection.iter().map(AsRef::as_ref).collect();
    movies
        .into_iter()
        .filter(|movie| field(*movie).is_some_and(|value| wanted.contains(value)))
        .collect()
}
