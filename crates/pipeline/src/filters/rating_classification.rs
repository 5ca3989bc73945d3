//! Filter on MPAA rating classification (G, PG, PG-13, R, NC-17).

use super::retain_selected;
use catalog::Movie;

/// Keeps movies whose MPAA rating is one of `classifications`.
///
/// ## Algorithm
/// 1. Empty selection: return the candidates unchanged
/// 2. Otherwise keep movies that have a rating and whose rating is in the set
pub fn filter_by_rating_classification<'a, S: AsRef<str>>(
    movies: Vec<&'a Movie>,
    classifications: &[S],
) -> Vec<&'a Movie> {
    retain_selected(movies, classifications, |movie| movie.mpaa_rating.as_deref())
}
