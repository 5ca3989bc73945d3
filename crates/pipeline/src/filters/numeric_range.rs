//! Numeric range filters on the two rating scales.
//!
//! IMDB (0.0 - 10.0) and Rotten Tomatoes (0 - 100) are filtered the same
//! way, so a single function parametrised by [`RatingScale`] covers both.

use crate::params::QueryParamError;
use catalog::Movie;
use std::fmt;
use std::str::FromStr;

/// Which numeric rating a range filter looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingScale {
    Imdb,
    RottenTomatoes,
}

impl RatingScale {
    /// Read this scale's rating off a movie
    pub fn value_of(self, movie: &Movie) -> Option<f64> {
        match self {
            RatingScale::Imdb => movie.imdb_rating,
            RatingScale::RottenTomatoes => movie.rotten_tomatoes_rating,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RatingScale::Imdb => "imdb",
            RatingScale::RottenTomatoes => "rotten-tomatoes",
        }
    }
}

impl fmt::Display for RatingScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RatingScale {
    type Err = QueryParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "imdb" => Ok(RatingScale::Imdb),
            "rotten-tomatoes" | "rotten_tomatoes" | "rottentomatoes" | "rt" => {
                Ok(RatingScale::RottenTomatoes)
            }
            _ => Err(QueryParamError::UnknownScale {
                value: s.to_string(),
            }),
        }
    }
}

/// An inclusive range with optional ends.
///
/// A missing bound is treated as unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RatingRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RatingRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn at_least(min: f64) -> Self {
        Self::new(Some(min), None)
    }

    pub fn at_most(max: f64) -> Self {
        Self::new(None, Some(max))
    }

    pub fn between(min: f64, max: f64) -> Self {
        Self::new(Some(min), Some(max))
    }

    /// True when neither bound is set, i.e. the range constrains nothing
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Check `value` against both bounds, inclusive on each end
    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// Keeps movies whose rating on `scale` falls inside `range`.
///
/// ## Algorithm
/// 1. No bounds: return the candidates unchanged
/// 2. Otherwise drop movies without a rating on this scale
/// 3. Keep the rest if `min <= rating <= max` (missing bound = no limit)
pub fn filter_by_numeric_range<'a>(
    movies: Vec<&'a Movie>,
    scale: RatingScale,
    range: RatingRange,
) -> Vec<&'a Movie> {
    if range.is_unbounded() {
        return movies;
    }

    movies
        .into_iter()
        .filter(|movie| scale.value_of(movie).is_some_and(|value| range.contains(value)))
        .collect()
}

/// Range filter on the IMDB rating
pub fn filter_by_imdb_rating<'a>(
    movies: Vec<&'a Movie>,
    min: Option<f64>,
    max: Option<f64>,
) -> Vec<&'a Movie> {
    filter_by_numeric_range(movies, RatingScale::Imdb, RatingRange::new(min, max))
}

/// Range filter on the Rotten Tomatoes rating
pub fn filter_by_rotten_tomatoes_rating<'a>(
    movies: Vec<&'a Movie>,
    min: Option<f64>,
    max: Option<f64>,
) -> Vec<&'a Movie> {
    filter_by_numeric_range(movies, RatingScale::RottenTomatoes, RatingRange::new(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;

    fn create_test_catalog() -> Catalog {
        Catalog::from_movies(vec![
            Movie::titled("Zoo")
                .with_imdb_rating(7.5)
                .with_rotten_tomatoes_rating(80.0),
            Movie::titled("War").with_imdb_rating(8.0),
            Movie::titled("Flop")
                .with_imdb_rating(3.2)
                .with_rotten_tomatoes_rating(12.0),
            Movie::titled("Unrated"),
        ])
    }

    fn titles<'a>(movies: &[&'a Movie]) -> Vec<&'a str> {
        movies.iter().filter_map(|m| m.title.as_deref()).collect()
    }

    #[test]
    fn test_unbounded_is_identity() {
        let catalog = create_test_catalog();
        let movies: Vec<&Movie> = catalog.all().iter().collect();

        let filtered = filter_by_imdb_rating(movies.clone(), None, None);
        assert_eq!(filtered, movies);
    }

    #[test]
    fn test_min_only() {
        let catalog = create_test_catalog();
        let movies: Vec<&Movie> = catalog.all().iter().collect();

        let filtered = filter_by_imdb_rating(movies, Some(7.5), None);
        assert_eq!(titles(&filtered), ["Zoo", "War"]);
    }

    #[test]
    fn test_max_only() {
        let catalog = create_test_catalog();
        let movies: Vec<&Movie> = catalog.all().iter().collect();

        let filtered = filter_by_imdb_rating(movies, None, Some(7.5));
        assert_eq!(titles(&filtered), ["Zoo", "Flop"]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let catalog = create_test_catalog();
        let movies: Vec<&Movie> = catalog.all().iter().collect();

        let filtered = filter_by_imdb_rating(movies, Some(7.5), Some(8.0));
        assert_eq!(titles(&filtered), ["Zoo", "War"]);
    }

    #[test]
    fn test_missing_rating_is_excluded() {
        let catalog = create_test_catalog();
        let movies: Vec<&Movie> = catalog.all().iter().collect();

        let filtered = filter_by_rotten_tomatoes_rating(movies, Some(50.0), Some(100.0));
        assert_eq!(titles(&filtered), ["Zoo"]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let catalog = create_test_catalog();
        let movies: Vec<&Movie> = catalog.all().iter().collect();

        let filtered = filter_by_numeric_range(movies, RatingScale::Imdb, RatingRange::between(9.0, 1.0));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_range_contains() {
        assert!(RatingRange::default().contains(-1.0));
        assert!(RatingRange::at_least(5.0).contains(5.0));
        assert!(!RatingRange::at_least(5.0).contains(4.99));
        assert!(RatingRange::at_most(5.0).contains(5.0));
        assert!(!RatingRange::at_most(5.0).contains(5.01));
    }

    #[test]
    fn test_scale_from_str() {
        assert_eq!("IMDB".parse::<RatingScale>().unwrap(), RatingScale::Imdb);
        assert_eq!("rt".parse::<RatingScale>().unwrap(), RatingScale::RottenTomatoes);
        assert!("metacritic".parse::<RatingScale>().is_err());
    }
}
