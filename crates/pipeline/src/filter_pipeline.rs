//! The FilterPipeline chains filter stages together.
//!
//! The set of stages is closed (genre, rating classification and the two
//! numeric ranges), so a stage is an enum variant rather than a boxed
//! trait object.

use crate::filters::{
    filter_by_genre, filter_by_numeric_range, filter_by_rating_classification, search,
    RatingRange, RatingScale,
};
use catalog::{Catalog, Movie};
use tracing;

/// One stage of the pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum QueryFilter {
    RatingClassification(Vec<String>),
    Genre(Vec<String>),
    NumericRange { scale: RatingScale, range: RatingRange },
}

impl QueryFilter {
    /// Returns the name of this stage (for logging/debugging)
    pub fn name(&self) -> &'static str {
        match self {
            QueryFilter::RatingClassification(_) => "RatingClassificationFilter",
            QueryFilter::Genre(_) => "GenreFilter",
            QueryFilter::NumericRange {
                scale: RatingScale::Imdb,
                ..
            } => "ImdbRatingFilter",
            QueryFilter::NumericRange {
                scale: RatingScale::RottenTomatoes,
                ..
            } => "RottenTomatoesRatingFilter",
        }
    }

    /// Apply this stage to a set of candidates
    pub fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Vec<&'a Movie> {
        match self {
            QueryFilter::RatingClassification(selection) => {
                filter_by_rating_classification(movies, selection)
            }
            QueryFilter::Genre(selection) => filter_by_genre(movies, selection),
            QueryFilter::NumericRange { scale, range } => {
                filter_by_numeric_range(movies, *scale, *range)
            }
        }
    }
}

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(QueryFilter::Genre(vec!["Drama".into()]))
///     .add_filter(QueryFilter::NumericRange {
///         scale: RatingScale::Imdb,
///         range: RatingRange::at_least(7.0),
///     });
///
/// let movies = pipeline.run(&catalog, Some("war"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPipeline {
    filters: Vec<QueryFilter>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: QueryFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// The stages in the order they will run
    pub fn filters(&self) -> &[QueryFilter] {
        &self.filters
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// Every stage is an intersection, so the order of stages changes the
    /// size of the intermediate sets but never the final result.
    pub fn apply<'a>(&self, candidates: Vec<&'a Movie>) -> Vec<&'a Movie> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// Seed from a title search over the catalog, then apply every stage
    pub fn run<'a>(&self, catalog: &'a Catalog, search_terms: Option<&str>) -> Vec<&'a Movie> {
        let seeded = search(catalog, search_terms);
        tracing::debug!(
            "Search {:?} matched {} of {} movies",
            search_terms,
            seeded.len(),
            catalog.len()
        );
        self.apply(seeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_catalog() -> Catalog {
        Catalog::from_movies(vec![
            Movie::titled("Zoo")
                .with_genre("Comedy")
                .with_mpaa_rating("G")
                .with_imdb_rating(7.5)
                .with_rotten_tomatoes_rating(80.0),
            Movie::titled("War")
                .with_genre("Drama")
                .with_mpaa_rating("R")
                .with_imdb_rating(8.0),
        ])
    }

    #[test]
    fn test_empty_pipeline() {
        let catalog = create_test_catalog();
        let pipeline = FilterPipeline::new();

        let filtered = pipeline.run(&catalog, None);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let catalog = create_test_catalog();
        let pipeline = FilterPipeline::new().add_filter(QueryFilter::Genre(vec!["Drama".into()]));

        let filtered = pipeline.run(&catalog, None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title.as_deref(), Some("War"));
    }

    #[test]
    fn test_stages_combine_as_conjunction() {
        let catalog = create_test_catalog();
        let pipeline = FilterPipeline::new()
            .add_filter(QueryFilter::RatingClassification(vec!["G".into(), "R".into()]))
            .add_filter(QueryFilter::NumericRange {
                scale: RatingScale::RottenTomatoes,
                range: RatingRange::at_least(50.0),
            });

        let filtered = pipeline.run(&catalog, Some("o"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title.as_deref(), Some("Zoo"));
    }

    #[test]
    fn test_filter_names() {
        let imdb = QueryFilter::NumericRange {
            scale: RatingScale::Imdb,
            range: RatingRange::default(),
        };
        assert_eq!(imdb.name(), "ImdbRatingFilter");
        assert_eq!(QueryFilter::Genre(vec![]).name(), "GenreFilter");
    }
}
