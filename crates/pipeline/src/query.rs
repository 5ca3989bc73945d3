//! The query invocation boundary.
//!
//! A [`MovieQuery`] carries every parameter a front end can send, each one
//! independently optional. Running it against a catalog returns the
//! matching movies plus the two lists needed to draw the filter controls.

use crate::filter_pipeline::{FilterPipeline, QueryFilter};
use crate::filters::{RatingRange, RatingScale};
use catalog::{Catalog, Movie};
use serde::Serialize;

/// All the parameters of one catalog query
///
/// `Default` is the "no constraints" query, which returns every movie.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieQuery {
    pub search_terms: Option<String>,
    /// Empty means no constraint
    pub rating_classifications: Vec<String>,
    /// Empty means no constraint
    pub genres: Vec<String>,
    pub imdb_min: Option<f64>,
    pub imdb_max: Option<f64>,
    pub rotten_tomatoes_min: Option<f64>,
    pub rotten_tomatoes_max: Option<f64>,
}

/// What a query hands back to the caller
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutcome<'a> {
    /// Matching movies, in catalog order
    pub movies: Vec<&'a Movie>,
    /// Every genre in the catalog, for the genre checkboxes
    pub genres: &'a [String],
    /// The fixed MPAA classifications, for the rating checkboxes
    pub rating_classifications: &'static [&'static str],
}

impl MovieQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_terms(mut self, terms: impl Into<String>) -> Self {
        self.search_terms = Some(terms.into());
        self
    }

    pub fn with_rating_classifications<I, S>(mut self, classifications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rating_classifications = classifications.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_imdb_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.imdb_min = min;
        self.imdb_max = max;
        self
    }

    pub fn with_rotten_tomatoes_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.rotten_tomatoes_min = min;
        self.rotten_tomatoes_max = max;
        self
    }

    pub fn imdb_range(&self) -> RatingRange {
        RatingRange::new(self.imdb_min, self.imdb_max)
    }

    pub fn rotten_tomatoes_range(&self) -> RatingRange {
        RatingRange::new(self.rotten_tomatoes_min, self.rotten_tomatoes_max)
    }

    /// Build the pipeline for this query
    ///
    /// Parameters that would not constrain anything are left out, so the
    /// pipeline only contains stages that do work.
    pub fn pipeline(&self) -> FilterPipeline {
        let mut pipeline = FilterPipeline::new();

        if !self.rating_classifications.is_empty() {
            pipeline = pipeline.add_filter(QueryFilter::RatingClassification(
                self.rating_classifications.clone(),
            ));
        }
        if !self.genres.is_empty() {
            pipeline = pipeline.add_filter(QueryFilter::Genre(self.genres.clone()));
        }

        for (scale, range) in [
            (RatingScale::Imdb, self.imdb_range()),
            (RatingScale::RottenTomatoes, self.rotten_tomatoes_range()),
        ] {
            if !range.is_unbounded() {
                pipeline = pipeline.add_filter(QueryFilter::NumericRange { scale, range });
            }
        }

        pipeline
    }

    /// Run the query: search first, then every active filter
    pub fn run<'a>(&self, catalog: &'a Catalog) -> QueryOutcome<'a> {
        let pipeline = self.pipeline();
        tracing::debug!(
            "Running query with {} filter stages: {:?}",
            pipeline.len(),
            self
        );

        QueryOutcome {
            movies: pipeline.run(catalog, self.search_terms.as_deref()),
            genres: catalog.genres(),
            rating_classifications: catalog.rating_classifications(),
        }
    }
}
