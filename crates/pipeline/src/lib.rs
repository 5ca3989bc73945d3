//! Query pipeline for searching and filtering the movie catalog.
//!
//! This crate provides:
//! - Filter functions for each query criterion (title, rating, genre, score ranges)
//! - FilterPipeline for composing filter stages
//! - MovieQuery, the one-call entry point used by front ends
//! - Parameter parsing that validates raw request input
//!
//! ## Architecture
//! A query is processed in stages:
//! 1. Raw parameters are parsed and validated into a `MovieQuery`
//! 2. Search seeds the candidates from the full catalog
//! 3. Each active filter narrows the candidates
//!
//! Every filter is an intersection, so the stages commute: any order gives
//! the same final set.
//!
//! ## Example Usage
//! ```ignore
//! use catalog::Catalog;
//! use pipeline::MovieQuery;
//!
//! let catalog = Catalog::load(Path::new("data/movies.json"))?;
//!
//! let query = MovieQuery::from_pairs([("SearchTerms", "star"), ("IMDBMin", "7")])?;
//! let outcome = query.run(&catalog);
//!
//! for movie in &outcome.movies {
//!     println!("{:?}", movie.title);
//! }
//! ```

pub mod filters;
pub mod filter_pipeline;
pub mod params;
pub mod query;

// Re-export main types
pub use filter_pipeline::{FilterPipeline, QueryFilter};
pub use filters::{RatingRange, RatingScale};
pub use params::QueryParamError;
pub use query::{MovieQuery, QueryOutcome};
