//! # Catalog Crate
//!
//! This crate loads the movie data file and holds it as an immutable
//! in-memory snapshot.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Catalog, CatalogSummary)
//! - **parser**: Parse the JSON data file into Rust structs
//! - **store**: Build the Catalog and expose read-only views of it
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! // Load once at startup
//! let catalog = Catalog::load(Path::new("data/movies.json"))?;
//!
//! // Read it as often as you like
//! println!("{} movies", catalog.all().len());
//! println!("genres: {:?}", catalog.genres());
//! println!("ratings: {:?}", catalog.rating_classifications());
//! ```
//!
//! ## Learning Goals
//!
//! 1. **Ownership and Borrowing**: Catalog owns the data, methods return slices
//! 2. **Error Handling**: Using Result<T> and a custom error type
//! 3. **Optional Data**: Modelling gaps with `Option<T>` instead of sentinels
//! 4. **Serde**: Mapping a loosely specified file format onto typed structs

pub mod error;
pub mod types;
pub mod parser;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{Catalog, CatalogSummary, Movie, RATING_CLASSIFICATIONS};
