//! Parser for the movie data file.
//!
//! The data file is a JSON array of movie objects:
//!
//! ```text
//! [
//!   { "Title": "Zoo", "MajorGenre": "Comedy", "MPAARating": "G",
//!     "IMDBRating": 7.5, "RottenTomatoesRating": 80 },
//!   ...
//! ]
//! ```
//!
//! Any field may be missing or null. Anything that is not an array of
//! objects is a structural error and fails the whole load.

use crate::error::{DataLoadError, Result};
use crate::types::Movie;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// Parse the movie data file at `path`
///
/// A missing file is reported as [`DataLoadError::FileNotFound`] so the
/// caller can tell "wrong path" apart from "file exists but is broken".
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_movies_from_reader(&name, BufReader::new(file))
}

/// Parse movie records from any reader
///
/// `source` names the input in error messages.
pub fn parse_movies_from_reader<R: Read>(source: &str, reader: R) -> Result<Vec<Movie>> {
    serde_json::from_reader(reader).map_err(|e| DataLoadError::from_json(source, e))
}

/// Parse movie records from an in-memory JSON string
pub fn parse_movies_from_str(source: &str, json: &str) -> Result<Vec<Movie>> {
    serde_json::from_str(json).map_err(|e| DataLoadError::from_json(source, e))
}
