//! Parsing raw request parameters into a [`MovieQuery`].
//!
//! This is the validation boundary: bad input is rejected here so the
//! pipeline itself can assume well-typed parameters and never fail.
//!
//! Recognised keys (matched case-insensitively) follow the search page's
//! form fields:
//!
//! | key                 | meaning                          | repeatable |
//! |---------------------|----------------------------------|------------|
//! | `SearchTerms`       | title search                     | no         |
//! | `MPAARatings`       | rating classification to include | yes        |
//! | `Genres`            | major genre to include           | yes        |
//! | `IMDBMin`/`IMDBMax` | IMDB range bounds                | no         |
//! | `RottenTomatoesMin`/`RottenTomatoesMax` | RT range bounds | no     |
//!
//! Empty values are treated as if the key had not been sent, which is
//! what an HTML form submits for a blank input.

use crate::query::MovieQuery;
use thiserror::Error;

/// Rejected query input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryParamError {
    /// A range bound that isn't a finite number
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: String, value: String },

    /// A key this service doesn't understand
    #[error("Unknown query parameter: {field}")]
    UnknownField { field: String },

    /// A rating scale name that isn't IMDB or Rotten Tomatoes
    #[error("Unknown rating scale: {value} (expected imdb or rotten-tomatoes)")]
    UnknownScale { value: String },
}

impl MovieQuery {
    /// Build a query from `(key, value)` pairs, e.g. a decoded query string
    ///
    /// Repeatable keys accumulate; for the others the last value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, QueryParamError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = MovieQuery::default();

        for (key, value) in pairs {
            let key = key.as_ref();
            let value = value.as_ref();
            tracing::debug!("Parsing query parameter {}={:?}", key, value);

            match key.to_ascii_lowercase().as_str() {
                "searchterms" => query.search_terms = non_empty(value).map(str::to_string),
                "mpaaratings" => {
                    if let Some(rating) = non_empty(value) {
                        query.rating_classifications.push(rating.to_string());
                    }
                }
                "genres" => {
                    if let Some(genre) = non_empty(value) {
                        query.genres.push(genre.to_string());
                    }
                }
                "imdbmin" => query.imdb_min = parse_bound(key, value)?,
                "imdbmax" => query.imdb_max = parse_bound(key, value)?,
                "rottentomatoesmin" => query.rotten_tomatoes_min = parse_bound(key, value)?,
                "rottentomatoesmax" => query.rotten_tomatoes_max = parse_bound(key, value)?,
                _ => {
                    return Err(QueryParamError::UnknownField {
                        field: key.to_string(),
                    });
                }
            }
        }

        Ok(query)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

/// Parse an optional range bound; blank means absent
pub fn parse_bound(field: &str, value: &str) -> Result<Option<f64>, QueryParamError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<f64>() {
        Ok(bound) if bound.is_finite() => Ok(Some(bound)),
        _ => Err(QueryParamError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let query = MovieQuery::from_pairs([
            ("SearchTerms", "star"),
            ("MPAARatings", "PG"),
            ("MPAARatings", "PG-13"),
            ("Genres", "Adventure"),
            ("IMDBMin", "7"),
            ("RottenTomatoesMax", "95.5"),
        ])
        .unwrap();

        assert_eq!(query.search_terms.as_deref(), Some("star"));
        assert_eq!(query.rating_classifications, ["PG", "PG-13"]);
        assert_eq!(query.genres, ["Adventure"]);
        assert_eq!(query.imdb_min, Some(7.0));
        assert_eq!(query.imdb_max, None);
        assert_eq!(query.rotten_tomatoes_max, Some(95.5));
    }

    #[test]
    fn test_blank_values_are_absent() {
        let query = MovieQuery::from_pairs([
            ("SearchTerms", ""),
            ("Genres", ""),
            ("IMDBMin", "  "),
        ])
        .unwrap();

        assert_eq!(query, MovieQuery::default());
    }

    #[test]
    fn test_keys_ignore_case() {
        let query = MovieQuery::from_pairs([("imdbmax", "9")]).unwrap();
        assert_eq!(query.imdb_max, Some(9.0));
    }

    #[test]
    fn test_non_numeric_bound_is_rejected() {
        let err = MovieQuery::from_pairs([("IMDBMin", "seven")]).unwrap_err();
        assert_eq!(
            err,
            QueryParamError::InvalidNumber {
                field: "IMDBMin".to_string(),
                value: "seven".to_string(),
            }
        );
    }

    #[test]
    fn test_non_finite_bound_is_rejected() {
        assert!(parse_bound("IMDBMax", "NaN").is_err());
        assert!(parse_bound("IMDBMax", "inf").is_err());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = MovieQuery::from_pairs([("Director", "Kubrick")]).unwrap_err();
        assert!(matches!(err, QueryParamError::UnknownField { .. }));
    }
}
