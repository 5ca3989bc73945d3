//! Free-text title search.
//!
//! Search is the first stage of every query: it seeds the pipeline from
//! the full catalog.

use catalog::{Catalog, Movie};

/// Movies whose title contains `terms`, ignoring case.
///
/// `None` or an empty string means "no search constraint" and returns the
/// whole catalog, not an empty result. Movies without a title never match
/// a non-empty search.
///
/// ## Case folding
/// Both sides are folded with `str::to_lowercase` (full Unicode lowercase
/// mapping, no locale tailoring), so "ÉTÉ" matches "été" on every host.
pub fn search<'a>(catalog: &'a Catalog, terms: Option<&str>) -> Vec<&'a Movie> {
    let candidates: Vec<&Movie> = catalog.all().iter().collect();

    match terms {
        Some(terms) if !terms.is_empty() => filter_by_title(candidates, terms),
        _ => candidates,
    }
}

/// Keep candidates whose title contains `terms`, ignoring case
pub fn filter_by_title<'a>(movies: Vec<&'a Movie>, terms: &str) -> Vec<&'a Movie> {
    if terms.is_empty() {
        return movies;
    }

    let needle = terms.to_lowercase();
    movies
        .into_iter()
        .filter(|movie| {
            movie
                .title
                .as_deref()
                .is_some_and(|title| title.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_catalog() -> Catalog {
        Catalog::from_movies(vec![
            Movie::titled("Zoo"),
            Movie::titled("War"),
            Movie::titled("Zoolander"),
            Movie {
                title: None,
                ..Movie::titled("")
            },
            Movie::titled("L'Été meurtrier"),
        ])
    }

    fn titles(movies: &[&Movie]) -> Vec<String> {
        movies
            .iter()
            .map(|m| m.title.clone().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = create_test_catalog();
        let results = search(&catalog, Some("ZO"));
        assert_eq!(titles(&results), ["Zoo", "Zoolander"]);
    }

    #[test]
    fn test_no_terms_returns_everything() {
        let catalog = create_test_catalog();

        assert_eq!(search(&catalog, None).len(), 5);
        assert_eq!(search(&catalog, Some("")).len(), 5);
    }

    #[test]
    fn test_untitled_movies_never_match() {
        let catalog = create_test_catalog();
        let results = search(&catalog, Some("o"));
        assert!(results.iter().all(|m| m.title.is_some()));
    }

    #[test]
    fn test_non_ascii_folding() {
        let catalog = create_test_catalog();
        let results = search(&catalog, Some("ÉTÉ"));
        assert_eq!(titles(&results), ["L'Été meurtrier"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let catalog = create_test_catalog();
        assert!(search(&catalog, Some("xyz")).is_empty());
    }
}
