//! Filter to keep only movies in the selected genres.

use super::retain_selected;
use catalog::Movie;

/// Keeps movies whose major genre is one of `genres`.
///
/// An empty selection is no constraint at all. Movies with no genre are
/// dropped once any genre is selected.
pub fn filter_by_genre<'a, S: AsRef<str>>(movies: Vec<&'a Movie>, genres: &[S]) -> Vec<&'a Movie> {
    retain_selected(movies, genres, |movie| movie.major_genre.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;

    fn create_test_catalog() -> Catalog {
        Catalog::from_movies(vec![
            Movie::titled("Zoo").with_genre("Comedy"),
            Movie::titled("War").with_genre("Drama"),
            Movie::titled("Mystery Box"),
            Movie::titled("Heat").with_genre("Action"),
        ])
    }

    #[test]
    fn test_genre_filter() {
        let catalog = create_test_catalog();
        let movies: Vec<&Movie> = catalog.all().iter().collect();

        let filtered = filter_by_genre(movies, &["Drama", "Action"]);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title.as_deref(), Some("War"));
        assert_eq!(filtered[1].title.as_deref(), Some("Heat"));
    }

    #[test]
    fn test_empty_selection_is_identity() {
        let catalog = create_test_catalog();
        let movies: Vec<&Movie> = catalog.all().iter().collect();

        let filtered = filter_by_genre::<String>(movies.clone(), &[]);
        assert_eq!(filtered, movies);
    }

    #[test]
    fn test_genre_match_is_exact() {
        let catalog = create_test_catalog();
        let movies: Vec<&Movie> = catalog.all().iter().collect();

        assert!(filter_by_genre(movies, &["drama"]).is_empty());
    }
}
