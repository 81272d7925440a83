// src/collections/movie_collection.rs
//
// Movie store keyed by the id each Movie carries

use log::debug;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::Movie;

/// Optional criteria for `MovieCollection::find_movies`
///
/// A movie matches when ANY supplied, non-empty criterion equals its field.
/// Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieQuery {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub release_date: Option<String>,
}

impl MovieQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn release_date(mut self, release_date: impl Into<String>) -> Self {
        self.release_date = Some(release_date.into());
        self
    }

    fn matches(&self, movie: &Movie) -> bool {
        fn criterion(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|v| !v.is_empty())
        }

        criterion(&self.title) == Some(movie.title())
            || criterion(&self.genre) == Some(movie.genre())
            || criterion(&self.release_date) == Some(movie.release_date())
    }
}

/// In-memory movie catalog
///
/// Keys are movie ids; entries keep insertion order so "first match" is
/// deterministic.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct MovieCollection {
    movies: Vec<Movie>,
}

impl MovieCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a movie, replacing any stored movie with the same id
    pub fn add_movie(&mut self, movie: Movie) {
        let id = movie.id();
        match self.movies.iter_mut().find(|m| m.id() == id) {
            Some(existing) => {
                debug!("Replacing movie {} ({})", id, movie.title());
                *existing = movie;
            }
            None => {
                debug!("Adding movie {} ({})", id, movie.title());
                self.movies.push(movie);
            }
        }
    }

    /// Movies matching any non-empty criterion of the query, each at most once.
    ///
    /// A query with no non-empty criteria matches nothing, even when the
    /// collection is not empty.
    pub fn find_movies(&self, query: &MovieQuery) -> Vec<&Movie> {
        self.movies.iter().filter(|m| query.matches(m)).collect()
    }

    /// Remove the first movie whose title is exactly `title`
    /// Returns false when no movie has that title
    pub fn remove_movie(&mut self, title: &str) -> bool {
        match self.movies.iter().position(|m| m.title() == title) {
            Some(index) => {
                let removed = self.movies.remove(index);
                debug!("Removed movie {} ({})", removed.id(), removed.title());
                true
            }
            None => false,
        }
    }

    pub fn total_movies(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get_movie(&self, id: Uuid) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id() == id)
    }

    /// Mutable access for in-place edits; the setters keep the movie valid
    pub fn get_movie_mut(&mut self, id: Uuid) -> Option<&mut Movie> {
        self.movies.iter_mut().find(|m| m.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, genre: &str, release_date: &str) -> Movie {
        Movie::new(title, 1962, genre, release_date).unwrap()
    }

    fn titles(movies: &[&Movie]) -> Vec<String> {
        movies.iter().map(|m| m.title().to_string()).collect()
    }

    #[test]
    fn test_single_movie_lifecycle() {
        let mut collection = MovieCollection::new();
        let bond = movie("007", "Action", "1962-10-05");
        let id = bond.id();

        collection.add_movie(bond);
        assert_eq!(collection.total_movies(), 1);

        let found = collection.find_movies(&MovieQuery::new().title("007"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), id);

        assert!(collection.remove_movie("007"));
        assert_eq!(collection.total_movies(), 0);
        assert!(collection.is_empty());
    }

    #[test]
    fn test_count_tracks_additions() {
        let mut collection = MovieCollection::new();
        for i in 0..5 {
            collection.add_movie(movie(&format!("Movie {i}"), "Drama", "1962-10-05"));
        }
        assert_eq!(collection.total_movies(), 5);
    }

    #[test]
    fn test_adding_same_id_overwrites() {
        let mut collection = MovieCollection::new();
        let original = movie("007", "Action", "1962-10-05");
        let mut edited = original.clone();
        edited.set_genre("Spy").unwrap();

        collection.add_movie(original);
        collection.add_movie(edited);

        assert_eq!(collection.total_movies(), 1);
        let stored: Vec<_> = collection.iter().collect();
        assert_eq!(stored[0].genre(), "Spy");
    }

    #[test]
    fn test_remove_missing_title() {
        let mut collection = MovieCollection::new();
        collection.add_movie(movie("007", "Action", "1962-10-05"));

        assert!(!collection.remove_movie("Goldfinger"));
        assert!(!collection.remove_movie("007 "));
        assert_eq!(collection.total_movies(), 1);
    }

    #[test]
    fn test_remove_takes_only_first_match() {
        let mut collection = MovieCollection::new();
        let first = movie("Casino Royale", "Comedy", "1967-04-13");
        let second = movie("Casino Royale", "Action", "2006-11-14");
        let second_id = second.id();
        collection.add_movie(first);
        collection.add_movie(second);

        assert!(collection.remove_movie("Casino Royale"));
        assert_eq!(collection.total_movies(), 1);
        assert!(collection.get_movie(second_id).is_some());
    }

    #[test]
    fn test_find_matches_any_criterion_once() {
        let mut collection = MovieCollection::new();
        collection.add_movie(movie("007", "Action", "1962-10-05"));
        collection.add_movie(movie("Goldfinger", "Action", "1964-09-17"));
        collection.add_movie(movie("Psycho", "Horror", "1960-09-08"));

        let query = MovieQuery::new().title("007").genre("Action");
        assert_eq!(titles(&collection.find_movies(&query)), ["007", "Goldfinger"]);

        let query = MovieQuery::new().genre("Horror").release_date("1964-09-17");
        assert_eq!(titles(&collection.find_movies(&query)), ["Goldfinger", "Psycho"]);

        let query = MovieQuery::new().title("Dr. No");
        assert!(collection.find_movies(&query).is_empty());
    }

    #[test]
    fn test_find_without_criteria_is_empty() {
        let mut collection = MovieCollection::new();
        collection.add_movie(movie("007", "Action", "1962-10-05"));

        assert!(collection.find_movies(&MovieQuery::new()).is_empty());

        let blank = MovieQuery::new().title("").genre("").release_date("");
        assert!(collection.find_movies(&blank).is_empty());
    }

    #[test]
    fn test_edit_in_place_through_collection() {
        let mut collection = MovieCollection::new();
        let bond = movie("007", "Action", "1962-10-05");
        let id = bond.id();
        collection.add_movie(bond);

        let stored = collection.get_movie_mut(id).unwrap();
        stored.set_title("Dr. No").unwrap();
        assert!(stored.set_year(1000).is_err());

        let stored = collection.get_movie(id).unwrap();
        assert_eq!(stored.title(), "Dr. No");
        assert_eq!(stored.year(), 1962);
        assert_eq!(
            collection.find_movies(&MovieQuery::new().title("Dr. No")).len(),
            1
        );
    }
}
