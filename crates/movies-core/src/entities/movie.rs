//! Movie entity - the only record the service stores

use crate::error::DomainError;
use crate::value_objects::{MovieId, Patch};

/// Round a rating to the one fractional digit the store keeps
#[inline]
pub fn round_rating(rating: f64) -> f64 {
    (rating * 10.0).round() / 10.0
}

/// Movie entity
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
}

impl Movie {
    /// Create a new Movie with a freshly generated id
    pub fn new(
        title: String,
        genre: Option<String>,
        year: Option<i32>,
        rating: Option<f64>,
    ) -> Result<Self, DomainError> {
        Self::validate_title(&title)?;
        Ok(Self {
            id: MovieId::generate(),
            title,
            genre,
            year,
            rating: rating.map(round_rating),
        })
    }

    /// Titles are mandatory and must not be empty
    pub fn validate_title(title: &str) -> Result<(), DomainError> {
        if title.is_empty() {
            return Err(DomainError::ValidationError("title is required".to_string()));
        }
        Ok(())
    }

    /// Apply a partial update in place
    pub fn apply(&mut self, patch: &MoviePatch) -> Result<(), DomainError> {
        patch.validate()?;

        if let Patch::Set(Some(title)) = &patch.title {
            self.title.clone_from(title);
        }
        patch.genre.apply_to(&mut self.genre);
        patch.year.apply_to(&mut self.year);
        patch.rating.apply_to(&mut self.rating);
        Ok(())
    }
}

/// Partial update of a movie: only `Set` fields are written
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Patch<String>,
    pub genre: Patch<String>,
    pub year: Patch<i32>,
    pub rating: Patch<f64>,
}

impl MoviePatch {
    /// Build a patch, normalizing the rating to one fractional digit
    pub fn new(
        title: Patch<String>,
        genre: Patch<String>,
        year: Patch<i32>,
        rating: Patch<f64>,
    ) -> Self {
        Self {
            title,
            genre,
            year,
            rating: rating.map(round_rating),
        }
    }

    /// True when no field was supplied
    pub fn is_empty(&self) -> bool {
        !(self.title.is_set() || self.genre.is_set() || self.year.is_set() || self.rating.is_set())
    }

    /// Reject no-op patches and patches that would null or empty the title
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.is_empty() {
            return Err(DomainError::EmptyUpdate);
        }
        match &self.title {
            Patch::Unchanged => Ok(()),
            Patch::Set(None) => Err(DomainError::ValidationError(
                "title cannot be null".to_string(),
            )),
            Patch::Set(Some(title)) => Movie::validate_title(title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Movie {
        Movie::new("Dune".to_string(), None, Some(2021), Some(8.5)).unwrap()
    }

    #[test]
    fn test_new_generates_distinct_ids() {
        assert_ne!(dune().id, dune().id);
    }

    #[test]
    fn test_new_rejects_empty_title() {
        let err = Movie::new(String::new(), None, None, None).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_rating_rounded_to_one_digit() {
        let movie = Movie::new("Heat".to_string(), None, None, Some(8.26)).unwrap();
        assert_eq!(movie.rating, Some(8.3));
        assert_eq!(round_rating(9.0), 9.0);
    }

    #[test]
    fn test_apply_changes_only_supplied_fields() {
        let mut movie = dune();
        let patch = MoviePatch::new(
            Patch::Unchanged,
            Patch::Set(Some("Sci-Fi".to_string())),
            Patch::Unchanged,
            Patch::Set(Some(9.0)),
        );
        movie.apply(&patch).unwrap();

        assert_eq!(movie.title, "Dune");
        assert_eq!(movie.genre.as_deref(), Some("Sci-Fi"));
        assert_eq!(movie.year, Some(2021));
        assert_eq!(movie.rating, Some(9.0));
    }

    #[test]
    fn test_apply_explicit_null_clears_field() {
        let mut movie = dune();
        let patch = MoviePatch {
            year: Patch::Set(None),
            ..MoviePatch::default()
        };
        movie.apply(&patch).unwrap();
        assert_eq!(movie.year, None);
    }

    #[test]
    fn test_empty_patch_is_rejected() {
        let patch = MoviePatch::default();
        assert!(patch.is_empty());
        assert!(matches!(patch.validate(), Err(DomainError::EmptyUpdate)));

        let mut movie = dune();
        let before = movie.clone();
        assert!(movie.apply(&patch).is_err());
        assert_eq!(movie, before);
    }

    #[test]
    fn test_title_cannot_be_nulled_or_emptied() {
        let nulled = MoviePatch {
            title: Patch::Set(None),
            ..MoviePatch::default()
        };
        assert!(nulled.validate().unwrap_err().is_validation());

        let emptied = MoviePatch {
            title: Patch::Set(Some(String::new())),
            ..MoviePatch::default()
        };
        assert!(emptied.validate().unwrap_err().is_validation());
    }
}
