//! Movie entity <-> model mapper

use sqlx::mysql::MySqlArguments;
use sqlx::query::Query;
use sqlx::MySql;

use movies_core::entities::{Movie, MoviePatch};
use movies_core::error::DomainError;
use movies_core::value_objects::{MovieId, Patch};

use crate::models::MovieModel;

type MySqlQuery<'q> = Query<'q, MySql, MySqlArguments>;

/// Convert MovieModel to Movie entity
impl From<MovieModel> for Movie {
    fn from(model: MovieModel) -> Self {
        Movie {
            id: MovieId::from(model.id),
            title: model.title,
            genre: model.genre,
            year: model.year,
            rating: model.rating,
        }
    }
}

/// Values for inserting a movie: always five columns in table order
pub struct MovieInsert<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub genre: Option<&'a str>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
}

impl<'a> MovieInsert<'a> {
    pub const SQL: &'static str =
        "INSERT INTO movies (id, title, genre, year, rating) VALUES (?, ?, ?, ?, ?)";

    pub fn new(movie: &'a Movie) -> Self {
        Self {
            id: movie.id.as_str(),
            title: &movie.title,
            genre: movie.genre.as_deref(),
            year: movie.year,
            rating: movie.rating,
        }
    }

    /// Bind the five values, absent optionals as NULL
    pub fn bind(self, query: MySqlQuery<'a>) -> MySqlQuery<'a> {
        query
            .bind(self.id)
            .bind(self.title)
            .bind(self.genre)
            .bind(self.year)
            .bind(self.rating)
    }
}

/// A bound value for one column; `None` writes NULL
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Text(Option<String>),
    Int(Option<i32>),
    Decimal(Option<f64>),
}

/// One `column = ?` clause of an UPDATE
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: &'static str,
    pub value: ColumnValue,
}

/// Partial UPDATE assembled from the supplied fields of a patch
///
/// Columns appear in the fixed order title, genre, year, rating. The id is
/// bound last, for the WHERE clause. Nothing user-supplied ever reaches the
/// SQL text.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieUpdate {
    assignments: Vec<Assignment>,
    id: String,
}

impl MovieUpdate {
    /// Build the update, rejecting a patch with no supplied field
    pub fn new(id: &MovieId, patch: &MoviePatch) -> Result<Self, DomainError> {
        let mut assignments = Vec::with_capacity(4);

        if let Patch::Set(value) = &patch.title {
            assignments.push(Assignment {
                column: "title",
                value: ColumnValue::Text(value.clone()),
            });
        }
        if let Patch::Set(value) = &patch.genre {
            assignments.push(Assignment {
                column: "genre",
                value: ColumnValue::Text(value.clone()),
            });
        }
        if let Patch::Set(value) = patch.year {
            assignments.push(Assignment {
                column: "year",
                value: ColumnValue::Int(value),
            });
        }
        if let Patch::Set(value) = patch.rating {
            assignments.push(Assignment {
                column: "rating",
                value: ColumnValue::Decimal(value),
            });
        }

        if assignments.is_empty() {
            return Err(DomainError::EmptyUpdate);
        }

        Ok(Self {
            assignments,
            id: id.as_str().to_string(),
        })
    }

    /// Supplied columns with their values, in bind order
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Value bound for the WHERE clause
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `UPDATE movies SET a = ?, b = ? WHERE id = ?`
    pub fn sql(&self) -> String {
        let set = self
            .assignments
            .iter()
            .map(|a| format!("{} = ?", a.column))
            .collect::<Vec<_>>()
            .join(", ");
        format!("UPDATE movies SET {set} WHERE id = ?")
    }

    /// Bind every assignment value, then the id
    pub fn bind(self, query: MySqlQuery<'_>) -> MySqlQuery<'_> {
        let query = self
            .assignments
            .into_iter()
            .fold(query, |query, assignment| match assignment.value {
                ColumnValue::Text(v) => query.bind(v),
                ColumnValue::Int(v) => query.bind(v),
                ColumnValue::Decimal(v) => query.bind(v),
            });
        query.bind(self.id)
    }
}
