//! Axum extractors for request handling
//!
//! Path and JSON body extraction with the rejections mapped onto `ApiError`.

mod path;
mod validated;

pub use path::MovieIdPath;
pub use validated::{JsonBody, ValidatedJson};
