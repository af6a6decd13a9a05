//! # movies-service
//!
//! Application layer containing the movie use cases and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    CreateMovieRequest, HealthResponse, MovieResponse, ReadinessResponse, UpdateMovieRequest,
};
pub use services::{MovieService, ServiceContext, ServiceResult};
