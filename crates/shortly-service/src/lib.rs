//! # shortly-service
//!
//! Application layer containing the shortening protocol, DTOs, and the
//! service dependency container.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{HealthResponse, ReadinessResponse, ShortenRequest, ShortenResponse};
pub use services::{
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, ShortenerService,
};
