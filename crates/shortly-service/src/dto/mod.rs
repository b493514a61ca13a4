//! Data transfer objects for API requests and responses

pub mod requests;
pub mod responses;

pub use requests::ShortenRequest;
pub use responses::{HealthResponse, ReadinessResponse, ShortenResponse};
