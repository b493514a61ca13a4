//! Business logic services

pub mod context;
pub mod error;
pub mod shortener;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use shortener::ShortenerService;
