//! Repository implementations

pub mod error;
pub mod url_mapping;

pub use url_mapping::PgUrlRepository;
