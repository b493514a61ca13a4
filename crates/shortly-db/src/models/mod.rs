//! Database models

pub mod url_mapping;

pub use url_mapping::UrlMappingModel;
