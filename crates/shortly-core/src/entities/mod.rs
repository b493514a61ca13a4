//! Domain entities

pub mod url_mapping;

pub use url_mapping::{UrlMapping, MAX_SHORT_CODE_LEN};
