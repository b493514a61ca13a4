//! Model ↔ entity mappers

pub mod url_mapping;
