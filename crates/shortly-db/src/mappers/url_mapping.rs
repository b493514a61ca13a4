//! UrlMapping model ↔ entity conversion

use shortly_core::UrlMapping;

use crate::models::UrlMappingModel;

impl From<UrlMappingModel> for UrlMapping {
    fn from(model: UrlMappingModel) -> Self {
        Self {
            short_code: model.short_code,
            normalized_url: model.original_url,
            created_at: model.created_at,
        }
    }
}
