//! Shorten and redirect handlers

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::{headers::Host, TypedHeader};
use shortly_service::{ShortenRequest, ShortenResponse, ShortenerService};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, MovedPermanently};
use crate::state::AppState;

/// Shorten a URL
///
/// POST /api/shorten
pub async fn shorten(
    State(state): State<AppState>,
    host: Option<TypedHeader<Host>>,
    ValidatedJson(request): ValidatedJson<ShortenRequest>,
) -> ApiResult<Json<ShortenResponse>> {
    let base_url = effective_base_url(&state, host.as_deref());

    let service = ShortenerService::new(state.service_context());
    let response = service.shorten(&request.url, &base_url).await?;
    Ok(Json(response))
}

/// Redirect a short code to its stored URL
///
/// GET /{short_code} - matched case-sensitively
pub async fn redirect(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
) -> ApiResult<MovedPermanently> {
    let service = ShortenerService::new(state.service_context());
    let target = service.resolve(&short_code).await?;
    Ok(MovedPermanently(target))
}

/// Prefix for short URLs: the configured base, or one derived from the
/// request's Host header.
fn effective_base_url(state: &AppState, host: Option<&Host>) -> String {
    if let Some(base) = &state.config().shortener.base_url {
        return base.clone();
    }
    match host {
        Some(host) => format!("http://{host}"),
        None => format!("http://{}", state.config().server.address()),
    }
}
