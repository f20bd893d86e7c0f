//! Provider endpoints

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::db::Provider;
use crate::http::error::ApiError;
use crate::http::AppState;
use crate::view::render_table;

/// Header labels for the provider list
const PROVIDER_COLUMNS: [&str; 3] = ["First Name", "Last Name", "Specialty"];

/// Header labels for the specialty filter. The third column is spelled
/// "Speciality" here and "Specialty" on the list endpoint; both spellings
/// are part of the served contract.
const PROVIDER_FILTER_COLUMNS: [&str; 3] = ["First Name", "Last Name", "Speciality"];

#[derive(Deserialize)]
pub struct SpecialityParams {
    speciality: Option<String>,
}

fn provider_table(columns: &[&str], providers: &[Provider]) -> Html<String> {
    let rows: Vec<Vec<String>> = providers.iter().map(Provider::cells).collect();
    Html(render_table(columns, &rows))
}

/// GET /providers - all providers
async fn list_providers(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let providers = state
        .directory
        .list_providers()
        .await
        .map_err(|e| ApiError::database("Error retrieving providers data", e))?;

    Ok(provider_table(&PROVIDER_COLUMNS, &providers))
}

/// GET /providers/specialty?speciality=... - providers matching a specialty
async fn providers_by_speciality(
    State(state): State<AppState>,
    Query(params): Query<SpecialityParams>,
) -> Result<Html<String>, ApiError> {
    // An empty value counts as absent
    let speciality = params
        .speciality
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::missing_param("Speciality is required"))?;

    let providers = state
        .directory
        .providers_by_speciality(speciality)
        .await
        .map_err(|e| ApiError::database("Error retrieving providers data", e))?;

    Ok(provider_table(&PROVIDER_FILTER_COLUMNS, &providers))
}

/// Provider routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/providers", get(list_providers))
        .route("/providers/specialty", get(providers_by_speciality))
}
