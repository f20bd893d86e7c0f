//! Patient endpoints

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::db::Patient;
use crate::http::error::ApiError;
use crate::http::AppState;
use crate::view::render_table;

/// Header labels for patient tables
const PATIENT_COLUMNS: [&str; 4] = ["Patient ID", "First Name", "Last Name", "Date of Birth"];

#[derive(Deserialize)]
pub struct FirstNameParams {
    first_name: Option<String>,
}

fn patient_table(patients: &[Patient]) -> Html<String> {
    let rows: Vec<Vec<String>> = patients.iter().map(Patient::cells).collect();
    Html(render_table(&PATIENT_COLUMNS, &rows))
}

/// GET /patients - all patients
async fn list_patients(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let patients = state
        .directory
        .list_patients()
        .await
        .map_err(|e| ApiError::database("Error retrieving patients data", e))?;

    Ok(patient_table(&patients))
}

/// GET /patients/first-name?first_name=... - patients matching a first name
async fn patients_by_first_name(
    State(state): State<AppState>,
    Query(params): Query<FirstNameParams>,
) -> Result<Html<String>, ApiError> {
    // An empty value counts as absent
    let first_name = params
        .first_name
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::missing_param("First name is required"))?;

    let patients = state
        .directory
        .patients_by_first_name(first_name)
        .await
        .map_err(|e| ApiError::database("Error retrieving patients data", e))?;

    Ok(patient_table(&patients))
}

/// Patient routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/patients", get(list_patients))
        .route("/patients/first-name", get(patients_by_first_name))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::db::testing::{patient, FakeDirectory};
    use crate::http::{build_router, AppState};

    fn app(store: FakeDirectory) -> axum::Router {
        build_router(AppState::new(Arc::new(store)))
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    fn seeded() -> FakeDirectory {
        FakeDirectory {
            patients: vec![
                patient(1, "Ana", "Smith", "1990-01-01"),
                patient(2, "Ben", "Jones", "1985-06-15"),
                patient(3, "Ana", "Lee", "2001-11-30"),
            ],
            ..FakeDirectory::default()
        }
    }

    #[tokio::test]
    async fn list_returns_all_rows() {
        let (status, body) = get(app(seeded()), "/patients").await;
        assert_eq!(status, StatusCode::OK);
        for header in ["Patient ID", "First Name", "Last Name", "Date of Birth"] {
            assert!(body.contains(&format!("<th>{}</th>", header)));
        }
        assert_eq!(body.matches("<td>").count(), 12);
        assert!(body.contains("<td>1985-06-15</td>"));
    }

    #[tokio::test]
    async fn list_with_empty_table_renders_headers_only() {
        let (status, body) = get(app(FakeDirectory::default()), "/patients").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<th>Patient ID</th>"));
        assert!(!body.contains("<td>"));
    }

    #[tokio::test]
    async fn filter_returns_exactly_matching_rows() {
        let (status, body) = get(app(seeded()), "/patients/first-name?first_name=Ana").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<td>Smith</td>"));
        assert!(body.contains("<td>Lee</td>"));
        assert!(!body.contains("<td>Jones</td>"));
    }

    #[tokio::test]
    async fn filter_example_row_renders_under_headers() {
        let store = FakeDirectory {
            patients: vec![patient(1, "Ana", "Smith", "1990-01-01")],
            ..FakeDirectory::default()
        };
        let (status, body) = get(app(store), "/patients/first-name?first_name=Ana").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(
            "<tr><td>1</td><td>Ana</td><td>Smith</td><td>1990-01-01</td></tr>"
        ));
    }

    #[tokio::test]
    async fn filter_without_param_is_400() {
        let (status, body) = get(app(seeded()), "/patients/first-name").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "First name is required");
    }

    #[tokio::test]
    async fn filter_with_only_unrelated_params_is_400() {
        let (status, body) =
            get(app(seeded()), "/patients/first-name?last_name=Smith&page=2").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "First name is required");
    }

    #[tokio::test]
    async fn filter_with_empty_param_is_400() {
        let (status, _) = get(app(seeded()), "/patients/first-name?first_name=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn query_failure_is_500_without_partial_table() {
        let (status, body) = get(app(FakeDirectory::failing()), "/patients").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Error retrieving patients data");

        let (status, body) =
            get(app(FakeDirectory::failing()), "/patients/first-name?first_name=Ana").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Error retrieving patients data");
    }
}
