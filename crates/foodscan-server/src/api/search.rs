use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Form, Json,
};
use foodscan_core::{LookupError, LookupResult};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::AppState;

#[derive(Debug, Default, Deserialize)]
pub(super) struct SearchForm {
    #[serde(default)]
    barcode: String,
}

/// Error body for `/search`: a single `error` field and nothing else.
#[derive(Debug, Serialize)]
pub(super) struct SearchError {
    error: String,
    #[serde(skip)]
    status: StatusCode,
}

impl From<LookupError> for SearchError {
    fn from(err: LookupError) -> Self {
        let status = match err {
            LookupError::InvalidBarcode { .. } => StatusCode::BAD_REQUEST,
            LookupError::ProductNotFound { .. } => StatusCode::NOT_FOUND,
        };
        Self {
            error: err.to_string(),
            status,
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// `POST /search` with a form-encoded `barcode` field.
///
/// A body that is not a readable form counts as an empty barcode.
pub(super) async fn search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> Result<Json<LookupResult>, SearchError> {
    let form = form.map_or_else(
        |rejection| {
            tracing::debug!(
                request_id = %req_id.0,
                error = %rejection,
                "unreadable search form; treating barcode as empty"
            );
            SearchForm::default()
        },
        |Form(form)| form,
    );

    match foodscan_off::lookup(&state.client, &form.barcode).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            tracing::info!(request_id = %req_id.0, error = %e, "search failed");
            Err(e.into())
        }
    }
}
