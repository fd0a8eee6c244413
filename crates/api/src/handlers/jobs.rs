use crate::{
    dto::{ErrorResponse, JobSearchParams, QueryPairs},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use jobsponsored_domain::JobSearchResult;
use std::sync::Arc;
use tracing::{error, instrument};

pub const JOB_SEARCH_FAILED: &str = "Job search failed";

#[instrument(skip(state, pairs), name = "api_search_jobs")]
pub async fn search_jobs(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<Arc<JobSearchResult>>, (StatusCode, Json<ErrorResponse>)> {
    let query = JobSearchParams::from_pairs(&pairs).into_query();

    match state.search_jobs.execute(query).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            error!(error = %e, "Job search failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(JOB_SEARCH_FAILED)),
            ))
        }
    }
}
