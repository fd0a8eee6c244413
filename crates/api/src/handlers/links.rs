use crate::{
    dto::{GovtLinksParams, QueryPairs},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use jobsponsored_domain::GovtLinks;

pub async fn get_govt_links(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Json<GovtLinks> {
    let params = GovtLinksParams::from_pairs(&pairs);
    Json(state.get_govt_links.execute(params.keyword.as_deref()))
}
