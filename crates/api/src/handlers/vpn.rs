use crate::{dto::VpnCheckResponse, state::AppState, utils::client_ip};
use axum::{
    extract::{ConnectInfo, Request, State},
    Json,
};
use std::net::SocketAddr;
use tracing::{debug, instrument};

#[instrument(skip(state, request), name = "api_check_vpn")]
pub async fn check_vpn(State(state): State<AppState>, request: Request) -> Json<VpnCheckResponse> {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let ip = client_ip(request.headers(), peer);

    let is_suspicious = state.check_vpn.execute(&ip).await;
    debug!(client = %ip, is_suspicious, "VPN check completed");

    Json(VpnCheckResponse { is_suspicious })
}
