use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy)]
pub struct VpnCheckResponse {
    #[serde(rename = "isSuspicious")]
    pub is_suspicious: bool,
}
