use super::query::param;

/// Query string of `GET /api/govt-links`.
#[derive(Debug, Default)]
pub struct GovtLinksParams {
    pub keyword: Option<String>,
}

impl GovtLinksParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            keyword: param(pairs, "keyword"),
        }
    }
}
