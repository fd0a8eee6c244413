use jobsponsored_domain::JobQuery;

use super::query::param;

/// Query string of `GET /api/jobs`.
#[derive(Debug, Default)]
pub struct JobSearchParams {
    pub keyword: Option<String>,
    pub country: Option<String>,
    pub is_premium: Option<String>,
}

impl JobSearchParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            keyword: param(pairs, "keyword"),
            country: param(pairs, "country"),
            is_premium: param(pairs, "isPremium"),
        }
    }

    pub fn into_query(self) -> JobQuery {
        JobQuery::from_params(self.keyword, self.country, self.is_premium.as_deref())
    }
}
