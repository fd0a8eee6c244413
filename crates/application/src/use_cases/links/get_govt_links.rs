use jobsponsored_domain::job_query::DEFAULT_KEYWORD;
use jobsponsored_domain::GovtLinks;

pub struct GetGovtLinksUseCase;

impl GetGovtLinksUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, keyword: Option<&str>) -> GovtLinks {
        GovtLinks::for_keyword(keyword.unwrap_or(DEFAULT_KEYWORD))
    }
}

impl Default for GetGovtLinksUseCase {
    fn default() -> Self {
        Self::new()
    }
}
