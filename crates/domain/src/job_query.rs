use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_KEYWORD: &str = "developer";
pub const DEFAULT_COUNTRY: &str = "ca";

/// Free vs premium behaviour of the job search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tier {
    #[default]
    Free,
    Premium,
}

impl Tier {
    /// Only the exact flag value `"true"` selects the premium tier.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("true") => Tier::Premium,
            _ => Tier::Free,
        }
    }

    pub fn is_premium(&self) -> bool {
        matches!(self, Tier::Premium)
    }

    pub fn as_flag(&self) -> &'static str {
        match self {
            Tier::Free => "false",
            Tier::Premium => "true",
        }
    }
}

/// Normalized job search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    pub keyword: Arc<str>,
    pub country: Arc<str>,
    pub tier: Tier,
}

impl JobQuery {
    pub fn new(keyword: impl Into<Arc<str>>, country: impl Into<Arc<str>>, tier: Tier) -> Self {
        Self {
            keyword: keyword.into(),
            country: country.into(),
            tier,
        }
    }

    /// Applies the documented defaults to missing parameters.
    pub fn from_params(
        keyword: Option<String>,
        country: Option<String>,
        is_premium: Option<&str>,
    ) -> Self {
        Self::new(
            keyword.unwrap_or_else(|| DEFAULT_KEYWORD.to_string()),
            country.unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
            Tier::from_flag(is_premium),
        )
    }

    pub fn cache_key(&self) -> CacheKey {
        CacheKey {
            keyword: Arc::clone(&self.keyword),
            country: Arc::clone(&self.country),
            tier: self.tier,
        }
    }
}

impl Default for JobQuery {
    fn default() -> Self {
        Self::from_params(None, None, None)
    }
}

/// Cache key derived from `(keyword, country, tier)`.
///
/// Hashed structurally, so keywords containing the `-` separator never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub keyword: Arc<str>,
    pub country: Arc<str>,
    pub tier: Tier,
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.keyword, self.country, self.tier.as_flag())
    }
}
