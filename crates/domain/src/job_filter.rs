//! Keyword filters applied to upstream job listings.
//!
//! Matching is a case-insensitive substring search over
//! `title + " " + description.text`.

use crate::job::Job;
use crate::job_query::Tier;
use aho_corasick::AhoCorasick;
use std::sync::LazyLock;

pub const VISA_KEYWORDS: [&str; 5] = [
    "visa sponsorship",
    "lmia",
    "work permit",
    "sponsorship available",
    "eligible to work",
];

pub const NO_EXPERIENCE_KEYWORDS: [&str; 5] = [
    "no experience",
    "entry level",
    "trainee",
    "apprentice",
    "beginner",
];

/// Number of jobs returned to the free tier.
pub const FREE_TIER_LIMIT: usize = 10;

static VISA_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::new(VISA_KEYWORDS).expect("visa keyword patterns are valid")
});

static NO_EXPERIENCE_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::new(NO_EXPERIENCE_KEYWORDS).expect("no-experience keyword patterns are valid")
});

#[inline]
pub fn mentions_visa(text: &str) -> bool {
    VISA_MATCHER.is_match(text)
}

#[inline]
pub fn mentions_no_experience(text: &str) -> bool {
    NO_EXPERIENCE_MATCHER.is_match(text)
}

/// Keeps jobs mentioning at least one visa keyword.
pub fn visa_filter(jobs: Vec<Job>) -> Vec<Job> {
    jobs.into_iter()
        .filter(|job| mentions_visa(&job.searchable_text()))
        .collect()
}

/// Premium narrowing: a job needs a no-experience keyword OR a visa keyword.
///
/// Run after [`visa_filter`], the visa branch retains everything.
pub fn premium_filter(jobs: Vec<Job>) -> Vec<Job> {
    jobs.into_iter()
        .filter(|job| {
            let text = job.searchable_text();
            mentions_no_experience(&text) || mentions_visa(&text)
        })
        .collect()
}

/// Full filter chain for one tier, preserving upstream order.
pub fn apply(jobs: Vec<Job>, tier: Tier) -> Vec<Job> {
    let mut jobs = visa_filter(jobs);

    match tier {
        Tier::Premium => jobs = premium_filter(jobs),
        Tier::Free => jobs.truncate(FREE_TIER_LIMIT),
    }

    jobs
}
