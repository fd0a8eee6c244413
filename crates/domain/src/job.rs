use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Upstream job posting, kept opaque.
///
/// Only `title` and `description.text` are ever inspected; the record is
/// serialized back exactly as the provider sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Job(Value);

impl Job {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    pub fn description_text(&self) -> Option<&str> {
        self.0
            .get("description")
            .and_then(|d| d.get("text"))
            .and_then(Value::as_str)
    }

    /// Lowercased `title + " " + description.text`, the text keyword sets match against.
    pub fn searchable_text(&self) -> String {
        let title = self.title().unwrap_or_default();
        let description = self.description_text().unwrap_or_default();

        let mut text = String::with_capacity(title.len() + 1 + description.len());
        text.push_str(title);
        text.push(' ');
        text.push_str(description);
        text.to_lowercase()
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn into_raw(self) -> Value {
        self.0
    }
}

impl From<Value> for Job {
    fn from(raw: Value) -> Self {
        Self(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSearchResult {
    pub jobs: Vec<Job>,
    pub total: usize,
}

impl JobSearchResult {
    pub fn new(jobs: Vec<Job>) -> Self {
        let total = jobs.len();
        Self { jobs, total }
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
