use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// Web search result. Hits keep the upstream ranking order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: String,
    #[serde(default)]
    pub hits: Vec<SearchHit>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SearchResult {
    pub fn new(query: impl Into<String>, hits: Vec<SearchHit>) -> Self {
        Self {
            query: query.into(),
            hits,
            error: None,
        }
    }

    pub fn failed(query: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            hits: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
