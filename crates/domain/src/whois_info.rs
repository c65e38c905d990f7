use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registration data of a domain. Every field is best effort: registries
/// differ in what they publish.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WhoisInfo {
    pub registrar: Option<String>,
    #[serde(default)]
    pub status: Vec<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub updated_date: Option<DateTime<Utc>>,
    pub expiration_date: Option<DateTime<Utc>>,
}

impl WhoisInfo {
    pub fn is_empty(&self) -> bool {
        self.registrar.is_none()
            && self.status.is_empty()
            && self.creation_date.is_none()
            && self.updated_date.is_none()
            && self.expiration_date.is_none()
    }
}
