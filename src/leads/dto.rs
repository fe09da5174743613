use serde::{Deserialize, Serialize};

/// Answers collected by the project quiz. Only name and email are hard
/// requirements; the quiz fills the rest step by step.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitLeadRequest {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub features: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Closed,
}

impl LeadStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Converted => "converted",
            LeadStatus::Closed => "closed",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateLeadStatusRequest {
    pub status: LeadStatus,
}

#[derive(Debug, Deserialize)]
pub struct LeadFilter {
    pub status: Option<LeadStatus>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

// The dashboard loads the whole list in one go.
fn default_limit() -> i64 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_lowercase_only() {
        let s: LeadStatus = serde_json::from_str("\"converted\"").unwrap();
        assert_eq!(s, LeadStatus::Converted);
        assert!(serde_json::from_str::<LeadStatus>("\"Converted\"").is_err());
        assert!(serde_json::from_str::<LeadStatus>("\"archived\"").is_err());
    }

    #[test]
    fn filter_defaults() {
        let f: LeadFilter = serde_json::from_str("{}").unwrap();
        assert!(f.status.is_none());
        assert_eq!(f.limit, 100);
        assert_eq!(f.offset, 0);
    }

    #[test]
    fn submit_defaults_optional_answers() {
        let req: SubmitLeadRequest =
            serde_json::from_str(r#"{"name":"Alice","email":"alice@x.com"}"#).unwrap();
        assert_eq!(req.project_type, "");
        assert_eq!(req.budget, "");
        assert!(req.company.is_none());
    }
}
