use serde::{Deserialize, Serialize};

/// Lifecycle states of a candidate application. Stored as lowercase text;
/// new rows default to `pending` at the database level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_lowercase() {
        let status: ApplicationStatus = serde_json::from_str("\"accepted\"").unwrap();
        assert_eq!(status, ApplicationStatus::Accepted);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!(serde_json::from_str::<ApplicationStatus>("\"archived\"").is_err());
    }

    #[test]
    fn test_as_str_matches_serde_form() {
        let json = serde_json::to_string(&ApplicationStatus::Reviewed).unwrap();
        assert_eq!(json, format!("\"{}\"", ApplicationStatus::Reviewed.as_str()));
    }
}
