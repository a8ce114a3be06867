//! Task record and the input used to create or replace one

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Persisted task.
///
/// `id`, `created_at` and `updated_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Mutable fields of a task, replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
}

impl NewTask {
    /// Build from raw request fields, parsing `due_date` as RFC 3339.
    ///
    /// The offset is required and the instant is normalised to UTC.
    pub fn parse(
        title: String,
        description: String,
        due_date: &str,
    ) -> Result<Self, ValidationError> {
        let due_date = DateTime::parse_from_rfc3339(due_date)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "due_date",
                reason: "expected an RFC 3339 date-time",
            })?
            .with_timezone(&Utc);

        Ok(Self {
            title,
            description,
            due_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_utc_date() {
        let task = NewTask::parse("Buy milk".into(), "2%".into(), "2025-01-01T10:00:00Z").unwrap();
        assert_eq!(task.due_date, Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap());
        assert_eq!(task.title, "Buy milk");
    }

    #[test]
    fn offset_is_normalised_to_utc() {
        let task = NewTask::parse("t".into(), String::new(), "2025-01-01T12:30:00+02:30").unwrap();
        assert_eq!(task.due_date, Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn rejects_bad_dates() {
        for raw in ["not-a-date", "", "2025-01-01", "2025-01-01T10:00:00"] {
            let err = NewTask::parse("t".into(), String::new(), raw).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { field: "due_date", .. }),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn task_serializes_rfc3339() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
        let task = Task {
            id: 7,
            title: "Buy milk".into(),
            description: "2%".into(),
            due_date: at,
            created_at: at,
            updated_at: at,
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["due_date"], "2025-01-01T10:00:00Z");
        assert_eq!(json["created_at"], "2025-01-01T10:00:00Z");
        assert_eq!(json["description"], "2%");
    }
}
