//! Workout session input schema

use chrono::NaiveDate;
use serde_json::Value;

use super::validation::{FieldLoader, Schema, ValidationError};

/// Validated body of `POST /workoutsessions` and `PUT /workoutsessions/{id}`.
///
/// `member_id` is required on both, but updates never write it back.
/// It is not checked against existing members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSessionInput {
    pub member_id: i32,
    pub session_date: NaiveDate,
    /// Free-form, not parsed as a time of day
    pub session_time: String,
    pub activity: String,
}

impl Schema for WorkoutSessionInput {
    const FIELDS: &'static [&'static str] =
        &["member_id", "session_date", "session_time", "activity"];

    fn load(value: &Value) -> Result<Self, ValidationError> {
        let mut fields = FieldLoader::new(value, Self::FIELDS)?;
        let member_id = fields.integer("member_id");
        let session_date = fields.date("session_date");
        let session_time = fields.string("session_time");
        let activity = fields.string("activity");

        let record = (|| {
            Some(Self {
                member_id: member_id?,
                session_date: session_date?,
                session_time: session_time?,
                activity: activity?,
            })
        })();

        fields.finish(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldError;
    use serde_json::json;

    #[test]
    fn loads_valid_session() {
        let session = WorkoutSessionInput::load(&json!({
            "member_id": 3,
            "session_date": "2024-05-01",
            "session_time": "early-ish",
            "activity": "Rowing"
        }))
        .unwrap();

        assert_eq!(session.member_id, 3);
        assert_eq!(session.session_date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(session.session_time, "early-ish");
    }

    #[test]
    fn member_id_accepts_numeric_string() {
        let session = WorkoutSessionInput::load(&json!({
            "member_id": "42",
            "session_date": "2024-05-01",
            "session_time": "18:00",
            "activity": "Yoga"
        }))
        .unwrap();
        assert_eq!(session.member_id, 42);
    }

    #[test]
    fn member_id_truncates_fractional_number() {
        let session = WorkoutSessionInput::load(&json!({
            "member_id": 7.5,
            "session_date": "2024-05-01",
            "session_time": "18:00",
            "activity": "Rowing"
        }))
        .unwrap();
        assert_eq!(session.member_id, 7);
    }

    #[test]
    fn reports_every_bad_field() {
        let err = WorkoutSessionInput::load(&json!({
            "member_id": "abc",
            "session_date": "yesterday",
            "session_id": 9
        }))
        .unwrap_err();

        assert_eq!(err.field("member_id"), Some(&[FieldError::NotAnInteger][..]));
        assert_eq!(err.field("session_date"), Some(&[FieldError::NotADate][..]));
        assert_eq!(err.field("session_time"), Some(&[FieldError::Missing][..]));
        assert_eq!(err.field("activity"), Some(&[FieldError::Missing][..]));
        assert_eq!(err.field("session_id"), Some(&[FieldError::Unknown][..]));
    }
}
