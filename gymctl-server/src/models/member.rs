//! Member input schema

use serde_json::Value;

use super::validation::{FieldLoader, Schema, ValidationError};

/// Validated body of `POST /members` and `PUT /members/{id}`.
///
/// `age` is free text: the interface has always taken it as a string and
/// numbers are rejected rather than coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInput {
    pub name: String,
    pub age: String,
}

impl Schema for MemberInput {
    const FIELDS: &'static [&'static str] = &["name", "age"];

    fn load(value: &Value) -> Result<Self, ValidationError> {
        let mut fields = FieldLoader::new(value, Self::FIELDS)?;
        let name = fields.string("name");
        let age = fields.string("age");

        fields.finish(name.zip(age).map(|(name, age)| Self { name, age }))
    }
}
