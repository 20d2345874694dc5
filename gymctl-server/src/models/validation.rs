//! Validation errors and the field loader shared by every schema
//!
//! Input is checked field by field in a single pass; every problem is
//! collected before the request is rejected.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Key used for errors that concern the payload as a whole
pub const SCHEMA_KEY: &str = "_schema";

/// A single problem with one input field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Required field absent from the payload
    Missing,

    /// Field present but `null`
    Null,

    /// Expected a JSON string
    NotAString,

    /// Expected an integer (or a string holding one)
    NotAnInteger,

    /// Expected an ISO `YYYY-MM-DD` date string
    NotADate,

    /// Field is not part of the schema
    Unknown,

    /// Payload is JSON but not an object
    InvalidInputType,

    /// Payload could not be parsed as JSON
    InvalidJson,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Missing => "Missing data for required field.",
            Self::Null => "Field may not be null.",
            Self::NotAString => "Not a valid string.",
            Self::NotAnInteger => "Not a valid integer.",
            Self::NotADate => "Not a valid date.",
            Self::Unknown => "Unknown field.",
            Self::InvalidInputType => "Invalid input type.",
            Self::InvalidJson => "Invalid JSON body.",
        };
        f.write_str(message)
    }
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Aggregated field errors, serialized as `{field: [message, ...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationError {
    fields: BTreeMap<String, Vec<FieldError>>,
}

impl ValidationError {
    /// Error for a body that is not valid JSON.
    pub fn invalid_json() -> Self {
        Self::single(SCHEMA_KEY, FieldError::InvalidJson)
    }

    /// Error for a JSON body that is not an object.
    pub fn invalid_input_type() -> Self {
        Self::single(SCHEMA_KEY, FieldError::InvalidInputType)
    }

    fn single(field: &str, error: FieldError) -> Self {
        let mut errors = Self::default();
        errors.push(field, error);
        errors
    }

    /// Record an error against `field`.
    pub fn push(&mut self, field: &str, error: FieldError) {
        self.fields.entry(field.to_owned()).or_default().push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Errors recorded for `field`, if any.
    pub fn field(&self, field: &str) -> Option<&[FieldError]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Names of the offending fields, sorted.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, errors) in &self.fields {
            for error in errors {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{}: {}", field, error)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// A record type that can be loaded from untrusted JSON.
pub trait Schema: Sized {
    /// Fields accepted on input. Anything else is reported as unknown.
    const FIELDS: &'static [&'static str];

    /// Validate `value` and build the record, or report every field error.
    fn load(value: &Value) -> Result<Self, ValidationError>;
}

/// Reads typed fields out of a JSON object while collecting errors.
pub struct FieldLoader<'a> {
    object: &'a Map<String, Value>,
    errors: ValidationError,
}

impl<'a> FieldLoader<'a> {
    /// Start loading `value`, flagging any key not listed in `known`.
    ///
    /// Fails immediately when `value` is not a JSON object.
    pub fn new(value: &'a Value, known: &[&str]) -> Result<Self, ValidationError> {
        let object = value
            .as_object()
            .ok_or_else(ValidationError::invalid_input_type)?;

        let mut errors = ValidationError::default();
        for key in object.keys() {
            if !known.contains(&key.as_str()) {
                errors.push(key, FieldError::Unknown);
            }
        }

        Ok(Self { object, errors })
    }

    fn required(&mut self, field: &str) -> Option<&'a Value> {
        let object = self.object;
        match object.get(field) {
            None => {
                self.errors.push(field, FieldError::Missing);
                None
            }
            Some(Value::Null) => {
                self.errors.push(field, FieldError::Null);
                None
            }
            Some(value) => Some(value),
        }
    }

    /// Required string field. Numbers are not coerced.
    pub fn string(&mut self, field: &str) -> Option<String> {
        let value = self.required(field)?;
        match value.as_str() {
            Some(s) => Some(s.to_owned()),
            None => {
                self.errors.push(field, FieldError::NotAString);
                None
            }
        }
    }

    /// Required integer field.
    ///
    /// Accepts JSON integers, floats (truncated toward zero) and strings
    /// holding a decimal integer. Booleans and values outside `i32` are
    /// rejected.
    pub fn integer(&mut self, field: &str) -> Option<i32> {
        let value = self.required(field)?;
        let parsed = match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
                .and_then(|i| i32::try_from(i).ok()),
            Value::String(s) => s.trim().parse::<i32>().ok(),
            _ => None,
        };

        if parsed.is_none() {
            self.errors.push(field, FieldError::NotAnInteger);
        }
        parsed
    }

    /// Required calendar date in ISO `YYYY-MM-DD` form.
    pub fn date(&mut self, field: &str) -> Option<NaiveDate> {
        let value = self.required(field)?;
        let parsed = value
            .as_str()
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());

        if parsed.is_none() {
            self.errors.push(field, FieldError::NotADate);
        }
        parsed
    }

    /// Finish loading: the record when no error was recorded, otherwise
    /// every collected error.
    pub fn finish<T>(self, record: Option<T>) -> Result<T, ValidationError> {
        match record {
            Some(record) if self.errors.is_empty() => Ok(record),
            _ => Err(self.errors),
        }
    }
}
