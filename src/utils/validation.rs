use crate::utils::error::{CodecError, Result};
use serde::Serialize;
use std::fmt;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// What went wrong with a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Required,
    Empty,
    Invalid,
}

/// A single field-level validation failure, addressed by its dotted wire path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
        }
    }

    pub fn required(path: impl Into<String>) -> Self {
        Self::new(path, ViolationKind::Required, "must be present")
    }

    pub fn empty(path: impl Into<String>) -> Self {
        Self::new(path, ViolationKind::Empty, "must not be empty")
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Every violation found in one validation pass, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrorSet {
    violations: Vec<Violation>,
}

impl ValidationErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Paths of all violations, in order. Handy for assertions and log lines.
    pub fn paths(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.path.as_str()).collect()
    }

    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CodecError::ValidationFailed(self))
        }
    }
}

impl From<Vec<Violation>> for ValidationErrorSet {
    fn from(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

impl fmt::Display for ValidationErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrorSet {}

/// Present and non-empty without trimming. `None` when the value passes.
pub fn check_present_non_empty(path: &str, value: Option<&str>) -> Option<Violation> {
    match value {
        None => Some(Violation::required(path)),
        Some(v) if v.is_empty() => Some(Violation::empty(path)),
        Some(_) => None,
    }
}

/// Present and non-blank once surrounding whitespace is removed.
pub fn check_present_non_blank(path: &str, value: Option<&str>) -> Option<Violation> {
    match value {
        None => Some(Violation::required(path)),
        Some(v) if v.trim().is_empty() => Some(Violation::new(
            path,
            ViolationKind::Empty,
            "must not be empty or whitespace-only",
        )),
        Some(_) => None,
    }
}

pub fn validate_range<T: PartialOrd + fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CodecError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("Value {} must be between {} and {}", value, min, max),
        });
    }
    Ok(())
}

/// ISO 4217 shape: exactly three upper-case ASCII letters.
pub fn is_currency_code(value: &str) -> bool {
    value.len() == 3 && value.chars().all(|ch| ch.is_ascii_uppercase())
}

pub fn validate_currency_code(field_name: &str, value: &str) -> Result<()> {
    if !is_currency_code(value) {
        return Err(CodecError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("'{}' is not a three-letter upper-case currency code", value),
        });
    }
    Ok(())
}
