//! Validation rules and their evaluation.

use std::fmt;

/// A raw field value, tagged with the kind it was declared as.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Convert raw form text to a number.
    ///
    /// Surrounding whitespace is ignored, blank text reads as `0`, and text
    /// that is not a number reads as `NaN` so range checks reject it. The
    /// rest follows `str::parse::<f64>`: exponents and `inf` are read,
    /// hex literals such as `0x5` are not.
    pub fn parse_number(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return FieldValue::Number(0.0);
        }
        FieldValue::Number(trimmed.parse::<f64>().unwrap_or(f64::NAN))
    }

    /// The value rendered as text, as `required` sees it.
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Number(n) => n.to_string(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

/// Constraints for one field value.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationRule {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Numeric value must have no fractional part.
    pub integer: bool,
}

impl ValidationRule {
    /// A rule with no constraints; every value passes.
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
            integer: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn integer(mut self) -> Self {
        self.integer = true;
        self
    }
}

/// A single unmet constraint.
#[derive(Clone, Debug, PartialEq)]
pub enum Violation {
    Required,
    TooShort { min: usize, actual: usize },
    TooLong { max: usize, actual: usize },
    /// Numeric constraints were set but the value is not a number.
    NotANumber,
    NotAnInteger,
    BelowMin { min: f64 },
    AboveMax { max: f64 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Required => write!(f, "is required"),
            Violation::TooShort { min, actual } => {
                write!(f, "needs at least {} characters (got {})", min, actual)
            }
            Violation::TooLong { max, actual } => {
                write!(f, "allows at most {} characters (got {})", max, actual)
            }
            Violation::NotANumber => write!(f, "is not a number"),
            Violation::NotAnInteger => write!(f, "must be a whole number"),
            Violation::BelowMin { min } => write!(f, "must be at least {}", min),
            Violation::AboveMax { max } => write!(f, "must be at most {}", max),
        }
    }
}

/// Every constraint of `rule` that the value fails, in declaration order.
pub fn check(rule: &ValidationRule) -> Vec<Violation> {
    let mut violations = Vec::new();

    // Numbers always render to non-empty text, so `required` never rejects
    // a numeric value on its own.
    if rule.required && rule.value.to_text().trim().is_empty() {
        violations.push(Violation::Required);
    }

    match &rule.value {
        FieldValue::Text(text) => {
            let actual = text.chars().count();
            if let Some(min) = rule.min_length {
                if actual < min {
                    violations.push(Violation::TooShort { min, actual });
                }
            }
            if let Some(max) = rule.max_length {
                if actual > max {
                    violations.push(Violation::TooLong { max, actual });
                }
            }
        }
        FieldValue::Number(n) => {
            let numeric_checks = rule.min.is_some() || rule.max.is_some() || rule.integer;
            if n.is_nan() {
                if numeric_checks {
                    violations.push(Violation::NotANumber);
                }
                return violations;
            }
            if rule.integer && n.fract() != 0.0 {
                violations.push(Violation::NotAnInteger);
            }
            if let Some(min) = rule.min {
                if *n < min {
                    violations.push(Violation::BelowMin { min });
                }
            }
            if let Some(max) = rule.max {
                if *n > max {
                    violations.push(Violation::AboveMax { max });
                }
            }
        }
    }

    violations
}

/// True if the value meets every applicable constraint.
pub fn validate(rule: &ValidationRule) -> bool {
    check(rule).is_empty()
}
