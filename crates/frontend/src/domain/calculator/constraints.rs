//! Pure validation core for the calculator's numeric fields.
//!
//! `validate` is a plain function over the field's current text and its static
//! constraint, so the rules can be unit-tested without a live DOM. The
//! components in `ui` only apply the result (CSS classes, feedback element).

/// Physical-domain rule attached to a specific field, checked after the
/// declared min/max bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainRule {
    /// Latitude in decimal degrees, [-90, 90]
    Latitude,
    /// Panel tilt in degrees, [0, 90]
    Tilt,
    /// Panel length in meters, strictly positive
    PanelLength,
}

impl DomainRule {
    fn check(&self, value: f64) -> Result<(), &'static str> {
        match self {
            DomainRule::Latitude => {
                if (-90.0..=90.0).contains(&value) {
                    Ok(())
                } else {
                    Err("La latitud debe estar entre -90° y 90°")
                }
            }
            DomainRule::Tilt => {
                if (0.0..=90.0).contains(&value) {
                    Ok(())
                } else {
                    Err("La inclinación debe estar entre 0° y 90°")
                }
            }
            DomainRule::PanelLength => {
                if value > 0.0 {
                    Ok(())
                } else {
                    Err("La longitud debe ser mayor que 0")
                }
            }
        }
    }
}

/// Static description of one numeric form field.
#[derive(Debug, Clone, Copy)]
pub struct FieldConstraint {
    /// Stable field identifier, also the input's `name` attribute
    pub name: &'static str,
    /// Visible label text
    pub label: &'static str,
    /// Example placeholder shown in the empty input
    pub placeholder: &'static str,
    /// Declared lower bound (absent = unbounded)
    pub min: Option<f64>,
    /// Declared upper bound (absent = unbounded)
    pub max: Option<f64>,
    /// Field-specific rule, checked in addition to min/max
    pub rule: Option<DomainRule>,
}

/// The calculator's three input fields, in display order.
pub static FIELDS: [FieldConstraint; 3] = [
    FieldConstraint {
        name: "latitude",
        label: "Latitud (°)",
        placeholder: "Ej: 40.416 (Madrid)",
        min: Some(-90.0),
        max: Some(90.0),
        rule: Some(DomainRule::Latitude),
    },
    FieldConstraint {
        name: "tilt",
        label: "Inclinación del panel (°)",
        placeholder: "Ej: 30.0",
        min: Some(0.0),
        max: Some(90.0),
        rule: Some(DomainRule::Tilt),
    },
    FieldConstraint {
        name: "length",
        label: "Longitud del panel (m)",
        placeholder: "Ej: 2.0",
        min: Some(0.01),
        max: None,
        rule: Some(DomainRule::PanelLength),
    },
];

/// Look up a field constraint by its stable name.
pub fn field(name: &str) -> Option<&'static FieldConstraint> {
    FIELDS.iter().find(|f| f.name == name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Empty input, never flagged while the user is still editing
    Empty,
    InvalidNumber,
    OutOfRange,
    DomainViolation,
    Valid,
}

/// Outcome of one validation pass. `message` is present iff the status is a
/// failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub status: ValidationStatus,
    pub message: Option<String>,
}

impl ValidationResult {
    fn ok(status: ValidationStatus) -> Self {
        Self {
            status,
            message: None,
        }
    }

    fn fail(status: ValidationStatus, message: String) -> Self {
        Self {
            status,
            message: Some(message),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status == ValidationStatus::Valid
    }

    /// True when the field must block form submission (empty counts too).
    pub fn blocks_submit(&self) -> bool {
        self.status != ValidationStatus::Valid
    }
}

/// Validate a field's raw text against its constraint. Checks short-circuit:
/// only the first failing check is reported.
pub fn validate(text: &str, constraint: &FieldConstraint) -> ValidationResult {
    let text = text.trim();
    if text.is_empty() {
        return ValidationResult::ok(ValidationStatus::Empty);
    }

    let value: f64 = match text.parse() {
        Ok(v) => v,
        Err(_) => {
            return ValidationResult::fail(
                ValidationStatus::InvalidNumber,
                "Por favor, ingrese un número válido".to_string(),
            )
        }
    };
    // "inf" and "NaN" parse as f64 but are never meaningful form input
    if !value.is_finite() {
        return ValidationResult::fail(
            ValidationStatus::InvalidNumber,
            "Por favor, ingrese un número válido".to_string(),
        );
    }

    if let Some(min) = constraint.min {
        if value < min {
            return ValidationResult::fail(
                ValidationStatus::OutOfRange,
                format!("El valor debe ser mayor o igual a {}", min),
            );
        }
    }

    if let Some(max) = constraint.max {
        if value > max {
            return ValidationResult::fail(
                ValidationStatus::OutOfRange,
                format!("El valor debe ser menor o igual a {}", max),
            );
        }
    }

    if let Some(rule) = constraint.rule {
        if let Err(message) = rule.check(value) {
            return ValidationResult::fail(ValidationStatus::DomainViolation, message.to_string());
        }
    }

    ValidationResult::ok(ValidationStatus::Valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latitude() -> &'static FieldConstraint {
        field("latitude").unwrap()
    }

    fn tilt() -> &'static FieldConstraint {
        field("tilt").unwrap()
    }

    fn length() -> &'static FieldConstraint {
        field("length").unwrap()
    }

    #[test]
    fn empty_text_is_neutral() {
        for text in ["", "   ", "\t"] {
            let result = validate(text, latitude());
            assert_eq!(result.status, ValidationStatus::Empty);
            assert_eq!(result.message, None);
        }
    }

    #[test]
    fn non_numeric_text_is_invalid() {
        for text in ["abc", "12,5", "--3", "1.2.3"] {
            let result = validate(text, latitude());
            assert_eq!(result.status, ValidationStatus::InvalidNumber);
            assert_eq!(
                result.message.as_deref(),
                Some("Por favor, ingrese un número válido")
            );
        }
    }

    #[test]
    fn non_finite_numbers_are_invalid() {
        assert_eq!(
            validate("inf", latitude()).status,
            ValidationStatus::InvalidNumber
        );
        assert_eq!(
            validate("NaN", length()).status,
            ValidationStatus::InvalidNumber
        );
    }

    #[test]
    fn declared_bounds_fire_before_domain_rules() {
        let result = validate("-90.5", latitude());
        assert_eq!(result.status, ValidationStatus::OutOfRange);
        assert_eq!(
            result.message.as_deref(),
            Some("El valor debe ser mayor o igual a -90")
        );

        let result = validate("90.5", latitude());
        assert_eq!(result.status, ValidationStatus::OutOfRange);
        assert_eq!(
            result.message.as_deref(),
            Some("El valor debe ser menor o igual a 90")
        );
    }

    #[test]
    fn latitude_accepts_exact_limits() {
        assert!(validate("-90", latitude()).is_valid());
        assert!(validate("90", latitude()).is_valid());
        assert!(validate("40.416", latitude()).is_valid());
    }

    #[test]
    fn tilt_range_is_inclusive() {
        assert!(validate("0", tilt()).is_valid());
        assert!(validate("90", tilt()).is_valid());
        let result = validate("91", tilt());
        assert_eq!(result.status, ValidationStatus::OutOfRange);
        assert_eq!(
            result.message.as_deref(),
            Some("El valor debe ser menor o igual a 90")
        );
    }

    #[test]
    fn length_must_be_positive() {
        assert!(validate("1.7", length()).is_valid());
        assert!(validate("0.01", length()).is_valid());

        // Below the declared minimum, reported as out-of-range
        let result = validate("0.005", length());
        assert_eq!(result.status, ValidationStatus::OutOfRange);
        assert_eq!(
            result.message.as_deref(),
            Some("El valor debe ser mayor o igual a 0.01")
        );

        let result = validate("-2", length());
        assert_eq!(result.status, ValidationStatus::OutOfRange);
    }

    #[test]
    fn domain_rule_fires_without_declared_bound() {
        // An unbounded constraint still enforces its domain rule
        let constraint = FieldConstraint {
            name: "length",
            label: "",
            placeholder: "",
            min: None,
            max: None,
            rule: Some(DomainRule::PanelLength),
        };
        let result = validate("0", &constraint);
        assert_eq!(result.status, ValidationStatus::DomainViolation);
        assert_eq!(
            result.message.as_deref(),
            Some("La longitud debe ser mayor que 0")
        );
    }

    #[test]
    fn valid_result_has_no_message() {
        let result = validate("20.0", tilt());
        assert!(result.is_valid());
        assert!(!result.blocks_submit());
        assert_eq!(result.message, None);
    }

    #[test]
    fn empty_blocks_submit_but_shows_nothing() {
        let result = validate("", tilt());
        assert!(result.blocks_submit());
        assert_eq!(result.message, None);
    }
}
