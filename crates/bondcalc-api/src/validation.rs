//! Request validation.
//!
//! Field constraints are declared once in [`BOND_RULES`] and applied to the
//! raw JSON body, so type errors and range errors are collected together and
//! reported in a single response.

use bondcalc_core::{BondParameters, CouponFrequency};
use chrono::NaiveDate;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::error::{ApiError, FieldError};

/// Expected JSON type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any JSON number.
    Number,
    /// A JSON number with no fractional part.
    Integer,
    /// A `YYYY-MM-DD` string.
    Date,
}

/// Constraints for one request field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Canonical field name.
    pub field: &'static str,
    /// Alternate names, consulted only when the canonical field is absent.
    pub aliases: &'static [&'static str],
    pub kind: FieldKind,
    pub required: bool,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    /// Permitted integer values.
    pub allowed: Option<&'static [u32]>,
}

/// Constraints on bond calculation requests.
pub const BOND_RULES: &[FieldRule] = &[
    FieldRule {
        field: "faceValue",
        aliases: &[],
        kind: FieldKind::Number,
        required: true,
        minimum: Some(1.0),
        maximum: None,
        allowed: None,
    },
    FieldRule {
        field: "couponRate",
        aliases: &[],
        kind: FieldKind::Number,
        required: true,
        minimum: Some(0.01),
        maximum: Some(100.0),
        allowed: None,
    },
    FieldRule {
        field: "marketPrice",
        aliases: &[],
        kind: FieldKind::Number,
        required: true,
        minimum: Some(0.01),
        maximum: None,
        allowed: None,
    },
    FieldRule {
        field: "yearsToMaturity",
        aliases: &[],
        kind: FieldKind::Number,
        required: true,
        minimum: Some(0.1),
        maximum: Some(100.0),
        allowed: None,
    },
    FieldRule {
        field: "couponFrequency",
        aliases: &["frequency"],
        kind: FieldKind::Integer,
        required: true,
        minimum: None,
        maximum: None,
        allowed: Some(&[1, 2, 4, 12]),
    },
    FieldRule {
        field: "yieldToMaturity",
        aliases: &[],
        kind: FieldKind::Number,
        required: false,
        minimum: Some(0.01),
        maximum: Some(100.0),
        allowed: None,
    },
    FieldRule {
        field: "startDate",
        aliases: &[],
        kind: FieldKind::Date,
        required: false,
        minimum: None,
        maximum: None,
        allowed: None,
    },
];

/// A value that passed its rule.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Checked {
    Number(Decimal),
    Integer(u32),
    Date(NaiveDate),
}

/// A request that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedBond {
    pub params: BondParameters,
    /// Anchor for payment dates, if the caller supplied one.
    pub start_date: Option<NaiveDate>,
}

/// Parses and validates a bond calculation request body.
///
/// Returns every violation found, not just the first.
pub fn validate_bond_request(body: &[u8]) -> Result<ValidatedBond, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        ApiError::Validation(vec![FieldError::new(
            "body",
            format!("request body must be valid JSON: {e}"),
        )])
    })?;
    let Value::Object(object) = value else {
        return Err(ApiError::Validation(vec![FieldError::new(
            "body",
            "request body must be a JSON object",
        )]));
    };

    let mut errors = Vec::new();
    let mut checked = Vec::with_capacity(BOND_RULES.len());
    for rule in BOND_RULES {
        match check_field(rule, &object) {
            Ok(value) => checked.push(value),
            Err(err) => {
                errors.push(err);
                checked.push(None);
            }
        }
    }

    if !errors.is_empty() {
        tracing::debug!(?errors, "bond request rejected");
        return Err(ApiError::Validation(errors));
    }

    build_parameters(&checked)
}

/// Applies one rule. `Ok(None)` means an optional field was absent.
fn check_field(rule: &FieldRule, object: &Map<String, Value>) -> Result<Option<Checked>, FieldError> {
    let Some((name, raw)) = lookup(rule, object) else {
        return if rule.required {
            Err(FieldError::new(rule.field, format!("{} is required", rule.field)))
        } else {
            Ok(None)
        };
    };

    let checked = match rule.kind {
        FieldKind::Number => {
            let n = raw
                .as_f64()
                .ok_or_else(|| FieldError::new(name, format!("{name} must be a number")))?;
            check_range(rule, name, n)?;
            let n = Decimal::from_f64(n).ok_or_else(|| {
                FieldError::new(name, format!("{name} is too large to represent"))
            })?;
            Checked::Number(n)
        }
        FieldKind::Integer => {
            let n = raw
                .as_f64()
                .filter(|n| n.fract() == 0.0)
                .ok_or_else(|| FieldError::new(name, format!("{name} must be an integer")))?;
            check_range(rule, name, n)?;
            let n = check_allowed(rule, name, n)?;
            Checked::Integer(n)
        }
        FieldKind::Date => {
            let date = raw
                .as_str()
                .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
                .ok_or_else(|| {
                    FieldError::new(name, format!("{name} must be a date in YYYY-MM-DD format"))
                })?;
            Checked::Date(date)
        }
    };
    Ok(Some(checked))
}

/// Finds the canonical field, falling back to aliases. Nulls count as absent.
fn lookup<'a>(rule: &FieldRule, object: &'a Map<String, Value>) -> Option<(&'static str, &'a Value)> {
    std::iter::once(rule.field)
        .chain(rule.aliases.iter().copied())
        .find_map(|name| match object.get(name) {
            None | Some(Value::Null) => None,
            Some(value) => Some((name, value)),
        })
}

fn check_range(rule: &FieldRule, name: &str, n: f64) -> Result<(), FieldError> {
    if let Some(min) = rule.minimum {
        if n < min {
            return Err(FieldError::new(name, format!("{name} must not be less than {min}")));
        }
    }
    if let Some(max) = rule.maximum {
        if n > max {
            return Err(FieldError::new(
                name,
                format!("{name} must not be greater than {max}"),
            ));
        }
    }
    Ok(())
}

fn check_allowed(rule: &FieldRule, name: &str, n: f64) -> Result<u32, FieldError> {
    let Some(allowed) = rule.allowed else {
        return u32::try_from(n as i64)
            .map_err(|_| FieldError::new(name, format!("{name} must be a non-negative integer")));
    };
    allowed
        .iter()
        .copied()
        .find(|&a| f64::from(a) == n)
        .ok_or_else(|| {
            let list = allowed
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            FieldError::new(
                name,
                format!("{name} must be one of the following values: {list}"),
            )
        })
}

/// Assembles engine parameters from values already checked against [`BOND_RULES`].
fn build_parameters(checked: &[Option<Checked>]) -> Result<ValidatedBond, ApiError> {
    let decimal = |index: usize| match checked[index] {
        Some(Checked::Number(n)) => Some(n),
        _ => None,
    };

    let frequency = match checked[4] {
        Some(Checked::Integer(n)) => CouponFrequency::try_from(n).ok(),
        _ => None,
    };
    let start_date = match checked[6] {
        Some(Checked::Date(date)) => Some(date),
        _ => None,
    };

    match (decimal(0), decimal(1), decimal(2), decimal(3), frequency) {
        (Some(face), Some(coupon), Some(price), Some(years), Some(frequency)) => {
            let mut params = BondParameters::new(face, coupon, price, years, frequency);
            if let Some(ytm) = decimal(5) {
                params = params.with_yield_to_maturity(ytm);
            }
            Ok(ValidatedBond { params, start_date })
        }
        _ => Err(ApiError::Internal(
            "validated request is missing a required field".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn validate(value: Value) -> Result<ValidatedBond, ApiError> {
        validate_bond_request(value.to_string().as_bytes())
    }

    fn field_errors(result: Result<ValidatedBond, ApiError>) -> Vec<FieldError> {
        match result {
            Err(ApiError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    fn valid_body() -> Value {
        json!({
            "faceValue": 1000,
            "couponRate": 5,
            "marketPrice": 950,
            "yearsToMaturity": 5,
            "couponFrequency": 1
        })
    }

    #[test]
    fn test_valid_request() {
        let validated = validate(valid_body()).unwrap();
        assert_eq!(validated.params.face_value(), dec!(1000));
        assert_eq!(validated.params.coupon_rate(), dec!(5));
        assert_eq!(validated.params.market_price(), dec!(950));
        assert_eq!(validated.params.years_to_maturity(), dec!(5));
        assert_eq!(validated.params.coupon_frequency(), CouponFrequency::Annual);
        assert!(validated.params.yield_to_maturity().is_none());
        assert!(validated.start_date.is_none());
    }

    #[test]
    fn test_decimal_inputs_convert_cleanly() {
        let mut body = valid_body();
        body["couponRate"] = json!(4.35);
        body["yieldToMaturity"] = json!(6.1);
        let validated = validate(body).unwrap();
        assert_eq!(validated.params.coupon_rate(), dec!(4.35));
        assert_eq!(validated.params.yield_to_maturity(), Some(dec!(6.1)));
    }

    #[test]
    fn test_frequency_alias() {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("couponFrequency");
        body["frequency"] = json!(4);
        let validated = validate(body).unwrap();
        assert_eq!(validated.params.coupon_frequency(), CouponFrequency::Quarterly);
    }

    #[test]
    fn test_canonical_field_wins_over_alias() {
        let mut body = valid_body();
        body["frequency"] = json!(12);
        let validated = validate(body).unwrap();
        assert_eq!(validated.params.coupon_frequency(), CouponFrequency::Annual);
    }

    #[test]
    fn test_reports_all_violations() {
        let errors = field_errors(validate(json!({
            "faceValue": 0.5,
            "couponRate": 150,
            "marketPrice": "cheap",
            "couponFrequency": 3
        })));
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "faceValue",
                "couponRate",
                "marketPrice",
                "yearsToMaturity",
                "couponFrequency"
            ]
        );
        assert_eq!(errors[0].message, "faceValue must not be less than 1");
        assert_eq!(errors[1].message, "couponRate must not be greater than 100");
        assert_eq!(errors[2].message, "marketPrice must be a number");
        assert_eq!(errors[3].message, "yearsToMaturity is required");
        assert_eq!(
            errors[4].message,
            "couponFrequency must be one of the following values: 1, 2, 4, 12"
        );
    }

    #[test]
    fn test_alias_errors_use_sent_name() {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("couponFrequency");
        body["frequency"] = json!(6);
        let errors = field_errors(validate(body));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "frequency");
    }

    #[test]
    fn test_fractional_frequency_rejected() {
        let mut body = valid_body();
        body["couponFrequency"] = json!(2.5);
        let errors = field_errors(validate(body));
        assert_eq!(errors[0].message, "couponFrequency must be an integer");
    }

    #[test]
    fn test_optional_ytm_bounds() {
        let mut body = valid_body();
        body["yieldToMaturity"] = json!(0);
        let errors = field_errors(validate(body));
        assert_eq!(errors[0].field, "yieldToMaturity");

        let mut body = valid_body();
        body["yieldToMaturity"] = Value::Null;
        assert!(validate(body).unwrap().params.yield_to_maturity().is_none());
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let body = json!({
            "faceValue": 1,
            "couponRate": 0.01,
            "marketPrice": 0.01,
            "yearsToMaturity": 100,
            "couponFrequency": 12,
            "yieldToMaturity": 100
        });
        assert!(validate(body).is_ok());
    }

    #[test]
    fn test_start_date() {
        let mut body = valid_body();
        body["startDate"] = json!("2025-02-28");
        let validated = validate(body).unwrap();
        assert_eq!(validated.start_date, NaiveDate::from_ymd_opt(2025, 2, 28));

        let mut body = valid_body();
        body["startDate"] = json!("28/02/2025");
        let errors = field_errors(validate(body));
        assert_eq!(errors[0].field, "startDate");
    }

    #[test]
    fn test_huge_face_value_is_reported() {
        let mut body = valid_body();
        body["faceValue"] = json!(1e40);
        let errors = field_errors(validate(body));
        assert_eq!(errors[0].field, "faceValue");
        assert!(errors[0].message.contains("too large"));
    }

    #[test]
    fn test_unrepresentable_number_reported_with_other_violations() {
        let mut body = valid_body();
        body["faceValue"] = json!(1e40);
        body["couponRate"] = json!(150);
        let errors = field_errors(validate(body));
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["faceValue", "couponRate"]);
        assert_eq!(errors[0].message, "faceValue is too large to represent");
        assert_eq!(errors[1].message, "couponRate must not be greater than 100");
    }

    #[test]
    fn test_malformed_json() {
        let errors = field_errors(validate_bond_request(b"{not json"));
        assert_eq!(errors[0].field, "body");

        let errors = field_errors(validate(json!([1, 2, 3])));
        assert_eq!(errors[0].message, "request body must be a JSON object");
    }
}
