//! House record validation
//!
//! The schema is a static table of field specifications. Validation walks
//! the whole table, collecting every violation, and only builds a
//! `HouseRecord` when none were found.
//!
//! Numeric fields accept JSON numbers or numeric-looking strings
//! (`"1200"`, `" 2.5 "`). Enumerated fields require an exact,
//! case-sensitive match.

use serde_json::{Map, Value};

use crate::error::{FieldViolation, ValidationError, ViolationKind};
use crate::record::{FurnishingStatus, HouseRecord, YesNo};

/// Pseudo-field used when the input as a whole is unusable
pub const BODY_FIELD: &str = "body";

/// Lower bound of a numeric field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericBounds {
    /// Minimum value
    pub min: f64,
    /// Whether min is exclusive
    pub min_exclusive: bool,
}

impl NumericBounds {
    /// Inclusive minimum
    pub const fn at_least(min: f64) -> Self {
        Self {
            min,
            min_exclusive: false,
        }
    }

    /// Exclusive minimum
    pub const fn greater_than(min: f64) -> Self {
        Self {
            min,
            min_exclusive: true,
        }
    }

    /// Check if a value is within bounds
    pub fn contains(&self, value: f64) -> bool {
        if self.min_exclusive {
            value > self.min
        } else {
            value >= self.min
        }
    }

    /// Get a description of the bounds
    pub fn describe(&self) -> String {
        if self.min_exclusive {
            format!("> {}", self.min)
        } else {
            format!(">= {}", self.min)
        }
    }
}

/// Semantic type of a schema field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Any finite number
    Number(NumericBounds),
    /// Whole number fitting in `u32`
    Integer(NumericBounds),
    /// One of a fixed set of strings
    Enum(&'static [&'static str]),
}

impl FieldKind {
    /// Expected type name, for messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Number(_) => "number",
            FieldKind::Integer(_) => "integer",
            FieldKind::Enum(_) => "string",
        }
    }
}

/// A single field of the house schema
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn number(name: &'static str, bounds: NumericBounds) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Number(bounds),
    }
}

const fn integer(name: &'static str, bounds: NumericBounds) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Integer(bounds),
    }
}

const fn one_of(name: &'static str, allowed: &'static [&'static str]) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Enum(allowed),
    }
}

/// The house record schema, in declaration order
pub const HOUSE_SCHEMA: &[FieldSpec] = &[
    number("area", NumericBounds::greater_than(0.0)),
    integer("bedrooms", NumericBounds::at_least(0.0)),
    number("bathrooms", NumericBounds::at_least(0.0)),
    number("stories", NumericBounds::at_least(0.0)),
    one_of("mainroad", YesNo::VALUES),
    one_of("guestroom", YesNo::VALUES),
    one_of("basement", YesNo::VALUES),
    one_of("hotwaterheating", YesNo::VALUES),
    one_of("airconditioning", YesNo::VALUES),
    integer("parking", NumericBounds::at_least(0.0)),
    one_of("prefarea", YesNo::VALUES),
    one_of("furnishingstatus", FurnishingStatus::VALUES),
];

/// Validate untyped input against the house schema
///
/// Returns the typed record only if every field validates. Unknown keys are
/// dropped.
pub fn validate_house_record(input: &Value) -> Result<HouseRecord, ValidationError> {
    let Some(object) = input.as_object() else {
        return Err(ValidationError::new(vec![FieldViolation::new(
            BODY_FIELD,
            ViolationKind::WrongType,
            format!("Expected a JSON object, received {}", json_type_name(input)),
        )]));
    };

    let mut normalized = Map::new();
    let mut violations = Vec::new();

    for spec in HOUSE_SCHEMA {
        match check_field(spec, object.get(spec.name)) {
            Ok(value) => {
                normalized.insert(spec.name.to_string(), value);
            }
            Err(violation) => violations.push(violation),
        }
    }

    if !violations.is_empty() {
        return Err(ValidationError::new(violations));
    }

    serde_json::from_value(Value::Object(normalized)).map_err(|e| {
        ValidationError::new(vec![FieldViolation::new(
            BODY_FIELD,
            ViolationKind::WrongType,
            format!("Record could not be built: {}", e),
        )])
    })
}

/// Check one field, returning its normalized JSON value
fn check_field(spec: &FieldSpec, value: Option<&Value>) -> Result<Value, FieldViolation> {
    let Some(value) = value else {
        return Err(FieldViolation::missing(spec.name));
    };

    match spec.kind {
        FieldKind::Number(bounds) => {
            let number = coerce_number(value).ok_or_else(|| type_mismatch(spec, value))?;
            check_bounds(spec, bounds, number)?;
            Ok(Value::from(number))
        }
        FieldKind::Integer(bounds) => {
            let number = coerce_number(value).ok_or_else(|| type_mismatch(spec, value))?;
            if number.fract() != 0.0 {
                return Err(FieldViolation::new(
                    spec.name,
                    ViolationKind::WrongType,
                    format!("Field '{}' must be an integer, received {}", spec.name, number),
                ));
            }
            check_bounds(spec, bounds, number)?;
            if number > f64::from(u32::MAX) {
                return Err(FieldViolation::new(
                    spec.name,
                    ViolationKind::OutOfRange,
                    format!("Field '{}' must be <= {}, received {}", spec.name, u32::MAX, number),
                ));
            }
            Ok(Value::from(number as u64))
        }
        FieldKind::Enum(allowed) => {
            let text = value.as_str().ok_or_else(|| type_mismatch(spec, value))?;
            if !allowed.contains(&text) {
                return Err(FieldViolation::new(
                    spec.name,
                    ViolationKind::NotInEnum,
                    format!(
                        "Invalid value '{}' for field '{}': expected one of {}",
                        text,
                        spec.name,
                        allowed.join(", ")
                    ),
                ));
            }
            Ok(Value::String(text.to_string()))
        }
    }
}

fn check_bounds(spec: &FieldSpec, bounds: NumericBounds, number: f64) -> Result<(), FieldViolation> {
    if bounds.contains(number) {
        return Ok(());
    }
    Err(FieldViolation::new(
        spec.name,
        ViolationKind::OutOfRange,
        format!("Field '{}' must be {}, received {}", spec.name, bounds.describe(), number),
    ))
}

fn type_mismatch(spec: &FieldSpec, value: &Value) -> FieldViolation {
    FieldViolation::new(
        spec.name,
        ViolationKind::WrongType,
        format!(
            "Field '{}' has wrong type: expected {}, received {}",
            spec.name,
            spec.kind.type_name(),
            json_type_name(value)
        ),
    )
}

/// Numbers pass through; strings are trimmed and parsed. Non-finite
/// results are rejected.
fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    }?;

    number.is_finite().then_some(number)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn standard_apartment() -> Value {
        json!({
            "area": 1200,
            "bedrooms": 2,
            "bathrooms": 1,
            "stories": 1,
            "mainroad": "yes",
            "guestroom": "no",
            "basement": "no",
            "hotwaterheating": "no",
            "airconditioning": "yes",
            "parking": 1,
            "prefarea": "no",
            "furnishingstatus": "semi-furnished"
        })
    }

    fn with(field: &str, value: Value) -> Value {
        let mut input = standard_apartment();
        input[field] = value;
        input
    }

    fn without(field: &str) -> Value {
        let mut input = standard_apartment();
        input.as_object_mut().unwrap().remove(field);
        input
    }

    fn single_violation(input: &Value) -> FieldViolation {
        let err = validate_house_record(input).unwrap_err();
        assert_eq!(err.violations().len(), 1, "unexpected violations: {:?}", err);
        err.violations()[0].clone()
    }

    #[test]
    fn test_valid_record() {
        let record = validate_house_record(&standard_apartment()).unwrap();
        assert_eq!(record.area, 1200.0);
        assert_eq!(record.bedrooms, 2);
        assert_eq!(record.bathrooms, 1.0);
        assert_eq!(record.stories, 1.0);
        assert_eq!(record.mainroad, YesNo::Yes);
        assert_eq!(record.airconditioning, YesNo::Yes);
        assert_eq!(record.parking, 1);
        assert_eq!(record.furnishingstatus, FurnishingStatus::SemiFurnished);
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let mut input = standard_apartment();
        input["area"] = json!("1200.5");
        input["bedrooms"] = json!(" 3 ");
        input["parking"] = json!("0");
        input["bathrooms"] = json!("1.5");

        let record = validate_house_record(&input).unwrap();
        assert_eq!(record.area, 1200.5);
        assert_eq!(record.bedrooms, 3);
        assert_eq!(record.parking, 0);
        assert_eq!(record.bathrooms, 1.5);
    }

    #[test]
    fn test_integral_float_accepted_for_integer_field() {
        let record = validate_house_record(&with("bedrooms", json!(4.0))).unwrap();
        assert_eq!(record.bedrooms, 4);
    }

    #[test]
    fn test_zero_boundaries_are_valid() {
        let mut input = standard_apartment();
        input["bedrooms"] = json!(0);
        input["bathrooms"] = json!(0);
        input["stories"] = json!(0);
        input["parking"] = json!(0);
        assert!(validate_house_record(&input).is_ok());
    }

    #[test]
    fn test_area_must_be_positive() {
        let violation = single_violation(&with("area", json!(0)));
        assert_eq!(violation.field, "area");
        assert_eq!(violation.kind, ViolationKind::OutOfRange);
        assert!(violation.message.contains("> 0"));

        let violation = single_violation(&with("area", json!(-10)));
        assert_eq!(violation.kind, ViolationKind::OutOfRange);
    }

    #[test]
    fn test_negative_counts_rejected() {
        let violation = single_violation(&with("parking", json!(-1)));
        assert_eq!(violation.field, "parking");
        assert_eq!(violation.kind, ViolationKind::OutOfRange);

        let violation = single_violation(&with("bathrooms", json!("-0.5")));
        assert_eq!(violation.field, "bathrooms");
        assert_eq!(violation.kind, ViolationKind::OutOfRange);
    }

    #[test]
    fn test_fractional_integer_rejected() {
        let violation = single_violation(&with("bedrooms", json!(2.5)));
        assert_eq!(violation.field, "bedrooms");
        assert_eq!(violation.kind, ViolationKind::WrongType);
    }

    #[test]
    fn test_integer_overflow_rejected() {
        let violation = single_violation(&with("parking", json!(1e12)));
        assert_eq!(violation.kind, ViolationKind::OutOfRange);
    }

    #[test]
    fn test_wrong_types() {
        for bad in [json!(true), json!(null), json!(""), json!("abc"), json!([1]), json!({})] {
            let violation = single_violation(&with("stories", bad));
            assert_eq!(violation.field, "stories");
            assert_eq!(violation.kind, ViolationKind::WrongType);
        }

        let violation = single_violation(&with("mainroad", json!(1)));
        assert_eq!(violation.kind, ViolationKind::WrongType);
    }

    #[test]
    fn test_non_finite_strings_rejected() {
        for bad in ["NaN", "inf", "-infinity"] {
            let violation = single_violation(&with("area", json!(bad)));
            assert_eq!(violation.kind, ViolationKind::WrongType);
        }
    }

    #[test]
    fn test_enum_not_in_set() {
        let violation = single_violation(&with("furnishingstatus", json!("modern")));
        assert_eq!(violation.field, "furnishingstatus");
        assert_eq!(violation.kind, ViolationKind::NotInEnum);
        assert!(violation.message.contains("modern"));
    }

    #[test]
    fn test_enum_is_case_sensitive() {
        let violation = single_violation(&with("guestroom", json!("Yes")));
        assert_eq!(violation.kind, ViolationKind::NotInEnum);
    }

    #[test]
    fn test_missing_field() {
        let violation = single_violation(&without("prefarea"));
        assert_eq!(violation.field, "prefarea");
        assert_eq!(violation.kind, ViolationKind::Missing);
    }

    #[test]
    fn test_each_missing_field_reported() {
        for spec in HOUSE_SCHEMA {
            let err = validate_house_record(&without(spec.name)).unwrap_err();
            assert!(err.mentions(spec.name), "{} not reported", spec.name);
            assert_eq!(err.violations().len(), 1);
            assert_eq!(err.violations()[0].kind, ViolationKind::Missing);
        }
    }

    #[test]
    fn test_all_violations_collected_in_schema_order() {
        let input = json!({
            "area": -1,
            "bedrooms": 2,
            "bathrooms": 1,
            "stories": 1,
            "mainroad": "maybe",
            "guestroom": "no",
            "basement": "no",
            "hotwaterheating": "no",
            "airconditioning": "yes",
            "prefarea": "no",
            "furnishingstatus": "modern"
        });

        let err = validate_house_record(&input).unwrap_err();
        let fields: Vec<&str> = err.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["area", "mainroad", "parking", "furnishingstatus"]);
    }

    #[test]
    fn test_non_object_input() {
        let violation = single_violation(&json!([1, 2, 3]));
        assert_eq!(violation.field, BODY_FIELD);
        assert!(violation.message.contains("array"));
    }

    #[test]
    fn test_unknown_fields_dropped() {
        let record = validate_house_record(&with("garden", json!("yes"))).unwrap();
        let json = serde_json::to_value(record).unwrap();
        assert!(json.get("garden").is_none());
    }

    #[test]
    fn test_schema_covers_every_record_field() {
        let json = serde_json::to_value(HouseRecord::default()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), HOUSE_SCHEMA.len());
        for spec in HOUSE_SCHEMA {
            assert!(object.contains_key(spec.name), "record lacks {}", spec.name);
        }
    }

    #[test]
    fn test_bounds_describe() {
        assert_eq!(NumericBounds::greater_than(0.0).describe(), "> 0");
        assert_eq!(NumericBounds::at_least(0.0).describe(), ">= 0");
    }

    fn yes_no() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("yes"), Just("no")]
    }

    fn furnishing() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("furnished"), Just("semi-furnished"), Just("unfurnished")]
    }

    proptest! {
        #[test]
        fn prop_valid_inputs_round_trip(
            area in 0.01f64..100_000.0,
            bedrooms in 0u32..50,
            bathrooms in 0.0f64..20.0,
            stories in 0.0f64..10.0,
            parking in 0u32..10,
            flags in proptest::collection::vec(yes_no(), 6),
            status in furnishing(),
            as_strings in any::<bool>(),
        ) {
            let num = |v: f64| if as_strings { json!(v.to_string()) } else { json!(v) };
            let int = |v: u32| if as_strings { json!(v.to_string()) } else { json!(v) };

            let input = json!({
                "area": num(area),
                "bedrooms": int(bedrooms),
                "bathrooms": num(bathrooms),
                "stories": num(stories),
                "mainroad": flags[0],
                "guestroom": flags[1],
                "basement": flags[2],
                "hotwaterheating": flags[3],
                "airconditioning": flags[4],
                "parking": int(parking),
                "prefarea": flags[5],
                "furnishingstatus": status,
            });

            let record = validate_house_record(&input).unwrap();
            prop_assert_eq!(record.area, area);
            prop_assert_eq!(record.bedrooms, bedrooms);
            prop_assert_eq!(record.bathrooms, bathrooms);
            prop_assert_eq!(record.stories, stories);
            prop_assert_eq!(record.parking, parking);
            prop_assert_eq!(record.mainroad.as_str(), flags[0]);
            prop_assert_eq!(record.prefarea.as_str(), flags[5]);
            prop_assert_eq!(record.furnishingstatus.as_str(), status);
        }

        #[test]
        fn prop_negative_area_always_rejected(area in -100_000.0f64..=0.0) {
            let err = validate_house_record(&with("area", json!(area))).unwrap_err();
            prop_assert!(err.mentions("area"));
        }
    }
}
