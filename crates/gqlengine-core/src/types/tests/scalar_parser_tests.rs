use crate::test_utils::parse_literal;
use crate::types::BooleanScalar;
use crate::types::FloatScalar;
use crate::types::IdScalar;
use crate::types::IntScalar;
use crate::types::ScalarParser;
use crate::types::StringScalar;
use crate::Value;
use proptest::prelude::*;

#[test]
fn int_accepts_integral_floats() {
    assert_eq!(IntScalar.parse_value(&Value::Float(4.0)), Ok(Value::Int(4)));
    assert_eq!(
        IntScalar.parse_value(&Value::Float(4.5)),
        Err("Int cannot represent non-integer value: 4.5".to_string()),
    );
}

#[test]
fn int_literals() {
    assert_eq!(IntScalar.parse_literal(&parse_literal("-7")), Ok(Value::Int(-7)));
    assert_eq!(
        IntScalar.parse_literal(&parse_literal("\"7\"")),
        Err("Int cannot represent non-integer value: \"7\"".to_string()),
    );
    assert_eq!(
        IntScalar.parse_literal(&parse_literal("1.0")),
        Err("Int cannot represent non-integer value: 1.0".to_string()),
    );
}

#[test]
fn int_serialization_is_lenient() {
    assert_eq!(IntScalar.serialize(&Value::from("12")), Ok(Value::Int(12)));
    assert_eq!(IntScalar.serialize(&Value::Boolean(true)), Ok(Value::Int(1)));
    assert!(IntScalar.serialize(&Value::from("twelve")).is_err());
}

#[test]
fn float_widens_integers() {
    assert_eq!(FloatScalar.parse_value(&Value::Int(3)), Ok(Value::Float(3.0)));
    assert_eq!(FloatScalar.parse_literal(&parse_literal("3")), Ok(Value::Float(3.0)));
    assert_eq!(
        FloatScalar.parse_value(&Value::Float(f64::NAN)),
        Err("Float cannot represent non numeric value: NaN".to_string()),
    );
}

#[test]
fn string_is_strict_on_input() {
    assert_eq!(
        StringScalar.parse_value(&Value::Int(1)),
        Err("String cannot represent a non string value: 1".to_string()),
    );
    assert_eq!(
        StringScalar.parse_literal(&parse_literal("RED")),
        Err("String cannot represent a non string value: RED".to_string()),
    );
    assert_eq!(StringScalar.serialize(&Value::Int(1)), Ok(Value::from("1")));
    assert_eq!(StringScalar.serialize(&Value::Enum("RED".to_string())), Ok(Value::from("RED")));
}

#[test]
fn boolean() {
    assert_eq!(BooleanScalar.parse_literal(&parse_literal("false")), Ok(Value::Boolean(false)));
    assert_eq!(
        BooleanScalar.parse_value(&Value::Int(0)),
        Err("Boolean cannot represent a non boolean value: 0".to_string()),
    );
}

#[test]
fn id_accepts_strings_and_integers() {
    assert_eq!(IdScalar.parse_value(&Value::Int(42)), Ok(Value::from("42")));
    assert_eq!(IdScalar.parse_literal(&parse_literal("\"a1\"")), Ok(Value::from("a1")));
    assert_eq!(
        IdScalar.parse_literal(&parse_literal("1.5")),
        Err("ID cannot represent a non-string and non-integer value: 1.5".to_string()),
    );
    assert_eq!(IdScalar.serialize(&Value::Float(7.0)), Ok(Value::from("7")));
}

proptest! {
    #[test]
    fn int_accepts_exactly_the_32_bit_range(i in any::<i64>()) {
        let parsed = IntScalar.parse_value(&Value::Int(i));
        if i32::try_from(i).is_ok() {
            prop_assert_eq!(parsed, Ok(Value::Int(i)));
        } else {
            prop_assert_eq!(
                parsed,
                Err(format!("Int cannot represent non 32-bit signed integer value: {i}")),
            );
        }
    }

    #[test]
    fn serialized_ints_parse_back(i in any::<i32>()) {
        let serialized = IntScalar.serialize(&Value::from(i.to_string()));
        prop_assert_eq!(serialized.and_then(|v| IntScalar.parse_value(&v)), Ok(Value::Int(i64::from(i))));
    }
}
