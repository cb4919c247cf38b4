use crate::Value;
use gqlengine_parser::ast;

/// Coerces values of one scalar type.
///
/// `parse_value` handles variable input, `parse_literal` handles literals
/// written in a document (never variable references) and `serialize` turns
/// resolver output into the response representation. Errors are plain
/// messages; callers attach locations and paths.
pub trait ScalarParser: Send + Sync {
    fn parse_value(&self, value: &Value) -> Result<Value, String>;

    fn parse_literal(&self, literal: &ast::Value) -> Result<Value, String>;

    fn serialize(&self, value: &Value) -> Result<Value, String>;
}

fn int_in_range(i: i64) -> Option<i64> {
    (i64::from(i32::MIN)..=i64::from(i32::MAX)).contains(&i).then_some(i)
}

fn integral_float(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0).then_some(f as i64)
}

/// `Int`: a signed 32-bit integer.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntScalar;

impl ScalarParser for IntScalar {
    fn parse_value(&self, value: &Value) -> Result<Value, String> {
        let i = match value {
            Value::Int(i) => *i,
            Value::Float(f) => integral_float(*f)
                .ok_or_else(|| format!("Int cannot represent non-integer value: {value}"))?,
            _ => return Err(format!("Int cannot represent non-integer value: {value}")),
        };
        int_in_range(i)
            .map(Value::Int)
            .ok_or_else(|| format!("Int cannot represent non 32-bit signed integer value: {value}"))
    }

    fn parse_literal(&self, literal: &ast::Value) -> Result<Value, String> {
        match literal {
            ast::Value::Int(i) => int_in_range(i.value)
                .map(Value::Int)
                .ok_or_else(|| format!(
                    "Int cannot represent non 32-bit signed integer value: {}",
                    i.value,
                )),
            _ => Err(format!(
                "Int cannot represent non-integer value: {}",
                literal.to_graphql_string(),
            )),
        }
    }

    fn serialize(&self, value: &Value) -> Result<Value, String> {
        let i = match value {
            Value::Int(i) => Some(*i),
            Value::Float(f) => integral_float(*f),
            Value::Boolean(b) => Some(i64::from(*b)),
            Value::String(s) => s.parse::<i64>().ok(),
            _ => None,
        };
        let i = i.ok_or_else(|| format!("Int cannot represent non-integer value: {value}"))?;
        int_in_range(i)
            .map(Value::Int)
            .ok_or_else(|| format!("Int cannot represent non 32-bit signed integer value: {value}"))
    }
}

/// `Float`: a double-precision value. Integers are accepted and widened.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatScalar;

impl ScalarParser for FloatScalar {
    fn parse_value(&self, value: &Value) -> Result<Value, String> {
        match value {
            Value::Int(i) => Ok(Value::Float(*i as f64)),
            Value::Float(f) if f.is_finite() => Ok(Value::Float(*f)),
            _ => Err(format!("Float cannot represent non numeric value: {value}")),
        }
    }

    fn parse_literal(&self, literal: &ast::Value) -> Result<Value, String> {
        match literal {
            ast::Value::Int(i) => Ok(Value::Float(i.value as f64)),
            ast::Value::Float(f) => Ok(Value::Float(f.value)),
            _ => Err(format!(
                "Float cannot represent non numeric value: {}",
                literal.to_graphql_string(),
            )),
        }
    }

    fn serialize(&self, value: &Value) -> Result<Value, String> {
        let f = match value {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::String(s) => s.parse::<f64>().ok(),
            _ => None,
        };
        f.filter(|f| f.is_finite())
            .map(Value::Float)
            .ok_or_else(|| format!("Float cannot represent non numeric value: {value}"))
    }
}

/// `String`: UTF-8 text.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringScalar;

impl ScalarParser for StringScalar {
    fn parse_value(&self, value: &Value) -> Result<Value, String> {
        match value {
            Value::String(s) => Ok(Value::String(s.clone())),
            _ => Err(format!("String cannot represent a non string value: {value}")),
        }
    }

    fn parse_literal(&self, literal: &ast::Value) -> Result<Value, String> {
        match literal {
            ast::Value::String(s) => Ok(Value::String(s.value.clone())),
            _ => Err(format!(
                "String cannot represent a non string value: {}",
                literal.to_graphql_string(),
            )),
        }
    }

    fn serialize(&self, value: &Value) -> Result<Value, String> {
        match value {
            Value::String(s) | Value::Enum(s) => Ok(Value::String(s.clone())),
            Value::Boolean(b) => Ok(Value::String(b.to_string())),
            Value::Int(i) => Ok(Value::String(i.to_string())),
            Value::Float(f) if f.is_finite() => Ok(Value::String(f.to_string())),
            _ => Err(format!("String cannot represent value: {value}")),
        }
    }
}

/// `Boolean`: `true` or `false`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BooleanScalar;

impl ScalarParser for BooleanScalar {
    fn parse_value(&self, value: &Value) -> Result<Value, String> {
        match value {
            Value::Boolean(b) => Ok(Value::Boolean(*b)),
            _ => Err(format!("Boolean cannot represent a non boolean value: {value}")),
        }
    }

    fn parse_literal(&self, literal: &ast::Value) -> Result<Value, String> {
        match literal {
            ast::Value::Boolean(b) => Ok(Value::Boolean(b.value)),
            _ => Err(format!(
                "Boolean cannot represent a non boolean value: {}",
                literal.to_graphql_string(),
            )),
        }
    }

    fn serialize(&self, value: &Value) -> Result<Value, String> {
        match value {
            Value::Boolean(b) => Ok(Value::Boolean(*b)),
            Value::Int(i) => Ok(Value::Boolean(*i != 0)),
            Value::Float(f) if f.is_finite() => Ok(Value::Boolean(*f != 0.0)),
            _ => Err(format!("Boolean cannot represent a non boolean value: {value}")),
        }
    }
}

/// `ID`: serialized as a string, but integer input is accepted.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdScalar;

impl ScalarParser for IdScalar {
    fn parse_value(&self, value: &Value) -> Result<Value, String> {
        match value {
            Value::String(s) => Ok(Value::String(s.clone())),
            Value::Int(i) => Ok(Value::String(i.to_string())),
            _ => Err(format!("ID cannot represent value: {value}")),
        }
    }

    fn parse_literal(&self, literal: &ast::Value) -> Result<Value, String> {
        match literal {
            ast::Value::String(s) => Ok(Value::String(s.value.clone())),
            ast::Value::Int(i) => Ok(Value::String(i.value.to_string())),
            _ => Err(format!(
                "ID cannot represent a non-string and non-integer value: {}",
                literal.to_graphql_string(),
            )),
        }
    }

    fn serialize(&self, value: &Value) -> Result<Value, String> {
        match value {
            Value::String(s) => Ok(Value::String(s.clone())),
            Value::Int(i) => Ok(Value::String(i.to_string())),
            Value::Float(f) => integral_float(*f)
                .map(|i| Value::String(i.to_string()))
                .ok_or_else(|| format!("ID cannot represent value: {value}")),
            _ => Err(format!("ID cannot represent value: {value}")),
        }
    }
}

/// The parser given to custom scalars that were not registered with a
/// parser of their own: every value is passed through unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct CustomScalar;

impl ScalarParser for CustomScalar {
    fn parse_value(&self, value: &Value) -> Result<Value, String> {
        Ok(value.clone())
    }

    fn parse_literal(&self, literal: &ast::Value) -> Result<Value, String> {
        Ok(Value::from_literal(literal))
    }

    fn serialize(&self, value: &Value) -> Result<Value, String> {
        Ok(value.clone())
    }
}
