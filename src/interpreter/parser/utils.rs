use crate::{
    ast::{BinaryOperator, LiteralValue},
    interpreter::{
        lexer::Token,
        matcher::{Unit, UnitKind},
        value::complex::ComplexNumber,
    },
};

/// Maps an operator unit to the binary operator it denotes.
///
/// Returns `None` for non-operator units and for `=`.
#[must_use]
pub fn unit_to_binary_operator(unit: &Unit<'_>) -> Option<BinaryOperator> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Pow, Sub,
    };

    if unit.kind != UnitKind::Operator {
        return None;
    }
    match unit.text {
        "+" => Some(Add),
        "-" => Some(Sub),
        "*" => Some(Mul),
        "/" => Some(Div),
        "^" => Some(Pow),
        "<" => Some(Less),
        ">" => Some(Greater),
        "<=" => Some(LessEqual),
        ">=" => Some(GreaterEqual),
        "==" => Some(Equal),
        "!=" => Some(NotEqual),
        "&&" => Some(And),
        "||" => Some(Or),
        _ => None,
    }
}

/// Converts a number or string unit into a literal.
#[must_use]
pub fn unit_to_literal(unit: &Unit<'_>) -> Option<LiteralValue> {
    match unit.token()? {
        Token::Real(value) => Some(LiteralValue::from(value)),
        Token::Imaginary(value) => Some(LiteralValue::from(ComplexNumber::new(0.0, value))),
        Token::Text(text) => Some(LiteralValue::Text(text)),
        _ => None,
    }
}

/// Splits units at every separator `symbol`.
///
/// Empty pieces are kept so callers can decide whether they are allowed.
#[must_use]
pub fn split_units<'u, 'a>(units: &'u [Unit<'a>], symbol: &str) -> Vec<&'u [Unit<'a>]> {
    units.split(|unit| unit.is_separator(symbol)).collect()
}

/// Offset right after the last unit, or `fallback` if there is none.
#[must_use]
pub fn units_end(units: &[Unit<'_>], fallback: usize) -> usize {
    units.last()
         .map_or(fallback, |unit| unit.offset + unit.text.len())
}
