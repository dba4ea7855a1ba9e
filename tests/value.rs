use numora::{
    ast::BinaryOperator::{self, Add, Div, Mul, Pow, Sub},
    error::{Error, RuntimeError},
    evaluate,
    interpreter::value::{complex::ComplexNumber, core::Value, matrix::Matrix, range::RangeValue},
};

fn samples() -> Vec<Value> {
    let square = Matrix::new(2, 2, [1.0, 2.0, 3.0, 4.0].map(ComplexNumber::from).to_vec()).unwrap();
    let row = Matrix::row_vector(vec![1.0.into(), ComplexNumber::new(0.0, 1.0)]);
    vec![Value::from(2.0),
         Value::from(ComplexNumber::new(1.0, -1.0)),
         Value::from(square),
         Value::from(row),
         Value::from(Matrix::empty()),
         Value::from("text"),
         Value::from(RangeValue::new(0.0, 1.0, 3.0)),
         Value::from(RangeValue::full()),
         Value::Void]
}

#[test]
fn every_operand_pair_has_an_outcome() {
    for left in samples() {
        for right in samples() {
            for op in [Add, Sub, Mul, Div, Pow] {
                match left.binary(op, &right) {
                    Ok(_)
                    | Err(RuntimeError::OperationNotSupported { .. } | RuntimeError::DimensionMismatch { .. }) => {},
                    Err(e) => panic!("{left:?} {op} {right:?} failed with {e}"),
                }
            }
        }
    }
}

#[test]
fn string_accepts_only_addition() {
    let text = Value::from("n = ");
    for right in samples() {
        assert!(text.binary(Add, &right).is_ok());
        for op in [Sub, Mul, Div, Pow] {
            assert_eq!(text.binary(op, &right),
                       Err(RuntimeError::not_supported(op.to_string(), "String")));
        }
    }
    assert_eq!(text.binary(Add, &Value::Void).unwrap(), Value::from("n = "));
}

#[test]
fn scalar_rejects_string_range_and_void() {
    let two = Value::from(2.0);
    for (right, variant) in [(Value::from("s"), "String"),
                             (Value::from(RangeValue::full()), "Range"),
                             (Value::Void, "Void")]
    {
        assert_eq!(two.binary(Mul, &right),
                   Err(RuntimeError::not_supported("*", variant)));
    }
}

#[test]
fn real_and_complex_scalar_arithmetic() {
    let check = |a: Value, op: BinaryOperator, b: Value, expected: Value| {
        assert_eq!(a.binary(op, &b).unwrap(), expected, "{a} {op} {b}");
    };

    check(Value::from(6.0), Div, Value::from(4.0), Value::from(1.5));
    check(Value::from(2.0), Pow, Value::from(10.0), Value::from(1024.0));
    check(Value::from(-8.0), Pow, Value::from(2.0), Value::from(64.0));
    check(Value::from(ComplexNumber::new(1.0, 1.0)),
          Mul,
          Value::from(ComplexNumber::new(1.0, -1.0)),
          Value::from(2.0));
    check(Value::from(ComplexNumber::new(0.0, 2.0)),
          Div,
          Value::from(ComplexNumber::new(0.0, 1.0)),
          Value::from(2.0));
}

#[test]
fn matrix_rules() {
    let a = Value::from(Matrix::new(2, 2, [1.0, 2.0, 3.0, 4.0].map(ComplexNumber::from).to_vec()).unwrap());
    let column = Value::from(Matrix::column_vector(vec![1.0.into(), 0.0.into()]));

    assert_eq!(a.binary(Mul, &column).unwrap().to_string(), "[1; 3]");
    assert_eq!(a.binary(Add, &a).unwrap().to_string(), "[2, 4; 6, 8]");
    assert_eq!(a.binary(Sub, &Value::from(1.0)).unwrap().to_string(), "[0, 1; 2, 3]");
    assert_eq!(Value::from(1.0).binary(Sub, &a).unwrap().to_string(), "[0, -1; -2, -3]");
    assert_eq!(a.binary(Pow, &Value::from(2.0)).unwrap().to_string(), "[1, 4; 9, 16]");

    assert_eq!(a.binary(Add, &column),
               Err(RuntimeError::DimensionMismatch { left:  (2, 2),
                                                     right: (2, 1), }));
    assert_eq!(column.binary(Mul, &column),
               Err(RuntimeError::DimensionMismatch { left:  (2, 1),
                                                     right: (2, 1), }));
    assert_eq!(a.binary(Div, &a), Err(RuntimeError::not_supported("/", "Matrix")));
}

#[test]
fn negation() {
    assert_eq!(Value::from(3.0).negate().unwrap(), Value::from(-3.0));
    assert!(Value::from("s").negate().is_err());
    assert!(Value::Void.negate().is_err());
}

#[test]
fn read_only_capabilities() {
    let m = Value::from(Matrix::new(2, 3, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0].map(ComplexNumber::from).to_vec()).unwrap());
    assert_eq!((m.rows(), m.columns(), m.len()), (2, 3, 6));
    assert!(!m.is_vector());
    assert_eq!(m.get(1, 0), Some(4.0.into()));
    assert_eq!(m.get(2, 0), None);
    assert_eq!(m.get_linear(1), Some(4.0.into()));
    assert_eq!(m.get_linear(2), Some(2.0.into()));

    let s = Value::from("añb");
    assert_eq!((s.rows(), s.columns(), s.len()), (1, 3, 3));

    let scalar = Value::from(7.0);
    assert_eq!((scalar.rows(), scalar.columns(), scalar.len()), (1, 1, 1));
    assert_eq!(scalar.get_linear(0), Some(7.0.into()));
}

#[test]
fn ranges_materialize_inclusively() {
    assert_eq!(RangeValue::new(0.0, 0.25, 1.0).materialize().unwrap(),
               vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(RangeValue::new(5.0, -2.0, 0.0).materialize().unwrap(), vec![5.0, 3.0, 1.0]);
    assert!(RangeValue::new(3.0, 1.0, 0.0).materialize().unwrap().is_empty());
    assert!(matches!(RangeValue::new(0.0, 0.0, 1.0).count(), Err(RuntimeError::InvalidRange { .. })));
    assert!(matches!(RangeValue::full().count(), Err(RuntimeError::InvalidRange { .. })));
    assert!(matches!(RangeValue::new(0.0, 1.0, 1e12).count(), Err(RuntimeError::InvalidRange { .. })));
}

#[test]
fn ranges_too_long_to_count_are_invalid() {
    for end in [1e20, 1e300, f64::MAX] {
        assert!(matches!(RangeValue::new(0.0, 1.0, end).count(), Err(RuntimeError::InvalidRange { .. })));
    }
    assert!(matches!(RangeValue::new(-f64::MAX, 1.0, f64::MAX).count(),
                     Err(RuntimeError::InvalidRange { .. })));

    for src in ["length(0:1e20)", "\"abc\"(0:1e20)", "[1, 2, 3](0:1e20)", "[0:1e20]"] {
        assert!(matches!(evaluate(src),
                         Err(Error::Runtime { source: RuntimeError::InvalidRange { .. }, .. })),
                "script: {src}");
    }
}

#[test]
fn rendering() {
    assert_eq!(Value::from(ComplexNumber::new(1.5, -2.0)).to_string(), "1.5 - 2i");
    assert_eq!(Value::from(Matrix::empty()).to_string(), "[]");
    assert_eq!(Value::from(Matrix::new(3, 0, Vec::new()).unwrap()).to_string(), "[]");
    assert_eq!(Value::from(RangeValue::full()).to_string(), ":");
    assert_eq!(Value::Void.to_string(), "");
}
