use numora::{
    error::{Error, ParseError, RuntimeError},
    evaluate,
    interpreter::{evaluator::core::Context, value::core::Value},
};

fn render(src: &str) -> String {
    match evaluate(src) {
        Ok(Some(value)) => value.to_string(),
        Ok(None) => String::new(),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_renders(src: &str, expected: &str) {
    assert_eq!(render(src), expected, "script: {src}");
}

fn runtime_error(src: &str) -> RuntimeError {
    match evaluate(src) {
        Err(Error::Runtime { source, .. }) => source,
        other => panic!("Expected a runtime error from {src}, got {other:?}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match evaluate(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("Expected a parse error from {src}, got {other:?}"),
    }
}

fn assert_not_supported(src: &str) {
    assert!(matches!(runtime_error(src), RuntimeError::OperationNotSupported { .. }),
            "script: {src}");
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_renders("x = 1 + 2; x", "3");
    assert_renders("1 + 2 * 3", "7");
    assert_renders("(1 + 2) * 3", "9");
    assert_renders("7 - 2 - 1", "4");
    assert_renders("10 / 4", "2.5");
    assert_renders("x = 7 * 9", "63");
}

#[test]
fn power_binds_tighter_than_minus_and_is_right_associative() {
    assert_renders("2 ^ 3 ^ 2", "512");
    assert_renders("-2 ^ 2", "-4");
    assert_renders("2 ^ -1", "0.5");
    assert_renders("--3", "3");
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_renders("1 / 0", "inf");
    assert_renders("-1 / 0", "-inf");
}

#[test]
fn complex_arithmetic() {
    assert_renders("2i * 2i", "-4");
    assert_renders("(1 + 2i) * (3 - i)", "5 + 5i");
    assert_renders("sqrt(-4)", "2i");
    assert_renders("conj(1 + 2i)", "1 - 2i");
    assert_renders("abs(3 + 4i)", "5");

    let Ok(Some(Value::Scalar(root))) = evaluate("(-1) ^ 0.5") else {
        panic!("expected a scalar");
    };
    assert!(root.real.abs() < 1e-12);
    assert!((root.imaginary - 1.0).abs() < 1e-12);
}

#[test]
fn comparisons_and_logic_yield_one_or_zero() {
    assert_renders("3 > 2", "1");
    assert_renders("3 <= 2", "0");
    assert_renders("2 == 2 && 1 < 0", "0");
    assert_renders("0 || 1", "1");
    assert_renders("1 + 1 == 2", "1");
    assert_renders("[1, 5] > 2", "[0, 1]");
}

#[test]
fn matrix_literals_and_products() {
    assert_renders("[1, 2; 3, 4]", "[1, 2; 3, 4]");
    assert_renders("[]", "[]");
    assert_renders("[1, 2; 3, 4] * [1; 1]", "[3; 7]");
    assert_renders("[1, 2] + [3, 4]", "[4, 6]");
    assert_renders("2 * [1, 2]", "[2, 4]");
    assert_renders("[1, 2] - 1", "[0, 1]");
    assert_renders("-[1, 2]", "[-1, -2]");
    assert_renders("[[1, 2], 3]", "[1, 2, 3]");
    assert_renders("[1:3]", "[1, 2, 3]");
    assert_renders("[0:0.5:1]", "[0, 0.5, 1]");
}

#[test]
fn matrix_shape_errors() {
    assert!(matches!(runtime_error("[1, 2] + [1; 2]"), RuntimeError::DimensionMismatch { .. }));
    assert!(matches!(runtime_error("[1, 2] * [1, 2]"), RuntimeError::DimensionMismatch { .. }));
    assert!(matches!(runtime_error("[1, 2; 3]"), RuntimeError::DimensionMismatch { .. }));
    assert_not_supported("[1, 2] / [1, 2]");
    assert_not_supported("[1, 2] ^ [1, 2]");
    assert_not_supported("[\"a\"]");
}

#[test]
fn ranges() {
    assert_renders("x = 0:2:6; x", "0:2:6");
    assert_renders("1:3", "1:1:3");
    assert!(matches!(runtime_error("[1:0:3]"), RuntimeError::InvalidRange { .. }));
    assert!(matches!(runtime_error("[1:2i]"), RuntimeError::InvalidRange { .. }));
}

#[test]
fn string_addition_concatenates_rendered_operand() {
    assert_renders("\"ab\" + 1", "ab1");
    assert_renders("\"x = \" + [1, 2]", "x = [1, 2]");
    assert_renders("\"a\" + \"b\"", "ab");
    assert_renders("\"say \\\"hi\\\"\"", "say \"hi\"");
}

#[test]
fn string_rejects_every_other_operator() {
    for op in ["-", "*", "/", "^"] {
        for right in ["1", "\"b\"", "[1, 2]", "2i"] {
            let src = format!("\"abc\" {op} {right}");
            match runtime_error(&src) {
                RuntimeError::OperationNotSupported { operator, variant } => {
                    assert_eq!(operator, op);
                    assert_eq!(variant, "String");
                },
                other => panic!("unexpected error {other:?} for {src}"),
            }
        }
    }
}

#[test]
fn string_indexing() {
    assert_renders("s = \"hello\"; s(1)", "e");
    assert_renders("s = \"hello\"; s(1:3)", "ell");
    assert_renders("s = \"hello\"; s(4:-1:0)", "olleh");
    assert_renders("s = \"hello\"; s(:)", "hello");
    assert!(matches!(runtime_error("s = \"hello\"; s(5)"),
                     RuntimeError::IndexOutOfRange { length: 5, .. }));
    assert!(matches!(runtime_error("s = \"hello\"; s(1.5)"),
                     RuntimeError::IndexOutOfRange { .. }));
}

#[test]
fn matrix_indexing_keeps_orientation() {
    assert_renders("v = [10, 20, 30]; v(2)", "[30]");
    assert_renders("v = [10, 20, 30]; v(0, 2)", "[10, 30]");
    assert_renders("c = [1; 2; 3]; c(1:2)", "[2; 3]");
    assert_renders("m = [1, 2; 3, 4]; m(1)", "[3]");
    assert_renders("m = [1, 2; 3, 4]; m(:)", "[1, 2; 3, 4]");
    assert_renders("[1, 2, 3](1)", "[2]");
    assert!(matches!(runtime_error("v = [10, 20, 30]; v(3)"),
                     RuntimeError::IndexOutOfRange { .. }));
    assert_not_supported("x = 3; x(0)");
}

#[test]
fn max_reduces_vectors_and_matrix_columns() {
    assert_renders("max(1, 2, 3, 4, 5, 6, 7, -1)", "7");
    assert_renders("max([1, 2, 3, 4, 5, 6, 7, -1])", "7");
    assert_renders("max([1, 2; 3, 4; 5, 6; 7, -1])", "[7, 6]");
    assert_renders("max(-3, 3)", "-3");
    assert_renders("max(5)", "5");
    assert_renders("min(3, -1, 2)", "-1");
    assert_renders("min([4, 2; 1, 8])", "[1, 2]");
    assert_not_supported("max(\"abc\")");
}

#[test]
fn other_builtins() {
    assert_renders("sin(0)", "0");
    assert_renders("sin (0)", "0");
    assert_renders("exp(0)", "1");
    assert_renders("ln(1)", "0");
    assert_renders("sum([1, 2, 3])", "6");
    assert_renders("sum([1, 2; 3, 4])", "[4, 6]");
    assert_renders("length(\"héllo\")", "5");
    assert_renders("length([1, 2; 3, 4])", "4");
    assert_renders("length()", "0");
    assert_renders("sqrt([4, 9])", "[2, 3]");
    assert_not_supported("sin(\"x\")");
}

#[test]
fn unknown_names() {
    assert!(matches!(runtime_error("f(1)"), RuntimeError::UnknownFunction { .. }));
    assert!(matches!(runtime_error("z + 1"), RuntimeError::UndefinedVariable { .. }));
}

#[test]
fn variables_shadow_functions_on_call() {
    assert_renders("sin = [5, 6]; sin(1)", "[6]");
}

#[test]
fn host_defined_functions() {
    fn double(argument: &Value) -> Result<Value, RuntimeError> {
        argument.binary(numora::ast::BinaryOperator::Mul, &Value::from(2.0))
    }

    let mut context = Context::new();
    context.define_function("double", double);
    assert_eq!(context.run("double(21)").unwrap(), Some(Value::from(42.0)));
}

#[test]
fn constants_can_be_shadowed() {
    assert_renders("pi", &std::f64::consts::PI.to_string());
    assert_renders("e = 2; e", "2");
    assert_renders("e", &std::f64::consts::E.to_string());
    assert_renders("{ pi = 3 }; pi", &std::f64::consts::PI.to_string());

    let Ok(Some(Value::Scalar(one))) = evaluate("omega * exp(omega)") else {
        panic!("expected a scalar");
    };
    assert!((one.real - 1.0).abs() < 1e-12);
}

#[test]
fn nested_block_does_not_change_outer_binding() {
    assert_renders("x = 1; { x = 2 }; x", "1");
    assert_renders("x = 1; { x = 2; x }", "2");
    assert_renders("x = 1; { y = x + 1 }", "2");
    assert_renders("{ a = 1; { a + 1 } }", "2");
    assert_renders("x = 1; { { x = 3 }; x }", "1");
}

#[test]
fn empty_block_is_void() {
    assert_eq!(evaluate("{}").unwrap(), None);
    assert_eq!(evaluate("{ ; ; }").unwrap(), None);
    assert_renders("x = 5; {}", "5");
}

#[test]
fn last_result_selector() {
    assert_renders("1 + 1; $ * 3", "6");
    assert_renders("2; { $ + 1 }", "3");
    assert!(matches!(runtime_error("$"), RuntimeError::UnboundSpecialVariable { .. }));

    let mut context = Context::new();
    context.run("5").unwrap();
    assert_eq!(context.run("$ + 1").unwrap(), Some(Value::from(6.0)));
}

#[test]
fn failure_keeps_earlier_statements() {
    let mut context = Context::new();
    let err = context.run("a = 1; b = 2; c = nope; d = 4").unwrap_err();
    assert!(matches!(err, Error::Runtime { offset: 14, .. }));
    assert!(matches!(err.as_runtime(), Some(RuntimeError::UndefinedVariable { name }) if name == "nope"));

    assert_eq!(context.run("a + b").unwrap(), Some(Value::from(3.0)));
    assert!(context.run("d").is_err());
}

#[test]
fn failure_inside_block_keeps_block_bindings() {
    let mut context = Context::new();
    let program = context.parse("{ a = 1; a = a + nope }").unwrap();
    assert!(context.execute(&program).is_err());

    let block = program.scopes[0];
    assert_eq!(context.scopes.get_local(block, "a"), Some(&Value::from(1.0)));
    context.discard(program);
}

#[test]
fn unbalanced_block_fails_before_anything_runs() {
    assert_eq!(parse_error("{ a = 1;"),
               ParseError::UnbalancedBrackets { open: '{', offset: 0 });

    let mut context = Context::new();
    let err = context.run("x = 1; { a = 1;").unwrap_err();
    assert_eq!(err.as_parse().map(ParseError::offset), Some(7));
    assert!(context.run("x").is_err());
}

#[test]
fn syntax_error_inside_block_fails_before_anything_runs() {
    let mut context = Context::new();
    let result = context.run("x = 1; { y = 2; z = (1 + # ) }");
    assert!(matches!(result, Err(Error::Parse(ParseError::UnmatchedInput { found: '#', .. }))));
    assert!(context.run("x").is_err());
}

#[test]
fn parse_errors_report_absolute_offsets() {
    assert_eq!(parse_error("1 + #"),
               ParseError::UnmatchedInput { found: '#', offset: 4 });
    assert_eq!(parse_error("x = (1 + (2 # 3))"),
               ParseError::UnmatchedInput { found: '#', offset: 12 });
    assert!(matches!(parse_error("1 +"), ParseError::UnexpectedEnd { .. }));
    assert!(matches!(parse_error("1 2"), ParseError::UnexpectedUnit { offset: 2, .. }));
    assert!(matches!(parse_error("= 3"), ParseError::UnexpectedUnit { offset: 0, .. }));
    assert!(matches!(parse_error("x ="), ParseError::UnexpectedEnd { .. }));
    assert!(matches!(parse_error("[1, , 2]"), ParseError::UnexpectedEnd { .. }));
}

#[test]
fn deep_nesting_is_rejected() {
    let brackets = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert!(matches!(parse_error(&brackets), ParseError::TooDeeplyNested { .. }));

    let blocks = format!("{}{}", "{".repeat(100), "}".repeat(100));
    assert!(matches!(parse_error(&blocks), ParseError::TooDeeplyNested { .. }));

    let powers = vec!["2"; 100].join(" ^ ");
    assert!(matches!(parse_error(&powers), ParseError::TooDeeplyNested { .. }));

    let shallow = format!("{}1{}", "(".repeat(20), ")".repeat(20));
    assert_renders(&shallow, "1");
}

#[test]
fn long_operator_chains_are_bounded() {
    let sum = vec!["1"; 50_000].join("+");
    assert!(matches!(parse_error(&sum), ParseError::TooDeeplyNested { limit: 256, .. }));

    let signs = format!("{}1", "-".repeat(200_000));
    assert!(matches!(parse_error(&signs), ParseError::TooDeeplyNested { limit: 256, .. }));

    let nested = |levels: usize| format!("{}1{}", "1 + 1 + 1 + 1 + 1 + (".repeat(levels), ")".repeat(levels));
    assert!(matches!(parse_error(&nested(60)), ParseError::TooDeeplyNested { limit: 256, .. }));
    assert_renders(&nested(40), "201");

    assert_renders(&vec!["1"; 200].join(" + "), "200");
    assert_renders(&format!("{}1", "-".repeat(200)), "1");
    assert_renders("x = 1 + 1 + 1; y = 1 + 1 + 1; x + y", "6");
}

#[test]
fn every_builtin_is_registered() {
    use numora::interpreter::evaluator::function::core::BUILTIN_FUNCTIONS;

    let context = Context::new();
    for name in BUILTIN_FUNCTIONS {
        assert!(context.functions.contains_key(*name), "{name} is not registered");
        assert!(context.call_function(name, &Value::from(1.0)).is_ok(), "{name}(1) failed");
    }
}
