use numora::{
    error::ParseError,
    interpreter::{
        matcher::{RECOGNIZERS, Recognizer, UnitKind, balanced_span, match_all, match_next_with},
        parser::core::ParseResult,
    },
};

fn kinds(text: &str) -> Vec<UnitKind> {
    match match_all(text, 0) {
        Ok(units) => units.iter().map(|unit| unit.kind).collect(),
        Err(e) => panic!("Failed to match {text}: {e}"),
    }
}

#[test]
fn function_call_beats_identifier() {
    assert_eq!(kinds("sin(x)"), [UnitKind::FunctionCall]);
    assert_eq!(kinds("sin (x)"), [UnitKind::Identifier, UnitKind::Bracket]);
    assert_eq!(kinds("sin"), [UnitKind::Identifier]);
}

#[test]
fn statement_units_in_order() {
    use UnitKind::{Identifier, MatrixBracket, Number, Operator, ScopedBlock, Selector, Separator, StringLiteral};

    assert_eq!(kinds("a = [1, 2]; { b } $ \"s\" 2i :"),
               [Identifier, Operator, MatrixBracket, Separator, ScopedBlock, Selector, StringLiteral, Number,
                Selector]);
    assert_eq!(kinds("x<=1&&y||z!=2"),
               [Identifier, Operator, Number, Operator, Identifier, Operator, Identifier, Operator, Number]);
}

#[test]
fn offsets_are_absolute() {
    let units = match_all("  a + (b)", 100).unwrap();
    let offsets: Vec<usize> = units.iter().map(|unit| unit.offset).collect();
    assert_eq!(offsets, [102, 104, 106]);

    let (inner, inner_offset) = units[2].interior().unwrap();
    assert_eq!(inner, "b");
    assert_eq!(inner_offset, 107);
}

#[test]
fn function_call_parts() {
    let units = match_all("max(1, 2)", 0).unwrap();
    assert_eq!(units[0].call_name(), Some("max"));
    assert_eq!(units[0].interior(), Some(("1, 2", 4)));
}

#[test]
fn whitespace_only_yields_nothing() {
    assert!(match_all("", 0).unwrap().is_empty());
    assert!(match_all(" \t\n ", 0).unwrap().is_empty());
}

#[test]
fn unmatched_input_reports_offset() {
    assert_eq!(match_all("1 + @", 10),
               Err(ParseError::UnmatchedInput { found: '@', offset: 14 }));
    assert_eq!(match_all("a ?", 0),
               Err(ParseError::UnmatchedInput { found: '?', offset: 2 }));
}

#[test]
fn balanced_spans_skip_strings() {
    assert_eq!(balanced_span("(\")\" + 1) rest", '(', ')', 0), Ok(Some(9)));
    assert_eq!(balanced_span("{ \"}\\\"}\" }", '{', '}', 0), Ok(Some(10)));
    assert_eq!(kinds("[\"]\", 1]"), [UnitKind::MatrixBracket]);
}

#[test]
fn balanced_spans_count_only_their_own_pair() {
    assert_eq!(balanced_span("[(]", '[', ']', 0), Ok(Some(3)));
    assert_eq!(balanced_span("((a)", '(', ')', 7),
               Err(ParseError::UnbalancedBrackets { open: '(', offset: 7 }));
}

#[test]
fn unbalanced_brackets_point_at_the_opening() {
    assert_eq!(match_all("1 + { a = 1;", 0),
               Err(ParseError::UnbalancedBrackets { open: '{', offset: 4 }));
    assert_eq!(match_all("f(1, [2", 0),
               Err(ParseError::UnbalancedBrackets { open: '(', offset: 1 }));
}

fn recognize_word_ab(text: &str, _offset: usize) -> ParseResult<Option<usize>> {
    Ok(text.starts_with("ab").then_some(2))
}

fn recognize_word_abc(text: &str, _offset: usize) -> ParseResult<Option<usize>> {
    Ok(text.starts_with("abc").then_some(3))
}

#[test]
fn first_recognizer_in_the_table_wins() {
    let short_first = [Recognizer { kind:      UnitKind::Identifier,
                                    recognize: recognize_word_ab, },
                       Recognizer { kind:      UnitKind::StringLiteral,
                                    recognize: recognize_word_abc, }];
    let long_first = [short_first[1], short_first[0]];

    let (unit, next) = match_next_with(&short_first, "abc", 0, 0).unwrap().unwrap();
    assert_eq!((unit.kind, unit.text, next), (UnitKind::Identifier, "ab", 2));

    let (unit, next) = match_next_with(&long_first, "abc", 0, 0).unwrap().unwrap();
    assert_eq!((unit.kind, unit.text, next), (UnitKind::StringLiteral, "abc", 3));
}

#[test]
fn reordered_default_table_changes_the_result() {
    let mut table = RECOGNIZERS.to_vec();
    let identifier = table.iter()
                          .position(|r| r.kind == UnitKind::Identifier)
                          .unwrap();
    let identifier = table.remove(identifier);
    table.insert(0, identifier);

    let (unit, _) = match_next_with(&table, "sin(x)", 0, 0).unwrap().unwrap();
    assert_eq!(unit.kind, UnitKind::Identifier);
    assert_eq!(unit.text, "sin");
}
