use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        matcher::UnitKind,
        parser::{
            core::{ParseResult, ParseState, Units},
            unary::parse_unary,
            utils::unit_to_binary_operator,
        },
    },
};

type LevelFn = fn(&mut Units<'_, '_>, &mut ParseState<'_>) -> ParseResult<Expr>;

/// Folds `operand (op operand)*` into a left-associative tree, where `op` is
/// any operator `accepts` lets through.
///
/// Every folded operator deepens the tree by one level and counts against
/// the chain limit until the whole chain is parsed.
fn parse_left_associative(units: &mut Units<'_, '_>,
                          state: &mut ParseState<'_>,
                          accepts: fn(BinaryOperator) -> bool,
                          operand: LevelFn)
                          -> ParseResult<Expr> {
    let mut folded = 0;
    let result = fold_chain(units, state, accepts, operand, &mut folded);
    state.close_chain(folded);
    result
}

fn fold_chain(units: &mut Units<'_, '_>,
              state: &mut ParseState<'_>,
              accepts: fn(BinaryOperator) -> bool,
              operand: LevelFn,
              folded: &mut usize)
              -> ParseResult<Expr> {
    let mut left = operand(units, state)?;
    while let Some(unit) = units.peek()
          && let Some(op) = unit_to_binary_operator(unit)
          && accepts(op)
    {
        state.extend_chain(unit.offset)?;
        *folded += 1;
        units.next();

        let right = operand(units, state)?;
        let offset = left.offset();
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                offset };
    }
    Ok(left)
}

/// Parses logical OR expressions.
///
/// The rule is: `logical_or := logical_and ("||" logical_and)*`
pub fn parse_logical_or(units: &mut Units<'_, '_>, state: &mut ParseState<'_>) -> ParseResult<Expr> {
    parse_left_associative(units,
                           state,
                           |op| op == BinaryOperator::Or,
                           parse_logical_and)
}

/// Parses logical AND expressions.
///
/// The rule is: `logical_and := comparison ("&&" comparison)*`
pub fn parse_logical_and(units: &mut Units<'_, '_>, state: &mut ParseState<'_>) -> ParseResult<Expr> {
    parse_left_associative(units,
                           state,
                           |op| op == BinaryOperator::And,
                           parse_comparison)
}

/// Parses comparison expressions.
///
/// Handles `<`, `>`, `<=`, `>=`, `==` and `!=`, left-associative.
///
/// The rule is: `comparison := range (comparison_op range)*`
pub fn parse_comparison(units: &mut Units<'_, '_>, state: &mut ParseState<'_>) -> ParseResult<Expr> {
    use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

    parse_left_associative(units,
                           state,
                           |op| {
                               matches!(op,
                                        Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual)
                           },
                           parse_range)
}

/// Parses range expressions.
///
/// A `:` after a complete additive expression continues a range; two of them
/// make the middle operand the step, so `1:2:9` counts `1, 3, 5, 7, 9`.
///
/// The rule is: `range := additive (":" additive (":" additive)?)?`
pub fn parse_range(units: &mut Units<'_, '_>, state: &mut ParseState<'_>) -> ParseResult<Expr> {
    let start = parse_additive(units, state)?;
    if !next_is_colon(units) {
        return Ok(start);
    }
    units.next();

    let second = parse_additive(units, state)?;
    let offset = start.offset();
    if !next_is_colon(units) {
        return Ok(Expr::Range { start: Box::new(start),
                                step: None,
                                end: Box::new(second),
                                offset });
    }
    units.next();

    let end = parse_additive(units, state)?;
    Ok(Expr::Range { start: Box::new(start),
                     step: Some(Box::new(second)),
                     end: Box::new(end),
                     offset })
}

fn next_is_colon(units: &mut Units<'_, '_>) -> bool {
    units.peek()
         .is_some_and(|unit| unit.kind == UnitKind::Selector && unit.text == ":")
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive(units: &mut Units<'_, '_>, state: &mut ParseState<'_>) -> ParseResult<Expr> {
    parse_left_associative(units,
                           state,
                           |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub),
                           parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative(units: &mut Units<'_, '_>, state: &mut ParseState<'_>) -> ParseResult<Expr> {
    parse_left_associative(units,
                           state,
                           |op| matches!(op, BinaryOperator::Mul | BinaryOperator::Div),
                           parse_unary)
}
