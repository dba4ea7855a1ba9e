use crate::{
    ast::{BinaryOperator, Expr, Selector, UnaryOperator},
    error::ParseError,
    interpreter::{
        matcher::{Unit, UnitKind, match_all},
        parser::{
            block::parse_scoped_block,
            core::{ParseResult, ParseState, Units, parse_complete},
            utils::{split_units, unit_to_binary_operator, unit_to_literal, units_end},
        },
    },
};

/// Parses unary minus.
///
/// Minus binds looser than `^`, so `-2^2` is `-(2^2)`. Repeated signs are
/// counted instead of recursed into; each one counts against the chain
/// limit.
///
/// The rule is: `unary := "-"* power`
pub fn parse_unary(units: &mut Units<'_, '_>, state: &mut ParseState<'_>) -> ParseResult<Expr> {
    let mut signs = Vec::new();
    let operand = collect_signs(units, state, &mut signs).and_then(|()| parse_power(units, state));
    state.close_chain(signs.len());

    let mut expr = operand?;
    for offset in signs.into_iter().rev() {
        expr = Expr::UnaryOp { op: UnaryOperator::Negate,
                               expr: Box::new(expr),
                               offset };
    }
    Ok(expr)
}

fn collect_signs(units: &mut Units<'_, '_>, state: &mut ParseState<'_>, signs: &mut Vec<usize>) -> ParseResult<()> {
    while let Some(unit) = units.peek()
          && unit.is_operator("-")
    {
        state.extend_chain(unit.offset)?;
        signs.push(unit.offset);
        units.next();
    }
    Ok(())
}

/// Parses exponentiation.
///
/// `^` is right-associative and its exponent may carry a sign, so
/// `2^-1^2` is `2^(-(1^2))`.
///
/// The rule is: `power := postfix ("^" unary)?`
pub fn parse_power(units: &mut Units<'_, '_>, state: &mut ParseState<'_>) -> ParseResult<Expr> {
    let base = parse_postfix(units, state)?;

    let Some(unit) = units.peek() else {
        return Ok(base);
    };
    if unit_to_binary_operator(unit) != Some(BinaryOperator::Pow) {
        return Ok(base);
    }
    let caret = unit.offset;
    units.next();

    state.enter(caret)?;
    let exponent = parse_unary(units, state);
    state.leave();

    let offset = base.offset();
    Ok(Expr::BinaryOp { left: Box::new(base),
                        op: BinaryOperator::Pow,
                        right: Box::new(exponent?),
                        offset })
}

/// Parses a primary followed by any number of `( ... )` invocations.
///
/// A bare identifier followed by a bracket becomes a call by name, the same
/// as the `name(...)` unit.
///
/// The rule is: `postfix := primary ("(" arguments ")")*`
pub fn parse_postfix(units: &mut Units<'_, '_>, state: &mut ParseState<'_>) -> ParseResult<Expr> {
    let mut expr = parse_primary(units, state)?;

    while let Some(unit) = units.peek()
          && unit.kind == UnitKind::Bracket
    {
        let unit = **unit;
        units.next();
        let arguments = parse_arguments(&unit, state)?;

        expr = match expr {
            Expr::Identifier { name, scope, offset } => Expr::FunctionCall { name,
                                                                             scope,
                                                                             arguments,
                                                                             offset },
            target => {
                let offset = target.offset();
                Expr::Invocation { target: Box::new(target),
                                   arguments,
                                   offset }
            },
        };
    }
    Ok(expr)
}

/// Parses a single operand unit.
///
/// Bracketed units are reparsed from their interior text; the resulting nodes
/// carry absolute offsets.
///
/// # Errors
/// - [`ParseError::UnexpectedEnd`] if no unit is left.
/// - [`ParseError::UnexpectedUnit`] for operators and separators.
pub fn parse_primary(units: &mut Units<'_, '_>, state: &mut ParseState<'_>) -> ParseResult<Expr> {
    let Some(&unit) = units.next() else {
        return Err(ParseError::UnexpectedEnd { offset: state.end });
    };
    let offset = unit.offset;

    match unit.kind {
        UnitKind::Number | UnitKind::StringLiteral => {
            let value = unit_to_literal(&unit).ok_or_else(|| unexpected(&unit))?;
            Ok(Expr::Literal { value, offset })
        },
        UnitKind::Identifier => Ok(Expr::Identifier { name: unit.text.to_string(),
                                                      scope: state.scope,
                                                      offset }),
        UnitKind::Selector => {
            let selector = if unit.text == "$" {
                Selector::LastResult
            } else {
                Selector::FullRange
            };
            Ok(Expr::Selector { selector,
                                scope: state.scope,
                                offset })
        },
        UnitKind::Bracket => {
            let (inner, inner_offset) = unit.interior().ok_or_else(|| unexpected(&unit))?;
            state.enter(offset)?;
            let inner = match_all(inner, inner_offset).and_then(|units| {
                                                          parse_complete(&units,
                                                                         inner_offset,
                                                                         state)
                                                      });
            state.leave();
            Ok(Expr::Bracket { inner: Box::new(inner?),
                               offset })
        },
        UnitKind::MatrixBracket => Ok(Expr::Matrix { rows: parse_arguments(&unit, state)?,
                                                     offset }),
        UnitKind::FunctionCall => {
            let name = unit.call_name().ok_or_else(|| unexpected(&unit))?;
            Ok(Expr::FunctionCall { name: name.to_string(),
                                    scope: state.scope,
                                    arguments: parse_arguments(&unit, state)?,
                                    offset })
        },
        UnitKind::ScopedBlock => parse_scoped_block(&unit, state),
        UnitKind::Operator | UnitKind::Separator => Err(unexpected(&unit)),
    }
}

/// Parses the interior of a bracketed unit as rows of cells.
///
/// Rows are split at `;` and cells at `,`. Empty rows are dropped, so `[]`
/// and `f()` have no rows at all; an empty cell is an error.
pub fn parse_arguments(unit: &Unit<'_>, state: &mut ParseState<'_>) -> ParseResult<Vec<Vec<Expr>>> {
    let (inner, inner_offset) = unit.interior().ok_or_else(|| unexpected(unit))?;

    state.enter(unit.offset)?;
    let rows = parse_rows(inner, inner_offset, state);
    state.leave();
    rows
}

fn parse_rows(inner: &str, inner_offset: usize, state: &mut ParseState<'_>) -> ParseResult<Vec<Vec<Expr>>> {
    let units = match_all(inner, inner_offset)?;

    let mut rows = Vec::new();
    for row in split_units(&units, ";") {
        if row.is_empty() {
            continue;
        }
        let mut cells = Vec::new();
        let mut cell_start = row[0].offset;
        for cell in split_units(row, ",") {
            cells.push(parse_complete(cell, cell_start, state)?);
            cell_start = units_end(cell, cell_start) + 1;
        }
        rows.push(cells);
    }
    Ok(rows)
}

fn unexpected(unit: &Unit<'_>) -> ParseError {
    ParseError::UnexpectedUnit { found:  unit.text.to_string(),
                                 offset: unit.offset, }
}
