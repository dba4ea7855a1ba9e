use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        matcher::{Unit, UnitKind, match_all},
        parser::{
            core::{ParseResult, ParseState, parse_complete},
            utils::{split_units, units_end},
        },
    },
};

/// Parses `text` as a `;`-separated statement sequence.
///
/// The whole text is matched into units first, so unmatched input or an
/// unbalanced bracket anywhere in it is reported before any statement is
/// built. Empty statements are skipped.
///
/// # Parameters
/// - `text`: The statement sequence.
/// - `base_offset`: Absolute offset of `text` in the program.
/// - `state`: Parser state; statements belong to its current scope.
pub fn parse_statements(text: &str,
                        base_offset: usize,
                        state: &mut ParseState<'_>)
                        -> ParseResult<Vec<Statement>> {
    let units = match_all(text, base_offset)?;

    let mut statements = Vec::new();
    for group in split_units(&units, ";") {
        if group.is_empty() {
            continue;
        }
        statements.push(parse_statement(group, state)?);
    }
    Ok(statements)
}

/// Parses one statement.
///
/// `name = expression` is an assignment bound in the current scope; anything
/// else is an expression statement.
///
/// # Errors
/// - `UnexpectedEnd` if an assignment has no right-hand side.
/// - `UnexpectedUnit` if units remain after the expression.
pub fn parse_statement(units: &[Unit<'_>], state: &mut ParseState<'_>) -> ParseResult<Statement> {
    if let [name, equals, value @ ..] = units
       && name.kind == UnitKind::Identifier
       && equals.is_operator("=")
    {
        let end = equals.offset + equals.text.len();
        if value.is_empty() {
            return Err(ParseError::UnexpectedEnd { offset: end });
        }
        return Ok(Statement::Assignment { name:   name.text.to_string(),
                                          scope:  state.scope,
                                          value:  parse_complete(value, end, state)?,
                                          offset: name.offset, });
    }

    let offset = units.first().map_or(state.end, |unit| unit.offset);
    let expr = parse_complete(units, units_end(units, offset), state)?;
    Ok(Statement::Expression { expr, offset })
}
