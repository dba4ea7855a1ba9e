use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        matcher::Unit,
        parser::{
            core::{ParseResult, ParseState},
            statement::parse_statements,
        },
    },
};

/// Parses a `{ ... }` scoped block.
///
/// Allocates a child scope of the current scope, then parses the interior as
/// an independent `;`-separated statement sequence that belongs to the new
/// scope. This happens entirely at parse time, so a syntax error anywhere in
/// the block fails the whole program before anything runs.
///
/// # Parameters
/// - `unit`: The matched block unit, braces included.
/// - `state`: Parser state; its current scope becomes the block's parent.
///
/// # Returns
/// An `Expr::ScopedBlock` node owning the new scope.
///
/// # Errors
/// - `TooDeeplyNested` if the block nests beyond the limit.
/// - Any error from parsing the interior.
pub fn parse_scoped_block(unit: &Unit<'_>, state: &mut ParseState<'_>) -> ParseResult<Expr> {
    let (inner, inner_offset) = unit.interior()
                                    .ok_or_else(|| ParseError::UnexpectedUnit { found:  unit.text.to_string(),
                                                                                offset: unit.offset, })?;

    state.enter(unit.offset)?;

    let scope = state.arena.allocate(Some(state.scope));
    state.allocated.push(scope);

    let parent = std::mem::replace(&mut state.scope, scope);
    let statements = parse_statements(inner, inner_offset, state);
    state.scope = parent;
    state.leave();

    Ok(Expr::ScopedBlock { scope,
                           statements: statements?,
                           offset: unit.offset })
}
