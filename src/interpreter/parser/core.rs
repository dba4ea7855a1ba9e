use std::iter::Peekable;

use log::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        matcher::Unit,
        parser::{binary::parse_logical_or, statement::parse_statements, utils::units_end},
        scope::{ScopeArena, ScopeId},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Stream of matched units consumed by the parse functions.
pub type Units<'u, 'a> = Peekable<std::slice::Iter<'u, Unit<'a>>>;

/// How deeply brackets, blocks and exponent chains may nest.
pub const MAX_NESTING_DEPTH: usize = 64;

/// How many binary operators and unary signs may stay open at once.
///
/// Each one adds a level to the expression tree, so the limit is shared by
/// every chain enclosing the unit being parsed, e.g. `1 + (2 + (3 + x))`.
pub const MAX_CHAIN_LENGTH: usize = 256;

/// State threaded through every parse function.
#[derive(Debug)]
pub struct ParseState<'s> {
    /// Arena that receives the scopes of scoped blocks.
    pub arena:     &'s mut ScopeArena,
    /// Scope that names parsed right now belong to.
    pub scope:     ScopeId,
    /// Every scope allocated so far, in allocation order.
    pub allocated: Vec<ScopeId>,
    /// Current nesting depth.
    pub depth:     usize,
    /// Operators folded into chains that are still being parsed.
    pub chain:     usize,
    /// Offset reported when an operand is missing at the end of the units
    /// being parsed.
    pub end:       usize,
}

impl<'s> ParseState<'s> {
    /// Creates a state that parses into `scope`.
    pub const fn new(arena: &'s mut ScopeArena, scope: ScopeId, end: usize) -> Self {
        Self { arena,
               scope,
               allocated: Vec::new(),
               depth: 0,
               chain: 0,
               end }
    }

    /// Enters one nesting level.
    ///
    /// # Errors
    /// [`ParseError::TooDeeplyNested`] once [`MAX_NESTING_DEPTH`] is
    /// exceeded.
    pub const fn enter(&mut self, offset: usize) -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::TooDeeplyNested { limit: MAX_NESTING_DEPTH,
                                                     offset });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves one nesting level.
    pub const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Adds one operator to the open chains.
    ///
    /// # Errors
    /// [`ParseError::TooDeeplyNested`] once [`MAX_CHAIN_LENGTH`] is exceeded.
    pub const fn extend_chain(&mut self, offset: usize) -> ParseResult<()> {
        if self.chain >= MAX_CHAIN_LENGTH {
            return Err(ParseError::TooDeeplyNested { limit: MAX_CHAIN_LENGTH,
                                                     offset });
        }
        self.chain += 1;
        Ok(())
    }

    /// Closes `length` operators of a finished chain.
    pub const fn close_chain(&mut self, length: usize) {
        self.chain = self.chain.saturating_sub(length);
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
pub fn parse_expression(units: &mut Units<'_, '_>, state: &mut ParseState<'_>) -> ParseResult<Expr> {
    parse_logical_or(units, state)
}

/// Parses `units` as exactly one expression.
///
/// # Errors
/// - [`ParseError::UnexpectedEnd`] if `units` is empty.
/// - [`ParseError::UnexpectedUnit`] if units remain after the expression.
pub fn parse_complete(units: &[Unit<'_>], fallback_end: usize, state: &mut ParseState<'_>) -> ParseResult<Expr> {
    let saved_end = std::mem::replace(&mut state.end, units_end(units, fallback_end));

    let mut iter = units.iter().peekable();
    let result = parse_expression(&mut iter, state);
    state.end = saved_end;

    let expr = result?;
    if let Some(extra) = iter.next() {
        return Err(ParseError::UnexpectedUnit { found:  extra.text.to_string(),
                                                offset: extra.offset, });
    }
    Ok(expr)
}

/// Parses a whole program into `scope`.
///
/// Every scoped block allocates a child scope in `arena` while parsing. On
/// success the program owns those scopes; on failure they are released
/// before the error is returned, so nothing of a broken program survives.
///
/// # Example
/// ```
/// use numora::interpreter::{parser::core::parse_program, scope::ScopeArena};
///
/// let mut arena = ScopeArena::new();
/// let root = arena.allocate(None);
///
/// let program = parse_program("a = 1; { b = a + 1 }", &mut arena, root).unwrap();
/// assert_eq!(program.statements.len(), 2);
/// assert_eq!(program.scopes.len(), 1);
///
/// assert!(parse_program("{ a = 1 }; { b = # }", &mut arena, root).is_err());
/// assert_eq!(arena.live_count(), 2);
/// ```
pub fn parse_program(source: &str, arena: &mut ScopeArena, scope: ScopeId) -> ParseResult<Program> {
    let mut state = ParseState::new(arena, scope, source.len());

    match parse_statements(source, 0, &mut state) {
        Ok(statements) => {
            debug!("parsed {} statement(s), {} scope(s)",
                   statements.len(),
                   state.allocated.len());
            Ok(Program { statements,
                         scopes: state.allocated })
        },
        Err(e) => {
            debug!("parse failed: {e}");
            for id in state.allocated.drain(..) {
                state.arena.release(id);
            }
            Err(e)
        },
    }
}
