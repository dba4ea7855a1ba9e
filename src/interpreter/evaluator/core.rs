use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    ast::{Expr, Program, Selector, Statement, UnaryOperator},
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        constants::CONSTANTS,
        evaluator::function::core::BUILTIN_TABLE,
        parser::core::parse_program,
        scope::{ScopeArena, ScopeId},
        value::{core::Value, range::RangeValue},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Signature shared by every callable function.
///
/// A function receives exactly one argument; call arguments are aggregated
/// into a single value first. Functions must not keep or change state.
pub type FunctionFn = fn(&Value) -> EvalResult<Value>;

/// Name of the last-result binding.
pub const LAST_RESULT: &str = "$";

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the scope arena, the scope that
/// holds the constants, the session root scope that top-level programs bind
/// into, and the function registry.
///
/// ## Usage
///
/// `Context` is created once and reused. Bindings of the root scope persist
/// from one program to the next.
///
/// ```
/// use numora::interpreter::{evaluator::core::Context, value::core::Value};
///
/// let mut context = Context::new();
/// context.run("x = 2").unwrap();
///
/// let result = context.run("x * pi").unwrap();
/// assert_eq!(result, Some(Value::from(2.0 * std::f64::consts::PI)));
/// ```
#[derive(Debug)]
pub struct Context {
    /// Every scope of the session.
    pub scopes:    ScopeArena,
    /// Callable functions by name.
    pub functions: HashMap<String, FunctionFn>,
    constants:     ScopeId,
    root:          ScopeId,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with the constants bound and all built-in functions
    /// registered.
    #[must_use]
    pub fn new() -> Self {
        let mut scopes = ScopeArena::new();

        let constants = scopes.allocate(None);
        for &(name, value) in CONSTANTS {
            scopes.bind(constants, name, Value::Scalar(value));
        }
        let root = scopes.allocate(Some(constants));

        let functions = BUILTIN_TABLE.iter()
                                     .map(|def| (def.name.to_string(), def.func))
                                     .collect();

        Self { scopes,
               functions,
               constants,
               root }
    }

    /// The session root scope.
    #[must_use]
    pub const fn root(&self) -> ScopeId {
        self.root
    }

    /// The scope holding the constants; parent of the root scope.
    #[must_use]
    pub const fn constants(&self) -> ScopeId {
        self.constants
    }

    /// Registers or replaces a function.
    pub fn define_function(&mut self, name: &str, function: FunctionFn) {
        self.functions.insert(name.to_string(), function);
    }

    /// Parses `source` as a program in the root scope.
    ///
    /// Scoped blocks allocate their scopes here. If parsing fails, those
    /// scopes are released again and nothing is evaluated.
    pub fn parse(&mut self, source: &str) -> Result<Program, ParseError> {
        parse_program(source, &mut self.scopes, self.root)
    }

    /// Executes a parsed program.
    ///
    /// Statements run one at a time, in order. Each non-void result is bound
    /// to `$` in the root scope. The first failing statement stops execution;
    /// effects of the statements before it remain.
    ///
    /// # Returns
    /// The last non-void result, or `None` if there was none.
    ///
    /// # Errors
    /// [`Error::Runtime`] with the offset of the failing top-level statement.
    pub fn execute(&mut self, program: &Program) -> Result<Option<Value>, Error> {
        let mut last = None;

        for statement in &program.statements {
            trace!("executing statement at offset {}", statement.offset());
            let value = self.eval_statement(statement)
                            .map_err(|source| Error::Runtime { source,
                                                               offset: statement.offset() })?;

            if !matches!(value, Value::Void) {
                self.scopes.bind(self.root, LAST_RESULT, value.clone());
                last = Some(value);
            }
        }

        Ok(last)
    }

    /// Releases the scopes owned by `program`.
    pub fn discard(&mut self, program: Program) {
        debug!("discarding program with {} scope(s)", program.scopes.len());
        for scope in program.scopes.into_iter().rev() {
            self.scopes.release(scope);
        }
    }

    /// Parses, executes and discards `source`.
    ///
    /// # Errors
    /// [`Error::Parse`] if the program does not parse; nothing runs in that
    /// case. [`Error::Runtime`] if a statement fails.
    pub fn run(&mut self, source: &str) -> Result<Option<Value>, Error> {
        let program = self.parse(source)?;
        let result = self.execute(&program);
        self.discard(program);
        result
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// The evaluator dispatches based on expression variant. Names resolve
    /// through the scope recorded in the node at parse time.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Identifier { name, scope, .. } => {
                self.scopes
                    .lookup(*scope, name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone() })
            },
            Expr::Selector { selector, scope, .. } => self.eval_selector(*selector, *scope),
            Expr::Bracket { inner, .. } => self.eval(inner),
            Expr::Matrix { rows, .. } => self.eval_matrix(rows),
            Expr::UnaryOp { op: UnaryOperator::Negate,
                            expr,
                            .. } => self.eval(expr)?.negate(),
            Expr::BinaryOp { left, op, right, .. } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                left.binary(*op, &right)
            },
            Expr::Range { start, step, end, .. } => {
                self.eval_range(start, step.as_deref(), end)
            },
            Expr::FunctionCall { name,
                                 scope,
                                 arguments,
                                 .. } => self.eval_function_call(name, *scope, arguments),
            Expr::Invocation { target, arguments, .. } => {
                let target = self.eval(target)?;
                let argument = self.eval_arguments(arguments)?;
                target.invoke(&argument)
            },
            Expr::ScopedBlock { statements, .. } => self.eval_block(statements),
        }
    }

    /// Evaluates a single statement.
    ///
    /// Assignments bind in the scope recorded at parse time and yield the
    /// assigned value.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Value> {
        match statement {
            Statement::Expression { expr, .. } => self.eval(expr),
            Statement::Assignment { name, scope, value, .. } => {
                let value = self.eval(value)?;
                self.scopes.bind(*scope, name, value.clone());
                Ok(value)
            },
        }
    }

    /// Runs the statements of a scoped block in order.
    ///
    /// Yields the value of the last statement, or `Void` for an empty block.
    /// A failing statement aborts the block without undoing earlier ones.
    pub fn eval_block(&mut self, statements: &[Statement]) -> EvalResult<Value> {
        let mut last = Value::Void;
        for statement in statements {
            last = self.eval_statement(statement)?;
        }
        Ok(last)
    }

    fn eval_selector(&self, selector: Selector, scope: ScopeId) -> EvalResult<Value> {
        match selector {
            Selector::FullRange => Ok(Value::Range(RangeValue::full())),
            Selector::LastResult => {
                self.scopes
                    .lookup(scope, LAST_RESULT)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnboundSpecialVariable { name: LAST_RESULT.to_string() })
            },
        }
    }
}
