use crate::interpreter::{scope::ScopeId, value::complex::ComplexNumber};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code: real and imaginary numbers, and string literals.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A real or imaginary number literal.
    Number(ComplexNumber),
    /// A string literal with escapes already resolved.
    Text(String),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(ComplexNumber::from(value))
    }
}

impl From<ComplexNumber> for LiteralValue {
    fn from(value: ComplexNumber) -> Self {
        Self::Number(value)
    }
}

/// One of the two reserved single-character selector tokens.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `:`, the unbounded range selecting every element.
    FullRange,
    /// `$`, the value of the last top-level statement.
    LastResult,
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Nodes are built once by the parser and never changed afterwards. Every
/// node records the byte offset it starts at; nodes that resolve names also
/// record the scope they were parsed in.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value:  LiteralValue,
        /// Byte offset in the source text.
        offset: usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name:   String,
        /// Scope the lookup starts from.
        scope:  ScopeId,
        /// Byte offset in the source text.
        offset: usize,
    },
    /// A reserved selector token.
    Selector {
        /// Which selector.
        selector: Selector,
        /// Scope the lookup starts from (used by `$`).
        scope:    ScopeId,
        /// Byte offset in the source text.
        offset:   usize,
    },
    /// A parenthesized sub-expression.
    Bracket {
        /// The grouped expression.
        inner:  Box<Self>,
        /// Byte offset of the opening `(`.
        offset: usize,
    },
    /// Matrix literal such as `[1, 2; 3, 4]`.
    Matrix {
        /// Rows of cells; each cell may itself be a matrix or range.
        rows:   Vec<Vec<Self>>,
        /// Byte offset of the opening `[`.
        offset: usize,
    },
    /// A unary operation.
    UnaryOp {
        /// The unary operator to apply.
        op:     UnaryOperator,
        /// The operand expression.
        expr:   Box<Self>,
        /// Byte offset in the source text.
        offset: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Byte offset of the left operand.
        offset: usize,
    },
    /// Range expression `start:end` or `start:step:end`.
    Range {
        /// First element.
        start:  Box<Self>,
        /// Optional step; `1` when absent.
        step:   Option<Box<Self>>,
        /// Inclusive bound.
        end:    Box<Self>,
        /// Byte offset of `start`.
        offset: usize,
    },
    /// Call by name, e.g. `sin(x)` or `v(2)` when `v` is a variable.
    FunctionCall {
        /// Name being called.
        name:      String,
        /// Scope used to check for a variable of the same name.
        scope:     ScopeId,
        /// Argument rows, split at `;`, each split at `,`.
        arguments: Vec<Vec<Self>>,
        /// Byte offset of the name.
        offset:    usize,
    },
    /// Invocation of an arbitrary value, e.g. `[1, 2, 3](0)`.
    Invocation {
        /// The invoked expression.
        target:    Box<Self>,
        /// Argument rows, as for `FunctionCall`.
        arguments: Vec<Vec<Self>>,
        /// Byte offset of the target.
        offset:    usize,
    },
    /// A `{ ... }` block executed in its own child scope.
    ScopedBlock {
        /// The child scope allocated for this block.
        scope:      ScopeId,
        /// Statements of the block, in order.
        statements: Vec<Statement>,
        /// Byte offset of the opening `{`.
        offset:     usize,
    },
}

impl Expr {
    /// Gets the source offset from `self`.
    /// ## Example
    /// ```
    /// use numora::ast::{Expr, LiteralValue};
    ///
    /// let expr = Expr::Literal { value:  LiteralValue::from(1.0),
    ///                            offset: 5, };
    ///
    /// assert_eq!(expr.offset(), 5);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Literal { offset, .. }
            | Self::Identifier { offset, .. }
            | Self::Selector { offset, .. }
            | Self::Bracket { offset, .. }
            | Self::Matrix { offset, .. }
            | Self::UnaryOp { offset, .. }
            | Self::BinaryOp { offset, .. }
            | Self::Range { offset, .. }
            | Self::FunctionCall { offset, .. }
            | Self::Invocation { offset, .. }
            | Self::ScopedBlock { offset, .. } => *offset,
        }
    }
}

/// Represents a statement.
///
/// Statements are the `;`-separated units of a program or scoped block.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr:   Expr,
        /// Byte offset in the source text.
        offset: usize,
    },
    /// A variable assignment binding a name to an expression.
    Assignment {
        /// The name of the variable.
        name:   String,
        /// The scope that receives the binding.
        scope:  ScopeId,
        /// The value which is being assigned.
        value:  Expr,
        /// Byte offset in the source text.
        offset: usize,
    },
}

impl Statement {
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Expression { offset, .. } | Self::Assignment { offset, .. } => *offset,
        }
    }
}

/// A parsed top-level program.
///
/// Besides its statements, a program owns every scope its scoped blocks
/// allocated while parsing; they are released together with the program.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
    /// Scopes allocated while parsing, innermost last.
    pub scopes:     Vec<ScopeId>,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and logic.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Pow,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}
