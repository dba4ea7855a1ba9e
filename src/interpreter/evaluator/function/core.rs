use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, FunctionFn},
            function::{builtin, min_max},
        },
        scope::ScopeId,
        value::core::Value,
    },
};

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a string name and a function pointer implementing the
/// builtin.
///
/// The macro produces:
/// - `BuiltinDef` (table entry),
/// - `BUILTIN_TABLE` (static table the context registry is filled from),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        /// One entry of the builtin table.
        #[derive(Debug)]
        pub struct BuiltinDef {
            /// Name the function is called by.
            pub name: &'static str,
            /// Implementation.
            pub func: FunctionFn,
        }
        /// Every builtin, in registration order.
        pub static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        /// Names of every builtin.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"    => builtin::abs,
    "sqrt"   => builtin::sqrt,
    "exp"    => builtin::exp,
    "ln"     => builtin::ln,
    "sin"    => builtin::sin,
    "cos"    => builtin::cos,
    "tan"    => builtin::tan,
    "sinh"   => builtin::sinh,
    "cosh"   => builtin::cosh,
    "tanh"   => builtin::tanh,
    "arsinh" => builtin::arsinh,
    "conj"   => builtin::conj,
    "sum"    => builtin::sum,
    "length" => builtin::length,
    "max"    => min_max::max,
    "min"    => min_max::min,
}

impl Context {
    /// Evaluates a call by name.
    ///
    /// The arguments are evaluated and aggregated first. If `name` is bound to
    /// a value in the scope chain, that value is invoked with the argument
    /// (indexing). Otherwise the function registry is consulted.
    ///
    /// # Parameters
    /// - `name`: Function or variable name.
    /// - `scope`: Scope the call was parsed in.
    /// - `arguments`: Argument rows of the call.
    ///
    /// # Errors
    /// - [`RuntimeError::UnknownFunction`] if the name is neither bound nor
    ///   registered.
    /// - Any error raised by the function or by indexing.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     scope: ScopeId,
                                     arguments: &[Vec<Expr>])
                                     -> EvalResult<Value> {
        let argument = self.eval_arguments(arguments)?;

        if let Some(target) = self.scopes.lookup(scope, name) {
            return target.invoke(&argument);
        }

        self.call_function(name, &argument)
    }

    /// Calls a registered function with an already aggregated argument.
    ///
    /// # Example
    /// ```
    /// use numora::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let context = Context::new();
    /// let root = context.call_function("sqrt", &Value::from(16.0)).unwrap();
    /// assert_eq!(root, Value::from(4.0));
    ///
    /// assert!(context.call_function("nope", &Value::from(1.0)).is_err());
    /// ```
    pub fn call_function(&self, name: &str, argument: &Value) -> EvalResult<Value> {
        let function = self.functions
                           .get(name)
                           .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string() })?;
        function(argument)
    }
}
