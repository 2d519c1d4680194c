use std::fmt;

/// An expression tree node.
///
/// Trees are built bottom-up by the parser: every node owns its children and
/// nothing is shared, so a tree can never contain a cycle. Once built a tree is
/// never mutated; evaluation only reads it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3` or `2.5`.
    Literal {
        /// The constant value.
        value: f64,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Unary minus (e.g. `-x`).
    Negate {
        /// The operand expression.
        expr: Box<Self>,
    },
    /// Application of a builtin single-argument function (e.g. `sin(x)`).
    FunctionCall {
        /// The function being applied.
        function: Function,
        /// The argument expression.
        argument: Box<Self>,
    },
}

impl Expr {
    /// Builds a literal node.
    #[must_use]
    pub const fn literal(value: f64) -> Self {
        Self::Literal { value }
    }

    /// Builds a variable reference node.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Builds a binary node from two already-built operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Wraps `expr` in a negation.
    #[must_use]
    pub fn negate(expr: Self) -> Self {
        Self::Negate { expr: Box::new(expr) }
    }

    /// Wraps `argument` in a call to `function`.
    #[must_use]
    pub fn call(function: Function, argument: Self) -> Self {
        Self::FunctionCall { function,
                             argument: Box::new(argument) }
    }
}

/// Renders the tree fully parenthesised, so the grouping chosen by the parser
/// is visible.
///
/// # Example
/// ```
/// use alg::ast::{BinaryOperator, Expr};
///
/// let expr = Expr::binary(Expr::literal(1.0),
///                         BinaryOperator::Add,
///                         Expr::binary(Expr::variable("x"),
///                                      BinaryOperator::Mul,
///                                      Expr::literal(2.0)));
///
/// assert_eq!(expr.to_string(), "(1 + (x * 2))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::Variable { name } => write!(f, "{name}"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::Negate { expr } => write!(f, "-{expr}"),
            Self::FunctionCall { function, argument } => {
                let argument = argument.to_string();
                // Binary operands already carry their own parentheses.
                if argument.starts_with('(') {
                    write!(f, "{function}{argument}")
                } else {
                    write!(f, "{function}({argument})")
                }
            },
        }
    }
}

/// One parsed line: an output variable bound to the expression computing it.
///
/// A bare lookup such as `x` is represented as the statement `x = x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// The variable the result is written to.
    pub target: String,
    /// The expression producing the value.
    pub expr:   Expr,
}

impl Statement {
    #[must_use]
    pub fn new(target: impl Into<String>, expr: Expr) -> Self {
        Self { target: target.into(),
               expr }
    }

    /// Returns the name of the output variable.
    #[must_use]
    pub fn output_variable(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.target, self.expr)
    }
}

/// Represents a binary operator.
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
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

/// The builtin single-argument functions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Function {
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
    /// `log`, base 10.
    Log,
    /// `ln`, natural logarithm.
    Ln,
    /// `sqrt`
    Sqrt,
}

impl Function {
    /// Every builtin, in the order they are documented.
    pub const ALL: [Self; 6] = [Self::Sin, Self::Cos, Self::Tan, Self::Log, Self::Ln, Self::Sqrt];

    /// Looks up a builtin by the identifier used in source text.
    ///
    /// # Example
    /// ```
    /// use alg::ast::Function;
    ///
    /// assert_eq!(Function::from_name("sqrt"), Some(Function::Sqrt));
    /// assert_eq!(Function::from_name("Sin"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|function| function.name() == name)
    }

    /// The identifier naming this builtin in source text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
