use log::trace;
use logos::Logos;

use crate::{
    ast::{BinaryOperator, Expr, Function},
    error::ParseError,
    interpreter::{
        lexer::Token,
        options::{Associativity, Options},
        parser::operator::{ADDITIVE, Pending},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses the right-hand side of a statement into an expression tree.
///
/// This is a single left-to-right pass of the shunting-yard algorithm over the
/// lexer's token stream. Operands go on one stack and pending operators on
/// another; an incoming binary operator first flushes every pending operator
/// that binds at least as tightly, then waits on the stack itself. Unary minus
/// and function application bind tightest and are resolved eagerly: a pending
/// negation is applied as soon as its operand is complete, and a function tag
/// is applied when the parenthesised argument following it closes.
///
/// # Parameters
/// - `source`: The expression text, without the `name =` prefix.
/// - `options`: Dialect switches; only `options.power` matters here.
///
/// # Errors
/// - `UnexpectedToken` for text that is not a token, for a `)` without an
///   operand or matching `(`, and for a unary minus with nothing to negate.
/// - `InvalidExpression` when the stacks do not reduce to exactly one tree.
///
/// # Example
/// ```
/// use alg::interpreter::{options::Options, parser::core::parse_expression};
///
/// let expr = parse_expression("(10 - x) * pi / 2 ^ 2", &Options::default()).unwrap();
/// assert_eq!(expr.to_string(), "(((10 - x) * pi) / (2 ^ 2))");
/// ```
pub fn parse_expression(source: &str, options: &Options) -> ParseResult<Expr> {
    let mut yard = ShuntingYard::new(source, *options);
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let Ok(token) = token else {
            return Err(ParseError::unexpected(lexer.slice()));
        };
        yard.push_token(token)?;
    }

    yard.finish()
}

/// The two stacks and the unary-minus flag for one expression.
struct ShuntingYard<'a> {
    source:                &'a str,
    options:               Options,
    operands:              Vec<Expr>,
    operators:             Vec<Pending>,
    /// Whether the last token leaves us expecting an operand, in which case
    /// `-` is unary. The start of the expression counts.
    previous_was_operator: bool,
}

impl<'a> ShuntingYard<'a> {
    const fn new(source: &'a str, options: Options) -> Self {
        Self { source,
               options,
               operands: Vec::new(),
               operators: Vec::new(),
               previous_was_operator: true }
    }

    fn push_token(&mut self, token: Token) -> ParseResult<()> {
        match token {
            Token::Number(value) => self.push_operand(Expr::literal(value)),
            Token::Identifier(name) => match Function::from_name(&name) {
                Some(function) => self.push_operator(Pending::Function(function)),
                None => self.push_operand(Expr::Variable { name }),
            },
            Token::Plus => self.push_binary(BinaryOperator::Add)?,
            Token::Minus if self.previous_was_operator => self.push_operator(Pending::Negate),
            Token::Minus => self.push_binary(BinaryOperator::Sub)?,
            Token::Star => self.push_binary(BinaryOperator::Mul)?,
            Token::Slash => self.push_binary(BinaryOperator::Div)?,
            Token::Caret => self.push_binary(BinaryOperator::Pow)?,
            Token::LeftParen => self.push_operator(Pending::OpenParen),
            Token::RightParen => self.close_paren()?,
            Token::Ignored => {},
        }
        Ok(())
    }

    /// Pushes a complete operand, first wrapping it in every negation waiting
    /// directly above it.
    fn push_operand(&mut self, mut expr: Expr) {
        while self.operators.last() == Some(&Pending::Negate) {
            self.operators.pop();
            expr = Expr::negate(expr);
        }
        self.operands.push(expr);
        self.previous_was_operator = false;
    }

    fn push_operator(&mut self, pending: Pending) {
        self.operators.push(pending);
        self.previous_was_operator = true;
    }

    fn push_binary(&mut self, op: BinaryOperator) -> ParseResult<()> {
        let incoming = Pending::Binary(op);
        let mut tier = incoming.precedence();
        if op == BinaryOperator::Pow && self.options.power == Associativity::Right {
            // Leave earlier `^` waiting so the right operand groups first.
            tier += 1;
        }
        self.flush(tier)?;
        self.push_operator(incoming);
        Ok(())
    }

    /// Folds pending operators of tier `tier` or tighter, stopping at the
    /// first open parenthesis.
    fn flush(&mut self, tier: u8) -> ParseResult<()> {
        while let Some(&top) = self.operators.last() {
            if top == Pending::OpenParen || top.precedence() < tier {
                break;
            }
            self.operators.pop();
            self.fold(top)?;
        }
        Ok(())
    }

    fn close_paren(&mut self) -> ParseResult<()> {
        if self.previous_was_operator {
            return Err(ParseError::unexpected(")"));
        }

        self.flush(ADDITIVE)?;
        if self.operators.pop() != Some(Pending::OpenParen) {
            return Err(ParseError::unexpected(")"));
        }

        let mut expr = self.pop_operand()?;
        while let Some(&top) = self.operators.last()
              && top.is_unary()
        {
            self.operators.pop();
            expr = match top {
                Pending::Function(function) => Expr::call(function, expr),
                _ => Expr::negate(expr),
            };
        }
        self.operands.push(expr);
        self.previous_was_operator = false;
        Ok(())
    }

    /// Replaces the operands consumed by `pending` with the node it builds.
    fn fold(&mut self, pending: Pending) -> ParseResult<()> {
        let node = match pending {
            Pending::Binary(op) => {
                let right = self.pop_operand()?;
                let left = self.pop_operand()?;
                Expr::binary(left, op, right)
            },
            Pending::Function(function) => Expr::call(function, self.pop_operand()?),
            Pending::Negate | Pending::OpenParen => {
                return Err(ParseError::unexpected(pending.symbol()));
            },
        };
        trace!("folded '{}' into {node}", pending.symbol());
        self.operands.push(node);
        Ok(())
    }

    fn pop_operand(&mut self) -> ParseResult<Expr> {
        self.operands.pop().ok_or_else(|| ParseError::invalid(self.source))
    }

    /// Drains the operator stack and returns the single remaining tree.
    fn finish(mut self) -> ParseResult<Expr> {
        let source = self.source;

        while let Some(pending) = self.operators.pop() {
            self.fold(pending).map_err(|_| ParseError::invalid(source))?;
        }

        match (self.operands.pop(), self.operands.is_empty()) {
            (Some(expr), true) => Ok(expr),
            _ => Err(ParseError::invalid(source)),
        }
    }
}
