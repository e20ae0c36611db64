use crate::error::{Error, Result};

/// A formula compiled against a single free variable.
pub struct CompiledExpression {
    eval: Box<dyn Fn(f64) -> f64>,
}

impl CompiledExpression {
    pub fn new(eval: impl Fn(f64) -> f64 + 'static) -> Self {
        Self {
            eval: Box::new(eval),
        }
    }

    /// Evaluates the formula with the free variable set to `value`.
    #[inline]
    pub fn evaluate(&self, value: f64) -> f64 {
        (self.eval)(value)
    }
}

/// Turns expression text into something that can be evaluated.
///
/// Failures are reported as [`Error::Compile`] carrying the position the
/// evaluator blamed.
pub trait ExpressionCompiler {
    fn compile(&self, text: &str, variable: &str) -> Result<CompiledExpression>;
}

/// [`ExpressionCompiler`] backed by `meval`, which understands the usual
/// arithmetic operators, `^`, and functions such as `sin`, `exp` or `sqrt`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MevalCompiler;

impl ExpressionCompiler for MevalCompiler {
    fn compile(&self, text: &str, variable: &str) -> Result<CompiledExpression> {
        let expr: meval::Expr = text.parse().map_err(|e| compile_error(text, e))?;
        let func = expr.bind(variable).map_err(|e| compile_error(text, e))?;
        Ok(CompiledExpression::new(func))
    }
}

/// Positions are byte offsets into `text`, the unit meval reports in.
fn compile_error(text: &str, err: meval::Error) -> Error {
    let end = text.len();
    let position = match &err {
        meval::Error::ParseError(meval::ParseError::UnexpectedToken(pos)) => *pos,
        meval::Error::RPNError(rpn) => match rpn {
            meval::RPNError::MismatchedLParen(pos)
            | meval::RPNError::MismatchedRParen(pos)
            | meval::RPNError::UnexpectedComma(pos)
            | meval::RPNError::NotEnoughOperands(pos) => *pos,
            _ => end,
        },
        meval::Error::UnknownVariable(name) => find_identifier(text, name, false).unwrap_or(end),
        meval::Error::Function(name, _) => find_identifier(text, name, true).unwrap_or(end),
        _ => end,
    };
    Error::Compile {
        position,
        message: err.to_string(),
    }
}

/// Byte offset of the first whole identifier equal to `name`. With `call`
/// set, only identifiers followed by `(` count.
fn find_identifier(text: &str, name: &str, call: bool) -> Option<usize> {
    let is_ident = |c: char| c.is_ascii_alphanumeric() || c == '_';
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if !is_ident(c) {
            continue;
        }
        let mut end = start + c.len_utf8();
        while let Some(&(i, c)) = chars.peek() {
            if !is_ident(c) {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }
        if &text[start..end] != name {
            continue;
        }
        if !call || text[end..].trim_start().starts_with('(') {
            return Some(start);
        }
    }
    None
}
