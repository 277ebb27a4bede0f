//! Rewrite display syntax into evaluator syntax.
//!
//! The buffer uses keypad glyphs (`×`, `÷`) and may use the letter `x` as a
//! multiplication sign. This pass lexes the buffer into numbers,
//! identifiers, and operators and rewrites each token on its own, so a
//! function name that happens to contain `x` is never touched.
//!
//! Integer literals are emitted as floats (`12` becomes `12.0`) so the
//! evaluator never falls back to integer division. Exponent literals such as
//! `1e-9` are expanded into plain decimals.

use crate::model::EvaluationError;

/// Function names the evaluator context provides.
pub const SQRT: &str = "sqrt";
/// Name of the power function.
pub const POW: &str = "pow";
const FUNCTIONS: [&str; 2] = [SQRT, POW];

/// Output of [`sanitize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    expression: String,
    uses_sqrt: bool,
}

impl Sanitized {
    /// Expression in evaluator syntax.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Whether the expression calls the square-root function.
    pub fn uses_sqrt(&self) -> bool {
        self.uses_sqrt
    }
}

/// Rewrite `input` into evaluator syntax.
///
/// # Errors
///
/// [`EvaluationError::Syntax`] for unknown identifiers, malformed numbers
/// (two decimal points), and characters that are not part of the grammar.
pub fn sanitize(input: &str) -> Result<Sanitized, EvaluationError> {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 8);
    let mut uses_sqrt = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            out.push(' ');
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let literal: String = chars[start..i].iter().collect();
            let mut number = normalize_number(&literal, start)?;
            if let Some(end) = exponent_end(&chars, i) {
                let exponent: String = chars[i..end].iter().collect();
                number = expand_exponent(&number, &exponent, start)?;
                i = end;
            }
            out.push_str(&number);
            continue;
        }

        if c.is_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let function = rewrite_word(&word, start, &mut out)?;
            uses_sqrt |= function == Some(SQRT);
            continue;
        }

        let rewritten = match c {
            '×' | '*' => '*',
            '÷' | '/' => '/',
            '−' | '-' => '-',
            '+' | '^' | '%' | '(' | ')' | ',' => c,
            other => {
                return Err(EvaluationError::Syntax {
                    text: other.to_string(),
                    position: i,
                })
            }
        };
        out.push(rewritten);
        i += 1;
    }

    Ok(Sanitized {
        expression: out,
        uses_sqrt,
    })
}

/// Emit a float literal for a run of digits and dots.
fn normalize_number(literal: &str, position: usize) -> Result<String, EvaluationError> {
    match literal.matches('.').count() {
        0 => Ok(format!("{literal}.0")),
        1 => {
            let mut normalized = String::with_capacity(literal.len() + 2);
            if literal.starts_with('.') {
                normalized.push('0');
            }
            normalized.push_str(literal);
            if literal.ends_with('.') {
                normalized.push('0');
            }
            Ok(normalized)
        }
        _ => Err(EvaluationError::Syntax {
            text: literal.to_string(),
            position,
        }),
    }
}

/// End of an `e[+-]digits` suffix starting at `i`, if there is one.
fn exponent_end(chars: &[char], i: usize) -> Option<usize> {
    if !matches!(chars.get(i), Some('e' | 'E')) {
        return None;
    }
    let mut j = i + 1;
    if matches!(chars.get(j), Some('+' | '-')) {
        j += 1;
    }
    if !chars.get(j).is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }
    while chars.get(j).is_some_and(|c| c.is_ascii_digit()) {
        j += 1;
    }
    Some(j)
}

/// Rewrite `1.5e-9` as a plain float literal.
///
/// Results of magnitude below 1e-7 or from 1e21 up are displayed in exponent
/// form and then become the buffer, so they have to read back in.
fn expand_exponent(
    mantissa: &str,
    exponent: &str,
    position: usize,
) -> Result<String, EvaluationError> {
    let text = format!("{mantissa}{exponent}");
    let value = text
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| EvaluationError::Syntax {
            text: text.clone(),
            position,
        })?;
    let mut plain = format!("{value}");
    if !plain.contains('.') {
        plain.push_str(".0");
    }
    Ok(plain)
}

/// Rewrite an alphabetic run. Returns the function name it resolved to, if any.
///
/// - A run made only of `x`/`X` is that many multiplication signs.
/// - A known function name passes through.
/// - Leading `x`s followed by a function name (`2xsqrt(9)`) split into
///   multiplication signs and the function.
fn rewrite_word(
    word: &str,
    position: usize,
    out: &mut String,
) -> Result<Option<&'static str>, EvaluationError> {
    let rest = word.trim_start_matches(['x', 'X']);
    let multiplications = word.len() - rest.len();

    if rest.is_empty() {
        out.extend(std::iter::repeat('*').take(multiplications));
        return Ok(None);
    }

    let function = FUNCTIONS
        .iter()
        .copied()
        .find(|name| *name == word)
        .or_else(|| FUNCTIONS.iter().copied().find(|name| *name == rest));

    match function {
        Some(name) if name == word => {
            out.push_str(name);
            Ok(Some(name))
        }
        Some(name) => {
            out.extend(std::iter::repeat('*').take(multiplications));
            out.push_str(name);
            Ok(Some(name))
        }
        None => Err(EvaluationError::Syntax {
            text: word.to_string(),
            position,
        }),
    }
}
