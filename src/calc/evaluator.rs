//! Expression evaluator adapter.
//!
//! Hands a sanitized buffer to `evalexpr`, then classifies the outcome:
//! a finite number, a square root of a negative number (soft warning,
//! value kept), or an [`EvaluationError`].

use super::sanitize::{sanitize, POW, SQRT};
use crate::model::{Buffer, EvaluationError, NegativeSqrtWarning};
use evalexpr::{
    eval_with_context, ContextWithMutableFunctions, EvalexprError, EvalexprResult, Function,
    HashMapContext, Value,
};
use tracing::debug;

/// A successful evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Display form of the value; becomes the new buffer.
    pub display: String,
    /// The computed value.
    pub value: f64,
    /// Set when a square root produced a negative or non-real result.
    pub warning: Option<NegativeSqrtWarning>,
}

/// Evaluate the buffer.
///
/// Pure: the caller decides what to do with the result (commit to history,
/// notify, leave the buffer alone).
///
/// # Errors
///
/// - [`EvaluationError::EmptyInput`] for an empty, whitespace-only, or error buffer.
///   The evaluator is not invoked.
/// - [`EvaluationError::Syntax`] when the sanitizer rejects the text.
/// - [`EvaluationError::Evaluator`] when `evalexpr` rejects the expression.
/// - [`EvaluationError::NonFinite`] for infinite results, and for NaN outside a square root.
pub fn evaluate(buffer: &Buffer) -> Result<Evaluation, EvaluationError> {
    if buffer.is_blank() {
        return Err(EvaluationError::EmptyInput);
    }

    let sanitized = sanitize(buffer.as_str())?;
    debug!(
        input = buffer.as_str(),
        sanitized = sanitized.expression(),
        "Evaluating expression"
    );

    let value = eval_number(sanitized.expression()).map_err(|e| EvaluationError::Evaluator {
        message: e.to_string(),
    })?;

    if value.is_infinite() {
        return Err(EvaluationError::NonFinite { value });
    }

    if sanitized.uses_sqrt() && (value.is_nan() || value < 0.0) {
        return Ok(Evaluation {
            display: format_value(value),
            value,
            warning: Some(NegativeSqrtWarning),
        });
    }

    if !value.is_finite() {
        return Err(EvaluationError::NonFinite { value });
    }

    Ok(Evaluation {
        display: format_value(value),
        value,
        warning: None,
    })
}

/// Format a value for the display line and history.
///
/// Mirrors the usual calculator display: plain decimal notation for
/// ordinary magnitudes, exponent notation beyond 1e21 or below 1e-7,
/// and `0` for negative zero.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude.is_finite() && (magnitude >= 1e21 || magnitude < 1e-7) {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

fn eval_number(expression: &str) -> EvalexprResult<f64> {
    let context = function_context()?;
    eval_with_context(expression, &context)?.as_number()
}

/// Context exposing the two functions the keypad can produce.
fn function_context() -> EvalexprResult<HashMapContext> {
    let mut context = HashMapContext::new();
    context.set_function(
        SQRT.to_string(),
        Function::new(|argument: &Value| Ok(Value::Float(argument.as_number()?.sqrt()))),
    )?;
    context.set_function(
        POW.to_string(),
        Function::new(|argument: &Value| {
            let arguments = argument.as_fixed_len_tuple(2)?;
            let [base, exponent] = arguments.as_slice() else {
                return Err(EvalexprError::CustomMessage(
                    "pow expects two arguments".to_string(),
                ));
            };
            Ok(Value::Float(base.as_number()?.powf(exponent.as_number()?)))
        }),
    )?;
    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(text: &str) -> Result<Evaluation, EvaluationError> {
        evaluate(&Buffer::from(text))
    }

    #[test]
    fn adds_integers() {
        let result = eval("12+30").unwrap();
        assert_eq!(result.display, "42");
        assert_eq!(result.value, 42.0);
        assert!(result.warning.is_none());
    }

    #[test]
    fn division_is_floating_point() {
        assert_eq!(eval("7÷2").unwrap().display, "3.5");
    }

    #[test]
    fn respects_precedence_and_parentheses() {
        assert_eq!(eval("2+3×4").unwrap().display, "14");
        assert_eq!(eval("(2+3)×4").unwrap().display, "20");
    }

    #[test]
    fn square_root() {
        let result = eval("sqrt(9)").unwrap();
        assert_eq!(result.display, "3");
        assert!(result.warning.is_none());
    }

    #[test]
    fn square_via_pow() {
        assert_eq!(eval("pow(3+1, 2)").unwrap().display, "16");
    }

    #[test]
    fn percent_rewrite_evaluates() {
        assert_eq!(eval("50 / 100").unwrap().display, "0.5");
    }

    #[test]
    fn letter_x_multiplies() {
        assert_eq!(eval("6x7").unwrap().display, "42");
        assert_eq!(eval("2xsqrt(9)").unwrap().display, "6");
    }

    #[test]
    fn negative_sqrt_warns_but_succeeds() {
        let result = eval("sqrt(-16)").unwrap();
        assert!(result.value.is_nan());
        assert_eq!(result.display, "NaN");
        assert_eq!(result.warning, Some(NegativeSqrtWarning));
    }

    #[test]
    fn negative_result_with_sqrt_warns() {
        let result = eval("0-sqrt(9)").unwrap();
        assert_eq!(result.display, "-3");
        assert_eq!(result.warning, Some(NegativeSqrtWarning));
    }

    #[test]
    fn negative_result_without_sqrt_does_not_warn() {
        let result = eval("4-20").unwrap();
        assert_eq!(result.display, "-16");
        assert!(result.warning.is_none());
    }

    #[test]
    fn empty_input_is_rejected_before_evaluation() {
        assert_eq!(eval(""), Err(EvaluationError::EmptyInput));
        assert_eq!(eval("   "), Err(EvaluationError::EmptyInput));
        assert_eq!(
            evaluate(&Buffer::error("earlier failure")),
            Err(EvaluationError::EmptyInput)
        );
    }

    #[test]
    fn trailing_operator_is_evaluator_error() {
        assert!(matches!(eval("5+"), Err(EvaluationError::Evaluator { .. })));
    }

    #[test]
    fn unbalanced_parentheses_is_evaluator_error() {
        assert!(matches!(
            eval("sqrt(9"),
            Err(EvaluationError::Evaluator { .. })
        ));
    }

    #[test]
    fn division_by_zero_is_rejected() {
        assert_eq!(
            eval("1÷0"),
            Err(EvaluationError::NonFinite {
                value: f64::INFINITY
            })
        );
    }

    #[test]
    fn infinity_beside_square_root_is_rejected() {
        assert_eq!(
            eval("sqrt(4)-1÷0"),
            Err(EvaluationError::NonFinite {
                value: f64::NEG_INFINITY
            })
        );
    }

    #[test]
    fn exponent_result_reads_back_in() {
        let first = eval("1÷999999999").unwrap();
        assert!(first.display.contains('e'));

        let second = eval(&format!("{}×2", first.display)).unwrap();
        assert!((second.value - 2.0 * first.value).abs() < 1e-20);
    }

    #[test]
    fn unknown_identifier_is_syntax_error() {
        assert!(matches!(
            eval("NaN+1"),
            Err(EvaluationError::Syntax { .. })
        ));
    }

    #[test]
    fn format_value_handles_edge_cases() {
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_value(1e21), "1e21");
        assert_eq!(format_value(1e-8), "1e-8");
        assert_eq!(format_value(f64::NAN), "NaN");
        assert_eq!(format_value(-2.5), "-2.5");
    }
}
