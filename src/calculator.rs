//! Calculator core: operation enum, pure dispatch, domain errors
//!
//! - [`Operation`] - closed set of supported operations (wire literals)
//! - [`Operation::apply`] - exhaustive dispatch to IEEE-754 arithmetic
//! - [`CalcError`] - classified domain errors (division by zero)
//!
//! Everything here is pure: no I/O, no shared state, deterministic
//! output for identical inputs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// Operation
// ============================================================================

/// Supported calculator operation
///
/// Serializes as the lowercase literal (`"add"`, `"subtract"`,
/// `"multiply"`, `"divide"`). Any other literal fails deserialization,
/// so dispatch only ever sees one of the four variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All supported operations, in the order they are documented.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Wire literal for this operation
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Display symbol for this operation
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    /// Human-readable description for `GET /operations`
    pub fn description(self) -> &'static str {
        match self {
            Operation::Add => "Addition (a + b)",
            Operation::Subtract => "Subtraction (a - b)",
            Operation::Multiply => "Multiplication (a × b)",
            Operation::Divide => "Division (a ÷ b)",
        }
    }

    /// Apply this operation to two operands
    ///
    /// Standard IEEE-754 double-precision semantics. Division by zero
    /// (including `-0.0`) is a classified [`CalcError`], never a silent
    /// `NaN`/`Inf`.
    pub fn apply(self, num1: f64, num2: f64) -> Result<f64, CalcError> {
        match self {
            Operation::Add => Ok(num1 + num2),
            Operation::Subtract => Ok(num1 - num2),
            Operation::Multiply => Ok(num1 * num2),
            Operation::Divide => {
                if num2 == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(num1 / num2)
                }
            }
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Domain Errors
// ============================================================================

/// Domain error from the arithmetic step
///
/// Distinct from schema validation errors: the request was well-typed,
/// but the operand combination is semantically invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_subtract_multiply_exact() {
        assert_eq!(Operation::Add.apply(10.0, 5.0), Ok(15.0));
        assert_eq!(Operation::Subtract.apply(10.0, 5.0), Ok(5.0));
        assert_eq!(Operation::Multiply.apply(2.5, 4.0), Ok(10.0));
    }

    #[test]
    fn test_add_multiply_commutative() {
        let pairs = [(10.0, 5.0), (0.1, 0.2), (-3.5, 7.25), (1e300, 1e-300)];
        for (a, b) in pairs {
            assert_eq!(Operation::Add.apply(a, b), Operation::Add.apply(b, a));
            assert_eq!(
                Operation::Multiply.apply(a, b),
                Operation::Multiply.apply(b, a)
            );
        }
    }

    #[test]
    fn test_subtract_antisymmetric() {
        let pairs = [(10.0, 5.0), (0.1, 0.2), (-3.5, 7.25)];
        for (a, b) in pairs {
            let forward = Operation::Subtract.apply(a, b).unwrap();
            let backward = Operation::Subtract.apply(b, a).unwrap();
            assert_eq!(forward, -backward);
        }
    }

    #[test]
    fn test_divide_matches_operator() {
        let pairs = [(10.0, 4.0), (1.0, 3.0), (-9.0, 0.5), (0.0, 7.0)];
        for (a, b) in pairs {
            assert_eq!(Operation::Divide.apply(a, b), Ok(a / b));
        }
    }

    #[test]
    fn test_divide_by_zero_always_classified() {
        for a in [0.0, 1.0, -1.0, f64::MAX, 1e-300] {
            assert_eq!(
                Operation::Divide.apply(a, 0.0),
                Err(CalcError::DivisionByZero)
            );
        }
        // -0.0 compares equal to 0.0, so it is rejected too
        assert_eq!(
            Operation::Divide.apply(1.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_multiply_divide_round_trip() {
        let pairs = [(10.0, 4.0), (0.3, 7.0), (-12.5, 3.0)];
        for (a, b) in pairs {
            let product = Operation::Multiply.apply(a, b).unwrap();
            let back = Operation::Divide.apply(product, b).unwrap();
            assert!((back - a).abs() <= f64::EPSILON * a.abs().max(1.0));
        }
    }

    #[test]
    fn test_dispatch_idempotent() {
        for op in Operation::ALL {
            assert_eq!(op.apply(6.25, 2.5), op.apply(6.25, 2.5));
        }
    }

    #[test]
    fn test_divide_by_zero_message() {
        assert_eq!(
            CalcError::DivisionByZero.to_string(),
            "Cannot divide by zero"
        );
    }

    #[test]
    fn test_wire_literals() {
        for op in Operation::ALL {
            let json = serde_json::to_string(&op).unwrap();
            assert_eq!(json, format!("\"{}\"", op.as_str()));
            let parsed: Operation = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, op);
        }
        // Exact-match, case-sensitive
        assert!(serde_json::from_str::<Operation>("\"Add\"").is_err());
        assert!(serde_json::from_str::<Operation>("\"modulo\"").is_err());
    }
}
