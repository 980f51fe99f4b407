//! Unified error types for the dispatch core.
//!
//! ## Error Hierarchy
//!
//! ```text
//! DispatchError     - surfaced to the caller of OverloadedSet::call
//! ├── ArgumentLimitExceeded
//! ├── NoMatch
//! ├── Ambiguity
//! └── Native        - propagated verbatim from the candidate's invoker
//!
//! ConversionError   - internal; recovered during the selection tournament
//! └── NoApplicableConversion
//!
//! NativeError       - raised inside native invokers
//! ```
//!
//! `NoApplicableConversion` never escapes `OverloadedSet::call`: a candidate
//! whose argument cannot be routed is silently disqualified. Everything else
//! surfaces.

use thiserror::Error;

use crate::TypeToken;

// ============================================================================
// Dispatch Errors
// ============================================================================

/// Errors surfaced by overload selection and dispatch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// More actual arguments than the dispatch core supports.
    #[error("argument limit exceeded: '{name}' called with {got} arguments (limit {limit})")]
    ArgumentLimitExceeded {
        /// The overloaded set's symbolic name.
        name: String,
        /// Number of actual arguments at the call site.
        got: usize,
        /// The supported maximum.
        limit: usize,
    },

    /// No candidate produced a possible route vector.
    #[error("no overloaded member matches arguments: '{name}({args})'")]
    NoMatch {
        /// The overloaded set's symbolic name.
        name: String,
        /// Rendered actual-argument types.
        args: String,
    },

    /// Two or more non-identical candidates tied as best.
    #[error("call is ambiguous with given arguments: '{name}({args})'")]
    Ambiguity {
        /// The overloaded set's symbolic name.
        name: String,
        /// Rendered actual-argument types.
        args: String,
    },

    /// An error raised by the candidate's native invoker.
    #[error(transparent)]
    Native(#[from] NativeError),
}

// ============================================================================
// Conversion Errors
// ============================================================================

/// Errors raised while routing arguments through the conversion graph.
///
/// Recovered at the selection level; a position with no route simply
/// disqualifies the candidate under consideration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// No conversion route exists for one argument position.
    #[error("no applicable conversion from {from} to {to} (argument {position})")]
    NoApplicableConversion {
        /// The actual argument's type.
        from: TypeToken,
        /// The formal parameter's type.
        to: TypeToken,
        /// Zero-based argument position.
        position: usize,
    },
}

// ============================================================================
// Native Errors
// ============================================================================

/// Errors raised inside native invokers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NativeError {
    /// A converted argument had an unexpected runtime shape.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected type name.
        expected: String,
        /// The actual type name.
        actual: String,
    },

    /// An argument index was out of bounds for the call.
    #[error("argument index {index} out of bounds ({count} arguments)")]
    ArgumentIndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of arguments in the call.
        count: usize,
    },

    /// A generic native failure.
    #[error("{message}")]
    Other {
        /// The error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_error_messages() {
        let err = DispatchError::ArgumentLimitExceeded {
            name: "draw".to_string(),
            got: 13,
            limit: 12,
        };
        assert_eq!(
            format!("{err}"),
            "argument limit exceeded: 'draw' called with 13 arguments (limit 12)"
        );

        let err = DispatchError::NoMatch {
            name: "draw".to_string(),
            args: "int, string".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "no overloaded member matches arguments: 'draw(int, string)'"
        );

        let err = DispatchError::Ambiguity {
            name: "draw".to_string(),
            args: "int".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "call is ambiguous with given arguments: 'draw(int)'"
        );
    }

    #[test]
    fn conversion_error_message() {
        let err = ConversionError::NoApplicableConversion {
            from: TypeToken::from_name("string"),
            to: TypeToken::from_name("int"),
            position: 2,
        };
        let rendered = format!("{err}");
        assert!(rendered.starts_with("no applicable conversion from 0x"));
        assert!(rendered.ends_with("(argument 2)"));
    }

    #[test]
    fn native_error_is_transparent_in_dispatch() {
        let native = NativeError::Other {
            message: "boom".to_string(),
        };
        let err: DispatchError = native.into();
        assert_eq!(format!("{err}"), "boom");
    }
}
