//! Deterministic hash-based type identity.
//!
//! This module provides [`TypeToken`], a 64-bit handle that identifies one
//! native argument type for the lifetime of the process. Tokens are computed
//! deterministically from the registered type name, so:
//!
//! - the same name always yields the same token (forward references work),
//! - registration order does not matter,
//! - "same type" is a single integer comparison.
//!
//! Two actual arguments have the same type iff their tokens compare equal;
//! this is the handle-identity contract the dispatch core is built on.
//!
//! # Examples
//!
//! ```
//! use overpass_core::TypeToken;
//!
//! let a = TypeToken::from_name("Vector3");
//! let b = TypeToken::from_name("Vector3");
//! assert_eq!(a, b);
//! assert_ne!(a, TypeToken::from_name("Matrix4"));
//! ```

use std::fmt;

use xxhash_rust::xxh64::xxh64;

/// Domain-mixing constants for token computation.
///
/// Separate domains keep a type named `draw` and a function named `draw`
/// from ever colliding.
mod domain {
    /// Marker for type tokens.
    pub const TYPE: u64 = 0x6d1f3a58c2e94b07;

    /// Marker for native function identities.
    pub const FUNCTION: u64 = 0xb34a90e715c8d2f6;

    /// Chain multiplier for signature folding.
    pub const SEP: u64 = 0x51a2bd4c9e8f7306;

    /// Per-position salt so parameter order matters.
    pub const PARAM: u64 = 0x9e3779b97f4a7c15;
}

/// A deterministic 64-bit handle identifying one native argument type.
///
/// Created once at registration, immutable, and valid for the process
/// lifetime. Equality by handle value is the identity test used everywhere
/// in the dispatch core, including resolution-cache keys.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeToken(u64);

impl TypeToken {
    /// Empty/invalid token.
    pub const EMPTY: TypeToken = TypeToken(0);

    /// Create a token from a qualified type name.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeToken(domain::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Create an identity for a native function from its name and formal
    /// parameter tokens.
    ///
    /// Parameter order matters: `(int, float)` and `(float, int)` fold to
    /// different values, so overloads stay distinct.
    #[inline]
    pub fn from_function(name: &str, params: &[TypeToken]) -> Self {
        let mut hash = domain::FUNCTION ^ xxh64(name.as_bytes(), 0);
        for (i, param) in params.iter().enumerate() {
            let salt = domain::PARAM.wrapping_add(i as u64);
            hash = hash.wrapping_mul(domain::SEP).wrapping_add(salt ^ param.0);
        }
        TypeToken(hash)
    }

    /// Check whether this is the empty/invalid token.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying handle value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeToken({:#018x})", self.0)
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Well-known tokens for the bundled value model.
///
/// These cover the variants of [`ScriptValue`](crate::ScriptValue); embedders
/// registering their own types mint tokens with [`TypeToken::from_name`].
pub mod builtin {
    use super::TypeToken;

    /// Token for `void`.
    pub fn void() -> TypeToken {
        TypeToken::from_name("void")
    }

    /// Token for `bool`.
    pub fn boolean() -> TypeToken {
        TypeToken::from_name("bool")
    }

    /// Token for `int` (64-bit signed).
    pub fn int() -> TypeToken {
        TypeToken::from_name("int")
    }

    /// Token for `float` (64-bit).
    pub fn float() -> TypeToken {
        TypeToken::from_name("float")
    }

    /// Token for `string`.
    pub fn string() -> TypeToken {
        TypeToken::from_name("string")
    }

    /// Token for the null literal.
    pub fn null() -> TypeToken {
        TypeToken::from_name("null")
    }
}
