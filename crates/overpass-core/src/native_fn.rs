//! Native function storage and callable trait.

use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;

use crate::error::NativeError;
use crate::{ScriptValue, TypeToken};

bitflags! {
    /// Qualifiers carried by a candidate alongside its signature.
    ///
    /// Traits never participate in signature identity; a const and a
    /// non-const overload with the same parameter list are identical
    /// alternatives as far as ambiguity detection is concerned.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CandidateTraits: u8 {
        /// Const member function.
        const CONST = 1 << 0;
        /// Static member function.
        const STATIC = 1 << 1;
    }
}

/// Trait for callable native functions.
///
/// The invoker receives the already-converted argument values in positional
/// order and is responsible for its own ABI marshalling; the dispatch core
/// never looks inside.
pub trait NativeCallable {
    /// Call the native function with converted arguments.
    fn call(&self, args: &[ScriptValue]) -> Result<ScriptValue, NativeError>;
}

impl<F> NativeCallable for F
where
    F: Fn(&[ScriptValue]) -> Result<ScriptValue, NativeError>,
{
    fn call(&self, args: &[ScriptValue]) -> Result<ScriptValue, NativeError> {
        (self)(args)
    }
}

/// Type-erased native function.
///
/// Wraps any [`NativeCallable`] so invokers of different shapes can be stored
/// uniformly in a candidate list. The inner callable is behind an `Arc`, so
/// cloning a `NativeFn` shares the implementation.
pub struct NativeFn {
    id: TypeToken,
    inner: Arc<dyn NativeCallable + Send + Sync>,
}

impl NativeFn {
    /// Create a native function with the given identity.
    ///
    /// The identity is usually minted with [`TypeToken::from_function`] so a
    /// function keeps the same id wherever it is registered.
    pub fn new<F>(id: TypeToken, f: F) -> Self
    where
        F: NativeCallable + Send + Sync + 'static,
    {
        Self {
            id,
            inner: Arc::new(f),
        }
    }

    /// This function's identity token.
    pub fn id(&self) -> TypeToken {
        self.id
    }

    /// Call the underlying native function.
    pub fn call(&self, args: &[ScriptValue]) -> Result<ScriptValue, NativeError> {
        self.inner.call(args)
    }
}

impl Clone for NativeFn {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
        }
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFn").field("id", &self.id).finish_non_exhaustive()
    }
}
