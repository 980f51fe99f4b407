//! Core types for the overpass dispatch runtime.
//!
//! This crate holds the leaf vocabulary the dispatch core is written in:
//!
//! - [`TypeToken`]: deterministic identity handle for native argument types
//! - [`Insight`]: per-value runtime refinement tag
//! - [`Weight`]: lexicographically ordered conversion cost with an
//!   impossible top element
//! - [`ScriptValue`] / [`ObjectHandle`]: the bundled scripting-value model
//! - [`NativeFn`] / [`NativeCallable`]: type-erased native invokers
//! - [`Frontend`] / [`MemoryManager`]: the host collaborator contracts
//! - the error hierarchy ([`DispatchError`], [`ConversionError`],
//!   [`NativeError`])
//!
//! The conversion algebra, overload selector, and resolution cache that use
//! these types live in the `overpass` crate.

pub mod error;
pub mod insight;
pub mod native_fn;
pub mod traits;
pub mod type_token;
pub mod value;
pub mod weight;

pub use error::{ConversionError, DispatchError, NativeError};
pub use insight::Insight;
pub use native_fn::{CandidateTraits, NativeCallable, NativeFn};
pub use traits::{Frontend, MemoryManager};
pub use type_token::{TypeToken, builtin};
pub use value::{ObjectHandle, ScriptValue};
pub use weight::{Cost, Weight};
