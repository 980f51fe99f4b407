//! Overpass — overload resolution and dispatch for a cross-language binding
//! runtime.
//!
//! Overpass exposes groups of native functions sharing a symbolic name to a
//! dynamically typed scripting host. Given a call site's actual arguments it
//! selects the candidate whose formal signature matches best under an
//! implicit-conversion algebra, converts the arguments, invokes the native
//! function, and hands the result back to the host.
//!
//! ## Architecture
//!
//! - **Conversion algebra**: weighted, composable conversions between
//!   registered types, from which minimum-cost routes are derived per
//!   argument position ([`conversion`]).
//! - **Overload selector**: a tournament over the candidates using
//!   per-position weight-vector comparison with an explicit ambiguity
//!   lattice ([`overload`]).
//! - **Dispatch cache**: a memo from (set, argument types, insights) to the
//!   previously chosen alternative, short-circuiting resolution on repeat
//!   call shapes ([`overload::ResolutionCache`]).
//!
//! ## Modules
//!
//! - [`candidate`]: native callables with formal signatures
//! - [`conversion`]: edges, routes, and the conversion table
//! - [`frontend`]: bundled frontend and memory manager over [`ScriptValue`]
//! - [`host`]: the per-runtime bundle of collaborators
//! - [`overload`]: overloaded sets, the tournament, and the cache
//! - [`sink`]: scoped accumulator for transient converted values
//!
//! ## Example
//!
//! ```
//! use overpass::{CandidateFunction, DispatchHost, OverloadedSet};
//! use overpass::core::{NativeError, NativeFn, ScriptValue, TypeToken, builtin};
//!
//! let host = DispatchHost::default();
//!
//! let mut print = OverloadedSet::new("print");
//! let id = TypeToken::from_function("print", &[builtin::int()]);
//! print.add_alternative(CandidateFunction::new(
//!     vec![builtin::int()],
//!     builtin::string(),
//!     NativeFn::new(id, |args: &[ScriptValue]| match args {
//!         [ScriptValue::Int(v)] => Ok(ScriptValue::Str(v.to_string())),
//!         _ => Err(NativeError::Other { message: "expected int".into() }),
//!     }),
//! ));
//!
//! let out = print.call(&host, &[ScriptValue::Int(7)]).unwrap();
//! assert_eq!(out, ScriptValue::Str("7".into()));
//! ```

pub mod candidate;
pub mod conversion;
pub mod frontend;
pub mod host;
pub mod overload;
pub mod sink;

pub use candidate::CandidateFunction;
pub use conversion::{Conversion, ConversionRoute, ConversionTable, EdgeCost};
pub use frontend::{DropMemory, ValueFrontend};
pub use host::DispatchHost;
pub use overload::{
    MAX_ARITY, OverloadedSet, Preference, Probe, Resolution, ResolutionCache, SetId,
    compare_weight_vectors,
};
pub use sink::GarbageSink;

/// Re-export of the leaf vocabulary crate.
pub use overpass_core as core;

// Flat re-exports of the core types the public surface speaks in.
pub use overpass_core::{
    CandidateTraits, ConversionError, Cost, DispatchError, Frontend, Insight, MemoryManager,
    NativeCallable, NativeError, NativeFn, ObjectHandle, ScriptValue, TypeToken, Weight, builtin,
};
