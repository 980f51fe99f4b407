//! Contracts the dispatch core requires from its host.
//!
//! The scripting-host frontend and the memory manager are external
//! collaborators. The core never inspects values itself; it asks the frontend
//! for a type token and an insight per actual argument, and hands values it
//! replaced on the return path to the memory manager.

use crate::{Insight, ScriptValue, TypeToken};

/// Scripting-host frontend: fingerprints actual arguments.
///
/// Both methods must be pure, cheap, and stable for a given value: they are
/// invoked on every call and their results form the resolution-cache key.
pub trait Frontend {
    /// The registered type of a scripting value.
    fn detect_type(&self, value: &ScriptValue) -> TypeToken;

    /// The runtime refinement of a scripting value.
    ///
    /// Return [`Insight::NONE`] when the static type says everything.
    fn detect_insight(&self, value: &ScriptValue) -> Insight;
}

/// Memory manager: receives scripting values the core is done with.
///
/// Called for the original return value when an edge conversion replaces it.
/// Hosts with external resource handles reclaim them here; plain value
/// models simply drop.
pub trait MemoryManager {
    /// Relinquish a scripting value replaced by an edge conversion.
    fn release(&self, value: ScriptValue);
}
