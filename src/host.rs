//! Per-runtime dispatch host.

use overpass_core::{Frontend, MemoryManager};

use crate::conversion::ConversionTable;
use crate::frontend::{DropMemory, ValueFrontend};
use crate::overload::ResolutionCache;

/// The collaborators one dispatch runtime threads through every call.
///
/// Bundles the scripting-host frontend, the memory manager, the conversion
/// table, and the resolution cache. The original design kept the cache as
/// process-global state; a per-runtime handle has the same observable
/// contract (identical hits, flush semantics) without the global.
pub struct DispatchHost {
    frontend: Box<dyn Frontend>,
    memory: Box<dyn MemoryManager>,
    table: ConversionTable,
    cache: ResolutionCache,
}

impl DispatchHost {
    /// Create a host with the given collaborators and empty table and cache.
    pub fn new<F, M>(frontend: F, memory: M) -> Self
    where
        F: Frontend + 'static,
        M: MemoryManager + 'static,
    {
        Self {
            frontend: Box::new(frontend),
            memory: Box::new(memory),
            table: ConversionTable::new(),
            cache: ResolutionCache::new(),
        }
    }

    /// The scripting-host frontend.
    pub fn frontend(&self) -> &dyn Frontend {
        self.frontend.as_ref()
    }

    /// The memory manager.
    pub fn memory(&self) -> &dyn MemoryManager {
        self.memory.as_ref()
    }

    /// The conversion table.
    pub fn table(&self) -> &ConversionTable {
        &self.table
    }

    /// Mutable access to the conversion table for registration.
    pub fn table_mut(&mut self) -> &mut ConversionTable {
        &mut self.table
    }

    /// The resolution cache.
    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    /// Drop every memoised resolution; the next call on any set runs a full
    /// tournament again.
    pub fn force_recompute(&self) {
        self.cache.flush();
    }
}

impl Default for DispatchHost {
    /// A host over the bundled value model: [`ValueFrontend`] fingerprints,
    /// [`DropMemory`] reclamation.
    fn default() -> Self {
        Self::new(ValueFrontend, DropMemory)
    }
}

impl std::fmt::Debug for DispatchHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchHost")
            .field("table", &self.table)
            .field("cached_resolutions", &self.cache.len())
            .finish_non_exhaustive()
    }
}
