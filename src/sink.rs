//! Scoped accumulator for transient converted values.

use overpass_core::ScriptValue;

/// Scoped bag of transient values produced by conversions during one call.
///
/// Every intermediate a [`ConversionRoute`](crate::ConversionRoute) produces
/// is retired here, and the sink's lifetime brackets exactly one
/// `OverloadedSet::call`. Release is the sink going out of scope, which Rust
/// guarantees on every exit path: success, selection failure, and native
/// error alike.
#[derive(Debug, Default)]
pub struct GarbageSink {
    items: Vec<ScriptValue>,
}

impl GarbageSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retire a transient value into the sink.
    pub fn retire(&mut self, value: ScriptValue) {
        self.items.push(value);
    }

    /// Number of values currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sink holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Release all held values now instead of at scope exit.
    pub fn release(self) {}
}
