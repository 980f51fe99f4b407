//! Single conversion edges of the conversion graph.

use std::fmt;
use std::sync::Arc;

use overpass_core::{Insight, ScriptValue, TypeToken, Weight};

use crate::sink::GarbageSink;

/// Applier signature shared by all conversion edges.
///
/// An applier maps one scripting value to another; anything it allocates on
/// the side goes into the sink.
pub type ApplyFn = dyn Fn(&ScriptValue, &mut GarbageSink) -> ScriptValue + Send + Sync;

/// The price of taking one edge.
///
/// Most edges cost the same for every value; edges leaving a polymorphic
/// type price themselves per runtime shape instead.
#[derive(Clone)]
pub enum EdgeCost {
    /// Same weight for every value of the source type.
    Fixed(Weight),
    /// Weight decided by the value's insight at call time.
    ByInsight(Arc<dyn Fn(Insight) -> Weight + Send + Sync>),
}

impl fmt::Debug for EdgeCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeCost::Fixed(w) => f.debug_tuple("Fixed").field(w).finish(),
            EdgeCost::ByInsight(_) => f.write_str("ByInsight(..)"),
        }
    }
}

/// One weighted, directed conversion between two registered types.
///
/// Edges compose into [`ConversionRoute`](crate::ConversionRoute)s; the
/// route machinery never looks inside an applier.
#[derive(Clone)]
pub struct Conversion {
    from: TypeToken,
    to: TypeToken,
    cost: EdgeCost,
    apply: Arc<ApplyFn>,
}

impl Conversion {
    /// Create an edge with a fixed weight.
    pub fn new<F>(from: TypeToken, to: TypeToken, weight: Weight, apply: F) -> Self
    where
        F: Fn(&ScriptValue, &mut GarbageSink) -> ScriptValue + Send + Sync + 'static,
    {
        Self {
            from,
            to,
            cost: EdgeCost::Fixed(weight),
            apply: Arc::new(apply),
        }
    }

    /// Create an edge whose weight depends on the value's insight.
    ///
    /// Returning [`Weight::INFINITE`] for an insight makes the edge
    /// untakeable for values of that shape without unregistering it.
    pub fn by_insight<C, F>(from: TypeToken, to: TypeToken, cost: C, apply: F) -> Self
    where
        C: Fn(Insight) -> Weight + Send + Sync + 'static,
        F: Fn(&ScriptValue, &mut GarbageSink) -> ScriptValue + Send + Sync + 'static,
    {
        Self {
            from,
            to,
            cost: EdgeCost::ByInsight(Arc::new(cost)),
            apply: Arc::new(apply),
        }
    }

    /// Source type of the edge.
    pub fn from(&self) -> TypeToken {
        self.from
    }

    /// Target type of the edge.
    pub fn to(&self) -> TypeToken {
        self.to
    }

    /// Price of taking this edge for a value with the given insight.
    pub fn cost(&self, insight: Insight) -> Weight {
        match &self.cost {
            EdgeCost::Fixed(w) => *w,
            EdgeCost::ByInsight(f) => f(insight),
        }
    }

    /// Convert a value, retiring side allocations into the sink.
    pub fn apply(&self, value: &ScriptValue, sink: &mut GarbageSink) -> ScriptValue {
        (self.apply)(value, sink)
    }
}

impl fmt::Debug for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conversion")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("cost", &self.cost)
            .finish_non_exhaustive()
    }
}
