//! Composed conversion routes.

use smallvec::SmallVec;

use overpass_core::{Insight, ScriptValue, Weight};

use super::edge::Conversion;
use crate::sink::GarbageSink;

/// A finite ordered chain of conversion edges.
///
/// The empty route is the identity: weight zero, value passed through
/// untouched. Routes are built by the [`ConversionTable`](crate::ConversionTable)'s
/// best-path search and are immutable afterwards.
///
/// Weights must be re-evaluated per call through [`total_weight`](Self::total_weight)
/// because insight-priced edges can answer differently for every value.
#[derive(Debug, Clone, Default)]
pub struct ConversionRoute {
    steps: SmallVec<[Conversion; 2]>,
}

impl ConversionRoute {
    /// The identity route.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Build a route from an edge chain.
    ///
    /// Callers are responsible for the chain being well-formed: each step's
    /// target is the next step's source.
    pub fn from_steps(steps: Vec<Conversion>) -> Self {
        debug_assert!(
            steps.windows(2).all(|pair| pair[0].to() == pair[1].from()),
            "conversion route steps must chain"
        );
        Self {
            steps: steps.into(),
        }
    }

    /// Whether this is the identity route.
    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of edges in the route.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the route has no edges.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total price of the route for a value with the given insight.
    ///
    /// The insight is offered to every step; fixed-cost steps ignore it.
    pub fn total_weight(&self, insight: Insight) -> Weight {
        self.steps.iter().map(|step| step.cost(insight)).sum()
    }

    /// Run the value through the chain.
    ///
    /// Every intermediate (including the working copy of the input) is
    /// retired into the sink; only the final converted value is returned.
    /// The identity route returns a plain clone and touches nothing.
    pub fn apply(&self, value: &ScriptValue, sink: &mut GarbageSink) -> ScriptValue {
        let mut current = value.clone();
        for step in &self.steps {
            let next = step.apply(&current, sink);
            sink.retire(std::mem::replace(&mut current, next));
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overpass_core::{TypeToken, builtin};

    fn int_to_float() -> Conversion {
        Conversion::new(builtin::int(), builtin::float(), Weight::promotion(), |v, _| {
            match v {
                ScriptValue::Int(i) => ScriptValue::Float(*i as f64),
                other => other.clone(),
            }
        })
    }

    fn float_to_string() -> Conversion {
        Conversion::new(builtin::float(), builtin::string(), Weight::user_defined(), |v, _| {
            match v {
                ScriptValue::Float(x) => ScriptValue::Str(x.to_string()),
                other => other.clone(),
            }
        })
    }

    #[test]
    fn identity_route_is_free() {
        let route = ConversionRoute::identity();
        assert!(route.is_identity());
        assert_eq!(route.total_weight(Insight::NONE), Weight::ZERO);
    }

    #[test]
    fn identity_route_passes_value_through() {
        let route = ConversionRoute::identity();
        let mut sink = GarbageSink::new();
        let out = route.apply(&ScriptValue::Int(9), &mut sink);
        assert_eq!(out, ScriptValue::Int(9));
        assert!(sink.is_empty());
    }

    #[test]
    fn total_weight_sums_steps() {
        let route = ConversionRoute::from_steps(vec![int_to_float(), float_to_string()]);
        assert_eq!(
            route.total_weight(Insight::NONE),
            Weight::promotion() + Weight::user_defined()
        );
    }

    #[test]
    fn apply_chains_and_retires_intermediates() {
        let route = ConversionRoute::from_steps(vec![int_to_float(), float_to_string()]);
        let mut sink = GarbageSink::new();

        let out = route.apply(&ScriptValue::Int(2), &mut sink);
        assert_eq!(out, ScriptValue::Str("2".into()));
        // One retired value per step: the input copy and the float.
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn insight_reaches_every_step() {
        let pricey = Insight::new(3);
        let gated = Conversion::by_insight(
            builtin::int(),
            TypeToken::from_name("gated"),
            move |insight| {
                if insight == pricey {
                    Weight::hierarchy()
                } else {
                    Weight::trivial()
                }
            },
            |v, _| v.clone(),
        );
        let route = ConversionRoute::from_steps(vec![gated]);

        assert_eq!(route.total_weight(pricey), Weight::hierarchy());
        assert_eq!(route.total_weight(Insight::NONE), Weight::trivial());
    }
}
