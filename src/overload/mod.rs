//! Overloaded sets and the selection tournament.
//!
//! An [`OverloadedSet`] is the ordered list of native candidates sharing one
//! symbolic name. `call` selects among them in four moves:
//!
//! 1. **Arity gate** — more than [`MAX_ARITY`] actuals fails before the
//!    frontend is consulted at all (frontends may have per-call side
//!    effects, so the gate must come first).
//! 2. **Fingerprint** — the frontend reports a type token and an insight per
//!    actual; the parallel vectors are the cache key payload.
//! 3. **Cache probe** — a hit goes straight to the recorded alternative; a
//!    recorded no-match fails immediately; a miss runs the tournament.
//! 4. **Tournament** — candidates are visited in registration order, routed
//!    through the conversion table, and compared per position on the
//!    ambiguity lattice. Only a strict `Better` adopts a new champion; after
//!    adoption the champion's weights are its own freshly computed vector,
//!    which later verdicts are classified against.
//!
//! A candidate with no route for some position is disqualified silently.
//! The final verdict checks no-match before ambiguity: an all-infinite or
//! empty podium is "no overloaded member matches", a contested one is
//! "ambiguous". Ties between candidates with element-wise identical
//! signatures (const/non-const pairs) are not contests.

mod cache;
mod compare;

pub use cache::{DEFAULT_CAPACITY, Probe, Resolution, ResolutionCache};
pub use compare::{Preference, compare_weight_vectors};

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use smallvec::{SmallVec, smallvec};

use overpass_core::{DispatchError, Insight, ScriptValue, TypeToken, Weight};

use crate::candidate::CandidateFunction;
use crate::conversion::ConversionRoute;
use crate::host::DispatchHost;
use crate::sink::GarbageSink;

/// Maximum number of actual arguments a call may carry.
pub const MAX_ARITY: usize = 12;

/// Stable process-unique identity of one overloaded set.
///
/// Used only as an opaque cache-key component; the cache never dereferences
/// it, so entries for a dropped set are merely dead weight until a flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SetId(u64);

impl SetId {
    fn fresh() -> SetId {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        SetId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    #[cfg(test)]
    pub(crate) fn for_tests(raw: u64) -> SetId {
        SetId(raw)
    }
}

/// An ordered collection of native candidates sharing a symbolic name.
///
/// Candidates are appended during a registration phase and never reordered
/// or removed afterwards; registration order is the tie-breaking order the
/// tournament visits them in.
pub struct OverloadedSet {
    name: String,
    id: SetId,
    alternatives: Vec<CandidateFunction>,
}

impl OverloadedSet {
    /// Create an empty set for the given symbolic name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: SetId::fresh(),
            alternatives: Vec::new(),
        }
    }

    /// The symbolic name the candidates share.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// This set's cache-key identity.
    pub fn id(&self) -> SetId {
        self.id
    }

    /// Append one candidate.
    pub fn add_alternative(&mut self, candidate: CandidateFunction) {
        self.alternatives.push(candidate);
    }

    /// Append every candidate of another set, preserving its order.
    pub fn add_alternatives(&mut self, other: &OverloadedSet) {
        self.alternatives
            .extend(other.alternatives.iter().cloned());
    }

    /// First candidate whose signature is element-wise identical, if any.
    pub fn seek_alternative(&self, signature: &[TypeToken]) -> Option<&CandidateFunction> {
        self.alternatives
            .iter()
            .find(|candidate| candidate.signature() == signature)
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Whether the set has no candidates.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Iterate the candidates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CandidateFunction> {
        self.alternatives.iter()
    }

    /// Resolve, convert, and invoke for the given actual arguments.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn call(
        &self,
        host: &DispatchHost,
        actuals: &[ScriptValue],
    ) -> Result<ScriptValue, DispatchError> {
        if actuals.len() > MAX_ARITY {
            return Err(DispatchError::ArgumentLimitExceeded {
                name: self.name.clone(),
                got: actuals.len(),
                limit: MAX_ARITY,
            });
        }

        let frontend = host.frontend();
        let types: SmallVec<[TypeToken; MAX_ARITY]> =
            actuals.iter().map(|v| frontend.detect_type(v)).collect();
        let insights: SmallVec<[Insight; MAX_ARITY]> =
            actuals.iter().map(|v| frontend.detect_insight(v)).collect();

        let mut sink = GarbageSink::new();

        match host.cache().probe(self.id, &types, &insights) {
            Probe::Hit(index) => {
                let candidate = &self.alternatives[index];
                let routes = host
                    .table()
                    .best_sequence_route(&types, &insights, candidate.signature())
                    .map_err(|_| self.no_match_error(actuals))?;
                return self.dispatch(host, candidate, &routes, actuals, &mut sink);
            }
            Probe::Impossible => return Err(self.no_match_error(actuals)),
            Probe::Miss => {}
        }

        let mut champion: Option<usize> = None;
        let mut champion_weights: SmallVec<[Weight; MAX_ARITY]> =
            smallvec![Weight::INFINITE; actuals.len()];
        let mut champion_routes: Vec<ConversionRoute> = Vec::new();
        let mut ambiguous = false;

        for (index, candidate) in self.alternatives.iter().enumerate() {
            if candidate.arity() != actuals.len() {
                continue;
            }
            let Ok(routes) =
                host.table()
                    .best_sequence_route(&types, &insights, candidate.signature())
            else {
                continue;
            };
            let weights: SmallVec<[Weight; MAX_ARITY]> = routes
                .iter()
                .zip(&insights)
                .map(|(route, insight)| route.total_weight(*insight))
                .collect();

            match compare_weight_vectors(&champion_weights, &weights) {
                Preference::Better => {
                    champion = Some(index);
                    champion_weights = weights;
                    champion_routes = routes;
                    ambiguous = false;
                }
                Preference::Equivalent | Preference::Ambiguous => {
                    let identical = champion
                        .is_some_and(|held| self.alternatives[held].identical_signature(candidate));
                    if !identical {
                        ambiguous = true;
                    }
                }
                Preference::Worse => {}
            }
        }

        let viable = champion.filter(|_| champion_weights.iter().all(|w| w.is_possible()));
        let Some(winner) = viable else {
            host.cache()
                .store(self.id, &types, &insights, Resolution::Impossible);
            return Err(self.no_match_error(actuals));
        };

        if ambiguous {
            return Err(DispatchError::Ambiguity {
                name: self.name.clone(),
                args: render_args(actuals),
            });
        }

        host.cache()
            .store(self.id, &types, &insights, Resolution::Chosen(winner));
        self.dispatch(
            host,
            &self.alternatives[winner],
            &champion_routes,
            actuals,
            &mut sink,
        )
    }

    /// Convert the actuals along the chosen routes, invoke, and post-process
    /// the return value.
    ///
    /// The sink releases on every exit path, including a native error.
    fn dispatch(
        &self,
        host: &DispatchHost,
        candidate: &CandidateFunction,
        routes: &[ConversionRoute],
        actuals: &[ScriptValue],
        sink: &mut GarbageSink,
    ) -> Result<ScriptValue, DispatchError> {
        let mut converted = Vec::with_capacity(actuals.len());
        for (value, route) in actuals.iter().zip(routes) {
            converted.push(route.apply(value, sink));
        }

        let result = candidate.invoke(&converted);

        // Converted actuals are transient whether or not the native call
        // succeeded; retire them before propagating any native error.
        for value in converted {
            sink.retire(value);
        }
        let result = result?;

        match host.table().edge_conversion(candidate.return_type()) {
            Some(edge) => {
                let replacement = edge.apply(&result, sink);
                host.memory().release(result);
                Ok(replacement)
            }
            None => Ok(result),
        }
    }

    fn no_match_error(&self, actuals: &[ScriptValue]) -> DispatchError {
        DispatchError::NoMatch {
            name: self.name.clone(),
            args: render_args(actuals),
        }
    }
}

impl fmt::Debug for OverloadedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverloadedSet")
            .field("name", &self.name)
            .field("id", &self.id)
            .field("alternatives", &self.alternatives.len())
            .finish()
    }
}

fn render_args(actuals: &[ScriptValue]) -> String {
    actuals
        .iter()
        .map(ScriptValue::type_name)
        .collect::<Vec<_>>()
        .join(", ")
}
