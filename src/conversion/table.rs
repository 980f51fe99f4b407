//! Conversion-table registry and best-route search.
//!
//! The [`ConversionTable`] is a directed graph whose vertices are
//! [`TypeToken`]s and whose edges are weighted [`Conversion`]s. Its job is to
//! answer one question: what is the cheapest route from an actual argument's
//! type (given its insight) to a formal parameter's type?
//!
//! Each argument position is searched independently; the table never
//! optimises jointly across positions. The search is a Dijkstra traversal
//! with a binary-heap frontier, which is correct because edge weights are
//! non-negative by construction and [`Weight`] addition is monotone.

use std::collections::BinaryHeap;
use std::cmp::Reverse;
use std::sync::atomic::{AtomicU64, Ordering};

use petgraph::graphmap::DiGraphMap;
use rustc_hash::FxHashMap;

use overpass_core::{ConversionError, Insight, TypeToken, Weight};

use super::edge::Conversion;
use super::route::ConversionRoute;

/// Registry of conversion edges with minimum-cost route search.
///
/// One edge is held per ordered `(from, to)` pair; registering a second
/// conversion for the same pair replaces the first. Multi-step conversions
/// are not registered directly, they emerge from the search composing edges.
pub struct ConversionTable {
    graph: DiGraphMap<TypeToken, Conversion>,
    edge_conversions: FxHashMap<TypeToken, Conversion>,
    searches: AtomicU64,
}

impl ConversionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            graph: DiGraphMap::new(),
            edge_conversions: FxHashMap::default(),
            searches: AtomicU64::new(0),
        }
    }

    /// Register a conversion edge.
    ///
    /// Returns the edge previously registered for the same `(from, to)` pair,
    /// if any.
    pub fn register(&mut self, conversion: Conversion) -> Option<Conversion> {
        self.graph
            .add_edge(conversion.from(), conversion.to(), conversion)
    }

    /// Register a return-path edge conversion for a type.
    ///
    /// Applied only to values leaving the native world after a successful
    /// call; never consulted during argument routing.
    pub fn register_edge_conversion(&mut self, ty: TypeToken, conversion: Conversion) {
        self.edge_conversions.insert(ty, conversion);
    }

    /// The return-path conversion registered for a type, if any.
    pub fn edge_conversion(&self, ty: TypeToken) -> Option<&Conversion> {
        self.edge_conversions.get(&ty)
    }

    /// Whether a direct edge exists between two types.
    pub fn has_conversion(&self, from: TypeToken, to: TypeToken) -> bool {
        self.graph.contains_edge(from, to)
    }

    /// Number of per-position route searches run so far.
    ///
    /// Cache hits recompute routes for a single candidate, full tournaments
    /// for every arity-matching one, so the counter makes the difference
    /// observable to tests and diagnostics.
    pub fn searches(&self) -> u64 {
        self.searches.load(Ordering::Relaxed)
    }

    /// Cheapest route per argument position, each position independent.
    ///
    /// Fails with [`ConversionError::NoApplicableConversion`] on the first
    /// position with no possible route.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn best_sequence_route(
        &self,
        actual_types: &[TypeToken],
        insights: &[Insight],
        formal_types: &[TypeToken],
    ) -> Result<Vec<ConversionRoute>, ConversionError> {
        debug_assert_eq!(actual_types.len(), insights.len());
        debug_assert_eq!(actual_types.len(), formal_types.len());

        let mut routes = Vec::with_capacity(actual_types.len());
        for (position, (&actual, &formal)) in
            actual_types.iter().zip(formal_types).enumerate()
        {
            routes.push(self.best_route(actual, insights[position], formal, position)?);
        }
        Ok(routes)
    }

    /// Dijkstra search for the cheapest route between two types.
    fn best_route(
        &self,
        actual: TypeToken,
        insight: Insight,
        formal: TypeToken,
        position: usize,
    ) -> Result<ConversionRoute, ConversionError> {
        self.searches.fetch_add(1, Ordering::Relaxed);

        if actual == formal {
            return Ok(ConversionRoute::identity());
        }

        let no_route = ConversionError::NoApplicableConversion {
            from: actual,
            to: formal,
            position,
        };

        if !self.graph.contains_node(actual) {
            return Err(no_route);
        }

        let mut dist: FxHashMap<TypeToken, Weight> = FxHashMap::default();
        let mut prev: FxHashMap<TypeToken, Conversion> = FxHashMap::default();
        let mut frontier = BinaryHeap::new();

        dist.insert(actual, Weight::ZERO);
        frontier.push(Reverse((Weight::ZERO, actual)));

        while let Some(Reverse((cost, node))) = frontier.pop() {
            if node == formal {
                break;
            }
            // Stale frontier entry for a node already settled cheaper.
            if dist.get(&node).is_some_and(|best| cost > *best) {
                continue;
            }
            for (_, next, edge) in self.graph.edges(node) {
                let total = cost + edge.cost(insight);
                if !total.is_possible() {
                    continue;
                }
                if dist.get(&next).is_none_or(|best| total < *best) {
                    dist.insert(next, total);
                    prev.insert(next, edge.clone());
                    frontier.push(Reverse((total, next)));
                }
            }
        }

        if !dist.contains_key(&formal) {
            return Err(no_route);
        }

        let mut steps = Vec::new();
        let mut node = formal;
        while node != actual {
            let edge = prev[&node].clone();
            node = edge.from();
            steps.push(edge);
        }
        steps.reverse();
        Ok(ConversionRoute::from_steps(steps))
    }
}

impl Default for ConversionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConversionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversionTable")
            .field("edges", &self.graph.edge_count())
            .field("edge_conversions", &self.edge_conversions.len())
            .field("searches", &self.searches())
            .finish()
    }
}
