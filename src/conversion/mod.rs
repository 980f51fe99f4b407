//! The implicit-conversion algebra.
//!
//! Conversions between registered types form a weighted directed graph:
//!
//! - [`Conversion`]: one edge, with an applier closure and a fixed or
//!   insight-dependent [`EdgeCost`]
//! - [`ConversionRoute`]: a composed chain of edges; the empty chain is the
//!   identity with weight zero
//! - [`ConversionTable`]: the registry, answering "cheapest route from type A
//!   under this insight to type B" per argument position
//!
//! Return-path *edge conversions* also live in the table but are applied only
//! to values leaving the native world after a successful call.

mod edge;
mod route;
mod table;

pub use edge::{ApplyFn, Conversion, EdgeCost};
pub use route::ConversionRoute;
pub use table::ConversionTable;
