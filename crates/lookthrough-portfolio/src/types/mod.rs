//! Core types for portfolio look-through.
//!
//! This module contains the fundamental types:
//! - [`Row`] and [`Table`]: raw tabular input
//! - [`SecurityRecord`], [`PriceQuote`], [`HoldingInput`], [`AllocationRow`]: typed row views
//! - [`EnrichedHolding`]: a holding joined with price and classification
//! - [`Dimension`] and [`TableKind`]: classification axes and input tables

mod classification;
mod holding;
mod records;
mod table;

pub use classification::*;
pub use holding::*;
pub use records::*;
pub use table::*;
