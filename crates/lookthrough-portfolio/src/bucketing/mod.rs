//! Portfolio bucketing with ETF look-through.
//!
//! - **Breakdown**: ordered category-to-value accumulator
//! - **Look-through**: country and sector aggregation that decomposes ETFs
//!   into their underlying allocations
//!
//! All functions are pure - they take enriched holdings and return
//! breakdowns without modifying state.
//!
//! # Example
//!
//! ```rust,ignore
//! use lookthrough_portfolio::bucketing::*;
//!
//! let allocations = AllocationIndex::from_table(&country_table, Dimension::Country);
//! let by_country = look_through_by_country(&holdings, &allocations);
//! for entry in by_country.sorted_by_value() {
//!     println!("{}: {:.0}", entry.category, entry.value);
//! }
//! ```

mod breakdown;
mod lookthrough;

pub use breakdown::*;
pub use lookthrough::*;
