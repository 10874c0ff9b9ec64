//! Portfolio state snapshots and reports.

mod report;
mod state;

pub use report::PortfolioReport;
pub use state::{PortfolioState, PortfolioStateBuilder};
