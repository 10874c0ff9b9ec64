//! Portfolio state snapshot.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::PortfolioReport;
use crate::bucketing::{look_through, AllocationIndex, Breakdown};
use crate::enrichment::{enrich_holdings, SecurityIndex};
use crate::prices::LatestPriceIndex;
use crate::types::{Dimension, EnrichedHolding, HoldingInput, Table, TableKind};

/// The five input tables as of one load action.
///
/// A snapshot is never mutated in place: loading a table produces a new
/// snapshot via [`PortfolioState::with_table`]. Every derived view is
/// recomputed from the tables on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioState {
    securities: Table,
    prices: Table,
    holdings: Table,
    country_allocations: Table,
    sector_allocations: Table,
}

impl PortfolioState {
    /// Creates a state with all tables empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder.
    #[must_use]
    pub fn builder() -> PortfolioStateBuilder {
        PortfolioStateBuilder::new()
    }

    /// Returns a new snapshot with one table replaced wholesale.
    #[must_use]
    pub fn with_table(mut self, kind: TableKind, table: Table) -> Self {
        *self.table_mut(kind) = table;
        self
    }

    /// Returns a table.
    #[must_use]
    pub fn table(&self, kind: TableKind) -> &Table {
        match kind {
            TableKind::Securities => &self.securities,
            TableKind::Prices => &self.prices,
            TableKind::Holdings => &self.holdings,
            TableKind::CountryAllocations => &self.country_allocations,
            TableKind::SectorAllocations => &self.sector_allocations,
        }
    }

    fn table_mut(&mut self, kind: TableKind) -> &mut Table {
        match kind {
            TableKind::Securities => &mut self.securities,
            TableKind::Prices => &mut self.prices,
            TableKind::Holdings => &mut self.holdings,
            TableKind::CountryAllocations => &mut self.country_allocations,
            TableKind::SectorAllocations => &mut self.sector_allocations,
        }
    }

    /// Latest price per ticker.
    #[must_use]
    pub fn latest_prices(&self) -> LatestPriceIndex {
        LatestPriceIndex::from_table(&self.prices)
    }

    /// Holdings joined with prices and security data, in input order.
    #[must_use]
    pub fn enriched_holdings(&self) -> Vec<EnrichedHolding> {
        let securities = SecurityIndex::from_table(&self.securities);
        let prices = self.latest_prices();
        let inputs: Vec<HoldingInput> = self.holdings.iter().map(HoldingInput::from_row).collect();
        enrich_holdings(&inputs, &securities, &prices)
    }

    /// Allocation rows for a dimension, grouped by ticker.
    #[must_use]
    pub fn allocations(&self, dimension: Dimension) -> AllocationIndex {
        AllocationIndex::from_table(self.table(dimension.allocation_table()), dimension)
    }

    /// Look-through breakdown along one dimension.
    #[must_use]
    pub fn breakdown(&self, dimension: Dimension) -> Breakdown {
        look_through(&self.enriched_holdings(), &self.allocations(dimension), dimension)
    }

    /// Full report: enriched holdings, total, and both breakdowns.
    #[must_use]
    pub fn report(&self) -> PortfolioReport {
        let holdings = self.enriched_holdings();
        let by_country = look_through(
            &holdings,
            &self.allocations(Dimension::Country),
            Dimension::Country,
        );
        let by_sector = look_through(
            &holdings,
            &self.allocations(Dimension::Sector),
            Dimension::Sector,
        );
        let report = PortfolioReport::new(holdings, by_country, by_sector);

        debug!(
            holdings = report.holdings.len(),
            total = report.total_market_value,
            countries = report.by_country.len(),
            sectors = report.by_sector.len(),
            "computed portfolio report"
        );

        report
    }
}

/// Builder for [`PortfolioState`].
#[derive(Debug, Clone, Default)]
pub struct PortfolioStateBuilder {
    state: PortfolioState,
}

impl PortfolioStateBuilder {
    /// Creates a builder with all tables empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the securities table.
    #[must_use]
    pub fn securities(self, table: Table) -> Self {
        self.table(TableKind::Securities, table)
    }

    /// Sets the prices table.
    #[must_use]
    pub fn prices(self, table: Table) -> Self {
        self.table(TableKind::Prices, table)
    }

    /// Sets the holdings table.
    #[must_use]
    pub fn holdings(self, table: Table) -> Self {
        self.table(TableKind::Holdings, table)
    }

    /// Sets the country allocations table.
    #[must_use]
    pub fn country_allocations(self, table: Table) -> Self {
        self.table(TableKind::CountryAllocations, table)
    }

    /// Sets the sector allocations table.
    #[must_use]
    pub fn sector_allocations(self, table: Table) -> Self {
        self.table(TableKind::SectorAllocations, table)
    }

    /// Sets any table by kind.
    #[must_use]
    pub fn table(mut self, kind: TableKind, table: Table) -> Self {
        self.state = self.state.with_table(kind, table);
        self
    }

    /// Builds the snapshot.
    #[must_use]
    pub fn build(self) -> PortfolioState {
        self.state
    }
}
