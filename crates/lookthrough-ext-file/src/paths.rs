//! File locations for the five input tables.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use lookthrough_portfolio::{PortfolioState, Table, TableKind};

use crate::error::LoadResult;
use crate::reader::{load_table, LoadOptions};

/// Optional file path per input table.
///
/// An omitted table loads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TablePaths {
    /// Securities reference table.
    pub securities: Option<PathBuf>,
    /// Price history table.
    pub prices: Option<PathBuf>,
    /// Holdings table.
    pub holdings: Option<PathBuf>,
    /// ETF country allocations.
    pub country_allocations: Option<PathBuf>,
    /// ETF sector allocations.
    pub sector_allocations: Option<PathBuf>,
}

impl TablePaths {
    /// Creates an empty set of paths.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths named `<table>.csv` inside `dir`, for files that exist.
    #[must_use]
    pub fn from_dir(dir: &Path) -> Self {
        let mut paths = Self::new();
        for kind in TableKind::ALL {
            let candidate = dir.join(format!("{}.csv", kind.name()));
            if candidate.is_file() {
                paths.set(kind, candidate);
            }
        }
        paths
    }

    /// Returns the path of a table, if set.
    #[must_use]
    pub fn get(&self, kind: TableKind) -> Option<&Path> {
        self.slot(kind).as_deref()
    }

    /// Sets the path of a table.
    pub fn set(&mut self, kind: TableKind, path: impl Into<PathBuf>) {
        *self.slot_mut(kind) = Some(path.into());
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, kind: TableKind, path: impl Into<PathBuf>) -> Self {
        self.set(kind, path);
        self
    }

    /// Returns true if no table path is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        TableKind::ALL.iter().all(|&k| self.get(k).is_none())
    }

    /// Fills unset paths from `base`; paths already set here win.
    #[must_use]
    pub fn or(mut self, base: &TablePaths) -> Self {
        for kind in TableKind::ALL {
            if self.get(kind).is_none() {
                if let Some(path) = base.get(kind) {
                    self.set(kind, path);
                }
            }
        }
        self
    }

    /// Resolves relative paths against `dir`.
    #[must_use]
    pub fn relative_to(mut self, dir: &Path) -> Self {
        for kind in TableKind::ALL {
            if let Some(path) = self.slot_mut(kind) {
                if path.is_relative() {
                    *path = dir.join(&*path);
                }
            }
        }
        self
    }

    /// Loads every table into a new portfolio snapshot.
    pub fn load(&self, options: &LoadOptions) -> LoadResult<PortfolioState> {
        let mut state = PortfolioState::new();
        for kind in TableKind::ALL {
            let table = match self.get(kind) {
                Some(path) => load_table(kind, path, options)?,
                None => {
                    debug!(table = %kind, "no file given, using empty table");
                    Table::new()
                }
            };
            state = state.with_table(kind, table);
        }
        Ok(state)
    }

    fn slot(&self, kind: TableKind) -> &Option<PathBuf> {
        match kind {
            TableKind::Securities => &self.securities,
            TableKind::Prices => &self.prices,
            TableKind::Holdings => &self.holdings,
            TableKind::CountryAllocations => &self.country_allocations,
            TableKind::SectorAllocations => &self.sector_allocations,
        }
    }

    fn slot_mut(&mut self, kind: TableKind) -> &mut Option<PathBuf> {
        match kind {
            TableKind::Securities => &mut self.securities,
            TableKind::Prices => &mut self.prices,
            TableKind::Holdings => &mut self.holdings,
            TableKind::CountryAllocations => &mut self.country_allocations,
            TableKind::SectorAllocations => &mut self.sector_allocations,
        }
    }
}
