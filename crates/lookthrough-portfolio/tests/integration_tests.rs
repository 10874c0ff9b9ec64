//! Integration tests for lookthrough-portfolio.
//!
//! These tests drive the full pipeline from raw tables to report.

use approx::assert_relative_eq;
use lookthrough_portfolio::prelude::*;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn table(header: &[&str], rows: &[&[&str]]) -> Table {
    rows.iter()
        .map(|cells| {
            header
                .iter()
                .zip(cells.iter())
                .map(|(h, c)| (*h, *c))
                .collect::<Row>()
        })
        .collect()
}

fn securities() -> Table {
    table(
        &["ticker", "type", "country", "sector"],
        &[
            &["AAPL", "Stock", "USA", "Technology"],
            &["ETF1", "ETF", "USA", ""],
        ],
    )
}

fn country_allocations() -> Table {
    table(
        &["ticker", "country", "weight"],
        &[
            &["ETF1", "USA", "60"],
            &["ETF1", "Finland", "25"],
            &["ETF1", "Germany", "15"],
        ],
    )
}

fn sector_allocations() -> Table {
    table(
        &["ticker", "sector", "weight"],
        &[
            &["ETF1", "Technology", "50"],
            &["ETF1", "Health Care", "20"],
            &["ETF1", "Industrials", "30"],
        ],
    )
}

fn holdings() -> Table {
    table(
        &["ticker", "quantity", "market_value", "last_price"],
        &[&["AAPL", "10", "", ""], &["ETF1", "20", "", ""]],
    )
}

fn state_with_prices(prices: Table) -> PortfolioState {
    PortfolioState::builder()
        .securities(securities())
        .prices(prices)
        .holdings(holdings())
        .country_allocations(country_allocations())
        .sector_allocations(sector_allocations())
        .build()
}

// =============================================================================
// END-TO-END SCENARIOS
// =============================================================================

#[test]
fn test_unpriced_etf_contributes_nothing() {
    let prices = table(&["ticker", "date", "price"], &[&["AAPL", "2025-09-01", "210"]]);
    let report = state_with_prices(prices).report();

    let aapl = &report.holdings[0];
    assert_eq!(aapl.market_value, 2100.0);
    assert_eq!(aapl.country, "USA");

    let etf = &report.holdings[1];
    assert_eq!(etf.last_price, None);
    assert_eq!(etf.market_value, 0.0);

    // The zero-value ETF is skipped even though allocation rows exist.
    assert_eq!(report.by_country.len(), 1);
    assert_eq!(report.by_country.get("USA"), Some(2100.0));
    assert_eq!(report.by_country.get("Finland"), None);
    assert_eq!(report.by_sector.get("Technology"), Some(2100.0));
    assert_eq!(report.by_sector.len(), 1);
}

#[test]
fn test_priced_etf_is_looked_through() {
    let prices = table(
        &["ticker", "date", "price"],
        &[&["AAPL", "2025-09-01", "210"], &["ETF1", "2025-09-01", "100"]],
    );
    let report = state_with_prices(prices).report();

    assert_eq!(report.holdings[1].market_value, 2000.0);
    assert_eq!(report.total_market_value, 4100.0);

    assert_relative_eq!(report.by_country.get("USA").unwrap(), 3300.0);
    assert_relative_eq!(report.by_country.get("Finland").unwrap(), 500.0);
    assert_relative_eq!(report.by_country.get("Germany").unwrap(), 300.0);

    assert_relative_eq!(report.by_sector.get("Technology").unwrap(), 3100.0);
    assert_relative_eq!(report.by_sector.get("Health Care").unwrap(), 400.0);
    assert_relative_eq!(report.by_sector.get("Industrials").unwrap(), 600.0);
    assert_eq!(
        report.by_sector.categories().collect::<Vec<_>>(),
        vec!["Technology", "Health Care", "Industrials"]
    );
}

#[test]
fn test_latest_price_selected_by_date() {
    let prices = table(
        &["ticker", "date", "price"],
        &[
            &["AAPL", "2025-08-29", "205"],
            &["AAPL", "2025-09-01", "210"],
            &["AAPL", "2025-07-15", "190"],
        ],
    );
    let report = state_with_prices(prices).report();
    assert_eq!(report.holdings[0].last_price, Some(210.0));
}

#[test]
fn test_explicit_market_value_and_fallback_price() {
    let holdings = table(
        &["ticker", "units", "market_value", "last_price"],
        &[
            &["AAPL", "10", "9999", ""],
            &["ETF1", "20", "0", "50,5"],
            &["GHOST", "3", "", ""],
        ],
    );
    let state = state_with_prices(Table::new()).with_table(TableKind::Holdings, holdings);
    let report = state.report();

    assert_eq!(report.holdings[0].market_value, 9999.0);
    assert_eq!(report.holdings[0].last_price, None);
    assert_eq!(report.holdings[1].last_price, Some(50.5));
    assert_eq!(report.holdings[1].market_value, 1010.0);

    let ghost = &report.holdings[2];
    assert_eq!(ghost.security_type, UNKNOWN);
    assert_eq!(ghost.market_value, 0.0);

    assert_relative_eq!(report.total_market_value, 11009.0);
}

#[test]
fn test_recompute_is_idempotent() {
    let prices = table(
        &["ticker", "date", "price"],
        &[&["AAPL", "2025-09-01", "210"], &["ETF1", "2025-09-01", "100"]],
    );
    let state = state_with_prices(prices);

    let first = state.report();
    let second = state.report();
    assert_eq!(first, second);
    assert_eq!(state.enriched_holdings(), state.enriched_holdings());
    assert_eq!(
        state.breakdown(Dimension::Sector),
        state.breakdown(Dimension::Sector)
    );
}

#[test]
fn test_reload_replaces_previous_tables() {
    let prices = table(&["ticker", "date", "price"], &[&["ETF1", "2025-09-01", "100"]]);
    let before = state_with_prices(prices);
    let after = before.clone().with_table(TableKind::Prices, Table::new());

    assert_eq!(before.report().holdings[1].market_value, 2000.0);
    assert_eq!(after.report().holdings[1].market_value, 0.0);
}

#[test]
fn test_duplicate_security_first_wins() {
    let securities = table(
        &["ticker", "type", "country", "sector"],
        &[
            &["AAPL", "Stock", "USA", "Technology"],
            &["AAPL", "ETF", "Ireland", "Blend"],
        ],
    );
    let prices = table(&["ticker", "date", "price"], &[&["AAPL", "2025-09-01", "210"]]);
    let state = state_with_prices(prices).with_table(TableKind::Securities, securities);
    let holding = &state.enriched_holdings()[0];
    assert_eq!(holding.security_type, "Stock");
    assert_eq!(holding.country, "USA");
}
