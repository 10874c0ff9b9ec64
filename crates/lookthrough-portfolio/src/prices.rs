//! Latest price index.
//!
//! Keeps, per ticker, the quote with the greatest date string. Dates are
//! compared lexically, not as calendar dates: `"2025-9-1"` sorts after
//! `"2025-10-01"`. Inputs must use zero-padded ISO dates.

use serde::Serialize;
use std::collections::HashMap;

use crate::types::{PriceQuote, Table};

/// The most recent price for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestPrice {
    /// Ticker.
    pub ticker: String,
    /// Date of the retained quote.
    pub date: String,
    /// Retained price.
    pub price: f64,
}

/// Ticker to latest price, in order of each ticker's first quote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatestPriceIndex {
    entries: Vec<LatestPrice>,
    positions: HashMap<String, usize>,
}

impl LatestPriceIndex {
    /// Builds the index from quotes.
    ///
    /// Quotes with a blank ticker are skipped. A quote replaces the retained
    /// one only if its date is strictly greater, so among quotes sharing the
    /// maximal date the first one encountered is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use lookthrough_portfolio::prices::LatestPriceIndex;
    /// use lookthrough_portfolio::types::PriceQuote;
    ///
    /// let index = LatestPriceIndex::build(&[
    ///     PriceQuote::new("AAPL", "2025-09-01", 210.0),
    ///     PriceQuote::new("AAPL", "2025-08-29", 205.0),
    /// ]);
    /// assert_eq!(index.price("AAPL"), Some(210.0));
    /// ```
    #[must_use]
    pub fn build(quotes: &[PriceQuote]) -> Self {
        let mut index = Self::default();
        for quote in quotes {
            index.offer(quote);
        }
        index
    }

    /// Builds the index directly from a prices table.
    #[must_use]
    pub fn from_table(table: &Table) -> Self {
        let mut index = Self::default();
        for row in table {
            index.offer(&PriceQuote::from_row(row));
        }
        index
    }

    fn offer(&mut self, quote: &PriceQuote) {
        let ticker = quote.ticker.trim();
        if ticker.is_empty() {
            return;
        }
        let date = quote.date.trim();

        match self.positions.get(ticker) {
            Some(&i) => {
                let current = &mut self.entries[i];
                if date > current.date.as_str() {
                    current.date = date.to_string();
                    current.price = quote.price;
                }
            }
            None => {
                self.positions.insert(ticker.to_string(), self.entries.len());
                self.entries.push(LatestPrice {
                    ticker: ticker.to_string(),
                    date: date.to_string(),
                    price: quote.price,
                });
            }
        }
    }

    /// Returns the latest quote for a ticker.
    #[must_use]
    pub fn get(&self, ticker: &str) -> Option<&LatestPrice> {
        self.positions.get(ticker).map(|&i| &self.entries[i])
    }

    /// Returns the latest price for a ticker.
    #[must_use]
    pub fn price(&self, ticker: &str) -> Option<f64> {
        self.get(ticker).map(|p| p.price)
    }

    /// Iterates over latest prices in first-seen ticker order.
    pub fn iter(&self) -> std::slice::Iter<'_, LatestPrice> {
        self.entries.iter()
    }

    /// Number of tickers indexed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no ticker is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
