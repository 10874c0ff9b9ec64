//! Output formatting utilities.

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use lookthrough_portfolio::{Breakdown, BreakdownEntry, EnrichedHolding, LatestPrice};

/// Number formatting style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// No-break space thousands separator, decimal comma, trailing currency symbol
    #[default]
    Fi,
    /// Comma thousands separator, decimal point, leading currency symbol
    En,
}

/// No-break space, U+00A0.
const NBSP: char = '\u{A0}';

impl Locale {
    fn separators(self) -> (char, char) {
        match self {
            Locale::Fi => (NBSP, ','),
            Locale::En => (',', '.'),
        }
    }
}

/// Breakdown category order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Order of first contribution
    #[default]
    Input,
    /// Largest value first
    Value,
}

/// Presentation settings shared by all commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// Currency code.
    pub currency: String,
    /// Number style.
    pub locale: Locale,
    /// Breakdown order.
    pub sort: SortOrder,
}

impl Presentation {
    /// Formats a market value in whole currency units.
    pub fn money(&self, value: f64) -> String {
        format_currency(value, &self.currency, self.locale)
    }

    /// Formats a quantity or price with up to three fraction digits.
    pub fn number(&self, value: f64) -> String {
        format_number(value, 3, self.locale)
    }

    /// Breakdown entries in the configured order.
    pub fn ordered<'a>(&self, breakdown: &'a Breakdown) -> Vec<&'a BreakdownEntry> {
        match self.sort {
            SortOrder::Input => breakdown.entries().iter().collect(),
            SortOrder::Value => breakdown.sorted_by_value(),
        }
    }
}

// =============================================================================
// NUMBER FORMATTING
// =============================================================================

/// Formats a number with locale grouping and at most `max_fraction` digits.
///
/// Trailing fraction zeros are dropped.
pub fn format_number(value: f64, max_fraction: usize, locale: Locale) -> String {
    let (group, decimal) = locale.separators();
    // Round half away from zero before formatting; `{:.N}` rounds ties to even.
    let factor = 10f64.powi(max_fraction as i32);
    let rounded = (value.abs() * factor).round() / factor;
    let fixed = format!("{:.*}", max_fraction, rounded);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, group));
    if !frac_part.is_empty() {
        out.push(decimal);
        out.push_str(frac_part);
    }
    out
}

/// Formats a whole-unit currency amount.
///
/// `EUR` is shown as `€`; other codes are shown as-is.
pub fn format_currency(value: f64, currency: &str, locale: Locale) -> String {
    let amount = format_number(value, 0, locale);
    let symbol = if currency.eq_ignore_ascii_case("EUR") {
        "€".to_string()
    } else {
        currency.to_uppercase()
    };

    match locale {
        Locale::Fi => format!("{amount}{NBSP}{symbol}"),
        Locale::En => {
            let (sign, digits) = match amount.strip_prefix('-') {
                Some(rest) => ("-", rest),
                None => ("", amount.as_str()),
            };
            let gap = if symbol == "€" { "" } else { " " };
            format!("{sign}{symbol}{gap}{digits}")
        }
    }
}

/// Formats a percentage with one fraction digit.
pub fn format_percent(value: f64, locale: Locale) -> String {
    let fixed = format!("{value:.1}");
    let (_, decimal) = locale.separators();
    let text = fixed.replace('.', &decimal.to_string());
    match locale {
        Locale::Fi => format!("{text}{NBSP}%"),
        Locale::En => format!("{text}%"),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

// =============================================================================
// ROWS
// =============================================================================

/// Display row for one enriched holding.
#[derive(Debug, Clone, Tabled)]
pub struct HoldingRow {
    #[tabled(rename = "Ticker")]
    pub ticker: String,
    #[tabled(rename = "Quantity")]
    pub quantity: String,
    #[tabled(rename = "Last price")]
    pub last_price: String,
    #[tabled(rename = "Market value")]
    pub market_value: String,
    #[tabled(rename = "Type")]
    pub security_type: String,
    #[tabled(rename = "Country")]
    pub country: String,
    #[tabled(rename = "Sector")]
    pub sector: String,
}

impl HoldingRow {
    /// Formats a holding for display.
    pub fn new(holding: &EnrichedHolding, display: &Presentation) -> Self {
        Self {
            ticker: holding.ticker.clone(),
            quantity: display.number(holding.quantity),
            last_price: holding
                .last_price
                .map(|p| display.number(p))
                .unwrap_or_default(),
            market_value: display.money(holding.market_value),
            security_type: holding.security_type.clone(),
            country: holding.country.clone(),
            sector: holding.sector.clone(),
        }
    }
}

/// Display row for one breakdown category.
#[derive(Debug, Clone, Tabled)]
pub struct CategoryRow {
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Share")]
    pub share: String,
}

/// Machine-readable breakdown row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareRow {
    pub category: String,
    pub value: f64,
    pub share_pct: f64,
}

/// Breakdown rows with shares of the breakdown total, in display order.
pub fn share_rows(breakdown: &Breakdown, display: &Presentation) -> Vec<ShareRow> {
    display
        .ordered(breakdown)
        .into_iter()
        .map(|e| ShareRow {
            category: e.category.clone(),
            value: e.value,
            share_pct: breakdown.share_pct(&e.category).unwrap_or(0.0),
        })
        .collect()
}

/// Display row for one latest price.
#[derive(Debug, Clone, Tabled)]
pub struct PriceRow {
    #[tabled(rename = "Ticker")]
    pub ticker: String,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Price")]
    pub price: String,
}

impl PriceRow {
    /// Formats a latest price for display.
    pub fn new(latest: &LatestPrice, display: &Presentation) -> Self {
        Self {
            ticker: latest.ticker.clone(),
            date: latest.date.clone(),
            price: display.number(latest.price),
        }
    }
}

// =============================================================================
// PRINTING
// =============================================================================

/// Prints holdings as a table followed by the total.
pub fn print_holdings(holdings: &[EnrichedHolding], total: f64, display: &Presentation) {
    let rows: Vec<HoldingRow> = holdings.iter().map(|h| HoldingRow::new(h, display)).collect();
    print_table(&rows, 1..4);
    println!("{} {}", "Total market value:".bold(), display.money(total));
}

/// Prints a breakdown as a table with shares.
pub fn print_breakdown(breakdown: &Breakdown, display: &Presentation) {
    let rows: Vec<CategoryRow> = share_rows(breakdown, display)
        .into_iter()
        .map(|r| CategoryRow {
            value: display.money(r.value),
            share: format_percent(r.share_pct, display.locale),
            category: r.category,
        })
        .collect();
    print_table(&rows, 1..3);
}

/// Prints data as a formatted table, right-aligning the numeric columns.
pub fn print_table<T: Tabled>(data: &[T], numeric: std::ops::Range<usize>) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .with(Modify::new(Columns::new(numeric)).with(Alignment::right()))
        .to_string();

    println!("{}", table);
}

/// Prints serializable data as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints records as CSV with a header row.
pub fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
