//! Plain text rendering of the overview panel, record list and draft.
//!
//! `TextView` is registered with the store as a [`RecordObserver`] and
//! redraws the overview and list after every store operation.

use std::cell::RefCell;
use std::io::{self, Write};

use crate::domain::form::{Field, TradeForm};
use crate::domain::format::{money, percent, plain_number, signed_percent};
use crate::domain::overview::{Overview, OverviewFormula};
use crate::domain::record_list::{RecordRow, build_rows};
use crate::domain::settings::Settings;
use crate::domain::trade_record::TradeRecord;
use crate::ports::observer_port::RecordObserver;

pub fn overview_text(overview: &Overview, currency_symbol: &str) -> String {
    format!(
        "Portfolio Overview\n\
         Total Investments: {}\n\
         Total Gains: {}\n\
         Overall Portfolio Performance: {}\n",
        money(overview.total_invested, currency_symbol),
        money(overview.total_gain, currency_symbol),
        percent(overview.overall_performance),
    )
}

pub fn row_text(row: &RecordRow, currency_symbol: &str) -> String {
    format!(
        "#{}\n  Stock: {}\n  Buy Price: {}{}\n  Sell Price: {}{}\n  Capital Gains: {}\n",
        row.row,
        row.ticker,
        currency_symbol,
        plain_number(row.buy_price),
        currency_symbol,
        plain_number(row.sell_price),
        signed_percent(row.gain_pct),
    )
}

pub fn preview_text(form: &TradeForm) -> Option<String> {
    form.preview()
        .map(|gain| format!("Preview: {}\n", signed_percent(gain)))
}

pub fn draft_text(form: &TradeForm) -> String {
    let draft = form.draft();
    let mut text = format!(
        "Draft\n  Stock: {}\n  Units Bought: {}\n  Buy Price: {}\n  Units Sold: {}\n  Sell Price: {}\n",
        draft.ticker,
        plain_number(draft.units_bought),
        plain_number(draft.buy_price),
        plain_number(draft.units_sold),
        plain_number(draft.sell_price),
    );
    let missing = form.missing_fields();
    if missing.is_empty() {
        text.push_str("  Submit: ready\n");
    } else {
        let names: Vec<String> = missing.iter().map(Field::to_string).collect();
        text.push_str(&format!("  Submit: disabled (missing {})\n", names.join(", ")));
    }
    if let Some(preview) = preview_text(form) {
        text.push_str(&preview);
    }
    text
}

pub struct TextView<W: Write> {
    out: RefCell<W>,
    currency_symbol: String,
    formula: OverviewFormula,
}

impl<W: Write> TextView<W> {
    pub fn new(out: W, settings: &Settings) -> Self {
        TextView {
            out: RefCell::new(out),
            currency_symbol: settings.currency_symbol.clone(),
            formula: settings.overview_formula,
        }
    }

    pub fn write_text(&self, text: &str) -> io::Result<()> {
        let mut out = self.out.borrow_mut();
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    /// Run `f` against the underlying writer.
    pub fn with_output<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut out = self.out.borrow_mut();
        f(&mut *out)
    }

    pub fn render_overview(&self, records: &[TradeRecord]) -> io::Result<()> {
        let overview = Overview::compute(records, self.formula);
        self.write_text(&overview_text(&overview, &self.currency_symbol))
    }

    pub fn render_records(&self, records: &[TradeRecord]) -> io::Result<()> {
        let text: String = build_rows(records)
            .iter()
            .map(|row| row_text(row, &self.currency_symbol))
            .collect();
        self.write_text(&text)
    }

    /// Overview followed by the record list.
    pub fn render_page(&self, records: &[TradeRecord]) -> io::Result<()> {
        self.render_overview(records)?;
        if !records.is_empty() {
            self.write_text("\n")?;
            self.render_records(records)?;
        }
        Ok(())
    }

    pub fn render_draft(&self, form: &TradeForm) -> io::Result<()> {
        self.write_text(&draft_text(form))
    }

    /// Prints nothing until both draft prices are set.
    pub fn render_preview(&self, form: &TradeForm) -> io::Result<()> {
        match preview_text(form) {
            Some(text) => self.write_text(&text),
            None => Ok(()),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> RecordObserver for TextView<W> {
    fn records_changed(&self, records: &[TradeRecord]) {
        if let Err(e) = self.render_page(records) {
            log::warn!("failed to redraw portfolio: {}", e);
        }
    }
}
