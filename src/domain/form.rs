//! Trade entry form: owns the single in-progress draft.
//!
//! A draft is admitted to the store only when every field is truthy
//! (non-empty ticker, non-zero numbers). The same rule gates both
//! [`TradeForm::is_ready`] and [`TradeForm::submit`].

use std::fmt;

use super::error::GainTrackerError;
use super::store::PortfolioStore;
use super::trade_record::{TradeRecord, capital_gain_pct};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Ticker,
    UnitsBought,
    BuyPrice,
    UnitsSold,
    SellPrice,
}

impl Field {
    /// Form order.
    pub const ALL: [Field; 5] = [
        Field::Ticker,
        Field::UnitsBought,
        Field::BuyPrice,
        Field::UnitsSold,
        Field::SellPrice,
    ];

    pub fn from_name(name: &str) -> Option<Field> {
        match name.to_lowercase().replace('_', "-").as_str() {
            "ticker" | "stock" => Some(Field::Ticker),
            "units-bought" => Some(Field::UnitsBought),
            "buy-price" | "buy" => Some(Field::BuyPrice),
            "units-sold" => Some(Field::UnitsSold),
            "sell-price" | "sell" => Some(Field::SellPrice),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Ticker => "ticker",
            Field::UnitsBought => "units-bought",
            Field::BuyPrice => "buy-price",
            Field::UnitsSold => "units-sold",
            Field::SellPrice => "sell-price",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormPolicy {
    /// Refuse to submit drafts holding negative prices or unit counts.
    pub reject_negative: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TradeForm {
    draft: TradeRecord,
    policy: FormPolicy,
}

impl TradeForm {
    pub fn new(policy: FormPolicy) -> Self {
        TradeForm {
            draft: TradeRecord::default(),
            policy,
        }
    }

    pub fn draft(&self) -> &TradeRecord {
        &self.draft
    }

    /// Apply raw text input to one field.
    ///
    /// Numeric fields treat empty input as zero. Unparseable or non-finite
    /// input is rejected and the field keeps its previous value.
    pub fn set_field(&mut self, field: Field, raw: &str) -> Result<(), GainTrackerError> {
        let slot = match field {
            Field::Ticker => {
                self.draft.ticker = raw.to_string();
                return Ok(());
            }
            Field::UnitsBought => &mut self.draft.units_bought,
            Field::BuyPrice => &mut self.draft.buy_price,
            Field::UnitsSold => &mut self.draft.units_sold,
            Field::SellPrice => &mut self.draft.sell_price,
        };
        *slot = parse_number(field, raw)?;
        Ok(())
    }

    pub fn number(&self, field: Field) -> Option<f64> {
        match field {
            Field::Ticker => None,
            Field::UnitsBought => Some(self.draft.units_bought),
            Field::BuyPrice => Some(self.draft.buy_price),
            Field::UnitsSold => Some(self.draft.units_sold),
            Field::SellPrice => Some(self.draft.sell_price),
        }
    }

    /// Fields that are currently empty or zero, in form order.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|&f| match self.number(f) {
                None => self.draft.ticker.is_empty(),
                Some(v) => v == 0.0,
            })
            .collect()
    }

    pub fn is_ready(&self) -> bool {
        self.draft.is_complete()
    }

    /// Live capital gain of the draft, shown once both prices are non-zero.
    pub fn preview(&self) -> Option<f64> {
        if self.draft.buy_price != 0.0 && self.draft.sell_price != 0.0 {
            Some(capital_gain_pct(
                self.draft.units_bought,
                self.draft.buy_price,
                self.draft.units_sold,
                self.draft.sell_price,
            ))
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.draft = TradeRecord::default();
    }

    /// Replace the whole draft, as if every field had been typed in.
    pub fn fill(&mut self, record: TradeRecord) {
        self.draft = record;
    }

    /// Push a copy of the draft into `store` and reset the form.
    ///
    /// On error the store and the draft are left untouched.
    pub fn submit(&mut self, store: &mut PortfolioStore) -> Result<TradeRecord, GainTrackerError> {
        if !self.is_ready() {
            let missing = self.missing_fields();
            log::debug!("submit rejected, missing {:?}", missing);
            return Err(GainTrackerError::IncompleteDraft { missing });
        }

        if self.policy.reject_negative {
            if let Some(field) = Field::ALL
                .into_iter()
                .find(|&f| self.number(f).is_some_and(|v| v < 0.0))
            {
                log::debug!("submit rejected, negative {}", field);
                return Err(GainTrackerError::NegativeValue { field });
            }
        }

        let record = self.draft.clone();
        store.add_record(record.clone());
        log::info!("submitted {} ({} stored)", record.ticker, store.len());
        self.reset();
        Ok(record)
    }
}

fn parse_number(field: Field, raw: &str) -> Result<f64, GainTrackerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(GainTrackerError::InvalidNumber {
            field,
            value: raw.to_string(),
        }),
    }
}
