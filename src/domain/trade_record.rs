//! Trade record entity and the per-record capital gain formula.

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TradeRecord {
    pub ticker: String,
    pub units_bought: f64,
    pub units_sold: f64,
    pub buy_price: f64,
    pub sell_price: f64,
}

impl TradeRecord {
    pub fn new(
        ticker: impl Into<String>,
        units_bought: f64,
        buy_price: f64,
        units_sold: f64,
        sell_price: f64,
    ) -> Self {
        TradeRecord {
            ticker: ticker.into(),
            units_bought,
            units_sold,
            buy_price,
            sell_price,
        }
    }

    /// units_bought * buy_price
    pub fn total_buy_cost(&self) -> f64 {
        self.units_bought * self.buy_price
    }

    /// units_sold * sell_price
    pub fn total_sell_revenue(&self) -> f64 {
        self.units_sold * self.sell_price
    }

    /// Percentage change from total buy cost to total sell revenue.
    ///
    /// Not guarded: a zero buy cost yields NaN or an infinity.
    pub fn capital_gain_pct(&self) -> f64 {
        capital_gain_pct(
            self.units_bought,
            self.buy_price,
            self.units_sold,
            self.sell_price,
        )
    }

    /// All five fields non-empty / non-zero.
    pub fn is_complete(&self) -> bool {
        !self.ticker.is_empty()
            && self.units_bought != 0.0
            && self.units_sold != 0.0
            && self.buy_price != 0.0
            && self.sell_price != 0.0
    }
}

pub fn capital_gain_pct(units_bought: f64, buy_price: f64, units_sold: f64, sell_price: f64) -> f64 {
    let total_buy_cost = units_bought * buy_price;
    let total_sell_revenue = units_sold * sell_price;
    ((total_sell_revenue - total_buy_cost) / total_buy_cost) * 100.0
}
