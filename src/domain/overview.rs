//! Portfolio-wide aggregates, recomputed from the full record list.

use super::trade_record::TradeRecord;

/// How the aggregates treat unit counts.
///
/// `PerUnitPrice` sums raw per-unit prices and ignores units entirely, which
/// disagrees with the per-record gain. `UnitWeighted` scales by units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverviewFormula {
    #[default]
    PerUnitPrice,
    UnitWeighted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overview {
    pub total_invested: f64,
    pub total_gain: f64,
    pub overall_performance: f64,
}

impl Overview {
    pub fn compute(records: &[TradeRecord], formula: OverviewFormula) -> Self {
        let (invested, gain) = match formula {
            OverviewFormula::PerUnitPrice => (
                records.iter().map(|r| r.buy_price).sum::<f64>(),
                records
                    .iter()
                    .map(|r| r.sell_price - r.buy_price)
                    .sum::<f64>(),
            ),
            OverviewFormula::UnitWeighted => (
                records.iter().map(TradeRecord::total_buy_cost).sum::<f64>(),
                records
                    .iter()
                    .map(|r| r.total_sell_revenue() - r.total_buy_cost())
                    .sum::<f64>(),
            ),
        };

        let total_invested = if invested.is_nan() { 0.0 } else { invested };

        let performance = (gain / total_invested) * 100.0;
        let overall_performance = if performance.is_finite() && performance != 0.0 {
            performance
        } else {
            0.0
        };

        Overview {
            total_invested,
            total_gain: gain,
            overall_performance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aaa() -> TradeRecord {
        TradeRecord::new("AAA", 10.0, 5.0, 10.0, 6.0)
    }

    #[test]
    fn empty_list_is_all_zero() {
        let overview = Overview::compute(&[], OverviewFormula::PerUnitPrice);
        assert_eq!(overview.total_invested, 0.0);
        assert_eq!(overview.total_gain, 0.0);
        assert_eq!(overview.overall_performance, 0.0);
    }

    #[test]
    fn per_unit_price_ignores_units() {
        let overview = Overview::compute(&[aaa()], OverviewFormula::PerUnitPrice);
        assert!((overview.total_invested - 5.0).abs() < f64::EPSILON);
        assert!((overview.total_gain - 1.0).abs() < f64::EPSILON);
        assert!((overview.overall_performance - 20.0).abs() < 1e-9);
    }

    #[test]
    fn per_unit_price_sums_across_records() {
        let records = vec![aaa(), TradeRecord::new("BBB", 100.0, 20.0, 1.0, 15.0)];
        let overview = Overview::compute(&records, OverviewFormula::PerUnitPrice);
        assert!((overview.total_invested - 25.0).abs() < f64::EPSILON);
        assert!((overview.total_gain - (-4.0)).abs() < f64::EPSILON);
        assert!((overview.overall_performance - (-16.0)).abs() < 1e-9);
    }

    #[test]
    fn unit_weighted_scales_by_units() {
        let records = vec![aaa(), TradeRecord::new("BBB", 100.0, 20.0, 1.0, 15.0)];
        let overview = Overview::compute(&records, OverviewFormula::UnitWeighted);
        // 50 + 2000 invested, (60 - 50) + (15 - 2000) gain
        assert!((overview.total_invested - 2050.0).abs() < 1e-9);
        assert!((overview.total_gain - (-1975.0)).abs() < 1e-9);
        assert!((overview.overall_performance - (-1975.0 / 2050.0 * 100.0)).abs() < 1e-9);
    }

    #[test]
    fn zero_invested_falls_back_to_zero_performance() {
        // Prices cancel out: buy 5 and buy -5.
        let records = vec![
            TradeRecord::new("AAA", 1.0, 5.0, 1.0, 6.0),
            TradeRecord::new("NEG", 1.0, -5.0, 1.0, 1.0),
        ];
        let overview = Overview::compute(&records, OverviewFormula::PerUnitPrice);
        assert_eq!(overview.total_invested, 0.0);
        assert!((overview.total_gain - 7.0).abs() < f64::EPSILON);
        assert_eq!(overview.overall_performance, 0.0);
    }

    #[test]
    fn break_even_performance_is_zero() {
        let records = vec![TradeRecord::new("FLAT", 3.0, 8.0, 3.0, 8.0)];
        let overview = Overview::compute(&records, OverviewFormula::PerUnitPrice);
        assert_eq!(overview.overall_performance, 0.0);
    }
}
