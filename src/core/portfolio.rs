//! Allocation risk/return characterization against an age-based target.

use super::types::{Allocation, PortfolioReview};

const STOCK_RETURN: f64 = 0.08;
const BOND_RETURN: f64 = 0.045;
const CASH_RETURN: f64 = 0.02;
const OTHER_RETURN: f64 = 0.06;

const ALLOCATION_SUM_TOLERANCE: f64 = 0.1;
const REBALANCE_DRIFT_POINTS: f64 = 10.0;

fn target_stock_pct(age: u32) -> f64 {
    (110.0 - age as f64).clamp(40.0, 90.0)
}

pub fn analyze_allocation(allocation: &Allocation, age: u32) -> PortfolioReview {
    let stocks = allocation.stocks.max(0.0);
    let bonds = allocation.bonds.max(0.0);
    let cash = allocation.cash.max(0.0);
    let other = allocation.other.max(0.0);
    let sum = stocks + bonds + cash + other;

    let off_hundred = (sum - 100.0).abs() > ALLOCATION_SUM_TOLERANCE;
    let (w_stocks, w_bonds, w_cash, w_other) = if sum > 0.0 && off_hundred {
        (
            stocks / sum * 100.0,
            bonds / sum * 100.0,
            cash / sum * 100.0,
            other / sum * 100.0,
        )
    } else if sum > 0.0 {
        (stocks, bonds, cash, other)
    } else {
        (0.0, 0.0, 0.0, 0.0)
    };

    let expected_return = (w_stocks * STOCK_RETURN
        + w_bonds * BOND_RETURN
        + w_cash * CASH_RETURN
        + w_other * OTHER_RETURN)
        / 100.0;

    let target = target_stock_pct(age);
    let rebalance_needed = (w_stocks - target).abs() > REBALANCE_DRIFT_POINTS;

    let mut warnings = Vec::new();
    if off_hundred {
        warnings.push(format!(
            "Allocation percentages sum to {sum:.1}, not 100; normalized weights were used."
        ));
    }
    if w_cash > 20.0 {
        warnings.push("Over 20% in cash will lag inflation over long horizons.".to_string());
    }
    if w_stocks > 90.0 && age > 50 {
        warnings.push("Stock exposure above 90% is aggressive past age 50.".to_string());
    }
    if w_stocks < 50.0 && age < 40 {
        warnings.push("Stock exposure under 50% is conservative for a long horizon.".to_string());
    }
    if allocation.expense_ratio > 1.0 {
        warnings.push(format!(
            "Average expense ratio of {:.2}% is high; compare low-cost index funds.",
            allocation.expense_ratio
        ));
    }

    PortfolioReview {
        risk_score: w_stocks.clamp(0.0, 100.0),
        expected_return,
        current_stock_pct: w_stocks,
        target_stock_pct: target,
        rebalance_needed,
        warnings,
    }
}
