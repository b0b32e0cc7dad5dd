//! Snapshot aggregation and the composite financial-health score.

use super::constants;
use super::types::{AggregateMetrics, HealthBreakdown, HouseholdSnapshot};

/// Sums the snapshot into totals and ratios. Every division guards the
/// zero-denominator case and returns 0 instead.
pub fn aggregate(snapshot: &HouseholdSnapshot) -> AggregateMetrics {
    let total_assets = snapshot.accounts.total();
    let total_liabilities = snapshot.liabilities.total();
    let annual_income = snapshot.total_income();
    let monthly_income = annual_income / 12.0;
    let monthly_expenses = snapshot.expenses.total().max(0.0);
    let monthly_surplus = monthly_income - monthly_expenses;

    let debt_to_income = if annual_income > 0.0 {
        total_liabilities / annual_income
    } else {
        0.0
    };

    let savings_rate = if monthly_income > 0.0 {
        (monthly_surplus / monthly_income * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    let emergency_fund_months = if monthly_expenses > 0.0 {
        snapshot.accounts.liquid() / monthly_expenses
    } else {
        0.0
    };

    let coverage_needed = annual_income * constants::LIFE_COVERAGE_INCOME_MULTIPLE;
    let life_insurance_gap =
        (coverage_needed - snapshot.protection.life_insurance_coverage).max(0.0);

    AggregateMetrics {
        total_assets,
        total_liabilities,
        net_worth: total_assets - total_liabilities,
        annual_income,
        monthly_income,
        monthly_expenses,
        annual_expenses: monthly_expenses * 12.0,
        monthly_surplus,
        debt_to_income,
        savings_rate,
        emergency_fund_months,
        life_insurance_gap,
    }
}

/// Composite 0-100 health score. Five independently capped subscores
/// (25 + 25 + 20 + 15 + 15) summed and rounded.
pub fn health_score(snapshot: &HouseholdSnapshot, agg: &AggregateMetrics) -> (f64, HealthBreakdown) {
    let breakdown = HealthBreakdown {
        protection: protection_score(snapshot, agg),
        savings: savings_rate_score(agg.savings_rate),
        emergency_fund: emergency_fund_score(agg.emergency_fund_months),
        debt_load: debt_score(agg),
        wealth: wealth_score(agg),
    };
    (breakdown.total().round(), breakdown)
}

/// Up to 25 points: 10 for life-coverage-gap closure, 5 each for
/// disability, umbrella, and estate planning.
fn protection_score(snapshot: &HouseholdSnapshot, agg: &AggregateMetrics) -> f64 {
    let needed = agg.annual_income * constants::LIFE_COVERAGE_INCOME_MULTIPLE;
    let coverage_ratio = if needed > 0.0 {
        (snapshot.protection.life_insurance_coverage / needed).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let mut score = 10.0 * coverage_ratio;
    if snapshot.protection.has_disability_insurance {
        score += 5.0;
    }
    if snapshot.protection.has_umbrella_policy {
        score += 5.0;
    }
    if snapshot.protection.has_estate_plan {
        score += 5.0;
    }
    score
}

/// Up to 25 points. Below the 5% tier the score equals the rate itself.
fn savings_rate_score(rate: f64) -> f64 {
    if rate >= 20.0 {
        25.0
    } else if rate >= 15.0 {
        20.0
    } else if rate >= 10.0 {
        15.0
    } else if rate >= 5.0 {
        10.0
    } else {
        rate.max(0.0)
    }
}

/// Up to 20 points. Below one month the score scales linearly to zero.
fn emergency_fund_score(months: f64) -> f64 {
    if months >= 6.0 {
        20.0
    } else if months >= 3.0 {
        15.0
    } else if months >= 1.0 {
        8.0
    } else {
        (months * 8.0).max(0.0)
    }
}

/// Up to 15 points, by debt-to-income multiple.
fn debt_score(agg: &AggregateMetrics) -> f64 {
    if agg.annual_income <= 0.0 {
        return if agg.total_liabilities > 0.0 { 0.0 } else { 15.0 };
    }

    let dti = agg.debt_to_income;
    if dti <= 2.0 {
        15.0
    } else if dti <= 3.0 {
        10.0
    } else if dti <= 4.0 {
        5.0
    } else if dti <= 5.0 {
        2.0
    } else {
        0.0
    }
}

/// Up to 15 points, by net-worth-to-income multiple. Below 1x the score
/// scales linearly to zero.
fn wealth_score(agg: &AggregateMetrics) -> f64 {
    if agg.annual_income <= 0.0 {
        return if agg.net_worth > 0.0 { 15.0 } else { 0.0 };
    }

    let ratio = agg.net_worth / agg.annual_income;
    if ratio >= 5.0 {
        15.0
    } else if ratio >= 3.0 {
        10.0
    } else if ratio >= 1.0 {
        5.0
    } else {
        (ratio * 5.0).max(0.0)
    }
}
