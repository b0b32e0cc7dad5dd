//! Generic "required periodic contribution" solver and the per-goal plans
//! built from it.

use tracing::warn;

use super::constants;
use super::types::{AggregateMetrics, GoalPlan, HouseholdSnapshot};

/// Solves for the level end-of-month payment that grows `current` to
/// `target` over `months` at the given annual rate.
///
/// Total function: invalid (negative or non-finite) inputs log a warning
/// and return 0; a past-due deadline returns the outstanding lump sum; an
/// already-met target returns 0.
pub fn required_monthly_contribution(
    current: f64,
    target: f64,
    months: i64,
    annual_rate: f64,
) -> f64 {
    if !current.is_finite() || !target.is_finite() || !annual_rate.is_finite() {
        warn!(current, target, annual_rate, "non-finite goal input; returning 0");
        return 0.0;
    }
    if current < 0.0 || target < 0.0 || annual_rate < 0.0 {
        warn!(current, target, annual_rate, "negative goal input; returning 0");
        return 0.0;
    }

    if months <= 0 {
        return (target - current).max(0.0);
    }
    if target <= current {
        return 0.0;
    }

    let monthly_rate = annual_rate / 12.0;
    let n = months as f64;

    if monthly_rate == 0.0 {
        return (target - current) / n;
    }

    let growth = (1.0 + monthly_rate).powf(n);
    let gap = target - current * growth;
    if gap <= 0.0 {
        return 0.0;
    }

    let annuity_factor = (growth - 1.0) / monthly_rate;
    gap / annuity_factor
}

/// Companion projection: `current` compounded monthly plus an end-of-month
/// level payment stream. Inverse of `required_monthly_contribution`.
pub fn future_value(current: f64, monthly_payment: f64, months: i64, annual_rate: f64) -> f64 {
    if months <= 0 {
        return current;
    }
    let monthly_rate = annual_rate / 12.0;
    let n = months as f64;
    if monthly_rate == 0.0 {
        return current + monthly_payment * n;
    }
    let growth = (1.0 + monthly_rate).powf(n);
    current * growth + monthly_payment * ((growth - 1.0) / monthly_rate)
}

fn progress_pct(current: f64, target: f64) -> f64 {
    if target > 0.0 {
        (current / target * 100.0).clamp(0.0, 100.0)
    } else {
        100.0
    }
}

fn plan(name: &str, current: f64, target: f64, months: u32, annual_rate: f64) -> GoalPlan {
    GoalPlan {
        name: name.to_string(),
        current,
        target,
        months_remaining: months,
        progress_pct: progress_pct(current, target),
        monthly_contribution: required_monthly_contribution(
            current,
            target,
            months as i64,
            annual_rate,
        ),
    }
}

/// One plan row per declared goal. Undeclared goals produce no row.
pub fn build_goal_plans(snapshot: &HouseholdSnapshot, agg: &AggregateMetrics) -> Vec<GoalPlan> {
    let goals = &snapshot.goals;
    let mut plans = Vec::new();

    if let Some(months_target) = goals.emergency_fund_months {
        let target = (months_target.max(0.0)) * agg.monthly_expenses;
        plans.push(plan(
            "emergency_fund",
            snapshot.accounts.liquid(),
            target,
            constants::EMERGENCY_FUND_BUILD_MONTHS,
            constants::SHORT_TERM_SAVINGS_RATE,
        ));
    }

    if let Some(goal) = goals.down_payment {
        plans.push(plan(
            "down_payment",
            snapshot.accounts.savings,
            goal.target,
            goal.months_remaining,
            constants::SHORT_TERM_SAVINGS_RATE,
        ));
    }

    if let Some(goal) = &goals.education {
        plans.push(plan(
            "education",
            goal.saved,
            goal.target,
            goal.months_remaining,
            constants::EDUCATION_SAVINGS_GROWTH,
        ));
    }

    if let Some(purchase) = &goals.major_purchase {
        let mut row = plan(
            "major_purchase",
            0.0,
            purchase.amount,
            purchase.months_remaining,
            constants::SHORT_TERM_SAVINGS_RATE,
        );
        row.name = format!("major_purchase:{}", purchase.label);
        plans.push(row);
    }

    if let Some(goal) = goals.net_worth_target {
        plans.push(plan(
            "net_worth",
            agg.net_worth.max(0.0),
            goal.target,
            goal.months_remaining,
            snapshot.assumptions.investment_return,
        ));
    }

    if let Some(target) = goals.annual_savings_target {
        let current_annual_savings = (agg.monthly_surplus * 12.0).max(0.0);
        let shortfall_per_month = ((target - current_annual_savings) / 12.0).max(0.0);
        plans.push(GoalPlan {
            name: "annual_savings".to_string(),
            current: current_annual_savings,
            target,
            months_remaining: 12,
            progress_pct: progress_pct(current_annual_savings, target),
            monthly_contribution: shortfall_per_month,
        });
    }

    plans
}
