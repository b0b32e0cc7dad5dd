//! Month-stepping debt payoff simulation comparing avalanche and snowball
//! orderings.
//!
//! One loop serves both methods; only the ordering differs. Each month
//! every open debt accrues interest first, then minimum payments are made
//! in order (capped by balance and remaining budget), then all leftover
//! budget goes to the first open debt in the active ordering. Minimums
//! freed by paid-off debts roll into the leftover automatically because
//! the monthly budget is fixed up front.

use super::constants;
use super::types::{DebtAccount, DebtComparison, DebtMilestone, DebtPayoff, PayoffMethod};

struct SimDebt {
    name: String,
    balance: f64,
    monthly_rate: f64,
    minimum_payment: f64,
    paid_off_month: Option<u32>,
}

fn ordered_debts(debts: &[DebtAccount], method: PayoffMethod) -> Vec<SimDebt> {
    let mut sim: Vec<SimDebt> = debts
        .iter()
        .filter(|d| d.balance > 0.0)
        .map(|d| SimDebt {
            name: d.name.clone(),
            balance: d.balance,
            monthly_rate: d.apr.max(0.0) / 12.0,
            minimum_payment: d.minimum_payment.max(0.0),
            paid_off_month: None,
        })
        .collect();

    match method {
        PayoffMethod::Avalanche => {
            sim.sort_by(|a, b| b.monthly_rate.total_cmp(&a.monthly_rate));
        }
        PayoffMethod::Snowball => {
            sim.sort_by(|a, b| a.balance.total_cmp(&b.balance));
        }
    }
    sim
}

pub fn simulate(debts: &[DebtAccount], extra_monthly: f64, method: PayoffMethod) -> DebtPayoff {
    let mut sim = ordered_debts(debts, method);
    let monthly_budget = sim.iter().map(|d| d.minimum_payment).sum::<f64>()
        + extra_monthly.max(0.0);

    let mut total_interest = 0.0;
    let mut months = 0_u32;
    let mut converged = sim.is_empty();

    while months < constants::DEBT_MONTH_CAP {
        if sim.iter().all(|d| d.balance <= 0.0) {
            converged = true;
            break;
        }

        months += 1;
        let balance_before: f64 = sim.iter().map(|d| d.balance.max(0.0)).sum();
        let mut budget = monthly_budget;

        for debt in sim.iter_mut().filter(|d| d.balance > 0.0) {
            let interest = debt.balance * debt.monthly_rate;
            debt.balance += interest;
            total_interest += interest;

            let payment = debt.minimum_payment.min(debt.balance).min(budget.max(0.0));
            debt.balance -= payment;
            budget -= payment;
        }

        if budget > 0.0 {
            if let Some(debt) = sim.iter_mut().find(|d| d.balance > 0.0) {
                let payment = budget.min(debt.balance);
                debt.balance -= payment;
            }
        }

        for debt in sim.iter_mut() {
            if debt.balance <= 1e-9 && debt.paid_off_month.is_none() {
                debt.balance = 0.0;
                debt.paid_off_month = Some(months);
            }
        }

        let balance_after: f64 = sim.iter().map(|d| d.balance).sum();
        if balance_after >= balance_before - 1e-9 && balance_after > 0.0 {
            // Payments no longer outpace interest; the balance will grow
            // without bound, so stop and report the sentinel.
            converged = false;
            break;
        }
    }

    if sim.iter().all(|d| d.balance <= 0.0) {
        converged = true;
    }

    let mut payoff_order: Vec<DebtMilestone> = sim
        .iter()
        .filter_map(|d| {
            d.paid_off_month.map(|month| DebtMilestone {
                name: d.name.clone(),
                month,
            })
        })
        .collect();
    payoff_order.sort_by_key(|m| m.month);

    DebtPayoff {
        method,
        months,
        total_interest,
        payoff_order,
        converged,
    }
}

/// Runs both orderings and recommends the one with the lower interest
/// cost. Returns None when there is no outstanding debt to simulate.
pub fn compare_strategies(debts: &[DebtAccount], extra_monthly: f64) -> Option<DebtComparison> {
    if !debts.iter().any(|d| d.balance > 0.0) {
        return None;
    }

    let avalanche = simulate(debts, extra_monthly, PayoffMethod::Avalanche);
    let snowball = simulate(debts, extra_monthly, PayoffMethod::Snowball);

    let recommended = if avalanche.total_interest <= snowball.total_interest {
        PayoffMethod::Avalanche
    } else {
        PayoffMethod::Snowball
    };
    let interest_savings = snowball.total_interest - avalanche.total_interest;
    let months_savings = snowball.months as i64 - avalanche.months as i64;

    Some(DebtComparison {
        avalanche,
        snowball,
        recommended,
        interest_savings,
        months_savings,
    })
}
