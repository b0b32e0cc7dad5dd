//! Top-level orchestration: one snapshot in, the full analysis out.
//!
//! Aggregation runs first; every other component consumes its output plus
//! the raw snapshot; the action generator runs last over everything. No
//! state survives the call, so concurrent callers need no coordination.

use super::types::{DerivedMetrics, FinancialAnalysis, HouseholdSnapshot};
use super::{actions, college, debt, goals, metrics, optimizer, portfolio, retirement, risk, tax};

pub fn analyze(snapshot: &HouseholdSnapshot) -> FinancialAnalysis {
    let aggregates = metrics::aggregate(snapshot);
    let taxes = tax::estimate_taxes(
        aggregates.annual_income,
        &snapshot.state,
        snapshot.filing_status,
    );
    let (health_score, health_breakdown) = metrics::health_score(snapshot, &aggregates);
    let risk = risk::assess(snapshot, &aggregates);

    let goal_plans = goals::build_goal_plans(snapshot, &aggregates);
    let retirement_outlook = retirement::project(snapshot, &aggregates);
    let monte_carlo = retirement::simulate(snapshot, &aggregates);
    let portfolio_review = snapshot
        .allocation
        .as_ref()
        .map(|allocation| portfolio::analyze_allocation(allocation, snapshot.age));
    let debt_plan = debt::compare_strategies(&snapshot.debts, aggregates.monthly_surplus.max(0.0));
    let college_outlook = college::project(snapshot);
    let tax_moves = optimizer::optimize(snapshot, &aggregates, &taxes);

    let action_items = actions::generate(
        snapshot,
        &aggregates,
        &risk,
        &retirement_outlook,
        portfolio_review.as_ref(),
        debt_plan.as_ref(),
    );

    FinancialAnalysis {
        metrics: DerivedMetrics {
            aggregates,
            taxes,
            health_score,
            health_breakdown,
            goal_plans,
            retirement: retirement_outlook,
            monte_carlo,
            portfolio: portfolio_review,
            debt_plan,
            college: college_outlook,
            tax_moves,
            action_items,
        },
        risk,
    }
}
