//! Merges every analysis into one deduplicated, prioritized action list.

use super::constants;
use super::types::{
    ActionItem, AggregateMetrics, DebtComparison, HouseholdSnapshot, PayoffMethod,
    PortfolioReview, Priority, RetirementOutlook, RiskAssessment, RiskStatus,
};

fn has_category(items: &[ActionItem], category: &str) -> bool {
    items.iter().any(|i| i.category == category)
}

fn item(
    priority: Priority,
    category: &str,
    action: String,
    impact: String,
    deadline: &str,
) -> ActionItem {
    ActionItem {
        priority,
        category: category.to_string(),
        action,
        impact,
        deadline: deadline.to_string(),
    }
}

pub fn generate(
    snapshot: &HouseholdSnapshot,
    agg: &AggregateMetrics,
    risk: &RiskAssessment,
    retirement: &RetirementOutlook,
    portfolio: Option<&PortfolioReview>,
    debt_plan: Option<&DebtComparison>,
) -> Vec<ActionItem> {
    let mut items: Vec<ActionItem> = Vec::new();

    for category in risk
        .categories
        .iter()
        .filter(|c| c.status == RiskStatus::Critical)
    {
        let action = category
            .recommendations
            .first()
            .cloned()
            .unwrap_or_else(|| category.message.clone());
        items.push(item(
            Priority::Critical,
            &category.name,
            action,
            category.message.clone(),
            "Within 30 days",
        ));
    }

    if agg.emergency_fund_months < 3.0 && !has_category(&items, "emergency_fund") {
        items.push(item(
            Priority::High,
            "emergency_fund",
            "Direct surplus cash into liquid savings until three months of expenses are covered."
                .to_string(),
            format!(
                "Reserves currently cover {:.1} months of expenses.",
                agg.emergency_fund_months
            ),
            "Within 6 months",
        ));
    }

    if retirement.gap > constants::RETIREMENT_GAP_ACTION_FLOOR && !has_category(&items, "retirement_savings")
    {
        items.push(item(
            Priority::High,
            "retirement_savings",
            format!(
                "Raise retirement contributions toward ${:.0}/month to close the projected shortfall.",
                retirement.required_monthly_contribution
            ),
            format!("Projected retirement gap of ${:.0}.", retirement.gap),
            "Next plan review",
        ));
    }

    let worst_high_apr = snapshot
        .debts
        .iter()
        .filter(|d| d.balance > 0.0 && d.apr > constants::HIGH_APR_FLOOR)
        .max_by(|a, b| a.apr.total_cmp(&b.apr));
    if let Some(debt) = worst_high_apr {
        if !has_category(&items, "high_interest_debt") {
            let impact = match debt_plan {
                Some(plan) if plan.interest_savings > 0.0 => format!(
                    "Avalanche ordering saves ${:.0} in interest over snowball.",
                    plan.interest_savings
                ),
                _ => format!(
                    "{} accrues {:.1}% annually on ${:.0}.",
                    debt.name,
                    debt.apr * 100.0,
                    debt.balance
                ),
            };
            items.push(item(
                Priority::High,
                "high_interest_debt",
                format!(
                    "Target {} first; its {:.1}% rate outpaces any expected investment return.",
                    debt.name,
                    debt.apr * 100.0
                ),
                impact,
                "Immediately",
            ));
        }
    }

    if let (Some(goal_months), Some(plan)) = (snapshot.goals.debt_free_months, debt_plan) {
        let chosen = match plan.recommended {
            PayoffMethod::Avalanche => &plan.avalanche,
            PayoffMethod::Snowball => &plan.snowball,
        };
        let behind = !chosen.converged || chosen.months > goal_months;
        if behind && !has_category(&items, "debt_free_goal") {
            items.push(item(
                Priority::Medium,
                "debt_free_goal",
                "Increase the monthly extra payment to hit the debt-free date.".to_string(),
                if chosen.converged {
                    format!(
                        "Current pace clears debt in {} months against a {}-month goal.",
                        chosen.months, goal_months
                    )
                } else {
                    "At the current budget the balance never reaches zero.".to_string()
                },
                "Next budget cycle",
            ));
        }
    }

    if agg.savings_rate < 10.0 && !has_category(&items, "savings_rate") {
        items.push(item(
            Priority::Medium,
            "savings_rate",
            "Automate transfers to lift the savings rate to at least 10% of income.".to_string(),
            format!("Current savings rate is {:.1}%.", agg.savings_rate),
            "Next budget cycle",
        ));
    }

    if let Some(review) = portfolio {
        if review.rebalance_needed && !has_category(&items, "portfolio_rebalance") {
            items.push(item(
                Priority::Medium,
                "portfolio_rebalance",
                format!(
                    "Rebalance toward {:.0}% stocks from the current {:.0}%.",
                    review.target_stock_pct, review.current_stock_pct
                ),
                "Allocation has drifted more than 10 points from target.".to_string(),
                "Next quarter",
            ));
        }
    }

    items.sort_by_key(|i| i.priority);
    items.truncate(constants::ACTION_ITEM_CAP);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metrics::{aggregate, health_score};
    use crate::core::DebtAccount;
    use crate::core::test_support::{bare_snapshot, sample_snapshot};
    use crate::core::{debt, portfolio, retirement, risk};

    fn actions_for(snapshot: &HouseholdSnapshot) -> Vec<ActionItem> {
        let agg = aggregate(snapshot);
        let _ = health_score(snapshot, &agg);
        let assessment = risk::assess(snapshot, &agg);
        let outlook = retirement::project(snapshot, &agg);
        let review = snapshot
            .allocation
            .as_ref()
            .map(|a| portfolio::analyze_allocation(a, snapshot.age));
        let plan = debt::compare_strategies(&snapshot.debts, agg.monthly_surplus.max(0.0));
        generate(
            snapshot,
            &agg,
            &assessment,
            &outlook,
            review.as_ref(),
            plan.as_ref(),
        )
    }

    #[test]
    fn critical_risk_categories_surface_as_critical_items() {
        let mut snapshot = bare_snapshot();
        snapshot.annual_income = 90_000.0;
        let items = actions_for(&snapshot);
        assert!(items
            .iter()
            .any(|i| i.category == "disability" && i.priority == Priority::Critical));
    }

    #[test]
    fn list_is_sorted_by_priority_and_capped() {
        let mut snapshot = bare_snapshot();
        snapshot.annual_income = 90_000.0;
        snapshot.dependents = 2;
        snapshot.liabilities.credit_cards = 400_000.0;
        snapshot.debts = vec![DebtAccount {
            name: "Visa".to_string(),
            balance: 12_000.0,
            apr: 0.24,
            minimum_payment: 240.0,
        }];
        let items = actions_for(&snapshot);
        assert!(items.len() <= constants::ACTION_ITEM_CAP);
        for window in items.windows(2) {
            assert!(window[0].priority <= window[1].priority);
        }
    }

    #[test]
    fn categories_are_deduplicated() {
        let mut snapshot = bare_snapshot();
        snapshot.annual_income = 20_000.0;
        snapshot.expenses.housing = 1_700.0;
        // Zero savings: both the critical risk category and the explicit
        // emergency-fund rule would fire for the same category.
        let items = actions_for(&snapshot);
        let count = items
            .iter()
            .filter(|i| i.category == "emergency_fund")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn high_apr_debt_produces_an_item_with_the_worst_offender() {
        let mut snapshot = sample_snapshot();
        snapshot.debts = vec![
            DebtAccount {
                name: "Store card".to_string(),
                balance: 2_000.0,
                apr: 0.27,
                minimum_payment: 60.0,
            },
            DebtAccount {
                name: "Car".to_string(),
                balance: 9_000.0,
                apr: 0.06,
                minimum_payment: 180.0,
            },
        ];
        let items = actions_for(&snapshot);
        let entry = items
            .iter()
            .find(|i| i.category == "high_interest_debt")
            .expect("item present");
        assert!(entry.action.contains("Store card"));
    }

    #[test]
    fn missed_debt_free_date_adds_a_pacing_item() {
        let mut snapshot = sample_snapshot();
        snapshot.goals.debt_free_months = Some(1);
        snapshot.debts = vec![DebtAccount {
            name: "Card".to_string(),
            balance: 20_000.0,
            apr: 0.18,
            minimum_payment: 400.0,
        }];
        let items = actions_for(&snapshot);
        assert!(items.iter().any(|i| i.category == "debt_free_goal"));
    }

    #[test]
    fn met_debt_free_date_stays_quiet() {
        let mut snapshot = sample_snapshot();
        snapshot.goals.debt_free_months = Some(120);
        snapshot.debts = vec![DebtAccount {
            name: "Card".to_string(),
            balance: 5_000.0,
            apr: 0.10,
            minimum_payment: 200.0,
        }];
        let items = actions_for(&snapshot);
        assert!(!items.iter().any(|i| i.category == "debt_free_goal"));
    }

    #[test]
    fn healthy_household_generates_few_or_no_items() {
        let mut snapshot = sample_snapshot();
        snapshot.protection.life_insurance_coverage = 2_000_000.0;
        snapshot.protection.has_disability_insurance = true;
        snapshot.protection.has_umbrella_policy = true;
        snapshot.protection.has_estate_plan = true;
        snapshot.accounts.savings = 100_000.0;
        snapshot.accounts.traditional_retirement = 2_000_000.0;
        let items = actions_for(&snapshot);
        assert!(items.iter().all(|i| i.priority != Priority::Critical));
    }
}
