//! Catalog of conditional tax-savings recommendations. Each rule is
//! evaluated independently against the snapshot; estimates are rough
//! planning figures (amount saved times the effective rate), not filings.

use super::constants;
use super::types::{
    AggregateMetrics, Difficulty, FilingStatus, HouseholdSnapshot, TaxEstimate,
    TaxRecommendation, TaxSavingsReport,
};

fn recommendation(
    category: &str,
    description: String,
    estimated_savings: f64,
    difficulty: Difficulty,
) -> TaxRecommendation {
    TaxRecommendation {
        category: category.to_string(),
        description,
        estimated_savings,
        difficulty,
    }
}

pub fn optimize(
    snapshot: &HouseholdSnapshot,
    agg: &AggregateMetrics,
    taxes: &TaxEstimate,
) -> TaxSavingsReport {
    let effective_rate = taxes.effective_rate / 100.0;
    let income = agg.annual_income;
    let mut recommendations = Vec::new();

    // Pre-tax deferral headroom, using annual surplus as the stand-in for
    // what the household already contributes.
    if income > 0.0 {
        let estimated_contribution = (agg.monthly_surplus * 12.0)
            .max(0.0)
            .min(constants::EMPLOYEE_DEFERRAL_LIMIT);
        let headroom = constants::EMPLOYEE_DEFERRAL_LIMIT - estimated_contribution;
        if headroom > 0.0 && effective_rate > 0.0 {
            recommendations.push(recommendation(
                "retirement_contributions",
                format!(
                    "About ${headroom:.0} of unused pre-tax deferral room remains under the ${:.0} limit.",
                    constants::EMPLOYEE_DEFERRAL_LIMIT
                ),
                headroom * effective_rate,
                Difficulty::Easy,
            ));
        }
    }

    if income > constants::HSA_INCOME_FLOOR {
        let family = snapshot.spouse_annual_income > 0.0 || snapshot.dependents > 0;
        let limit = if family {
            constants::HSA_LIMIT_FAMILY
        } else {
            constants::HSA_LIMIT_SINGLE
        };
        recommendations.push(recommendation(
            "hsa",
            format!(
                "If enrolled in a high-deductible health plan, contributing the ${limit:.0} HSA limit is triple tax-advantaged."
            ),
            limit * effective_rate,
            Difficulty::Easy,
        ));
    }

    if snapshot.accounts.brokerage > 0.0 {
        let harvestable = (snapshot.accounts.brokerage * constants::LOSS_HARVEST_YIELD)
            .min(constants::CAPITAL_LOSS_DEDUCTION_LIMIT);
        if harvestable > 0.0 && effective_rate > 0.0 {
            recommendations.push(recommendation(
                "tax_loss_harvesting",
                format!(
                    "Harvesting losses in the taxable account could offset up to ${harvestable:.0} of ordinary income this year."
                ),
                harvestable * effective_rate,
                Difficulty::Medium,
            ));
        }
    }

    if snapshot.filing_status == FilingStatus::MarriedJoint
        && income > constants::BACKDOOR_ROTH_INCOME_FLOOR
    {
        recommendations.push(recommendation(
            "backdoor_roth",
            "Income is above the direct Roth IRA limit; a backdoor Roth conversion keeps the contribution available.".to_string(),
            constants::IRA_CONTRIBUTION_LIMIT * effective_rate,
            Difficulty::Advanced,
        ));
    }

    if income > constants::CHARITABLE_BUNCHING_INCOME_FLOOR {
        let bunched = income * constants::CHARITABLE_BUNCHING_SHARE;
        recommendations.push(recommendation(
            "charitable_bunching",
            format!(
                "Bunching roughly ${bunched:.0} of giving into one year can clear the standard deduction and itemize."
            ),
            bunched * effective_rate,
            Difficulty::Medium,
        ));
    }

    let state = snapshot.state.trim().to_ascii_uppercase();
    if snapshot.dependents > 0
        && constants::STATE_529_DEDUCTION_STATES.contains(&state.as_str())
    {
        recommendations.push(recommendation(
            "state_529",
            format!(
                "{state} allows a state deduction on 529 contributions; ${:.0} in contributions reduces state taxable income.",
                constants::STATE_529_DEDUCTION
            ),
            constants::STATE_529_DEDUCTION * effective_rate,
            Difficulty::Easy,
        ));
    }

    let total_potential_savings: f64 = recommendations.iter().map(|r| r.estimated_savings).sum();

    TaxSavingsReport {
        recommendations,
        total_potential_savings,
        current_tax_bill: taxes.total_tax,
        optimized_tax_bill: (taxes.total_tax - total_potential_savings).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metrics::aggregate;
    use crate::core::tax::estimate_taxes;
    use crate::core::test_support::{bare_snapshot, sample_snapshot};

    fn report_for(snapshot: &HouseholdSnapshot) -> TaxSavingsReport {
        let agg = aggregate(snapshot);
        let taxes = estimate_taxes(agg.annual_income, &snapshot.state, snapshot.filing_status);
        optimize(snapshot, &agg, &taxes)
    }

    fn has_category(report: &TaxSavingsReport, category: &str) -> bool {
        report.recommendations.iter().any(|r| r.category == category)
    }

    #[test]
    fn zero_income_snapshot_triggers_nothing() {
        let report = report_for(&bare_snapshot());
        assert!(report.recommendations.is_empty());
        assert_eq!(report.total_potential_savings, 0.0);
        assert_eq!(report.optimized_tax_bill, 0.0);
    }

    #[test]
    fn sample_household_sees_the_expected_catalog_entries() {
        let report = report_for(&sample_snapshot());
        // The sample surplus already exceeds the deferral limit, so no
        // headroom entry appears.
        assert!(!has_category(&report, "retirement_contributions"));
        assert!(has_category(&report, "hsa"));
        assert!(has_category(&report, "tax_loss_harvesting"));
        assert!(has_category(&report, "charitable_bunching"));
        // Sample state is CA, which is not on the 529 deduction roster.
        assert!(!has_category(&report, "state_529"));
    }

    #[test]
    fn deferral_headroom_fires_when_surplus_is_below_the_limit() {
        let mut snapshot = sample_snapshot();
        snapshot.expenses.other += 6_500.0;
        let agg = aggregate(&snapshot);
        // Surplus is now under the limit, leaving real headroom.
        assert!((agg.monthly_surplus * 12.0) < constants::EMPLOYEE_DEFERRAL_LIMIT);
        let report = report_for(&snapshot);
        assert!(has_category(&report, "retirement_contributions"));
    }

    #[test]
    fn backdoor_roth_requires_joint_filing_above_the_floor() {
        let mut snapshot = sample_snapshot();
        snapshot.annual_income = 250_000.0;
        assert!(has_category(&report_for(&snapshot), "backdoor_roth"));

        snapshot.filing_status = FilingStatus::Single;
        assert!(!has_category(&report_for(&snapshot), "backdoor_roth"));
    }

    #[test]
    fn state_529_deduction_fires_only_for_enumerated_states_with_dependents() {
        let mut snapshot = sample_snapshot();
        snapshot.state = "NY".to_string();
        assert!(has_category(&report_for(&snapshot), "state_529"));

        snapshot.dependents = 0;
        assert!(!has_category(&report_for(&snapshot), "state_529"));
    }

    #[test]
    fn loss_harvesting_is_capped_at_the_deduction_limit() {
        let mut snapshot = sample_snapshot();
        snapshot.accounts.brokerage = 10_000_000.0;
        let report = report_for(&snapshot);
        let agg = aggregate(&snapshot);
        let taxes = estimate_taxes(agg.annual_income, &snapshot.state, snapshot.filing_status);
        let entry = report
            .recommendations
            .iter()
            .find(|r| r.category == "tax_loss_harvesting")
            .expect("rule triggered");
        let cap = constants::CAPITAL_LOSS_DEDUCTION_LIMIT * taxes.effective_rate / 100.0;
        assert!((entry.estimated_savings - cap).abs() <= 1e-6);
    }

    #[test]
    fn totals_and_optimized_bill_are_consistent() {
        let report = report_for(&sample_snapshot());
        let sum: f64 = report
            .recommendations
            .iter()
            .map(|r| r.estimated_savings)
            .sum();
        assert!((report.total_potential_savings - sum).abs() <= 1e-9);
        assert!(
            (report.optimized_tax_bill
                - (report.current_tax_bill - report.total_potential_savings).max(0.0))
            .abs()
                <= 1e-9
        );
        assert!(report.optimized_tax_bill >= 0.0);
    }
}
