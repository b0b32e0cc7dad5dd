//! Future college-cost projection for the household's dependents.

use super::constants;
use super::goals::required_monthly_contribution;
use super::types::{ChildCollegeCost, CollegeOutlook, HouseholdSnapshot};

/// Projects a fixed four-year base cost to each child's 18th birthday at
/// the education inflation rate. Children without a recorded age count as
/// newborns. Returns None when there are no dependents.
pub fn project(snapshot: &HouseholdSnapshot) -> Option<CollegeOutlook> {
    if snapshot.dependents == 0 {
        return None;
    }

    let mut per_child = Vec::with_capacity(snapshot.dependents as usize);
    for index in 0..snapshot.dependents as usize {
        let age = snapshot.child_ages.get(index).copied().unwrap_or(0);
        let years_until_college = constants::COLLEGE_START_AGE.saturating_sub(age);
        let projected_cost = constants::COLLEGE_FOUR_YEAR_COST
            * (1.0 + constants::EDUCATION_INFLATION_RATE).powi(years_until_college as i32);
        per_child.push(ChildCollegeCost {
            age,
            years_until_college,
            projected_cost,
        });
    }

    let total_projected_cost: f64 = per_child.iter().map(|c| c.projected_cost).sum();

    let saved = snapshot
        .goals
        .education
        .as_ref()
        .map(|goal| goal.saved.max(0.0))
        .unwrap_or(0.0);
    let youngest_horizon_years = per_child
        .iter()
        .map(|c| c.years_until_college)
        .max()
        .unwrap_or(0);
    let projected_savings = saved
        * (1.0 + constants::EDUCATION_SAVINGS_GROWTH).powi(youngest_horizon_years as i32);

    let shortfall = (total_projected_cost - projected_savings).max(0.0);
    let required = required_monthly_contribution(
        saved,
        total_projected_cost,
        youngest_horizon_years as i64 * 12,
        constants::EDUCATION_SAVINGS_GROWTH,
    );

    Some(CollegeOutlook {
        per_child,
        total_projected_cost,
        projected_savings,
        shortfall,
        required_monthly_contribution: required,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EducationGoal;
    use crate::core::test_support::{bare_snapshot, sample_snapshot};

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn no_dependents_means_no_outlook() {
        assert!(project(&bare_snapshot()).is_none());
    }

    #[test]
    fn per_child_costs_compound_to_each_start_date() {
        let outlook = project(&sample_snapshot()).expect("dependents present");
        assert_eq!(outlook.per_child.len(), 2);
        // Sample children are 6 and 9: 12 and 9 years out.
        let expected_first = constants::COLLEGE_FOUR_YEAR_COST * 1.05_f64.powi(12);
        let expected_second = constants::COLLEGE_FOUR_YEAR_COST * 1.05_f64.powi(9);
        assert_close(outlook.per_child[0].projected_cost, expected_first, 1e-6);
        assert_close(outlook.per_child[1].projected_cost, expected_second, 1e-6);
        assert_close(
            outlook.total_projected_cost,
            expected_first + expected_second,
            1e-6,
        );
    }

    #[test]
    fn unrecorded_children_are_treated_as_newborns() {
        let mut snapshot = bare_snapshot();
        snapshot.dependents = 2;
        snapshot.child_ages = vec![10];
        let outlook = project(&snapshot).expect("dependents present");
        assert_eq!(outlook.per_child[0].years_until_college, 8);
        assert_eq!(outlook.per_child[1].age, 0);
        assert_eq!(outlook.per_child[1].years_until_college, 18);
    }

    #[test]
    fn adult_dependents_cost_the_unadjusted_base() {
        let mut snapshot = bare_snapshot();
        snapshot.dependents = 1;
        snapshot.child_ages = vec![19];
        let outlook = project(&snapshot).expect("dependents present");
        assert_eq!(outlook.per_child[0].years_until_college, 0);
        assert_close(
            outlook.per_child[0].projected_cost,
            constants::COLLEGE_FOUR_YEAR_COST,
            1e-9,
        );
    }

    #[test]
    fn existing_savings_grow_to_the_longest_horizon() {
        let mut snapshot = bare_snapshot();
        snapshot.dependents = 1;
        snapshot.child_ages = vec![8];
        snapshot.goals.education = Some(EducationGoal {
            target: 0.0,
            saved: 20_000.0,
            months_remaining: 120,
        });
        let outlook = project(&snapshot).expect("dependents present");
        assert_close(outlook.projected_savings, 20_000.0 * 1.07_f64.powi(10), 1e-6);
        assert_close(
            outlook.shortfall,
            (outlook.total_projected_cost - outlook.projected_savings).max(0.0),
            1e-9,
        );
        assert!(outlook.required_monthly_contribution > 0.0);
    }

    #[test]
    fn overfunded_plans_report_no_shortfall() {
        let mut snapshot = bare_snapshot();
        snapshot.dependents = 1;
        snapshot.child_ages = vec![17];
        snapshot.goals.education = Some(EducationGoal {
            target: 0.0,
            saved: 1_000_000.0,
            months_remaining: 12,
        });
        let outlook = project(&snapshot).expect("dependents present");
        assert_eq!(outlook.shortfall, 0.0);
        assert_eq!(outlook.required_monthly_contribution, 0.0);
    }
}
