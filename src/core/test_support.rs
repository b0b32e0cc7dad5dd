//! Shared snapshot builders for the core test suites.

use super::types::{
    Accounts, Allocation, Assumptions, FilingStatus, HouseholdGoals, HouseholdSnapshot,
    Liabilities, MonthlyExpenses, Protection, SavingsGoal,
};

/// Everything zeroed: the degenerate snapshot the guards must survive.
pub fn bare_snapshot() -> HouseholdSnapshot {
    HouseholdSnapshot {
        age: 30,
        dependents: 0,
        child_ages: Vec::new(),
        annual_income: 0.0,
        spouse_annual_income: 0.0,
        accounts: Accounts::default(),
        liabilities: Liabilities::default(),
        expenses: MonthlyExpenses::default(),
        protection: Protection::default(),
        state: "TX".to_string(),
        filing_status: FilingStatus::Single,
        goals: HouseholdGoals::default(),
        debts: Vec::new(),
        allocation: None,
        assumptions: Assumptions::default(),
    }
}

/// A mid-career two-child household with a mortgage, used across suites so
/// hand-computed totals stay in one place.
pub fn sample_snapshot() -> HouseholdSnapshot {
    HouseholdSnapshot {
        age: 38,
        dependents: 2,
        child_ages: vec![6, 9],
        annual_income: 128_000.0,
        spouse_annual_income: 24_000.0,
        accounts: Accounts {
            checking: 8_000.0,
            savings: 30_000.0,
            traditional_retirement: 120_000.0,
            roth_retirement: 40_000.0,
            brokerage: 55_000.0,
            home_value: 420_000.0,
            other_assets: 5_000.0,
        },
        liabilities: Liabilities {
            mortgage: 310_000.0,
            student_loans: 22_000.0,
            auto_loans: 9_000.0,
            credit_cards: 6_000.0,
            other_debts: 0.0,
        },
        expenses: MonthlyExpenses {
            housing: 2_600.0,
            transportation: 600.0,
            food: 900.0,
            healthcare: 350.0,
            insurance: 250.0,
            entertainment: 400.0,
            other: 300.0,
        },
        protection: Protection {
            life_insurance_coverage: 250_000.0,
            has_disability_insurance: false,
            has_umbrella_policy: false,
            has_estate_plan: false,
        },
        state: "CA".to_string(),
        filing_status: FilingStatus::MarriedJoint,
        goals: HouseholdGoals {
            retirement_age: Some(65),
            retirement_income: Some(100_000.0),
            emergency_fund_months: Some(6.0),
            down_payment: Some(SavingsGoal {
                target: 60_000.0,
                months_remaining: 36,
            }),
            ..HouseholdGoals::default()
        },
        debts: Vec::new(),
        allocation: Some(Allocation {
            stocks: 60.0,
            bonds: 30.0,
            cash: 5.0,
            other: 5.0,
            expense_ratio: 0.4,
        }),
        assumptions: Assumptions::default(),
    }
}
