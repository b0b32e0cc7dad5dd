//! Eight-category household risk assessment.
//!
//! Every category reduces to a single ratio pushed through an ordered tier
//! table, evaluated top-down with the first match winning. Scores run
//! 0-100 where higher means more exposed; the overall score is the plain
//! mean across categories.

use super::constants;
use super::types::{AggregateMetrics, HouseholdSnapshot, RiskAssessment, RiskCategory, RiskStatus};

#[derive(Clone, Copy)]
struct Tier {
    min_ratio: f64,
    status: RiskStatus,
    score: f64,
}

const fn tier(min_ratio: f64, status: RiskStatus, score: f64) -> Tier {
    Tier {
        min_ratio,
        status,
        score,
    }
}

/// Coverage-style tiers: the ratio is "have over need", higher is better.
const COVERAGE_TIERS: &[Tier] = &[
    tier(1.0, RiskStatus::Excellent, 10.0),
    tier(0.7, RiskStatus::Good, 40.0),
    tier(0.3, RiskStatus::Warning, 70.0),
    tier(f64::NEG_INFINITY, RiskStatus::Critical, 95.0),
];

fn classify(ratio: f64, tiers: &[Tier]) -> (RiskStatus, f64) {
    for t in tiers {
        if ratio >= t.min_ratio {
            return (t.status, t.score);
        }
    }
    let last = tiers[tiers.len() - 1];
    (last.status, last.score)
}

pub fn assess(snapshot: &HouseholdSnapshot, agg: &AggregateMetrics) -> RiskAssessment {
    let categories = vec![
        life_insurance(snapshot, agg),
        disability(snapshot, agg),
        emergency_fund(agg),
        debt_level(agg),
        retirement_savings(snapshot, agg),
        estate_planning(snapshot, agg),
        liability_coverage(snapshot, agg),
        savings_rate(agg),
    ];

    let overall_score = if categories.is_empty() {
        0.0
    } else {
        categories.iter().map(|c| c.score).sum::<f64>() / categories.len() as f64
    };
    let critical_gaps = categories
        .iter()
        .filter(|c| c.status == RiskStatus::Critical)
        .map(|c| c.name.clone())
        .collect();

    RiskAssessment {
        categories,
        overall_score,
        critical_gaps,
    }
}

fn life_insurance(snapshot: &HouseholdSnapshot, agg: &AggregateMetrics) -> RiskCategory {
    let needed = agg.annual_income * constants::LIFE_COVERAGE_INCOME_MULTIPLE;
    let ratio = if needed > 0.0 {
        snapshot.protection.life_insurance_coverage / needed
    } else {
        1.0
    };
    let (status, score) = classify(ratio, COVERAGE_TIERS);

    let message = match status {
        RiskStatus::Excellent => "Life insurance coverage meets the income-replacement target.",
        RiskStatus::Good => "Life insurance coverage is close to the income-replacement target.",
        RiskStatus::Warning => "Life insurance covers well under half of the target.",
        RiskStatus::Critical => "Life insurance coverage is far below what survivors would need.",
    };
    let recommendations = match status {
        RiskStatus::Excellent => vec![],
        RiskStatus::Good => vec!["Review coverage after major life events.".to_string()],
        _ => vec![
            format!(
                "Increase term life coverage toward {:.0}x household income (about ${:.0}).",
                constants::LIFE_COVERAGE_INCOME_MULTIPLE,
                needed
            ),
            "Compare level-term quotes before adding permanent coverage.".to_string(),
        ],
    };

    RiskCategory {
        name: "life_insurance".to_string(),
        score,
        status,
        message: message.to_string(),
        recommendations,
    }
}

fn disability(snapshot: &HouseholdSnapshot, agg: &AggregateMetrics) -> RiskCategory {
    let (status, score, message) = if snapshot.protection.has_disability_insurance {
        (
            RiskStatus::Excellent,
            10.0,
            "Disability income coverage is in place.",
        )
    } else if agg.annual_income > 0.0 {
        (
            RiskStatus::Critical,
            90.0,
            "No disability coverage protects the household's earned income.",
        )
    } else {
        (
            RiskStatus::Good,
            30.0,
            "No earned income currently depends on disability coverage.",
        )
    };

    let recommendations = if status == RiskStatus::Critical {
        vec![
            "Add long-term disability insurance covering 60% of income.".to_string(),
            "Check whether an employer group policy is available first.".to_string(),
        ]
    } else {
        vec![]
    };

    RiskCategory {
        name: "disability".to_string(),
        score,
        status,
        message: message.to_string(),
        recommendations,
    }
}

fn emergency_fund(agg: &AggregateMetrics) -> RiskCategory {
    let ratio = agg.emergency_fund_months / 6.0;
    let (status, score) = classify(ratio, COVERAGE_TIERS);

    let message = format!(
        "Liquid reserves cover {:.1} months of expenses.",
        agg.emergency_fund_months
    );
    let recommendations = match status {
        RiskStatus::Excellent => vec![],
        _ => vec![
            "Build liquid savings toward six months of expenses.".to_string(),
            "Automate a monthly transfer into a high-yield savings account.".to_string(),
        ],
    };

    RiskCategory {
        name: "emergency_fund".to_string(),
        score,
        status,
        message,
        recommendations,
    }
}

/// Debt tiers read low-is-good, so they are expressed as maximum
/// debt-to-income multiples evaluated in ascending order.
fn debt_level(agg: &AggregateMetrics) -> RiskCategory {
    let dti = if agg.annual_income > 0.0 {
        agg.debt_to_income
    } else if agg.total_liabilities > 0.0 {
        f64::INFINITY
    } else {
        0.0
    };

    let (status, score) = if dti <= 1.0 {
        (RiskStatus::Excellent, 10.0)
    } else if dti <= 2.0 {
        (RiskStatus::Good, 40.0)
    } else if dti <= 3.5 {
        (RiskStatus::Warning, 70.0)
    } else {
        (RiskStatus::Critical, 95.0)
    };

    let message = if dti.is_finite() {
        format!("Total debt is {:.1}x annual household income.", dti)
    } else {
        "The household carries debt with no income against it.".to_string()
    };
    let recommendations = match status {
        RiskStatus::Excellent | RiskStatus::Good => vec![],
        _ => vec![
            "Pay down the highest-rate balances first.".to_string(),
            "Avoid taking on new consumer debt until the ratio improves.".to_string(),
        ],
    };

    RiskCategory {
        name: "debt_level".to_string(),
        score,
        status,
        message,
        recommendations,
    }
}

/// Age-banded savings target expressed as a multiple of income.
fn retirement_target_multiple(age: u32) -> f64 {
    if age < 30 {
        0.5
    } else if age < 40 {
        1.0
    } else if age < 50 {
        3.0
    } else if age < 60 {
        6.0
    } else {
        8.0
    }
}

fn retirement_savings(snapshot: &HouseholdSnapshot, agg: &AggregateMetrics) -> RiskCategory {
    let target = agg.annual_income * retirement_target_multiple(snapshot.age);
    let ratio = if target > 0.0 {
        snapshot.accounts.retirement() / target
    } else {
        1.0
    };
    let (status, score) = classify(ratio, COVERAGE_TIERS);

    let message = format!(
        "Retirement savings are {:.0}% of the age-{} benchmark.",
        (ratio * 100.0).min(999.0),
        snapshot.age
    );
    let recommendations = match status {
        RiskStatus::Excellent => vec![],
        RiskStatus::Good => vec!["Keep contributions at least level with salary growth.".to_string()],
        _ => vec![
            "Raise retirement contributions, capturing any employer match first.".to_string(),
            "Increase the deferral rate by one point each year.".to_string(),
        ],
    };

    RiskCategory {
        name: "retirement_savings".to_string(),
        score,
        status,
        message,
        recommendations,
    }
}

fn estate_planning(snapshot: &HouseholdSnapshot, agg: &AggregateMetrics) -> RiskCategory {
    let (status, score, message) = if snapshot.protection.has_estate_plan {
        (
            RiskStatus::Excellent,
            10.0,
            "Estate planning documents are in place.",
        )
    } else if snapshot.dependents > 0 || agg.net_worth > constants::UMBRELLA_NET_WORTH_WARNING {
        (
            RiskStatus::Critical,
            90.0,
            "No will or estate plan despite dependents or significant assets.",
        )
    } else {
        (
            RiskStatus::Warning,
            70.0,
            "No estate planning documents on file.",
        )
    };

    let recommendations = match status {
        RiskStatus::Excellent => vec![],
        _ => vec![
            "Draft a will and name guardians for any minor children.".to_string(),
            "Confirm beneficiary designations on retirement accounts.".to_string(),
        ],
    };

    RiskCategory {
        name: "estate_planning".to_string(),
        score,
        status,
        message: message.to_string(),
        recommendations,
    }
}

fn liability_coverage(snapshot: &HouseholdSnapshot, agg: &AggregateMetrics) -> RiskCategory {
    let (status, score, message) = if snapshot.protection.has_umbrella_policy {
        (
            RiskStatus::Excellent,
            10.0,
            "Umbrella liability coverage is in place.",
        )
    } else if agg.net_worth >= constants::UMBRELLA_NET_WORTH_CRITICAL {
        (
            RiskStatus::Critical,
            95.0,
            "Substantial net worth is exposed without umbrella coverage.",
        )
    } else if agg.net_worth >= constants::UMBRELLA_NET_WORTH_WARNING {
        (
            RiskStatus::Warning,
            70.0,
            "Net worth is large enough to warrant umbrella coverage.",
        )
    } else {
        (
            RiskStatus::Good,
            40.0,
            "Liability exposure is modest at the current net worth.",
        )
    };

    let recommendations = match status {
        RiskStatus::Excellent | RiskStatus::Good => vec![],
        _ => vec!["Add a $1M umbrella policy on top of home and auto liability.".to_string()],
    };

    RiskCategory {
        name: "liability_coverage".to_string(),
        score,
        status,
        message: message.to_string(),
        recommendations,
    }
}

fn savings_rate(agg: &AggregateMetrics) -> RiskCategory {
    let ratio = agg.savings_rate / 20.0;
    let (status, score) = classify(ratio, COVERAGE_TIERS);

    let message = format!(
        "The household saves {:.1}% of income.",
        agg.savings_rate
    );
    let recommendations = match status {
        RiskStatus::Excellent => vec![],
        RiskStatus::Good => vec!["Push the savings rate toward 20% of income.".to_string()],
        _ => vec![
            "Set a fixed automatic transfer on payday before spending.".to_string(),
            "Audit recurring expenses for cuts to fund savings.".to_string(),
        ],
    };

    RiskCategory {
        name: "savings_rate".to_string(),
        score,
        status,
        message,
        recommendations,
    }
}
