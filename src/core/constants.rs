//! Planning constants for the 2024 tax year. Everything here changes on a
//! yearly cadence; algorithm code must read these rather than embed its own
//! copies. Tax bracket tables live next to their evaluator in `tax.rs`.

/// Tax year the tables and limits below were taken from.
pub const PLAN_YEAR: u32 = 2024;

// Default snapshot assumptions.
pub const DEFAULT_INFLATION_RATE: f64 = 0.03;
pub const DEFAULT_INVESTMENT_RETURN: f64 = 0.07;
pub const DEFAULT_SALARY_GROWTH_RATE: f64 = 0.03;
pub const DEFAULT_SS_CLAIM_AGE: u32 = 67;
pub const DEFAULT_SEED: u64 = 42;

// Contribution limits.
pub const EMPLOYEE_DEFERRAL_LIMIT: f64 = 23_000.0;
pub const IRA_CONTRIBUTION_LIMIT: f64 = 7_000.0;
pub const HSA_LIMIT_SINGLE: f64 = 4_150.0;
pub const HSA_LIMIT_FAMILY: f64 = 8_300.0;
pub const CAPITAL_LOSS_DEDUCTION_LIMIT: f64 = 3_000.0;

// Social Security (simplified PIA model).
pub const SS_BEND_POINT_1: f64 = 1_174.0;
pub const SS_BEND_POINT_2: f64 = 7_078.0;
pub const SS_WAGE_BASE: f64 = 168_600.0;
pub const SS_MAX_MONTHLY_BENEFIT: f64 = 3_822.0;
pub const SS_EARLY_CLAIM_PENALTY: f64 = 0.07;
pub const SS_LATE_CLAIM_BONUS: f64 = 0.08;
pub const SS_EARLIEST_CLAIM_AGE: u32 = 62;
pub const SS_LATEST_CLAIM_AGE: u32 = 70;

// Retirement model.
pub const SAFE_WITHDRAWAL_MULTIPLE: f64 = 25.0;
pub const INCOME_REPLACEMENT_RATIO: f64 = 0.80;
pub const SIMULATION_REPLACEMENT_RATIO: f64 = 0.70;
pub const DEFAULT_RETIREMENT_AGE: u32 = 67;
pub const SIMULATION_PATHS: u32 = 1_000;
pub const SIMULATED_RETURN_MEAN: f64 = 0.08;
pub const SIMULATED_RETURN_STDEV: f64 = 0.12;
pub const CHART_CONSERVATIVE_RETURN: f64 = 0.04;
pub const CHART_EXPECTED_RETURN: f64 = 0.08;
pub const CHART_OPTIMISTIC_RETURN: f64 = 0.12;

// Debt simulation.
pub const DEBT_MONTH_CAP: u32 = 360;
pub const HIGH_APR_FLOOR: f64 = 0.15;

// College planning.
pub const COLLEGE_FOUR_YEAR_COST: f64 = 112_000.0;
pub const COLLEGE_START_AGE: u32 = 18;
pub const EDUCATION_INFLATION_RATE: f64 = 0.05;
pub const EDUCATION_SAVINGS_GROWTH: f64 = 0.07;

// Coverage and goal heuristics.
pub const LIFE_COVERAGE_INCOME_MULTIPLE: f64 = 10.0;
pub const SHORT_TERM_SAVINGS_RATE: f64 = 0.02;
pub const EMERGENCY_FUND_BUILD_MONTHS: u32 = 24;
pub const UMBRELLA_NET_WORTH_WARNING: f64 = 500_000.0;
pub const UMBRELLA_NET_WORTH_CRITICAL: f64 = 1_000_000.0;

// Action-item thresholds.
pub const RETIREMENT_GAP_ACTION_FLOOR: f64 = 100_000.0;
pub const ACTION_ITEM_CAP: usize = 8;

// Tax optimizer.
pub const HSA_INCOME_FLOOR: f64 = 50_000.0;
pub const BACKDOOR_ROTH_INCOME_FLOOR: f64 = 230_000.0;
pub const CHARITABLE_BUNCHING_INCOME_FLOOR: f64 = 150_000.0;
pub const LOSS_HARVEST_YIELD: f64 = 0.02;
pub const CHARITABLE_BUNCHING_SHARE: f64 = 0.02;
pub const STATE_529_DEDUCTION: f64 = 10_000.0;
/// States whose 529 plans offer a state income-tax deduction, among the
/// jurisdictions the tax tables cover.
pub const STATE_529_DEDUCTION_STATES: &[&str] = &["NY", "VA", "CO", "IL", "GA", "IN", "MI", "PA", "UT"];
