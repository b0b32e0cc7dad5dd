//! Progressive tax estimation over versioned 2024 bracket tables.
//!
//! Each table is an ordered list of (upper bound, cumulative tax to that
//! bound, marginal rate) triples plus an open top rate. The estimate is a
//! planning approximation: state tables are single-filer and applied to
//! gross income, and jurisdictions without an encoded table fall back to a
//! flat default.

use super::types::{FilingStatus, TaxEstimate};

#[derive(Clone, Copy, Debug)]
pub struct Bracket {
    pub upper: f64,
    pub tax_to_upper: f64,
    pub rate: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct BracketTable {
    pub brackets: &'static [Bracket],
    pub top_rate: f64,
}

const fn bracket(upper: f64, tax_to_upper: f64, rate: f64) -> Bracket {
    Bracket {
        upper,
        tax_to_upper,
        rate,
    }
}

pub const FEDERAL_STANDARD_DEDUCTION_SINGLE: f64 = 14_600.0;
pub const FEDERAL_STANDARD_DEDUCTION_JOINT: f64 = 29_200.0;

pub const FEDERAL_SINGLE: BracketTable = BracketTable {
    brackets: &[
        bracket(11_600.0, 1_160.0, 0.10),
        bracket(47_150.0, 5_426.0, 0.12),
        bracket(100_525.0, 17_168.50, 0.22),
        bracket(191_950.0, 39_110.50, 0.24),
        bracket(243_725.0, 55_678.50, 0.32),
        bracket(609_350.0, 183_647.25, 0.35),
    ],
    top_rate: 0.37,
};

pub const FEDERAL_JOINT: BracketTable = BracketTable {
    brackets: &[
        bracket(23_200.0, 2_320.0, 0.10),
        bracket(94_300.0, 10_852.0, 0.12),
        bracket(201_050.0, 34_337.0, 0.22),
        bracket(383_900.0, 78_221.0, 0.24),
        bracket(487_450.0, 111_357.0, 0.32),
        bracket(731_200.0, 196_669.50, 0.35),
    ],
    top_rate: 0.37,
};

const CALIFORNIA: BracketTable = BracketTable {
    brackets: &[
        bracket(10_412.0, 104.12, 0.01),
        bracket(24_684.0, 389.56, 0.02),
        bracket(38_959.0, 960.56, 0.04),
        bracket(54_081.0, 1_867.88, 0.06),
        bracket(68_350.0, 3_009.40, 0.08),
        bracket(349_137.0, 29_122.591, 0.093),
        bracket(418_961.0, 36_314.463, 0.103),
        bracket(698_271.0, 67_876.493, 0.113),
    ],
    top_rate: 0.123,
};

const NEW_YORK: BracketTable = BracketTable {
    brackets: &[
        bracket(8_500.0, 340.0, 0.04),
        bracket(11_700.0, 484.0, 0.045),
        bracket(13_900.0, 599.50, 0.0525),
        bracket(80_650.0, 4_270.75, 0.055),
        bracket(215_400.0, 12_355.75, 0.06),
        bracket(1_077_550.0, 71_413.025, 0.0685),
        bracket(5_000_000.0, 449_929.45, 0.0965),
        bracket(25_000_000.0, 2_509_929.45, 0.103),
    ],
    top_rate: 0.109,
};

const NEW_JERSEY: BracketTable = BracketTable {
    brackets: &[
        bracket(20_000.0, 280.0, 0.014),
        bracket(35_000.0, 542.50, 0.0175),
        bracket(40_000.0, 717.50, 0.035),
        bracket(75_000.0, 2_651.25, 0.05525),
        bracket(500_000.0, 29_723.75, 0.0637),
        bracket(1_000_000.0, 74_573.75, 0.0897),
    ],
    top_rate: 0.1075,
};

const VIRGINIA: BracketTable = BracketTable {
    brackets: &[
        bracket(3_000.0, 60.0, 0.02),
        bracket(5_000.0, 120.0, 0.03),
        bracket(17_000.0, 720.0, 0.05),
    ],
    top_rate: 0.0575,
};

const NO_INCOME_TAX_STATES: &[&str] = &["AK", "FL", "NV", "NH", "SD", "TN", "TX", "WA", "WY"];

const FLAT_RATE_STATES: &[(&str, f64)] = &[
    ("CO", 0.0440),
    ("GA", 0.0549),
    ("IL", 0.0495),
    ("IN", 0.0305),
    ("KY", 0.0400),
    ("MA", 0.0500),
    ("MI", 0.0425),
    ("NC", 0.0450),
    ("PA", 0.0307),
    ("UT", 0.0465),
];

/// Fallback for jurisdictions without an encoded table.
const DEFAULT_STATE_FLAT_RATE: f64 = 0.05;

#[derive(Clone, Copy, Debug)]
enum StateSchedule {
    Exempt,
    Flat(f64),
    Graduated(&'static BracketTable),
}

fn state_schedule(code: &str) -> StateSchedule {
    let code = code.trim().to_ascii_uppercase();
    if NO_INCOME_TAX_STATES.contains(&code.as_str()) {
        return StateSchedule::Exempt;
    }
    if let Some((_, rate)) = FLAT_RATE_STATES.iter().find(|(s, _)| *s == code) {
        return StateSchedule::Flat(*rate);
    }
    match code.as_str() {
        "CA" => StateSchedule::Graduated(&CALIFORNIA),
        "NY" => StateSchedule::Graduated(&NEW_YORK),
        "NJ" => StateSchedule::Graduated(&NEW_JERSEY),
        "VA" => StateSchedule::Graduated(&VIRGINIA),
        _ => StateSchedule::Flat(DEFAULT_STATE_FLAT_RATE),
    }
}

/// Standard progressive-bracket evaluation: cumulative tax through every
/// filled bracket, then the marginal rate on the remainder.
fn bracket_tax(taxable: f64, table: &BracketTable) -> f64 {
    let income = taxable.max(0.0);
    let mut lower = 0.0;
    let mut tax_below = 0.0;
    for b in table.brackets {
        if income <= b.upper {
            return tax_below + (income - lower) * b.rate;
        }
        tax_below = b.tax_to_upper;
        lower = b.upper;
    }
    tax_below + (income - lower) * table.top_rate
}

pub fn federal_tax(gross_income: f64, filing: FilingStatus) -> f64 {
    let (deduction, table) = match filing {
        FilingStatus::Single => (FEDERAL_STANDARD_DEDUCTION_SINGLE, &FEDERAL_SINGLE),
        FilingStatus::MarriedJoint => (FEDERAL_STANDARD_DEDUCTION_JOINT, &FEDERAL_JOINT),
    };
    bracket_tax((gross_income.max(0.0) - deduction).max(0.0), table)
}

pub fn state_tax(gross_income: f64, state: &str) -> f64 {
    let income = gross_income.max(0.0);
    match state_schedule(state) {
        StateSchedule::Exempt => 0.0,
        StateSchedule::Flat(rate) => income * rate,
        StateSchedule::Graduated(table) => bracket_tax(income, table),
    }
}

pub fn estimate_taxes(gross_income: f64, state: &str, filing: FilingStatus) -> TaxEstimate {
    let income = gross_income.max(0.0);
    let federal = federal_tax(income, filing);
    let state_amount = state_tax(income, state);
    let total = federal + state_amount;
    let effective_rate = if income > 0.0 {
        total / income * 100.0
    } else {
        0.0
    };

    TaxEstimate {
        state_tax: state_amount,
        federal_tax: federal,
        total_tax: total,
        effective_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_table_consistent(table: &BracketTable) {
        let mut lower = 0.0;
        let mut accumulated = 0.0;
        for b in table.brackets {
            assert!(b.upper > lower, "bracket bounds must ascend");
            accumulated += (b.upper - lower) * b.rate;
            assert!(
                (accumulated - b.tax_to_upper).abs() <= 1e-2,
                "cumulative column drifted at upper bound {}: expected {accumulated}, table says {}",
                b.upper,
                b.tax_to_upper
            );
            lower = b.upper;
        }
    }

    #[test]
    fn all_bracket_tables_are_internally_consistent() {
        for table in [
            &FEDERAL_SINGLE,
            &FEDERAL_JOINT,
            &CALIFORNIA,
            &NEW_YORK,
            &NEW_JERSEY,
            &VIRGINIA,
        ] {
            assert_table_consistent(table);
        }
    }

    #[test]
    fn joint_federal_tax_matches_hand_computation() {
        // $150,000 gross, $29,200 standard deduction -> $120,800 taxable.
        // 23,200 * 0.10 + 71,100 * 0.12 + 26,500 * 0.22 = 16,682.
        assert_approx(federal_tax(150_000.0, FilingStatus::MarriedJoint), 16_682.0);
    }

    #[test]
    fn single_federal_tax_matches_hand_computation() {
        // $60,000 gross, $14,600 deduction -> $45,400 taxable.
        // 11,600 * 0.10 + 33,800 * 0.12 = 5,216.
        assert_approx(federal_tax(60_000.0, FilingStatus::Single), 5_216.0);
    }

    #[test]
    fn income_below_the_standard_deduction_owes_no_federal_tax() {
        assert_approx(federal_tax(12_000.0, FilingStatus::Single), 0.0);
        assert_approx(federal_tax(29_200.0, FilingStatus::MarriedJoint), 0.0);
    }

    #[test]
    fn california_tax_matches_hand_computation() {
        // 3,009.40 through the 8% bracket + (100,000 - 68,350) * 9.3%.
        assert_approx(state_tax(100_000.0, "CA"), 3_009.40 + 31_650.0 * 0.093);
    }

    #[test]
    fn virginia_top_bracket_matches_hand_computation() {
        // 720 through 17,000 + 33,000 * 5.75% = 2,617.50.
        assert_approx(state_tax(50_000.0, "VA"), 2_617.50);
    }

    #[test]
    fn no_income_tax_states_take_the_zero_fast_path() {
        for code in ["TX", "FL", "wa", " nv "] {
            assert_approx(state_tax(250_000.0, code), 0.0);
        }
    }

    #[test]
    fn flat_states_apply_a_single_rate() {
        assert_approx(state_tax(80_000.0, "PA"), 80_000.0 * 0.0307);
        assert_approx(state_tax(80_000.0, "il"), 80_000.0 * 0.0495);
    }

    #[test]
    fn unknown_jurisdictions_fall_back_to_the_default_flat_rate() {
        assert_approx(state_tax(100_000.0, "ZZ"), 100_000.0 * DEFAULT_STATE_FLAT_RATE);
    }

    #[test]
    fn zero_income_yields_a_zero_estimate_with_zero_effective_rate() {
        let estimate = estimate_taxes(0.0, "CA", FilingStatus::Single);
        assert_approx(estimate.federal_tax, 0.0);
        assert_approx(estimate.state_tax, 0.0);
        assert_approx(estimate.total_tax, 0.0);
        assert_approx(estimate.effective_rate, 0.0);
    }

    #[test]
    fn negative_income_is_clamped_to_zero() {
        let estimate = estimate_taxes(-50_000.0, "NY", FilingStatus::Single);
        assert_approx(estimate.total_tax, 0.0);
        assert_approx(estimate.effective_rate, 0.0);
    }

    #[test]
    fn effective_rate_combines_both_levels() {
        let estimate = estimate_taxes(150_000.0, "TX", FilingStatus::MarriedJoint);
        assert_approx(estimate.total_tax, 16_682.0);
        assert_approx(estimate.effective_rate, 16_682.0 / 150_000.0 * 100.0);
    }

    proptest! {
        #[test]
        fn federal_tax_is_monotonic_in_income(lo in 0.0_f64..1_000_000.0, delta in 0.0_f64..500_000.0) {
            let low = federal_tax(lo, FilingStatus::Single);
            let high = federal_tax(lo + delta, FilingStatus::Single);
            prop_assert!(high >= low - 1e-9);
        }

        #[test]
        fn state_tax_is_monotonic_in_income(lo in 0.0_f64..1_000_000.0, delta in 0.0_f64..500_000.0) {
            for code in ["CA", "NY", "NJ", "VA", "PA", "TX", "ZZ"] {
                let low = state_tax(lo, code);
                let high = state_tax(lo + delta, code);
                prop_assert!(high >= low - 1e-9);
            }
        }

        #[test]
        fn marginal_rate_never_exceeds_the_top_rate(income in 0.0_f64..2_000_000.0) {
            let tax = federal_tax(income, FilingStatus::Single);
            prop_assert!(tax <= income * 0.37 + 1e-9);
        }
    }
}
