//! Retirement projection: a deterministic shortfall path against the 4%
//! rule, a simplified Social Security benefit estimate, and a seeded
//! Monte Carlo over annual market returns.

use super::constants;
use super::goals::required_monthly_contribution;
use super::sim::{Rng, derive_seed, percentile};
use super::types::{
    AggregateMetrics, HouseholdSnapshot, ProjectionPoint, RetirementOutlook, RetirementSimulation,
};

/// Full retirement age under the simplified birth-year rule. The snapshot
/// has no birth date, so the birth year is derived from the plan year.
fn full_retirement_age(current_age: u32) -> u32 {
    let birth_year = constants::PLAN_YEAR.saturating_sub(current_age);
    if birth_year >= 1960 { 67 } else { 66 }
}

/// Simplified Primary Insurance Amount: bend-point marginal rates over
/// average indexed monthly earnings, capped, then adjusted for early or
/// late claiming. Returns an annual benefit in today's dollars.
pub fn estimate_social_security(annual_income: f64, claim_age: u32, current_age: u32) -> f64 {
    let income = annual_income.max(0.0).min(constants::SS_WAGE_BASE);
    if income <= 0.0 {
        return 0.0;
    }

    let aime = income / 12.0;
    let mut pia = 0.90 * aime.min(constants::SS_BEND_POINT_1);
    if aime > constants::SS_BEND_POINT_1 {
        pia += 0.32
            * (aime.min(constants::SS_BEND_POINT_2) - constants::SS_BEND_POINT_1);
    }
    if aime > constants::SS_BEND_POINT_2 {
        pia += 0.15 * (aime - constants::SS_BEND_POINT_2);
    }
    pia = pia.min(constants::SS_MAX_MONTHLY_BENEFIT);

    let claim = claim_age.clamp(
        constants::SS_EARLIEST_CLAIM_AGE,
        constants::SS_LATEST_CLAIM_AGE,
    );
    let fra = full_retirement_age(current_age);
    let adjusted = if claim < fra {
        pia * (1.0 - constants::SS_EARLY_CLAIM_PENALTY * (fra - claim) as f64)
    } else {
        pia * (1.0 + constants::SS_LATE_CLAIM_BONUS * (claim - fra) as f64)
    };

    adjusted.max(0.0) * 12.0
}

/// Recurring monthly amount the household can direct at retirement. The
/// snapshot carries no explicit contribution field, so the surplus stands
/// in for it.
fn recurring_monthly_contribution(agg: &AggregateMetrics) -> f64 {
    agg.monthly_surplus.max(0.0)
}

pub fn project(snapshot: &HouseholdSnapshot, agg: &AggregateMetrics) -> RetirementOutlook {
    let assumptions = &snapshot.assumptions;
    let retirement_age = snapshot
        .goals
        .retirement_age
        .unwrap_or(constants::DEFAULT_RETIREMENT_AGE);
    let years = retirement_age.saturating_sub(snapshot.age);

    let desired_annual_income = snapshot
        .goals
        .retirement_income
        .unwrap_or(agg.annual_income * constants::INCOME_REPLACEMENT_RATIO);

    let inflation_growth = (1.0 + assumptions.inflation_rate.max(0.0)).powi(years as i32);
    let inflated_annual_income = desired_annual_income.max(0.0) * inflation_growth;

    let social_security_annual = estimate_social_security(
        agg.annual_income,
        assumptions.social_security_claim_age,
        snapshot.age,
    );
    let inflated_social_security = social_security_annual * inflation_growth;

    let income_needed_from_savings = (inflated_annual_income - inflated_social_security).max(0.0);
    let savings_target = income_needed_from_savings * constants::SAFE_WITHDRAWAL_MULTIPLE;

    let annual_return = assumptions.investment_return.max(0.0);
    let balance = snapshot.accounts.retirement();
    let mut projected_balance = balance * (1.0 + annual_return).powi(years as i32);

    // Contributions grow with salary; each year's contribution then
    // compounds to the retirement date.
    let annual_contribution = recurring_monthly_contribution(agg) * 12.0;
    let salary_growth = assumptions.salary_growth_rate.max(0.0);
    for year in 0..years {
        let contributed = annual_contribution * (1.0 + salary_growth).powi(year as i32);
        let years_growing = years - year - 1;
        projected_balance += contributed * (1.0 + annual_return).powi(years_growing as i32);
    }

    let gap = (savings_target - projected_balance).max(0.0);
    let required = if gap > 0.0 {
        required_monthly_contribution(balance, savings_target, (years as i64) * 12, annual_return)
    } else {
        0.0
    };

    RetirementOutlook {
        retirement_age,
        years_to_retirement: years,
        desired_annual_income: desired_annual_income.max(0.0),
        inflated_annual_income,
        social_security_annual,
        income_needed_from_savings,
        savings_target,
        projected_balance,
        gap,
        required_monthly_contribution: required,
        on_track: gap <= 0.0,
    }
}

/// 1000 independent paths compounding the retirement balance with
/// normally distributed annual returns plus a fixed annual contribution.
/// The fixed-rate chart series is produced separately and must not be
/// read as percentiles of the random paths.
pub fn simulate(snapshot: &HouseholdSnapshot, agg: &AggregateMetrics) -> RetirementSimulation {
    let retirement_age = snapshot
        .goals
        .retirement_age
        .unwrap_or(constants::DEFAULT_RETIREMENT_AGE);
    let years = retirement_age.saturating_sub(snapshot.age);
    let balance = snapshot.accounts.retirement();
    let annual_contribution = recurring_monthly_contribution(agg) * 12.0;

    let target = agg.annual_income
        * constants::SIMULATION_REPLACEMENT_RATIO
        * constants::SAFE_WITHDRAWAL_MULTIPLE;

    let paths = constants::SIMULATION_PATHS;
    let mut terminals = Vec::with_capacity(paths as usize);
    let mut successes = 0_u32;

    for path_id in 0..paths {
        let mut rng = Rng::new(derive_seed(snapshot.assumptions.seed, path_id));
        let mut value = balance;
        for _ in 0..years {
            let annual_return = rng.normal(
                constants::SIMULATED_RETURN_MEAN,
                constants::SIMULATED_RETURN_STDEV,
            );
            value = (value * (1.0 + annual_return) + annual_contribution).max(0.0);
        }
        if value >= target {
            successes += 1;
        }
        terminals.push(value);
    }

    let percentile10 = percentile(&mut terminals, 10.0);
    let median = percentile(&mut terminals, 50.0);
    let percentile90 = percentile(&mut terminals, 90.0);

    RetirementSimulation {
        success_rate: successes as f64 / paths as f64 * 100.0,
        percentile10,
        median,
        percentile90,
        target,
        chart: fixed_rate_chart(snapshot.age, years, balance, annual_contribution),
    }
}

fn fixed_rate_chart(
    current_age: u32,
    years: u32,
    balance: f64,
    annual_contribution: f64,
) -> Vec<ProjectionPoint> {
    let mut conservative = balance;
    let mut expected = balance;
    let mut optimistic = balance;

    let mut chart = Vec::with_capacity(years as usize + 1);
    chart.push(ProjectionPoint {
        age: current_age,
        conservative,
        expected,
        optimistic,
    });

    for year in 1..=years {
        conservative = conservative * (1.0 + constants::CHART_CONSERVATIVE_RETURN)
            + annual_contribution;
        expected = expected * (1.0 + constants::CHART_EXPECTED_RETURN) + annual_contribution;
        optimistic = optimistic * (1.0 + constants::CHART_OPTIMISTIC_RETURN) + annual_contribution;
        chart.push(ProjectionPoint {
            age: current_age + year,
            conservative,
            expected,
            optimistic,
        });
    }

    chart
}
