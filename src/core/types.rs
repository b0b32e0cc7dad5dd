use serde::{Deserialize, Serialize};

use super::constants;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilingStatus {
    Single,
    #[serde(alias = "joint", alias = "marriedJoint", alias = "married_joint")]
    MarriedJoint,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Accounts {
    pub checking: f64,
    pub savings: f64,
    pub traditional_retirement: f64,
    pub roth_retirement: f64,
    pub brokerage: f64,
    pub home_value: f64,
    pub other_assets: f64,
}

impl Accounts {
    pub fn total(&self) -> f64 {
        self.checking
            + self.savings
            + self.traditional_retirement
            + self.roth_retirement
            + self.brokerage
            + self.home_value
            + self.other_assets
    }

    pub fn liquid(&self) -> f64 {
        self.checking + self.savings
    }

    pub fn retirement(&self) -> f64 {
        self.traditional_retirement + self.roth_retirement
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Liabilities {
    pub mortgage: f64,
    pub student_loans: f64,
    pub auto_loans: f64,
    pub credit_cards: f64,
    pub other_debts: f64,
}

impl Liabilities {
    pub fn total(&self) -> f64 {
        self.mortgage + self.student_loans + self.auto_loans + self.credit_cards + self.other_debts
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MonthlyExpenses {
    pub housing: f64,
    pub transportation: f64,
    pub food: f64,
    pub healthcare: f64,
    pub insurance: f64,
    pub entertainment: f64,
    pub other: f64,
}

impl MonthlyExpenses {
    pub fn total(&self) -> f64 {
        self.housing
            + self.transportation
            + self.food
            + self.healthcare
            + self.insurance
            + self.entertainment
            + self.other
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Protection {
    pub life_insurance_coverage: f64,
    pub has_disability_insurance: bool,
    pub has_umbrella_policy: bool,
    pub has_estate_plan: bool,
}

/// A savings goal with a fixed target and a deadline expressed in months
/// from the snapshot date.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub target: f64,
    pub months_remaining: u32,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationGoal {
    pub target: f64,
    #[serde(default)]
    pub saved: f64,
    pub months_remaining: u32,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MajorPurchase {
    pub label: String,
    pub amount: f64,
    pub months_remaining: u32,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HouseholdGoals {
    pub retirement_age: Option<u32>,
    pub retirement_income: Option<f64>,
    pub emergency_fund_months: Option<f64>,
    pub down_payment: Option<SavingsGoal>,
    pub education: Option<EducationGoal>,
    pub debt_free_months: Option<u32>,
    pub net_worth_target: Option<SavingsGoal>,
    pub annual_savings_target: Option<f64>,
    pub major_purchase: Option<MajorPurchase>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtAccount {
    pub name: String,
    pub balance: f64,
    /// Annual rate as a fraction, e.g. 0.1899 for 18.99% APR.
    pub apr: f64,
    pub minimum_payment: f64,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Allocation {
    pub stocks: f64,
    pub bonds: f64,
    pub cash: f64,
    pub other: f64,
    /// Weighted average fund expense ratio in percent.
    pub expense_ratio: f64,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Assumptions {
    pub inflation_rate: f64,
    pub investment_return: f64,
    pub salary_growth_rate: f64,
    pub social_security_claim_age: u32,
    pub seed: u64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            inflation_rate: constants::DEFAULT_INFLATION_RATE,
            investment_return: constants::DEFAULT_INVESTMENT_RETURN,
            salary_growth_rate: constants::DEFAULT_SALARY_GROWTH_RATE,
            social_security_claim_age: constants::DEFAULT_SS_CLAIM_AGE,
            seed: constants::DEFAULT_SEED,
        }
    }
}

/// One immutable household snapshot. The engine never mutates it and keeps
/// no state between calls; identical snapshots (seed included) produce
/// identical analyses.
#[derive(Clone, Debug)]
pub struct HouseholdSnapshot {
    pub age: u32,
    pub dependents: u32,
    /// Recorded ages for dependents; may be shorter than `dependents`, in
    /// which case the unrecorded children are treated as newborns.
    pub child_ages: Vec<u32>,
    pub annual_income: f64,
    pub spouse_annual_income: f64,
    pub accounts: Accounts,
    pub liabilities: Liabilities,
    pub expenses: MonthlyExpenses,
    pub protection: Protection,
    pub state: String,
    pub filing_status: FilingStatus,
    pub goals: HouseholdGoals,
    pub debts: Vec<DebtAccount>,
    pub allocation: Option<Allocation>,
    pub assumptions: Assumptions,
}

impl HouseholdSnapshot {
    pub fn total_income(&self) -> f64 {
        self.annual_income.max(0.0) + self.spouse_annual_income.max(0.0)
    }
}

// ---------------------------------------------------------------------------
// Outputs. Everything below is derived wholesale from a snapshot.
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxEstimate {
    pub state_tax: f64,
    pub federal_tax: f64,
    pub total_tax: f64,
    /// Total tax over gross income, in percent. 0 when income is 0.
    pub effective_rate: f64,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateMetrics {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    pub annual_income: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub annual_expenses: f64,
    pub monthly_surplus: f64,
    pub debt_to_income: f64,
    pub savings_rate: f64,
    pub emergency_fund_months: f64,
    pub life_insurance_gap: f64,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthBreakdown {
    pub protection: f64,
    pub savings: f64,
    pub emergency_fund: f64,
    pub debt_load: f64,
    pub wealth: f64,
}

impl HealthBreakdown {
    pub fn total(&self) -> f64 {
        self.protection + self.savings + self.emergency_fund + self.debt_load + self.wealth
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPlan {
    pub name: String,
    pub current: f64,
    pub target: f64,
    pub months_remaining: u32,
    pub progress_pct: f64,
    pub monthly_contribution: f64,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementOutlook {
    pub retirement_age: u32,
    pub years_to_retirement: u32,
    pub desired_annual_income: f64,
    pub inflated_annual_income: f64,
    pub social_security_annual: f64,
    pub income_needed_from_savings: f64,
    pub savings_target: f64,
    pub projected_balance: f64,
    pub gap: f64,
    pub required_monthly_contribution: f64,
    pub on_track: bool,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub age: u32,
    pub conservative: f64,
    pub expected: f64,
    pub optimistic: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementSimulation {
    /// Fraction of simulated paths reaching the target, in percent.
    pub success_rate: f64,
    pub percentile10: f64,
    pub median: f64,
    pub percentile90: f64,
    pub target: f64,
    /// Fixed-rate chart series (4/8/12%), independent of the random paths.
    pub chart: Vec<ProjectionPoint>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffMethod {
    Avalanche,
    Snowball,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtMilestone {
    pub name: String,
    pub month: u32,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayoff {
    pub method: PayoffMethod,
    pub months: u32,
    pub total_interest: f64,
    pub payoff_order: Vec<DebtMilestone>,
    /// False when the monthly budget cannot outpace interest accrual and
    /// the balance keeps growing.
    pub converged: bool,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtComparison {
    pub avalanche: DebtPayoff,
    pub snowball: DebtPayoff,
    pub recommended: PayoffMethod,
    pub interest_savings: f64,
    pub months_savings: i64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReview {
    pub risk_score: f64,
    pub expected_return: f64,
    pub current_stock_pct: f64,
    pub target_stock_pct: f64,
    pub rebalance_needed: bool,
    pub warnings: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildCollegeCost {
    pub age: u32,
    pub years_until_college: u32,
    pub projected_cost: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeOutlook {
    pub per_child: Vec<ChildCollegeCost>,
    pub total_projected_cost: f64,
    pub projected_savings: f64,
    pub shortfall: f64,
    pub required_monthly_contribution: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Advanced,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxRecommendation {
    pub category: String,
    pub description: String,
    pub estimated_savings: f64,
    pub difficulty: Difficulty,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxSavingsReport {
    pub recommendations: Vec<TaxRecommendation>,
    pub total_potential_savings: f64,
    pub current_tax_bill: f64,
    pub optimized_tax_bill: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub priority: Priority,
    pub category: String,
    pub action: String,
    pub impact: String,
    pub deadline: String,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskStatus {
    Excellent,
    Good,
    Warning,
    Critical,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskCategory {
    pub name: String,
    /// 0–100; higher means more exposed.
    pub score: f64,
    pub status: RiskStatus,
    pub message: String,
    pub recommendations: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub categories: Vec<RiskCategory>,
    pub overall_score: f64,
    pub critical_gaps: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    #[serde(flatten)]
    pub aggregates: AggregateMetrics,
    pub taxes: TaxEstimate,
    pub health_score: f64,
    pub health_breakdown: HealthBreakdown,
    pub goal_plans: Vec<GoalPlan>,
    pub retirement: RetirementOutlook,
    pub monte_carlo: RetirementSimulation,
    pub portfolio: Option<PortfolioReview>,
    pub debt_plan: Option<DebtComparison>,
    pub college: Option<CollegeOutlook>,
    pub tax_moves: TaxSavingsReport,
    pub action_items: Vec<ActionItem>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialAnalysis {
    pub metrics: DerivedMetrics,
    pub risk: RiskAssessment,
}
