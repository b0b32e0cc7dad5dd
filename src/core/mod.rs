pub mod actions;
pub mod college;
pub mod constants;
pub mod debt;
mod engine;
pub mod goals;
pub mod metrics;
pub mod optimizer;
pub mod portfolio;
pub mod retirement;
pub mod risk;
pub mod sim;
pub mod tax;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use engine::analyze;
pub use types::{
    Accounts, ActionItem, AggregateMetrics, Allocation, Assumptions, ChildCollegeCost,
    CollegeOutlook, DebtAccount, DebtComparison, DebtMilestone, DebtPayoff, DerivedMetrics,
    Difficulty, EducationGoal, FilingStatus, FinancialAnalysis, GoalPlan, HealthBreakdown,
    HouseholdGoals, HouseholdSnapshot, Liabilities, MajorPurchase, MonthlyExpenses, PayoffMethod,
    PortfolioReview, Priority, ProjectionPoint, Protection, RetirementOutlook,
    RetirementSimulation, RiskAssessment, RiskCategory, RiskStatus, SavingsGoal, TaxEstimate,
    TaxRecommendation, TaxSavingsReport,
};
