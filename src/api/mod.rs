use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

use crate::core::{
    Accounts, Allocation, Assumptions, DebtAccount, FilingStatus, HouseholdGoals,
    HouseholdSnapshot, Liabilities, MonthlyExpenses, Protection, analyze, tax,
};

/// Every field optional; anything omitted falls back to the documented
/// defaults so thin clients can send only what they collect.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzePayload {
    age: Option<u32>,
    dependents: Option<u32>,
    child_ages: Option<Vec<u32>>,
    annual_income: Option<f64>,
    spouse_annual_income: Option<f64>,
    accounts: Option<Accounts>,
    liabilities: Option<Liabilities>,
    expenses: Option<MonthlyExpenses>,
    protection: Option<Protection>,
    state: Option<String>,
    filing_status: Option<FilingStatus>,
    goals: Option<HouseholdGoals>,
    debts: Option<Vec<DebtAccount>>,
    allocation: Option<Allocation>,
    assumptions: Option<Assumptions>,
    seed: Option<u64>,
}

fn default_snapshot() -> HouseholdSnapshot {
    HouseholdSnapshot {
        age: 35,
        dependents: 0,
        child_ages: Vec::new(),
        annual_income: 0.0,
        spouse_annual_income: 0.0,
        accounts: Accounts::default(),
        liabilities: Liabilities::default(),
        expenses: MonthlyExpenses::default(),
        protection: Protection::default(),
        state: "CA".to_string(),
        filing_status: FilingStatus::Single,
        goals: HouseholdGoals::default(),
        debts: Vec::new(),
        allocation: None,
        assumptions: Assumptions::default(),
    }
}

/// Caller-level validation the pure core deliberately leaves to this
/// boundary. The core itself never rejects business values; it clamps.
fn validate_snapshot(snapshot: &HouseholdSnapshot) -> Result<(), String> {
    if snapshot.age == 0 || snapshot.age > 120 {
        return Err("age must be between 1 and 120".to_string());
    }

    let finite_fields = [
        ("annualIncome", snapshot.annual_income),
        ("spouseAnnualIncome", snapshot.spouse_annual_income),
        ("accounts total", snapshot.accounts.total()),
        ("liabilities total", snapshot.liabilities.total()),
        ("expenses total", snapshot.expenses.total()),
        (
            "lifeInsuranceCoverage",
            snapshot.protection.life_insurance_coverage,
        ),
    ];
    for (name, value) in finite_fields {
        if !value.is_finite() {
            return Err(format!("{name} must be a finite number"));
        }
    }

    if snapshot.annual_income < 0.0 || snapshot.spouse_annual_income < 0.0 {
        return Err("income must be >= 0".to_string());
    }

    for debt in &snapshot.debts {
        if !debt.balance.is_finite() || !debt.apr.is_finite() || !debt.minimum_payment.is_finite() {
            return Err(format!("debt '{}' has a non-finite field", debt.name));
        }
        if debt.balance < 0.0 || debt.apr < 0.0 || debt.minimum_payment < 0.0 {
            return Err(format!("debt '{}' has a negative field", debt.name));
        }
    }

    if let Some(goal) = &snapshot.goals.retirement_age {
        if *goal > 120 {
            return Err("retirementAge must be <= 120".to_string());
        }
    }

    Ok(())
}

pub fn snapshot_from_payload(payload: AnalyzePayload) -> Result<HouseholdSnapshot, String> {
    let mut snapshot = default_snapshot();

    if let Some(v) = payload.age {
        snapshot.age = v;
    }
    if let Some(v) = payload.dependents {
        snapshot.dependents = v;
    }
    if let Some(v) = payload.child_ages {
        snapshot.child_ages = v;
    }
    if let Some(v) = payload.annual_income {
        snapshot.annual_income = v;
    }
    if let Some(v) = payload.spouse_annual_income {
        snapshot.spouse_annual_income = v;
    }
    if let Some(v) = payload.accounts {
        snapshot.accounts = v;
    }
    if let Some(v) = payload.liabilities {
        snapshot.liabilities = v;
    }
    if let Some(v) = payload.expenses {
        snapshot.expenses = v;
    }
    if let Some(v) = payload.protection {
        snapshot.protection = v;
    }
    if let Some(v) = payload.state {
        snapshot.state = v;
    }
    if let Some(v) = payload.filing_status {
        snapshot.filing_status = v;
    }
    if let Some(v) = payload.goals {
        snapshot.goals = v;
    }
    if let Some(v) = payload.debts {
        snapshot.debts = v;
    }
    if let Some(v) = payload.allocation {
        snapshot.allocation = Some(v);
    }
    if let Some(v) = payload.assumptions {
        snapshot.assumptions = v;
    }
    if let Some(v) = payload.seed {
        snapshot.assumptions.seed = v;
    }

    validate_snapshot(&snapshot)?;
    Ok(snapshot)
}

pub fn snapshot_from_json(json: &str) -> Result<HouseholdSnapshot, String> {
    let payload = serde_json::from_str::<AnalyzePayload>(json)
        .map_err(|e| format!("invalid snapshot JSON: {e}"))?;
    snapshot_from_payload(payload)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaxQuery {
    income: f64,
    state: Option<String>,
    filing_status: Option<FilingStatus>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = router();

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "analysis API listening");
    axum::serve(listener, app).await
}

fn router() -> Router {
    Router::new()
        .route(
            "/api/analyze",
            get(analyze_get_handler).post(analyze_post_handler),
        )
        .route("/api/tax", get(tax_handler))
        .fallback(not_found_handler)
}

async fn analyze_get_handler(Query(payload): Query<AnalyzePayload>) -> Response {
    analyze_handler_impl(payload)
}

async fn analyze_post_handler(Json(payload): Json<AnalyzePayload>) -> Response {
    analyze_handler_impl(payload)
}

fn analyze_handler_impl(payload: AnalyzePayload) -> Response {
    let snapshot = match snapshot_from_payload(payload) {
        Ok(snapshot) => snapshot,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };
    json_response(StatusCode::OK, analyze(&snapshot))
}

async fn tax_handler(Query(query): Query<TaxQuery>) -> Response {
    if !query.income.is_finite() || query.income < 0.0 {
        return error_response(StatusCode::BAD_REQUEST, "income must be >= 0");
    }
    let state = query.state.unwrap_or_else(|| "CA".to_string());
    let filing = query.filing_status.unwrap_or(FilingStatus::Single);
    json_response(
        StatusCode::OK,
        tax::estimate_taxes(query.income, &state, filing),
    )
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_builds_the_documented_defaults() {
        let snapshot = snapshot_from_json("{}").expect("defaults are valid");
        assert_eq!(snapshot.age, 35);
        assert_eq!(snapshot.state, "CA");
        assert_eq!(snapshot.filing_status, FilingStatus::Single);
        assert!(snapshot.debts.is_empty());
        assert!(snapshot.allocation.is_none());
    }

    #[test]
    fn payload_fields_override_defaults() {
        let snapshot = snapshot_from_json(
            r#"{
                "age": 44,
                "annualIncome": 150000,
                "state": "ny",
                "filingStatus": "married-joint",
                "accounts": {"savings": 20000, "brokerage": 10000},
                "goals": {"retirementAge": 62},
                "seed": 7
            }"#,
        )
        .expect("valid payload");
        assert_eq!(snapshot.age, 44);
        assert_eq!(snapshot.annual_income, 150_000.0);
        assert_eq!(snapshot.state, "ny");
        assert_eq!(snapshot.filing_status, FilingStatus::MarriedJoint);
        assert_eq!(snapshot.accounts.savings, 20_000.0);
        assert_eq!(snapshot.accounts.checking, 0.0);
        assert_eq!(snapshot.goals.retirement_age, Some(62));
        assert_eq!(snapshot.assumptions.seed, 7);
    }

    #[test]
    fn filing_status_accepts_the_documented_aliases() {
        for raw in ["\"married-joint\"", "\"marriedJoint\"", "\"joint\""] {
            let json = format!("{{\"filingStatus\": {raw}}}");
            let snapshot = snapshot_from_json(&json).expect("alias accepted");
            assert_eq!(snapshot.filing_status, FilingStatus::MarriedJoint);
        }
    }

    #[test]
    fn out_of_range_age_is_rejected() {
        assert!(snapshot_from_json(r#"{"age": 0}"#).is_err());
        assert!(snapshot_from_json(r#"{"age": 130}"#).is_err());
    }

    #[test]
    fn negative_income_is_rejected_at_the_boundary() {
        assert!(snapshot_from_json(r#"{"annualIncome": -5}"#).is_err());
    }

    #[test]
    fn malformed_debts_are_rejected() {
        let json = r#"{"debts": [{"name": "Card", "balance": -100, "apr": 0.2, "minimumPayment": 25}]}"#;
        assert!(snapshot_from_json(json).is_err());
    }

    #[test]
    fn malformed_json_reports_a_parse_error() {
        let err = snapshot_from_json("{not json").expect_err("must fail");
        assert!(err.contains("invalid snapshot JSON"));
    }

    #[test]
    fn analysis_of_a_payload_snapshot_round_trips_to_json() {
        let snapshot = snapshot_from_json(
            r#"{"age": 40, "annualIncome": 90000, "expenses": {"housing": 1500}}"#,
        )
        .expect("valid payload");
        let analysis = analyze(&snapshot);
        let encoded = serde_json::to_string(&analysis).expect("serializes");
        assert!(encoded.contains("healthScore"));
        assert!(encoded.contains("criticalGaps"));
    }
}
