use serde::Deserialize;

use crate::models::null_as_default;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeePortfolio {
    #[serde(deserialize_with = "null_as_default")]
    pub total_customers: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_revenue: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub avg_recommended_fee: f64,
    /// Ratio in [0, 1].
    #[serde(deserialize_with = "null_as_default")]
    pub avg_churn_risk: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClusterFeeSummary {
    pub cluster: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub avg_recommended_fee: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_revenue: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub avg_churn_risk: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub avg_default_probability: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FeeCustomerRecord {
    pub customer_id: u64,
    #[serde(default)]
    pub cluster: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommended_fee: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub expected_revenue: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub churn_risk: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_default_probability: f64,
}

/// Body of `GET /api/fee-optimization/`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FeeOptimizationResponse {
    pub portfolio: FeePortfolio,
    #[serde(default)]
    pub clusters: Vec<ClusterFeeSummary>,
    #[serde(default)]
    pub customers: Vec<FeeCustomerRecord>,
}
