use serde::Deserialize;

use crate::models::null_as_default;

/// Risk bucket assigned upstream. Never recomputed on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RiskCategory {
    High,
    Medium,
    Low,
    #[serde(other)]
    Unknown,
}

impl RiskCategory {
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::High => "High",
            RiskCategory::Medium => "Medium",
            RiskCategory::Low => "Low",
            RiskCategory::Unknown => "Unknown",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Loan {
    pub loan_id: u64,
    pub customer_id: u64,
    /// Ratio in [0, 1].
    #[serde(default, deserialize_with = "null_as_default")]
    pub default_probability: f64,
    pub risk_category: RiskCategory,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoanPortfolio {
    #[serde(deserialize_with = "null_as_default")]
    pub total_loans: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub high_risk_loans: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub medium_risk_loans: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub low_risk_loans: u64,
    /// Ratio in [0, 1]. An empty portfolio may report `null`.
    #[serde(deserialize_with = "null_as_default")]
    pub avg_default_probability: f64,
}

impl LoanPortfolio {
    /// Share of high-risk loans as a ratio. Zero when there are no loans.
    pub fn high_risk_share(&self) -> f64 {
        if self.total_loans == 0 {
            return 0.0;
        }
        self.high_risk_loans as f64 / self.total_loans as f64
    }

    /// Sum of the three risk buckets, or `None` if it does not fit in a `u64`.
    pub fn bucket_total(&self) -> Option<u64> {
        self.high_risk_loans
            .checked_add(self.medium_risk_loans)?
            .checked_add(self.low_risk_loans)
    }

    /// Checks that the three risk buckets add up to `total_loans`.
    ///
    /// The backend is expected to guarantee this; the client only reports a
    /// violation.
    pub fn check_bucket_contract(&self) -> Result<(), BucketMismatch> {
        let buckets = self.bucket_total();
        if buckets == Some(self.total_loans) {
            Ok(())
        } else {
            Err(BucketMismatch {
                total_loans: self.total_loans,
                bucket_total: buckets,
            })
        }
    }
}

/// Risk buckets that do not sum to the reported loan total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketMismatch {
    pub total_loans: u64,
    /// `None` when the buckets overflow.
    pub bucket_total: Option<u64>,
}

impl std::fmt::Display for BucketMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.bucket_total {
            Some(sum) => write!(
                f,
                "risk buckets sum to {} but total_loans is {}",
                sum, self.total_loans
            ),
            None => write!(
                f,
                "risk buckets overflow but total_loans is {}",
                self.total_loans
            ),
        }
    }
}

/// Body of `GET /api/loan-risk/`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LoanRiskResponse {
    pub portfolio: LoanPortfolio,
    #[serde(default)]
    pub loans: Vec<Loan>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_category_parsing() {
        let json = r#"["High", "Medium", "Low", "Severe"]"#;
        let categories: Vec<RiskCategory> = serde_json::from_str(json).unwrap();
        assert_eq!(
            categories,
            vec![
                RiskCategory::High,
                RiskCategory::Medium,
                RiskCategory::Low,
                RiskCategory::Unknown
            ]
        );
    }

    #[test]
    fn test_high_risk_share_with_no_loans() {
        let portfolio = LoanPortfolio::default();
        assert_eq!(portfolio.high_risk_share(), 0.0);
    }

    #[test]
    fn test_bucket_contract() {
        let mut portfolio = LoanPortfolio {
            total_loans: 10,
            high_risk_loans: 2,
            medium_risk_loans: 3,
            low_risk_loans: 5,
            avg_default_probability: 0.2,
        };
        assert!(portfolio.check_bucket_contract().is_ok());

        portfolio.low_risk_loans = 4;
        let mismatch = portfolio.check_bucket_contract().unwrap_err();
        assert_eq!(mismatch.bucket_total, Some(9));
        assert_eq!(
            mismatch.to_string(),
            "risk buckets sum to 9 but total_loans is 10"
        );
    }

    #[test]
    fn test_bucket_overflow_is_a_mismatch() {
        let portfolio = LoanPortfolio {
            total_loans: 1,
            high_risk_loans: u64::MAX,
            medium_risk_loans: 1,
            low_risk_loans: 1,
            avg_default_probability: 0.0,
        };

        assert_eq!(portfolio.bucket_total(), None);
        let mismatch = portfolio.check_bucket_contract().unwrap_err();
        assert_eq!(mismatch.bucket_total, None);
        assert_eq!(
            mismatch.to_string(),
            "risk buckets overflow but total_loans is 1"
        );
    }

    #[test]
    fn test_null_portfolio_fields_read_as_zero() {
        let json = r#"{"portfolio": {"total_loans": 0, "high_risk_loans": null, "medium_risk_loans": 0,
            "low_risk_loans": 0, "avg_default_probability": null},
            "loans": [{"loan_id": 1, "customer_id": 2, "default_probability": null, "risk_category": "Low"}]}"#;
        let response: LoanRiskResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.portfolio.avg_default_probability, 0.0);
        assert_eq!(response.portfolio.high_risk_loans, 0);
        assert_eq!(response.loans[0].default_probability, 0.0);
        assert!(response.portfolio.check_bucket_contract().is_ok());
    }
}
