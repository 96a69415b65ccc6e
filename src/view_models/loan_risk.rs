use crate::models::loan_risk::{BucketMismatch, LoanPortfolio, LoanRiskResponse};
use crate::view_models::format::percent;
use crate::view_models::{Axes, BarChart, Dataset, SummaryItem, TableData};

pub const LOAN_HEADERS: [&str; 4] = [
    "Loan ID",
    "Customer ID",
    "Default Probability",
    "Risk Category",
];

#[derive(Clone, Debug, PartialEq)]
pub struct LoanRiskView {
    pub overview: Vec<SummaryItem>,
    pub distribution_chart: BarChart,
    pub loans_table: TableData,
    /// Result of checking that the risk buckets add up to the loan total.
    pub bucket_check: Result<(), BucketMismatch>,
}

impl LoanRiskView {
    pub fn build(response: &LoanRiskResponse) -> Self {
        let portfolio = &response.portfolio;

        let loans_table = TableData {
            headers: LOAN_HEADERS.to_vec(),
            rows: response
                .loans
                .iter()
                .map(|loan| {
                    vec![
                        loan.loan_id.to_string(),
                        loan.customer_id.to_string(),
                        percent(loan.default_probability),
                        loan.risk_category.label().to_string(),
                    ]
                })
                .collect(),
        };

        Self {
            overview: overview(portfolio),
            distribution_chart: distribution_chart(portfolio),
            loans_table,
            bucket_check: portfolio.check_bucket_contract(),
        }
    }
}

pub fn overview(portfolio: &LoanPortfolio) -> Vec<SummaryItem> {
    vec![
        SummaryItem::new("Total Loans", portfolio.total_loans.to_string()),
        SummaryItem::new(
            "High Risk (>50%)",
            format!(
                "{} ({})",
                portfolio.high_risk_loans,
                percent(portfolio.high_risk_share())
            ),
        ),
        SummaryItem::new(
            "Medium Risk (20-50%)",
            portfolio.medium_risk_loans.to_string(),
        ),
        SummaryItem::new("Low Risk (<20%)", portfolio.low_risk_loans.to_string()),
        SummaryItem::new(
            "Average Default Probability",
            percent(portfolio.avg_default_probability),
        ),
    ]
}

pub fn distribution_chart(portfolio: &LoanPortfolio) -> BarChart {
    BarChart {
        title: "Risk Category Distribution".to_string(),
        axes: Axes::new("Risk Category", "Number of Loans"),
        categories: vec!["High".to_string(), "Medium".to_string(), "Low".to_string()],
        datasets: vec![Dataset::new(
            "Number of Loans",
            vec![
                portfolio.high_risk_loans as f64,
                portfolio.medium_risk_loans as f64,
                portfolio.low_risk_loans as f64,
            ],
        )],
    }
}
