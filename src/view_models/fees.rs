use crate::config::Config;
use crate::models::fees::{
    ClusterFeeSummary, FeeCustomerRecord, FeeOptimizationResponse, FeePortfolio,
};
use crate::view_models::format::{NOT_AVAILABLE, money, percent};
use crate::view_models::{SummaryItem, TableData};

pub const TOP_FEE_HEADERS: [&str; 6] = [
    "Customer ID",
    "Cluster",
    "Recommended Fee",
    "Expected Revenue",
    "Churn Risk",
    "Default Probability",
];

/// Headline figures for one cluster.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterFeeCard {
    pub title: String,
    pub items: Vec<SummaryItem>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeeView {
    pub overview: Vec<SummaryItem>,
    pub clusters: Vec<ClusterFeeCard>,
    pub top_customers: TableData,
}

impl FeeView {
    pub fn build(response: &FeeOptimizationResponse) -> Self {
        Self {
            overview: overview(&response.portfolio),
            clusters: response.clusters.iter().map(cluster_card).collect(),
            top_customers: top_customers_table(&top_fee_customers(
                &response.customers,
                Config::TOP_FEE_CUSTOMERS,
            )),
        }
    }
}

/// The `limit` records with the highest recommended fee, highest first.
/// Records with equal fees keep their payload order.
pub fn top_fee_customers(records: &[FeeCustomerRecord], limit: usize) -> Vec<&FeeCustomerRecord> {
    let mut ranked: Vec<&FeeCustomerRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.recommended_fee.total_cmp(&a.recommended_fee));
    ranked.truncate(limit);
    ranked
}

pub fn overview(portfolio: &FeePortfolio) -> Vec<SummaryItem> {
    vec![
        SummaryItem::new("Total Customers", portfolio.total_customers.to_string()),
        SummaryItem::new("Total Revenue", money(portfolio.total_revenue)),
        SummaryItem::new("Avg Recommended Fee", money(portfolio.avg_recommended_fee)),
        SummaryItem::new("Avg Churn Risk", percent(portfolio.avg_churn_risk)),
    ]
}

pub fn cluster_card(cluster: &ClusterFeeSummary) -> ClusterFeeCard {
    ClusterFeeCard {
        title: format!("Cluster {}", cluster.cluster),
        items: vec![
            SummaryItem::new("Customer Count", cluster.customer_count.to_string()),
            SummaryItem::new("Avg Recommended Fee", money(cluster.avg_recommended_fee)),
            SummaryItem::new("Total Revenue", money(cluster.total_revenue)),
            SummaryItem::new("Avg Churn Risk", percent(cluster.avg_churn_risk)),
            SummaryItem::new(
                "Avg Default Probability",
                percent(cluster.avg_default_probability),
            ),
        ],
    }
}

pub fn top_customers_table(records: &[&FeeCustomerRecord]) -> TableData {
    TableData {
        headers: TOP_FEE_HEADERS.to_vec(),
        rows: records
            .iter()
            .map(|r| {
                vec![
                    r.customer_id.to_string(),
                    r.cluster
                        .map_or_else(|| NOT_AVAILABLE.to_string(), |c| c.to_string()),
                    money(r.recommended_fee),
                    money(r.expected_revenue),
                    percent(r.churn_risk),
                    percent(r.avg_default_probability),
                ]
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(customer_id: u64, recommended_fee: f64) -> FeeCustomerRecord {
        FeeCustomerRecord {
            customer_id,
            recommended_fee,
            ..FeeCustomerRecord::default()
        }
    }

    #[test]
    fn test_top_fee_customers_sorted_and_limited() {
        let records: Vec<FeeCustomerRecord> = (1..=8).map(|i| record(i, i as f64)).collect();

        let top = top_fee_customers(&records, 5);
        let ids: Vec<u64> = top.iter().map(|r| r.customer_id).collect();
        assert_eq!(ids, vec![8, 7, 6, 5, 4]);
    }

    #[test]
    fn test_top_fee_customers_shorter_than_limit() {
        let records = vec![record(1, 3.0), record(2, 9.0)];
        assert_eq!(top_fee_customers(&records, 5).len(), 2);
        assert!(top_fee_customers(&[], 5).is_empty());
    }

    #[test]
    fn test_top_fee_customers_ties_keep_payload_order() {
        let records = vec![
            record(1, 10.0),
            record(2, 20.0),
            record(3, 10.0),
            record(4, 20.0),
            record(5, 10.0),
            record(6, 10.0),
        ];

        let ids: Vec<u64> = top_fee_customers(&records, 5)
            .iter()
            .map(|r| r.customer_id)
            .collect();
        assert_eq!(ids, vec![2, 4, 1, 3, 5]);
    }

    #[test]
    fn test_top_fee_customers_does_not_reorder_input() {
        let records = vec![record(1, 1.0), record(2, 2.0)];
        let _ = top_fee_customers(&records, 5);
        assert_eq!(records[0].customer_id, 1);
    }

    #[test]
    fn test_cluster_card() {
        let card = cluster_card(&ClusterFeeSummary {
            cluster: 2,
            customer_count: 40,
            avg_recommended_fee: 4.5,
            total_revenue: 1800.0,
            avg_churn_risk: 0.275,
            avg_default_probability: 0.05,
        });

        assert_eq!(card.title, "Cluster 2");
        assert_eq!(card.items[0].value, "40");
        assert_eq!(card.items[1].value, "$4.50");
        assert_eq!(card.items[4].value, "5.0%");
    }
}
