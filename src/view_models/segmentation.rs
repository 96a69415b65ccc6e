use std::collections::HashSet;

use crate::models::segmentation::{
    ClusterLabel, ClusterSummaries, ClusterSummary, Customer, ElbowCurve, SegmentationResponse,
};
use crate::view_models::format::{NOT_AVAILABLE, fixed2, money, percent};
use crate::view_models::insights::{estimated_revenue, insight_for};
use crate::view_models::{
    Axes, BarChart, Dataset, LineChart, ScatterChart, ScatterGroup, TableData,
};

pub const SUMMARY_HEADERS: [&str; 11] = [
    "Cluster",
    "Avg Income",
    "Avg Credit Score",
    "Avg Savings",
    "Avg Card Value",
    "Avg Loan Amount",
    "Avg FX Volume",
    "Churn Risk",
    "Recommended Fee",
    "Customer Count",
    "Diaspora Count",
];

/// Series plotted in the averages chart, paired with their summary field.
const AVERAGE_SERIES: [(&str, fn(&ClusterSummary) -> Option<f64>); 6] = [
    ("Avg Income", |s| s.avg_income),
    ("Avg Credit Score", |s| s.avg_credit_score),
    ("Avg Savings", |s| s.avg_savings_balance),
    ("Avg Card Value", |s| s.avg_card_value),
    ("Avg Loan Amount", |s| s.avg_loan_amount),
    ("Avg FX Volume", |s| s.avg_fx_volume),
];

/// Text for one cluster's insight card.
#[derive(Clone, Debug, PartialEq)]
pub struct InsightCard {
    pub label: String,
    pub profile: String,
    pub churn_risk: String,
    pub recommended_fee: String,
    pub actions: Vec<String>,
    pub revenue_band: String,
    pub estimated_revenue: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SegmentationView {
    pub averages_chart: BarChart,
    /// Present only when the payload carried candidate cluster counts.
    pub elbow_chart: Option<LineChart>,
    pub scatter_chart: ScatterChart,
    pub summary_table: TableData,
    pub insights: Vec<InsightCard>,
    /// Membership rows left after the diaspora filter.
    pub member_rows: usize,
}

impl SegmentationView {
    pub fn build(response: &SegmentationResponse, diaspora_only: bool) -> Self {
        let members = filter_members(&response.clusters, &response.customers, diaspora_only);

        Self {
            averages_chart: averages_chart(&response.summary),
            elbow_chart: response.elbow.as_ref().and_then(elbow_chart),
            scatter_chart: scatter_chart(&response.summary, &members),
            summary_table: summary_table(&response.summary),
            insights: response
                .summary
                .iter()
                .map(|(label, summary)| insight_card(label, Some(summary)))
                .collect(),
            member_rows: members.len(),
        }
    }
}

/// Restricts membership rows to diaspora customers when `diaspora_only` is
/// set, joining on `customer_id`. Rows whose customer is unknown are dropped.
/// With the filter off the rows pass through unchanged.
pub fn filter_members(
    rows: &[Customer],
    customers: &[Customer],
    diaspora_only: bool,
) -> Vec<Customer> {
    if !diaspora_only {
        return rows.to_vec();
    }

    let diaspora: HashSet<u64> = customers
        .iter()
        .filter(|c| c.is_diaspora)
        .map(|c| c.customer_id)
        .collect();

    rows.iter()
        .filter(|row| diaspora.contains(&row.customer_id))
        .cloned()
        .collect()
}

pub fn averages_chart(summary: &ClusterSummaries) -> BarChart {
    let categories = summary.labels().map(ToString::to_string).collect();

    let datasets = AVERAGE_SERIES
        .iter()
        .map(|(label, field)| {
            let values = summary.iter().map(|(_, s)| field(s).unwrap_or(0.0)).collect();
            Dataset::new(*label, values)
        })
        .collect();

    BarChart {
        title: "Customer Segment Averages".to_string(),
        axes: Axes::new("Cluster", "Value"),
        categories,
        datasets,
    }
}

/// Inertia by cluster count, ordered by increasing k. Unpaired trailing
/// values are ignored.
pub fn elbow_chart(elbow: &ElbowCurve) -> Option<LineChart> {
    if elbow.k.is_empty() {
        return None;
    }

    let mut points: Vec<(u32, f64)> = elbow
        .k
        .iter()
        .copied()
        .zip(elbow.inertia.iter().copied())
        .collect();
    points.sort_by_key(|(k, _)| *k);

    Some(LineChart {
        title: "Elbow Method for Optimal Clusters".to_string(),
        axes: Axes::new("Number of Clusters (k)", "Inertia"),
        categories: points.iter().map(|(k, _)| k.to_string()).collect(),
        dataset: Dataset::new("Inertia", points.iter().map(|(_, v)| *v).collect()),
        area: false,
    })
}

/// Income against credit score, one group per summary label.
pub fn scatter_chart(summary: &ClusterSummaries, members: &[Customer]) -> ScatterChart {
    let groups = summary
        .labels()
        .map(|label| {
            let index = label.index();
            let points = members
                .iter()
                .filter(|row| index.is_some() && row.cluster == index)
                .map(|row| (row.income.unwrap_or(0.0), row.credit_score.unwrap_or(0.0)))
                .collect();

            ScatterGroup {
                label: label.to_string(),
                points,
            }
        })
        .collect();

    ScatterChart {
        title: "Income vs Credit Score".to_string(),
        axes: Axes::new("Income", "Credit Score"),
        groups,
    }
}

pub fn summary_table(summary: &ClusterSummaries) -> TableData {
    let rows = summary
        .iter()
        .map(|(label, s)| {
            vec![
                label.to_string(),
                money(s.avg_income.unwrap_or(0.0)),
                fixed2(s.avg_credit_score.unwrap_or(0.0)),
                money(s.avg_savings_balance.unwrap_or(0.0)),
                money(s.avg_card_value.unwrap_or(0.0)),
                money(s.avg_loan_amount.unwrap_or(0.0)),
                money(s.avg_fx_volume.unwrap_or(0.0)),
                percent(s.churn_risk.unwrap_or(0.0)),
                money(s.recommended_fee.unwrap_or(0.0)),
                s.count.unwrap_or(0).to_string(),
                s.diaspora_count.unwrap_or(0).to_string(),
            ]
        })
        .collect();

    TableData {
        headers: SUMMARY_HEADERS.to_vec(),
        rows,
    }
}

/// A missing recommended fee reads as a bare "N/A", with no currency sign.
pub fn insight_card(label: &ClusterLabel, summary: Option<&ClusterSummary>) -> InsightCard {
    let insight = insight_for(label);

    let recommended_fee = summary
        .and_then(|s| s.recommended_fee)
        .map_or_else(|| NOT_AVAILABLE.to_string(), money);

    let estimated = estimated_revenue(label, summary);
    let estimated_revenue = if estimated == NOT_AVAILABLE {
        estimated
    } else {
        format!("${estimated}")
    };

    InsightCard {
        label: label.to_string(),
        profile: insight.map_or(NOT_AVAILABLE, |i| i.profile).to_string(),
        churn_risk: percent(summary.and_then(|s| s.churn_risk).unwrap_or(0.0)),
        recommended_fee,
        actions: insight
            .map(|i| i.actions.iter().map(ToString::to_string).collect())
            .unwrap_or_default(),
        revenue_band: insight.map_or(NOT_AVAILABLE, |i| i.revenue_band).to_string(),
        estimated_revenue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(customer_id: u64, cluster: i64, income: f64, credit_score: f64) -> Customer {
        Customer {
            customer_id,
            income: Some(income),
            credit_score: Some(credit_score),
            cluster: Some(cluster),
            ..Customer::default()
        }
    }

    fn customer(customer_id: u64, is_diaspora: bool) -> Customer {
        Customer {
            customer_id,
            is_diaspora,
            ..Customer::default()
        }
    }

    #[test]
    fn test_filter_passes_rows_through_when_off() {
        let rows = vec![member(1, 0, 10.0, 600.0), member(2, 1, 20.0, 700.0)];
        let customers = vec![customer(1, true)];

        assert_eq!(filter_members(&rows, &customers, false), rows);
    }

    #[test]
    fn test_filter_keeps_only_diaspora_members() {
        let rows = vec![
            member(1, 0, 10.0, 600.0),
            member(2, 1, 20.0, 700.0),
            member(3, 1, 30.0, 650.0),
        ];
        let customers = vec![customer(1, true), customer(2, false)];

        let filtered = filter_members(&rows, &customers, true);
        let ids: Vec<u64> = filtered.iter().map(|c| c.customer_id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_elbow_sorted_by_k_and_truncated() {
        let elbow = ElbowCurve {
            k: vec![3, 1, 2, 4],
            inertia: vec![30.0, 100.0, 55.0],
        };

        let chart = elbow_chart(&elbow).unwrap();
        assert_eq!(chart.categories, vec!["1", "2", "3"]);
        assert_eq!(chart.dataset.values, vec![100.0, 55.0, 30.0]);
    }

    #[test]
    fn test_elbow_absent_without_k() {
        assert!(elbow_chart(&ElbowCurve::default()).is_none());
    }

    #[test]
    fn test_scatter_groups_by_label_index() {
        let summary = ClusterSummaries::new(vec![
            (ClusterLabel::new("Cluster 0"), ClusterSummary::default()),
            (ClusterLabel::new("Cluster 1"), ClusterSummary::default()),
            (ClusterLabel::new("Other"), ClusterSummary::default()),
        ]);
        let members = vec![
            member(1, 0, 10.0, 600.0),
            member(2, 1, 20.0, 700.0),
            Customer {
                customer_id: 3,
                cluster: Some(1),
                ..Customer::default()
            },
        ];

        let chart = scatter_chart(&summary, &members);
        assert_eq!(chart.groups[0].points, vec![(10.0, 600.0)]);
        assert_eq!(chart.groups[1].points, vec![(20.0, 700.0), (0.0, 0.0)]);
        assert!(chart.groups[2].points.is_empty());
    }

    #[test]
    fn test_insight_card_for_unknown_cluster() {
        let label = ClusterLabel::new("Cluster 9");
        let summary = ClusterSummary {
            churn_risk: Some(0.4),
            count: Some(2),
            ..ClusterSummary::default()
        };

        let card = insight_card(&label, Some(&summary));
        assert_eq!(card.profile, "N/A");
        assert!(card.actions.is_empty());
        assert_eq!(card.revenue_band, "N/A");
        assert_eq!(card.churn_risk, "40.0%");
        assert_eq!(card.recommended_fee, "N/A");
        assert_eq!(card.estimated_revenue, "$12,000");
    }

    #[test]
    fn test_insight_card_for_known_cluster() {
        let label = ClusterLabel::new("Cluster 1");
        let summary = ClusterSummary {
            recommended_fee: Some(12.5),
            ..ClusterSummary::default()
        };

        let card = insight_card(&label, Some(&summary));
        assert!(card.profile.starts_with("Middle-income savers"));
        assert_eq!(card.actions.len(), 3);
        assert_eq!(card.recommended_fee, "$12.50");
        assert_eq!(card.estimated_revenue, "N/A");
    }
}
