use serde::Deserialize;
use serde::de::{MapAccess, Visitor};
use std::fmt;

/// A customer row as returned by the segmentation endpoint. The same shape is
/// used for cluster membership rows (which carry `cluster`) and for the full
/// customer list (which carries `is_diaspora`).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Customer {
    pub customer_id: u64,
    #[serde(default)]
    pub income: Option<f64>,
    #[serde(default)]
    pub credit_score: Option<f64>,
    #[serde(default)]
    pub savings_balance: Option<f64>,
    #[serde(default, alias = "total_card_value")]
    pub card_value: Option<f64>,
    #[serde(default)]
    pub loan_amount: Option<f64>,
    #[serde(default)]
    pub fx_volume: Option<f64>,
    #[serde(default)]
    pub is_diaspora: bool,
    #[serde(default)]
    pub cluster: Option<i64>,
}

/// Aggregates for one cluster. Every field may be missing on the wire.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClusterSummary {
    pub avg_income: Option<f64>,
    pub avg_credit_score: Option<f64>,
    pub avg_savings_balance: Option<f64>,
    pub avg_card_value: Option<f64>,
    pub avg_loan_amount: Option<f64>,
    pub avg_fx_volume: Option<f64>,
    /// Ratio in [0, 1].
    pub churn_risk: Option<f64>,
    pub recommended_fee: Option<f64>,
    pub count: Option<u64>,
    pub diaspora_count: Option<u64>,
}

/// Backend-assigned segment label such as `"Cluster 0"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClusterLabel(String);

impl ClusterLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric suffix of the label, used to match membership rows.
    pub fn index(&self) -> Option<i64> {
        self.0.split_whitespace().nth(1)?.parse().ok()
    }
}

impl fmt::Display for ClusterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cluster summaries in the order the backend listed them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClusterSummaries(Vec<(ClusterLabel, ClusterSummary)>);

impl ClusterSummaries {
    pub fn new(entries: Vec<(ClusterLabel, ClusterSummary)>) -> Self {
        Self(entries)
    }

    pub fn labels(&self) -> impl Iterator<Item = &ClusterLabel> {
        self.0.iter().map(|(label, _)| label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ClusterLabel, &ClusterSummary)> {
        self.0.iter().map(|(label, summary)| (label, summary))
    }
}

impl<'de> Deserialize<'de> for ClusterSummaries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SummariesVisitor;

        impl<'de> Visitor<'de> for SummariesVisitor {
            type Value = ClusterSummaries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of cluster label to summary")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(ClusterSummaries::default())
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(ClusterSummaries::default())
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((label, summary)) = map.next_entry::<String, ClusterSummary>()? {
                    entries.push((ClusterLabel::new(label), summary));
                }
                Ok(ClusterSummaries::new(entries))
            }
        }

        deserializer.deserialize_any(SummariesVisitor)
    }
}

/// Inertia for each candidate cluster count. `k` and `inertia` are parallel.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ElbowCurve {
    pub k: Vec<u32>,
    pub inertia: Vec<f64>,
}

/// Body of `GET /api/segmentation/`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SegmentationResponse {
    #[serde(default)]
    pub clusters: Vec<Customer>,
    #[serde(default)]
    pub summary: ClusterSummaries,
    #[serde(default)]
    pub elbow: Option<ElbowCurve>,
    #[serde(default)]
    pub customers: Vec<Customer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_keeps_response_order() {
        let json = r#"{
            "summary": {
                "Cluster 2": {"count": 3},
                "Cluster 0": {"count": 1},
                "Cluster 1": {"count": 2}
            }
        }"#;

        let response: SegmentationResponse = serde_json::from_str(json).unwrap();
        let labels: Vec<&str> = response.summary.labels().map(ClusterLabel::as_str).collect();
        assert_eq!(labels, vec!["Cluster 2", "Cluster 0", "Cluster 1"]);
    }

    #[test]
    fn test_null_and_missing_sections_default_to_empty() {
        let json = r#"{"summary": null, "elbow": null}"#;

        let response: SegmentationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.summary.iter().count(), 0);
        assert!(response.elbow.is_none());
        assert!(response.clusters.is_empty());
        assert!(response.customers.is_empty());
    }

    #[test]
    fn test_customer_accepts_total_card_value() {
        let json = r#"{"customer_id": 7, "total_card_value": 1250.5, "cluster": 1}"#;

        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.card_value, Some(1250.5));
        assert_eq!(customer.cluster, Some(1));
        assert!(!customer.is_diaspora);
    }

    #[test]
    fn test_cluster_label_index() {
        assert_eq!(ClusterLabel::new("Cluster 0").index(), Some(0));
        assert_eq!(ClusterLabel::new("Cluster 12").index(), Some(12));
        assert_eq!(ClusterLabel::new("Outliers").index(), None);
    }
}
