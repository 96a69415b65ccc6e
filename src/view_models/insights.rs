use crate::config::Config;
use crate::models::segmentation::{ClusterLabel, ClusterSummary};
use crate::view_models::format::{NOT_AVAILABLE, grouped};

/// Uplift applied to any cluster without a dedicated profile.
const DEFAULT_UPLIFT: f64 = 1.2;

/// Static guidance for one segment.
#[derive(Debug, PartialEq)]
pub struct ClusterInsight {
    pub profile: &'static str,
    pub actions: &'static [&'static str],
    pub revenue_band: &'static str,
}

static HIGH_VALUE: ClusterInsight = ClusterInsight {
    profile: "High-income, high-credit-score customers with active loans and cards.",
    actions: &[
        "Offer premium credit cards (e.g., Visa Infinite).",
        "Upsell wealth management or investment products.",
        "Target for high-value personal loans.",
    ],
    revenue_band: "High revenue potential ($50K-$100K per customer annually).",
};

static SAVERS: ClusterInsight = ClusterInsight {
    profile: "Middle-income savers with high savings and moderate FX activity.",
    actions: &[
        "Promote cashback/rewards credit cards.",
        "Offer fixed-deposit accounts with competitive rates.",
        "Introduce micro-investment options.",
    ],
    revenue_band: "Moderate revenue uplift ($10K-$30K per customer).",
};

static EMERGING: ClusterInsight = ClusterInsight {
    profile: "Low-income customers with poor credit and high churn risk.",
    actions: &[
        "Provide financial literacy programs.",
        "Offer secured credit cards or microloans.",
        "Promote mobile banking and low-fee accounts.",
    ],
    revenue_band: "Long-term growth ($5K-$15K per customer).",
};

/// The segments the dashboard has written guidance for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownCluster {
    /// "Cluster 0"
    HighValue,
    /// "Cluster 1"
    Savers,
    /// "Cluster 2"
    Emerging,
}

impl KnownCluster {
    /// Exact match on the label text.
    pub fn from_label(label: &ClusterLabel) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|cluster| cluster.label() == label.as_str())
    }

    pub fn label(&self) -> &'static str {
        match self {
            KnownCluster::HighValue => "Cluster 0",
            KnownCluster::Savers => "Cluster 1",
            KnownCluster::Emerging => "Cluster 2",
        }
    }

    pub fn insight(&self) -> &'static ClusterInsight {
        match self {
            KnownCluster::HighValue => &HIGH_VALUE,
            KnownCluster::Savers => &SAVERS,
            KnownCluster::Emerging => &EMERGING,
        }
    }

    pub fn revenue_uplift(&self) -> f64 {
        match self {
            KnownCluster::HighValue => 2.0,
            KnownCluster::Savers => 1.5,
            KnownCluster::Emerging => DEFAULT_UPLIFT,
        }
    }

    pub fn all() -> &'static [KnownCluster] {
        &[
            KnownCluster::HighValue,
            KnownCluster::Savers,
            KnownCluster::Emerging,
        ]
    }
}

/// Guidance for `label`, or `None` when the label has no written profile.
pub fn insight_for(label: &ClusterLabel) -> Option<&'static ClusterInsight> {
    KnownCluster::from_label(label).map(|cluster| cluster.insight())
}

pub fn revenue_uplift(label: &ClusterLabel) -> f64 {
    KnownCluster::from_label(label).map_or(DEFAULT_UPLIFT, |cluster| cluster.revenue_uplift())
}

/// Rough revenue figure for a cluster card: members times a flat per-customer
/// amount times the cluster's uplift. Display only.
///
/// Returns the placeholder when the summary is missing or has no members.
pub fn estimated_revenue(label: &ClusterLabel, summary: Option<&ClusterSummary>) -> String {
    match summary.and_then(|s| s.count) {
        Some(count) if count > 0 => {
            grouped(count as f64 * Config::REVENUE_PER_CUSTOMER * revenue_uplift(label))
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_with_count(count: Option<u64>) -> ClusterSummary {
        ClusterSummary {
            count,
            ..ClusterSummary::default()
        }
    }

    #[test]
    fn test_known_labels_round_trip() {
        for cluster in KnownCluster::all() {
            let label = ClusterLabel::new(cluster.label());
            assert_eq!(KnownCluster::from_label(&label), Some(*cluster));
        }
    }

    #[test]
    fn test_unknown_label_has_no_insight() {
        assert!(insight_for(&ClusterLabel::new("Cluster 9")).is_none());
        assert!(insight_for(&ClusterLabel::new("cluster 0")).is_none());
    }

    #[test]
    fn test_uplift_by_label() {
        assert_eq!(revenue_uplift(&ClusterLabel::new("Cluster 0")), 2.0);
        assert_eq!(revenue_uplift(&ClusterLabel::new("Cluster 1")), 1.5);
        assert_eq!(revenue_uplift(&ClusterLabel::new("Cluster 2")), 1.2);
        assert_eq!(revenue_uplift(&ClusterLabel::new("Cluster 7")), 1.2);
    }

    // The figure is a display heuristic (members * 5000 * uplift), not a
    // revenue model.
    #[test]
    fn test_estimated_revenue_heuristic() {
        let label = ClusterLabel::new("Cluster 0");
        let summary = summary_with_count(Some(10));
        assert_eq!(estimated_revenue(&label, Some(&summary)), "100,000");

        let label = ClusterLabel::new("Cluster 1");
        let summary = summary_with_count(Some(7));
        assert_eq!(estimated_revenue(&label, Some(&summary)), "52,500");

        let label = ClusterLabel::new("Cluster 5");
        let summary = summary_with_count(Some(3));
        assert_eq!(estimated_revenue(&label, Some(&summary)), "18,000");
    }

    #[test]
    fn test_estimated_revenue_not_available() {
        let label = ClusterLabel::new("Cluster 0");
        assert_eq!(estimated_revenue(&label, None), "N/A");
        assert_eq!(
            estimated_revenue(&label, Some(&summary_with_count(Some(0)))),
            "N/A"
        );
        assert_eq!(
            estimated_revenue(&label, Some(&summary_with_count(None))),
            "N/A"
        );
    }
}
