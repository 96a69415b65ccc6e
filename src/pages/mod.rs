use serde::{Deserialize, Serialize};

pub mod fee_optimization;
pub mod forex;
pub mod home;
pub mod loan_risk;
pub mod segmentation;

pub use fee_optimization::FeeOptimizationPage;
pub use forex::ForexSimulatorPage;
pub use home::HomePage;
pub use loan_risk::LoanRiskPage;
pub use segmentation::SegmentationPage;

/// Dashboard pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Home,
    Segmentation,
    LoanRisk,
    FeeOptimization,
    ForexSimulator,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Dashboard",
            Page::Segmentation => "Customer Segmentation",
            Page::LoanRisk => "Loan Risk",
            Page::FeeOptimization => "Fee Optimization",
            Page::ForexSimulator => "Forex Simulator",
        }
    }

    /// One-line description shown on the home page.
    pub fn description(&self) -> &'static str {
        match self {
            Page::Home => "Overview of the available modules",
            Page::Segmentation => "Customer clusters, their averages and suggested actions",
            Page::LoanRisk => "Default probability and risk buckets across the loan book",
            Page::FeeOptimization => "Recommended fees and expected revenue per customer",
            Page::ForexSimulator => "Corridor margins, rate forecast and recommendations",
        }
    }

    pub fn all() -> &'static [Page] {
        &[
            Page::Home,
            Page::Segmentation,
            Page::LoanRisk,
            Page::FeeOptimization,
            Page::ForexSimulator,
        ]
    }

    /// Pages backed by an API endpoint.
    pub fn modules() -> &'static [Page] {
        &Self::all()[1..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_storage_round_trip() {
        for page in Page::all() {
            let stored = serde_json::to_string(page).unwrap();
            let loaded: Page = serde_json::from_str(&stored).unwrap();
            assert_eq!(loaded, *page);
        }
    }

    #[test]
    fn test_modules_exclude_home() {
        assert_eq!(Page::modules().len(), 4);
        assert!(!Page::modules().contains(&Page::Home));
    }
}
