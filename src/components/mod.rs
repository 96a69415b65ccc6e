pub mod chart;
pub mod data_table;
pub mod insight_card;
pub mod nav;
pub mod status;
pub mod summary;

pub use chart::Chart;
pub use data_table::DataTable;
pub use insight_card::ClusterInsight;
pub use nav::NavBar;
pub use status::{Status, render_fetch_state};
pub use summary::SummaryGrid;
