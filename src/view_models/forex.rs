use crate::models::forex::{ForexForecastPoint, ForexRecommendation, ForexResponse};
use crate::view_models::{Axes, BarChart, Dataset, LineChart};

#[derive(Clone, Debug, PartialEq)]
pub struct RecommendationItem {
    pub action: String,
    pub detail: String,
}

impl From<&ForexRecommendation> for RecommendationItem {
    fn from(rec: &ForexRecommendation) -> Self {
        Self {
            action: rec.action.clone(),
            detail: format!("{} (Impact: {})", rec.reason, rec.impact),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForexView {
    pub margin_chart: BarChart,
    pub forecast_chart: LineChart,
    pub recommendations: Vec<RecommendationItem>,
}

impl ForexView {
    pub fn build(response: &ForexResponse) -> Self {
        let margin_chart = BarChart {
            title: "Margin by Corridor".to_string(),
            axes: Axes::new("Currency Pair", "Margin ($)"),
            categories: response
                .corridors
                .iter()
                .map(|c| c.currency_pair.clone())
                .collect(),
            datasets: vec![Dataset::new(
                "Total Margin ($)",
                response.corridors.iter().map(|c| c.total_margin_usd).collect(),
            )],
        };

        Self {
            margin_chart,
            forecast_chart: forecast_chart(&response.forecast),
            recommendations: response.recommendations.iter().map(Into::into).collect(),
        }
    }
}

/// Forecast line in ascending date order. Points sharing a date keep their
/// payload order.
pub fn forecast_chart(forecast: &[ForexForecastPoint]) -> LineChart {
    let mut points: Vec<&ForexForecastPoint> = forecast.iter().collect();
    points.sort_by_key(|p| p.date);

    LineChart {
        title: "USD/KES Forecast (30 Days)".to_string(),
        axes: Axes::new("Date", "Ask Rate"),
        categories: points
            .iter()
            .map(|p| p.date.format("%Y-%m-%d").to_string())
            .collect(),
        dataset: Dataset::new(
            "Forecasted Ask Rate",
            points.iter().map(|p| p.forecasted_ask_rate).collect(),
        ),
        area: true,
    }
}
