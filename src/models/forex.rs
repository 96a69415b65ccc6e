use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::null_as_default;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ForexCorridor {
    pub currency_pair: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_margin_usd: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ForexForecastPoint {
    #[serde(deserialize_with = "deserialize_flexible_date")]
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "null_as_default")]
    pub forecasted_ask_rate: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ForexRecommendation {
    pub action: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub impact: String,
}

/// Body of `GET /api/forex-simulator-data`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForexResponse {
    pub corridors: Vec<ForexCorridor>,
    pub forecast: Vec<ForexForecastPoint>,
    pub recommendations: Vec<ForexRecommendation>,
}

/// Accepts plain dates (`2025-03-01`) as well as full timestamps, keeping only
/// the calendar date.
fn deserialize_flexible_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use chrono::{DateTime, NaiveDateTime};

    let s: String = serde::Deserialize::deserialize(deserializer)?;

    if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Ok(dt.date_naive());
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.date());
    }

    Err(serde::de::Error::custom(format!(
        "Failed to parse date '{}'",
        s
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_date_formats() {
        let json = r#"[
            {"date": "2025-03-01", "forecasted_ask_rate": 129.4},
            {"date": "2025-03-02T00:00:00Z", "forecasted_ask_rate": 129.6},
            {"date": "2025-03-03T00:00:00", "forecasted_ask_rate": 129.1}
        ]"#;

        let points: Vec<ForexForecastPoint> = serde_json::from_str(json).unwrap();
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(points[1].date, NaiveDate::from_ymd_opt(2025, 3, 2).unwrap());
        assert_eq!(points[2].date, NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
    }

    #[test]
    fn test_bad_forecast_date_is_rejected() {
        let json = r#"{"date": "next tuesday", "forecasted_ask_rate": 1.0}"#;
        let result: Result<ForexForecastPoint, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_null_figures_read_as_zero() {
        let json = r#"{
            "corridors": [{"currency_pair": "USD/KES", "total_margin_usd": null}],
            "forecast": [{"date": "2025-03-01", "forecasted_ask_rate": null}]
        }"#;

        let response: ForexResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.corridors[0].total_margin_usd, 0.0);
        assert_eq!(response.forecast[0].forecasted_ask_rate, 0.0);
    }
}
