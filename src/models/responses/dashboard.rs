//! Dashboard response models.

use serde::Serialize;
use utoipa::ToSchema;

/// One named data series of a chart
#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct SeriesData {
    #[schema(example = "series1")]
    pub name: String,
    #[schema(example = json!([31, 120, 10, 28, 61, 18, 109]))]
    pub data: Vec<u32>,
}

/// A chart card on the dashboard page
#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct ChartSeries {
    /// Card title
    #[schema(example = "Weekly subscribers")]
    pub title: String,
    /// Chart kind understood by the front end
    #[schema(example = "area")]
    pub chart_type: String,
    /// X axis categories (ISO 8601 timestamps)
    pub categories: Vec<String>,
    pub series: Vec<SeriesData>,
}

/// Data behind the dashboard page
#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct DashboardResponse {
    pub charts: Vec<ChartSeries>,
}
