//! Dashboard data: the weekly chart cards.

use crate::constants::{
    CHART_CATEGORIES, CHART_OPEN_RATE_TITLE, CHART_SERIES_NAME, CHART_SUBSCRIBERS_TITLE,
    CHART_TYPE_AREA, CHART_VALUES,
};
use crate::models::{ChartSeries, DashboardResponse, SeriesData};

pub struct DashboardService {
    overview: DashboardResponse,
}

impl DashboardService {
    pub fn new() -> Self {
        let charts = [CHART_SUBSCRIBERS_TITLE, CHART_OPEN_RATE_TITLE]
            .iter()
            .map(|title| weekly_area_chart(title))
            .collect();

        Self {
            overview: DashboardResponse { charts },
        }
    }

    pub fn overview(&self) -> DashboardResponse {
        self.overview.clone()
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new()
    }
}

fn weekly_area_chart(title: &str) -> ChartSeries {
    ChartSeries {
        title: title.to_string(),
        chart_type: CHART_TYPE_AREA.to_string(),
        categories: CHART_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        series: vec![SeriesData {
            name: CHART_SERIES_NAME.to_string(),
            data: CHART_VALUES.to_vec(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_has_two_weekly_charts() {
        let overview = DashboardService::new().overview();
        assert_eq!(overview.charts.len(), 2);
        assert_eq!(overview.charts[0].title, "Weekly subscribers");
        assert_eq!(overview.charts[1].title, "Open rate");

        for chart in &overview.charts {
            assert_eq!(chart.categories.len(), chart.series[0].data.len());
            assert_eq!(chart.series[0].data, vec![31, 120, 10, 28, 61, 18, 109]);
        }
    }
}
