//! Static chart data for the dashboard page.

/// Daily categories (UTC midnight) shared by every dashboard chart.
pub const CHART_CATEGORIES: [&str; 7] = [
    "2022-06-10T00:00:00.000Z",
    "2022-06-11T00:00:00.000Z",
    "2022-06-12T00:00:00.000Z",
    "2022-06-13T00:00:00.000Z",
    "2022-06-14T00:00:00.000Z",
    "2022-06-15T00:00:00.000Z",
    "2022-06-16T00:00:00.000Z",
];

/// Values plotted against [`CHART_CATEGORIES`].
pub const CHART_VALUES: [u32; 7] = [31, 120, 10, 28, 61, 18, 109];

pub const CHART_SUBSCRIBERS_TITLE: &str = "Weekly subscribers";
pub const CHART_OPEN_RATE_TITLE: &str = "Open rate";
pub const CHART_SERIES_NAME: &str = "series1";
pub const CHART_TYPE_AREA: &str = "area";
