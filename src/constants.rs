/// User agent string for HTTP requests
pub const USER_AGENT: &str = "jma-forecast-cards/0.1.0";

/// JMA forecast feed base URL; each region appends `/{office_code}.json`
pub const JMA_FORECAST_BASE: &str = "https://www.jma.go.jp/bosai/forecast/data/forecast";

/// Message shown in place of the cards when a fetch fails
pub const FETCH_FAILED_MESSAGE: &str = "データの取得に失敗しました";

/// Placeholder for a card field with no data
pub const PLACEHOLDER: &str = "N/A";

/// Title line above the cards
pub const HEADING: &str = "天気予報";
