use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// JMA Forecast Feed
// ============================================================================

/// The forecast feed response, kept unvalidated. Shape is only probed by the extractor.
pub type RawForecastDocument = serde_json::Value;

// ============================================================================
// View Model
// ============================================================================

/// Render-ready projection of one fetched forecast
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModel {
    /// `M月D日` labels; index 0 is today
    pub date: Vec<String>,
    pub weather: Vec<String>,
    pub temps: Vec<String>,
    /// `[max, min]` future temperatures
    pub temps_future: [Vec<String>; 2],
    pub error: Option<String>,
}

impl ViewModel {
    pub fn temps_max(&self) -> &[String] {
        &self.temps_future[0]
    }

    pub fn temps_min(&self) -> &[String] {
        &self.temps_future[1]
    }

    /// Error-only merge: display fields are kept as they were
    pub fn with_error(self, message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..self
        }
    }
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SelectRegionRequest {
    /// 0 = 東京, 1 = 大阪, 2 = 札幌
    pub region: u8,
}
