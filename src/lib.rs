//! Three-day forecast cards for Tokyo, Osaka and Sapporo from the JMA
//! forecast feed, served over MCP.

pub mod constants;
pub mod extract;
pub mod fetcher;
pub mod formatters;
pub mod models;
pub mod region;
pub mod service;
pub mod view;

pub use extract::{extract, format_date_label};
pub use fetcher::{FetchError, Fetcher};
pub use models::{RawForecastDocument, ViewModel};
pub use region::{Region, RegionError};
pub use service::Forecast;
pub use view::{ForecastController, Ticket};
