use anyhow::Result;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::extract::extract;
use crate::fetcher::Fetcher;
use crate::formatters::{format_cards, format_regions};
use crate::models::SelectRegionRequest;
use crate::region::Region;
use crate::view::{ForecastController, Ticket};

/// Forecast card service that handles MCP requests
#[derive(Clone)]
pub struct Forecast {
    fetcher: Fetcher,
    state: Arc<Mutex<ForecastController>>,
    tool_router: ToolRouter<Self>,
}

impl Forecast {
    /// Creates a service talking to the JMA feed
    pub fn new() -> Result<Self> {
        Ok(Self::with_fetcher(Fetcher::new()?))
    }

    pub fn with_fetcher(fetcher: Fetcher) -> Self {
        Self {
            fetcher,
            state: Arc::new(Mutex::new(ForecastController::new())),
            tool_router: Self::tool_router(),
        }
    }

    /// Selects `region`, fetches its forecast and returns the rendered cards.
    ///
    /// The state lock is not held across the fetch. If another selection is made
    /// meanwhile, this result is dropped and the newer state is rendered.
    pub async fn select(&self, region: Region) -> String {
        tracing::info!("Selecting region {}", region);
        let ticket = self.state.lock().await.begin(region);
        self.finish(ticket).await
    }

    /// Selects the default region and fetches it in the background.
    ///
    /// The ticket is issued before this returns, so any selection made
    /// afterwards supersedes the initial load.
    pub async fn start_initial_load(&self) -> JoinHandle<String> {
        let region = Region::default();
        tracing::info!("Starting initial load for {}", region);
        let ticket = self.state.lock().await.begin(region);

        let forecast = self.clone();
        tokio::spawn(async move { forecast.finish(ticket).await })
    }

    async fn finish(&self, ticket: Ticket) -> String {
        let region = ticket.region;
        let outcome = self
            .fetcher
            .fetch(region)
            .await
            .map(|doc| extract(&doc, region));

        let mut state = self.state.lock().await;
        state.complete(ticket, outcome);
        format_cards(state.view(), state.region())
    }

    /// Renders the current state without fetching
    pub async fn current(&self) -> String {
        let state = self.state.lock().await;
        format_cards(state.view(), state.region())
    }

    pub async fn regions(&self) -> String {
        format_regions(self.state.lock().await.region())
    }
}

#[tool_handler]
impl ServerHandler for Forecast {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "jma-forecast-cards".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Three-day forecast cards from the Japan Meteorological Agency feed \
                for Tokyo, Osaka and Sapporo."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Forecast {
    #[tool(description = "List the selectable regions. The current selection is marked with '*'.")]
    async fn list_regions(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(self.regions().await)]))
    }

    #[tool(description = "Select a region and show its forecast cards (today, tomorrow, the day after). Provide region 0 for Tokyo (東京), 1 for Osaka (大阪) or 2 for Sapporo (札幌).")]
    async fn select_region(
        &self,
        Parameters(request): Parameters<SelectRegionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let region = Region::try_from(request.region)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let rendered = self.select(region).await;

        Ok(CallToolResult::success(vec![Content::text(rendered)]))
    }

    #[tool(description = "Show the forecast cards for the currently selected region without fetching again.")]
    async fn show_forecast(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(self.current().await)]))
    }
}
