//! Search command implementation.

use crate::aws::{ItemSummary, SearchClient, SearchIndex};
use crate::config::Config;
use crate::format::Formatter;
use anyhow::{Context, Result};
use std::collections::HashMap;
use tracing::{debug, info};

/// Executes an item search.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the search and returns formatted output.
    pub async fn execute(
        &self,
        index: SearchIndex,
        params: &HashMap<String, String>,
    ) -> Result<String> {
        let mut client = SearchClient::new(&self.config).context("Failed to create client")?;

        self.execute_with_client(&mut client, index, params).await
    }

    /// Executes the search with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &mut SearchClient,
        index: SearchIndex,
        params: &HashMap<String, String>,
    ) -> Result<String> {
        info!("Searching {} for {:?}", index, params);

        let document = client.item_search(index, params).await?;

        // A well-formed response can still carry service errors
        if let Some(codes) = document.error_codes() {
            anyhow::bail!("The service returned errors: {}", codes.join(", "));
        }

        let summaries: Vec<ItemSummary> =
            document.items().into_iter().map(ItemSummary::from_item).collect();

        debug!("Search returned {} item(s)", summaries.len());

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_items(&summaries))
    }
}
