//! Item lookup command implementation.

use crate::aws::{ItemSummary, SearchClient};
use crate::config::Config;
use crate::format::Formatter;
use anyhow::{Context, Result};
use tracing::info;

/// Executes an item lookup by ASIN.
pub struct LookupCommand {
    config: Config,
}

impl LookupCommand {
    /// Creates a new lookup command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Looks up a single ASIN and returns formatted output.
    pub async fn execute(&self, asin: &str) -> Result<String> {
        let mut client = SearchClient::new(&self.config).context("Failed to create client")?;

        self.execute_with_client(&mut client, asin).await
    }

    /// Looks up a single ASIN with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &mut SearchClient,
        asin: &str,
    ) -> Result<String> {
        let asin = validate_asin(asin)?;

        info!("Looking up item: {}", asin);

        let document = client.item_lookup(&asin).await?;

        if let Some(codes) = document.error_codes() {
            anyhow::bail!("The service returned errors: {}", codes.join(", "));
        }

        let item = document
            .first_item()
            .with_context(|| format!("No item found for ASIN {}", asin))?;
        let summary = ItemSummary::from_item(item);

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_item(&summary))
    }

    /// Looks up multiple ASINs, skipping ones that fail.
    pub async fn execute_batch(&self, asins: &[String]) -> Result<String> {
        let mut client = SearchClient::new(&self.config).context("Failed to create client")?;

        self.execute_batch_with_client(&mut client, asins).await
    }

    /// Looks up multiple ASINs with a provided client (for testing).
    pub async fn execute_batch_with_client(
        &self,
        client: &mut SearchClient,
        asins: &[String],
    ) -> Result<String> {
        let mut summaries: Vec<ItemSummary> = Vec::new();

        for asin in asins {
            let asin = match validate_asin(asin) {
                Ok(asin) => asin,
                Err(e) => {
                    eprintln!("Skipping invalid ASIN: {}", e);
                    continue;
                }
            };

            info!("Looking up item: {}", asin);

            match client.item_lookup(&asin).await {
                Ok(document) => {
                    if let Some(codes) = document.error_codes() {
                        eprintln!("Lookup of {} failed: {}", asin, codes.join(", "));
                    } else {
                        summaries.extend(document.items().into_iter().map(ItemSummary::from_item));
                    }
                }
                Err(e) => eprintln!("Failed to fetch {}: {}", asin, e),
            }
        }

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_items(&summaries))
    }
}

/// Validates ASIN format (10 alphanumeric characters) and normalizes
/// to upper case.
fn validate_asin(asin: &str) -> Result<String> {
    let asin = asin.trim().to_uppercase();
    if asin.len() != 10 || !asin.chars().all(|c| c.is_ascii_alphanumeric()) {
        anyhow::bail!(
            "Invalid ASIN format: '{}'. ASIN should be 10 alphanumeric characters.",
            asin
        );
    }
    Ok(asin)
}
