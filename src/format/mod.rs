//! Output formatting for result items (table, JSON, markdown, CSV).

use crate::aws::ItemSummary;
use crate::config::OutputFormat;

/// Formats item summaries for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a single item.
    pub fn format_item(&self, item: &ItemSummary) -> String {
        match self.format {
            OutputFormat::Json => self.json_single(item),
            OutputFormat::Table => self.table_single(item),
            OutputFormat::Markdown => self.markdown_single(item),
            OutputFormat::Csv => self.csv_items(std::slice::from_ref(item)),
        }
    }

    /// Formats multiple items.
    pub fn format_items(&self, items: &[ItemSummary]) -> String {
        if items.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => "No items found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_items(items),
            OutputFormat::Table => self.table_items(items),
            OutputFormat::Markdown => self.markdown_items(items),
            OutputFormat::Csv => self.csv_items(items),
        }
    }

    // JSON formatting

    fn json_single(&self, item: &ItemSummary) -> String {
        serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string())
    }

    fn json_items(&self, items: &[ItemSummary]) -> String {
        serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_single(&self, item: &ItemSummary) -> String {
        let mut lines = Vec::new();

        lines.push(format!("ASIN:     {}", or_na(&item.asin)));
        lines.push(format!("Title:    {}", or_na(&item.title)));
        lines.push(format!("Group:    {}", or_na(&item.product_group)));
        lines.push(format!("Binding:  {}", or_na(&item.binding)));

        if !item.authors.is_empty() {
            lines.push(format!("Authors:  {}", item.authors.join(", ")));
        }
        if !item.actors.is_empty() {
            lines.push(format!("Actors:   {}", item.actors.join(", ")));
        }
        if !item.directors.is_empty() {
            lines.push(format!("Director: {}", item.directors.join(", ")));
        }
        if !item.genres.is_empty() {
            lines.push(format!("Genres:   {}", item.genres.join(", ")));
        }
        if let Some(released) = &item.released {
            lines.push(format!("Released: {}", released));
        }
        if let Some(image_url) = &item.image_url {
            lines.push(format!("Image:    {}", image_url));
        }

        lines.push(format!("URL:      {}", or_na(&item.detail_page_url)));

        lines.join("\n")
    }

    fn table_items(&self, items: &[ItemSummary]) -> String {
        let asin_width = 12;
        let binding_width = 22;
        let group_width = 12;
        let title_width = 50;

        let mut lines = Vec::new();

        // Header
        lines.push(format!(
            "{:<asin_width$}  {:<group_width$}  {:<binding_width$}  {}",
            "ASIN", "Group", "Binding", "Title"
        ));
        lines.push(format!(
            "{:-<asin_width$}  {:-<group_width$}  {:-<binding_width$}  {:-<title_width$}",
            "", "", "", ""
        ));

        // Rows
        for item in items {
            let title = or_na(&item.title);
            let title = if title.len() > title_width {
                format!("{}...", &title[..title_width - 3])
            } else {
                title
            };

            lines.push(format!(
                "{:<asin_width$}  {:<group_width$}  {:<binding_width$}  {}",
                or_na(&item.asin),
                or_na(&item.product_group),
                or_na(&item.binding),
                title
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} items", items.len()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_single(&self, item: &ItemSummary) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## {}", or_na(&item.title)));
        lines.push(String::new());

        lines.push(format!("- **ASIN:** {}", or_na(&item.asin)));
        if let Some(url) = &item.detail_page_url {
            lines.push(format!("- **URL:** [View product]({})", url));
        }
        if let Some(group) = &item.product_group {
            lines.push(format!("- **Group:** {}", group));
        }
        if let Some(binding) = &item.binding {
            lines.push(format!("- **Binding:** {}", binding));
        }
        if !item.authors.is_empty() {
            lines.push(format!("- **Authors:** {}", item.authors.join(", ")));
        }
        if !item.actors.is_empty() {
            lines.push(format!("- **Actors:** {}", item.actors.join(", ")));
        }
        if let Some(released) = &item.released {
            lines.push(format!("- **Released:** {}", released));
        }

        lines.join("\n")
    }

    fn markdown_items(&self, items: &[ItemSummary]) -> String {
        let mut lines = Vec::new();

        lines.push("| ASIN | Group | Binding | Title |".to_string());
        lines.push("|------|-------|---------|-------|".to_string());

        for item in items {
            let title = or_na(&item.title);
            let title = if title.len() > 40 { format!("{}...", &title[..37]) } else { title };

            let cell = match &item.detail_page_url {
                Some(url) => format!("[{}]({})", title, url),
                None => title,
            };

            lines.push(format!(
                "| {} | {} | {} | {} |",
                or_na(&item.asin),
                or_na(&item.product_group),
                or_na(&item.binding),
                cell
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} items found*", items.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "asin,title,product_group,binding,authors,actors,released,url".to_string()
    }

    fn csv_items(&self, items: &[ItemSummary]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for item in items {
            lines.push(format!(
                "{},{},{},{},{},{},{},{}",
                item.asin.as_deref().unwrap_or_default(),
                Self::csv_escape(item.title.as_deref().unwrap_or_default()),
                item.product_group.as_deref().unwrap_or_default(),
                Self::csv_escape(item.binding.as_deref().unwrap_or_default()),
                Self::csv_escape(&item.authors.join("; ")),
                Self::csv_escape(&item.actors.join("; ")),
                item.released.as_deref().unwrap_or_default(),
                item.detail_page_url.as_deref().unwrap_or_default()
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

fn or_na(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "N/A".to_string())
}
