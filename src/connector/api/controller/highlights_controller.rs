use anyhow::Result;

use crate::Highlight;

use super::super::Container;

pub struct HighlightsController<'a> {
    container: &'a Container,
}

impl<'a> HighlightsController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn highlights(&self, query: String) -> Result<String> {
        let use_case = self.container.get_highlights_use_case();
        let highlights = use_case.execute(&query).await?;
        Ok(self.format_highlights(&highlights))
    }

    fn format_highlights(&self, highlights: &[Highlight]) -> String {
        if highlights.is_empty() {
            return "No highlights found.".to_string();
        }

        let mut output = format!("Found {} highlights:\n\n", highlights.len());
        for (i, highlight) in highlights.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, highlight.title()));

            let details: Vec<&str> = [highlight.competition(), highlight.published_at()]
                .into_iter()
                .flatten()
                .collect();
            if !details.is_empty() {
                output.push_str(&format!("   {}\n", details.join(" | ")));
            }
            output.push_str(&format!("   {}\n", highlight.video_url()));
        }
        output
    }
}
