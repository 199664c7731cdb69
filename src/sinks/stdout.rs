use crate::base::algorithms::{breadcrumb_levels, pretty_json};
use crate::base::enums::OperationType;
use crate::base::traits::{DisplaySink, ResultReporter};
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use tokio::io::AsyncWriteExt;

/// Prints fetched JSON to stdout, optionally followed by a breadcrumb summary.
#[derive(Debug, Clone, Default)]
pub struct StdoutDisplay {
    summary: bool,
}

impl StdoutDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }

    pub fn render(&self, data: &Value) -> Result<String> {
        let mut out = pretty_json(data)?;
        out.push('\n');
        if self.summary {
            for level in breadcrumb_levels(data) {
                out.push_str(&format!(
                    "{:<12} {:<24} {}\n",
                    level.level_type,
                    level.id,
                    level.name.as_deref().unwrap_or("-")
                ));
            }
        }
        Ok(out)
    }
}

#[async_trait]
impl DisplaySink for StdoutDisplay {
    async fn display(&self, data: &Value) -> Result<()> {
        let rendered = self.render(data)?;
        let mut stdout = tokio::io::stdout();
        stdout.write_all(rendered.as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl ResultReporter for StdoutDisplay {
    async fn operation_result(
        &self,
        operation: OperationType,
        code: u32,
        message: String,
    ) -> Result<()> {
        if code == 200 {
            tracing::info!(%operation, "{}", message);
        } else {
            tracing::warn!(%operation, code, "{}", message);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn render_is_pretty_json() {
        let out = StdoutDisplay::new().render(&json!({ "a": 1 })).unwrap();
        assert_eq!(out, "{\n  \"a\": 1\n}\n");
    }

    #[test]
    fn summary_lists_levels() {
        let data = json!([
            { "type": "course", "id": "c1", "name": "Rust" },
            { "type": "lesson", "id": "l1" }
        ]);
        let out = StdoutDisplay::new().with_summary(true).render(&data).unwrap();
        let lines: Vec<&str> = out.lines().rev().take(2).collect();
        assert!(lines[1].starts_with("course") && lines[1].ends_with("Rust"));
        assert!(lines[0].starts_with("lesson") && lines[0].ends_with("-"));
    }
}
