use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, OutputFormat};

pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    /// Colors follow whether stdout is a terminal.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Text output as a string; `render` prints exactly this.
    pub fn render_text<T>(&self, result: &CommandResultViewModel<T>) -> String
    where
        T: Serialize + CreateView,
    {
        let mut out = String::new();

        if let Some(badge) = &result.badge {
            if self.color {
                out.push_str(&format!("{} {}\n\n", badge.icon(), badge.label.bold()));
            } else {
                out.push_str(&format!("{} {}\n\n", badge.icon(), badge.label));
            }
        }

        out.push_str(&result.content.create_view(self.color).to_string());

        if !result.suggestions.is_empty() {
            if self.color {
                out.push_str(&format!("\n{}\n", "💡 Tips:".yellow().bold()));
            } else {
                out.push_str("\n💡 Tips:\n");
            }
            for tip in &result.suggestions {
                out.push_str(&format!("  • {}", tip.description));
                if let Some(cmd) = &tip.command {
                    if self.color {
                        out.push_str(&format!(": {}", cmd.cyan()));
                    } else {
                        out.push_str(&format!(": {}", cmd));
                    }
                }
                out.push('\n');
            }
        }

        out
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            OutputFormat::Text => print!("{}", self.render_text(&result)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{
        Guidance, ResetViewModel, StatusBadge,
    };

    #[test]
    fn test_plain_text_has_no_ansi_codes() {
        let result = CommandResultViewModel::new(ResetViewModel { removed: 3 })
            .with_badge(StatusBadge::success("Reset"))
            .with_suggestion(Guidance::new("Start over").with_command("folio wizard"));

        let text = ConsoleRenderer::new(OutputFormat::Text)
            .with_color(false)
            .render_text(&result);

        assert!(!text.contains('\u{1b}'));
        assert!(text.starts_with("✅ Reset\n\n"));
        assert!(text.contains("Removed 3 stored value(s)"));
        assert!(text.contains("  • Start over: folio wizard"));
    }

    #[test]
    fn test_json_envelope_omits_empty_parts() {
        let result = CommandResultViewModel::new(ResetViewModel { removed: 0 });
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({ "content": { "removed": 0 } }));
    }
}
