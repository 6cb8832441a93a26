use console::{style, Color};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::ai::SENTINEL;

pub struct OutputFormatter {
    use_colors: bool,
}

/// Stderr spinner shown while the model is thinking.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "]),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    pub fn stop(self) {
        self.bar.finish_and_clear();
    }
}

impl OutputFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Highlights the extracted list, or flags the sentinel as a warning.
    pub fn format_result(&self, result: &str) -> String {
        if result == SENTINEL {
            return self.style_text(result, Color::Yellow);
        }

        match result.find('[') {
            Some(idx) => {
                let (lead, list) = result.split_at(idx);
                format!("{lead}{}", self.style_text(list, Color::Green))
            }
            None => result.to_string(),
        }
    }

    pub fn format_error(&self, message: &str) -> String {
        format!("{} {}", self.style_text("Error:", Color::Red), message)
    }

    pub fn format_success(&self, message: &str) -> String {
        format!("{} {}", self.style_text("✓", Color::Green), message)
    }

    pub fn format_warning(&self, message: &str) -> String {
        format!("{} {}", self.style_text("⚠", Color::Yellow), message)
    }

    pub fn format_info(&self, message: &str) -> String {
        format!("{} {}", self.style_text("ℹ", Color::Blue), message)
    }

    fn style_text(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            style(text).fg(color).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_is_unchanged() {
        let formatter = OutputFormatter::new(false);
        assert_eq!(
            formatter.format_result("The sorted list is [1, 2]"),
            "The sorted list is [1, 2]"
        );
        assert_eq!(formatter.format_result(SENTINEL), SENTINEL);
        assert_eq!(formatter.format_error("boom"), "Error: boom");
    }

    #[test]
    fn coloured_output_keeps_text() {
        let formatter = OutputFormatter::new(true);
        let rendered = formatter.format_result("The sorted list is [1, 2]");
        assert!(rendered.starts_with("The sorted list is "));
        assert!(console::strip_ansi_codes(&rendered).contains("[1, 2]"));
    }
}
