//! Terminal rendering for markdown output
//!
//! Every command formats its result as markdown through the `Display`
//! impls in `larder_core`. This module turns that markdown into terminal
//! output: styled through termimad by default, or written unchanged when
//! `--no-color` is given so the output stays greppable and pipe-friendly.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, Alignment, MadSkin};

/// Terminal renderer that can switch between rich and plain text output.
///
/// The renderer owns a termimad skin configured once at construction:
/// blue left-aligned headers for item titles, yellow bold text for status
/// labels such as `Success:` and `Notice:`, and a dark background for
/// inline code.
///
/// # Output
///
/// - Rich mode writes the styled text to stdout through the skin
/// - Plain mode writes the markdown source to stdout byte for byte
/// - Write failures (for example a closed pipe) are returned as errors
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer, styled when `rich_enabled` is set
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        for header in &mut skin.headers {
            header.align = Alignment::Left;
        }
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error when stdout cannot be written.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            self.skin.write_text(markdown)?;
        } else {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{markdown}")?;
            stdout.flush()?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("No items found.\n").is_ok());
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
