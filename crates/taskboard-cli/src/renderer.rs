//! Terminal rendering of markdown output.

use termimad::{crossterm::style::Color, MadSkin};

/// Prints markdown either through a termimad skin or as plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    pub fn render(&self, markdown: &str) {
        if !self.rich_enabled {
            print!("{markdown}");
            return;
        }

        // Headers are printed verbatim, hashes included.
        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[34m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        assert!(!TerminalRenderer::new(false).rich_enabled);
        assert!(TerminalRenderer::new(true).rich_enabled);
    }
}
