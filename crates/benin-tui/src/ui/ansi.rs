//! ANSI escape sequences for the header and the active menu entry.
//!
//! Output is plain text unless the shell is built with colours enabled, so
//! rendered frames stay comparable in tests.

use benin_viz::Rgb;

pub const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Text style made of optional 24-bit colours and weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Paint {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub bold: bool,
}

impl Paint {
    pub fn fg(color: Rgb) -> Self {
        Self {
            fg: Some(color),
            ..Self::default()
        }
    }

    pub fn on(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn apply<S: AsRef<str>>(&self, text: S) -> String {
        let mut prefix = String::new();
        if self.bold {
            prefix.push_str(BOLD);
        }
        if let Some(Rgb(r, g, b)) = self.fg {
            prefix.push_str(&format!("\x1b[38;2;{r};{g};{b}m"));
        }
        if let Some(Rgb(r, g, b)) = self.bg {
            prefix.push_str(&format!("\x1b[48;2;{r};{g};{b}m"));
        }
        if prefix.is_empty() {
            return text.as_ref().to_string();
        }
        format!("{prefix}{}{RESET}", text.as_ref())
    }
}
