use benin_viz::Rgb;
use serde::{Deserialize, Serialize};

/// Glyph set used to draw frames, menus and callouts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub accent: &'static str,
    pub muted: &'static str,
    pub heavy_border: &'static str,
    pub light_border: &'static str,
    pub column_gap: &'static str,
    pub empty_icon: &'static str,
    pub radio_on: &'static str,
    pub radio_off: &'static str,
    pub pane_marker: &'static str,
    pub success_icon: &'static str,
    pub info_icon: &'static str,
    pub warning_icon: &'static str,
    pub error_icon: &'static str,
}

impl Theme {
    pub const fn new() -> Self {
        Self {
            accent: "▍",
            muted: "·",
            heavy_border: "━",
            light_border: "─",
            column_gap: " │ ",
            empty_icon: "◌",
            radio_on: "◉",
            radio_off: "○",
            pane_marker: "▶",
            success_icon: "✔",
            info_icon: "ℹ",
            warning_icon: "⚠",
            error_icon: "✖",
        }
    }

    /// ASCII-only theme for terminals without UTF-8 support
    pub const fn ascii() -> Self {
        Self {
            accent: "|",
            muted: ".",
            heavy_border: "=",
            light_border: "-",
            column_gap: " | ",
            empty_icon: "o",
            radio_on: "(*)",
            radio_off: "( )",
            pane_marker: ">",
            success_icon: "[ok]",
            info_icon: "[i]",
            warning_icon: "[!]",
            error_icon: "[x]",
        }
    }

    /// Pick a theme based on the locale
    pub fn auto() -> Self {
        if Self::supports_utf8() {
            Self::new()
        } else {
            Self::ascii()
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::auto(),
            ThemeMode::Utf8 => Self::new(),
            ThemeMode::Ascii => Self::ascii(),
        }
    }

    fn supports_utf8() -> bool {
        for var in ["LC_ALL", "LC_CTYPE", "LANG"] {
            if let Ok(value) = std::env::var(var) {
                if !value.is_empty() {
                    let lower = value.to_lowercase();
                    return lower.contains("utf-8") || lower.contains("utf8");
                }
            }
        }
        // Default: assume UTF-8 is available
        true
    }

    pub fn frame_title(&self, title: &str) -> String {
        let rail = self.heavy_border.repeat(4);
        format!("{rail} {title} {rail}")
    }

    pub fn divider(&self, length: usize) -> String {
        self.light_border.repeat(length)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Auto,
    Utf8,
    Ascii,
}

/// Flag colours used for headings and the active menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub green: Rgb,
    pub yellow: Rgb,
    pub red: Rgb,
}

pub const PALETTE: Palette = Palette {
    green: Rgb(0x00, 0x87, 0x51),
    yellow: Rgb(0xFC, 0xD1, 0x16),
    red: Rgb(0xE8, 0x11, 0x2D),
};

#[derive(Clone, Debug)]
pub struct EmptyState {
    pub label: String,
    pub guidance: Vec<String>,
}

impl EmptyState {
    pub fn new(
        label: impl Into<String>,
        guidance: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            label: label.into(),
            guidance: guidance.into_iter().map(|g| g.into()).collect(),
        }
    }

    /// Icon line, then one muted line per hint.
    pub fn render_lines(&self, theme: &Theme) -> Vec<String> {
        std::iter::once(format!("{} {}", theme.empty_icon, self.label))
            .chain(self.guidance.iter().map(|tip| format!("{} {tip}", theme.muted)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selection() {
        assert_eq!(Theme::for_mode(ThemeMode::Ascii), Theme::ascii());
        assert_eq!(Theme::for_mode(ThemeMode::Utf8), Theme::new());
    }

    #[test]
    fn test_frame_title() {
        assert_eq!(Theme::ascii().frame_title("Bénin"), "==== Bénin ====");
    }

    #[test]
    fn test_empty_state_lines() {
        let empty = EmptyState::new("Aucun projet", ["Ajoutez des lignes à projets.csv"]);
        let lines = empty.render_lines(&Theme::new());
        assert_eq!(lines, vec!["◌ Aucun projet", "· Ajoutez des lignes à projets.csv"]);
    }

    #[test]
    fn test_palette_matches_flag() {
        assert_eq!(PALETTE.green.to_hex(), "#008751");
        assert_eq!(PALETTE.yellow.to_hex(), "#FCD116");
        assert_eq!(PALETTE.red.to_hex(), "#E8112D");
    }
}
