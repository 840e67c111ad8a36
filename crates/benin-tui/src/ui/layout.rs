use std::fmt::Write;

/// Switches to a stacked layout when the terminal is too narrow for the
/// sidebar and a readable content column side by side.
#[derive(Clone, Debug)]
pub struct ResponsiveRules {
    pub stack_below: u16,
}

impl Default for ResponsiveRules {
    fn default() -> Self {
        Self { stack_below: 80 }
    }
}

impl ResponsiveRules {
    pub fn should_stack(&self, width: u16) -> bool {
        width < self.stack_below
    }
}

/// Sidebar on the left, active view on the right.
#[derive(Clone, Debug)]
pub struct PaneLayout {
    pub sidebar_width: usize,
    pub gap: &'static str,
    pub responsive: ResponsiveRules,
}

impl PaneLayout {
    pub fn new(sidebar_width: usize, gap: &'static str) -> Self {
        Self {
            sidebar_width,
            gap,
            responsive: ResponsiveRules::default(),
        }
    }

    /// Columns left for the active view at a given terminal width.
    pub fn content_width(&self, width: u16) -> usize {
        let stacked = self.responsive.should_stack(width);
        let width = usize::from(width);
        if stacked {
            width.max(20)
        } else {
            width
                .saturating_sub(self.sidebar_width + self.gap.chars().count())
                .max(20)
        }
    }

    pub fn render_into(&self, output: &mut String, sidebar: &[String], content: &[String], width: u16) {
        if self.responsive.should_stack(width) {
            for line in sidebar.iter().chain(std::iter::once(&String::new())).chain(content) {
                let _ = writeln!(output, "{}", line.trim_end());
            }
            return;
        }

        let rows = sidebar.len().max(content.len());
        for idx in 0..rows {
            let left = sidebar.get(idx).map(String::as_str).unwrap_or("");
            let right = content.get(idx).map(String::as_str).unwrap_or("");
            let pad = self.sidebar_width.saturating_sub(visible_width(left));
            let line = format!("{left}{}{}{right}", " ".repeat(pad), self.gap);
            let _ = writeln!(output, "{}", line.trim_end());
        }
    }
}

/// Character count ignoring ANSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in text.chars() {
        match (in_escape, c) {
            (false, '\x1b') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, _) => width += 1,
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_side_by_side() {
        let layout = PaneLayout::new(6, " | ");
        let mut out = String::new();
        layout.render_into(&mut out, &lines(&["Menu", "a"]), &lines(&["Titre", "x", "y"]), 100);
        let rendered: Vec<&str> = out.lines().collect();
        assert_eq!(rendered, vec!["Menu   | Titre", "a      | x", "       | y"]);
    }

    #[test]
    fn test_stacked_when_narrow() {
        let layout = PaneLayout::new(6, " | ");
        let mut out = String::new();
        layout.render_into(&mut out, &lines(&["Menu"]), &lines(&["Titre"]), 40);
        assert_eq!(out, "Menu\n\nTitre\n");
        assert_eq!(layout.content_width(40), 40);
    }

    #[test]
    fn test_content_width() {
        let layout = PaneLayout::new(30, " │ ");
        assert_eq!(layout.content_width(110), 77);
    }

    #[test]
    fn test_visible_width_skips_escapes() {
        assert_eq!(visible_width("\x1b[1mPIB\x1b[0m"), 3);
        assert_eq!(visible_width("Élections"), 9);
    }
}
