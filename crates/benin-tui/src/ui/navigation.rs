use super::theme::Theme;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: String,
    pub hotkey: char,
}

impl MenuItem {
    pub fn new(id: &'static str, label: impl Into<String>, hotkey: char) -> Self {
        Self {
            id,
            label: label.into(),
            hotkey,
        }
    }
}

/// Radio-style menu: exactly one entry is active at a time.
#[derive(Clone, Debug)]
pub struct NavMenu {
    pub title: String,
    pub items: Vec<MenuItem>,
    active: usize,
}

impl NavMenu {
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>, active: usize) -> Self {
        let active = if items.is_empty() {
            0
        } else {
            active.min(items.len() - 1)
        };
        Self {
            title: title.into(),
            items,
            active,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_item(&self) -> Option<&MenuItem> {
        self.items.get(self.active)
    }

    /// Returns `true` when the hotkey matched an entry.
    pub fn select_by_hotkey(&mut self, hotkey: char) -> bool {
        match self.items.iter().position(|item| item.hotkey == hotkey) {
            Some(idx) => {
                self.active = idx;
                true
            }
            None => false,
        }
    }

    pub fn select_by_id(&mut self, id: &str) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(idx) => {
                self.active = idx;
                true
            }
            None => false,
        }
    }

    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.active = (self.active + 1) % self.items.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.items.is_empty() {
            self.active = if self.active == 0 {
                self.items.len() - 1
            } else {
                self.active - 1
            };
        }
    }

    /// Sidebar column: title, then one radio line per entry.
    pub fn render_sidebar(&self, theme: &Theme) -> Vec<String> {
        let mut lines = vec![format!("{} {}", theme.accent, self.title), String::new()];
        for (idx, item) in self.items.iter().enumerate() {
            let radio = if idx == self.active {
                theme.radio_on
            } else {
                theme.radio_off
            };
            lines.push(format!("{radio} {} {}", item.hotkey, item.label));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> NavMenu {
        NavMenu::new(
            "Explore :",
            vec![
                MenuItem::new("home", "Accueil", '1'),
                MenuItem::new("population", "Population", '2'),
                MenuItem::new("pib", "PIB", '3'),
            ],
            0,
        )
    }

    #[test]
    fn test_initial_selection_is_clamped() {
        let menu = NavMenu::new("m", vec![MenuItem::new("a", "A", '1')], 5);
        assert_eq!(menu.active_index(), 0);
    }

    #[test]
    fn test_select_by_hotkey() {
        let mut menu = menu();
        assert!(menu.select_by_hotkey('3'));
        assert_eq!(menu.active_item().unwrap().id, "pib");
        assert!(!menu.select_by_hotkey('x'));
        assert_eq!(menu.active_item().unwrap().id, "pib");
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut menu = menu();
        menu.previous();
        assert_eq!(menu.active_item().unwrap().id, "pib");
        menu.next();
        assert_eq!(menu.active_item().unwrap().id, "home");
    }

    #[test]
    fn test_sidebar_marks_only_active_entry() {
        let mut menu = menu();
        menu.select_by_id("population");
        let lines = menu.render_sidebar(&Theme::new());
        assert_eq!(lines[0], "▍ Explore :");
        assert_eq!(lines.iter().filter(|l| l.starts_with('◉')).count(), 1);
        assert!(lines.contains(&"◉ 2 Population".to_string()));
        assert!(lines.contains(&"○ 1 Accueil".to_string()));
    }
}
