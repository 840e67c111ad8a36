//! The nine dashboard views and the registry that wires them to the menu.

mod home;
mod projects;
mod series;
mod trivia;

pub use home::HomePane;
pub use projects::ProjectsPane;
pub use series::{SeriesPane, SERIES};
pub use trivia::TriviaPane;

use crate::ui::{AppShell, PaneContext, PanelRegistry, Tooltip};

pub const APP_TITLE: &str = "🇧🇯 65 ans d’indépendance en données";
pub const APP_SUBTITLE: &str = "Un voyage visuel à travers l’évolution du Bénin depuis 1960";
pub const MENU_TITLE: &str = "Explore :";
pub const FOOTER: &str = "Projet de visualisation réalisé par Eulalie O. IDJATON – 2025 ©";
pub const KEY_HINT: &str = "1-9 : choisir une vue · ↑/↓ : naviguer · r : rafraîchir · q : quitter";

/// Menu entries, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Population,
    Pib,
    Alphabetisation,
    Electricite,
    Internet,
    Elections,
    Projects,
    Trivia,
}

impl View {
    pub const ALL: [View; 9] = [
        View::Home,
        View::Population,
        View::Pib,
        View::Alphabetisation,
        View::Electricite,
        View::Internet,
        View::Elections,
        View::Projects,
        View::Trivia,
    ];

    pub fn id(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Population => "population",
            View::Pib => "pib",
            View::Alphabetisation => "alphabetisation",
            View::Electricite => "electricite",
            View::Internet => "internet",
            View::Elections => "elections",
            View::Projects => "projets",
            View::Trivia => "trivia",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Accueil",
            View::Population => "Population",
            View::Pib => "PIB",
            View::Alphabetisation => "Alphabétisation",
            View::Electricite => "Électricité",
            View::Internet => "Internet",
            View::Elections => "Élections",
            View::Projects => "Projets & Infrastructures",
            View::Trivia => "Le savais-tu ?",
        }
    }

    pub fn hotkey(self) -> char {
        match self {
            View::Home => '1',
            View::Population => '2',
            View::Pib => '3',
            View::Alphabetisation => '4',
            View::Electricite => '5',
            View::Internet => '6',
            View::Elections => '7',
            View::Projects => '8',
            View::Trivia => '9',
        }
    }

    pub fn from_id(id: &str) -> Option<View> {
        View::ALL.into_iter().find(|view| view.id() == id)
    }
}

/// Registry holding one pane per [`View`], in menu order.
pub fn default_registry(context: PaneContext) -> PanelRegistry {
    let mut registry = PanelRegistry::new(context).register(HomePane);
    for series in SERIES {
        registry = registry.register(series);
    }
    registry.register(ProjectsPane).register(TriviaPane)
}

/// The full dashboard: header, menu, active view and footer.
pub fn build_shell(context: PaneContext) -> AppShell {
    AppShell::new(APP_TITLE, MENU_TITLE, default_registry(context))
        .with_subtitle(APP_SUBTITLE)
        .with_footer(FOOTER)
        .with_tooltip(Tooltip::new(KEY_HINT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_views_have_unique_ids_and_hotkeys() {
        let ids: HashSet<_> = View::ALL.iter().map(|v| v.id()).collect();
        let keys: HashSet<_> = View::ALL.iter().map(|v| v.hotkey()).collect();
        assert_eq!(ids.len(), 9);
        assert_eq!(keys.len(), 9);
        assert_eq!(View::from_id("projets"), Some(View::Projects));
        assert_eq!(View::from_id("inconnu"), None);
    }
}
