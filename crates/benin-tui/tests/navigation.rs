use std::path::PathBuf;
use std::sync::Arc;

use benin_io::DatasetStore;
use benin_tui::ui::{PaneContext, Theme};
use benin_tui::{App, View};

const PANE_TITLES: [(View, &str); 9] = [
    (View::Home, "Résumé dynamique"),
    (View::Population, "Évolution de la population béninoise"),
    (View::Pib, "Produit Intérieur Brut (PIB) du Bénin"),
    (View::Alphabetisation, "Taux d'alphabétisation (%)"),
    (View::Electricite, "Accès à l'électricité (%)"),
    (View::Internet, "Accès à Internet (%)"),
    (View::Elections, "Taux de participation aux élections présidentielles"),
    (View::Projects, "🏗️ Infrastructures et Projets réalisés"),
    (View::Trivia, "Historiques"),
];

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn app_on(data_dir: PathBuf, assets_dir: PathBuf) -> App {
    let store = Arc::new(DatasetStore::new(data_dir));
    App::new(PaneContext::new(store, assets_dir).with_theme(Theme::new()))
}

fn shipped_app() -> App {
    let root = repo_root();
    app_on(root.join("data"), root.join("assets/projets"))
}

fn assert_only_view(frame: &str, view: View) {
    for (candidate, title) in PANE_TITLES {
        if candidate == view {
            assert!(frame.contains(title), "{view:?} frame is missing its title {title:?}");
        } else {
            assert!(
                !frame.contains(title),
                "{view:?} frame also rendered {candidate:?}"
            );
        }
    }
    assert_eq!(frame.matches("▶ ").count(), 1, "exactly one pane per frame");
}

#[test]
fn starts_on_home() {
    let app = shipped_app();
    assert_eq!(app.active_view(), Some(View::Home));
    assert_only_view(&app.render(), View::Home);
}

#[test]
fn each_selection_renders_exactly_one_view() {
    let mut app = shipped_app();
    for view in View::ALL {
        assert!(app.select(view));
        assert_eq!(app.active_view(), Some(view));
        assert_only_view(&app.render(), view);
    }
}

#[test]
fn selection_order_does_not_leak_between_views() {
    let mut app = shipped_app();
    app.select(View::Trivia);
    let trivia_first = app.render();
    app.select(View::Pib);
    app.select(View::Projects);
    app.select(View::Trivia);
    assert_eq!(app.render(), trivia_first);
}

#[test]
fn every_frame_has_header_menu_and_footer() {
    let mut app = shipped_app();
    for view in View::ALL {
        app.select(view);
        let frame = app.render();
        assert!(frame.contains("🇧🇯 65 ans d’indépendance en données"));
        assert!(frame.contains("Un voyage visuel à travers l’évolution du Bénin depuis 1960"));
        assert!(frame.contains("Explore :"));
        assert!(frame.contains(&format!("◉ {} {}", view.hotkey(), view.label())));
        assert_eq!(frame.matches('◉').count(), 1);
        assert!(frame.contains("Projet de visualisation réalisé par Eulalie O. IDJATON – 2025 ©"));
    }
}

#[test]
fn home_summarizes_shipped_population() {
    let frame = shipped_app().render();
    assert!(frame.contains("2,431,620"));
    assert!(frame.contains("14,462,724"));
    assert!(frame.contains("Explorez"));
}

#[test]
fn missing_data_is_reported_per_view() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_on(dir.path().to_path_buf(), dir.path().to_path_buf());
    for view in View::ALL {
        app.select(view);
        let frame = app.render();
        assert_only_view(&frame, view);
        if view != View::Trivia {
            assert!(frame.contains('✖'), "{view:?} should show an error block");
        }
    }
}

#[test]
fn corrupt_series_only_breaks_its_own_view() {
    let root = repo_root();
    let dir = tempfile::tempdir().unwrap();
    for entry in std::fs::read_dir(root.join("data")).unwrap() {
        let path = entry.unwrap().path();
        std::fs::copy(&path, dir.path().join(path.file_name().unwrap())).unwrap();
    }
    std::fs::write(dir.path().join("internet.csv"), "Année,Acces_internet\n2000,abc\n").unwrap();

    let mut app = app_on(dir.path().to_path_buf(), root.join("assets/projets"));
    assert!(app.render().contains("14,462,724"));
    for view in View::ALL {
        app.select(view);
        let frame = app.render();
        assert_only_view(&frame, view);
        if view == View::Internet {
            assert!(frame.contains('✖'), "Internet should show an error block");
        } else {
            assert!(!frame.contains('✖'), "{view:?} should not be affected by internet.csv");
        }
    }
}
