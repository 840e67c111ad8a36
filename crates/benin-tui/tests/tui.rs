use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use benin_io::DatasetStore;
use benin_tui::ui::{PaneContext, Theme};
use benin_tui::{run_tui, App, EventSource, View};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Replays a fixed list of events; running dry is an error so a missing
/// quit key fails the test instead of hanging it.
struct ScriptedEvents {
    events: VecDeque<Event>,
}

impl ScriptedEvents {
    fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        Ok(true)
    }

    fn read(&mut self) -> io::Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

fn press(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn app_on(data_dir: &Path, assets_dir: &Path) -> App {
    let store = Arc::new(DatasetStore::new(data_dir));
    App::new(PaneContext::new(store, assets_dir).with_theme(Theme::new()))
}

fn shipped_app() -> App {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    app_on(&root.join("data"), &root.join("assets/projets"))
}

#[test]
fn scripted_session_draws_after_each_change() {
    let mut app = shipped_app();
    let mut events = ScriptedEvents::new([press('3'), Event::Resize(60, 30), press('q')]);
    let mut out = Vec::new();

    run_tui(&mut out, &mut events, &mut app).unwrap();

    let screen = String::from_utf8(out).unwrap();
    assert_eq!(screen.matches("\x1b[2J").count(), 3);
    assert!(screen.contains("Produit Intérieur Brut (PIB) du Bénin"));
    assert_eq!(app.active_view(), Some(View::Pib));
    assert_eq!(app.shell().viewport(), (60, 30));
}

#[test]
fn key_releases_are_ignored() {
    let mut app = shipped_app();
    let release = Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char('5'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));
    let mut events = ScriptedEvents::new([release, press('q')]);
    let mut out = Vec::new();

    run_tui(&mut out, &mut events, &mut app).unwrap();
    assert_eq!(app.active_view(), Some(View::Home));
}

#[test]
fn exhausted_input_surfaces_as_error() {
    let mut app = shipped_app();
    let mut events = ScriptedEvents::new([]);
    let mut out = Vec::new();
    assert!(run_tui(&mut out, &mut events, &mut app).is_err());
}

#[test]
fn projects_view_skips_missing_images() {
    let dir = tempfile::tempdir().unwrap();
    let assets = dir.path().join("assets");
    fs::create_dir_all(&assets).unwrap();
    fs::write(assets.join("port.png"), b"png").unwrap();
    fs::write(
        dir.path().join("projets.csv"),
        "nom,lieu,annee,fichier,description\n\
         Port de Cotonou,Cotonou,2021,port.png,\"Extension du terminal, quai sud.\"\n\
         Aéroport de Glo-Djigbé,Glo-Djigbé,2025,glo.png,Nouvel aéroport international.\n",
    )
    .unwrap();

    let mut app = app_on(dir.path(), &assets);
    app.select(View::Projects);
    let frame = app.render();

    assert!(frame.contains("### Port de Cotonou (Cotonou – 2021)"));
    assert!(frame.contains("Extension du terminal, quai sud."));
    assert!(!frame.contains("### Aéroport de Glo-Djigbé"));
    assert!(frame.contains("1 image(s) introuvable(s)"));
}

#[test]
fn projects_view_shows_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("projets.csv"), "nom,lieu,annee,fichier,description\n").unwrap();

    let mut app = app_on(dir.path(), dir.path());
    app.select(View::Projects);
    assert!(app.render().contains("◌ Aucun projet à afficher"));
}

#[test]
fn shipped_projects_render_all_cards() {
    let mut app = shipped_app();
    app.select(View::Projects);
    let frame = app.render();
    assert!(frame.contains("Route des Pêches"));
    assert!(!frame.contains("introuvable"));
}
