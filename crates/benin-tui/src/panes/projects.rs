use benin_io::read_projects;
use benin_viz::render_projects;
use tracing::{error, info};

use super::View;
use crate::ui::{Callout, EmptyState, Pane, PaneContext, PaneView};
use crate::utils::wrap;

pub const TITLE: &str = "🏗️ Infrastructures et Projets réalisés";
const INTRO: &str = "Voici quelques grands projets mis en œuvre au Bénin ces dernières années.";

/// Gallery of infrastructure projects. `projets.csv` is re-read on every
/// render so edits show up after a refresh.
pub struct ProjectsPane;

impl PaneView for ProjectsPane {
    fn id(&self) -> &'static str {
        View::Projects.id()
    }

    fn label(&self) -> &'static str {
        View::Projects.label()
    }

    fn hotkey(&self) -> char {
        View::Projects.hotkey()
    }

    fn render(&self, context: &PaneContext) -> Pane {
        let width = context.content_width.saturating_sub(2).max(20);
        let pane = Pane::new(TITLE);

        let projects = match read_projects(&context.projects_file) {
            Ok(projects) => projects,
            Err(err) => {
                error!(path = %context.projects_file.display(), error = %err, "projects unavailable");
                return pane.with_callout(Callout::error(
                    std::iter::once("Projets indisponibles".to_string())
                        .chain(wrap(&err.to_string(), width)),
                ));
            }
        };

        let gallery = render_projects(&projects, &context.assets_dir);
        info!(
            cards = gallery.cards.len(),
            skipped = gallery.skipped.len(),
            "project gallery rendered"
        );

        if gallery.is_empty() {
            return pane.with_empty_state(EmptyState::new(
                "Aucun projet à afficher",
                [format!("Ajoutez des lignes à {}", context.projects_file.display())],
            ));
        }

        let rule = context.theme.divider(width.min(60));
        let mut body = wrap(INTRO, width);
        body.push(String::new());
        for card in &gallery.cards {
            for line in card.render_lines(&rule) {
                if line.chars().count() <= width {
                    body.push(line);
                } else {
                    body.extend(wrap(&line, width));
                }
            }
        }

        let mut pane = pane.body(body);
        if !gallery.skipped.is_empty() {
            pane = pane.with_callout(Callout::warning(
                std::iter::once(format!("{} image(s) introuvable(s) :", gallery.skipped.len()))
                    .chain(gallery.skipped.iter().map(|missing| missing.to_string())),
            ));
        }
        pane
    }
}
