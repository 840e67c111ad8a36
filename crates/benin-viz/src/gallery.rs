//! Project cards for the infrastructure view.
//!
//! Each [`ProjectRecord`] maps to one [`RenderedCard`], in input order. A
//! record whose image is missing from the assets directory is skipped and
//! reported in [`GalleryRender::skipped`]; the remaining records still render.

use std::path::{Path, PathBuf};

use benin_core::{AssetMissing, ProjectRecord};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCard {
    pub heading: String,
    pub image: PathBuf,
    pub description: String,
}

impl RenderedCard {
    /// Heading, image reference, description, then `rule` as separator.
    pub fn render_lines(&self, rule: &str) -> Vec<String> {
        vec![
            format!("### {}", self.heading),
            format!("🖼  {}", self.image.display()),
            self.description.clone(),
            rule.to_string(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GalleryRender {
    pub cards: Vec<RenderedCard>,
    pub skipped: Vec<AssetMissing>,
}

impl GalleryRender {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty() && self.skipped.is_empty()
    }
}

/// Map one record to a card, checking that its image exists.
pub fn render_card(record: &ProjectRecord, assets_dir: &Path) -> Result<RenderedCard, AssetMissing> {
    let image = assets_dir.join(&record.image);
    if !image.is_file() {
        return Err(AssetMissing {
            project: record.name.clone(),
            path: image,
        });
    }
    Ok(RenderedCard {
        heading: record.heading(),
        image,
        description: record.description.clone(),
    })
}

pub fn render_projects(projects: &[ProjectRecord], assets_dir: &Path) -> GalleryRender {
    let mut out = GalleryRender::default();
    for record in projects {
        match render_card(record, assets_dir) {
            Ok(card) => out.cards.push(card),
            Err(missing) => {
                warn!(project = %missing.project, path = %missing.path.display(), "project image missing, card skipped");
                out.skipped.push(missing);
            }
        }
    }
    out
}
