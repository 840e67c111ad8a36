use std::path::PathBuf;
use std::sync::Arc;

use benin_io::DatasetStore;
use tracing::debug;

use super::navigation::{MenuItem, NavMenu};
use super::theme::Theme;
use super::Pane;

/// Everything a view needs to render itself.
#[derive(Clone, Debug)]
pub struct PaneContext {
    pub store: Arc<DatasetStore>,
    pub assets_dir: PathBuf,
    pub projects_file: PathBuf,
    pub theme: Theme,
    pub content_width: usize,
    pub chart_height: usize,
}

impl PaneContext {
    pub fn new(store: Arc<DatasetStore>, assets_dir: impl Into<PathBuf>) -> Self {
        let projects_file = store.data_dir().join(benin_io::PROJECTS_FILE);
        Self {
            store,
            assets_dir: assets_dir.into(),
            projects_file,
            theme: Theme::default(),
            content_width: 76,
            chart_height: 12,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_chart_height(mut self, height: usize) -> Self {
        self.chart_height = height;
        self
    }
}

/// One selectable dashboard view.
pub trait PaneView {
    fn id(&self) -> &'static str;
    fn label(&self) -> &'static str;
    fn hotkey(&self) -> char;
    fn render(&self, context: &PaneContext) -> Pane;
}

/// Lookup table from menu position to view.
pub struct PanelRegistry {
    context: PaneContext,
    panes: Vec<Box<dyn PaneView>>,
}

impl PanelRegistry {
    pub fn new(context: PaneContext) -> Self {
        Self {
            context,
            panes: Vec::new(),
        }
    }

    pub fn register(mut self, pane: impl PaneView + 'static) -> Self {
        self.panes.push(Box::new(pane));
        self
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn context(&self) -> &PaneContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut PaneContext {
        &mut self.context
    }

    pub fn build_menu(&self, title: impl Into<String>) -> NavMenu {
        let items = self
            .panes
            .iter()
            .map(|pane| MenuItem::new(pane.id(), pane.label(), pane.hotkey()))
            .collect();
        NavMenu::new(title, items, 0)
    }

    /// Render the view at `index`, and only that one.
    pub fn render(&self, index: usize) -> Option<Pane> {
        let pane = self.panes.get(index)?;
        debug!(view = pane.id(), "rendering view");
        Some(pane.render(&self.context))
    }
}
