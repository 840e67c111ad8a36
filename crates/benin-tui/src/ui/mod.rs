use std::fmt::Write;

pub mod ansi;
mod layout;
mod navigation;
mod registry;
mod theme;

pub use ansi::Paint;
pub use layout::{visible_width, PaneLayout, ResponsiveRules};
pub use navigation::{MenuItem, NavMenu};
pub use registry::{PaneContext, PaneView, PanelRegistry};
pub use theme::{EmptyState, Palette, Theme, ThemeMode, PALETTE};

const SIDEBAR_WIDTH: usize = 30;

/// The root container for the terminal experience.
pub struct AppShell {
    pub title: String,
    pub subtitle: Option<String>,
    pub footer: Option<String>,
    pub tooltip: Option<Tooltip>,
    pub menu: NavMenu,
    pub layout: PaneLayout,
    registry: PanelRegistry,
    viewport: (u16, u16),
    ansi: bool,
}

impl AppShell {
    pub fn new(title: impl Into<String>, menu_title: impl Into<String>, registry: PanelRegistry) -> Self {
        let menu = registry.build_menu(menu_title);
        let layout = PaneLayout::new(SIDEBAR_WIDTH, registry.context().theme.column_gap);
        let mut shell = Self {
            title: title.into(),
            subtitle: None,
            footer: None,
            tooltip: None,
            menu,
            layout,
            registry,
            viewport: (110, 40),
            ansi: false,
        };
        shell.resize(110, 40);
        shell
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn with_tooltip(mut self, tooltip: Tooltip) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    pub fn with_viewport(mut self, width: u16, height: u16) -> Self {
        self.resize(width, height);
        self
    }

    pub fn with_ansi(mut self, enabled: bool) -> Self {
        self.ansi = enabled;
        self
    }

    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        let content_width = self.layout.content_width(width);
        self.registry.context_mut().content_width = content_width;
    }

    pub fn select_menu_item(&mut self, hotkey: char) -> bool {
        self.menu.select_by_hotkey(hotkey)
    }

    pub fn select_by_id(&mut self, id: &str) -> bool {
        self.menu.select_by_id(id)
    }

    pub fn next(&mut self) {
        self.menu.next();
    }

    pub fn previous(&mut self) {
        self.menu.previous();
    }

    pub fn active_id(&self) -> Option<&'static str> {
        self.menu.active_item().map(|item| item.id)
    }

    pub fn theme(&self) -> &Theme {
        &self.registry.context().theme
    }

    pub fn render(&self) -> String {
        let (width, _) = self.viewport;
        let theme = self.theme();
        let mut output = String::new();

        let header = theme.frame_title(&self.title);
        let _ = writeln!(output, "{}", self.paint(Paint::fg(PALETTE.red).bold(), header));
        if let Some(subtitle) = &self.subtitle {
            let _ = writeln!(output, "{}", self.paint(Paint::fg(PALETTE.green), subtitle));
        }
        let _ = writeln!(output);

        let mut sidebar = self.menu.render_sidebar(theme);
        if self.ansi {
            // Sidebar lines are the title, a spacer, then one line per entry.
            if let Some(line) = sidebar.get_mut(2 + self.menu.active_index()) {
                *line = Paint::fg(ansi_black()).on(PALETTE.yellow).bold().apply(&*line);
            }
        }

        let content = self
            .registry
            .render(self.menu.active_index())
            .map(|pane| pane.render_lines(theme))
            .unwrap_or_default();
        self.layout.render_into(&mut output, &sidebar, &content, width);

        let _ = writeln!(output);
        let _ = writeln!(output, "{}", theme.divider(usize::from(width).min(120)));
        if let Some(footer) = &self.footer {
            let _ = writeln!(output, "{footer}");
        }
        if let Some(tooltip) = &self.tooltip {
            let _ = writeln!(output, "{}", tooltip.render());
        }
        output
    }

    fn paint(&self, paint: Paint, text: impl AsRef<str>) -> String {
        if self.ansi {
            paint.apply(text)
        } else {
            text.as_ref().to_string()
        }
    }
}

fn ansi_black() -> benin_viz::Rgb {
    benin_viz::Rgb(0, 0, 0)
}

/// Content of the active view.
#[derive(Clone, Debug)]
pub struct Pane {
    pub title: String,
    pub body: Vec<String>,
    pub callouts: Vec<Callout>,
    pub empty: Option<EmptyState>,
}

impl Pane {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Vec::new(),
            callouts: Vec::new(),
            empty: None,
        }
    }

    pub fn body(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.body = lines.into_iter().map(|l| l.into()).collect();
        self
    }

    pub fn with_callout(mut self, callout: Callout) -> Self {
        self.callouts.push(callout);
        self
    }

    pub fn with_empty_state(mut self, empty: EmptyState) -> Self {
        self.empty = Some(empty);
        self
    }

    pub fn render_lines(&self, theme: &Theme) -> Vec<String> {
        let mut lines = vec![
            format!("{} {}", theme.pane_marker, self.title),
            theme.divider(self.title.chars().count() + 2),
        ];

        if self.body.is_empty() && self.callouts.is_empty() {
            if let Some(empty) = &self.empty {
                lines.extend(empty.render_lines(theme));
            }
            return lines;
        }

        lines.extend(self.body.iter().cloned());
        for callout in &self.callouts {
            lines.push(String::new());
            lines.extend(callout.render_lines(theme));
        }
        lines
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalloutKind {
    Success,
    Info,
    Warning,
    Error,
}

/// Highlighted message block (summary, hint, warning or error).
#[derive(Clone, Debug)]
pub struct Callout {
    pub kind: CalloutKind,
    pub lines: Vec<String>,
}

impl Callout {
    pub fn new(kind: CalloutKind, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            kind,
            lines: lines.into_iter().map(|l| l.into()).collect(),
        }
    }

    pub fn success(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(CalloutKind::Success, lines)
    }

    pub fn info(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(CalloutKind::Info, lines)
    }

    pub fn warning(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(CalloutKind::Warning, lines)
    }

    pub fn error(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(CalloutKind::Error, lines)
    }

    pub fn render_lines(&self, theme: &Theme) -> Vec<String> {
        let icon = match self.kind {
            CalloutKind::Success => theme.success_icon,
            CalloutKind::Info => theme.info_icon,
            CalloutKind::Warning => theme.warning_icon,
            CalloutKind::Error => theme.error_icon,
        };
        let indent = " ".repeat(icon.chars().count() + 1);
        self.lines
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                if idx == 0 {
                    format!("{icon} {line}")
                } else {
                    format!("{indent}{line}")
                }
            })
            .collect()
    }
}

/// Inline helper used to annotate controls or data.
#[derive(Clone, Debug)]
pub struct Tooltip {
    pub message: String,
}

impl Tooltip {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn render(&self) -> String {
        format!("💡 {}", self.message)
    }
}
