use benin_io::sources::{self, DatasetSource};
use benin_viz::{render_timeseries, DEFAULT_COLOR};
use tracing::error;

use super::View;
use crate::ui::{Callout, Pane, PaneContext, PaneView};
use crate::utils::wrap;

// y labels and the axis take this many columns left of the plot.
const AXIS_GUTTER: usize = 12;

/// One time-series view: a dataset, the column to plot and a chart title.
#[derive(Clone, Copy, Debug)]
pub struct SeriesPane {
    pub view: View,
    pub source: DatasetSource,
    pub title: &'static str,
    pub color: &'static str,
}

pub const SERIES: [SeriesPane; 6] = [
    SeriesPane {
        view: View::Population,
        source: sources::POPULATION,
        title: "Évolution de la population béninoise",
        color: DEFAULT_COLOR,
    },
    SeriesPane {
        view: View::Pib,
        source: sources::PIB,
        title: "Produit Intérieur Brut (PIB) du Bénin",
        color: DEFAULT_COLOR,
    },
    SeriesPane {
        view: View::Alphabetisation,
        source: sources::ALPHABETISATION,
        title: "Taux d'alphabétisation (%)",
        color: DEFAULT_COLOR,
    },
    SeriesPane {
        view: View::Electricite,
        source: sources::ELECTRICITE,
        title: "Accès à l'électricité (%)",
        color: DEFAULT_COLOR,
    },
    SeriesPane {
        view: View::Internet,
        source: sources::INTERNET,
        title: "Accès à Internet (%)",
        color: DEFAULT_COLOR,
    },
    SeriesPane {
        view: View::Elections,
        source: sources::ELECTIONS,
        title: "Taux de participation aux élections présidentielles",
        color: DEFAULT_COLOR,
    },
];

impl PaneView for SeriesPane {
    fn id(&self) -> &'static str {
        self.view.id()
    }

    fn label(&self) -> &'static str {
        self.view.label()
    }

    fn hotkey(&self) -> char {
        self.view.hotkey()
    }

    fn render(&self, context: &PaneContext) -> Pane {
        let pane = Pane::new(self.title);
        let text_width = context.content_width.saturating_sub(6);

        let dataset = match context.store.dataset(&self.source) {
            Ok(dataset) => dataset,
            Err(err) => {
                error!(view = self.id(), error = %err, "series unavailable");
                return pane.with_callout(Callout::error(
                    std::iter::once("Données indisponibles".to_string())
                        .chain(wrap(&err.to_string(), text_width)),
                ));
            }
        };

        let chart = match render_timeseries(
            dataset,
            dataset.year_field(),
            self.source.value_field,
            self.title,
            self.color,
        ) {
            Ok(chart) => chart,
            Err(err) => {
                error!(view = self.id(), error = %err, "chart rendering failed");
                return pane.with_callout(Callout::error(wrap(&err.to_string(), text_width)));
            }
        };

        let plot_width = context.content_width.saturating_sub(AXIS_GUTTER);
        // The pane heading already carries the chart title.
        let mut lines: Vec<String> = chart
            .render_lines(plot_width, context.chart_height)
            .into_iter()
            .skip(1)
            .collect();

        lines.push(String::new());
        lines.push(source_line(self.source, dataset.rows().len(), &chart.markers));
        pane.body(lines)
    }
}

fn source_line(source: DatasetSource, count: usize, markers: &[benin_viz::ChartPoint]) -> String {
    match (markers.first(), markers.last()) {
        (Some(first), Some(last)) => format!(
            "Source : {} · {} points ({}–{})",
            source.file, count, first.x, last.x
        ),
        _ => format!("Source : {} · aucune observation", source.file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benin_viz::ChartPoint;

    #[test]
    fn test_series_follow_menu_order() {
        let hotkeys: Vec<char> = SERIES.iter().map(|s| s.hotkey()).collect();
        assert_eq!(hotkeys, vec!['2', '3', '4', '5', '6', '7']);
        assert_eq!(SERIES[1].source.name, "PIB");
    }

    #[test]
    fn test_source_line() {
        let markers = [
            ChartPoint { x: 1960.0, y: 1.0 },
            ChartPoint { x: 2025.0, y: 2.0 },
        ];
        assert_eq!(
            source_line(sources::PIB, 2, &markers),
            "Source : pib.csv · 2 points (1960–2025)"
        );
        assert_eq!(
            source_line(sources::PIB, 0, &[]),
            "Source : pib.csv · aucune observation"
        );
    }
}
