use benin_core::{summarize, ComputeError, Metric, SummaryStat};
use benin_io::sources::POPULATION;
use tracing::{error, warn};

use super::View;
use crate::ui::{Callout, Pane, PaneContext, PaneView};
use crate::utils::{format_growth, group_thousands, wrap};

pub const TITLE: &str = "Résumé dynamique";
const HINT: &str =
    "Explorez les autres onglets pour visualiser l’évolution du pays dans plusieurs domaines clés.";

/// Landing view: population growth since the first recorded year.
pub struct HomePane;

impl PaneView for HomePane {
    fn id(&self) -> &'static str {
        View::Home.id()
    }

    fn label(&self) -> &'static str {
        View::Home.label()
    }

    fn hotkey(&self) -> char {
        View::Home.hotkey()
    }

    fn render(&self, context: &PaneContext) -> Pane {
        let width = context.content_width.saturating_sub(6);
        let pane = Pane::new(TITLE);

        let population = match context.store.dataset(&POPULATION) {
            Ok(dataset) => dataset,
            Err(err) => {
                error!(error = %err, "home view without population data");
                return pane.with_callout(Callout::error(
                    std::iter::once("Données indisponibles".to_string())
                        .chain(wrap(&err.to_string(), width)),
                ));
            }
        };

        let summary = match summarize(population) {
            Ok(summary) => Callout::success(wrap(&summary_sentence(&summary), width)),
            Err(err) => {
                warn!(error = %err, "population summary unavailable");
                Callout::warning(wrap(&fallback_sentence(&err), width))
            }
        };

        pane.with_callout(summary)
            .with_callout(Callout::info(wrap(HINT, width)))
    }
}

pub fn summary_sentence(summary: &SummaryStat) -> String {
    format!(
        "En {}, le Bénin comptait {} habitants. En {}, la population a atteint {} habitants, \
         soit une croissance de {}% en {} ans.",
        summary.start_year,
        format_count(summary.start_value),
        summary.end_year,
        format_count(summary.end_value),
        format_growth(summary.growth_percent),
        summary.span_years(),
    )
}

fn fallback_sentence(err: &ComputeError) -> String {
    match err {
        ComputeError::EmptyDataset(_) => {
            "La série de population est vide : aucun résumé ne peut être calculé.".to_string()
        }
        ComputeError::ZeroBaseline { year } => format!(
            "La population de référence ({year}) vaut zéro : la croissance n'est pas définie."
        ),
    }
}

fn format_count(value: Metric) -> String {
    match value {
        Metric::Integer(n) => group_thousands(n),
        Metric::Decimal(v) => group_thousands(v.trunc() as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_sentence() {
        let summary = SummaryStat {
            start_year: 1960,
            start_value: Metric::Integer(2_431_620),
            end_year: 2025,
            end_value: Metric::Integer(14_462_724),
            growth_percent: 494.77,
        };
        assert_eq!(
            summary_sentence(&summary),
            "En 1960, le Bénin comptait 2,431,620 habitants. En 2025, la population a atteint \
             14,462,724 habitants, soit une croissance de 494.77% en 65 ans."
        );
    }

    #[test]
    fn test_fallback_names_the_year() {
        let text = fallback_sentence(&ComputeError::ZeroBaseline { year: 1960 });
        assert!(text.contains("1960"));
    }
}
