use super::View;
use crate::ui::{Pane, PaneContext, PaneView};
use crate::utils::wrap;

pub const TITLE: &str = "Historiques";

const ANECDOTES: [&str; 4] = [
    "Anciennement connu sous le nom de Dahomey, le Bénin a accédé à l'indépendance le 1er août \
     1960, se libérant ainsi de la domination coloniale française. Cet événement majeur a marqué \
     un tournant dans l'histoire du pays, ouvrant la voie à une nouvelle ère politique et sociale.",
    "L'histoire de cette souveraineté prend racine dans la colonisation du territoire par la \
     France en 1892, après la défaite du roi Béhanzin. Le chemin vers l'autonomie s'est dessiné \
     progressivement, notamment après la Seconde Guerre mondiale, durant laquelle le Dahomey a \
     rejoint la France libre. Une étape décisive a été franchie en 1958 avec l'obtention du statut \
     d'État autonome au sein de la Communauté française.",
    "Le 1er août 1960, l'indépendance fut officiellement proclamée, donnant naissance à la \
     République du Dahomey avec Hubert Maga comme premier président. En 1975, le pays changea de \
     nom pour devenir la République populaire du Bénin, en référence à l'ancien royaume du Bénin.",
    "Après des décennies de régimes militaires et de parti unique, le Bénin a connu une \
     transition démocratique marquante dans les années 1990. La Conférence nationale des forces \
     vives de la nation en 1990 a été un moment fondateur, menant à l'élection de Nicéphore Soglo \
     en 1991 et à l'aube d'une nouvelle ère politique. L'indépendance a ainsi été un moment \
     crucial, lançant le Bénin dans la construction de sa souveraineté et la recherche de son \
     propre modèle de développement.",
];

/// Static history notes.
pub struct TriviaPane;

impl PaneView for TriviaPane {
    fn id(&self) -> &'static str {
        View::Trivia.id()
    }

    fn label(&self) -> &'static str {
        View::Trivia.label()
    }

    fn hotkey(&self) -> char {
        View::Trivia.hotkey()
    }

    fn render(&self, context: &PaneContext) -> Pane {
        let width = context.content_width.saturating_sub(2).max(20);
        let mut body = Vec::new();
        for (idx, paragraph) in ANECDOTES.iter().enumerate() {
            if idx > 0 {
                body.push(String::new());
            }
            body.extend(wrap(paragraph, width));
        }
        body.push(context.theme.divider(width.min(60)));
        Pane::new(TITLE).body(body)
    }
}
