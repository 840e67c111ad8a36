use serde::{Deserialize, Serialize};

/// One row of `projets.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "lieu")]
    pub location: String,
    #[serde(rename = "annee")]
    pub year: i32,
    /// Image file name, relative to the assets directory.
    #[serde(rename = "fichier")]
    pub image: String,
    pub description: String,
}

impl ProjectRecord {
    /// Card heading in the form `nom (lieu – annee)`.
    pub fn heading(&self) -> String {
        format!("{} ({} – {})", self.name, self.location, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_format() {
        let record = ProjectRecord {
            name: "Aéroport de Glo-Djigbé".into(),
            location: "Abomey-Calavi".into(),
            year: 2024,
            image: "aeroport.png".into(),
            description: "Nouvel aéroport international.".into(),
        };
        assert_eq!(
            record.heading(),
            "Aéroport de Glo-Djigbé (Abomey-Calavi – 2024)"
        );
    }

    #[test]
    fn test_deserializes_french_columns() {
        let json = r#"{"nom":"Port","lieu":"Cotonou","annee":2019,"fichier":"port.png","description":"Extension"}"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Port");
        assert_eq!(record.year, 2019);
        assert_eq!(record.image, "port.png");
    }
}
