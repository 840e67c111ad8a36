//! The fixed set of yearly series the dashboard reads.

/// Column holding the year in every series file.
pub const YEAR_FIELD: &str = "Année";

/// File name of the infrastructure projects table.
pub const PROJECTS_FILE: &str = "projets.csv";

/// Where a named series lives and which columns it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSource {
    pub name: &'static str,
    pub file: &'static str,
    pub year_field: &'static str,
    pub value_field: &'static str,
}

impl DatasetSource {
    pub const fn new(name: &'static str, file: &'static str, value_field: &'static str) -> Self {
        Self {
            name,
            file,
            year_field: YEAR_FIELD,
            value_field,
        }
    }
}

pub const POPULATION: DatasetSource = DatasetSource::new("Population", "population.csv", "Population");
pub const PIB: DatasetSource = DatasetSource::new("PIB", "pib.csv", "PIB");
pub const ALPHABETISATION: DatasetSource =
    DatasetSource::new("Alphabetisation", "alphabetisation.csv", "Taux_alphabetisation");
pub const ELECTRICITE: DatasetSource =
    DatasetSource::new("Electricite", "electricite.csv", "Acces_electricite");
pub const INTERNET: DatasetSource = DatasetSource::new("Internet", "internet.csv", "Acces_internet");
pub const ELECTIONS: DatasetSource =
    DatasetSource::new("Elections", "elections.csv", "Taux_participation");

/// All series, in menu order.
pub const SOURCES: [DatasetSource; 6] = [
    POPULATION,
    PIB,
    ALPHABETISATION,
    ELECTRICITE,
    INTERNET,
    ELECTIONS,
];
