use serde::{Deserialize, Serialize};

/// A named narrative age covering `start_year..end_year`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EraDefinition {
    pub name: String,
    pub start_year: i32,
    pub end_year: i32,
    pub color: String,
    pub icon: String,
    pub description: String,
}

/// Ordered, contiguous table of narrative eras. Owned explicitly (part of
/// `Config`) rather than living as module-level state, so tests and campaign
/// settings can substitute their own table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EraTable {
    pub eras: Vec<EraDefinition>,
}

impl Default for EraTable {
    fn default() -> Self {
        fn era(
            name: &str,
            start_year: i32,
            end_year: i32,
            color: &str,
            icon: &str,
            description: &str,
        ) -> EraDefinition {
            EraDefinition {
                name: name.to_string(),
                start_year,
                end_year,
                color: color.to_string(),
                icon: icon.to_string(),
                description: description.to_string(),
            }
        }

        Self {
            eras: vec![
                era(
                    "Age of Elves",
                    -5000,
                    -3000,
                    "#047857",
                    "🧝",
                    "The time of the immortal elves and their magical realms",
                ),
                era(
                    "Age of Dwarves",
                    -3000,
                    -500,
                    "#A16207",
                    "⚒️",
                    "The golden era of the dwarven masters and the great mountain cities",
                ),
                era(
                    "Age of Conjunction",
                    -500,
                    0,
                    "#7E22CE",
                    "🌌",
                    "The conjunction of the spheres brings monsters and chaos",
                ),
                era(
                    "Age of Man",
                    0,
                    1000,
                    "#2563EB",
                    "👑",
                    "Humans establish kingdoms and civilization",
                ),
                era(
                    "Age of Decline",
                    1000,
                    9999,
                    "#B91C1C",
                    "💀",
                    "A time of decay and dark powers",
                ),
            ],
        }
    }
}

impl EraTable {
    /// The era covering `year`; falls back to the last era for years past the
    /// end of the table. `None` only for an empty table.
    pub fn definition_for(&self, year: i32) -> Option<&EraDefinition> {
        self.eras
            .iter()
            .find(|era| year >= era.start_year && year < era.end_year)
            .or_else(|| self.eras.last())
    }

    pub fn era_name(&self, year: i32) -> &str {
        self.definition_for(year).map(|e| e.name.as_str()).unwrap_or("")
    }

    pub fn era_color(&self, year: i32) -> &str {
        self.definition_for(year).map(|e| e.color.as_str()).unwrap_or("")
    }

    pub fn era_icon(&self, year: i32) -> &str {
        self.definition_for(year).map(|e| e.icon.as_str()).unwrap_or("")
    }

    pub fn era_description(&self, year: i32) -> &str {
        self.definition_for(year).map(|e| e.description.as_str()).unwrap_or("")
    }

    /// Sorted, de-duplicated era names for a set of years (filter bars).
    pub fn unique_era_names(&self, years: &[i32]) -> Vec<String> {
        let mut names: Vec<String> =
            years.iter().map(|&year| self.era_name(year).to_string()).collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn is_year_in_era(&self, year: i32, era_name: &str) -> bool {
        self.era_name(year) == era_name
    }

    /// Interior era boundaries, used as epoch gridline years. For the default
    /// table these are -3000, -500, 0 and 1000.
    pub fn epoch_years(&self) -> Vec<i32> {
        self.eras.iter().skip(1).map(|era| era.start_year).collect()
    }
}
