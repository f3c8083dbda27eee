use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub weight: f64,
    pub fur_color: String,
}

/// Editable fields of an [`Animal`]; the id is taken from the request path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalUpdate {
    pub name: String,
    pub category: String,
    pub weight: f64,
    pub fur_color: String,
}

impl Animal {
    pub fn apply(&mut self, update: AnimalUpdate) {
        self.name = update.name;
        self.category = update.category;
        self.weight = update.weight;
        self.fur_color = update.fur_color;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: i32,
    pub animal_id: i32,
    pub date_of_visit: NaiveDate,
    pub description: String,
    pub price: f64,
}
