//! Drink models and response envelopes of the drinks API.

use serde::{Deserialize, Serialize};

/// One ingredient of a drink recipe.
///
/// The public listing only carries `color` and `parts`; `name` is present in
/// the detailed representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub color: String,
    pub parts: f64,
}

impl Ingredient {
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>, parts: f64) -> Self {
        Self {
            name: Some(name.into()),
            color: color.into(),
            parts,
        }
    }
}

/// A drink as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drink {
    pub id: u32,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

/// Request body for creating a drink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDrink {
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

/// Partial update of a drink. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrinkPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Vec<Ingredient>>,
}

/// `{"success": true, "drinks": [...]}`
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct DrinksEnvelope {
    pub success: bool,
    pub drinks: Vec<Drink>,
}

/// `{"success": true, "drink": {...}}`
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct DrinkEnvelope {
    pub success: bool,
    pub drink: Drink,
}

/// `{"success": true, "delete": id}`
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct DeleteEnvelope {
    pub success: bool,
    pub delete: u32,
}

/// Message of the backend's error body
/// `{"success": false, "error": status, "message": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub message: String,
}
