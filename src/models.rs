//! Frontend Models
//!
//! Data structures matching the `/foods` backend resource.

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Backend-assigned food identifier
pub type FoodId = u32;

/// Food item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
    pub image: String,
}

impl Food {
    /// Apply the fields present in `patch`, keeping the identifier
    pub fn merged(&self, patch: &FoodPatch) -> Food {
        Food {
            id: self.id,
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            price: patch.price.unwrap_or(self.price),
            available: patch.available.unwrap_or(self.available),
            image: patch.image.clone().unwrap_or_else(|| self.image.clone()),
        }
    }

    /// Copy with the availability flag flipped
    pub fn with_toggled_availability(&self) -> Food {
        Food {
            available: !self.available,
            ..self.clone()
        }
    }
}

/// Creation payload for `POST /foods` (no identifier)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
    pub image: String,
}

/// Partial update; `None` fields keep the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub available: Option<bool>,
    pub image: Option<String>,
}

/// Raw text of the four form inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodForm {
    pub image: String,
    pub name: String,
    pub price: String,
    pub description: String,
}

impl FoodForm {
    pub fn from_food(food: &Food) -> Self {
        Self {
            image: food.image.clone(),
            name: food.name.clone(),
            price: food.price.to_string(),
            description: food.description.clone(),
        }
    }

    /// Build a creation payload; new items always start available
    pub fn to_new_food(&self) -> Result<NewFood, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        let price = match parse_price(&self.price)? {
            Some(price) => price,
            None => return Err(FormError::InvalidPrice(self.price.clone())),
        };
        Ok(NewFood {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            price,
            available: true,
            image: self.image.trim().to_string(),
        })
    }

    /// Build an update patch from every input.
    ///
    /// Cleared text inputs are sent as empty strings; a blank price keeps the
    /// current one.
    pub fn to_patch(&self) -> Result<FoodPatch, FormError> {
        Ok(FoodPatch {
            name: Some(self.name.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            price: parse_price(&self.price)?,
            available: None,
            image: Some(self.image.trim().to_string()),
        })
    }
}

/// Accepts "19.90" as well as "19,90"
fn parse_price(raw: &str) -> Result<Option<f64>, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.replace(',', ".").parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(Some(price)),
        _ => Err(FormError::InvalidPrice(raw.to_string())),
    }
}
