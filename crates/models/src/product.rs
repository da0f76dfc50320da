use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::ModelError;

pub const NAME_MIN_LEN: usize = 2;
pub const DESCRIPTION_MIN_LEN: usize = 5;
pub const CATEGORY_MIN_LEN: usize = 2;

pub const NAME_RULE: &str = "Name is required and must be a string of at least 2 characters";
pub const DESCRIPTION_RULE: &str = "Description is required and must be a string of at least 5 characters";
pub const PRICE_RULE: &str = "Price is required and must be a positive number";
pub const CATEGORY_RULE: &str = "Category is required and must be a string of at least 2 characters";
pub const IN_STOCK_RULE: &str = "inStock is required and must be a boolean";

/// A stored catalog entry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// A validated, normalized candidate: everything but the id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl ProductInput {
    /// Validate a raw JSON payload.
    ///
    /// All five rules are checked; the error lists every one that failed.
    pub fn from_json(raw: &Value) -> Result<Self, ModelError> {
        let mut violations = Vec::new();

        let name = trimmed_text(raw, "name", NAME_MIN_LEN);
        if name.is_none() {
            violations.push(NAME_RULE.to_string());
        }

        let description = trimmed_text(raw, "description", DESCRIPTION_MIN_LEN);
        if description.is_none() {
            violations.push(DESCRIPTION_RULE.to_string());
        }

        let price = raw
            .get("price")
            .and_then(Value::as_f64)
            .filter(|p| p.is_finite() && *p > 0.0);
        if price.is_none() {
            violations.push(PRICE_RULE.to_string());
        }

        let category = trimmed_text(raw, "category", CATEGORY_MIN_LEN);
        if category.is_none() {
            violations.push(CATEGORY_RULE.to_string());
        }

        let in_stock = raw.get("inStock").and_then(Value::as_bool);
        if in_stock.is_none() {
            violations.push(IN_STOCK_RULE.to_string());
        }

        match (name, description, price, category, in_stock) {
            (Some(name), Some(description), Some(price), Some(category), Some(in_stock)) => {
                Ok(Self { name, description, price, category, in_stock })
            }
            _ => Err(ModelError::Validation(violations)),
        }
    }

    pub fn into_product(self, id: Uuid) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            in_stock: self.in_stock,
        }
    }
}

impl Product {
    /// Overwrite every field except `id`.
    pub fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.description = input.description;
        self.price = input.price;
        self.category = input.category;
        self.in_stock = input.in_stock;
    }
}

fn trimmed_text(raw: &Value, field: &str, min_len: usize) -> Option<String> {
    let s = raw.get(field)?.as_str()?.trim();
    (s.chars().count() >= min_len).then(|| s.to_string())
}
