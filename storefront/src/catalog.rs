//! Static store catalog: categories, featured lamps, and selling points.
//!
//! DESIGN
//! ======
//! The dataset ships inside the binary as JSON and is parsed once. Every
//! field defaults, so a record with gaps still renders (with placeholders)
//! instead of failing the whole page.
//!
//! TRADE-OFFS
//! ==========
//! A document that does not parse at all degrades to an empty catalog and
//! a warning. The hero still works without products.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::Deserialize;

const CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Text shown in place of an empty record field.
pub const PLACEHOLDER: &str = "\u{2014}";

/// A purchasable lamp shown in the featured grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LampProduct {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub category: String,
    pub image: String,
    pub attribution: String,
    pub photographer_url: String,
}

impl LampProduct {
    /// Alt text for the product photo, crediting the photographer.
    pub fn alt_text(&self) -> String {
        match (self.name.is_empty(), self.attribution.is_empty()) {
            (false, false) => format!("{} - {}", self.name, self.attribution),
            (false, true) => self.name.clone(),
            (true, false) => self.attribution.clone(),
            (true, true) => PLACEHOLDER.to_owned(),
        }
    }
}

/// A shop section tile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub icon: String,
    pub description: String,
}

/// One of the "Why Choose Us" selling points.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub products: Vec<LampProduct>,
    pub features: Vec<Feature>,
}

impl Catalog {
    /// Parse a catalog document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `raw` is not a catalog object.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Parse `raw`, falling back to an empty catalog when it is malformed.
    pub fn parse_or_empty(raw: &str) -> Self {
        match Self::parse(raw) {
            Ok(catalog) => catalog,
            Err(err) => {
                log::warn!("catalog unreadable, rendering without products: {err}");
                Self::default()
            }
        }
    }

    /// The catalog embedded at build time.
    pub fn load() -> Self {
        Self::parse_or_empty(CATALOG_JSON)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.products.is_empty() && self.features.is_empty()
    }

    /// Distinct photo credits in first-seen order, as `(attribution, url)`.
    pub fn photo_credits(&self) -> Vec<(String, String)> {
        let mut credits: Vec<(String, String)> = Vec::new();
        for product in &self.products {
            if product.attribution.is_empty() {
                continue;
            }
            if credits.iter().any(|(name, _)| *name == product.attribution) {
                continue;
            }
            credits.push((product.attribution.clone(), product.photographer_url.clone()));
        }
        credits
    }
}

/// `value`, or the placeholder when it is empty.
pub fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() { PLACEHOLDER } else { value }
}
