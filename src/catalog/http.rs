//! HTTP catalog backed by a cocktail-DB style JSON API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::model::Drink;
use super::service::{CatalogError, CatalogService};

/// Catalog client for the public cocktail database API.
///
/// Endpoints:
/// - `search.php?s=<name>`: drinks matching a name
/// - `filter.php?i=<ingredient>`: drinks built on a base ingredient
/// - `lookup.php?i=<id>`: one full drink by id
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Client built from the crate config.
    pub fn from_config(config: &crate::config::Config) -> Result<Self, CatalogError> {
        Self::new(config.catalog.base_url.clone(), config.catalog_timeout())
    }

    async fn fetch(
        &self,
        path: &str,
        param: &str,
        value: &str,
    ) -> Result<DrinksPayload, CatalogError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.client.get(&url).query(&[(param, value)]).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl CatalogService for HttpCatalog {
    async fn find_by_id(&self, id: &str) -> Result<Drink, CatalogError> {
        let payload = self.fetch("lookup.php", "i", id).await?;
        payload
            .drinks
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(DrinkDto::into_drink)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    async fn find_by_name(&self, query: &str) -> Result<Vec<Drink>, CatalogError> {
        let payload = self.fetch("search.php", "s", query).await?;
        Ok(payload.into_drinks())
    }

    async fn find_by_base(&self, base: &str) -> Result<Vec<Drink>, CatalogError> {
        let payload = self.fetch("filter.php", "i", base).await?;
        Ok(payload.into_drinks())
    }
}

/// Wire shape: the API wraps results in `{"drinks": [...]}` and uses a
/// JSON `null` instead of an empty array when nothing matches.
#[derive(Debug, Deserialize)]
struct DrinksPayload {
    drinks: Option<Vec<DrinkDto>>,
}

impl DrinksPayload {
    fn into_drinks(self) -> Vec<Drink> {
        self.drinks
            .unwrap_or_default()
            .into_iter()
            .map(DrinkDto::into_drink)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct DrinkDto {
    #[serde(rename = "idDrink")]
    id: String,
    #[serde(rename = "strDrink")]
    name: String,
    #[serde(rename = "strDrinkThumb")]
    thumb: Option<String>,
    /// Ingredients and measures arrive as `strIngredient1..=15` and
    /// `strMeasure1..=15`, nullable past the last filled slot.
    #[serde(flatten)]
    slots: serde_json::Map<String, serde_json::Value>,
}

impl DrinkDto {
    fn into_drink(self) -> Drink {
        let mut ingredients = Vec::new();
        for n in 1..=15 {
            let Some(ingredient) = non_empty(self.slots.get(&format!("strIngredient{n}"))) else {
                continue;
            };
            let line = match non_empty(self.slots.get(&format!("strMeasure{n}"))) {
                Some(measure) => format!("{measure} {ingredient}"),
                None => ingredient.to_string(),
            };
            ingredients.push(line);
        }
        Drink {
            id: self.id,
            name: self.name,
            thumb: self.thumb,
            ingredients,
            is_favorite: false,
        }
    }
}

fn non_empty(value: Option<&serde_json::Value>) -> Option<&str> {
    value
        .and_then(|value| value.as_str())
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_with_null_drinks_decodes_empty() {
        let payload: DrinksPayload = serde_json::from_str(r#"{"drinks": null}"#).unwrap();
        assert!(payload.into_drinks().is_empty());
    }

    #[test]
    fn dto_compacts_sparse_ingredient_slots() {
        let raw = r#"{
            "drinks": [{
                "idDrink": "11007",
                "strDrink": "Margarita",
                "strDrinkThumb": "https://example.test/margarita.jpg",
                "strIngredient1": "Tequila",
                "strMeasure1": "1 1/2 oz ",
                "strIngredient2": "Triple sec",
                "strMeasure2": null,
                "strIngredient3": "  ",
                "strIngredient4": "Lime juice",
                "strMeasure4": "1 oz",
                "strIngredient5": null
            }]
        }"#;
        let payload: DrinksPayload = serde_json::from_str(raw).unwrap();
        let drinks = payload.into_drinks();
        assert_eq!(drinks.len(), 1);
        let drink = &drinks[0];
        assert_eq!(drink.id, "11007");
        assert_eq!(drink.name, "Margarita");
        assert_eq!(
            drink.ingredients,
            vec!["1 1/2 oz Tequila", "Triple sec", "1 oz Lime juice"]
        );
        assert!(!drink.is_favorite);
    }

    #[test]
    fn dto_without_thumb_or_ingredients_decodes() {
        let raw = r#"{"drinks": [{"idDrink": "1", "strDrink": "Water"}]}"#;
        let payload: DrinksPayload = serde_json::from_str(raw).unwrap();
        let drinks = payload.into_drinks();
        assert_eq!(drinks[0].thumb, None);
        assert!(drinks[0].ingredients.is_empty());
    }
}
