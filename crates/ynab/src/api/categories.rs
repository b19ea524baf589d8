use serde::Deserialize;
use serde_json::Value;

use super::{Envelope, budget_uri};
use crate::{Result, model::Category, rest::RestBase};

#[derive(Debug, Deserialize)]
struct CategoriesData {
    category_groups: Vec<CategoryGroup>,
}

#[derive(Debug, Deserialize)]
struct CategoryGroup {
    name: Option<String>,
    categories: Vec<Value>,
}

#[derive(Clone, Debug)]
pub struct CategoriesApi {
    rest: RestBase,
    budget_uri: String,
}

impl CategoriesApi {
    pub fn new(rest: RestBase, budget_id: &str) -> Self {
        Self {
            rest,
            budget_uri: budget_uri(budget_id),
        }
    }

    /// All categories of the budget, flattened across groups in response
    /// order. Each category carries the name of its group.
    pub fn get_all(&self) -> Result<Vec<Category>> {
        let path = format!("{}categories", self.budget_uri);
        let envelope: Envelope<CategoriesData> = self.rest.get(&path, &[])?;

        let mut categories = Vec::new();
        for group in envelope.data.category_groups {
            for raw in group.categories {
                categories.push(Category::from_value(raw, group.name.as_deref())?);
            }
        }
        tracing::debug!("decoded {} categories", categories.len());
        Ok(categories)
    }

    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>> {
        Ok(self
            .get_all()?
            .into_iter()
            .find(|category| category.name.as_deref() == Some(name)))
    }
}
