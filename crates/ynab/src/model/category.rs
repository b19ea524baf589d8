use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Meta, decode, or_dash};
use crate::Result;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Option<String>,
    pub name: Option<String>,
    pub hidden: Option<bool>,
    pub deleted: Option<bool>,
    pub category_group_id: Option<String>,
    /// Not part of the category object itself: filled from the enclosing
    /// category group.
    pub category_group_name: Option<String>,
    #[serde(flatten)]
    pub meta: Meta,
}

impl Category {
    /// Decodes a category object. `group_name`, when given, wins over any
    /// `category_group_name` carried by the object.
    pub fn from_value(raw: Value, group_name: Option<&str>) -> Result<Self> {
        let mut category: Self = decode(raw)?;
        if let Some(group_name) = group_name {
            category.category_group_name = Some(group_name.to_string());
        }
        Ok(category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {}",
            or_dash(self.category_group_name.as_deref()),
            or_dash(self.name.as_deref())
        )
    }
}
