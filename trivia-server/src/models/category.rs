//! Category records

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::CategoryId;

/// Category id reserved by the quiz endpoint for "all categories"
pub const ALL_CATEGORIES: CategoryId = 0;

/// Category record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Category id → label, serialised as a JSON object keyed by id
pub type CategoryMap = BTreeMap<CategoryId, String>;

/// Collapse category records into the id → label mapping clients expect.
pub fn category_map(categories: impl IntoIterator<Item = Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_serialises_with_string_keys() {
        let map = category_map(vec![
            Category { id: 2, kind: "Art".into() },
            Category { id: 1, kind: "Science".into() },
        ]);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({"1": "Science", "2": "Art"}));
    }

    #[test]
    fn category_uses_type_field() {
        let cat: Category = serde_json::from_str(r#"{"id": 4, "type": "History"}"#).unwrap();
        assert_eq!(cat.kind, "History");
    }
}
