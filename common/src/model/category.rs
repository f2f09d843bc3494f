use serde::{Deserialize, Serialize};

/// A category an article can be filed under.
///
/// Categories are owned by the backend and fetched each time the add-article
/// form is opened. The backend stores them with a Mongo-style `_id`, so the
/// identifier accepts both `id` and `_id` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_id() {
        let categories: Vec<Category> =
            serde_json::from_str(r#"[{"id":"c1","name":"Politics"}]"#).unwrap();
        assert_eq!(
            categories,
            vec![Category {
                id: "c1".into(),
                name: "Politics".into()
            }]
        );
    }

    #[test]
    fn accepts_underscore_id_and_ignores_extra_fields() {
        let category: Category = serde_json::from_str(
            r#"{"_id":"65f0","name":"رياضة","slug":"sport","__v":0}"#,
        )
        .unwrap();
        assert_eq!(category.id, "65f0");
        assert_eq!(category.name, "رياضة");
    }
}
