use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product record exchanged over the products endpoint.
///
/// Every field is optional: whatever subset a client or the service supplies is
/// carried through unchanged, and absent fields are left out of the JSON output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Identifier assigned by the service on create
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Product name
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Widget")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 9.99)]
    pub price: Option<f64>,
}

impl Product {
    /// Returns the same record carrying `id`.
    pub fn with_id(self, id: i64) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_fields_are_omitted() {
        let product = Product {
            id: Some(1),
            name: Some("Widget".to_string()),
            description: None,
            price: Some(9.99),
        };
        assert_eq!(
            serde_json::to_string(&product).unwrap(),
            r#"{"id":1,"name":"Widget","price":9.99}"#
        );
    }

    #[test]
    fn test_empty_object_decodes_to_empty_product() {
        let product: Product = serde_json::from_value(json!({})).unwrap();
        assert_eq!(product, Product::default());
        assert_eq!(serde_json::to_string(&product).unwrap(), "{}");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let product: Product =
            serde_json::from_value(json!({"name": "Gadget", "colour": "red"})).unwrap();
        assert_eq!(product.name.as_deref(), Some("Gadget"));
    }

    #[test]
    fn test_with_id_keeps_other_fields() {
        let product = Product {
            name: Some("Gadget".to_string()),
            price: Some(4.5),
            ..Default::default()
        }
        .with_id(2);
        assert_eq!(product.id, Some(2));
        assert_eq!(product.name.as_deref(), Some("Gadget"));
        assert_eq!(product.price, Some(4.5));
    }
}
