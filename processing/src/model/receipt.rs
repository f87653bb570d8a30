use serde::{Deserialize, Serialize};

/// A submitted purchase receipt.
///
/// Numeric fields stay as the strings the client sent; the scorer parses
/// them leniently and never rejects a receipt for a malformed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    /// `YYYY-MM-DD`
    pub purchase_date: String,
    /// `HH:MM`, 24-hour clock
    pub purchase_time: String,
    pub total: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_names() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}],
            "total": "6.49"
        }"#;
        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.items, vec![Item::new("Mountain Dew 12PK", "6.49")]);
    }

    #[test]
    fn test_missing_items_default_to_empty() {
        let json = r#"{"retailer": "", "purchaseDate": "", "purchaseTime": "", "total": "0.00"}"#;
        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert!(receipt.items.is_empty());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let receipt = Receipt {
            retailer: "Walgreens".into(),
            purchase_date: "2022-01-02".into(),
            purchase_time: "08:13".into(),
            total: "2.65".into(),
            items: vec![Item::new("Pepsi - 12-oz", "1.25")],
        };
        let value = serde_json::to_value(&receipt).unwrap();
        assert_eq!(value["purchaseDate"], "2022-01-02");
        assert_eq!(value["items"][0]["shortDescription"], "Pepsi - 12-oz");
    }
}
