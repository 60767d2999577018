use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::is_present;

pub const ORDER_COMPLETED: &str = "Compra finalizada com sucesso";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub order_id: u64,
    pub cart_items: Value,
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    #[serde(default)]
    pub products: Option<Value>,
    #[serde(default)]
    pub cart_items: Option<Value>,
    #[serde(default)]
    pub payment_data: Option<Value>,
}

impl PurchaseRequest {
    /// Returns the cart items when every required field is present.
    pub fn into_cart_items(self) -> Option<Value> {
        let complete = is_present(&self.products)
            && is_present(&self.cart_items)
            && is_present(&self.payment_data);
        if complete {
            self.cart_items
        } else {
            None
        }
    }
}
