use crate::entities::{cart_entity, cart_item_entity, product_entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AddCartItemRequest {
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateCartItemRequest {
    pub cart_id: i32,
    pub cart_item_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RemoveCartItemRequest {
    pub cart_id: i32,
    pub cart_item_id: i32,
}

/// 购物车条目与其商品（显式联表结果）
#[derive(Debug, Clone)]
pub struct CartLine {
    pub item: cart_item_entity::Model,
    pub product: product_entity::Model,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CartItemResponse {
    pub id: i32,
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CartProductSummary {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CartLineResponse {
    #[serde(flatten)]
    pub item: CartItemResponse,
    pub product: CartProductSummary,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CartResponse {
    pub id: i32,
    pub user_id: i32,
    pub checked_out: bool,
    pub items: Vec<CartLineResponse>,
}

impl From<cart_item_entity::Model> for CartItemResponse {
    fn from(m: cart_item_entity::Model) -> Self {
        Self {
            id: m.id,
            cart_id: m.cart_id,
            product_id: m.product_id,
            quantity: m.quantity,
            unit_price: m.unit_price,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<product_entity::Model> for CartProductSummary {
    fn from(p: product_entity::Model) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            quantity: p.quantity,
        }
    }
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            item: line.item.into(),
            product: line.product.into(),
        }
    }
}

impl CartResponse {
    pub fn new(cart: cart_entity::Model, lines: Vec<CartLine>) -> Self {
        Self {
            id: cart.id,
            user_id: cart.user_id,
            checked_out: cart.checked_out,
            items: lines.into_iter().map(CartLineResponse::from).collect(),
        }
    }
}
