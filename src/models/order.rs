use crate::entities::{OrderStatus, order_entity, order_item_entity, product_entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 订单条目与其商品（显式联表结果）；商品可能已被删除
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub item: order_item_entity::Model,
    pub product: Option<product_entity::Model>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderSummary {
    pub id: i32,
    pub user_id: i32,
    pub status: OrderStatus,
    pub order_number: String,
    pub discount: i32,
    pub membership_status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl OrderSummary {
    pub fn new(order: order_entity::Model, membership_status: String) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            status: order.status,
            order_number: order.order_number,
            discount: order.discount,
            membership_status,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

/// 结算结果：金额单位均为分
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CheckoutSummary {
    pub order: OrderSummary,
    #[serde(rename = "totalAmount")]
    pub total_amount: i64,
    #[serde(rename = "discountAmount")]
    pub discount_amount: i64,
    #[serde(rename = "finalAmount")]
    pub final_amount: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub result: String,
    #[serde(flatten)]
    pub summary: CheckoutSummary,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderItemResponse {
    pub id: i32,
    pub product_id: i32,
    pub product_name: Option<String>,
    pub quantity: i32,
    pub unit_price: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderResponse {
    #[serde(flatten)]
    pub order: OrderSummary,
    pub items: Vec<OrderItemResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

impl From<OrderLine> for OrderItemResponse {
    fn from(line: OrderLine) -> Self {
        Self {
            id: line.item.id,
            product_id: line.item.product_id,
            product_name: line.product.map(|p| p.name),
            quantity: line.item.quantity,
            unit_price: line.item.unit_price,
        }
    }
}
