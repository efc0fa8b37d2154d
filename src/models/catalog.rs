use crate::entities::{brand_entity, category_entity, product_entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 新建或修改商品的请求体（修改时整体覆盖）
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub quantity: i32,
    pub category_id: i32,
    pub brand_id: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductStatusRequest {
    pub is_deleted: bool,
}

/// 品牌与分类共用
#[derive(Debug, Serialize, Deserialize)]
pub struct NameRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub quantity: i32,
    pub category_id: i32,
    pub brand_id: i32,
    pub is_deleted: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BrandResponse {
    pub id: i32,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<product_entity::Model> for ProductResponse {
    fn from(p: product_entity::Model) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            quantity: p.quantity,
            category_id: p.category_id,
            brand_id: p.brand_id,
            is_deleted: p.is_deleted,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

impl From<brand_entity::Model> for BrandResponse {
    fn from(b: brand_entity::Model) -> Self {
        Self {
            id: b.id,
            name: b.name,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

impl From<category_entity::Model> for CategoryResponse {
    fn from(c: category_entity::Model) -> Self {
        Self {
            id: c.id,
            name: c.name,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
