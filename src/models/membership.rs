use crate::entities::membership_entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct MembershipResponse {
    pub id: i32,
    pub status: String,
    pub min_items: i32,
    pub max_items: Option<i32>,
    pub discount: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MembershipUpdateResponse {
    pub result: String,
    pub membership_status: String,
}

impl From<membership_entity::Model> for MembershipResponse {
    fn from(m: membership_entity::Model) -> Self {
        Self {
            id: m.id,
            status: m.status,
            min_items: m.min_items,
            max_items: m.max_items,
            discount: m.discount_percentage,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
