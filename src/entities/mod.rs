pub mod brands;
pub mod cart_items;
pub mod carts;
pub mod categories;
pub mod memberships;
pub mod order_items;
pub mod orders;
pub mod products;
pub mod roles;
pub mod users;

pub use brands as brand_entity;
pub use cart_items as cart_item_entity;
pub use carts as cart_entity;
pub use categories as category_entity;
pub use memberships as membership_entity;
pub use order_items as order_item_entity;
pub use orders as order_entity;
pub use orders::OrderStatus;
pub use products as product_entity;
pub use roles as role_entity;
pub use users as user_entity;
