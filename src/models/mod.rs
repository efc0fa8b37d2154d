pub mod cart;
pub mod catalog;
pub mod common;
pub mod membership;
pub mod order;
pub mod user;

pub use cart::*;
pub use catalog::*;
pub use common::*;
pub use membership::*;
pub use order::*;
pub use user::*;
