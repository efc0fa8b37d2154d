//! 每个实体一个仓储。所有方法对 `ConnectionTrait` 泛型，
//! 既可以直接使用连接池，也可以在事务内调用。

pub mod brand_repository;
pub mod cart_repository;
pub mod category_repository;
pub mod membership_repository;
pub mod order_repository;
pub mod product_repository;
pub mod user_repository;

pub use brand_repository::BrandRepository;
pub use cart_repository::CartRepository;
pub use category_repository::CategoryRepository;
pub use membership_repository::MembershipRepository;
pub use order_repository::OrderRepository;
pub use product_repository::ProductRepository;
pub use user_repository::UserRepository;
