pub mod category;
pub mod product;

pub use crate::domain::DomainError;
pub use category::Category;
pub use product::Product;
