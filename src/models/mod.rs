pub mod catalog;
pub mod dish;

pub use catalog::catalog;
pub use dish::Dish;
