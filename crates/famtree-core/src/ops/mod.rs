pub mod member_ops;
pub mod store;

pub use store::Store;
