pub mod member;
pub mod migrate;
