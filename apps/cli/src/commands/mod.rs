pub mod acm;
pub mod catalog;
pub mod classify;
pub mod risks;
pub mod schema;
pub mod score;
pub mod validate;
