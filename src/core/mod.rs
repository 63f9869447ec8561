pub mod extract;
pub mod join;
pub mod sanitize;
pub mod segment;
