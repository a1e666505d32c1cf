pub mod images;
pub mod sanitize;
pub mod slugs;
