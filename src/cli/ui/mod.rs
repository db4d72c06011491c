pub mod banner;
pub mod reports;
pub mod table_renderer;
