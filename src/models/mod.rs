pub mod error;
pub mod history;
pub mod metric;
pub mod window;
