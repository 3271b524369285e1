pub mod category;
pub mod chart;
pub mod month;
pub mod query;
pub mod series;
pub mod settings;
pub mod transaction;
