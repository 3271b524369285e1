pub mod chart_service;
pub mod fetch_service;
pub mod grouping_service;
pub mod month_service;
pub mod ranking_service;
pub mod statistics_service;
