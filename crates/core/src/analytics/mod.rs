//! Dashboard analytics assembled from the wealth and journal stores.

mod analytics_model;
mod analytics_service;
mod analytics_traits;


pub use analytics_model::{Dashboard, DashboardMetrics, WealthTrendPoint};
pub use analytics_service::AnalyticsService;
pub use analytics_traits::AnalyticsServiceTrait;
