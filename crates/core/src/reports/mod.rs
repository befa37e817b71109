//! Report assembly and rendering.
//!
//! Assembly gathers one renderer-agnostic [`ReportPayload`] per user;
//! renderers turn it into document bytes. Adding a flavor means adding a
//! renderer, not touching assembly.

mod reports_model;
pub mod reports_renderers;
mod reports_service;
mod reports_traits;

#[cfg(test)]
mod reports_service_tests;

// Re-export the public interface
pub use reports_model::{ReportDocument, ReportFlavor, ReportPayload, ReportUser};
pub use reports_renderers::{
    builtin_renderers, EstatePlanningRenderer, FinancialHealthRenderer, WealthStatementRenderer,
};
pub use reports_service::ReportService;
pub use reports_traits::{ReportRenderer, ReportServiceTrait};
