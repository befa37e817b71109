use super::reports_model::{ReportDocument, ReportFlavor, ReportPayload};
use crate::errors::Result;

/// One rendering strategy. Implementations turn an assembled payload into
/// document bytes; they never touch storage.
pub trait ReportRenderer: Send + Sync {
    fn flavor(&self) -> ReportFlavor;
    fn content_type(&self) -> &'static str;
    fn render(&self, payload: &ReportPayload) -> Result<Vec<u8>>;
}

/// Assembles payloads and dispatches them to the registered renderers.
pub trait ReportServiceTrait: Send + Sync {
    /// Builds the document for one flavor. Degraded sections render zeroed
    /// rather than failing the report.
    fn generate_report(&self, user_id: &str, flavor: ReportFlavor) -> Result<ReportDocument>;
}
