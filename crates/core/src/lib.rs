pub mod analyze;
pub mod audit;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod report;

pub use analyze::{ContentAnalyzer, GeminiAnalyzer, GeminiConfig};
pub use audit::{AuditConfig, audit_url};
pub use error::{AuditError, Result};
pub use extract::{ExtractConfig, extract_text};
pub use fetch::{FetchConfig, fetch_url};
pub use report::AuditReport;
