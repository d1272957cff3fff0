//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! input validation on the write path and report generation on the read
//! path.

pub mod entry;
pub mod reporting;

pub use entry::EntryService;
pub use reporting::ReportingService;
