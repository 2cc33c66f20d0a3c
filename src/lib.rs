pub mod cli;
pub mod config;
pub mod error;
pub mod query;
pub mod report;
pub mod repository;
pub mod seed;
pub mod storage;
pub mod view;
pub mod warnings;

pub use error::{LostFoundError, Result};
pub use report::{Report, ReportDraft, ReportKind, ReportStatus};
pub use repository::Repository;
