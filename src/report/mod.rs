mod draft;

pub use draft::{FieldError, ReportDraft, ValidationErrors};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Lost,
    Found,
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportKind::Lost => write!(f, "lost"),
            ReportKind::Found => write!(f, "found"),
        }
    }
}

impl std::str::FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lost" => Ok(ReportKind::Lost),
            "found" => Ok(ReportKind::Found),
            _ => Err(format!("Invalid report type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Open,
    Held,
}

impl ReportStatus {
    /// Initial status derived from the report type: found items are held at
    /// reception, lost items stay open until claimed.
    pub fn for_kind(kind: ReportKind) -> Self {
        match kind {
            ReportKind::Lost => ReportStatus::Open,
            ReportKind::Found => ReportStatus::Held,
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Open => write!(f, "open"),
            ReportStatus::Held => write!(f, "held"),
        }
    }
}

/// A single lost-or-found item submission.
///
/// Serializes to the store's wire shape:
/// `{ id, type, itemName, category, location, date, details, contactName,
/// contactEmail, status, createdAt }`. `date` is the user-supplied date of
/// the loss/finding event; `created_at` is when the report was filed and is
/// what recency ordering uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: ReportKind,
    pub item_name: String,
    pub category: String,
    pub location: String,
    pub date: String,
    pub details: String,
    pub contact_name: String,
    pub contact_email: String,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
}

impl Report {
    /// Build a report from a validated draft, stamping `id`, `status`, and
    /// `created_at`. Field values are trimmed; an invalid draft is rejected
    /// whole and nothing is stamped.
    pub fn new(kind: ReportKind, draft: ReportDraft) -> Result<Self, ValidationErrors> {
        draft.validate()?;

        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            item_name: draft.item_name.trim().to_string(),
            category: draft.category.trim().to_string(),
            location: draft.location.trim().to_string(),
            date: draft.date.trim().to_string(),
            details: draft.details.trim().to_string(),
            contact_name: draft.contact_name.trim().to_string(),
            contact_email: draft.contact_email.trim().to_string(),
            status: ReportStatus::for_kind(kind),
            created_at: Utc::now(),
        })
    }
}
