use std::path::Path;

use crate::error::{LostFoundError, Result};
use crate::report::Report;
use crate::seed;
use crate::storage::LocalStore;

/// Owner of the report collection. Every operation is a whole-collection
/// read-modify-write against the local store; nothing else touches it.
pub struct Repository {
    store: LocalStore,
}

impl Repository {
    /// Open (or create) the store under `<root>/.lostfound/`.
    pub fn open(root: &Path) -> Result<Self> {
        Ok(Self {
            store: LocalStore::open(root)?,
        })
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    /// The full collection in storage order. No implicit sort; display
    /// ordering is the query engine's job.
    pub fn list_all(&self) -> Result<Vec<Report>> {
        self.store.load()
    }

    /// Append a validated report to the end of the collection.
    pub fn append(&self, report: Report) -> Result<()> {
        let mut reports = self.store.load()?;

        // Ids are generated fresh at creation; a collision here means the
        // caller is replaying a report that is already stored.
        if reports.iter().any(|r| r.id == report.id) {
            return Err(LostFoundError::DuplicateReport(report.id.to_string()));
        }

        reports.push(report);
        self.store.save(&reports)
    }

    /// Insert the demo set if the collection is empty. Idempotent, and never
    /// touches existing data: an unreadable payload still holds somebody's
    /// reports, so a corrupt store is left alone rather than reseeded.
    /// Returns whether seeding happened.
    pub fn seed_if_empty(&self) -> Result<bool> {
        let existing = match self.store.load_strict() {
            Ok(reports) => reports,
            Err(LostFoundError::StorageCorrupt(reason)) => {
                tracing::warn!(%reason, "refusing to seed a corrupt store");
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        if !existing.is_empty() {
            return Ok(false);
        }

        self.store.save(&seed::demo_reports())?;
        Ok(true)
    }

    /// Clear the store and re-seed. Destructive; demo and test use only.
    pub fn reset_all(&self) -> Result<()> {
        self.store.clear()?;
        self.store.save(&seed::demo_reports())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportDraft, ReportKind, ReportStatus};
    use crate::storage::STORE_KEY;
    use tempfile::TempDir;

    fn draft(item_name: &str) -> ReportDraft {
        ReportDraft {
            item_name: item_name.to_string(),
            category: "Accessories".to_string(),
            location: "Library".to_string(),
            date: "2026-01-12".to_string(),
            details: "Black purse with small gold chain.".to_string(),
            contact_name: "Student".to_string(),
            contact_email: "student@campus.edu".to_string(),
        }
    }

    #[test]
    fn test_append_then_list_round_trip() {
        let tmp = TempDir::new().unwrap();
        let repo = Repository::open(tmp.path()).unwrap();

        let report = Report::new(ReportKind::Lost, draft("Purse")).unwrap();
        repo.append(report.clone()).unwrap();

        let all = repo.list_all().unwrap();
        assert_eq!(all, vec![report]);
    }

    #[test]
    fn test_append_preserves_storage_order() {
        let tmp = TempDir::new().unwrap();
        let repo = Repository::open(tmp.path()).unwrap();

        let first = Report::new(ReportKind::Lost, draft("Purse")).unwrap();
        let second = Report::new(ReportKind::Found, draft("Umbrella")).unwrap();
        repo.append(first.clone()).unwrap();
        repo.append(second.clone()).unwrap();

        let all = repo.list_all().unwrap();
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[1].id, second.id);
    }

    #[test]
    fn test_append_rejects_duplicate_id() {
        let tmp = TempDir::new().unwrap();
        let repo = Repository::open(tmp.path()).unwrap();

        let report = Report::new(ReportKind::Lost, draft("Purse")).unwrap();
        repo.append(report.clone()).unwrap();

        let result = repo.append(report);
        assert!(matches!(result, Err(LostFoundError::DuplicateReport(_))));
        assert_eq!(repo.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_seed_if_empty_seeds_once() {
        let tmp = TempDir::new().unwrap();
        let repo = Repository::open(tmp.path()).unwrap();

        assert!(repo.seed_if_empty().unwrap());
        let seeded = repo.list_all().unwrap();
        assert_eq!(seeded.len(), 3);
        assert_eq!(
            seeded
                .iter()
                .filter(|r| r.kind == ReportKind::Lost)
                .count(),
            2
        );
        assert_eq!(
            seeded
                .iter()
                .filter(|r| r.kind == ReportKind::Found)
                .count(),
            1
        );

        // Second call is a no-op: same ids, same order
        assert!(!repo.seed_if_empty().unwrap());
        assert_eq!(repo.list_all().unwrap(), seeded);
    }

    #[test]
    fn test_seed_never_overwrites_user_data() {
        let tmp = TempDir::new().unwrap();
        let repo = Repository::open(tmp.path()).unwrap();

        let report = Report::new(ReportKind::Found, draft("Blue Water Bottle")).unwrap();
        repo.append(report.clone()).unwrap();

        assert!(!repo.seed_if_empty().unwrap());
        assert_eq!(repo.list_all().unwrap(), vec![report]);
    }

    #[test]
    fn test_seed_refuses_corrupt_store() {
        let tmp = TempDir::new().unwrap();
        let repo = Repository::open(tmp.path()).unwrap();
        repo.store().put_raw(STORE_KEY, "{not valid json").unwrap();

        assert!(!repo.seed_if_empty().unwrap());

        // The unreadable payload is left in place for inspection
        let raw = repo.store().get_raw(STORE_KEY).unwrap();
        assert_eq!(raw.as_deref(), Some("{not valid json"));
    }

    #[test]
    fn test_reset_all_reseeds() {
        let tmp = TempDir::new().unwrap();
        let repo = Repository::open(tmp.path()).unwrap();

        repo.append(Report::new(ReportKind::Lost, draft("Purse")).unwrap())
            .unwrap();
        repo.reset_all().unwrap();

        let all = repo.list_all().unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|r| r.status == ReportStatus::for_kind(r.kind)));
    }

    #[test]
    fn test_invalid_draft_leaves_store_unchanged() {
        let tmp = TempDir::new().unwrap();
        let repo = Repository::open(tmp.path()).unwrap();
        repo.seed_if_empty().unwrap();
        let before = repo.list_all().unwrap();

        let mut bad = draft("Wallet");
        bad.contact_email = "not-an-email".to_string();
        assert!(Report::new(ReportKind::Lost, bad).is_err());

        assert_eq!(repo.list_all().unwrap(), before);
    }
}
