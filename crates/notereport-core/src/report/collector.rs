//! Gathering the notes a report covers

use std::time::Instant;

use crate::error::Result;
use crate::model::{NoteRecord, ReportScope};
use crate::repository::NoteRepository;
use crate::trace_time;

/// List notes for `scope`. Root concatenates every kind's listing in
/// kind order; each listing is filtered by `search` independently.
pub fn collect_notes<R: NoteRepository + ?Sized>(
    repo: &R,
    scope: ReportScope,
    search: Option<&str>,
) -> Result<Vec<NoteRecord>> {
    let start = Instant::now();
    let mut records = Vec::new();

    for kind in scope.sub_scopes() {
        records.extend(repo.list_notes(kind, search)?);
    }

    tracing::debug!(scope = %scope, search = ?search, count = records.len(), "collect_notes");
    trace_time!(start, "collect_notes");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fixtures::sample_database;
    use crate::model::ParentKind;

    #[test]
    fn test_root_scope_concatenates_in_kind_order() {
        let db = sample_database();

        let records = collect_notes(&db, ReportScope::Root, None).unwrap();

        let nums: Vec<i64> = records.iter().map(|r| r.num).collect();
        assert_eq!(nums, vec![10, 11, 12, 13, 14, 15, 16, 17]);
        let kinds: Vec<ParentKind> = records.iter().filter_map(|r| r.parent_kind).collect();
        assert_eq!(kinds, ParentKind::ALL.to_vec());
    }

    #[test]
    fn test_root_scope_applies_search_to_every_kind() {
        let db = sample_database();

        let records = collect_notes(&db, ReportScope::Root, Some("trust")).unwrap();

        let nums: Vec<i64> = records.iter().map(|r| r.num).collect();
        assert_eq!(nums, vec![13, 14, 16]);
    }

    #[test]
    fn test_single_scope() {
        let db = sample_database();
        let records = collect_notes(&db, ReportScope::Quote, None).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "Quote note");
    }

    #[test]
    fn test_orphans_are_never_listed() {
        let db = sample_database();
        let records = collect_notes(&db, ReportScope::Root, None).unwrap();
        assert!(records.iter().all(|r| r.num != 18));
    }
}
