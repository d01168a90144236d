//! Filter configuration persistence

use rusqlite::{params, OptionalExtension};

use super::REPORT_TYPE_NOTES;
use crate::error::Result;
use crate::map_db_err;
use crate::model::ReportScope;
use crate::report::FilterEntry;

impl super::Database {
    pub(crate) fn config_names(&self, scope: ReportScope) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT config_name FROM filter_configs \
                 WHERE report_type = ?1 AND report_scope = ?2 ORDER BY config_name",
            )
            .map_err(|e| map_db_err!("prepare filter config listing", e))?;

        let names = stmt
            .query_map(params![REPORT_TYPE_NOTES, scope.filter_scope()], |r| {
                r.get::<_, String>(0)
            })
            .map_err(|e| map_db_err!("list filter configs", e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read filter config name", e))?;

        Ok(names)
    }

    pub(crate) fn read_config(
        &self,
        scope: ReportScope,
        name: &str,
    ) -> Result<Option<Vec<FilterEntry>>> {
        let json: Option<String> = self
            .conn
            .query_row(
                "SELECT entries_json FROM filter_configs \
                 WHERE report_type = ?1 AND report_scope = ?2 AND config_name = ?3",
                params![REPORT_TYPE_NOTES, scope.filter_scope(), name],
                |r| r.get(0),
            )
            .optional()
            .map_err(|e| map_db_err!("load filter config", e))?;

        match json {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    pub(crate) fn write_config(
        &self,
        scope: ReportScope,
        name: &str,
        entries: &[FilterEntry],
    ) -> Result<()> {
        let json = serde_json::to_string(entries)?;
        self.conn
            .execute(
                "INSERT OR REPLACE INTO filter_configs \
                 (report_type, report_scope, config_name, entries_json) VALUES (?1, ?2, ?3, ?4)",
                params![REPORT_TYPE_NOTES, scope.filter_scope(), name, json],
            )
            .map_err(|e| map_db_err!("save filter config", e))?;
        tracing::debug!(scope = %scope, name, entries = entries.len(), "save_filter_config");
        Ok(())
    }

    pub(crate) fn remove_config(&self, scope: ReportScope, name: &str) -> Result<bool> {
        let removed = self
            .conn
            .execute(
                "DELETE FROM filter_configs \
                 WHERE report_type = ?1 AND report_scope = ?2 AND config_name = ?3",
                params![REPORT_TYPE_NOTES, scope.filter_scope(), name],
            )
            .map_err(|e| map_db_err!("delete filter config", e))?;
        Ok(removed > 0)
    }
}
