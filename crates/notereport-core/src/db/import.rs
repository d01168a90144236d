//! Bulk import of a [`Dataset`]

use crate::error::Result;
use crate::map_db_err;
use crate::model::Dataset;

impl super::Database {
    /// Insert every entity in `data` inside one transaction.
    ///
    /// Rows with an existing number are replaced. Returns the number of
    /// rows written.
    pub fn import(&self, data: &Dataset) -> Result<usize> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| map_db_err!("begin import transaction", e))?;

        for library in &data.libraries {
            self.insert_library(library)?;
        }
        for document in &data.documents {
            self.insert_document(document)?;
        }
        for episode in &data.episodes {
            self.insert_episode(episode)?;
        }
        for transcript in &data.transcripts {
            self.insert_transcript(transcript)?;
        }
        for collection in &data.collections {
            self.insert_collection(collection)?;
        }
        for quote in &data.quotes {
            self.insert_quote(quote)?;
        }
        for clip in &data.clips {
            self.insert_clip(clip)?;
        }
        for snapshot in &data.snapshots {
            self.insert_snapshot(snapshot)?;
        }
        for note in &data.notes {
            self.insert_note(note)?;
        }

        tx.commit()
            .map_err(|e| map_db_err!("commit import transaction", e))?;

        let written = data.libraries.len()
            + data.documents.len()
            + data.episodes.len()
            + data.transcripts.len()
            + data.collections.len()
            + data.quotes.len()
            + data.clips.len()
            + data.snapshots.len()
            + data.notes.len();
        tracing::info!(rows = written, "import_complete");
        Ok(written)
    }
}
