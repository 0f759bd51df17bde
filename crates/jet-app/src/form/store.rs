use std::sync::atomic::{AtomicU64, Ordering};

use jet_core::form::{FieldValue, FormData, FormField, FormPatch};
use tokio::sync::watch;
use tracing::debug;

/// Mutable registration form state with change notification.
///
/// Every mutation is one `watch` publish, so observers see either the state
/// before an update or the state after it, never a half-applied batch.
pub struct FormDataStore {
    tx: watch::Sender<FormData>,
    revision: AtomicU64,
}

impl FormDataStore {
    pub fn new() -> Self {
        Self::with_data(FormData::default())
    }

    pub fn with_data(data: FormData) -> Self {
        let (tx, _rx) = watch::channel(data);
        Self {
            tx,
            revision: AtomicU64::new(0),
        }
    }

    /// Set a single field. Last write wins.
    pub fn update_field(&self, field: FormField, value: FieldValue) {
        self.tx.send_modify(|data| {
            data.set(field, value);
        });
        self.bump(1);
    }

    /// Apply several field updates as one state change.
    pub fn update_multiple_fields(&self, patch: FormPatch) {
        if patch.is_empty() {
            return;
        }
        let count = patch.len();
        self.tx.send_modify(|data| data.apply(patch));
        self.bump(count);
    }

    /// Restore every field to its schema default.
    pub fn reset(&self) {
        self.tx.send_replace(FormData::default());
        debug!("form data reset to defaults");
        self.revision.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self, field: FormField) -> FieldValue {
        self.tx.borrow().get(field).clone()
    }

    pub fn snapshot(&self) -> FormData {
        self.tx.borrow().clone()
    }

    /// Receiver notified after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<FormData> {
        self.tx.subscribe()
    }

    /// Number of published state changes so far.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    fn bump(&self, fields: usize) {
        let revision = self.revision.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(revision, fields, "form data updated");
    }
}

impl Default for FormDataStore {
    fn default() -> Self {
        Self::new()
    }
}
