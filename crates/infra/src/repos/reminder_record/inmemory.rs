use super::IReminderRecordRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::DeleteResult;
use anyhow::anyhow;
use cobrapp_domain::{InsertReminderRecordError, ReminderKind, ReminderRecord, ID};

/// In addition to the plain store, this double can be constructed to fail
/// its inserts or its lookups, for exercising the degraded paths of the
/// reminder run.
pub struct InMemoryReminderRecordRepo {
    records: std::sync::Mutex<Vec<ReminderRecord>>,
    fail_inserts: bool,
    fail_lookups: bool,
}

impl InMemoryReminderRecordRepo {
    pub fn new() -> Self {
        Self {
            records: std::sync::Mutex::new(Vec::new()),
            fail_inserts: false,
            fail_lookups: false,
        }
    }

    pub fn failing_inserts() -> Self {
        Self {
            fail_inserts: true,
            ..Self::new()
        }
    }

    pub fn failing_lookups() -> Self {
        Self {
            fail_lookups: true,
            ..Self::new()
        }
    }
}

impl Default for InMemoryReminderRecordRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IReminderRecordRepo for InMemoryReminderRecordRepo {
    async fn insert(&self, record: &ReminderRecord) -> Result<(), InsertReminderRecordError> {
        if self.fail_inserts {
            return Err(InsertReminderRecordError::Storage(anyhow!(
                "Repo was configured to fail inserts"
            )));
        }
        // Uniqueness check and push happen under the same lock, mirroring
        // the composite primary key of the postgres table.
        let mut records = self.records.lock().unwrap();
        if records
            .iter()
            .any(|r| r.invoice_id == record.invoice_id && r.kind == record.kind)
        {
            return Err(InsertReminderRecordError::Duplicate);
        }
        records.push(record.clone());
        Ok(())
    }

    async fn has_sent(&self, invoice_id: &ID, kind: ReminderKind) -> anyhow::Result<bool> {
        if self.fail_lookups {
            return Err(anyhow!("Repo was configured to fail lookups"));
        }
        let found = find_by(&self.records, |r| {
            r.invoice_id == *invoice_id && r.kind == kind
        });
        Ok(!found.is_empty())
    }

    async fn delete_by_invoice(&self, invoice_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.records, |r| r.invoice_id == *invoice_id))
    }
}
