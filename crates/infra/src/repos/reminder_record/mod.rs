mod inmemory;
mod postgres;

pub use inmemory::InMemoryReminderRecordRepo;
pub use postgres::PostgresReminderRecordRepo;

use crate::repos::shared::DeleteResult;
use cobrapp_domain::{InsertReminderRecordError, ReminderKind, ReminderRecord, ID};

/// Append-only record of reminders already dispatched. The (invoice, kind)
/// pair is the unique key, so the store itself enforces the at-most-once
/// guarantee independently of caller discipline.
#[async_trait::async_trait]
pub trait IReminderRecordRepo: Send + Sync {
    /// Fails with `InsertReminderRecordError::Duplicate` when a record with
    /// the same (invoice, kind) key already exists.
    async fn insert(&self, record: &ReminderRecord) -> Result<(), InsertReminderRecordError>;
    async fn has_sent(&self, invoice_id: &ID, kind: ReminderKind) -> anyhow::Result<bool>;
    async fn delete_by_invoice(&self, invoice_id: &ID) -> anyhow::Result<DeleteResult>;
}

#[cfg(test)]
mod tests {
    use crate::setup_inmemory_context;
    use cobrapp_domain::{InsertReminderRecordError, ReminderKind, ReminderRecord, ID};

    fn record_factory(invoice_id: &ID, kind: ReminderKind) -> ReminderRecord {
        ReminderRecord {
            invoice_id: invoice_id.clone(),
            kind,
            sent_at: 100,
        }
    }

    #[tokio::test]
    async fn records_a_sent_reminder() {
        let ctx = setup_inmemory_context();
        let invoice_id = ID::default();

        let sent = ctx
            .repos
            .reminders_sent
            .has_sent(&invoice_id, ReminderKind::DueToday)
            .await
            .unwrap();
        assert!(!sent);

        ctx.repos
            .reminders_sent
            .insert(&record_factory(&invoice_id, ReminderKind::DueToday))
            .await
            .unwrap();

        let sent = ctx
            .repos
            .reminders_sent
            .has_sent(&invoice_id, ReminderKind::DueToday)
            .await
            .unwrap();
        assert!(sent);

        // Other kinds for the same invoice are unaffected
        let sent = ctx
            .repos
            .reminders_sent
            .has_sent(&invoice_id, ReminderKind::ThreeDaysBefore)
            .await
            .unwrap();
        assert!(!sent);
    }

    #[tokio::test]
    async fn rejects_duplicate_keys() {
        let ctx = setup_inmemory_context();
        let invoice_id = ID::default();
        let record = record_factory(&invoice_id, ReminderKind::ThreeDaysBefore);

        ctx.repos.reminders_sent.insert(&record).await.unwrap();

        let res = ctx.repos.reminders_sent.insert(&record).await;
        assert!(matches!(res, Err(InsertReminderRecordError::Duplicate)));

        // A different invoice with the same kind is a different key
        let other = record_factory(&ID::default(), ReminderKind::ThreeDaysBefore);
        assert!(ctx.repos.reminders_sent.insert(&other).await.is_ok());
    }

    #[tokio::test]
    async fn deletes_records_for_an_invoice() {
        let ctx = setup_inmemory_context();
        let invoice_id = ID::default();

        ctx.repos
            .reminders_sent
            .insert(&record_factory(&invoice_id, ReminderKind::ThreeDaysBefore))
            .await
            .unwrap();
        ctx.repos
            .reminders_sent
            .insert(&record_factory(&invoice_id, ReminderKind::DueToday))
            .await
            .unwrap();

        let res = ctx
            .repos
            .reminders_sent
            .delete_by_invoice(&invoice_id)
            .await
            .unwrap();
        assert_eq!(res.deleted_count, 2);

        let sent = ctx
            .repos
            .reminders_sent
            .has_sent(&invoice_id, ReminderKind::DueToday)
            .await
            .unwrap();
        assert!(!sent);
    }
}
