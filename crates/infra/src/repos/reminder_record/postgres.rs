use super::IReminderRecordRepo;
use crate::repos::shared::DeleteResult;
use cobrapp_domain::{InsertReminderRecordError, ReminderKind, ReminderRecord, ID};
use sqlx::PgPool;

pub struct PostgresReminderRecordRepo {
    pool: PgPool,
}

impl PostgresReminderRecordRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl IReminderRecordRepo for PostgresReminderRecordRepo {
    async fn insert(&self, record: &ReminderRecord) -> Result<(), InsertReminderRecordError> {
        sqlx::query(
            r#"
            INSERT INTO reminders_sent
            (invoice_uid, kind, sent_at)
            VALUES($1, $2, $3)
            "#,
        )
        .bind(record.invoice_id.inner_ref())
        .bind(record.kind.as_str())
        .bind(record.sent_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            // The composite primary key on (invoice_uid, kind) is the
            // enforcement point of the at-most-once invariant
            sqlx::Error::Database(db_err)
                if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
            {
                InsertReminderRecordError::Duplicate
            }
            _ => InsertReminderRecordError::Storage(e.into()),
        })?;
        Ok(())
    }

    async fn has_sent(&self, invoice_id: &ID, kind: ReminderKind) -> anyhow::Result<bool> {
        let row: Option<(i64,)> = sqlx::query_as(
            r#"
            SELECT r.sent_at FROM reminders_sent AS r
            WHERE r.invoice_uid = $1 AND r.kind = $2
            "#,
        )
        .bind(invoice_id.inner_ref())
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.is_some())
    }

    async fn delete_by_invoice(&self, invoice_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM reminders_sent AS r
            WHERE r.invoice_uid = $1
            "#,
        )
        .bind(invoice_id.inner_ref())
        .execute(&self.pool)
        .await?;
        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }
}
