mod invoice;
mod reminder_record;
mod shared;

use invoice::{InMemoryInvoiceRepo, PostgresInvoiceRepo};
pub use invoice::IInvoiceRepo;
use reminder_record::PostgresReminderRecordRepo;
pub use reminder_record::{IReminderRecordRepo, InMemoryReminderRecordRepo};
pub use shared::DeleteResult;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub invoices: Arc<dyn IInvoiceRepo>,
    pub reminders_sent: Arc<dyn IReminderRecordRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            invoices: Arc::new(PostgresInvoiceRepo::new(pool.clone())),
            reminders_sent: Arc::new(PostgresReminderRecordRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            invoices: Arc::new(InMemoryInvoiceRepo::new()),
            reminders_sent: Arc::new(InMemoryReminderRecordRepo::new()),
        }
    }
}
