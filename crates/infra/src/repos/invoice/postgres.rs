use super::IInvoiceRepo;

use chrono::NaiveDate;
use cobrapp_domain::{Invoice, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresInvoiceRepo {
    pool: PgPool,
}

impl PostgresInvoiceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct InvoiceRaw {
    invoice_uid: Uuid,
    invoice_number: String,
    client_name: String,
    client_email: String,
    amount: f64,
    due_date: NaiveDate,
    paid: bool,
    created: i64,
}

impl From<InvoiceRaw> for Invoice {
    fn from(raw: InvoiceRaw) -> Self {
        Self {
            id: ID::from(raw.invoice_uid),
            invoice_number: raw.invoice_number,
            client_name: raw.client_name,
            client_email: raw.client_email,
            amount: raw.amount,
            due_date: raw.due_date,
            paid: raw.paid,
            created: raw.created,
        }
    }
}

#[async_trait::async_trait]
impl IInvoiceRepo for PostgresInvoiceRepo {
    async fn insert(&self, invoice: &Invoice) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO invoices
            (invoice_uid, invoice_number, client_name, client_email, amount, due_date, paid, created)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(invoice.id.inner_ref())
        .bind(&invoice.invoice_number)
        .bind(&invoice.client_name)
        .bind(&invoice.client_email)
        .bind(invoice.amount)
        .bind(invoice.due_date)
        .bind(invoice.paid)
        .bind(invoice.created)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, invoice: &Invoice) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE invoices SET
            invoice_number = $2,
            client_name = $3,
            client_email = $4,
            amount = $5,
            due_date = $6,
            paid = $7
            WHERE invoice_uid = $1
            "#,
        )
        .bind(invoice.id.inner_ref())
        .bind(&invoice.invoice_number)
        .bind(&invoice.client_name)
        .bind(&invoice.client_email)
        .bind(invoice.amount)
        .bind(invoice.due_date)
        .bind(invoice.paid)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, invoice_id: &ID) -> Option<Invoice> {
        sqlx::query_as::<_, InvoiceRaw>(
            r#"
            SELECT * FROM invoices AS i
            WHERE i.invoice_uid = $1
            "#,
        )
        .bind(invoice_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Find invoice with id: {} failed with error: {:?}", invoice_id, e);
        })
        .ok()?
        .map(|invoice| invoice.into())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Invoice>> {
        let invoices = sqlx::query_as::<_, InvoiceRaw>(
            r#"
            SELECT * FROM invoices AS i
            ORDER BY i.created DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(invoices.into_iter().map(|invoice| invoice.into()).collect())
    }

    async fn find_unpaid(&self) -> anyhow::Result<Vec<Invoice>> {
        let invoices = sqlx::query_as::<_, InvoiceRaw>(
            r#"
            SELECT * FROM invoices AS i
            WHERE i.paid = FALSE
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(invoices.into_iter().map(|invoice| invoice.into()).collect())
    }

    async fn delete(&self, invoice_id: &ID) -> Option<Invoice> {
        sqlx::query_as::<_, InvoiceRaw>(
            r#"
            DELETE FROM invoices AS i
            WHERE i.invoice_uid = $1
            RETURNING *
            "#,
        )
        .bind(invoice_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Delete invoice with id: {} failed with error: {:?}", invoice_id, e);
        })
        .ok()?
        .map(|invoice| invoice.into())
    }
}
