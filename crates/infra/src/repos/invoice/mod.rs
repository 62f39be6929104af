mod inmemory;
mod postgres;

pub use inmemory::InMemoryInvoiceRepo;
pub use postgres::PostgresInvoiceRepo;

use cobrapp_domain::{Invoice, ID};

#[async_trait::async_trait]
pub trait IInvoiceRepo: Send + Sync {
    async fn insert(&self, invoice: &Invoice) -> anyhow::Result<()>;
    async fn save(&self, invoice: &Invoice) -> anyhow::Result<()>;
    async fn find(&self, invoice_id: &ID) -> Option<Invoice>;
    /// All invoices, most recently created first
    async fn find_all(&self) -> anyhow::Result<Vec<Invoice>>;
    /// The invoices that are candidates for payment reminders
    async fn find_unpaid(&self) -> anyhow::Result<Vec<Invoice>>;
    async fn delete(&self, invoice_id: &ID) -> Option<Invoice>;
}

#[cfg(test)]
mod tests {
    use crate::setup_inmemory_context;
    use chrono::NaiveDate;
    use cobrapp_domain::Invoice;

    fn invoice_factory(paid: bool, created: i64) -> Invoice {
        Invoice {
            id: Default::default(),
            invoice_number: format!("F-{}", created),
            client_name: "Carla".into(),
            client_email: "carla@example.com".into(),
            amount: 100.0,
            due_date: NaiveDate::from_ymd_opt(2024, 3, 13).unwrap(),
            paid,
            created,
        }
    }

    #[tokio::test]
    async fn finds_only_unpaid_invoices() {
        let ctx = setup_inmemory_context();

        let unpaid = invoice_factory(false, 1);
        let paid = invoice_factory(true, 2);
        ctx.repos.invoices.insert(&unpaid).await.unwrap();
        ctx.repos.invoices.insert(&paid).await.unwrap();

        let found = ctx.repos.invoices.find_unpaid().await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, unpaid.id);
    }

    #[tokio::test]
    async fn lists_invoices_newest_first() {
        let ctx = setup_inmemory_context();

        let older = invoice_factory(false, 100);
        let newer = invoice_factory(false, 200);
        ctx.repos.invoices.insert(&older).await.unwrap();
        ctx.repos.invoices.insert(&newer).await.unwrap();

        let all = ctx.repos.invoices.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, newer.id);
        assert_eq!(all[1].id, older.id);
    }

    #[tokio::test]
    async fn saves_the_paid_flag() {
        let ctx = setup_inmemory_context();

        let mut invoice = invoice_factory(false, 1);
        ctx.repos.invoices.insert(&invoice).await.unwrap();

        invoice.paid = true;
        ctx.repos.invoices.save(&invoice).await.unwrap();

        let found = ctx.repos.invoices.find(&invoice.id).await.unwrap();
        assert!(found.paid);
        assert!(ctx.repos.invoices.find_unpaid().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deletes_an_invoice() {
        let ctx = setup_inmemory_context();

        let invoice = invoice_factory(false, 1);
        ctx.repos.invoices.insert(&invoice).await.unwrap();

        let deleted = ctx.repos.invoices.delete(&invoice.id).await;
        assert_eq!(deleted.map(|i| i.id), Some(invoice.id.clone()));
        assert!(ctx.repos.invoices.find(&invoice.id).await.is_none());
    }
}
