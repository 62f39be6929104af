use super::IInvoiceRepo;
use crate::repos::shared::inmemory_repo::*;
use cobrapp_domain::{Invoice, ID};

pub struct InMemoryInvoiceRepo {
    invoices: std::sync::Mutex<Vec<Invoice>>,
}

impl InMemoryInvoiceRepo {
    pub fn new() -> Self {
        Self {
            invoices: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryInvoiceRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IInvoiceRepo for InMemoryInvoiceRepo {
    async fn insert(&self, invoice: &Invoice) -> anyhow::Result<()> {
        insert(invoice, &self.invoices);
        Ok(())
    }

    async fn save(&self, invoice: &Invoice) -> anyhow::Result<()> {
        save(invoice, &self.invoices);
        Ok(())
    }

    async fn find(&self, invoice_id: &ID) -> Option<Invoice> {
        find(invoice_id, &self.invoices)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Invoice>> {
        let mut invoices = find_by(&self.invoices, |_| true);
        invoices.sort_by_key(|i| std::cmp::Reverse(i.created));
        Ok(invoices)
    }

    async fn find_unpaid(&self) -> anyhow::Result<Vec<Invoice>> {
        Ok(find_by(&self.invoices, |i| !i.paid))
    }

    async fn delete(&self, invoice_id: &ID) -> Option<Invoice> {
        delete(invoice_id, &self.invoices)
    }
}
