use chrono::NaiveDate;
use cobrapp_domain::{day_offset, Invoice, InvoiceState, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDTO {
    pub id: ID,
    pub invoice_number: String,
    pub client_name: String,
    pub client_email: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub paid: bool,
}

impl InvoiceDTO {
    pub fn new(invoice: Invoice) -> Self {
        Self {
            id: invoice.id,
            invoice_number: invoice.invoice_number,
            client_name: invoice.client_name,
            client_email: invoice.client_email,
            amount: invoice.amount,
            due_date: invoice.due_date,
            paid: invoice.paid,
        }
    }
}

/// Dashboard entry: the invoice plus its derived payment state and the day
/// distance to (or since) its due date.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceWithStateDTO {
    pub invoice: InvoiceDTO,
    pub estado: InvoiceState,
    pub dias: i64,
}

impl InvoiceWithStateDTO {
    pub fn new(invoice: Invoice, today: NaiveDate) -> Self {
        let offset = day_offset(invoice.due_date, today);
        Self {
            estado: InvoiceState::from_day_offset(offset),
            dias: offset.abs(),
            invoice: InvoiceDTO::new(invoice),
        }
    }
}
