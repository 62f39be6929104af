use super::dtos::{InvoiceDTO, InvoiceWithStateDTO};
use chrono::NaiveDate;
use cobrapp_domain::{Invoice, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct InvoiceResponse {
    pub invoice: InvoiceDTO,
}

impl InvoiceResponse {
    pub fn new(invoice: Invoice) -> Self {
        Self {
            invoice: InvoiceDTO::new(invoice),
        }
    }
}

pub mod create_invoice {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub invoice_number: String,
        pub client_name: String,
        pub client_email: String,
        pub amount: f64,
        pub due_date: NaiveDate,
    }

    pub type APIResponse = InvoiceResponse;
}

pub mod get_invoices {
    use super::*;

    #[derive(Serialize, Deserialize)]
    pub struct APIResponse {
        pub invoices: Vec<InvoiceWithStateDTO>,
    }

    impl APIResponse {
        pub fn new(invoices: Vec<Invoice>, today: NaiveDate) -> Self {
            Self {
                invoices: invoices
                    .into_iter()
                    .map(|invoice| InvoiceWithStateDTO::new(invoice, today))
                    .collect(),
            }
        }
    }
}

pub mod mark_invoice_paid {
    use super::*;

    #[derive(Serialize, Deserialize)]
    pub struct PathParams {
        pub invoice_id: ID,
    }

    pub type APIResponse = InvoiceResponse;
}

pub mod delete_invoice {
    use super::*;

    #[derive(Serialize, Deserialize)]
    pub struct PathParams {
        pub invoice_id: ID,
    }

    pub type APIResponse = InvoiceResponse;
}
