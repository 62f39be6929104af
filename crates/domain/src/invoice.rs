use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An `Invoice` is a billable obligation with a due date and a client
/// contact to remind. The reminder machinery only ever reads unpaid
/// invoices; the `paid` flag is flipped through the invoice API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: ID,
    /// Human-readable invoice number shown in reminder emails
    pub invoice_number: String,
    pub client_name: String,
    /// Destination address for reminder emails
    pub client_email: String,
    pub amount: f64,
    /// Calendar date the payment is due, no time component
    pub due_date: NaiveDate,
    pub paid: bool,
    /// Creation timestamp in millis
    pub created: i64,
}

impl Invoice {
    pub fn validate(&self) -> Result<(), String> {
        if self.invoice_number.trim().is_empty() {
            return Err("Invoice number cannot be empty".into());
        }
        if self.client_name.trim().is_empty() {
            return Err("Client name cannot be empty".into());
        }
        if self.client_email.trim().is_empty() || !self.client_email.contains('@') {
            return Err(format!(
                "Client email: {} is not a valid email address",
                self.client_email
            ));
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err("Amount must be a nonnegative number".into());
        }
        Ok(())
    }
}

impl Entity for Invoice {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Payment state of an invoice as shown on the dashboard, derived from the
/// day offset between its due date and today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceState {
    /// Due in more than three days
    Pendiente,
    /// Due within the next three days
    PorVencer,
    /// Due today
    VenceHoy,
    /// Past its due date
    Vencida,
}

impl InvoiceState {
    pub fn from_day_offset(day_offset: i64) -> Self {
        if day_offset > 3 {
            Self::Pendiente
        } else if day_offset > 0 {
            Self::PorVencer
        } else if day_offset == 0 {
            Self::VenceHoy
        } else {
            Self::Vencida
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn valid_invoice() -> Invoice {
        Invoice {
            id: Default::default(),
            invoice_number: "F-001".into(),
            client_name: "Carla Pérez".into(),
            client_email: "carla@example.com".into(),
            amount: 1500.0,
            due_date: NaiveDate::from_ymd_opt(2024, 3, 13).unwrap(),
            paid: false,
            created: 0,
        }
    }

    #[test]
    fn accepts_a_complete_invoice() {
        assert!(valid_invoice().validate().is_ok());
    }

    #[test]
    fn rejects_missing_fields() {
        let mut invoice = valid_invoice();
        invoice.invoice_number = "  ".into();
        assert!(invoice.validate().is_err());

        let mut invoice = valid_invoice();
        invoice.client_name = "".into();
        assert!(invoice.validate().is_err());

        let mut invoice = valid_invoice();
        invoice.client_email = "not-an-email".into();
        assert!(invoice.validate().is_err());
    }

    #[test]
    fn rejects_negative_amounts() {
        let mut invoice = valid_invoice();
        invoice.amount = -1.0;
        assert!(invoice.validate().is_err());

        invoice.amount = 0.0;
        assert!(invoice.validate().is_ok());
    }

    #[test]
    fn derives_dashboard_state_from_day_offset() {
        assert_eq!(InvoiceState::from_day_offset(10), InvoiceState::Pendiente);
        assert_eq!(InvoiceState::from_day_offset(4), InvoiceState::Pendiente);
        assert_eq!(InvoiceState::from_day_offset(3), InvoiceState::PorVencer);
        assert_eq!(InvoiceState::from_day_offset(1), InvoiceState::PorVencer);
        assert_eq!(InvoiceState::from_day_offset(0), InvoiceState::VenceHoy);
        assert_eq!(InvoiceState::from_day_offset(-1), InvoiceState::Vencida);
        assert_eq!(InvoiceState::from_day_offset(-30), InvoiceState::Vencida);
    }
}
