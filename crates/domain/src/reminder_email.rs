use crate::invoice::Invoice;
use crate::reminder::ReminderKind;

/// Subject and bodies for a reminder email. Construction is a pure function
/// of the reminder kind and the invoice fields; there are exactly three
/// fixed templates, one per kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl ReminderEmail {
    pub fn new(kind: ReminderKind, invoice: &Invoice) -> Self {
        let text = body(kind, invoice);
        let html = format!(
            "<h2>Recordatorio de Pago</h2>{}",
            text.replace('\n', "<br>")
        );
        Self {
            subject: subject(kind, &invoice.invoice_number),
            text,
            html,
        }
    }
}

fn subject(kind: ReminderKind, invoice_number: &str) -> String {
    match kind {
        ReminderKind::ThreeDaysBefore => {
            format!("Recordatorio - Factura {} vence pronto", invoice_number)
        }
        ReminderKind::DueToday => format!("Factura {} vence HOY", invoice_number),
        ReminderKind::SevenDaysAfter => {
            format!("Factura {} - Seguimiento de pago", invoice_number)
        }
    }
}

fn body(kind: ReminderKind, invoice: &Invoice) -> String {
    let greeting = format!("Hola {},\n\n", invoice.client_name);

    match kind {
        ReminderKind::ThreeDaysBefore => format!(
            "{}Te recordamos que la factura {} por ${} vence en 3 días.\n\n\
             Fecha de vencimiento: {}\n\n\
             Si ya realizaste el pago, ignora este mensaje.\n\nSaludos!",
            greeting,
            invoice.invoice_number,
            invoice.amount,
            invoice.due_date.format("%d/%m/%Y")
        ),
        ReminderKind::DueToday => format!(
            "{}Solo un recordatorio de que la factura {} por ${} vence HOY.\n\n\
             Si necesitas más tiempo o ya realizaste el pago, por favor avísanos.\n\nGracias!",
            greeting, invoice.invoice_number, invoice.amount
        ),
        ReminderKind::SevenDaysAfter => format!(
            "{}La factura {} por ${} venció hace 7 días.\n\n\
             ¿Podemos coordinar el pago esta semana?\n\n\
             Si hay algún problema o ya realizaste el pago, por favor házmelo saber.\n\nQuedo atento.",
            greeting, invoice.invoice_number, invoice.amount
        ),
    }
}
