mod invoice;
mod reminder;
mod reminder_email;
mod shared;

pub use invoice::{Invoice, InvoiceState};
pub use reminder::{day_offset, InsertReminderRecordError, ReminderKind, ReminderRecord};
pub use reminder_email::ReminderEmail;
pub use shared::entity::{Entity, InvalidIDError, ID};
