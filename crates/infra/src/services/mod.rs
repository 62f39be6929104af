mod mail;

pub use mail::{Email, IMailer, InMemoryMailer, SendgridMailer};
