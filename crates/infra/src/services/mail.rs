use anyhow::{anyhow, Context};
use serde_json::json;
use std::sync::Mutex;

const SENDGRID_API_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// An email ready for dispatch
#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Outbound mail transport. Dispatch failures are returned to the caller;
/// no retries happen at this level.
#[async_trait::async_trait]
pub trait IMailer: Send + Sync {
    async fn send(&self, email: Email) -> anyhow::Result<()>;
}

/// Mailer backed by the SendGrid v3 mail send API
pub struct SendgridMailer {
    client: reqwest::Client,
    api_key: String,
    sender_address: String,
}

impl SendgridMailer {
    pub fn new(api_key: String, sender_address: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            sender_address,
        }
    }
}

#[async_trait::async_trait]
impl IMailer for SendgridMailer {
    async fn send(&self, email: Email) -> anyhow::Result<()> {
        let body = json!({
            "personalizations": [{ "to": [{ "email": email.to }] }],
            "from": { "email": self.sender_address },
            "subject": email.subject,
            "content": [
                { "type": "text/plain", "value": email.text },
                { "type": "text/html", "value": email.html }
            ]
        });

        let res = self
            .client
            .post(SENDGRID_API_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("Unable to reach the mail provider")?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(anyhow!(
                "Mail provider rejected the email: {} - {}",
                status,
                body
            ));
        }

        Ok(())
    }
}

/// Mailer double for tests. Records every email it is given, or fails each
/// send when constructed with `failing`.
pub struct InMemoryMailer {
    pub sent: Mutex<Vec<Email>>,
    fail_sends: bool,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_sends: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_sends: true,
        }
    }
}

impl Default for InMemoryMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IMailer for InMemoryMailer {
    async fn send(&self, email: Email) -> anyhow::Result<()> {
        if self.fail_sends {
            return Err(anyhow!("Mailer was configured to fail"));
        }
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> Email {
        Email {
            to: "carla@example.com".into(),
            subject: "Factura F-001 vence HOY".into(),
            text: "Hola".into(),
            html: "<h2>Hola</h2>".into(),
        }
    }

    #[tokio::test]
    async fn inmemory_mailer_records_sends() {
        let mailer = InMemoryMailer::new();
        mailer.send(email()).await.unwrap();
        mailer.send(email()).await.unwrap();
        assert_eq!(mailer.sent.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn failing_mailer_fails_without_recording() {
        let mailer = InMemoryMailer::failing();
        assert!(mailer.send(email()).await.is_err());
        assert!(mailer.sent.lock().unwrap().is_empty());
    }
}
