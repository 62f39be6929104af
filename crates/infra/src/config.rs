use chrono_tz::Tz;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Sender address for outgoing reminder emails
    pub sender_address: String,
    /// Timezone in which "today" is resolved when classifying reminders.
    /// Due dates are plain calendar dates, so this decides at which instant
    /// a given invoice flips from "due in 1 day" to "due today".
    pub timezone: Tz,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };
        let sender_address = match std::env::var("SENDGRID_FROM_EMAIL") {
            Ok(address) => address,
            Err(_) => {
                let default_sender = "recordatorios@cobrapp.com";
                info!(
                    "Did not find SENDGRID_FROM_EMAIL environment variable. Using the default sender: {}",
                    default_sender
                );
                default_sender.into()
            }
        };
        let timezone = match std::env::var("TIMEZONE") {
            Ok(tz) => match tz.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    warn!(
                        "The given TIMEZONE: {} is not a valid timezone name, falling back to UTC.",
                        tz
                    );
                    Tz::UTC
                }
            },
            Err(_) => Tz::UTC,
        };
        Self {
            port,
            sender_address,
            timezone,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
