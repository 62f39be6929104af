mod config;
mod repos;
mod services;
mod system;

use chrono::NaiveDate;
pub use config::Config;
pub use repos::{DeleteResult, IInvoiceRepo, IReminderRecordRepo, InMemoryReminderRecordRepo, Repos};
pub use services::{Email, IMailer, InMemoryMailer, SendgridMailer};
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct CobrappContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub mailer: Arc<dyn IMailer>,
    /// Serializes reminder runs. Overlapping triggers would both observe a
    /// reminder as unsent before either records it, so only one run may be
    /// in flight at a time.
    pub reminder_run_guard: Arc<Mutex<()>>,
}

struct ContextParams {
    pub postgres_connection_string: String,
    pub sendgrid_api_key: String,
}

impl CobrappContext {
    async fn create(params: ContextParams) -> Self {
        let repos = Repos::create_postgres(&params.postgres_connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        let config = Config::new();
        let mailer = Arc::new(SendgridMailer::new(
            params.sendgrid_api_key,
            config.sender_address.clone(),
        ));
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            mailer,
            reminder_run_guard: Arc::new(Mutex::new(())),
        }
    }

    /// "Today" for reminder classification: the current instant in the
    /// configured timezone, truncated to the calendar date.
    pub fn today(&self) -> NaiveDate {
        self.sys
            .get_datetime()
            .with_timezone(&self.config.timezone)
            .date_naive()
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> CobrappContext {
    CobrappContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string(),
        sendgrid_api_key: get_sendgrid_api_key(),
    })
    .await
}

/// Context backed by inmemory repos and a recording mailer, for tests
pub fn setup_inmemory_context() -> CobrappContext {
    CobrappContext {
        repos: Repos::create_inmemory(),
        config: Config::new(),
        sys: Arc::new(RealSys {}),
        mailer: Arc::new(InMemoryMailer::new()),
        reminder_run_guard: Arc::new(Mutex::new(())),
    }
}

fn get_psql_connection_string() -> String {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING)
        .unwrap_or_else(|_| panic!("{} env var to be present.", PSQL_CONNECTION_STRING))
}

fn get_sendgrid_api_key() -> String {
    const SENDGRID_API_KEY: &str = "SENDGRID_API_KEY";

    std::env::var(SENDGRID_API_KEY)
        .unwrap_or_else(|_| panic!("{} env var to be present.", SENDGRID_API_KEY))
}

pub async fn run_migration() -> Result<(), MigrateError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&get_psql_connection_string())
        .await
        .expect("TO CONNECT TO POSTGRES");

    sqlx::migrate!().run(&pool).await
}
