use crate::error::CobrappError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use cobrapp_api_structs::send_reminders::*;
use cobrapp_domain::{day_offset, ReminderEmail, ReminderKind, ReminderRecord, ID};
use cobrapp_infra::{CobrappContext, Email};
use tracing::{info, warn};

pub async fn send_reminders_controller(
    ctx: web::Data<CobrappContext>,
) -> Result<HttpResponse, CobrappError> {
    let usecase = SendRemindersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.sent)))
        .map_err(CobrappError::from)
}

/// Walks the unpaid invoices and dispatches the reminder matching each
/// invoice's day distance to its due date, at most once per
/// (invoice, kind) pair.
#[derive(Debug)]
pub struct SendRemindersUseCase {}

#[derive(Debug)]
pub struct RemindersSent {
    pub sent: usize,
    pub errors: Vec<ReminderError>,
}

/// A failure while processing a single invoice. Recorded and skipped; the
/// rest of the run continues.
#[derive(Debug)]
pub struct ReminderError {
    pub invoice_id: ID,
    pub kind: ReminderKind,
    pub reason: ReminderErrorReason,
}

#[derive(Debug)]
pub enum ReminderErrorReason {
    /// The dedup lookup failed, so sending would risk a duplicate
    DedupCheck(String),
    /// The mail transport refused the email; no dedup record was written,
    /// so a later run on a matching day would retry
    Dispatch(String),
    /// The email went out but the dedup record could not be written. The
    /// send cannot be taken back, and without the record a future run may
    /// send this reminder again.
    SentButNotRecorded(String),
}

#[derive(Debug)]
pub enum UseCaseError {
    /// Another reminder run is already in flight
    RunInProgress,
    StorageError,
}

impl From<UseCaseError> for CobrappError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::RunInProgress => {
                Self::Conflict("A reminder run is already in progress".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendRemindersUseCase {
    type Response = RemindersSent;

    type Error = UseCaseError;

    const NAME: &'static str = "SendReminders";

    async fn execute(&mut self, ctx: &CobrappContext) -> Result<Self::Response, Self::Error> {
        // Two overlapping runs could both observe has_sent == false for the
        // same (invoice, kind) before either records, so at most one run
        // may be in flight. A concurrent trigger is rejected, not queued.
        let _guard = ctx
            .reminder_run_guard
            .try_lock()
            .map_err(|_| UseCaseError::RunInProgress)?;

        // Losing the whole invoice list is fatal for the run; everything
        // after this point degrades per invoice instead.
        let invoices = ctx
            .repos
            .invoices
            .find_unpaid()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let today = ctx.today();
        let mut sent = 0;
        let mut errors = Vec::new();

        for invoice in invoices {
            let offset = day_offset(invoice.due_date, today);
            let kind = match ReminderKind::classify(offset) {
                Some(kind) => kind,
                None => continue,
            };

            match ctx.repos.reminders_sent.has_sent(&invoice.id, kind).await {
                Ok(true) => continue,
                Ok(false) => (),
                Err(e) => {
                    errors.push(ReminderError {
                        invoice_id: invoice.id.clone(),
                        kind,
                        reason: ReminderErrorReason::DedupCheck(e.to_string()),
                    });
                    continue;
                }
            }

            let contents = ReminderEmail::new(kind, &invoice);
            let email = Email {
                to: invoice.client_email.clone(),
                subject: contents.subject,
                text: contents.text,
                html: contents.html,
            };

            if let Err(e) = ctx.mailer.send(email).await {
                warn!(
                    "Unable to send {} reminder for invoice {}: {:?}",
                    kind, invoice.id, e
                );
                errors.push(ReminderError {
                    invoice_id: invoice.id.clone(),
                    kind,
                    reason: ReminderErrorReason::Dispatch(e.to_string()),
                });
                continue;
            }

            let record = ReminderRecord {
                invoice_id: invoice.id.clone(),
                kind,
                sent_at: ctx.sys.get_timestamp_millis(),
            };
            match ctx.repos.reminders_sent.insert(&record).await {
                Ok(()) => sent += 1,
                Err(e) => {
                    warn!(
                        "Reminder {} for invoice {} was sent but not recorded: {:?}",
                        kind, invoice.id, e
                    );
                    sent += 1;
                    errors.push(ReminderError {
                        invoice_id: invoice.id.clone(),
                        kind,
                        reason: ReminderErrorReason::SentButNotRecorded(e.to_string()),
                    });
                }
            }
        }

        info!(
            "Reminder run finished: {} sent, {} invoices with errors",
            sent,
            errors.len()
        );

        Ok(RemindersSent { sent, errors })
    }
}
