use crate::reminder::SendRemindersUseCase;
use crate::shared::usecase::execute;
use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use cobrapp_infra::CobrappContext;
use std::time::Duration;
use tracing::{error, info};

/// Runs a few minutes past midnight so a slow clock on the host cannot
/// land the run on the previous calendar date.
const RUN_OFFSET_SECS: u64 = 5 * 60;

fn secs_until_next_run(now: &DateTime<Utc>, tz: &Tz) -> u64 {
    let local = now.with_timezone(tz);
    let secs_today = local.num_seconds_from_midnight() as u64;
    (86_400 - secs_today) + RUN_OFFSET_SECS
}

/// Triggers a reminder run once a day, shortly after local midnight.
pub fn start_send_reminders_job(ctx: CobrappContext) {
    actix_web::rt::spawn(async move {
        let delay = secs_until_next_run(&ctx.sys.get_datetime(), &ctx.config.timezone);
        info!("First scheduled reminder run in {} seconds", delay);
        tokio::time::sleep(Duration::from_secs(delay)).await;

        let mut interval = tokio::time::interval(Duration::from_secs(60 * 60 * 24));
        loop {
            interval.tick().await;
            if let Err(e) = execute(SendRemindersUseCase {}, &ctx).await {
                error!("Scheduled reminder run failed: {:?}", e);
            }
        }
    });
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn waits_until_past_the_next_midnight() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 23, 0, 0).unwrap();
        let secs = secs_until_next_run(&now, &Tz::UTC);
        assert_eq!(secs, 3600 + RUN_OFFSET_SECS);
    }

    #[test]
    fn respects_the_configured_timezone() {
        // 23:00 UTC is 17:00 in Mexico City (UTC-6), so the wait is seven
        // hours instead of one.
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 23, 0, 0).unwrap();
        let secs = secs_until_next_run(&now, &Tz::America__Mexico_City);
        assert_eq!(secs, 7 * 3600 + RUN_OFFSET_SECS);
    }

    #[test]
    fn runs_shortly_after_midnight_when_just_past_it() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 1).unwrap();
        let secs = secs_until_next_run(&now, &Tz::UTC);
        assert_eq!(secs, 86_399 + RUN_OFFSET_SECS);
    }
}
