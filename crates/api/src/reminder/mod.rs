mod send_reminders;

use actix_web::web;
use send_reminders::send_reminders_controller;
pub use send_reminders::SendRemindersUseCase;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders/send", web::post().to(send_reminders_controller));
}
