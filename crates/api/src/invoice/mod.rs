mod create_invoice;
mod delete_invoice;
mod get_invoices;
mod mark_invoice_paid;

use actix_web::web;
use create_invoice::create_invoice_controller;
use delete_invoice::delete_invoice_controller;
use get_invoices::get_invoices_controller;
use mark_invoice_paid::mark_invoice_paid_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/invoices", web::post().to(create_invoice_controller));
    cfg.route("/invoices", web::get().to(get_invoices_controller));
    cfg.route(
        "/invoices/{invoice_id}/paid",
        web::put().to(mark_invoice_paid_controller),
    );
    cfg.route(
        "/invoices/{invoice_id}",
        web::delete().to(delete_invoice_controller),
    );
}
