use crate::error::CobrappError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use cobrapp_api_structs::delete_invoice::*;
use cobrapp_domain::{Invoice, ID};
use cobrapp_infra::CobrappContext;

pub async fn delete_invoice_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<CobrappContext>,
) -> Result<HttpResponse, CobrappError> {
    let usecase = DeleteInvoiceUseCase {
        invoice_id: path_params.invoice_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|invoice| HttpResponse::Ok().json(APIResponse::new(invoice)))
        .map_err(CobrappError::from)
}

#[derive(Debug)]
pub struct DeleteInvoiceUseCase {
    pub invoice_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for CobrappError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(invoice_id) => Self::NotFound(format!(
                "The invoice with id: {}, was not found.",
                invoice_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteInvoiceUseCase {
    type Response = Invoice;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteInvoice";

    async fn execute(&mut self, ctx: &CobrappContext) -> Result<Self::Response, Self::Error> {
        let invoice = match ctx.repos.invoices.delete(&self.invoice_id).await {
            Some(invoice) => invoice,
            None => return Err(UseCaseError::NotFound(self.invoice_id.clone())),
        };

        // The postgres schema cascades this delete; the inmemory repo needs
        // it spelled out so both behave the same.
        ctx.repos
            .reminders_sent
            .delete_by_invoice(&invoice.id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(invoice)
    }
}
