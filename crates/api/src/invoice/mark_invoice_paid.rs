use crate::error::CobrappError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use cobrapp_api_structs::mark_invoice_paid::*;
use cobrapp_domain::{Invoice, ID};
use cobrapp_infra::CobrappContext;

pub async fn mark_invoice_paid_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<CobrappContext>,
) -> Result<HttpResponse, CobrappError> {
    let usecase = MarkInvoicePaidUseCase {
        invoice_id: path_params.invoice_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|invoice| HttpResponse::Ok().json(APIResponse::new(invoice)))
        .map_err(CobrappError::from)
}

#[derive(Debug)]
pub struct MarkInvoicePaidUseCase {
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
impl UseCase for MarkInvoicePaidUseCase {
    type Response = Invoice;

    type Error = UseCaseError;

    const NAME: &'static str = "MarkInvoicePaid";

    async fn execute(&mut self, ctx: &CobrappContext) -> Result<Self::Response, Self::Error> {
        let mut invoice = match ctx.repos.invoices.find(&self.invoice_id).await {
            Some(invoice) => invoice,
            None => return Err(UseCaseError::NotFound(self.invoice_id.clone())),
        };

        invoice.paid = true;

        ctx.repos
            .invoices
            .save(&invoice)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(invoice)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use cobrapp_infra::setup_inmemory_context;

    fn invoice_factory() -> Invoice {
        Invoice {
            id: Default::default(),
            invoice_number: "F-001".into(),
            client_name: "Carla".into(),
            client_email: "carla@example.com".into(),
            amount: 100.0,
            due_date: NaiveDate::from_ymd_opt(2024, 3, 13).unwrap(),
            paid: false,
            created: 0,
        }
    }

    #[actix_web::main]
    #[test]
    async fn marks_an_invoice_as_paid() {
        let ctx = setup_inmemory_context();
        let invoice = invoice_factory();
        ctx.repos.invoices.insert(&invoice).await.unwrap();

        let usecase = MarkInvoicePaidUseCase {
            invoice_id: invoice.id.clone(),
        };
        let res = execute(usecase, &ctx).await;

        assert!(res.unwrap().paid);
        assert!(ctx.repos.invoices.find_unpaid().await.unwrap().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_an_unknown_invoice_id() {
        let ctx = setup_inmemory_context();

        let usecase = MarkInvoicePaidUseCase {
            invoice_id: ID::default(),
        };
        let res = execute(usecase, &ctx).await;

        assert!(matches!(res, Err(UseCaseError::NotFound(_))));
    }
}
