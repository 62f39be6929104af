use crate::error::CobrappError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use cobrapp_api_structs::get_invoices::*;
use cobrapp_domain::Invoice;
use cobrapp_infra::CobrappContext;

pub async fn get_invoices_controller(
    ctx: web::Data<CobrappContext>,
) -> Result<HttpResponse, CobrappError> {
    let today = ctx.today();
    let usecase = GetInvoicesUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|invoices| HttpResponse::Ok().json(APIResponse::new(invoices, today)))
        .map_err(CobrappError::from)
}

#[derive(Debug)]
pub struct GetInvoicesUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for CobrappError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetInvoicesUseCase {
    type Response = Vec<Invoice>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetInvoices";

    async fn execute(&mut self, ctx: &CobrappContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .invoices
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use cobrapp_api_structs::dtos::InvoiceWithStateDTO;
    use cobrapp_domain::InvoiceState;
    use cobrapp_infra::setup_inmemory_context;

    fn invoice_factory(due_date: NaiveDate, created: i64) -> Invoice {
        Invoice {
            id: Default::default(),
            invoice_number: format!("F-{}", created),
            client_name: "Carla".into(),
            client_email: "carla@example.com".into(),
            amount: 100.0,
            due_date,
            paid: false,
            created,
        }
    }

    #[actix_web::main]
    #[test]
    async fn lists_invoices_newest_first_with_derived_state() {
        let ctx = setup_inmemory_context();
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

        let due_today = invoice_factory(today, 200);
        let overdue = invoice_factory(today - chrono::Duration::days(2), 100);
        ctx.repos.invoices.insert(&due_today).await.unwrap();
        ctx.repos.invoices.insert(&overdue).await.unwrap();

        let invoices = execute(GetInvoicesUseCase {}, &ctx).await.unwrap();
        assert_eq!(invoices.len(), 2);
        assert_eq!(invoices[0].id, due_today.id);

        let dto = InvoiceWithStateDTO::new(invoices[0].clone(), today);
        assert_eq!(dto.estado, InvoiceState::VenceHoy);
        assert_eq!(dto.dias, 0);

        let dto = InvoiceWithStateDTO::new(invoices[1].clone(), today);
        assert_eq!(dto.estado, InvoiceState::Vencida);
        assert_eq!(dto.dias, 2);
    }
}
