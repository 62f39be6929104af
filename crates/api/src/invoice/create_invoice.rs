use crate::error::CobrappError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use cobrapp_api_structs::create_invoice::*;
use cobrapp_domain::Invoice;
use cobrapp_infra::CobrappContext;

pub async fn create_invoice_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<CobrappContext>,
) -> Result<HttpResponse, CobrappError> {
    let body = body.0;
    let usecase = CreateInvoiceUseCase {
        invoice_number: body.invoice_number,
        client_name: body.client_name,
        client_email: body.client_email,
        amount: body.amount,
        due_date: body.due_date,
    };

    execute(usecase, &ctx)
        .await
        .map(|invoice| HttpResponse::Created().json(APIResponse::new(invoice)))
        .map_err(CobrappError::from)
}

#[derive(Debug)]
pub struct CreateInvoiceUseCase {
    pub invoice_number: String,
    pub client_name: String,
    pub client_email: String,
    pub amount: f64,
    pub due_date: NaiveDate,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidInvoice(String),
    StorageError,
}

impl From<UseCaseError> for CobrappError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidInvoice(msg) => Self::BadClientData(msg),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateInvoiceUseCase {
    type Response = Invoice;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateInvoice";

    async fn execute(&mut self, ctx: &CobrappContext) -> Result<Self::Response, Self::Error> {
        let invoice = Invoice {
            id: Default::default(),
            invoice_number: self.invoice_number.clone(),
            client_name: self.client_name.clone(),
            client_email: self.client_email.clone(),
            amount: self.amount,
            due_date: self.due_date,
            paid: false,
            created: ctx.sys.get_timestamp_millis(),
        };

        invoice.validate().map_err(UseCaseError::InvalidInvoice)?;

        ctx.repos
            .invoices
            .insert(&invoice)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(invoice)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use cobrapp_infra::setup_inmemory_context;

    fn usecase_factory() -> CreateInvoiceUseCase {
        CreateInvoiceUseCase {
            invoice_number: "F-001".into(),
            client_name: "Carla Pérez".into(),
            client_email: "carla@example.com".into(),
            amount: 1500.0,
            due_date: NaiveDate::from_ymd_opt(2024, 3, 13).unwrap(),
        }
    }

    #[actix_web::main]
    #[test]
    async fn creates_an_unpaid_invoice() {
        let ctx = setup_inmemory_context();

        let res = execute(usecase_factory(), &ctx).await;

        assert!(res.is_ok());
        let invoice = res.unwrap();
        assert!(!invoice.paid);

        let stored = ctx.repos.invoices.find(&invoice.id).await;
        assert_eq!(stored, Some(invoice));
    }

    #[actix_web::main]
    #[test]
    async fn rejects_an_invoice_with_missing_fields() {
        let ctx = setup_inmemory_context();

        let mut usecase = usecase_factory();
        usecase.client_name = "".into();

        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseError::InvalidInvoice(_))));
        assert!(ctx.repos.invoices.find_all().await.unwrap().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_a_negative_amount() {
        let ctx = setup_inmemory_context();

        let mut usecase = usecase_factory();
        usecase.amount = -250.0;

        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseError::InvalidInvoice(_))));
    }
}
