use actix_web::{web, HttpResponse};
use chrono::Utc;
use futures_util::future::join;

use crate::services::AppState;
use crate::views::dashboard::Dashboard;

pub async fn get_dashboard(state: web::Data<AppState>) -> Result<HttpResponse, actix_web::Error> {
    let (employees, departments) =
        join(state.employees.get_all(), state.departments.get_all()).await;
    let today = Utc::now().date_naive();
    Ok(HttpResponse::Ok().json(Dashboard::build(&employees, &departments, today)))
}
