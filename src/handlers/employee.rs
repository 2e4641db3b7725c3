use actix_web::http::header;
use actix_web::{web, HttpResponse};
use log::info;
use serde_json::json;

use crate::models::employee::{EmployeePatch, NewEmployee};
use crate::services::AppState;
use crate::utils::validation::{parse_id, validate_payload};
use crate::views::employees::{to_csv, EmployeeDirectory, EmployeeFilter};

const EXPORT_FILE_NAME: &str = "employees.csv";

pub async fn get_employees(
    state: web::Data<AppState>,
    query: web::Query<EmployeeFilter>,
) -> Result<HttpResponse, actix_web::Error> {
    let employees = state.employees.get_all().await;
    Ok(HttpResponse::Ok().json(EmployeeDirectory::build(&employees, &query)))
}

pub async fn get_employee(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = parse_id(&id)?;
    let employee = state.employees.get_by_id(id).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn create_employee(
    state: web::Data<AppState>,
    new_employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&*new_employee)?;

    let employee = state.employees.create(new_employee.into_inner()).await;
    info!("employee {} added: {}", employee.id, employee.full_name());

    Ok(HttpResponse::Created().json(employee))
}

pub async fn update_employee(
    state: web::Data<AppState>,
    id: web::Path<String>,
    updates: web::Json<EmployeePatch>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&*updates)?;
    let id = parse_id(&id)?;

    let employee = state.employees.update(id, updates.into_inner()).await?;
    info!("employee {} updated", employee.id);

    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = parse_id(&id)?;
    let employee = state.employees.delete(id).await?;
    info!("employee {} deleted", employee.id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted successfully",
        "employee": employee,
    })))
}

/// Exports the same filtered list the directory shows.
pub async fn export_employees(
    state: web::Data<AppState>,
    query: web::Query<EmployeeFilter>,
) -> Result<HttpResponse, actix_web::Error> {
    let employees = state.employees.get_all().await;
    let filtered = query.apply(&employees);
    info!("exporting {} of {} employees", filtered.len(), employees.len());

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
        ))
        .body(to_csv(&filtered)))
}
