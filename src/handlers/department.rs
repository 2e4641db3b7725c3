use actix_web::{web, HttpResponse};
use futures_util::future::join;
use log::info;
use serde_json::json;

use crate::models::department::{DepartmentPatch, NewDepartment};
use crate::services::AppState;
use crate::utils::validation::{parse_id, validate_payload};
use crate::views::departments::{card, DepartmentsPage};

/// Department roll-up page: every department with its roster, manager and stats.
pub async fn get_departments(state: web::Data<AppState>) -> Result<HttpResponse, actix_web::Error> {
    let (departments, employees) =
        join(state.departments.get_all(), state.employees.get_all()).await;
    Ok(HttpResponse::Ok().json(DepartmentsPage::build(&departments, &employees)))
}

pub async fn get_department(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = parse_id(&id)?;
    let (department, employees) =
        join(state.departments.get_by_id(id), state.employees.get_all()).await;
    Ok(HttpResponse::Ok().json(card(&department?, &employees)))
}

pub async fn create_department(
    state: web::Data<AppState>,
    new_department: web::Json<NewDepartment>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&*new_department)?;

    let department = state.departments.create(new_department.into_inner()).await;
    info!("department {} added: {}", department.id, department.name);

    Ok(HttpResponse::Created().json(department))
}

pub async fn update_department(
    state: web::Data<AppState>,
    id: web::Path<String>,
    updates: web::Json<DepartmentPatch>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&*updates)?;
    let id = parse_id(&id)?;

    let department = state.departments.update(id, updates.into_inner()).await?;
    info!("department {} updated", department.id);

    Ok(HttpResponse::Ok().json(department))
}

/// Employees that still name the department keep their (now dangling) value.
pub async fn delete_department(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = parse_id(&id)?;
    let department = state.departments.delete(id).await?;
    info!("department {} deleted", department.id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Department deleted successfully",
        "department": department,
    })))
}
