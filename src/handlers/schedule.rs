use actix_web::{web, HttpResponse};
use chrono::{NaiveDate, Utc};
use futures_util::future::join;
use log::info;
use serde::Deserialize;
use serde_json::json;

use crate::models::schedule::{NewSchedule, SchedulePatch};
use crate::services::AppState;
use crate::utils::validation::{parse_id, validate_payload};
use crate::views::schedule::WeekGrid;

#[derive(Deserialize)]
pub struct WeekQueryParams {
    date: Option<NaiveDate>,
}

pub async fn get_schedules(state: web::Data<AppState>) -> Result<HttpResponse, actix_web::Error> {
    Ok(HttpResponse::Ok().json(state.schedules.get_all().await))
}

/// Weekly grid around `?date=` (today when absent).
pub async fn get_week(
    state: web::Data<AppState>,
    query: web::Query<WeekQueryParams>,
) -> Result<HttpResponse, actix_web::Error> {
    let anchor = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let (employees, schedules) = join(state.employees.get_all(), state.schedules.get_all()).await;
    Ok(HttpResponse::Ok().json(WeekGrid::build(anchor, &employees, &schedules)))
}

pub async fn get_employee_schedules(
    state: web::Data<AppState>,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let employee_id = parse_id(&employee_id)?;
    Ok(HttpResponse::Ok().json(state.schedules.get_by_employee_id(employee_id).await))
}

pub async fn get_schedule(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = parse_id(&id)?;
    Ok(HttpResponse::Ok().json(state.schedules.get_by_id(id).await?))
}

pub async fn create_schedule(
    state: web::Data<AppState>,
    new_schedule: web::Json<NewSchedule>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&*new_schedule)?;

    let schedule = state.schedules.create(new_schedule.into_inner()).await;
    info!(
        "schedule {} added for employee {} on {}",
        schedule.id, schedule.employee_id, schedule.date
    );

    Ok(HttpResponse::Created().json(schedule))
}

pub async fn update_schedule(
    state: web::Data<AppState>,
    id: web::Path<String>,
    updates: web::Json<SchedulePatch>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&*updates)?;
    let id = parse_id(&id)?;

    let schedule = state.schedules.update(id, updates.into_inner()).await?;
    info!("schedule {} updated", schedule.id);

    Ok(HttpResponse::Ok().json(schedule))
}

pub async fn delete_schedule(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = parse_id(&id)?;
    let schedule = state.schedules.delete(id).await?;
    info!("schedule {} deleted", schedule.id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Schedule deleted successfully",
        "schedule": schedule,
    })))
}
