pub mod dashboard;
pub mod department;
pub mod employee;
pub mod schedule;
pub mod settings;

use actix_web::web;

use crate::errors::AppError;

/// Registers every dashboard route. Literal paths come before `{id}` paths
/// so `export` and `week` are never read as identifiers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::resource("/v1/dashboard").route(web::get().to(dashboard::get_dashboard)),
    )
    .service(
        web::resource("/v1/employees")
            .route(web::get().to(employee::get_employees))
            .route(web::post().to(employee::create_employee)),
    )
    .service(
        web::resource("/v1/employees/export").route(web::get().to(employee::export_employees)),
    )
    .service(
        web::resource("/v1/employees/{id}")
            .route(web::get().to(employee::get_employee))
            .route(web::patch().to(employee::update_employee))
            .route(web::delete().to(employee::delete_employee)),
    )
    .service(
        web::resource("/v1/departments")
            .route(web::get().to(department::get_departments))
            .route(web::post().to(department::create_department)),
    )
    .service(
        web::resource("/v1/departments/{id}")
            .route(web::get().to(department::get_department))
            .route(web::patch().to(department::update_department))
            .route(web::delete().to(department::delete_department)),
    )
    .service(
        web::resource("/v1/schedules")
            .route(web::get().to(schedule::get_schedules))
            .route(web::post().to(schedule::create_schedule)),
    )
    .service(web::resource("/v1/schedules/week").route(web::get().to(schedule::get_week)))
    .service(
        web::resource("/v1/schedules/employee/{employee_id}")
            .route(web::get().to(schedule::get_employee_schedules)),
    )
    .service(
        web::resource("/v1/schedules/{id}")
            .route(web::get().to(schedule::get_schedule))
            .route(web::patch().to(schedule::update_schedule))
            .route(web::delete().to(schedule::delete_schedule)),
    )
    .service(
        web::resource("/v1/settings")
            .route(web::get().to(settings::get_settings))
            .route(web::put().to(settings::update_settings)),
    );
}
