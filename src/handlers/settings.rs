use actix_web::{web, HttpResponse};
use log::info;

use crate::models::settings::Settings;
use crate::services::AppState;
use crate::utils::validation::validate_payload;

pub async fn get_settings(state: web::Data<AppState>) -> Result<HttpResponse, actix_web::Error> {
    Ok(HttpResponse::Ok().json(state.settings.get().await))
}

pub async fn update_settings(
    state: web::Data<AppState>,
    settings: web::Json<Settings>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&*settings)?;

    let saved = state.settings.update(settings.into_inner()).await;
    info!("settings saved");

    Ok(HttpResponse::Ok().json(saved))
}
