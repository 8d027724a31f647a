use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SystemService;
use crate::config::AppConfig;
use crate::models::system::responses::SystemStatusResponse;
use crate::models::{ApiResponse, AppStartTime};

pub async fn get_status(
    _service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();

    let started_at = request
        .app_data::<actix_web::web::Data<AppStartTime>>()
        .map(|t| t.start_datetime)
        .unwrap_or_else(chrono::Utc::now);

    let response = SystemStatusResponse {
        system_name: config.app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        started_at,
        uptime_secs: chrono::Utc::now()
            .signed_duration_since(started_at)
            .num_seconds(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
