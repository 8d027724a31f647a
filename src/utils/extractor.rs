//! 类型安全的路径参数提取器
//!
//! 将路径中的 ID 解析为 i64，解析失败时直接返回 400，
//! 避免在每个 handler 中重复解析逻辑。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, error::ErrorBadRequest};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn parse_path_i64(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    let raw = req.match_info().get(name).unwrap_or_default();
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ErrorBadRequest(
            serde_json::to_string(&ApiResponse::<()>::error_empty(
                ErrorCode::BadRequest,
                format!("无效的路径参数 {name}: '{raw}'"),
            ))
            .unwrap_or_default(),
        )),
    }
}

/// 路径参数 `{id}` 的安全提取器
#[derive(Debug, Clone, Copy)]
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(parse_path_i64(req, "id").map(SafeIDI64))
    }
}

/// 路径参数 `{session_id}` 的安全提取器
#[derive(Debug, Clone, Copy)]
pub struct SafeSessionIdI64(pub i64);

impl FromRequest for SafeSessionIdI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(parse_path_i64(req, "session_id").map(SafeSessionIdI64))
    }
}
