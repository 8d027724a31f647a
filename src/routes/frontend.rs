//! 前端静态资源路由
//!
//! 使用 rust-embed 嵌入前端构建产物，支持：
//! - SPA fallback（未找到的路由返回 index.html）
//! - 静态资源长缓存

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;
use std::path::Path;

/// 嵌入前端静态资源
/// 编译时从 frontend/dist/ 目录读取文件
#[derive(Embed)]
#[folder = "frontend/dist/"]
struct FrontendAssets;

/// 获取文件的 MIME 类型
fn get_mime_type(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    match ext {
        "html" => "text/html; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "mjs" => "application/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "eot" => "application/vnd.ms-fontobject",
        "webp" => "image/webp",
        "webm" => "video/webm",
        "mp4" => "video/mp4",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "pdf" => "application/pdf",
        "xml" => "application/xml",
        "txt" => "text/plain; charset=utf-8",
        "wasm" => "application/wasm",
        "map" => "application/json",
        _ => "application/octet-stream",
    }
}

/// 检查是否应该设置长缓存
fn should_cache(path: &str) -> bool {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    // 带 hash 的静态资源可以长期缓存
    matches!(
        ext,
        "js" | "css"
            | "woff"
            | "woff2"
            | "ttf"
            | "eot"
            | "png"
            | "jpg"
            | "jpeg"
            | "gif"
            | "svg"
            | "webp"
    )
}

fn serve_asset(path: &str) -> Option<HttpResponse> {
    let asset = FrontendAssets::get(path)?;

    let mut builder = HttpResponse::Ok();
    builder.insert_header(("Content-Type", get_mime_type(path)));
    if should_cache(path) {
        builder.insert_header(("Cache-Control", "public, max-age=31536000, immutable"));
    } else {
        builder.insert_header(("Cache-Control", "no-cache"));
    }

    Some(builder.body(asset.data.into_owned()))
}

/// 前端入口：命中的路径返回资源，其余回落到 index.html（SPA 路由）
pub async fn serve_frontend(req: HttpRequest) -> ActixResult<HttpResponse> {
    let path = req.path().trim_start_matches('/');

    // API 路径不做 fallback
    if path.starts_with("api/") {
        return Ok(HttpResponse::NotFound().body("Not Found"));
    }

    if !path.is_empty()
        && let Some(response) = serve_asset(path)
    {
        return Ok(response);
    }

    match serve_asset("index.html") {
        Some(response) => Ok(response),
        None => Ok(HttpResponse::NotFound().body("Frontend not built")),
    }
}

// 配置路由（作为最后的 fallback）
pub fn configure_frontend_routes(cfg: &mut web::ServiceConfig) {
    cfg.default_service(web::route().to(serve_frontend));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_types() {
        assert_eq!(get_mime_type("index.html"), "text/html; charset=utf-8");
        assert_eq!(
            get_mime_type("assets/app.12ab34.js"),
            "application/javascript; charset=utf-8"
        );
        assert_eq!(get_mime_type("favicon.ico"), "image/x-icon");
        assert_eq!(get_mime_type("unknown.bin"), "application/octet-stream");
    }

    #[test]
    fn test_should_cache_hashed_assets_only() {
        assert!(should_cache("assets/app.12ab34.js"));
        assert!(should_cache("assets/logo.png"));
        assert!(!should_cache("index.html"));
        assert!(!should_cache("manifest.json"));
    }
}
