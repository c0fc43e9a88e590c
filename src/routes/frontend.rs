//! 内置页面路由
//!
//! 使用 rust-embed 把 frontend/dist 打进二进制：
//! - `/` 和未知的非 API 路径返回首页
//! - `/howto` 返回使用说明页
//! - 页面中的 `%SYSTEM_NAME%` 替换为配置中的系统名称

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;
use std::path::Path;

use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};

/// 编译时从 frontend/dist/ 目录读取文件
#[derive(Embed)]
#[folder = "frontend/dist/"]
struct FrontendAssets;

const INDEX_PAGE: &str = "index.html";
const HOWTO_PAGE: &str = "howto.html";

/// 获取文件的 MIME 类型
fn get_mime_type(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    match ext {
        "html" => "text/html; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "woff2" => "font/woff2",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// 静态资源可以长期缓存，页面不缓存
fn should_cache(path: &str) -> bool {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    matches!(ext, "js" | "css" | "woff2" | "png" | "jpg" | "jpeg" | "svg")
}

fn render_page(content: &[u8], system_name: &str) -> Vec<u8> {
    String::from_utf8_lossy(content)
        .replace("%SYSTEM_NAME%", system_name)
        .into_bytes()
}

/// 请求路径对应的嵌入文件名
fn resolve_asset(path: &str) -> &str {
    match path.trim_matches('/') {
        "" => INDEX_PAGE,
        "howto" => HOWTO_PAGE,
        other => other,
    }
}

/// 页面请求处理
pub async fn serve_frontend(req: HttpRequest) -> ActixResult<HttpResponse> {
    let path = req.match_info().query("tail");

    // API 路径不走页面 fallback
    if path.trim_start_matches('/').starts_with("api/") {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Resource not found",
        )));
    }

    let requested = resolve_asset(path);
    let (file, file_path) = match FrontendAssets::get(requested) {
        Some(file) => (Some(file), requested),
        // 未知路径返回首页
        None => (FrontendAssets::get(INDEX_PAGE), INDEX_PAGE),
    };

    let Some(file) = file else {
        return Ok(HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body("Pages were not embedded in this build."));
    };

    let mime = get_mime_type(file_path);
    let mut data = file.data.into_owned();
    if mime.starts_with("text/html") {
        data = render_page(&data, &AppConfig::get().app.system_name);
    }

    let mut response = HttpResponse::Ok();
    response.content_type(mime);
    if should_cache(file_path) {
        response.insert_header(("Cache-Control", "public, max-age=31536000, immutable"));
    } else {
        response.insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"));
    }

    Ok(response.body(data))
}

/// 配置前端路由
pub fn configure_frontend_routes(cfg: &mut web::ServiceConfig) {
    // 所有非 API 路由都交给页面处理
    cfg.route("/{tail:.*}", web::get().to(serve_frontend));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_mime_type() {
        assert_eq!(get_mime_type("index.html"), "text/html; charset=utf-8");
        assert_eq!(get_mime_type("style.css"), "text/css; charset=utf-8");
        assert_eq!(get_mime_type("unknown.xyz"), "application/octet-stream");
    }

    #[test]
    fn test_resolve_asset() {
        assert_eq!(resolve_asset(""), INDEX_PAGE);
        assert_eq!(resolve_asset("/"), INDEX_PAGE);
        assert_eq!(resolve_asset("howto"), HOWTO_PAGE);
        assert_eq!(resolve_asset("howto/"), HOWTO_PAGE);
        assert_eq!(resolve_asset("app.css"), "app.css");
    }

    #[test]
    fn test_render_page_system_name() {
        let html = render_page(b"<title>%SYSTEM_NAME%</title>", "Green Valley School");
        assert_eq!(html, b"<title>Green Valley School</title>");
    }

    #[test]
    fn test_should_cache() {
        assert!(should_cache("app.css"));
        assert!(!should_cache("index.html"));
    }
}
