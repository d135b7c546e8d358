//! 静态资源路由
//!
//! 运行时优先读取 public 目录，其次回退到编译期用 rust-embed
//! 嵌入的资源。根路径映射到配置的默认落地页。
//!
//! 路径清洗只做 `..` 子串剥除——这是刻意保留的弱防护，
//! 与原接口保持一致，不要在这里加强。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;

/// 嵌入静态资源
/// 编译时从 public/ 目录读取文件
#[derive(Embed)]
#[folder = "public/"]
struct PublicAssets;

/// 按扩展名推断 MIME 类型；未知扩展名返回 None（响应省略 Content-Type 头）
fn get_mime_type(path: &str) -> Option<&'static str> {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    match ext {
        "html" => Some("text/html; charset=utf-8"),
        "js" | "mjs" => Some("application/javascript; charset=utf-8"),
        "css" => Some("text/css; charset=utf-8"),
        "json" => Some("application/json; charset=utf-8"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "svg" => Some("image/svg+xml"),
        "ico" => Some("image/x-icon"),
        "woff" => Some("font/woff"),
        "woff2" => Some("font/woff2"),
        "ttf" => Some("font/ttf"),
        "webp" => Some("image/webp"),
        "mp4" => Some("video/mp4"),
        "mp3" => Some("audio/mpeg"),
        "pdf" => Some("application/pdf"),
        "xml" => Some("application/xml"),
        "txt" => Some("text/plain; charset=utf-8"),
        _ => None,
    }
}

/// 剥除所有 `..` 子串并去掉前导斜杠。
/// 去斜杠放在剥除之后，否则 `/../etc` 会剥成绝对路径，
/// 而 Path::join 遇到绝对路径会直接替换掉 public 根。
fn sanitize_path(path: &str) -> String {
    let stripped = path.replace("..", "");
    stripped.trim_start_matches('/').to_string()
}

/// 从运行时 public 目录读取；文件不存在返回 None，其他 IO 错误上抛
fn try_public_dir_file(public_dir: &str, path: &str) -> std::io::Result<Option<Vec<u8>>> {
    let file_path: PathBuf = Path::new(public_dir).join(path);
    if !file_path.is_file() {
        return Ok(None);
    }
    match std::fs::read(&file_path) {
        Ok(data) => Ok(Some(data)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// 从嵌入的资源中获取文件
fn get_embedded_file(path: &str) -> Option<Vec<u8>> {
    PublicAssets::get(path).map(|f| f.data.to_vec())
}

/// 静态资源请求处理
pub async fn serve_frontend(req: HttpRequest) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();

    let raw_path = req.match_info().query("tail");
    let path = if raw_path.is_empty() || raw_path == "/" {
        // 根路径返回默认落地页
        config.static_files.landing_page.clone()
    } else {
        sanitize_path(raw_path)
    };

    let content = match try_public_dir_file(&config.static_files.public_dir, &path) {
        Ok(found) => found.or_else(|| get_embedded_file(&path)),
        Err(e) => {
            tracing::error!("Failed to read static file {}: {}", path, e);
            return Ok(HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(e.to_string()));
        }
    };

    match content {
        Some(data) => {
            let mut response = HttpResponse::Ok();
            if let Some(mime) = get_mime_type(&path) {
                response.content_type(mime);
            }
            Ok(response.body(data))
        }
        None => Ok(HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body("File not found")),
    }
}

/// 配置根通配资源（放在最后）：GET 走静态资源，POST 走默认成功兜底。
/// 两个方法必须挂在同一个资源上，拆成两个同模式资源时先注册的会吞掉全部方法。
pub fn configure_frontend_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{tail:.*}")
            .route(web::get().to(serve_frontend))
            .route(web::post().to(super::fallback::post_fallback)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_mime_type() {
        assert_eq!(
            get_mime_type("reception.html"),
            Some("text/html; charset=utf-8")
        );
        assert_eq!(
            get_mime_type("app.js"),
            Some("application/javascript; charset=utf-8")
        );
        assert_eq!(get_mime_type("style.css"), Some("text/css; charset=utf-8"));
        assert_eq!(get_mime_type("logo.png"), Some("image/png"));
        // 未知扩展名不带 Content-Type 头
        assert_eq!(get_mime_type("unknown.xyz"), None);
        assert_eq!(get_mime_type("no_extension"), None);
    }

    #[test]
    fn test_sanitize_path_strips_dotdot() {
        assert_eq!(sanitize_path("/../etc/passwd"), "etc/passwd");
        assert_eq!(sanitize_path("a/../../b.html"), "a///b.html");
        assert_eq!(sanitize_path("/reception.html"), "reception.html");
    }
}
