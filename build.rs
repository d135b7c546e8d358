use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=public");

    // 获取项目根目录
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let public_path = Path::new(&manifest_dir).join("public");

    if !public_path.exists() {
        eprintln!("Warning: public directory not found!");
        eprintln!("Creating a fallback landing page so rust-embed has something to embed.");

        create_fallback_files(&public_path);
    }
}

fn create_fallback_files(public_path: &Path) {
    fs::create_dir_all(public_path).expect("Failed to create public directory");

    let fallback_html = r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>接送管理系统 - 静态资源缺失</title>
</head>
<body>
    <h1>接送管理系统</h1>
    <p>public 目录为空，这是构建时生成的占位页面。</p>
</body>
</html>"#;

    fs::write(public_path.join("reception.html"), fallback_html)
        .expect("Failed to write fallback reception.html");
}
