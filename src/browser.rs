//! 用默认浏览器打开 bundlephobia 结果页

use std::process::Command;

const RESULT_PAGE: &str = "https://bundlephobia.com/result?p=";

/// 打开指定包的结果页。打不开也不反馈给宿主，只记一条日志
pub fn open_result_page(name: &str) {
    let url = format!("{}{}", RESULT_PAGE, name);
    if let Err(e) = open_url(&url) {
        log::warn!("打开浏览器失败: {}", e);
    }
}

// 浏览器进程不等待退出，插件本身是一次性的

#[cfg(target_os = "linux")]
fn open_url(url: &str) -> std::io::Result<()> {
    Command::new("xdg-open").arg(url).spawn().map(|_| ())
}

#[cfg(target_os = "macos")]
fn open_url(url: &str) -> std::io::Result<()> {
    Command::new("open").arg(url).spawn().map(|_| ())
}

#[cfg(target_os = "windows")]
fn open_url(url: &str) -> std::io::Result<()> {
    Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(url)
        .spawn()
        .map(|_| ())
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn open_url(_url: &str) -> std::io::Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "当前平台不支持打开浏览器",
    ))
}
