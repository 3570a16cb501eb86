//! pdfium 动态库绑定
//!
//! 两个命令行工具都依赖 pdfium 渲染页面。库文件随应用分发，
//! 按固定顺序搜索，找不到时回退到系统库。

use pdfium_render::prelude::*;
use std::path::PathBuf;

/// 获取 pdfium 库的搜索路径
fn get_pdfium_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            // 1. 可执行文件同级的 libs 目录
            paths.push(exe_dir.join("libs"));

            // 2. 可执行文件同级目录
            paths.push(exe_dir.to_path_buf());
        }
    }

    // 3. 工作目录下的 libs 目录
    paths.push(PathBuf::from("libs"));

    // 4. 当前目录
    paths.push(PathBuf::from("./"));

    paths
}

/// 尝试绑定 pdfium 库
pub fn bind_pdfium() -> Result<Pdfium, String> {
    let search_paths = get_pdfium_search_paths();

    // 尝试从各个路径加载
    for path in &search_paths {
        let lib_path = Pdfium::pdfium_platform_library_name_at_path(path);
        log::debug!("[Pdfium] 尝试加载 pdfium: {:?}", lib_path);

        if let Ok(bindings) = Pdfium::bind_to_library(&lib_path) {
            log::info!("[Pdfium] 成功从 {:?} 加载 pdfium", path);
            return Ok(Pdfium::new(bindings));
        }
    }

    // 最后尝试系统库
    log::debug!("[Pdfium] 尝试加载系统 pdfium 库");
    Pdfium::bind_to_system_library()
        .map(Pdfium::new)
        .map_err(|e| format!("Pdfium 库不可用: {}", e))
}
