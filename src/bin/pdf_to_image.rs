//! 区域导出入口
//!
//! 用法: pdf_to_image <config_file>
//!
//! 成功时静默退出；失败时错误直接传播到进程边界，以非零状态退出。

use anyhow::Result;
use pdf_raster::{extract_zones_to_image, load_extraction_config};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        println!("Usage: pdf_to_image <config_file>");
        std::process::exit(1);
    }

    let config = load_extraction_config(&args[1])?;
    extract_zones_to_image(&config)?;
    Ok(())
}
