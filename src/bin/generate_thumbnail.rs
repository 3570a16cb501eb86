//! 缩略图生成入口
//!
//! 用法: generate_thumbnail <config.json>
//!
//! 始终向 stdout 输出一行 JSON 结果，宿主应用按行解析；日志走 stderr。

use pdf_raster::{generate_thumbnail, load_thumbnail_config, ThumbnailResult};

fn emit(result: &ThumbnailResult) {
    match serde_json::to_string(result) {
        Ok(line) => println!("{}", line),
        Err(e) => println!(r#"{{"success":false,"error":"{}"}}"#, e),
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        emit(&ThumbnailResult::failure(
            "Usage: generate_thumbnail <config.json>",
        ));
        std::process::exit(1);
    }

    let config = match load_thumbnail_config(&args[1]) {
        Ok(config) => config,
        Err(e) => {
            emit(&ThumbnailResult::failure(e.to_string()));
            std::process::exit(1);
        }
    };

    match generate_thumbnail(&config) {
        Ok((width, height)) => emit(&ThumbnailResult::ok(width, height)),
        Err(e) => {
            emit(&ThumbnailResult::failure(e));
            std::process::exit(1);
        }
    }
}
