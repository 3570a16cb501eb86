//! 缩略图生成模块
//!
//! 取 PDF 第一页，按目标宽度等比渲染为 PNG。
//! 整个流程的任何失败都转成 Err(String)，由入口程序输出结构化结果。

use pdfium_render::prelude::*;

use super::pdfium::bind_pdfium;
use crate::config::ThumbnailConfig;

/// 根据页面点尺寸和目标宽度计算渲染像素尺寸
///
/// 横纵向使用同一缩放系数，输出保持页面原始宽高比。
fn thumbnail_target_size(page_width: f32, page_height: f32, width: u32) -> (i32, i32) {
    let zoom = width as f32 / page_width;
    (width as i32, (page_height * zoom).round() as i32)
}

/// 生成 PDF 第一页缩略图，返回渲染出的像素尺寸
pub fn generate_thumbnail(config: &ThumbnailConfig) -> Result<(u32, u32), String> {
    let pdfium = bind_pdfium()?;

    let document = pdfium
        .load_pdf_from_file(&config.pdf_path, None)
        .map_err(|e| format!("加载 PDF 失败: {}", e))?;

    if document.pages().len() == 0 {
        return Err("PDF 不包含任何页面".to_string());
    }

    let page = document
        .pages()
        .get(0)
        .map_err(|e| format!("获取页面 0 失败: {}", e))?;

    let page_width = page.width().value;
    let page_height = page.height().value;

    let (target_width, target_height) =
        thumbnail_target_size(page_width, page_height, config.width);

    log::info!(
        "[Thumbnail] 页面 0: {}x{} pt -> {}x{} px (目标宽度: {})",
        page_width,
        page_height,
        target_width,
        target_height,
        config.width
    );

    let render_config = PdfRenderConfig::new()
        .set_target_width(target_width)
        .set_target_height(target_height);

    let bitmap = page
        .render_with_config(&render_config)
        .map_err(|e| format!("渲染页面失败: {}", e))?;

    let image = bitmap.as_image().to_rgb8();
    let (width, height) = image.dimensions();

    image
        .save_with_format(&config.output_path, image::ImageFormat::Png)
        .map_err(|e| format!("保存缩略图失败: {}", e))?;

    log::info!("[Thumbnail] 缩略图已保存到: {}", config.output_path);
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_size_letter_page() {
        // US Letter: 612x792 pt
        let (w, h) = thumbnail_target_size(612.0, 792.0, 300);
        assert_eq!(w, 300);
        assert_eq!(h, 388);
    }

    #[test]
    fn test_target_size_preserves_aspect_ratio() {
        let (w, h) = thumbnail_target_size(500.0, 500.0, 200);
        assert_eq!((w, h), (200, 200));
    }

    #[test]
    fn test_target_size_upscales_small_pages() {
        let (w, h) = thumbnail_target_size(100.0, 200.0, 300);
        assert_eq!((w, h), (300, 600));
    }
}
