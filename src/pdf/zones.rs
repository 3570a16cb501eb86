//! 区域导出模块
//!
//! 按配置把若干页面区域渲染成图，再自上而下拼接为一张白底合成图。
//! 页面先按统一 scale 整页渲染，再裁出区域对应的像素矩形。

use anyhow::{anyhow, Result};
use image::{imageops, ImageBuffer, Rgb, RgbImage};
use pdfium_render::prelude::*;

use super::pdfium::bind_pdfium;
use super::types::Zone;
use crate::config::ExtractionConfig;

/// 区域在渲染后页面上的像素矩形 (x, y, w, h)
///
/// 宽高按 round(边长 × 页面点尺寸 × scale) 独立取整，
/// 再裁剪到渲染后的页面范围内。
fn zone_pixel_rect(
    zone: &Zone,
    page_width: f64,
    page_height: f64,
    scale: f64,
) -> (u32, u32, u32, u32) {
    let page_px_w = (page_width * scale).round() as i64;
    let page_px_h = (page_height * scale).round() as i64;

    let x = (zone.x1 * page_width * scale).round() as i64;
    let y = (zone.y1 * page_height * scale).round() as i64;
    let w = ((zone.x2 - zone.x1) * page_width * scale).round() as i64;
    let h = ((zone.y2 - zone.y1) * page_height * scale).round() as i64;

    let x = x.clamp(0, page_px_w);
    let y = y.clamp(0, page_px_h);
    let w = w.clamp(0, page_px_w - x);
    let h = h.clamp(0, page_px_h - y);

    (x as u32, y as u32, w as u32, h as u32)
}

/// 合成画布尺寸：宽取各区域最大值，高取总和
fn stacked_canvas_size(sizes: &[(u32, u32)]) -> (u32, u32) {
    let width = sizes.iter().map(|(w, _)| *w).max().unwrap_or(0);
    let height: u32 = sizes.iter().map(|(_, h)| *h).sum();
    (width, height)
}

/// 把区域图自上而下、左对齐拼接到白底画布上
fn stack_vertically(images: &[RgbImage]) -> RgbImage {
    let sizes: Vec<(u32, u32)> = images.iter().map(|img| img.dimensions()).collect();
    let (width, height) = stacked_canvas_size(&sizes);

    let mut combined: RgbImage = ImageBuffer::from_pixel(width, height, Rgb([255, 255, 255]));

    let mut current_y: i64 = 0;
    for img in images {
        imageops::overlay(&mut combined, img, 0, current_y);
        current_y += img.height() as i64;
    }

    combined
}

/// 渲染单个区域：整页按 scale 渲染后裁剪
fn render_zone(document: &PdfDocument, zone: &Zone, scale: f64) -> Result<RgbImage> {
    let page = document
        .pages()
        .get(zone.page as u16)
        .map_err(|e| anyhow!("获取页面 {} 失败: {}", zone.page, e))?;

    let page_width = page.width().value as f64;
    let page_height = page.height().value as f64;

    let target_width = (page_width * scale).round() as i32;
    let target_height = (page_height * scale).round() as i32;

    let render_config = PdfRenderConfig::new()
        .set_target_width(target_width)
        .set_target_height(target_height);

    let bitmap = page
        .render_with_config(&render_config)
        .map_err(|e| anyhow!("渲染页面 {} 失败: {}", zone.page, e))?;

    let page_image = bitmap.as_image();

    let (x, y, w, h) = zone_pixel_rect(zone, page_width, page_height, scale);
    log::info!(
        "[Zones] 页面 {} 区域: ({}, {}) {}x{} px",
        zone.page,
        x,
        y,
        w,
        h
    );

    Ok(page_image.crop_imm(x, y, w, h).to_rgb8())
}

/// 按配置导出区域并拼接保存
///
/// 区域列表为空时不写任何文件，直接返回。任何阶段的失败都向上
/// 传播，由进程边界以非零状态退出。
pub fn extract_zones_to_image(config: &ExtractionConfig) -> Result<()> {
    let pdfium = bind_pdfium().map_err(|e| anyhow!(e))?;

    let document = pdfium
        .load_pdf_from_file(&config.pdf_path, None)
        .map_err(|e| anyhow!("加载 PDF 失败: {}", e))?;

    let mut zone_images = Vec::with_capacity(config.zones.len());
    for zone in &config.zones {
        zone_images.push(render_zone(&document, zone, config.scale)?);
    }

    drop(document);

    if zone_images.is_empty() {
        log::info!("[Zones] 区域列表为空，不生成输出");
        return Ok(());
    }

    let combined = stack_vertically(&zone_images);
    combined
        .save(&config.output_path)
        .map_err(|e| anyhow!("保存合成图失败: {}", e))?;

    log::info!(
        "[Zones] 合成图 {}x{} 已保存到: {}",
        combined.width(),
        combined.height(),
        config.output_path
    );
    Ok(())
}
