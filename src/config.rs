use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::pdf::Zone;

/// 缩略图任务配置
///
/// 由宿主应用写入临时 JSON 文件，字段名为 camelCase。
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailConfig {
    /// 源 PDF 路径
    pub pdf_path: String,
    /// 缩略图输出路径（PNG）
    pub output_path: String,
    /// 目标宽度（像素），缺省 300
    #[serde(default = "default_thumbnail_width")]
    pub width: u32,
}

fn default_thumbnail_width() -> u32 {
    300
}

/// 区域导出任务配置
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionConfig {
    /// 源 PDF 路径
    pub pdf_path: String,
    /// 要导出的区域，按输入顺序自上而下拼接
    pub zones: Vec<Zone>,
    /// 合成图输出路径，格式由扩展名决定
    pub output_path: String,
    /// 栅格化缩放系数，横纵向一致
    pub scale: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_thumbnail_config<P: AsRef<Path>>(path: P) -> Result<ThumbnailConfig, ConfigError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn load_extraction_config<P: AsRef<Path>>(path: P) -> Result<ExtractionConfig, ConfigError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_thumbnail_config_defaults_width() {
        let file = write_temp_config(
            r#"{"pdfPath": "/tmp/in.pdf", "outputPath": "/tmp/thumb.png"}"#,
        );
        let config = load_thumbnail_config(file.path()).expect("parse config");
        assert_eq!(config.pdf_path, "/tmp/in.pdf");
        assert_eq!(config.output_path, "/tmp/thumb.png");
        assert_eq!(config.width, 300);
    }

    #[test]
    fn test_thumbnail_config_explicit_width() {
        let file = write_temp_config(
            r#"{"pdfPath": "a.pdf", "outputPath": "a.png", "width": 512}"#,
        );
        let config = load_thumbnail_config(file.path()).expect("parse config");
        assert_eq!(config.width, 512);
    }

    #[test]
    fn test_extraction_config_parses_zones() {
        let file = write_temp_config(
            r#"{
                "pdfPath": "source.pdf",
                "outputPath": "article_1.png",
                "scale": 2.0,
                "zones": [
                    {"page": 0, "x1": 0.1, "y1": 0.2, "x2": 0.9, "y2": 0.5},
                    {"page": 3, "x1": 0.0, "y1": 0.0, "x2": 1.0, "y2": 1.0}
                ]
            }"#,
        );
        let config = load_extraction_config(file.path()).expect("parse config");
        assert_eq!(config.zones.len(), 2);
        assert_eq!(config.zones[0].page, 0);
        assert_eq!(config.zones[1].page, 3);
        assert!((config.scale - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extraction_config_empty_zones_is_valid() {
        let file = write_temp_config(
            r#"{"pdfPath": "a.pdf", "outputPath": "a.png", "scale": 1.5, "zones": []}"#,
        );
        let config = load_extraction_config(file.path()).expect("parse config");
        assert!(config.zones.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let file = write_temp_config(
            r#"{"pdfPath": "a.pdf", "outputPath": "a.png", "projectId": "1700000000000"}"#,
        );
        let config = load_thumbnail_config(file.path()).expect("parse config");
        assert_eq!(config.width, 300);
    }

    #[test]
    fn test_missing_required_field_is_json_error() {
        let file = write_temp_config(r#"{"outputPath": "a.png"}"#);
        let err = load_thumbnail_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_thumbnail_config("/nonexistent/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
