use serde::{Deserialize, Serialize};

/// 页面上的一个导出区域
///
/// 坐标为 0-1 相对坐标，相对于页面宽高；(x1, y1) 为左上角，
/// (x2, y2) 为右下角。不做几何校验，与宿主应用选区行为一致。
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Zone {
  /// 页码，从 0 开始
  pub page: usize,
  pub x1: f64,
  pub y1: f64,
  pub x2: f64,
  pub y2: f64,
}

/// 缩略图工具写到 stdout 的结果行
///
/// 成功时形如 `{"success":true,"width":300,"height":388}`，
/// 失败时形如 `{"success":false,"error":"..."}`。
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThumbnailResult {
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub width: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub height: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl ThumbnailResult {
  pub fn ok(width: u32, height: u32) -> Self {
    Self {
      success: true,
      width: Some(width),
      height: Some(height),
      error: None,
    }
  }

  pub fn failure(error: impl Into<String>) -> Self {
    Self {
      success: false,
      width: None,
      height: None,
      error: Some(error.into()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ok_serializes_without_error_field() {
    let json = serde_json::to_string(&ThumbnailResult::ok(300, 388)).unwrap();
    assert_eq!(json, r#"{"success":true,"width":300,"height":388}"#);
  }

  #[test]
  fn test_failure_serializes_without_dimensions() {
    let json = serde_json::to_string(&ThumbnailResult::failure("boom")).unwrap();
    assert_eq!(json, r#"{"success":false,"error":"boom"}"#);
  }

  #[test]
  fn test_zone_deserializes() {
    let zone: Zone =
      serde_json::from_str(r#"{"page": 2, "x1": 0.1, "y1": 0.2, "x2": 0.8, "y2": 0.9}"#).unwrap();
    assert_eq!(zone.page, 2);
    assert!((zone.x2 - 0.8).abs() < f64::EPSILON);
  }
}
