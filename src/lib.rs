mod config;
mod pdf;

pub use config::{
    load_extraction_config, load_thumbnail_config, ConfigError, ExtractionConfig, ThumbnailConfig,
};
pub use pdf::{extract_zones_to_image, generate_thumbnail, ThumbnailResult, Zone};
