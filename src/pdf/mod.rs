mod pdfium;
mod thumbnail;
mod types;
mod zones;

pub use thumbnail::generate_thumbnail;
pub use types::{ThumbnailResult, Zone};
pub use zones::extract_zones_to_image;
