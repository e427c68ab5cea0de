//! Procedural art for round eye displays.
//!
//! The crate turns purely mathematical definitions into the raw bitmaps an eye-display
//! firmware loads at boot:
//!
//! 1. **Shape**: per-mood lid contours (`x -> y`) and a polar iris color field.
//! 2. **Raster**: contours become 240x240 binary masks, the field becomes a 128x128 RGB texture.
//! 3. **Encode**: masks are written as 1 bpp indexed BMPs, textures as 16 bpp RGB565 BMPs.
//! 4. **Store**: an [`AssetSink`] receives each file under `<mood>/<name>.bmp`.
//!
//! Everything is deterministic; two runs with the same options produce identical bytes.
#![forbid(unsafe_code)]

mod encode;
mod foundation;
mod pipeline;
mod raster;
mod shape;

pub use encode::bmp::{
    BmpFormat, BmpHeader, EncodeBmp, FILE_HEADER_LEN, INFO_HEADER_LEN, MASK_PALETTE,
    PIXELS_PER_METER, RGB565_MASKS, pack_rgb565, row_stride,
};
pub use encode::sink::{AssetSink, DirSink, InMemorySink, ensure_parent_dir};
pub use foundation::core::{
    EYELID_CENTER, EYELID_SIZE, Extent, IRIS_HEIGHT, IRIS_WIDTH, Rgb8,
};
pub use foundation::error::{EyeError, EyeResult};
pub use pipeline::{AssetJob, GenerateOpts, GeneratedAsset, generate, plan_jobs, render_jobs};
pub use raster::buffer::{BinaryPixelBuffer, ColorPixelBuffer, PixelBuffer};
pub use raster::field::{ColorField, polar_coords, rasterize_field};
pub use raster::mask::{column_extents, is_edge_anchored, rasterize_lid};
pub use shape::iris::{IrisField, IrisStages, heart_radius};
pub use shape::lids::{CurveFn, LidRole, Mood};

/// Individual lid contour functions, for callers that want to plot or compose them.
pub mod curves {
    pub use crate::shape::lids::{
        angry_lower, angry_upper, happy_lower, happy_upper, sad_lower, sad_upper, scared_lower,
        scared_upper, sleepy_lower, sleepy_upper, surprised_lower, surprised_upper,
        suspicious_lower, suspicious_upper,
    };
}
