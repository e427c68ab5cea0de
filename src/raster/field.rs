use crate::foundation::core::Rgb8;
use crate::foundation::error::EyeResult;
use crate::raster::buffer::ColorPixelBuffer;

/// A color defined over polar coordinates: `angle` in `[0, 1)` turns, `radius` in
/// `[0, 1]` from rim to pupil.
pub trait ColorField {
    fn sample(&self, angle: f64, radius: f64) -> Rgb8;
}

impl ColorField for crate::shape::iris::IrisField {
    fn sample(&self, angle: f64, radius: f64) -> Rgb8 {
        crate::shape::iris::IrisField::sample(self, angle, radius)
    }
}

impl<F: Fn(f64, f64) -> Rgb8> ColorField for F {
    fn sample(&self, angle: f64, radius: f64) -> Rgb8 {
        self(angle, radius)
    }
}

/// Column `x` maps to `angle = x / width`; row `y` maps to `radius = y / (height - 1)`.
///
/// A single-row texture samples the rim only.
pub fn polar_coords(x: u32, y: u32, width: u32, height: u32) -> (f64, f64) {
    let angle = f64::from(x) / f64::from(width);
    let radius = if height > 1 {
        f64::from(y) / f64::from(height - 1)
    } else {
        0.0
    };
    (angle, radius)
}

/// Evaluate `field` over a `width x height` polar texture.
#[tracing::instrument(skip(field))]
pub fn rasterize_field(
    field: &impl ColorField,
    width: u32,
    height: u32,
) -> EyeResult<ColorPixelBuffer> {
    let mut out = ColorPixelBuffer::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let (angle, radius) = polar_coords(x, y, width, height);
            out.set(x, y, field.sample(angle, radius));
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/field.rs"]
mod tests;
