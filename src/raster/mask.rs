use crate::foundation::error::EyeResult;
use crate::foundation::math::trunc_ordinate;
use crate::raster::buffer::BinaryPixelBuffer;
use crate::shape::lids::{CurveFn, LidRole};

/// Rasterize one eyelid mask of `size x size` pixels.
///
/// For each column the curve value is truncated and clamped to `lid_y` in `[0, size-1]`.
/// Upper lids are open on rows `[lid_y, size-1]`, lower lids on rows `[0, lid_y]`.
#[tracing::instrument(skip(curve))]
pub fn rasterize_lid(curve: CurveFn, size: u32, role: LidRole) -> EyeResult<BinaryPixelBuffer> {
    let mut mask = BinaryPixelBuffer::new(size, size)?;
    let last = size - 1;
    for x in 0..size {
        let lid_y = trunc_ordinate(curve(x), last);
        let open = match role {
            LidRole::Upper => lid_y..=last,
            LidRole::Lower => 0..=lid_y,
        };
        for y in open {
            mask.set(x, y, true);
        }
    }
    Ok(mask)
}

/// First and last foreground row of every column, `None` for an empty column.
///
/// This is the scan the display firmware runs to recover the lid contour from a mask.
pub fn column_extents(mask: &BinaryPixelBuffer) -> Vec<Option<(u32, u32)>> {
    (0..mask.width())
        .map(|x| {
            let mut ys = (0..mask.height()).filter(|&y| mask.get(x, y));
            let first = ys.next()?;
            Some((first, ys.last().unwrap_or(first)))
        })
        .collect()
}

/// `true` when every column's foreground is one contiguous run touching the top or
/// bottom edge of the mask.
pub fn is_edge_anchored(mask: &BinaryPixelBuffer) -> bool {
    let last = mask.height() - 1;
    column_extents(mask)
        .into_iter()
        .enumerate()
        .all(|(x, extent)| match extent {
            None => true,
            Some((lo, hi)) => {
                let x = x as u32;
                let run = hi - lo + 1;
                let count = (lo..=hi).filter(|&y| mask.get(x, y)).count() as u32;
                count == run && (lo == 0 || hi == last)
            }
        })
}

#[cfg(test)]
#[path = "../../tests/unit/raster/mask.rs"]
mod tests;
