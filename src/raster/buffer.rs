use crate::foundation::core::{Extent, Rgb8};
use crate::foundation::error::{EyeError, EyeResult};

/// Row-major pixel grid indexed `[y][x]`, `y = 0` being the top row.
///
/// Storage is a single flat vector, so every row has exactly `width` cells and there are
/// exactly `height` rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer<T> {
    extent: Extent,
    cells: Vec<T>,
}

/// Mask pixels: `true` is foreground (open eye), `false` is background.
pub type BinaryPixelBuffer = PixelBuffer<bool>;

/// 8-bit-per-channel RGB pixels.
pub type ColorPixelBuffer = PixelBuffer<Rgb8>;

impl<T: Copy + Default> PixelBuffer<T> {
    /// Allocate a buffer filled with `T::default()`.
    pub fn new(width: u32, height: u32) -> EyeResult<Self> {
        let extent = Extent::new(width, height);
        if extent.is_empty() {
            return Err(EyeError::layout(format!(
                "pixel buffer must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self {
            extent,
            cells: vec![T::default(); extent.area()],
        })
    }

    /// Build a buffer from nested rows, rejecting ragged or empty input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> EyeResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(EyeError::layout("pixel buffer must have at least one row and column"));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(EyeError::layout(format!(
                "row {y} has {} cells, expected {width}",
                row.len()
            )));
        }
        let width = u32::try_from(width)
            .map_err(|_| EyeError::layout(format!("width {width} exceeds u32")))?;
        let height = u32::try_from(height)
            .map_err(|_| EyeError::layout(format!("height {height} exceeds u32")))?;
        Ok(Self {
            extent: Extent::new(width, height),
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Wrap a flat row-major cell vector.
    pub fn from_cells(width: u32, height: u32, cells: Vec<T>) -> EyeResult<Self> {
        let extent = Extent::new(width, height);
        if extent.is_empty() {
            return Err(EyeError::layout(format!(
                "pixel buffer must be non-empty, got {width}x{height}"
            )));
        }
        if cells.len() != extent.area() {
            return Err(EyeError::layout(format!(
                "{}x{} buffer needs {} cells, got {}",
                width,
                height,
                extent.area(),
                cells.len()
            )));
        }
        Ok(Self { extent, cells })
    }
}

impl<T: Copy> PixelBuffer<T> {
    #[inline]
    pub fn width(&self) -> u32 {
        self.extent.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.extent.height
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.extent.width && y < self.extent.height,
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.extent.width,
            self.extent.height
        );
        y as usize * self.extent.width as usize + x as usize
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> T {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, v: T) {
        let i = self.index(x, y);
        self.cells[i] = v;
    }

    /// Borrow row `y` (top row is 0).
    pub fn row(&self, y: u32) -> &[T] {
        let w = self.extent.width as usize;
        let start = self.index(0, y);
        &self.cells[start..start + w]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[T]> + ExactSizeIterator {
        self.cells.chunks_exact(self.extent.width as usize)
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }
}

impl BinaryPixelBuffer {
    pub fn count_foreground(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
