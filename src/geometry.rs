/// Pixel layout of one playfield on one canvas, derived fresh for every draw.
///
/// The field is framed by a wall one cell thick on the left, right and bottom. Everything is
/// measured in whole pixels so repeated draws land on exactly the same pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderGeometry {
    pub rows: usize,
    pub columns: usize,
    pub cell_size: i64,
    // left edge of the left wall, negative when the canvas is narrower than the field
    pub offset_x: i64,
}

/// An axis-aligned rectangle in canvas pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self { Rect { x, y, width, height } }

    // shrink by `by` pixels on every side
    pub fn inset(self, by: i64) -> Rect {
        Rect::new(self.x + by, self.y + by, self.width - 2 * by, self.height - 2 * by)
    }
}

// padding between neighbouring cells
pub const CELL_PADDING: i64 = 1;

impl RenderGeometry {
    /// Lays out a `rows` by `columns` field on a canvas of the given pixel size.
    ///
    /// Returns `None` when there is nothing sensible to draw: an empty field, an empty canvas, or a
    /// canvas too short to give each row at least one pixel.
    pub fn compute(canvas_width: u32, canvas_height: u32, rows: usize, columns: usize) -> Option<Self> {
        if rows == 0 || columns == 0 || canvas_width == 0 || canvas_height == 0 {
            return None;
        }

        // one extra row for the bottom wall
        let cell_size = i64::from(canvas_height) / (rows as i64 + 1);
        if cell_size == 0 {
            return None;
        }

        let field_width = (columns as i64 + 2) * cell_size;
        let offset_x = (i64::from(canvas_width) - field_width).div_euclid(2);

        Some(RenderGeometry { rows, columns, cell_size, offset_x })
    }

    /// Width of the whole field in pixels, walls included.
    pub fn field_width(&self) -> i64 { (self.columns as i64 + 2) * self.cell_size }

    pub fn field_height(&self) -> i64 { (self.rows as i64 + 1) * self.cell_size }

    // x of the first interior column, just right of the left wall
    fn interior_x(&self) -> i64 { self.offset_x + self.cell_size }

    pub fn left_wall(&self) -> Rect { Rect::new(self.offset_x, 0, self.cell_size, self.field_height()) }

    pub fn right_wall(&self) -> Rect {
        let x = self.interior_x() + self.columns as i64 * self.cell_size;
        Rect::new(x, 0, self.cell_size, self.field_height())
    }

    pub fn bottom_wall(&self) -> Rect {
        let y = self.rows as i64 * self.cell_size;
        Rect::new(self.interior_x(), y, self.columns as i64 * self.cell_size, self.cell_size)
    }

    pub fn walls(&self) -> [Rect; 3] { [self.left_wall(), self.right_wall(), self.bottom_wall()] }

    /// Full, unpadded bounds of the interior cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Rect {
        let size = self.cell_size;
        Rect::new(self.interior_x() + col as i64 * size, row as i64 * size, size, size)
    }
}

/// Layout of a small preview grid centred in its own canvas, without walls.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PreviewGeometry {
    pub cell_size: i64,
    pub offset_x: i64,
    pub offset_y: i64,
}

impl PreviewGeometry {
    pub fn compute(canvas_width: u32, canvas_height: u32, rows: usize, columns: usize) -> Option<Self> {
        if rows == 0 || columns == 0 {
            return None;
        }

        let (width, height) = (i64::from(canvas_width), i64::from(canvas_height));
        let cell_size = (width / columns as i64).min(height / rows as i64);
        if cell_size == 0 {
            return None;
        }

        Some(PreviewGeometry {
            cell_size,
            offset_x: (width - columns as i64 * cell_size).div_euclid(2),
            offset_y: (height - rows as i64 * cell_size).div_euclid(2),
        })
    }

    pub fn cell(&self, row: usize, col: usize) -> Rect {
        let size = self.cell_size;
        Rect::new(self.offset_x + col as i64 * size, self.offset_y + row as i64 * size, size, size)
    }
}
