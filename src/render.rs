use crate::{
    cell::{CellType, WALL_FILL},
    geometry::{PreviewGeometry, Rect, RenderGeometry, CELL_PADDING},
    snapshot::Snapshot,
};

/// A 2-D drawing target owned by exactly one renderer.
pub trait Surface {
    // pixel size, asked for again on every draw since the canvas may be resized at any time
    fn size(&self) -> (u32, u32);

    fn clear(&mut self);

    fn fill_rect(&mut self, fill: &str, rect: Rect);

    fn fill_circle(&mut self, fill: &str, x: f64, y: f64, radius: f64);
}

const BLAST_BACKGROUND: &str = "#ffffff";
// concentric discs of the blast glyph from the outside in, as (divisor of cell size, fill)
const BLAST_RINGS: [(f64, &str); 4] = [(3.0, "#ff9900"), (5.0, "#ff0000"), (8.0, "#ffff00"), (15.0, "#ffffff")];

/// Paints one cell into `bounds`, the cell's full unpadded square.
pub fn paint_cell(surface: &mut impl Surface, cell: CellType, bounds: Rect) {
    match cell.fill() {
        Some(fill) => surface.fill_rect(fill, bounds.inset(CELL_PADDING)),
        None => paint_blast(surface, bounds),
    }
}

// static explosion marking a cell in a line that is being cleared
fn paint_blast(surface: &mut impl Surface, bounds: Rect) {
    surface.fill_rect(BLAST_BACKGROUND, bounds);

    let size = bounds.width as f64;
    let x = bounds.x as f64 + size / 2.0;
    let y = bounds.y as f64 + bounds.height as f64 / 2.0;
    for (divisor, fill) in BLAST_RINGS {
        surface.fill_circle(fill, x, y, size / divisor);
    }
}

/// Draws one playfield, walls included, from the latest snapshot it was given.
pub struct FieldRenderer<S: Surface> {
    surface: S,
    snapshot: Option<Snapshot>,
}

impl<S: Surface> FieldRenderer<S> {
    pub fn new(surface: S) -> Self { FieldRenderer { surface, snapshot: None } }

    /// Replaces the held snapshot and redraws.
    pub fn update(&mut self, snapshot: Snapshot) {
        self.snapshot = Some(snapshot);
        self.draw();
    }

    /// Repaints the held snapshot. Does nothing before the first update or when the field or
    /// the surface has no area.
    pub fn draw(&mut self) {
        let Some(snapshot) = &self.snapshot else {
            return;
        };

        let (width, height) = self.surface.size();
        let Some(geometry) = RenderGeometry::compute(width, height, snapshot.rows(), snapshot.columns()) else {
            let (rows, cols) = (snapshot.rows(), snapshot.columns());
            tracing::debug!(width, height, rows, cols, "skipping degenerate draw");
            return;
        };

        let surface = &mut self.surface;
        surface.clear();

        // walls first so cells never paint under them
        for wall in geometry.walls() {
            surface.fill_rect(WALL_FILL, wall);
        }

        for (row, line) in snapshot.lines().iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                paint_cell(surface, *cell, geometry.cell(row, col));
            }
        }
    }

    pub fn surface(&self) -> &S { &self.surface }

    pub fn surface_mut(&mut self) -> &mut S { &mut self.surface }
}

/// Draws the next-piece preview carried by some snapshots onto a separate surface.
pub struct PreviewRenderer<S: Surface> {
    surface: S,
    preview: Option<Vec<Vec<CellType>>>,
}

impl<S: Surface> PreviewRenderer<S> {
    pub fn new(surface: S) -> Self { PreviewRenderer { surface, preview: None } }

    /// Takes the preview from `snapshot`; a snapshot without one leaves the surface blank.
    pub fn update(&mut self, snapshot: &Snapshot) {
        self.preview = snapshot.preview().map(<[_]>::to_vec);
        self.draw();
    }

    pub fn draw(&mut self) {
        let (width, height) = self.surface.size();
        if width == 0 || height == 0 {
            return;
        }
        self.surface.clear();

        let Some(preview) = &self.preview else {
            return;
        };

        // preview rows may be ragged, lay out for the widest one
        let columns = preview.iter().map(Vec::len).max().unwrap_or(0);
        let Some(geometry) = PreviewGeometry::compute(width, height, preview.len(), columns) else {
            return;
        };

        for (row, line) in preview.iter().enumerate() {
            for (col, cell) in line.iter().enumerate().filter(|(_, cell)| !cell.is_empty()) {
                paint_cell(&mut self.surface, *cell, geometry.cell(row, col));
            }
        }
    }

    pub fn surface(&self) -> &S { &self.surface }
}
