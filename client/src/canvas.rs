use std::f64::consts::TAU;

use blastris::{Rect, Surface};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::error::ClientError;

/// A `<canvas>` element's 2d context, used as a renderer's drawing surface.
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, ClientError> {
        let context = canvas
            .get_context("2d")?
            .ok_or(ClientError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ClientError::NoContext)?;
        Ok(CanvasSurface { context })
    }

    pub fn from_id(document: &Document, id: &str) -> Result<Self, ClientError> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| ClientError::MissingElement(id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ClientError::NotACanvas(id.to_string()))?;
        CanvasSurface::new(&canvas)
    }
}

impl Surface for CanvasSurface {
    // read from the element every time so css or script resizes are honoured
    fn size(&self) -> (u32, u32) { self.context.canvas().map(|c| (c.width(), c.height())).unwrap_or((0, 0)) }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.context.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, fill: &str, rect: Rect) {
        self.context.set_fill_style_str(fill);
        self.context.fill_rect(rect.x as f64, rect.y as f64, rect.width as f64, rect.height as f64);
    }

    fn fill_circle(&mut self, fill: &str, x: f64, y: f64, radius: f64) {
        let ctx = &self.context;
        ctx.set_fill_style_str(fill);
        ctx.begin_path();
        // only fails for a negative radius
        if ctx.arc(x, y, radius, 0.0, TAU).is_ok() {
            ctx.fill();
        }
    }
}
