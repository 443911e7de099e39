use fontdue::{Font, FontSettings};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{Canvas, CanvasError};
use crate::types::{Color, FontSpec, TextAlign};

#[derive(Debug, Clone)]
struct RasterState {
    fill: Color,
    stroke: Color,
    font: FontSpec,
    align: TextAlign,
    tx: f32,
    ty: f32,
    sx: f32,
    sy: f32,
}

impl Default for RasterState {
    fn default() -> Self {
        Self {
            fill: Color::rgb(0, 0, 0),
            stroke: Color::rgb(0, 0, 0),
            font: FontSpec::default(),
            align: TextAlign::Left,
            tx: 0.0,
            ty: 0.0,
            sx: 1.0,
            sy: 1.0,
        }
    }
}

/// A plain RGBA pixel surface. Coordinates here are device pixels; the
/// transform has already been applied by [`RasterCanvas`].
#[derive(Debug, Clone)]
struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; (width as usize) * (height as usize) * 4];
    }

    /// Source-over blend of `color` (further scaled by `coverage`) at (x, y).
    fn blend(&mut self, x: i32, y: i32, color: Color, coverage: u8) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let alpha = (color.a as u32 * coverage as u32 + 127) / 255;
        if alpha == 0 {
            return;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let inv = 255 - alpha;
        let over = |src: u8, dst: u8| -> u8 {
            ((src as u32 * alpha + dst as u32 * inv + 127) / 255) as u8
        };
        self.pixels[idx] = over(color.r, self.pixels[idx]);
        self.pixels[idx + 1] = over(color.g, self.pixels[idx + 1]);
        self.pixels[idx + 2] = over(color.b, self.pixels[idx + 2]);
        self.pixels[idx + 3] = (alpha + (self.pixels[idx + 3] as u32 * inv + 127) / 255) as u8;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        if width <= 0.0 || height <= 0.0 || color.is_transparent() {
            return;
        }
        let x0 = x.round() as i32;
        let y0 = y.round() as i32;
        let x1 = (x + width).round() as i32;
        let y1 = (y + height).round() as i32;
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px, py, color, 255);
            }
        }
    }

    fn to_png(&self) -> Result<Vec<u8>, CanvasError> {
        let mut out = Vec::new();
        let encoder = PngEncoder::new(&mut out);
        encoder.write_image(&self.pixels, self.width, self.height, ExtendedColorType::Rgba8)?;
        Ok(out)
    }
}

/// A software raster canvas: RGBA pixels plus fontdue glyph drawing.
///
/// The font is supplied by the caller as raw TTF/OTF bytes; a single face
/// serves every [`FontSpec`] (weight variants are not synthesized). Glyphs
/// are alpha-blended the way the glyph-atlas path does it: fontdue coverage
/// becomes the blend alpha for the current fill color.
pub struct RasterCanvas {
    surface: Surface,
    font: Font,
    state: RasterState,
    stack: Vec<RasterState>,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32, font_bytes: &[u8]) -> Result<Self, CanvasError> {
        let font = Font::from_bytes(font_bytes, FontSettings::default())
            .map_err(|e| CanvasError::Font(e.to_string()))?;
        Ok(Self {
            surface: Surface::new(width, height),
            font,
            state: RasterState::default(),
            stack: Vec::new(),
        })
    }

    /// Raw RGBA pixel bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.surface.pixels
    }

    /// Encodes the surface as a PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, CanvasError> {
        self.surface.to_png()
    }

    fn point(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.state.tx + self.state.sx * x,
            self.state.ty + self.state.sy * y,
        )
    }

    /// Device-space advance of one char at the current font and transform.
    fn device_advance(&self, c: char, px_size: f32) -> f32 {
        self.font.metrics(c, px_size).advance_width
    }

    fn draw_run(&mut self, text: &str, left: f32, baseline: f32, px_size: f32, condense: f32) {
        let color = self.state.fill;
        let mut pen = left;
        for c in text.chars() {
            let (metrics, bitmap) = self.font.rasterize(c, px_size);
            let gx = (pen + metrics.xmin as f32).round() as i32;
            let gy = (baseline - metrics.ymin as f32).round() as i32 - metrics.height as i32;
            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let coverage = bitmap[row * metrics.width + col];
                    if coverage > 0 {
                        self.surface
                            .blend(gx + col as i32, gy + row as i32, color, coverage);
                    }
                }
            }
            pen += metrics.advance_width * condense;
        }
    }
}

impl Canvas for RasterCanvas {
    fn width(&self) -> u32 {
        self.surface.width
    }

    fn height(&self) -> u32 {
        self.surface.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        self.stack.clear();
        self.state = RasterState::default();
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.state.tx += self.state.sx * dx;
        self.state.ty += self.state.sy * dy;
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.state.sx *= sx;
        self.state.sy *= sy;
    }

    fn set_fill(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_stroke(&mut self, color: Color) {
        self.state.stroke = color;
    }

    fn set_font(&mut self, font: FontSpec) {
        self.state.font = font;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.align = align;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let (dx, dy) = self.point(x, y);
        let color = self.state.fill;
        self.surface
            .fill_rect(dx, dy, width * self.state.sx, height * self.state.sy, color);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let (dx, dy) = self.point(x, y);
        let dw = width * self.state.sx;
        let dh = height * self.state.sy;
        if dw <= 0.0 || dh <= 0.0 {
            return;
        }
        // 1 logical px edges, scaled with the transform but never thinner
        // than one device pixel.
        let t = (1.0 * self.state.sx).max(1.0);
        let color = self.state.stroke;
        self.surface.fill_rect(dx, dy, dw, t, color);
        self.surface.fill_rect(dx, dy + dh - t, dw, t, color);
        self.surface.fill_rect(dx, dy, t, dh, color);
        self.surface.fill_rect(dx + dw - t, dy, t, dh, color);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, max_width: Option<f32>) {
        if text.is_empty() {
            return;
        }
        let (ax, ay) = self.point(x, y);
        let px_size = self.state.font.size * self.state.sx;
        let mut run_width: f32 = text
            .chars()
            .map(|c| self.device_advance(c, px_size))
            .sum();
        let condense = match max_width {
            Some(mw) => {
                let device_max = mw * self.state.sx;
                if run_width > device_max && run_width > 0.0 {
                    let factor = device_max / run_width;
                    run_width = device_max;
                    factor
                } else {
                    1.0
                }
            }
            None => 1.0,
        };
        let left = match self.state.align {
            TextAlign::Left => ax,
            TextAlign::Center => ax - run_width * 0.5,
            TextAlign::Right => ax - run_width,
        };
        // Middle baseline: y anchors the vertical center of the em box.
        let baseline = match self.font.horizontal_line_metrics(px_size) {
            Some(lm) => ay + (lm.ascent + lm.descent) * 0.5,
            None => ay + px_size * 0.35,
        };
        self.draw_run(text, left, baseline, px_size, condense);
    }

    fn measure_text(&self, text: &str) -> f32 {
        // Logical pixels: measured at the unscaled font size.
        let size = self.state.font.size;
        text.chars()
            .map(|c| self.font.metrics(c, size).advance_width)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_is_clipped_to_surface() {
        let mut s = Surface::new(4, 4);
        s.blend(-1, 0, Color::rgb(255, 0, 0), 255);
        s.blend(0, 4, Color::rgb(255, 0, 0), 255);
        assert!(s.pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fill_rect_writes_opaque_pixels() {
        let mut s = Surface::new(4, 4);
        s.fill_rect(1.0, 1.0, 2.0, 2.0, Color::rgb(10, 20, 30));
        let idx = (4 + 1) * 4;
        assert_eq!(&s.pixels[idx..idx + 4], &[10, 20, 30, 255]);
        // outside the rect stays clear
        assert_eq!(&s.pixels[0..4], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_transparent_fill_is_a_noop() {
        let mut s = Surface::new(2, 2);
        s.fill_rect(0.0, 0.0, 2.0, 2.0, Color::TRANSPARENT);
        assert!(s.pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_half_alpha_blends_over_white() {
        let mut s = Surface::new(1, 1);
        s.fill_rect(0.0, 0.0, 1.0, 1.0, Color::rgb(255, 255, 255));
        s.fill_rect(0.0, 0.0, 1.0, 1.0, Color::rgba(0, 0, 0, 128));
        // roughly mid grey
        assert!(s.pixels[0] > 120 && s.pixels[0] < 135);
        assert_eq!(s.pixels[3], 255);
    }

    #[test]
    fn test_png_export_round_trips_dimensions() {
        let mut s = Surface::new(3, 2);
        s.fill_rect(0.0, 0.0, 3.0, 2.0, Color::rgb(1, 2, 3));
        let png = s.to_png().unwrap();
        // PNG signature
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }
}
