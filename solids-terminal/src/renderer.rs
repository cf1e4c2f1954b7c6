/// ASCII wireframe rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use solids_core::Point2D;
use std::io::Write;

/// Assumed glyph cell size in virtual canvas pixels.
///
/// The projector's focal calibration targets pixel space; dividing screen
/// coordinates by the cell size keeps shapes proportioned in a character
/// grid and corrects the roughly 2:1 glyph aspect ratio.
pub const CELL_WIDTH_PX: f32 = 8.0;
pub const CELL_HEIGHT_PX: f32 = 16.0;

/// Characters from nearest to farthest depth band.
const DEPTH_RAMP: &[char] = &['@', '#', '*', '+', '=', '-', ':', '.'];

/// Depth range mapped across the ramp; object extents stay within this.
const DEPTH_NEAR: f32 = -2.0;
const DEPTH_FAR: f32 = 2.0;

/// Converts projected edges and vertices to terminal characters with a
/// depth buffer, so nearer strokes win overlapping cells.
pub struct WireframeRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    char_buffer: Vec<char>,
}

impl WireframeRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            char_buffer: vec![' '; size],
        }
    }

    pub fn clear(&mut self) {
        for i in 0..self.depth_buffer.len() {
            self.depth_buffer[i] = f32::INFINITY;
            self.char_buffer[i] = ' ';
        }
    }

    /// Viewport size in virtual pixels, for feeding the projector.
    pub fn viewport(&self) -> (f32, f32) {
        (
            self.width as f32 * CELL_WIDTH_PX,
            self.height as f32 * CELL_HEIGHT_PX,
        )
    }

    /// Rasterize every edge of a projected mesh.
    pub fn draw_edges(&mut self, edges: &[[usize; 2]], projected: &[Point2D]) {
        for &[i, j] in edges {
            self.draw_line(projected[i], projected[j]);
        }
    }

    /// Bresenham line between two projected points, interpolating depth.
    pub fn draw_line(&mut self, a: Point2D, b: Point2D) {
        let (x0, y0) = cell_of(a);
        let (x1, y1) = cell_of(b);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let steps = dx.max(-dy).max(1) as f32;

        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        let mut travelled = 0.0_f32;
        loop {
            let t = travelled / steps;
            let depth = a.depth + (b.depth - a.depth) * t;
            self.plot(x, y, depth, depth_char(depth));

            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
            travelled += 1.0;
        }
    }

    /// Draw an `o` marker at each projected vertex, biased slightly toward
    /// the camera so markers beat coincident edge strokes.
    pub fn mark_vertices<'a>(&mut self, projected: impl IntoIterator<Item = &'a Point2D>) {
        for p in projected {
            let (x, y) = cell_of(*p);
            self.plot(x, y, p.depth - 0.05, 'o');
        }
    }

    fn plot(&mut self, x: i32, y: i32, depth: f32, character: char) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        if depth < self.depth_buffer[idx] {
            self.depth_buffer[idx] = depth;
            self.char_buffer[idx] = character;
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let c = self.char_buffer[idx];

                let color = match c {
                    'o' => Color::Red,
                    '@' | '#' => Color::White,
                    '*' | '+' | '=' => Color::Grey,
                    _ => Color::DarkGrey,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn cell_of(p: Point2D) -> (i32, i32) {
    (
        (p.x / CELL_WIDTH_PX).round() as i32,
        (p.y / CELL_HEIGHT_PX).round() as i32,
    )
}

fn depth_char(depth: f32) -> char {
    let t = ((depth - DEPTH_NEAR) / (DEPTH_FAR - DEPTH_NEAR)).clamp(0.0, 1.0);
    let index = (t * (DEPTH_RAMP.len() - 1) as f32).round() as usize;
    DEPTH_RAMP[index.min(DEPTH_RAMP.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f32, y: f32, depth: f32) -> Point2D {
        Point2D { x, y, depth }
    }

    #[test]
    fn test_line_stays_in_bounds() {
        let mut renderer = WireframeRenderer::new(10, 10);
        // Endpoints far outside the buffer must not panic or write out of range.
        renderer.draw_line(point(-500.0, -500.0, 0.0), point(5000.0, 5000.0, 0.0));
        assert!(renderer.char_buffer.iter().any(|&c| c != ' '));
    }

    #[test]
    fn test_nearer_stroke_wins() {
        let mut renderer = WireframeRenderer::new(4, 4);
        renderer.draw_line(point(0.0, 0.0, 1.5), point(24.0, 0.0, 1.5));
        let far_char = renderer.char_buffer[0];
        renderer.draw_line(point(0.0, 0.0, -1.5), point(24.0, 0.0, -1.5));
        let near_char = renderer.char_buffer[0];
        assert_ne!(far_char, near_char);
        // Redrawing the far line must not overwrite the near one.
        renderer.draw_line(point(0.0, 0.0, 1.5), point(24.0, 0.0, 1.5));
        assert_eq!(renderer.char_buffer[0], near_char);
    }

    #[test]
    fn test_clear_resets_buffers() {
        let mut renderer = WireframeRenderer::new(4, 4);
        renderer.draw_line(point(0.0, 0.0, 0.0), point(24.0, 48.0, 0.0));
        renderer.clear();
        assert!(renderer.char_buffer.iter().all(|&c| c == ' '));
        assert!(renderer.depth_buffer.iter().all(|&d| d == f32::INFINITY));
    }

    #[test]
    fn test_vertex_marker_beats_edge() {
        let mut renderer = WireframeRenderer::new(4, 4);
        renderer.draw_line(point(0.0, 0.0, 0.0), point(24.0, 0.0, 0.0));
        renderer.mark_vertices([point(0.0, 0.0, 0.0)].iter());
        assert_eq!(renderer.char_buffer[0], 'o');
    }
}
