use cosmic_text::{Attrs, Buffer, Color, FontSystem, Metrics, Shaping, SwashCache};

use crate::geometry::Point;
use crate::theme::Bgra;

/// Software drawing target: a BGRA pixel buffer plus the text machinery
/// needed to rasterize glyphs into it.
pub struct Canvas {
    pub width: i32,
    pub height: i32,
    pixel_data: Vec<u8>,
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl Canvas {
    pub fn new(width: i32, height: i32) -> Self {
        let pixel_data = vec![0u8; (width * height * 4) as usize];

        Self {
            width,
            height,
            pixel_data,
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.pixel_data
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Bgra) {
        for py in y.max(0)..(y + height).min(self.height) {
            for px in x.max(0)..(x + width).min(self.width) {
                self.set_pixel(px, py, color);
            }
        }
    }

    /// One-pixel rectangle outline.
    pub fn stroke_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Bgra) {
        self.fill_rect(x, y, width, 1, color);
        self.fill_rect(x, y + height - 1, width, 1, color);
        self.fill_rect(x, y, 1, height, color);
        self.fill_rect(x + width - 1, y, 1, height, color);
    }

    pub fn stroke_circle(&mut self, center: Point, radius: f32, color: Bgra) {
        let outer = radius + 1.0;
        let x_min = (center.x - outer).floor() as i32;
        let x_max = (center.x + outer).ceil() as i32;
        let y_min = (center.y - outer).floor() as i32;
        let y_max = (center.y + outer).ceil() as i32;

        for py in y_min..=y_max {
            for px in x_min..=x_max {
                let dist = Self::squared_distance(center.x, center.y, px as f32, py as f32).sqrt();

                // Fade out at the edges of the ring
                let alpha = 1.0 - (dist - radius).abs();
                if alpha <= 0.0 {
                    continue;
                }

                self.blend_pixel(px, py, color, (alpha * 255.0) as u8);
            }
        }
    }

    pub fn draw_line(&mut self, from: Point, to: Point, thickness: f32, color: Bgra) {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let steps = dx.abs().max(dy.abs()) as i32;

        if steps == 0 {
            return;
        }

        let x_inc = dx / steps as f32;
        let y_inc = dy / steps as f32;

        let half_thickness = thickness / 2.0;
        let search_radius = (half_thickness + 2.0).ceil() as i32;
        let inner_radius = half_thickness - 1.0;
        let outer_radius = half_thickness + 1.0;
        let inner_radius_sq = inner_radius * inner_radius;
        let outer_radius_sq = outer_radius * outer_radius;

        let mut x = from.x;
        let mut y = from.y;

        for _ in 0..=steps {
            for dy_offset in -search_radius..=search_radius {
                for dx_offset in -search_radius..=search_radius {
                    let px = (x + dx_offset as f32).round() as i32;
                    let py = (y + dy_offset as f32).round() as i32;

                    let squared_dist = Self::squared_distance(x, y, px as f32, py as f32);

                    // Fade out at the edges
                    let alpha = if squared_dist <= inner_radius_sq {
                        1.0
                    } else if squared_dist <= outer_radius_sq {
                        1.0 - (squared_dist - inner_radius_sq)
                            / (outer_radius_sq - inner_radius_sq)
                    } else {
                        continue;
                    };

                    self.blend_pixel(px, py, color, (alpha * 255.0) as u8);
                }
            }
            x += x_inc;
            y += y_inc;
        }
    }

    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: f32, color: Bgra) {
        let buffer = self.create_drawing_buffer(text, font_size);
        // Convert BGRA to RGBA
        let text_color = Color::rgba(color.r(), color.g(), color.b(), color.a());

        // Capture needed fields to avoid borrow issues
        let width = self.width;
        let height = self.height;
        let pixel_data = &mut self.pixel_data;

        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            text_color,
            |gx, gy, _w, _h, glyph_color| {
                let px = x + gx;
                let py = y + gy;

                if px >= 0 && px < width && py >= 0 && py < height {
                    Self::alpha_blending(
                        pixel_data,
                        Self::pixel_idx(width, px, py),
                        color,
                        glyph_color.a(),
                    );
                }
            },
        );
    }

    fn create_drawing_buffer(&mut self, text: &str, font_size: f32) -> Buffer {
        let metrics = Metrics::new(font_size, font_size * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(
            &mut self.font_system,
            Some(self.width as f32),
            Some(self.height as f32),
        );
        buffer.set_text(
            &mut self.font_system,
            text,
            &Attrs::new(),
            Shaping::Advanced,
        );
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Bgra) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        let index = Self::pixel_idx(self.width, x, y);
        self.pixel_data[index..index + 4].copy_from_slice(color.as_ref());
    }

    pub fn pixel_at(&self, x: i32, y: i32) -> Option<Bgra> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let index = Self::pixel_idx(self.width, x, y);
        let px = &self.pixel_data[index..index + 4];
        Some(Bgra::from_rgba(px[2], px[1], px[0], px[3]))
    }

    fn blend_pixel(&mut self, x: i32, y: i32, color: Bgra, alpha: u8) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        Self::alpha_blending(
            &mut self.pixel_data,
            Self::pixel_idx(self.width, x, y),
            color,
            alpha,
        );
    }

    #[inline]
    fn pixel_idx(width: i32, x: i32, y: i32) -> usize {
        ((y * width + x) * 4) as usize
    }

    #[inline]
    fn squared_distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
        let dx = x2 - x1;
        let dy = y2 - y1;
        dx * dx + dy * dy
    }

    fn alpha_blending(pxl_data: &mut [u8], idx: usize, color: Bgra, alpha: u8) {
        if idx + 3 >= pxl_data.len() {
            return;
        }

        let inv_alpha = 255 - alpha;

        pxl_data[idx] = Self::blend_color(color.b(), alpha, pxl_data[idx], inv_alpha);
        pxl_data[idx + 1] = Self::blend_color(color.g(), alpha, pxl_data[idx + 1], inv_alpha);
        pxl_data[idx + 2] = Self::blend_color(color.r(), alpha, pxl_data[idx + 2], inv_alpha);
        pxl_data[idx + 3] = pxl_data[idx + 3].max(alpha);
    }

    #[inline]
    fn blend_color(src: u8, alpha: u8, dst: u8, inv_alpha: u8) -> u8 {
        ((src as u16 * alpha as u16 + dst as u16 * inv_alpha as u16) >> 8) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Bgra = Bgra::from_rgba(255, 0, 0, 255);

    #[test]
    fn fill_rect_clips_to_canvas() {
        let mut canvas = Canvas::new(16, 16);
        canvas.fill_rect(-4, -4, 40, 40, INK);
        assert_eq!(canvas.pixel_at(0, 0), Some(INK));
        assert_eq!(canvas.pixel_at(15, 15), Some(INK));
    }

    #[test]
    fn set_pixel_outside_bounds_is_ignored() {
        let mut canvas = Canvas::new(8, 8);
        canvas.set_pixel(-1, 0, INK);
        canvas.set_pixel(8, 0, INK);
        canvas.set_pixel(0, 8, INK);
        assert!(canvas.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn stroke_rect_leaves_interior_untouched() {
        let mut canvas = Canvas::new(16, 16);
        canvas.stroke_rect(2, 2, 10, 10, INK);
        assert_eq!(canvas.pixel_at(2, 2), Some(INK));
        assert_eq!(canvas.pixel_at(11, 11), Some(INK));
        assert_eq!(canvas.pixel_at(7, 7), Some(Bgra::from_rgba(0, 0, 0, 0)));
    }

    #[test]
    fn horizontal_line_covers_its_endpoints() {
        let mut canvas = Canvas::new(32, 32);
        canvas.draw_line(Point::new(4.0, 16.0), Point::new(28.0, 16.0), 2.0, INK);
        for x in 4..=28 {
            let px = canvas.pixel_at(x, 16).unwrap();
            assert!(px.r() > 0, "gap in line at x={x}");
        }
    }

    #[test]
    fn circle_ring_hits_cardinal_points() {
        let mut canvas = Canvas::new(64, 64);
        let center = Point::new(32.0, 32.0);
        canvas.stroke_circle(center, 20.0, INK);
        for (x, y) in [(32, 12), (32, 52), (12, 32), (52, 32)] {
            let px = canvas.pixel_at(x, y).unwrap();
            assert!(px.r() > 0, "ring missing at ({x},{y})");
        }
        // Center stays clear
        assert_eq!(canvas.pixel_at(32, 32), Some(Bgra::from_rgba(0, 0, 0, 0)));
    }

    #[test]
    fn opaque_blend_replaces_destination() {
        let mut data = vec![10u8, 20, 30, 40];
        Canvas::alpha_blending(&mut data, 0, INK, 255);
        // 255/256 of the source channel survives the shift
        assert!(data[2] >= 254);
        assert!(data[0] <= 1);
    }
}
