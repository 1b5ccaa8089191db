//! Pixel-buffer backend.

use std::path::Path;

use anyhow::Result;
use image::{ImageBuffer, Rgba, RgbaImage};
use tessera_layout::{ColorValue, CornerRadii, DisplayList, Rect, RenderBackend, Viewport};

/// Clear color for new and cleared canvases.
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Software backend that draws into an RGBA pixel buffer.
///
/// A pixel belongs to a shape when its center lies inside the shape, so
/// rectangles on whole-pixel coordinates cover exactly their area.
pub struct Canvas {
    /// RGBA pixel buffer
    buffer: RgbaImage,
}

impl Canvas {
    /// Create a white canvas of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: ImageBuffer::from_pixel(width, height, WHITE),
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Replace the buffer with a white one of the new size, as a window
    /// resize would.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.buffer = ImageBuffer::from_pixel(width, height, WHITE);
    }

    /// Paint every pixel with `color`, ignoring its alpha.
    pub fn clear(&mut self, color: &ColorValue) {
        let rgba = Rgba([color.r, color.g, color.b, 255]);
        for pixel in self.buffer.pixels_mut() {
            *pixel = rgba;
        }
    }

    /// Color of one pixel, or `None` outside the canvas.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<ColorValue> {
        self.buffer
            .get_pixel_checked(x, y)
            .map(|&Rgba([r, g, b, a])| ColorValue::rgba(r, g, b, a))
    }

    /// The underlying buffer.
    #[must_use]
    pub const fn image(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Execute a display list, drawing all commands to the pixel buffer.
    ///
    /// Commands are executed in order (back to front).
    pub fn render(&mut self, display_list: &DisplayList) {
        display_list.replay(self);
    }

    /// Save the rendered image to a file; the format follows the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be saved to the given path.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.buffer.save(path).map_err(|e| {
            anyhow::anyhow!("failed to save frame to '{}': {e}", path.display())
        })?;
        Ok(())
    }

    /// Blend `color` into every pixel whose center satisfies `covers`,
    /// scanning only the pixels under `bounds`.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn paint_where(&mut self, bounds: Rect, color: &ColorValue, covers: impl Fn(f32, f32) -> bool) {
        let clamp = |value: f32, max: u32| value.clamp(0.0, max as f32) as u32;
        let x0 = clamp(bounds.x.floor(), self.width());
        let y0 = clamp(bounds.y.floor(), self.height());
        let x1 = clamp((bounds.x + bounds.width).ceil(), self.width());
        let y1 = clamp((bounds.y + bounds.height).ceil(), self.height());

        let fg = Rgba([color.r, color.g, color.b, color.a]);
        for py in y0..y1 {
            for px in x0..x1 {
                if covers(px as f32 + 0.5, py as f32 + 0.5) {
                    let bg = *self.buffer.get_pixel(px, py);
                    self.buffer.put_pixel(px, py, alpha_blend(fg, bg, color.a));
                }
            }
        }
    }
}

impl RenderBackend for Canvas {
    fn fill_rect(&mut self, rect: Rect, color: &ColorValue, radii: &CornerRadii) {
        if color.is_transparent() || rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let radii = clamp_radii(rect, radii);
        self.paint_where(rect, color, |x, y| inside_rounded(rect, &radii, x, y));
    }

    /// [§ 4 Borders](https://www.w3.org/TR/css-backgrounds-3/#borders)
    ///
    /// The stroke lies inside `rect`: a pixel is painted when it is inside
    /// the rectangle but not inside the rectangle shrunk by `thickness` on
    /// every side. Inner corner radii shrink by the same amount.
    fn stroke_rect(&mut self, rect: Rect, color: &ColorValue, thickness: f32, radii: &CornerRadii) {
        if color.is_transparent() || thickness <= 0.0 || rect.width <= 0.0 || rect.height <= 0.0
        {
            return;
        }
        let outer_radii = clamp_radii(rect, radii);
        let inner = Rect::new(
            rect.x + thickness,
            rect.y + thickness,
            rect.width - 2.0 * thickness,
            rect.height - 2.0 * thickness,
        );
        let shrink = |r: f32| (r - thickness).max(0.0);
        let inner_radii = CornerRadii {
            top_left: shrink(outer_radii.top_left),
            top_right: shrink(outer_radii.top_right),
            bottom_right: shrink(outer_radii.bottom_right),
            bottom_left: shrink(outer_radii.bottom_left),
        };
        let hollow = inner.width > 0.0 && inner.height > 0.0;

        self.paint_where(rect, color, |x, y| {
            inside_rounded(rect, &outer_radii, x, y)
                && !(hollow && inside_rounded(inner, &inner_radii, x, y))
        });
    }

    #[allow(clippy::cast_precision_loss)]
    fn viewport_size(&self) -> Viewport {
        Viewport::new(self.width() as f32, self.height() as f32)
    }
}

/// [§ 5.5 Overlapping Curves](https://www.w3.org/TR/css-backgrounds-3/#corner-overlap)
///
/// Radii never exceed half the shorter side.
fn clamp_radii(rect: Rect, radii: &CornerRadii) -> CornerRadii {
    let limit = rect.width.min(rect.height) / 2.0;
    let clamp = |r: f32| r.clamp(0.0, limit.max(0.0));
    CornerRadii {
        top_left: clamp(radii.top_left),
        top_right: clamp(radii.top_right),
        bottom_right: clamp(radii.bottom_right),
        bottom_left: clamp(radii.bottom_left),
    }
}

/// Whether `(x, y)` lies inside `rect` with its corners rounded by `radii`.
fn inside_rounded(rect: Rect, radii: &CornerRadii, x: f32, y: f32) -> bool {
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;
    if x < left || y < top || x >= right || y >= bottom {
        return false;
    }

    // Each corner: (radius, circle center, whether the point is in that
    // corner's square).
    let corners = [
        (radii.top_left, left + radii.top_left, top + radii.top_left),
        (radii.top_right, right - radii.top_right, top + radii.top_right),
        (
            radii.bottom_right,
            right - radii.bottom_right,
            bottom - radii.bottom_right,
        ),
        (
            radii.bottom_left,
            left + radii.bottom_left,
            bottom - radii.bottom_left,
        ),
    ];
    corners.iter().enumerate().all(|(index, &(radius, cx, cy))| {
        if radius <= 0.0 {
            return true;
        }
        let in_corner = match index {
            0 => x < cx && y < cy,
            1 => x > cx && y < cy,
            2 => x > cx && y > cy,
            _ => x < cx && y > cy,
        };
        !in_corner || (x - cx).hypot(y - cy) <= radius
    })
}

/// Alpha blend a foreground color onto a background color.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn alpha_blend(fg: Rgba<u8>, bg: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    if alpha == 255 {
        return Rgba([fg[0], fg[1], fg[2], 255]);
    }
    let a = f32::from(alpha) / 255.0;
    let inv_a = 1.0 - a;

    Rgba([
        f32::from(fg[0]).mul_add(a, f32::from(bg[0]) * inv_a).round() as u8,
        f32::from(fg[1]).mul_add(a, f32::from(bg[1]) * inv_a).round() as u8,
        f32::from(fg[2]).mul_add(a, f32::from(bg[2]) * inv_a).round() as u8,
        255,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_blend_half() {
        let out = alpha_blend(Rgba([0, 0, 0, 255]), WHITE, 128);
        assert_eq!(out, Rgba([127, 127, 127, 255]));
    }

    #[test]
    fn test_rounded_corner_excludes_corner_pixel() {
        let rect = Rect::new(0.0, 0.0, 20.0, 20.0);
        let radii = CornerRadii::from([8.0, 0.0, 0.0, 0.0]);
        assert!(!inside_rounded(rect, &radii, 0.5, 0.5));
        assert!(inside_rounded(rect, &radii, 19.5, 0.5));
        assert!(inside_rounded(rect, &radii, 8.0, 8.0));
    }
}
