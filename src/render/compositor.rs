//! Draws a single transformed stamp onto a surface.
//!
//! The image is fitted into a `render_size` square (aspect ratio is not
//! kept), rotated about its centre and placed at the transform position.
//! Rendering works backwards: every covered backing pixel is mapped into
//! image space and sampled nearest-neighbour, then alpha-blended over the
//! existing content. The placement lives in a local `Placement` value, so
//! no transform state survives the call.

use image::Pixel;
use tracing::trace;

use crate::types::{ImageResource, StampTransform};

use super::DrawingSurface;

/// A stamp placement resolved into backing-pixel space.
#[derive(Debug, Clone, Copy)]
struct Placement {
    cx: f32,
    cy: f32,
    half: f32,
    cos: f32,
    sin: f32,
}

impl Placement {
    fn new(transform: &StampTransform, scale: f32) -> Self {
        let (sin, cos) = transform.rotation.sin_cos();
        Self {
            cx: transform.position.x * scale,
            cy: transform.position.y * scale,
            half: transform.render_size * scale / 2.0,
            cos,
            sin,
        }
    }

    /// Axis-aligned bounds of the rotated square, `(x0, y0, x1, y1)` inclusive-exclusive.
    fn bounds(&self, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        let extent = self.half * (self.cos.abs() + self.sin.abs());
        let x0 = (self.cx - extent).floor().max(0.0);
        let y0 = (self.cy - extent).floor().max(0.0);
        let x1 = (self.cx + extent).ceil().min(width as f32);
        let y1 = (self.cy + extent).ceil().min(height as f32);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    /// Map a backing-space point into the stamp's unrotated local square,
    /// returning normalised `(u, v)` in `[0, 1)` when inside it.
    fn to_unit(&self, x: f32, y: f32) -> Option<(f32, f32)> {
        let dx = x - self.cx;
        let dy = y - self.cy;
        let lx = dx * self.cos + dy * self.sin;
        let ly = -dx * self.sin + dy * self.cos;
        if lx < -self.half || lx >= self.half || ly < -self.half || ly >= self.half {
            return None;
        }
        let size = self.half * 2.0;
        Some(((lx + self.half) / size, (ly + self.half) / size))
    }
}

/// Draw `image` onto `surface` with `transform`.
///
/// Does nothing when `image` is `None` or empty, when the stamp has no area,
/// when the transform is not finite, or when it lies entirely off the surface.
pub fn stamp(surface: &mut DrawingSurface, image: Option<&ImageResource>, transform: &StampTransform) {
    let Some(image) = image else {
        return;
    };
    if !transform.render_size.is_finite() || transform.render_size <= 0.0 {
        return;
    }
    let StampTransform {
        position, rotation, ..
    } = *transform;
    if !(position.x.is_finite() && position.y.is_finite() && rotation.is_finite()) {
        trace!(x = position.x, y = position.y, rotation, "skipping non-finite stamp");
        return;
    }

    let source = image.pixels();
    let (iw, ih) = source.dimensions();
    if iw == 0 || ih == 0 {
        return;
    }

    let placement = Placement::new(transform, surface.dpr());

    let buffer = surface.buffer_mut();
    let Some((x0, y0, x1, y1)) = placement.bounds(buffer.width(), buffer.height()) else {
        return;
    };

    let mut touched = 0usize;
    for py in y0..y1 {
        for px in x0..x1 {
            let Some((u, v)) = placement.to_unit(px as f32 + 0.5, py as f32 + 0.5) else {
                continue;
            };
            let sx = ((u * iw as f32) as u32).min(iw - 1);
            let sy = ((v * ih as f32) as u32).min(ih - 1);
            let src = source.get_pixel(sx, sy);
            if src.0[3] == 0 {
                continue;
            }
            buffer.get_pixel_mut(px, py).blend(src);
            touched += 1;
        }
    }

    trace!(
        x = transform.position.x,
        y = transform.position.y,
        size = transform.render_size,
        rotation = transform.rotation,
        touched,
        "stamp composited"
    );
}
