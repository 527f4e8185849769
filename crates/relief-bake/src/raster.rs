//! Edge-function triangle fill into the capture buffer.

use glam::Vec2;
use relief_mesh::HeightChannel;

use crate::Texel;

/// Signed edge function: positive when `p` lies left of the edge `a -> b`.
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Rasterize one triangle into the x-major `resolution * resolution`
/// buffer, interpolating the height channel across covered texels.
///
/// Coverage is tested at texel centers. A covered texel keeps whichever
/// surface is highest (the one nearest the down-looking camera), so
/// overlapping geometry resolves to its top surface.
pub(crate) fn fill_triangle(
    buffer: &mut [Texel],
    resolution: usize,
    mut corners: [Vec2; 3],
    mut channels: [HeightChannel; 3],
) {
    let mut area = edge(corners[0], corners[1], corners[2]);
    if area == 0.0 {
        return;
    }
    // Normalize winding so all edge functions are positive inside.
    if area < 0.0 {
        corners.swap(1, 2);
        channels.swap(1, 2);
        area = -area;
    }

    let limit = resolution as f32;
    let min = corners[0].min(corners[1]).min(corners[2]).max(Vec2::ZERO);
    let max = corners[0]
        .max(corners[1])
        .max(corners[2])
        .min(Vec2::splat(limit));
    if min.x >= max.x || min.y >= max.y {
        return;
    }

    let x_begin = min.x.floor() as usize;
    let x_end = (max.x.ceil() as usize).min(resolution);
    let y_begin = min.y.floor() as usize;
    let y_end = (max.y.ceil() as usize).min(resolution);

    for x in x_begin..x_end {
        for y in y_begin..y_end {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let w0 = edge(corners[1], corners[2], p);
            let w1 = edge(corners[2], corners[0], p);
            let w2 = edge(corners[0], corners[1], p);
            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }

            let b0 = w0 / area;
            let b1 = w1 / area;
            let b2 = w2 / area;
            let normalized = b0 * channels[0].normalized
                + b1 * channels[1].normalized
                + b2 * channels[2].normalized;
            let validity = b0 * channels[0].validity
                + b1 * channels[1].validity
                + b2 * channels[2].validity;

            let texel = &mut buffer[x * resolution + y];
            if texel.is_clear() || normalized > texel.r {
                *texel = Texel {
                    r: normalized,
                    g: 0.0,
                    b: 0.0,
                    a: validity,
                };
            }
        }
    }
}
