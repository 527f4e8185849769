//! Decode a capture back into absolute world-space heights.

use crate::capture::{BakeError, CaptureImage};
use crate::grid::HeightGrid;

/// Map a capture's texels into a same-dimension grid of absolute heights.
///
/// A clear texel (alpha 0, no geometry covered it) decodes to height 0,
/// the absolute world floor, not `extent.min`. A covered texel's red
/// channel holds the [0, 1] value the encoder wrote and is mapped back
/// through the extent the image carries from encode time, so a grown
/// accumulator extent cannot skew already-captured heights.
pub fn decode_heights(image: &CaptureImage) -> Result<HeightGrid, BakeError> {
    let resolution = image.resolution;
    let expected = resolution * resolution;
    if image.texels.len() != expected {
        return Err(BakeError::ReadbackFailure {
            expected,
            actual: image.texels.len(),
        });
    }

    let extent = image.extent;
    let height = extent.height();
    let mut grid = HeightGrid::new(resolution);
    for x in 0..resolution {
        for y in 0..resolution {
            let texel = image.texels[x * resolution + y];
            if !texel.is_clear() {
                grid.set(x, y, extent.min + texel.r * height);
            }
        }
    }
    Ok(grid)
}
