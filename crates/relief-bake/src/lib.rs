//! Height baking: encode merged-mesh heights into a per-vertex channel,
//! rasterize the mesh from a top-down orthographic camera into an
//! off-screen texel buffer, and decode the buffer back into an absolute
//! height grid.
//!
//! The render-to-texture step of the original engine pipeline is realized
//! here as a software rasterizer (edge-function triangle fill with a
//! highest-surface-wins height test), so no GPU is required.

mod camera;
mod capture;
mod decode;
mod encode;
mod grid;
mod raster;
mod texel;

pub use camera::{DEFAULT_CAMERA_MARGIN, OverheadCamera};
pub use capture::{BakeError, CaptureImage, OverheadRenderer};
pub use decode::decode_heights;
pub use encode::encode_heights;
pub use grid::HeightGrid;
pub use texel::Texel;
