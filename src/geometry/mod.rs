pub mod sdf;
pub mod transform;

pub use transform::{compose, Affine2, AffineTransform, SCALE_EPSILON};
