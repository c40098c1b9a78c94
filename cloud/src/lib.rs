mod codec;
mod error;
mod point;
mod point_cloud;

pub use codec::{clamp01, decode, encode, FLOATS_PER_POINT};
pub use error::{DecodeError, Result};
pub use point::Point;
pub use point_cloud::PointCloud;
