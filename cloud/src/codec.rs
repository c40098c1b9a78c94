use glam::{vec2, vec3};
use crate::error::{DecodeError, Result};
use crate::point::Point;
use crate::point_cloud::PointCloud;

/// x, y, r, g, b
pub const FLOATS_PER_POINT: usize = 5;

const FLOAT_SIZE: usize = size_of::<f32>();
const POINT_SIZE: usize = FLOATS_PER_POINT * FLOAT_SIZE;

/// Decode a response body of packed little-endian `f32` into a point cloud.
///
/// Trailing bytes that don't make up a whole float are ignored. The float
/// count must be a nonzero multiple of [`FLOATS_PER_POINT`].
pub fn decode(bytes: &[u8]) -> Result<PointCloud> {
    let float_count = bytes.len() / FLOAT_SIZE;
    if float_count == 0 || float_count % FLOATS_PER_POINT != 0 {
        return Err(DecodeError::InvalidFloatCount(float_count));
    }

    let usable = &bytes[..float_count * FLOAT_SIZE];
    let points = usable
        .chunks_exact(POINT_SIZE)
        .map(|chunk| {
            let mut values = [0.0f32; FLOATS_PER_POINT];
            for (value, raw) in values.iter_mut().zip(chunk.chunks_exact(FLOAT_SIZE)) {
                *value = f32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]);
            }
            let [x, y, r, g, b] = values;
            // Point::new clamps each component.
            Point::new(vec2(x, y), vec3(r, g, b))
        })
        .collect();

    Ok(PointCloud::new(points))
}

/// Write points in the same layout [`decode`] reads.
pub fn encode(points: &[Point]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(points.len() * POINT_SIZE);
    for point in points {
        let pos = point.pos();
        let color = point.color();
        for value in [pos.x, pos.y, color.x, color.y, color.z] {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
    }
    bytes
}

/// Clamp to [0, 1]. NaN maps to 0.
pub fn clamp01(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use glam::{uvec2, Vec2, Vec3};
    use rand::rngs::StdRng;
    use rand::{Rng, RngCore, SeedableRng};
    use super::*;

    fn floats_to_bytes(values: &[f32]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    #[test]
    fn test_single_point() {
        let bytes = floats_to_bytes(&[0.5, 0.5, 1.0, 0.0, 0.0]);
        assert_eq!(bytes.len(), 20);

        let cloud = decode(&bytes).unwrap();
        assert_eq!(cloud.len(), 1);
        assert_eq!(cloud.resolution(), uvec2(1, 1));

        let point = cloud.points()[0];
        assert_eq!(point.pos(), Vec2::new(0.5, 0.5));
        assert_eq!(point.color(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(point.rgba().w, 1.0);
    }

    #[test]
    fn test_keeps_wire_order() {
        let bytes = floats_to_bytes(&[
            0.1, 0.2, 0.3, 0.4, 0.5,
            0.6, 0.7, 0.8, 0.9, 1.0,
        ]);
        let cloud = decode(&bytes).unwrap();
        assert_eq!(cloud.points()[0].pos(), Vec2::new(0.1, 0.2));
        assert_eq!(cloud.points()[1].pos(), Vec2::new(0.6, 0.7));
        assert_eq!(cloud.points()[1].color(), Vec3::new(0.8, 0.9, 1.0));
    }

    #[test]
    fn test_rejects_empty_buffer() {
        assert_eq!(decode(&[]), Err(DecodeError::InvalidFloatCount(0)));
        assert_eq!(decode(&[1, 2, 3]), Err(DecodeError::InvalidFloatCount(0)));
    }

    #[test]
    fn test_rejects_18_bytes() {
        // 18 / 4 = 4 floats, not a whole point.
        assert_eq!(decode(&[0u8; 18]), Err(DecodeError::InvalidFloatCount(4)));
    }

    #[test]
    fn test_drops_trailing_bytes() {
        let mut bytes = floats_to_bytes(&[0.25, 0.75, 0.0, 0.5, 1.0]);
        bytes.extend_from_slice(&[0xff, 0xff, 0xff]);
        let cloud = decode(&bytes).unwrap();
        assert_eq!(cloud.len(), 1);
        assert_eq!(cloud.points()[0].pos(), Vec2::new(0.25, 0.75));
    }

    #[test]
    fn test_clamps_out_of_range() {
        let bytes = floats_to_bytes(&[
            -0.5, 1.5, f32::NAN, f32::INFINITY, f32::NEG_INFINITY,
        ]);
        let point = decode(&bytes).unwrap().points()[0];
        assert_eq!(point.pos(), Vec2::new(0.0, 1.0));
        assert_eq!(point.color(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(-0.0), 0.0);
        assert_eq!(clamp01(0.3), 0.3);
        assert_eq!(clamp01(2.0), 1.0);
        assert_eq!(clamp01(f32::NAN), 0.0);
        assert_eq!(clamp01(-f32::NAN), 0.0);
    }

    #[test]
    fn test_random_buffers() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let len = rng.random_range(0..256);
            let mut bytes = vec![0u8; len];
            rng.fill_bytes(&mut bytes);

            let float_count = len / 4;
            match decode(&bytes) {
                Ok(cloud) => {
                    assert!(float_count > 0 && float_count % FLOATS_PER_POINT == 0);
                    assert_eq!(cloud.len(), float_count / FLOATS_PER_POINT);
                    for point in cloud.points() {
                        let values = [point.pos().x, point.pos().y, point.color().x, point.color().y, point.color().z];
                        assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
                    }
                    // Same bytes, same cloud.
                    assert_eq!(decode(&bytes).unwrap(), cloud);
                }
                Err(DecodeError::InvalidFloatCount(count)) => {
                    assert_eq!(count, float_count);
                    assert!(count == 0 || count % FLOATS_PER_POINT != 0);
                }
            }
        }
    }

    #[test]
    fn test_encode_matches_decode() {
        let points = vec![
            Point::new(Vec2::new(0.0, 1.0), Vec3::new(0.2, 0.4, 0.6)),
            Point::new(Vec2::new(0.5, 0.5), Vec3::new(1.0, 0.0, 0.0)),
        ];
        let bytes = encode(&points);
        assert_eq!(bytes.len(), 40);
        assert_eq!(decode(&bytes).unwrap().into_points(), points);
    }
}
