//! GPU-facing packing of a parameter snapshot.

use bytemuck::{Pod, Zeroable};

use crate::state::ParameterSnapshot;

/// Uniform block consumed by `CLOUD_WGSL`. Every member is a `vec4<f32>` so
/// the Rust and WGSL layouts line up without padding.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct CloudUniforms {
    /// opacity, volume, fade, growth
    pub cloud: [f32; 4],
    /// speed, elapsed seconds, seed, segments
    pub motion: [f32; 4],
    /// gray tint rgb, unused
    pub tint: [f32; 4],
    /// bounds x, y, z, viewport aspect
    pub bounds: [f32; 4],
    /// sky inclination, sky azimuth, unused, unused
    pub sky: [f32; 4],
}

impl CloudUniforms {
    pub fn from_snapshot(s: &ParameterSnapshot, elapsed_sec: f32, aspect: f32) -> Self {
        Self {
            cloud: [s.opacity, s.volume, s.fade, s.growth],
            motion: [s.speed, elapsed_sec, s.seed, s.segments],
            tint: s.color.to_rgb().extend(1.0).to_array(),
            bounds: s.bounds.extend(aspect).to_array(),
            sky: [s.sky_inclination, s.sky_azimuth, 0.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::GrayColor;

    #[test]
    fn layout_is_five_vec4s() {
        assert_eq!(std::mem::size_of::<CloudUniforms>(), 80);
    }

    #[test]
    fn packs_snapshot_fields_in_shader_order() {
        let snap = ParameterSnapshot {
            color: GrayColor(0),
            ..ParameterSnapshot::default()
        };
        let u = CloudUniforms::from_snapshot(&snap, 2.5, 1.5);
        assert_eq!(u.cloud, [0.8, 6.0, 10.0, 4.0]);
        assert_eq!(u.motion, [0.1, 2.5, 1.0, 25.0]);
        assert_eq!(u.tint, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(u.bounds, [5.0, 1.0, 5.0, 1.5]);
        assert_eq!(u.sky[..2], [0.6, 0.78]);
        assert_eq!(bytemuck::bytes_of(&u).len(), 80);
    }
}
