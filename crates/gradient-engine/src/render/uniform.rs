//! Fixed-size packing of a descriptor for GPU backends.

use bytemuck::{Pod, Zeroable};

use crate::geometry::{Extend, Geometry, GradientKind};

use super::GradientDescriptor;

/// Maximum number of stops a [`GradientUniform`] carries.
pub const MAX_UNIFORM_STOPS: usize = 8;

pub const EXTEND_BEFORE_START: u32 = 1 << 0;
pub const EXTEND_AFTER_END: u32 = 1 << 1;

/// `#[repr(C)]` gradient block, laid out in 16-byte rows for uniform buffers.
///
/// - `kind`: `0` linear, `1` radial
/// - `p0`/`p1`: start/end point (linear) or start/end center (radial)
/// - `radii`: start/end radius, zero for linear
/// - `offsets`: stop positions, four per row
/// - `colors`: straight-alpha RGBA per stop
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GradientUniform {
    pub kind: u32,
    pub extend: u32,
    pub stop_count: u32,
    pub _pad0: u32,
    pub p0: [f32; 2],
    pub p1: [f32; 2],
    pub radii: [f32; 2],
    pub _pad1: [f32; 2],
    pub offsets: [[f32; 4]; MAX_UNIFORM_STOPS / 4],
    pub colors: [[f32; 4]; MAX_UNIFORM_STOPS],
}

impl GradientUniform {
    /// Packs `descriptor`.
    ///
    /// Ramps longer than [`MAX_UNIFORM_STOPS`] keep their first `MAX_UNIFORM_STOPS - 1`
    /// stops plus the last one, so the end color is never lost. The truncation is
    /// logged once per `warned_truncated` flag.
    pub fn from_descriptor(descriptor: &GradientDescriptor, warned_truncated: &mut bool) -> Self {
        let mut u = Self::zeroed();

        u.kind = match descriptor.kind() {
            GradientKind::Linear => 0,
            GradientKind::Radial => 1,
        };
        u.extend = extend_bits(descriptor.extend);

        match descriptor.geometry {
            Geometry::Linear { start, end } => {
                u.p0 = start.to_array();
                u.p1 = end.to_array();
            }
            Geometry::Radial { start, end } => {
                u.p0 = start.center.to_array();
                u.p1 = end.center.to_array();
                u.radii = [start.radius, end.radius];
            }
        }

        let stops = descriptor.ramp.stops();
        if stops.len() > MAX_UNIFORM_STOPS && !*warned_truncated {
            log::debug!(
                "gradient has {} stops; uniform keeps {}",
                stops.len(),
                MAX_UNIFORM_STOPS
            );
            *warned_truncated = true;
        }

        let kept = stops
            .iter()
            .take(MAX_UNIFORM_STOPS - 1)
            .chain(stops.last().filter(|_| stops.len() >= MAX_UNIFORM_STOPS));

        for (slot, stop) in kept.enumerate() {
            u.offsets[slot / 4][slot % 4] = stop.t;
            u.colors[slot] = stop.color.to_array();
            u.stop_count += 1;
        }

        u
    }
}

fn extend_bits(extend: Extend) -> u32 {
    let mut bits = 0;
    if extend.before_start {
        bits |= EXTEND_BEFORE_START;
    }
    if extend.after_end {
        bits |= EXTEND_AFTER_END;
    }
    bits
}
