//! Resolution of aim descriptors into concrete region algorithms.

use crate::descriptor::{AimKind, AimShapeSpec, EffectKind, EffectShapeSpec};
use crate::offset_set::OffsetSet;
use crate::primitive::{body_aura, body_cross, face_projection, AuraMetric, Wedge};
use tactica_core::{Facing, Footprint};

/// A targeting region with its algorithm chosen and sizes resolved.
///
/// Produced by [`AimRegion::resolve`] from an aim/effect descriptor pair;
/// turned into offsets relative to the caster's anchor by
/// [`AimRegion::offsets`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AimRegion {
    /// Body cells plus straight arms off each side.
    BodyCross {
        /// Arm length.
        len: i32,
    },
    /// Cells within a distance band of the body.
    BodyAura {
        /// Outer bound, inclusive.
        range: i32,
        /// Inner bound, inclusive.
        min_range: i32,
        /// Distance measure.
        metric: AuraMetric,
        /// Drop cells behind the caster.
        half_ring: bool,
    },
    /// A wedge stamped from the leading edge.
    FaceProjection {
        /// Local wedge shape.
        wedge: Wedge,
        /// Rows ahead of the edge.
        length: i32,
        /// Requested row width before frontage correction.
        width: i32,
        /// Cells skipped before the first row.
        offset: i32,
    },
}

impl AimRegion {
    /// Pick the algorithm for an aim descriptor.
    ///
    /// `UnitPoint` and `FacePoint` take their sizes from the effect shape;
    /// every other kind uses the aim's own sizes.
    pub fn resolve(aim: &AimShapeSpec, effect: &EffectShapeSpec) -> Self {
        match aim.kind {
            AimKind::UnitPoint if effect.kind == EffectKind::Cross => {
                AimRegion::BodyCross { len: effect.primary }
            }
            AimKind::UnitPoint => AimRegion::BodyAura {
                range: effect.primary,
                min_range: 0,
                metric: AuraMetric::Chebyshev,
                half_ring: false,
            },
            AimKind::FacePoint => {
                let (wedge, length, width) = match effect.kind {
                    EffectKind::Cone => (Wedge::Cone, effect.primary, effect.secondary),
                    EffectKind::Cell => (Wedge::Rect, 1, 1),
                    _ => (Wedge::Rect, effect.primary, effect.secondary),
                };
                AimRegion::FaceProjection {
                    wedge,
                    length,
                    width,
                    offset: 0,
                }
            }
            AimKind::Rect | AimKind::Cone => AimRegion::FaceProjection {
                wedge: if aim.kind == AimKind::Cone {
                    Wedge::Cone
                } else {
                    Wedge::Rect
                },
                length: aim.primary,
                width: aim.secondary,
                offset: aim.min_range,
            },
            AimKind::Ring | AimKind::HalfRing => AimRegion::BodyAura {
                range: aim.primary,
                min_range: aim.secondary,
                metric: AuraMetric::Chebyshev,
                half_ring: aim.kind == AimKind::HalfRing,
            },
            AimKind::Radius => AimRegion::BodyAura {
                range: aim.primary,
                min_range: 0,
                metric: AuraMetric::Euclidean,
                half_ring: false,
            },
        }
    }

    /// Offsets relative to the caster's anchor.
    pub fn offsets(&self, fp: Footprint, facing: Facing) -> OffsetSet {
        match *self {
            AimRegion::BodyCross { len } => body_cross(fp, len),
            AimRegion::BodyAura {
                range,
                min_range,
                metric,
                half_ring,
            } => body_aura(fp, range, min_range, metric, half_ring.then_some(facing)),
            AimRegion::FaceProjection {
                wedge,
                length,
                width,
                offset,
            } => face_projection(fp, facing, wedge, length, width, offset),
        }
    }
}

/// Shorthand for `AimRegion::resolve(aim, effect).offsets(fp, facing)`.
pub fn aim_offsets(
    aim: &AimShapeSpec,
    effect: &EffectShapeSpec,
    fp: Footprint,
    facing: Facing,
) -> OffsetSet {
    AimRegion::resolve(aim, effect).offsets(fp, facing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactica_core::GridPos;

    fn p(x: i32, y: i32) -> GridPos {
        GridPos::new(x, y)
    }

    #[test]
    fn unit_point_with_cross_uses_body_cross() {
        let aim = AimShapeSpec::new(AimKind::UnitPoint, 0, 0, 0);
        let effect = EffectShapeSpec::new(EffectKind::Cross, 2, 0);
        assert_eq!(AimRegion::resolve(&aim, &effect), AimRegion::BodyCross { len: 2 });
        let s = aim_offsets(&aim, &effect, Footprint::UNIT, Facing::PosY);
        assert_eq!(s.len(), 9);
    }

    #[test]
    fn unit_point_otherwise_is_square_aura_of_effect_size() {
        let aim = AimShapeSpec::new(AimKind::UnitPoint, 9, 9, 9);
        let effect = EffectShapeSpec::new(EffectKind::Circle, 1, 0);
        let s = aim_offsets(&aim, &effect, Footprint::UNIT, Facing::PosY);
        assert_eq!(s.len(), 9);
    }

    #[test]
    fn face_point_cell_is_one_ahead() {
        let aim = AimShapeSpec::new(AimKind::FacePoint, 0, 0, 0);
        let s = aim_offsets(&aim, &EffectShapeSpec::cell(), Footprint::UNIT, Facing::NegX);
        assert_eq!(s.to_sorted_vec(), vec![p(-1, 0)]);
    }

    #[test]
    fn cone_aim_uses_min_range_offset() {
        let aim = AimShapeSpec::new(AimKind::Cone, 2, 0, 1);
        let s = aim_offsets(&aim, &EffectShapeSpec::cell(), Footprint::UNIT, Facing::PosY);
        assert_eq!(s.to_sorted_vec(), vec![p(-1, 3), p(0, 2), p(0, 3), p(1, 3)]);
    }

    #[test]
    fn ring_uses_secondary_as_inner_bound() {
        let aim = AimShapeSpec::new(AimKind::Ring, 2, 2, 0);
        let s = aim_offsets(&aim, &EffectShapeSpec::cell(), Footprint::UNIT, Facing::PosY);
        // 5x5 block minus the inner 3x3.
        assert_eq!(s.len(), 16);
        assert!(!s.contains(p(1, 1)));
    }

    #[test]
    fn half_ring_follows_facing() {
        let aim = AimShapeSpec::new(AimKind::HalfRing, 1, 1, 0);
        let s = aim_offsets(&aim, &EffectShapeSpec::cell(), Footprint::UNIT, Facing::PosX);
        assert_eq!(s.len(), 5);
        assert!(s.iter().all(|q| q.x >= 0));
    }

    #[test]
    fn radius_is_round_and_distinct_from_unit_point() {
        let aim = AimShapeSpec::new(AimKind::Radius, 2, 0, 0);
        let s = aim_offsets(&aim, &EffectShapeSpec::cell(), Footprint::UNIT, Facing::PosY);
        assert_eq!(s.len(), 13);
        assert!(!s.contains(p(2, 2)));
    }

    #[test]
    fn rect_aim_with_zero_length_is_empty() {
        let aim = AimShapeSpec::new(AimKind::Rect, 0, 3, 0);
        let s = aim_offsets(&aim, &EffectShapeSpec::cell(), Footprint::new(2, 2), Facing::PosY);
        assert!(s.is_empty());
    }
}
