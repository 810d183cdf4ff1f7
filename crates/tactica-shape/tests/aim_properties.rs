//! Cross-kind properties of aim regions.

use proptest::prelude::*;
use tactica_core::{Facing, Footprint, GridPos};
use tactica_shape::primitive::is_behind;
use tactica_shape::{aim_offsets, AimKind, AimShapeSpec, EffectKind, EffectShapeSpec};

fn facing() -> impl Strategy<Value = Facing> {
    prop::sample::select(Facing::ALL.to_vec())
}

fn inside_body(p: GridPos, fp: Footprint) -> bool {
    (0..fp.width as i32).contains(&p.x) && (-(fp.height as i32 - 1)..=0).contains(&p.y)
}

proptest! {
    #[test]
    fn half_ring_is_subset_of_ring(
        w in 1u32..4, h in 1u32..4, outer in 0i32..5, inner in 0i32..3, f in facing(),
    ) {
        let fp = Footprint::new(w, h);
        let cell = EffectShapeSpec::cell();
        let ring = aim_offsets(&AimShapeSpec::new(AimKind::Ring, outer, inner, 0), &cell, fp, f);
        let half = aim_offsets(&AimShapeSpec::new(AimKind::HalfRing, outer, inner, 0), &cell, fp, f);
        for q in half.iter() {
            prop_assert!(ring.contains(q));
            prop_assert!(!is_behind(q, fp, f));
        }
        for q in ring.iter().filter(|&q| !half.contains(q)) {
            prop_assert!(is_behind(q, fp, f));
        }
    }

    #[test]
    fn projections_never_touch_the_body(
        w in 1u32..4, h in 1u32..4, len in 0i32..5, width in 0i32..5, f in facing(), cone in any::<bool>(),
    ) {
        let fp = Footprint::new(w, h);
        let kind = if cone { AimKind::Cone } else { AimKind::Rect };
        let s = aim_offsets(&AimShapeSpec::new(kind, len, width, 0), &EffectShapeSpec::cell(), fp, f);
        for q in s.iter() {
            prop_assert!(!inside_body(q, fp), "{} inside {:?}", q, fp);
        }
    }

    #[test]
    fn face_point_inherits_effect_cone(len in 1i32..5, f in facing()) {
        let aim = AimShapeSpec::new(AimKind::FacePoint, 0, 0, 0);
        let effect = EffectShapeSpec::new(EffectKind::Cone, len, 0);
        let s = aim_offsets(&aim, &effect, Footprint::UNIT, f);
        prop_assert_eq!(s.len() as i32, len * len);
        prop_assert!(s.contains(f.vector()));
    }
}
