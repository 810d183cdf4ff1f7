//! Effect shapes stamped at a chosen cell.

use crate::descriptor::{EffectKind, EffectShapeSpec};
use crate::offset_set::OffsetSet;
use crate::primitive::{annulus, centered_rect, cross, disc, wedge, Wedge};
use tactica_core::Facing;

/// Offsets an effect covers relative to the chosen cell.
///
/// Only `Cone` depends on `facing`; its first row sits one cell past the
/// chosen cell. `Rect` is never rotated.
pub fn effect_offsets(effect: &EffectShapeSpec, facing: Facing) -> OffsetSet {
    match effect.kind {
        EffectKind::Cell => OffsetSet::origin(),
        EffectKind::Cross => cross(effect.primary),
        EffectKind::Rect => centered_rect(effect.primary, effect.secondary),
        EffectKind::Cone => wedge(Wedge::Cone, effect.primary, 0).rotated(facing),
        EffectKind::Circle => disc(effect.primary),
        EffectKind::Ring => annulus(effect.primary, effect.secondary),
    }
}
