//! Shape offset generation for Tactica.
//!
//! Two families of shapes reduce to an [`OffsetSet`]:
//!
//! - **Aim regions** ([`AimRegion`]): where a target may be chosen, relative
//!   to the caster's anchor, footprint and facing.
//! - **Effect shapes** ([`effect_offsets`]): what a chosen target affects,
//!   relative to the chosen cell.
//!
//! Every generator is a pure function. Zero or negative sizes produce empty
//! sets rather than errors, and sizes past [`MAX_SHAPE_SIZE`] are capped.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod aim;
pub mod descriptor;
pub mod effect;
pub mod offset_set;
pub mod primitive;

pub use aim::{aim_offsets, AimRegion};
pub use descriptor::{
    AimKind, AimShapeSpec, EffectKind, EffectShapeSpec, VerticalReach, MAX_SHAPE_SIZE,
};
pub use effect::effect_offsets;
pub use offset_set::OffsetSet;
pub use primitive::{AuraMetric, Wedge};
