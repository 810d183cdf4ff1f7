//! Authored shape descriptors.
//!
//! These mirror the per-ability data rows: a kind plus two integer sizes.
//! Sizes are signed so that malformed rows degrade to empty shapes instead
//! of failing to load.

use tactica_core::Layer;

/// Largest size any generator iterates over.
///
/// Larger authored sizes are capped here, which keeps every loop bound and
/// squared distance in range. Callers that know the board should clamp
/// tighter with [`AimShapeSpec::clamped`] and [`EffectShapeSpec::clamped`].
pub const MAX_SHAPE_SIZE: i32 = 1 << 17;

/// How the legal targeting region is derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AimKind {
    /// Aura around the caster's own footprint.
    UnitPoint,
    /// The effect shape projected from the caster's leading edge.
    FacePoint,
    /// A rectangle ahead of the caster.
    Rect,
    /// A widening wedge ahead of the caster.
    Cone,
    /// A circular aura.
    Radius,
    /// A square band between two ranges.
    Ring,
    /// [`AimKind::Ring`] with the cells behind the caster removed.
    HalfRing,
}

impl AimKind {
    /// `true` if the effect stays attached to the caster rather than
    /// following the hovered cell.
    pub fn is_body_relative(self) -> bool {
        matches!(self, AimKind::UnitPoint | AimKind::FacePoint)
    }

    /// `true` if a chosen target only ever affects the single chosen cell.
    pub fn picks_single_cell(self) -> bool {
        matches!(self, AimKind::Ring | AimKind::HalfRing)
    }
}

/// What a chosen target affects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    /// Just the chosen cell.
    Cell,
    /// A wedge oriented by the caster's facing.
    Cone,
    /// A rectangle centred on the chosen cell.
    Rect,
    /// A plus sign centred on the chosen cell.
    Cross,
    /// A filled Euclidean disc.
    Circle,
    /// A filled Euclidean annulus.
    Ring,
}

/// Which occupancy layers an effect touches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalReach {
    /// Ground only.
    #[default]
    Ground,
    /// Sky only.
    Sky,
    /// Underground only.
    Underground,
    /// Sky and ground.
    SkyGround,
    /// Ground and underground.
    AllGround,
    /// Every layer.
    All,
}

impl VerticalReach {
    /// The layers this reach covers.
    pub fn layers(self) -> &'static [Layer] {
        match self {
            VerticalReach::Ground => &[Layer::Ground],
            VerticalReach::Sky => &[Layer::Sky],
            VerticalReach::Underground => &[Layer::Underground],
            VerticalReach::SkyGround => &[Layer::Sky, Layer::Ground],
            VerticalReach::AllGround => &[Layer::Ground, Layer::Underground],
            VerticalReach::All => &Layer::ALL,
        }
    }

    /// Membership test.
    pub fn covers(self, layer: Layer) -> bool {
        self.layers().contains(&layer)
    }
}

/// Descriptor for the targeting region of an ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AimShapeSpec {
    /// Which algorithm produces the region.
    pub kind: AimKind,
    /// Length, or outer range.
    pub primary: i32,
    /// Width, or inner range.
    pub secondary: i32,
    /// Distance the region is pushed ahead of the caster before it starts.
    pub min_range: i32,
}

impl AimShapeSpec {
    /// Construct a descriptor.
    pub const fn new(kind: AimKind, primary: i32, secondary: i32, min_range: i32) -> Self {
        Self {
            kind,
            primary,
            secondary,
            min_range,
        }
    }

    /// Sizes capped at `limit`. Negative sizes are kept so they still
    /// resolve to empty regions.
    pub fn clamped(self, limit: i32) -> Self {
        let limit = limit.clamp(0, MAX_SHAPE_SIZE);
        Self {
            primary: self.primary.min(limit),
            secondary: self.secondary.min(limit),
            min_range: self.min_range.min(limit),
            ..self
        }
    }
}

/// Descriptor for the affected area of an ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectShapeSpec {
    /// Which shape is stamped.
    pub kind: EffectKind,
    /// Length, arm length, or outer radius.
    pub primary: i32,
    /// Width, or inner radius.
    pub secondary: i32,
    /// Layers whose occupants are affected.
    #[cfg_attr(feature = "serde", serde(default))]
    pub vertical: VerticalReach,
}

impl EffectShapeSpec {
    /// Construct a ground-level descriptor.
    pub const fn new(kind: EffectKind, primary: i32, secondary: i32) -> Self {
        Self {
            kind,
            primary,
            secondary,
            vertical: VerticalReach::Ground,
        }
    }

    /// The single-cell effect.
    pub const fn cell() -> Self {
        Self::new(EffectKind::Cell, 1, 0)
    }

    /// Same shape, different layers.
    pub const fn with_vertical(mut self, vertical: VerticalReach) -> Self {
        self.vertical = vertical;
        self
    }

    /// Sizes capped at `limit`; see [`AimShapeSpec::clamped`].
    pub fn clamped(self, limit: i32) -> Self {
        let limit = limit.clamp(0, MAX_SHAPE_SIZE);
        Self {
            primary: self.primary.min(limit),
            secondary: self.secondary.min(limit),
            ..self
        }
    }
}
