//! Vertical occupancy layers.

/// One of the three stacked occupancy planes of a cell.
///
/// A cell can hold one footprint-owning unit per layer, so a flyer can hover
/// over a ground unit that stands above a burrower.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layer {
    /// Surface level; the default for spawned units.
    #[default]
    Ground,
    /// Airborne units.
    Sky,
    /// Burrowed units.
    Underground,
}

impl Layer {
    /// Every layer, in slot order.
    pub const ALL: [Layer; 3] = [Layer::Ground, Layer::Sky, Layer::Underground];

    /// Slot index of this layer inside a per-cell occupant array.
    pub const fn index(self) -> usize {
        match self {
            Layer::Ground => 0,
            Layer::Sky => 1,
            Layer::Underground => 2,
        }
    }
}

/// World-space height of each layer, in the same units as cell spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerElevations {
    /// Elevation of [`Layer::Ground`].
    pub ground: f32,
    /// Elevation of [`Layer::Sky`].
    pub sky: f32,
    /// Elevation of [`Layer::Underground`].
    pub underground: f32,
}

impl LayerElevations {
    /// Elevation for `layer`.
    pub fn of(&self, layer: Layer) -> f32 {
        match layer {
            Layer::Ground => self.ground,
            Layer::Sky => self.sky,
            Layer::Underground => self.underground,
        }
    }

    /// `true` if every elevation is a finite number.
    pub fn is_finite(&self) -> bool {
        self.ground.is_finite() && self.sky.is_finite() && self.underground.is_finite()
    }
}

impl Default for LayerElevations {
    fn default() -> Self {
        Self {
            ground: 0.0,
            sky: 2.0,
            underground: -1.0,
        }
    }
}
