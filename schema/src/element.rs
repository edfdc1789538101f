use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter)]
pub enum Element {
    Water,
    Fire,
    Wind,
    Earth,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Element {
    /// Fixed numeric weight applied to the base speed stat.
    pub fn speed_weight(self) -> f32 {
        match self {
            Element::Water => 1.3,
            Element::Fire => 1.2,
            Element::Wind => 1.4,
            Element::Earth => 1.1,
        }
    }

    /// Calculate the effectiveness multiplier for an attacking element
    /// against a defending element.
    ///
    /// Lookup rule: an ordered pair present in the table returns its
    /// multiplier; the reversed pair returns the reciprocal; every other
    /// pairing is neutral (1.0).
    pub fn effectiveness(attacking: Element, defending: Element) -> f32 {
        if let Some(multiplier) = Self::ordered_multiplier(attacking, defending) {
            multiplier
        } else if let Some(multiplier) = Self::ordered_multiplier(defending, attacking) {
            1.0 / multiplier
        } else {
            1.0
        }
    }

    // The ordered half of the table; the reversed half is derived in
    // `effectiveness`.
    fn ordered_multiplier(attacking: Element, defending: Element) -> Option<f32> {
        use Element::*;

        match (attacking, defending) {
            (Wind, Fire) => Some(1.2),
            (Wind, Water) => Some(1.5),
            (Wind, Earth) => Some(2.0),
            (Fire, Earth) => Some(1.5),
            (Water, Fire) => Some(0.75),
            (Water, Earth) => Some(1.2),
            _ => None,
        }
    }
}
