//! Entity kinds and their static profiles
//!
//! Every concrete kind maps to exactly one [`Classification`]. Collision and
//! spawning only ever look at the classification; the kind decides size,
//! animation and how much a refill restores.

use serde::{Deserialize, Serialize};

/// Coarse behavioral category that decides the collision effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Floating debris: +1 score when collected
    Collectible,
    /// Restores the energy resource
    Refill,
    /// Sea creature: costs a life on contact
    Hazard,
}

/// Concrete entity identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    // Debris
    Bottle,
    Bottle2,
    Bottle3,
    Can,
    Can2,
    Tire,
    YellowBag,
    GreenBag,
    Bag,
    CoffeeCup,
    CoffeeCup2,
    PlasticScrap,
    GlassShard,
    // Refills
    Water,
    OxygenTank,
    // Sea creatures
    Fish,
    BlueFish,
    RedFish,
    Lanternfish,
    Ray,
    Turtle,
    Whale,
    Dolphin,
    Seahorse,
    Octopus,
}

/// Random speed change applied to some fast swimmers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedJitter {
    /// Chance per tick of a speed change
    pub chance: f64,
    /// Full width of the uniform change (centered on zero)
    pub spread: f32,
    pub min_speed: f32,
    pub max_speed: f32,
}

/// Secondary motion layered on top of the horizontal scroll
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationProfile {
    /// Swimming: sinusoidal bob on both axes plus a gentle roll
    Drift {
        osc_speed: f32,
        osc_amp: f32,
        rot_speed: f32,
        rot_amp: f32,
        jitter: Option<SpeedJitter>,
    },
    /// Floating debris: rotation only
    Tumble { rot_speed: f32, rot_amp: f32 },
}

/// Static per-kind data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindProfile {
    pub classification: Classification,
    /// Side length range of the square collision box
    pub size_min: f32,
    pub size_max: f32,
    pub animation: AnimationProfile,
    /// Resource restored on pickup (refills only)
    pub refill_amount: f32,
    /// Relative weight in the spawn distribution
    pub spawn_weight: u32,
}

/// Size range used when a kind identifier is not recognized
pub const DEFAULT_SIZE_RANGE: (f32, f32) = (24.0, 42.0);

const DEBRIS_WEIGHT: u32 = 2;
const CREATURE_WEIGHT: u32 = 1;
const REFILL_WEIGHT: u32 = 6;

const TUMBLE: AnimationProfile = AnimationProfile::Tumble {
    rot_speed: 0.002,
    rot_amp: 0.12,
};
const TUMBLE_HEAVY: AnimationProfile = AnimationProfile::Tumble {
    rot_speed: 0.001,
    rot_amp: 0.08,
};
const DRIFT: AnimationProfile = AnimationProfile::Drift {
    osc_speed: 0.004,
    osc_amp: 0.7,
    rot_speed: 0.003,
    rot_amp: 0.18,
    jitter: None,
};
const DRIFT_SLOW: AnimationProfile = AnimationProfile::Drift {
    osc_speed: 0.002,
    osc_amp: 1.2,
    rot_speed: 0.003,
    rot_amp: 0.22,
    jitter: None,
};
const DRIFT_DARTING: AnimationProfile = AnimationProfile::Drift {
    osc_speed: 0.006,
    osc_amp: 0.5,
    rot_speed: 0.003,
    rot_amp: 0.13,
    jitter: Some(SpeedJitter {
        chance: 0.01,
        spread: 0.8,
        min_speed: 1.2,
        max_speed: 4.5,
    }),
};

const fn debris(size_min: f32, size_max: f32, animation: AnimationProfile) -> KindProfile {
    KindProfile {
        classification: Classification::Collectible,
        size_min,
        size_max,
        animation,
        refill_amount: 0.0,
        spawn_weight: DEBRIS_WEIGHT,
    }
}

const fn refill(size_min: f32, size_max: f32, amount: f32) -> KindProfile {
    KindProfile {
        classification: Classification::Refill,
        size_min,
        size_max,
        animation: TUMBLE,
        refill_amount: amount,
        spawn_weight: REFILL_WEIGHT,
    }
}

const fn creature(size_min: f32, size_max: f32, animation: AnimationProfile) -> KindProfile {
    KindProfile {
        classification: Classification::Hazard,
        size_min,
        size_max,
        animation,
        refill_amount: 0.0,
        spawn_weight: CREATURE_WEIGHT,
    }
}

impl EntityKind {
    /// Every spawnable kind, in declaration order
    pub const ALL: [EntityKind; 25] = [
        EntityKind::Bottle,
        EntityKind::Bottle2,
        EntityKind::Bottle3,
        EntityKind::Can,
        EntityKind::Can2,
        EntityKind::Tire,
        EntityKind::YellowBag,
        EntityKind::GreenBag,
        EntityKind::Bag,
        EntityKind::CoffeeCup,
        EntityKind::CoffeeCup2,
        EntityKind::PlasticScrap,
        EntityKind::GlassShard,
        EntityKind::Water,
        EntityKind::OxygenTank,
        EntityKind::Fish,
        EntityKind::BlueFish,
        EntityKind::RedFish,
        EntityKind::Lanternfish,
        EntityKind::Ray,
        EntityKind::Turtle,
        EntityKind::Whale,
        EntityKind::Dolphin,
        EntityKind::Seahorse,
        EntityKind::Octopus,
    ];

    /// Static profile lookup
    pub const fn profile(self) -> KindProfile {
        use EntityKind::*;
        match self {
            Bottle | Bottle2 | Bottle3 => debris(24.0, 42.0, TUMBLE),
            Can | Can2 => debris(22.0, 34.0, TUMBLE_HEAVY),
            Tire => debris(36.0, 52.0, TUMBLE_HEAVY),
            YellowBag | GreenBag | Bag => debris(30.0, 46.0, TUMBLE),
            CoffeeCup | CoffeeCup2 => debris(22.0, 32.0, TUMBLE),
            PlasticScrap | GlassShard => debris(20.0, 30.0, TUMBLE),
            Water => refill(28.0, 38.0, 30.0),
            OxygenTank => refill(30.0, 40.0, 20.0),
            Fish | BlueFish | RedFish | Lanternfish => creature(22.0, 34.0, DRIFT_DARTING),
            Ray | Turtle => creature(48.0, 72.0, DRIFT_SLOW),
            Whale => creature(90.0, 130.0, DRIFT),
            Dolphin => creature(60.0, 84.0, DRIFT),
            Seahorse => creature(20.0, 30.0, DRIFT),
            Octopus => creature(40.0, 58.0, DRIFT),
        }
    }

    #[inline]
    pub const fn classification(self) -> Classification {
        self.profile().classification
    }

    /// Stable identifier used by asset manifests
    pub const fn id(self) -> &'static str {
        use EntityKind::*;
        match self {
            Bottle => "bottle",
            Bottle2 => "bouteille2",
            Bottle3 => "bouteille3",
            Can => "can",
            Can2 => "canette2",
            Tire => "pneus",
            YellowBag => "sacJaune",
            GreenBag => "sacVert",
            Bag => "bag",
            CoffeeCup => "tasseCafe",
            CoffeeCup2 => "tasseCafe2",
            PlasticScrap => "boutPlastique",
            GlassShard => "boutBouteilleVerre",
            Water => "water",
            OxygenTank => "oxygen",
            Fish => "poisson",
            BlueFish => "poissonBleu",
            RedFish => "poissonRouge",
            Lanternfish => "poissonLumiere",
            Ray => "raie",
            Turtle => "tortue",
            Whale => "baleine",
            Dolphin => "dauphin",
            Seahorse => "hypocampe",
            Octopus => "pieuvre",
        }
    }

    /// Parse a manifest identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// Kinds with the given classification
    pub fn with_classification(class: Classification) -> impl Iterator<Item = EntityKind> {
        Self::ALL
            .into_iter()
            .filter(move |kind| kind.classification() == class)
    }
}

/// Size range for a raw kind identifier, falling back to the default range.
///
/// For host-side data keyed by string id. Spawning works on [`EntityKind`]
/// directly and never needs the fallback.
pub fn size_range_for_id(id: &str) -> (f32, f32) {
    match EntityKind::from_id(id) {
        Some(kind) => {
            let profile = kind.profile();
            (profile.size_min, profile.size_max)
        }
        None => {
            log::warn!("Unknown entity kind `{id}`, using default size range");
            DEFAULT_SIZE_RANGE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_and_are_unique() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_id(kind.id()), Some(kind));
        }
        let mut ids: Vec<_> = EntityKind::ALL.iter().map(|k| k.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), EntityKind::ALL.len());
    }

    #[test]
    fn test_classification_partition() {
        let count = |c| EntityKind::with_classification(c).count();
        assert_eq!(count(Classification::Collectible), 13);
        assert_eq!(count(Classification::Refill), 2);
        assert_eq!(count(Classification::Hazard), 10);
    }

    #[test]
    fn test_refill_amounts_in_band() {
        for kind in EntityKind::with_classification(Classification::Refill) {
            let amount = kind.profile().refill_amount;
            assert!((20.0..=30.0).contains(&amount), "{kind:?} restores {amount}");
        }
        assert_eq!(EntityKind::Water.profile().refill_amount, 30.0);
    }

    #[test]
    fn test_refills_overweighted() {
        let refill = EntityKind::Water.profile().spawn_weight;
        for kind in EntityKind::ALL {
            if kind.classification() != Classification::Refill {
                assert!(kind.profile().spawn_weight < refill);
            }
        }
    }

    #[test]
    fn test_size_ranges_valid() {
        for kind in EntityKind::ALL {
            let p = kind.profile();
            assert!(p.size_min > 0.0 && p.size_min <= p.size_max, "{kind:?}");
        }
    }

    #[test]
    fn test_unknown_id_falls_back() {
        assert_eq!(EntityKind::from_id("kraken"), None);
        assert_eq!(size_range_for_id("kraken"), DEFAULT_SIZE_RANGE);
        assert_eq!(size_range_for_id("baleine"), (90.0, 130.0));
    }
}
