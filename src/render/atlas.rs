//! Kind to drawable lookup supplied by the host's asset loader
//!
//! The atlas may be partial or empty. Anything without a handle is drawn
//! with a primitive placeholder instead.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::sim::EntityKind;

/// Identifier of the player sprite in manifests
pub const PLAYER_ASSET_ID: &str = "player";

/// Opaque handle to a loaded image/texture, owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawableHandle(pub u32);

/// Asset id to image path, as shipped with the game
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetManifest {
    pub images: BTreeMap<String, String>,
}

impl AssetManifest {
    /// Image paths for the built-in art
    pub fn builtin() -> Self {
        let mut images = BTreeMap::new();
        let mut add = |id: &str, path: &str| {
            images.insert(id.to_string(), path.to_string());
        };
        add("bottle", "Images/Dechets/bouteille.png");
        add("bouteille2", "Images/Dechets/bouteille-2.png");
        add("bouteille3", "Images/Dechets/bouteille-3.png");
        add("can", "Images/Dechets/canette.png");
        add("canette2", "Images/Dechets/canette-2.png");
        add("pneus", "Images/Dechets/pneus.png");
        add("sacJaune", "Images/Dechets/sacPoubelle-jaune.png");
        add("sacVert", "Images/Dechets/sacPoubelle-vert.png");
        add("bag", "Images/Dechets/sacPoubelle-vert.png");
        add("tasseCafe", "Images/Dechets/tasse-cafe.png");
        add("tasseCafe2", "Images/Dechets/tasse-cafe-2.png");
        add("boutPlastique", "Images/Dechets/bout-plastique.png");
        add("boutBouteilleVerre", "Images/Dechets/bout-Bouteille-verre.png");
        add("water", "Images/Dechets/bouteille.png");
        add("oxygen", "Images/bouteille-oxygene.png");
        add("poisson", "Images/Animaux_marins/poisson.png");
        add("poissonBleu", "Images/Animaux_marins/poisson-bleu.png");
        add("poissonRouge", "Images/Animaux_marins/poisson-rouge.png");
        add("poissonLumiere", "Images/Animaux_marins/poisson-lumiere.png");
        add("raie", "Images/Animaux_marins/raie.png");
        add("tortue", "Images/Animaux_marins/tortue.png");
        add("baleine", "Images/Animaux_marins/baleine.png");
        add("dauphin", "Images/Animaux_marins/dauphin.png");
        add("hypocampe", "Images/Animaux_marins/hypocampe.png");
        add("pieuvre", "Images/Animaux_marins/pieuvre.png");
        add(PLAYER_ASSET_ID, "Images/sous-marin.png");
        Self { images }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Handles for every kind the host managed to load
#[derive(Debug, Clone, Default)]
pub struct Atlas {
    kinds: HashMap<EntityKind, DrawableHandle>,
    player: Option<DrawableHandle>,
}

impl Atlas {
    /// An atlas with no art at all; everything falls back to primitives
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from `(asset id, handle)` pairs. Unknown ids are skipped.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, DrawableHandle)>) -> Self {
        let mut atlas = Self::default();
        for (id, handle) in entries {
            if id == PLAYER_ASSET_ID {
                atlas.player = Some(handle);
            } else if let Some(kind) = EntityKind::from_id(id) {
                atlas.kinds.insert(kind, handle);
            } else {
                log::warn!("Ignoring asset `{id}`: not an entity kind");
            }
        }
        atlas
    }

    pub fn insert(&mut self, kind: EntityKind, handle: DrawableHandle) {
        self.kinds.insert(kind, handle);
    }

    pub fn set_player(&mut self, handle: DrawableHandle) {
        self.player = Some(handle);
    }

    pub fn get(&self, kind: EntityKind) -> Option<DrawableHandle> {
        self.kinds.get(&kind).copied()
    }

    pub fn player(&self) -> Option<DrawableHandle> {
        self.player
    }

    /// Kinds that will be drawn with a placeholder
    pub fn missing_kinds(&self) -> Vec<EntityKind> {
        EntityKind::ALL
            .into_iter()
            .filter(|kind| !self.kinds.contains_key(kind))
            .collect()
    }
}
