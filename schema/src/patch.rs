use crate::{BaseStats, SpeciesRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sparse stat corrections. Only the stats that are present are overwritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseStatsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hp: Option<u16>,
    #[serde(rename = "atk", skip_serializing_if = "Option::is_none")]
    pub attack: Option<u16>,
    #[serde(rename = "def", skip_serializing_if = "Option::is_none")]
    pub defense: Option<u16>,
    #[serde(rename = "spa", skip_serializing_if = "Option::is_none")]
    pub sp_attack: Option<u16>,
    #[serde(rename = "spd", skip_serializing_if = "Option::is_none")]
    pub sp_defense: Option<u16>,
    #[serde(rename = "spe", skip_serializing_if = "Option::is_none")]
    pub speed: Option<u16>,
}

impl BaseStats {
    /// Returns a copy with every stat present in `patch` overwritten.
    pub fn merged(&self, patch: &BaseStatsPatch) -> BaseStats {
        BaseStats {
            hp: patch.hp.unwrap_or(self.hp),
            attack: patch.attack.unwrap_or(self.attack),
            defense: patch.defense.unwrap_or(self.defense),
            sp_attack: patch.sp_attack.unwrap_or(self.sp_attack),
            sp_defense: patch.sp_defense.unwrap_or(self.sp_defense),
            speed: patch.speed.unwrap_or(self.speed),
        }
    }
}

/// A partial [`SpeciesRecord`] read from a per-generation patch file.
///
/// `dexNo` is deliberately absent: it is the key the patch is filed under and
/// cannot be rewritten. Keys the struct does not know are ignored on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpeciesPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ko_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub en_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jp_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_stats: Option<BaseStatsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abilities: Option<Vec<String>>,
}

impl SpeciesPatch {
    /// Produces the patched record; `base` is left untouched.
    ///
    /// Top-level fields present in the patch replace the base value outright,
    /// except `baseStats`, which is merged stat by stat.
    pub fn apply_to(&self, base: &SpeciesRecord) -> SpeciesRecord {
        SpeciesRecord {
            id: self.id.clone().unwrap_or_else(|| base.id.clone()),
            dex_no: base.dex_no,
            ko_name: self.ko_name.clone().unwrap_or_else(|| base.ko_name.clone()),
            en_name: self.en_name.clone().unwrap_or_else(|| base.en_name.clone()),
            jp_name: self.jp_name.clone().unwrap_or_else(|| base.jp_name.clone()),
            types: self.types.clone().unwrap_or_else(|| base.types.clone()),
            base_stats: match &self.base_stats {
                Some(stats) => base.base_stats.merged(stats),
                None => base.base_stats,
            },
            abilities: self.abilities.clone().unwrap_or_else(|| base.abilities.clone()),
        }
    }
}

/// Patch entries keyed by stringified dex number, as stored on disk.
pub type PatchOverlay = BTreeMap<String, SpeciesPatch>;
