use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// The six base stats, named the way the upstream service names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatKind {
    /// Upstream identifier, e.g. `"special-attack"`.
    pub fn identifier(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    #[serde(rename = "atk")]
    pub attack: u16,
    #[serde(rename = "def")]
    pub defense: u16,
    #[serde(rename = "spa")]
    pub sp_attack: u16,
    #[serde(rename = "spd")]
    pub sp_defense: u16,
    #[serde(rename = "spe")]
    pub speed: u16,
}

impl BaseStats {
    /// Builds a stat block from `(upstream name, value)` pairs.
    ///
    /// The first entry for a stat wins, unrecognised names are ignored and
    /// any stat that never appears stays at zero.
    pub fn from_named<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, u16)>,
    {
        let entries: Vec<(&str, u16)> = entries.into_iter().collect();
        let mut stats = BaseStats::default();
        for kind in StatKind::iter() {
            if let Some((_, value)) = entries.iter().find(|(name, _)| *name == kind.identifier()) {
                stats.set(kind, *value);
            }
        }
        stats
    }

    pub fn set(&mut self, kind: StatKind, value: u16) {
        let slot = match kind {
            StatKind::Hp => &mut self.hp,
            StatKind::Attack => &mut self.attack,
            StatKind::Defense => &mut self.defense,
            StatKind::SpecialAttack => &mut self.sp_attack,
            StatKind::SpecialDefense => &mut self.sp_defense,
            StatKind::Speed => &mut self.speed,
        };
        *slot = value;
    }
}

/// One normalized species entry of a generated dataset.
///
/// `id` is always the slug of the canonical English name, so it stays stable
/// when display names change. `dex_no` is the join key for patch overlays and
/// the sort key of every dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesRecord {
    pub id: String,
    pub dex_no: u16,
    pub ko_name: String,
    pub en_name: String,
    pub jp_name: String,
    pub types: Vec<String>,
    pub base_stats: BaseStats,
    pub abilities: Vec<String>,
}
