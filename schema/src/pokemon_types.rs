use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Canonical type identifiers as the upstream service spells them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl PokemonType {
    /// Fixed Korean label shown by the downstream app.
    pub fn korean_label(self) -> &'static str {
        use PokemonType::*;

        match self {
            Normal => "노말",
            Fire => "불꽃",
            Water => "물",
            Electric => "전기",
            Grass => "풀",
            Ice => "얼음",
            Fighting => "격투",
            Poison => "독",
            Ground => "땅",
            Flying => "비행",
            Psychic => "에스퍼",
            Bug => "벌레",
            Rock => "바위",
            Ghost => "고스트",
            Dragon => "드래곤",
            Dark => "악",
            Steel => "강철",
            Fairy => "페어리",
        }
    }
}
