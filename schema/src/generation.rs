use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Game generations that receive their own dataset.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Generation {
    Gen6,
    Gen7,
    Gen8,
    Gen9,
}

impl Generation {
    /// Directory-friendly tag, e.g. `"gen7"`.
    pub fn tag(self) -> &'static str {
        self.into()
    }

    pub fn patch_file_name(self) -> String {
        format!("{}-species-patches.json", self.tag())
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
