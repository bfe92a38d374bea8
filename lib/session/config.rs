use crate::jungle::{HEIGHT, WIDTH};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, str::FromStr};

#[cfg(test)]
use proptest::{option, strategy::Strategy};

/// The reason why parsing [`Config`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display("failed to parse game configuration")]
pub struct ParseConfigError(ron::de::SpannedError);

/// Settings of a game.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display("{}", ron::ser::to_string(self).unwrap_or_default())]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// The number of columns.
    #[cfg_attr(test, strategy(1i32..16))]
    pub width: i32,

    /// The number of rows.
    #[cfg_attr(test, strategy(1i32..16))]
    pub height: i32,

    /// Whether lower ranking animals are protected from capture.
    pub ranked: bool,

    /// Where to record played moves.
    #[cfg_attr(test, strategy(option::of("[a-z]{1,8}\\.log").prop_map(|p| p.map(PathBuf::from))))]
    pub log: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: WIDTH,
            height: HEIGHT,
            ranked: false,
            log: None,
        }
    }
}

impl FromStr for Config {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
