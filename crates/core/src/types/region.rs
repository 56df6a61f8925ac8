//! City regions used to narrow store searches.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A region name outside the fixed set.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown region: {0}")]
pub struct UnknownRegion(pub String);

/// Region a store is located in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Centro,
    Sul,
    Norte,
    Leste,
    Oeste,
}

impl Region {
    /// Every region, in the order the explorer lists them.
    pub const ALL: [Self; 5] = [Self::Centro, Self::Sul, Self::Norte, Self::Leste, Self::Oeste];

    /// Display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Centro => "Centro",
            Self::Sul => "Sul",
            Self::Norte => "Norte",
            Self::Leste => "Leste",
            Self::Oeste => "Oeste",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| UnknownRegion(s.to_owned()))
    }
}

/// Region narrowing for store listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RegionFilter {
    /// The "all regions" sentinel.
    #[default]
    All,
    Only(Region),
}

impl RegionFilter {
    /// Sentinel label shown for [`RegionFilter::All`].
    pub const ALL_LABEL: &'static str = "Todas";

    #[must_use]
    pub fn matches(self, region: Region) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == region,
        }
    }
}

impl FromStr for RegionFilter {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_LABEL || s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl From<Region> for RegionFilter {
    fn from(region: Region) -> Self {
        Self::Only(region)
    }
}
