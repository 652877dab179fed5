//! Target platforms used to filter the client list.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SelectionError;

/// Operating environment a client application is offered for.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Desktop Windows; also the fallback when nothing else matches.
    #[default]
    Windows,
    /// Android phones and tablets.
    Android,
    /// Android TV boxes and televisions.
    #[serde(rename = "androidtv")]
    AndroidTv,
    /// iPhone and iPad.
    Ios,
    /// macOS desktops.
    Mac,
    /// Desktop Linux.
    Linux,
}

impl Platform {
    /// All platforms in tab display order.
    pub const ALL: [Self; 6] = [
        Self::Windows,
        Self::Android,
        Self::AndroidTv,
        Self::Ios,
        Self::Mac,
        Self::Linux,
    ];

    /// Stable identifier used in data files and DOM ids.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Android => "android",
            Self::AndroidTv => "androidtv",
            Self::Ios => "ios",
            Self::Mac => "mac",
            Self::Linux => "linux",
        }
    }

    /// Position of the platform inside [`Platform::ALL`].
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Windows => 0,
            Self::Android => 1,
            Self::AndroidTv => 2,
            Self::Ios => 3,
            Self::Mac => 4,
            Self::Linux => 5,
        }
    }
}

impl Display for Platform {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = SelectionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|platform| platform.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SelectionError::UnknownPlatform {
                id: value.to_string(),
            })
    }
}
