use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};

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
    FromRepr,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Difficulty {
    #[strum(serialize = "BASIC")]
    Basic = 0,
    #[strum(serialize = "ADVANCED")]
    Advanced = 1,
    #[strum(serialize = "EXPERT")]
    Expert = 2,
    #[strum(serialize = "MASTER")]
    Master = 3,
    #[strum(to_string = "RE:MASTER", serialize = "REMASTER")]
    ReMaster = 4,
}

impl Difficulty {
    /// Number of difficulty tiers a song can carry.
    pub const COUNT: usize = 5;

    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Title-case name used in list output (e.g., "Re:Master")
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
            Self::Master => "Master",
            Self::ReMaster => "Re:Master",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
