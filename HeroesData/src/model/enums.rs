//! Tagged enumerations found in data files
//!
//! Every enumeration has an `Unknown` variant. Parsing is a case-sensitive
//! match on the data file's tag; anything else (including an absent field)
//! becomes `Unknown`, never the first variant.

use std::fmt;

use serde::Serialize;

macro_rules! tagged_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $tag:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
        pub enum $name {
            $($variant,)+
            #[default]
            Unknown,
        }

        impl $name {
            /// Every known variant, in declaration order. Excludes `Unknown`.
            pub const KNOWN: &'static [$name] = &[$($name::$variant),+];

            /// Case-sensitive match against the data file tag.
            #[must_use]
            pub fn parse(tag: &str) -> Self {
                match tag {
                    $($tag => Self::$variant,)+
                    _ => Self::Unknown,
                }
            }

            /// Parse an optional tag, treating absence as `Unknown`.
            #[must_use]
            pub fn parse_opt(tag: Option<&str>) -> Self {
                tag.map_or(Self::Unknown, Self::parse)
            }

            /// The data file tag for this variant.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                    Self::Unknown => "Unknown",
                }
            }

            #[must_use]
            pub fn is_unknown(self) -> bool {
                self == Self::Unknown
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

tagged_enum! {
    /// Collection rarity.
    Rarity {
        None => "None",
        Common => "Common",
        Rare => "Rare",
        Epic => "Epic",
        Legendary => "Legendary",
    }
}

tagged_enum! {
    /// The universe a hero, mount or skin comes from.
    Franchise {
        Classic => "Classic",
        Diablo => "Diablo",
        Overwatch => "Overwatch",
        Starcraft => "Starcraft",
        Warcraft => "Warcraft",
        Nexus => "Nexus",
    }
}

tagged_enum! {
    Gender {
        Male => "Male",
        Female => "Female",
        Neutral => "Neutral",
    }
}

tagged_enum! {
    /// The button slot or kind an ability occupies.
    AbilityType {
        Q => "Q",
        W => "W",
        E => "E",
        Heroic => "Heroic",
        Z => "Z",
        B => "B",
        Trait => "Trait",
        Active => "Active",
        Passive => "Passive",
        Taunt => "Taunt",
        Dance => "Dance",
        Spray => "Spray",
        Voice => "Voice",
        Hearth => "Hearth",
        MapMechanic => "MapMechanic",
        Interact => "Interact",
        Attack => "Attack",
        Stop => "Stop",
        Hold => "Hold",
        Cancel => "Cancel",
        ForceMove => "ForceMove",
    }
}

tagged_enum! {
    /// Ability bucket. The tag is the bucket's member name in the data file.
    AbilityTier {
        Basic => "basic",
        Heroic => "heroic",
        Trait => "trait",
        Mount => "mount",
        Activable => "activable",
        Hearth => "hearth",
        Taunt => "taunt",
        Dance => "dance",
        Spray => "spray",
        Voice => "voice",
        MapMechanic => "mapMechanic",
        Interact => "interact",
        Action => "action",
        Hidden => "hidden",
    }
}

tagged_enum! {
    /// Talent bucket. The tag is the bucket's member name in the data file.
    TalentTier {
        Level1 => "level1",
        Level4 => "level4",
        Level7 => "level7",
        Level10 => "level10",
        Level13 => "level13",
        Level16 => "level16",
        Level20 => "level20",
    }
}

impl TalentTier {
    /// Hero level at which this tier unlocks.
    #[must_use]
    pub fn level(self) -> Option<u32> {
        match self {
            Self::Level1 => Some(1),
            Self::Level4 => Some(4),
            Self::Level7 => Some(7),
            Self::Level10 => Some(10),
            Self::Level13 => Some(13),
            Self::Level16 => Some(16),
            Self::Level20 => Some(20),
            Self::Unknown => None,
        }
    }
}
