//! Symbolic names for consonants, vowels and taamim
//!
//! Names are closed enumerations. String lookups go through [`FromStr`]
//! (provided by strum) so an unknown name is rejected at the boundary with
//! [`CoreError::InvalidNameQuery`](crate::CoreError::InvalidNameQuery)
//! instead of silently answering `false`.

use std::str::FromStr;

use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::{CoreError, Result};

/// Which name table a query went to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NameKind {
    Consonant,
    Vowel,
    Taam,
}

macro_rules! name_table {
    ($(#[$meta:meta])* $name:ident, $kind:expr, { $($variant:ident => $ch:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize,
            Display, EnumString, EnumIter, IntoStaticStr,
        )]
        #[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// The code point this name stands for
            pub const fn char(self) -> char {
                match self {
                    $($name::$variant => $ch),+
                }
            }

            /// Reverse lookup by code point
            pub const fn from_char(ch: char) -> Option<Self> {
                match ch {
                    $($ch => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Parse a name, rejecting anything outside the table
            pub fn parse(name: &str) -> Result<Self> {
                Self::from_str(name).map_err(|_| CoreError::InvalidNameQuery {
                    kind: $kind,
                    name: name.to_string(),
                })
            }

            /// All names in table order
            pub fn all() -> impl Iterator<Item = Self> {
                Self::iter()
            }
        }
    };
}

name_table!(
    /// Hebrew letters, final forms included
    ConsonantName, NameKind::Consonant, {
        Alef => '\u{05D0}',
        Bet => '\u{05D1}',
        Gimel => '\u{05D2}',
        Dalet => '\u{05D3}',
        He => '\u{05D4}',
        Vav => '\u{05D5}',
        Zayin => '\u{05D6}',
        Het => '\u{05D7}',
        Tet => '\u{05D8}',
        Yod => '\u{05D9}',
        FinalKaf => '\u{05DA}',
        Kaf => '\u{05DB}',
        Lamed => '\u{05DC}',
        FinalMem => '\u{05DD}',
        Mem => '\u{05DE}',
        FinalNun => '\u{05DF}',
        Nun => '\u{05E0}',
        Samekh => '\u{05E1}',
        Ayin => '\u{05E2}',
        FinalPe => '\u{05E3}',
        Pe => '\u{05E4}',
        FinalTsadi => '\u{05E5}',
        Tsadi => '\u{05E6}',
        Qof => '\u{05E7}',
        Resh => '\u{05E8}',
        Shin => '\u{05E9}',
        Tav => '\u{05EA}',
    }
);

name_table!(
    /// Vowel points, sheva and the hataf vowels included
    VowelName, NameKind::Vowel, {
        Sheva => '\u{05B0}',
        HatafSegol => '\u{05B1}',
        HatafPatah => '\u{05B2}',
        HatafQamats => '\u{05B3}',
        Hiriq => '\u{05B4}',
        Tsere => '\u{05B5}',
        Segol => '\u{05B6}',
        Patah => '\u{05B7}',
        Qamats => '\u{05B8}',
        Holam => '\u{05B9}',
        HolamHaser => '\u{05BA}',
        Qubuts => '\u{05BB}',
        QamatsQatan => '\u{05C7}',
    }
);

name_table!(
    /// Cantillation marks and metheg
    TaamName, NameKind::Taam, {
        Etnahta => '\u{0591}',
        Segolta => '\u{0592}',
        Shalshelet => '\u{0593}',
        ZaqefQatan => '\u{0594}',
        ZaqefGadol => '\u{0595}',
        Tipeha => '\u{0596}',
        Revia => '\u{0597}',
        Zarqa => '\u{0598}',
        Pashta => '\u{0599}',
        Yetiv => '\u{059A}',
        Tevir => '\u{059B}',
        Geresh => '\u{059C}',
        GereshMuqdam => '\u{059D}',
        Gershayim => '\u{059E}',
        QarneyPara => '\u{059F}',
        TelishaGedola => '\u{05A0}',
        Pazer => '\u{05A1}',
        AtnahHafukh => '\u{05A2}',
        Munah => '\u{05A3}',
        Mahapakh => '\u{05A4}',
        Merkha => '\u{05A5}',
        MerkhaKefula => '\u{05A6}',
        Darga => '\u{05A7}',
        Qadma => '\u{05A8}',
        TelishaQetana => '\u{05A9}',
        YerahBenYomo => '\u{05AA}',
        Ole => '\u{05AB}',
        Iluy => '\u{05AC}',
        Dehi => '\u{05AD}',
        Zinor => '\u{05AE}',
        Meteg => '\u{05BD}',
    }
);
