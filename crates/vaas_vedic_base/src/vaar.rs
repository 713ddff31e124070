//! Vaar (weekday).

use vaas_time::CivilTime;

use crate::language::{Bilingual, Language};

/// Day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    /// From a weekday number, 0 = Sunday (taken mod 7).
    pub fn from_weekday(weekday: u8) -> Self {
        ALL_VAARS[(weekday % 7) as usize]
    }

    /// 0 = Sunday .. 6 = Saturday.
    pub fn weekday(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    /// Devanagari name / English weekday.
    pub const fn label(self) -> Bilingual {
        match self {
            Self::Ravivaar => Bilingual::new("रविवार", "Sunday"),
            Self::Somvaar => Bilingual::new("सोमवार", "Monday"),
            Self::Mangalvaar => Bilingual::new("मंगलवार", "Tuesday"),
            Self::Budhvaar => Bilingual::new("बुधवार", "Wednesday"),
            Self::Guruvaar => Bilingual::new("गुरुवार", "Thursday"),
            Self::Shukravaar => Bilingual::new("शुक्रवार", "Friday"),
            Self::Shanivaar => Bilingual::new("शनिवार", "Saturday"),
        }
    }

    pub fn name_in(self, lang: Language) -> &'static str {
        self.label().get(lang)
    }
}

/// Vaar of a civil date (time of day ignored).
pub fn vaar_for_date(date: &CivilTime) -> Vaar {
    Vaar::from_weekday(date.weekday())
}
