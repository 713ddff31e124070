//! Traditional time bands for Shiva worship.

use vaas_time::CivilTime;

use crate::language::{Bilingual, Language};

/// Worship band containing a local hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PujaKaal {
    /// 04:00 - 06:00.
    BrahmaMuhurta,
    /// 18:00 - 20:00, the Pradosh worship time.
    Sandhya,
    /// 23:00 - 02:00, midnight worship of Shivaratri.
    Nishita,
    /// Any other hour.
    Samanya,
}

impl PujaKaal {
    /// Band for a local hour 0..=23.
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            4 | 5 => Self::BrahmaMuhurta,
            18 | 19 => Self::Sandhya,
            h if h >= 23 || h < 2 => Self::Nishita,
            _ => Self::Samanya,
        }
    }

    pub const fn label(self) -> Bilingual {
        match self {
            Self::BrahmaMuhurta => Bilingual::new("ब्रह्म मुहूर्त", "Brahma Muhurta"),
            Self::Sandhya => Bilingual::new("संध्या काल", "Sandhya Kaal"),
            Self::Nishita => Bilingual::new("निशीथ काल", "Nishita Kaal"),
            Self::Samanya => Bilingual::new("सामान्य काल", "Samanya Kaal"),
        }
    }

    pub const fn significance(self) -> Bilingual {
        match self {
            Self::BrahmaMuhurta => Bilingual::new("सर्वोत्तम पूजा काल", "Best time for worship"),
            Self::Sandhya => Bilingual::new("प्रदोष पूजा का समय", "Time for Pradosh worship"),
            Self::Nishita => Bilingual::new("शिवरात्रि पूजा काल", "Shivaratri worship time"),
            Self::Samanya => Bilingual::new("नियमित पूजा समय", "Regular worship time"),
        }
    }
}

/// Label and significance of the worship band at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PujaTime {
    pub kaal: PujaKaal,
    pub label: &'static str,
    pub significance: &'static str,
}

/// Worship band for a local civil instant.
pub fn puja_time_at(instant: &CivilTime, lang: Language) -> PujaTime {
    let kaal = PujaKaal::for_hour(instant.hour);
    PujaTime {
        kaal,
        label: kaal.label().get(lang),
        significance: kaal.significance().get(lang),
    }
}
