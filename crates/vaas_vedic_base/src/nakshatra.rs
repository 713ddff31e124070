//! Nakshatra (lunar mansion) of the day.
//!
//! Two derivations are provided:
//! - [`nakshatra_for_day`]: day-of-year mod 27, a calendrical simplification
//!   that ignores the Moon's actual position. This is the default.
//! - [`nakshatra_from_sidereal`]: the Moon's sidereal longitude divided into
//!   27 spans of 13 deg 20'.

use vaas_time::CivilTime;

use crate::language::{Bilingual, Language};
use crate::util::segment_index;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name in Latin transliteration.
    pub const fn name(self) -> &'static str {
        self.label().english
    }

    pub const fn label(self) -> Bilingual {
        match self {
            Self::Ashwini => Bilingual::new("अश्विनी", "Ashwini"),
            Self::Bharani => Bilingual::new("भरणी", "Bharani"),
            Self::Krittika => Bilingual::new("कृत्तिका", "Krittika"),
            Self::Rohini => Bilingual::new("रोहिणी", "Rohini"),
            Self::Mrigashira => Bilingual::new("मृगशीर्षा", "Mrigashira"),
            Self::Ardra => Bilingual::new("आर्द्रा", "Ardra"),
            Self::Punarvasu => Bilingual::new("पुनर्वसु", "Punarvasu"),
            Self::Pushya => Bilingual::new("पुष्य", "Pushya"),
            Self::Ashlesha => Bilingual::new("आश्लेषा", "Ashlesha"),
            Self::Magha => Bilingual::new("मघा", "Magha"),
            Self::PurvaPhalguni => Bilingual::new("पूर्व फाल्गुनी", "Purva Phalguni"),
            Self::UttaraPhalguni => Bilingual::new("उत्तर फाल्गुनी", "Uttara Phalguni"),
            Self::Hasta => Bilingual::new("हस्त", "Hasta"),
            Self::Chitra => Bilingual::new("चित्रा", "Chitra"),
            Self::Swati => Bilingual::new("स्वाती", "Swati"),
            Self::Vishakha => Bilingual::new("विशाखा", "Vishakha"),
            Self::Anuradha => Bilingual::new("अनुराधा", "Anuradha"),
            Self::Jyeshtha => Bilingual::new("ज्येष्ठा", "Jyeshtha"),
            Self::Mula => Bilingual::new("मूल", "Mula"),
            Self::PurvaAshadha => Bilingual::new("पूर्वाषाढ़ा", "Purva Ashadha"),
            Self::UttaraAshadha => Bilingual::new("उत्तराषाढ़ा", "Uttara Ashadha"),
            Self::Shravana => Bilingual::new("श्रवण", "Shravana"),
            Self::Dhanishtha => Bilingual::new("धनिष्ठा", "Dhanishtha"),
            Self::Shatabhisha => Bilingual::new("शतभिषा", "Shatabhisha"),
            Self::PurvaBhadrapada => Bilingual::new("पूर्वभाद्रपद", "Purva Bhadrapada"),
            Self::UttaraBhadrapada => Bilingual::new("उत्तरभाद्रपद", "Uttara Bhadrapada"),
            Self::Revati => Bilingual::new("रेवती", "Revati"),
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// A nakshatra with its 1-based number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NakshatraResult {
    /// 1..=27.
    pub number: u8,
    pub nakshatra: Nakshatra,
}

impl NakshatraResult {
    fn from_index(index: u8) -> Self {
        let index = index % 27;
        Self {
            number: index + 1,
            nakshatra: ALL_NAKSHATRAS[index as usize],
        }
    }

    pub fn name_in(&self, lang: Language) -> &'static str {
        self.nakshatra.label().get(lang)
    }
}

/// Nakshatra by day of year: `index = day_of_year mod 27` (Jan 1 = 1).
pub fn nakshatra_for_day(date: &CivilTime) -> NakshatraResult {
    NakshatraResult::from_index((date.day_of_year() % 27) as u8)
}

/// Nakshatra from a sidereal longitude in degrees.
pub fn nakshatra_from_sidereal(sidereal_lon_deg: f64) -> NakshatraResult {
    NakshatraResult::from_index(segment_index(sidereal_lon_deg, NAKSHATRA_SPAN_27, 27))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_table_order() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn jan_first_is_bharani() {
        // day_of_year = 1 → index 1
        let r = nakshatra_for_day(&CivilTime::date(2024, 1, 1));
        assert_eq!(r.number, 2);
        assert_eq!(r.nakshatra, Nakshatra::Bharani);
    }

    #[test]
    fn day_27_wraps_to_ashwini() {
        let r = nakshatra_for_day(&CivilTime::date(2024, 1, 27));
        assert_eq!(r.number, 1);
        assert_eq!(r.nakshatra, Nakshatra::Ashwini);
    }

    #[test]
    fn time_of_day_does_not_matter() {
        let a = nakshatra_for_day(&CivilTime::new(2024, 6, 17, 0, 0, 0.0));
        let b = nakshatra_for_day(&CivilTime::new(2024, 6, 17, 23, 59, 59.0));
        assert_eq!(a, b);
    }

    #[test]
    fn sidereal_boundaries() {
        assert_eq!(nakshatra_from_sidereal(0.0).nakshatra, Nakshatra::Ashwini);
        assert_eq!(nakshatra_from_sidereal(13.34).nakshatra, Nakshatra::Bharani);
        assert_eq!(nakshatra_from_sidereal(359.99).nakshatra, Nakshatra::Revati);
    }

    #[test]
    fn bilingual_names() {
        let r = nakshatra_from_sidereal(100.0);
        assert_eq!(r.name_in(Language::English), "Pushya");
        assert_eq!(r.name_in(Language::Sanskrit), "पुष्य");
    }
}
