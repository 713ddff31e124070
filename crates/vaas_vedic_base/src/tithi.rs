//! Tithi (lunar day) from the Moon-Sun elongation.
//!
//! The synodic month is divided into 30 tithis of 12 deg of elongation each.
//! Tithis 1-15 form the Shukla (waxing) paksha, 16-30 the Krishna (waning)
//! paksha; within a paksha tithis are numbered 1-15 and share one name table.

use crate::language::{Bilingual, Language};
use crate::util::{normalize_360, segment_index};

/// Elongation span of one tithi in degrees.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Mean synodic month in days, as used by the day-count approximation.
pub const APPROX_SYNODIC_MONTH_DAYS: f64 = 29.53;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing half, tithis 1-15.
    Shukla,
    /// Waning half, tithis 16-30.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }

    pub const fn label(self) -> Bilingual {
        match self {
            Self::Shukla => Bilingual::new("शुक्ल पक्ष", "Shukla Paksha"),
            Self::Krishna => Bilingual::new("कृष्ण पक्ष", "Krishna Paksha"),
        }
    }
}

/// The 15 tithi names shared by both pakshas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TithiName {
    Pratipada,
    Dwitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dwadashi,
    Trayodashi,
    Chaturdashi,
    /// Fifteenth tithi: Purnima in Shukla, Amavasya in Krishna.
    PurnimaAmavasya,
}

/// All tithi names in order (0 = Pratipada, 14 = Purnima/Amavasya).
pub const ALL_TITHI_NAMES: [TithiName; 15] = [
    TithiName::Pratipada,
    TithiName::Dwitiya,
    TithiName::Tritiya,
    TithiName::Chaturthi,
    TithiName::Panchami,
    TithiName::Shashthi,
    TithiName::Saptami,
    TithiName::Ashtami,
    TithiName::Navami,
    TithiName::Dashami,
    TithiName::Ekadashi,
    TithiName::Dwadashi,
    TithiName::Trayodashi,
    TithiName::Chaturdashi,
    TithiName::PurnimaAmavasya,
];

impl TithiName {
    /// Name for a tithi-in-paksha number 1..=15.
    ///
    /// Any other number maps to [`TithiName::PurnimaAmavasya`].
    pub fn from_display_number(n: u8) -> Self {
        match n {
            1..=15 => ALL_TITHI_NAMES[(n - 1) as usize],
            _ => Self::PurnimaAmavasya,
        }
    }

    pub const fn name(self) -> &'static str {
        self.label().english
    }

    pub const fn label(self) -> Bilingual {
        match self {
            Self::Pratipada => Bilingual::new("प्रतिपदा", "Pratipada"),
            Self::Dwitiya => Bilingual::new("द्वितीया", "Dwitiya"),
            Self::Tritiya => Bilingual::new("तृतीया", "Tritiya"),
            Self::Chaturthi => Bilingual::new("चतुर्थी", "Chaturthi"),
            Self::Panchami => Bilingual::new("पंचमी", "Panchami"),
            Self::Shashthi => Bilingual::new("षष्ठी", "Shashthi"),
            Self::Saptami => Bilingual::new("सप्तमी", "Saptami"),
            Self::Ashtami => Bilingual::new("अष्टमी", "Ashtami"),
            Self::Navami => Bilingual::new("नवमी", "Navami"),
            Self::Dashami => Bilingual::new("दशमी", "Dashami"),
            Self::Ekadashi => Bilingual::new("एकादशी", "Ekadashi"),
            Self::Dwadashi => Bilingual::new("द्वादशी", "Dwadashi"),
            Self::Trayodashi => Bilingual::new("त्रयोदशी", "Trayodashi"),
            Self::Chaturdashi => Bilingual::new("चतुर्दशी", "Chaturdashi"),
            Self::PurnimaAmavasya => Bilingual::new("पूर्णिमा/अमावस्या", "Purnima/Amavasya"),
        }
    }
}

/// Tithi at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiResult {
    /// Tithi number across the month, 1..=30. The day-count approximation
    /// reports 1..=15.
    pub number: u8,
    /// Tithi number within the paksha, 1..=15.
    pub tithi_in_paksha: u8,
    pub name: TithiName,
    pub paksha: Paksha,
    /// Moon - Sun elongation in degrees, [0, 360).
    pub elongation_deg: f64,
}

impl TithiResult {
    pub fn name_in(&self, lang: Language) -> &'static str {
        self.name.label().get(lang)
    }

    /// "Purnima" or "Amavasya" for the fifteenth tithi; the table name otherwise.
    pub fn specific_name(&self, lang: Language) -> &'static str {
        match (self.name, self.paksha) {
            (TithiName::PurnimaAmavasya, Paksha::Shukla) => {
                Bilingual::new("पूर्णिमा", "Purnima").get(lang)
            }
            (TithiName::PurnimaAmavasya, Paksha::Krishna) => {
                Bilingual::new("अमावस्या", "Amavasya").get(lang)
            }
            _ => self.name_in(lang),
        }
    }

    /// Fraction of the current tithi already elapsed, [0, 1).
    pub fn fraction_elapsed(&self) -> f64 {
        (self.elongation_deg % TITHI_SEGMENT_DEG) / TITHI_SEGMENT_DEG
    }
}

fn from_raw(number: u8, elongation_deg: f64) -> TithiResult {
    let (paksha, tithi_in_paksha) = if number <= 15 {
        (Paksha::Shukla, number)
    } else {
        (Paksha::Krishna, number - 15)
    };
    TithiResult {
        number,
        tithi_in_paksha,
        name: TithiName::from_display_number(tithi_in_paksha),
        paksha,
        elongation_deg,
    }
}

/// Tithi from a Moon - Sun elongation in degrees (any range).
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiResult {
    let elong = normalize_360(elongation_deg);
    from_raw(segment_index(elong, TITHI_SEGMENT_DEG, 30) + 1, elong)
}

/// Tithi from tropical (or sidereal, consistently) Sun and Moon longitudes.
///
/// `diff = (moon - sun + 360) mod 360`, `number = floor(diff / 12) + 1`.
pub fn tithi_at(sun_longitude_deg: f64, moon_longitude_deg: f64) -> TithiResult {
    tithi_from_elongation(moon_longitude_deg - sun_longitude_deg + 360.0)
}

/// Day-count approximation used when positions are unavailable.
///
/// `raw = floor(epoch_days mod 29.53) + 1`, where `epoch_days` counts days
/// since 1970-01-01T00:00 UTC. The reported `number` is folded into 1..=15
/// (`raw - 15` past the fifteenth day); `paksha` still reflects which half of
/// the cycle `raw` fell in. The elongation is the matching fraction of a full
/// cycle.
pub fn approximate_tithi(epoch_days: f64) -> TithiResult {
    let age = epoch_days.rem_euclid(APPROX_SYNODIC_MONTH_DAYS);
    let raw = (age.floor() as u8 + 1).min(30);
    let mut t = from_raw(raw, normalize_360(age / APPROX_SYNODIC_MONTH_DAYS * 360.0));
    t.number = t.tithi_in_paksha;
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conjunction_is_shukla_pratipada() {
        let t = tithi_at(123.4, 123.4);
        assert_eq!(t.number, 1);
        assert_eq!(t.paksha, Paksha::Shukla);
        assert_eq!(t.name, TithiName::Pratipada);
    }

    #[test]
    fn diff_354_is_last_tithi() {
        let t = tithi_at(6.0, 0.0);
        assert_eq!(t.number, 30);
        assert_eq!(t.paksha, Paksha::Krishna);
        assert_eq!(t.tithi_in_paksha, 15);
        assert_eq!(t.name.name(), "Purnima/Amavasya");
        assert_eq!(t.specific_name(Language::English), "Amavasya");
    }

    #[test]
    fn purnima_boundary() {
        let t = tithi_from_elongation(179.9);
        assert_eq!(t.number, 15);
        assert_eq!(t.specific_name(Language::English), "Purnima");
        let k = tithi_from_elongation(180.0);
        assert_eq!((k.number, k.tithi_in_paksha, k.paksha), (16, 1, Paksha::Krishna));
    }

    #[test]
    fn all_segments() {
        for i in 0..30u8 {
            let t = tithi_from_elongation(i as f64 * 12.0 + 6.0);
            assert_eq!(t.number, i + 1);
            assert!((1..=15).contains(&t.tithi_in_paksha));
        }
    }

    #[test]
    fn wraparound_input() {
        assert_eq!(tithi_at(350.0, 10.0).number, 2);
    }

    #[test]
    fn out_of_range_name_falls_back() {
        assert_eq!(TithiName::from_display_number(0), TithiName::PurnimaAmavasya);
        assert_eq!(TithiName::from_display_number(42), TithiName::PurnimaAmavasya);
        assert_eq!(TithiName::from_display_number(13), TithiName::Trayodashi);
    }

    #[test]
    fn approximation_in_range() {
        for k in 0..200 {
            let t = approximate_tithi(19_000.0 + k as f64 * 0.37);
            assert!((1..=15).contains(&t.number));
            assert_eq!(t.number, t.tithi_in_paksha);
            assert!((1..=15).contains(&t.tithi_in_paksha));
        }
    }

    #[test]
    fn approximation_known_day() {
        // 19891 mod 29.53 = 17.31 → raw 18, folded to Krishna 3
        let t = approximate_tithi(19_891.0);
        assert_eq!(t.number, 3);
        assert_eq!(t.tithi_in_paksha, 3);
        assert_eq!(t.paksha, Paksha::Krishna);
    }

    #[test]
    fn fraction_elapsed_mid_segment() {
        assert!((tithi_from_elongation(18.0).fraction_elapsed() - 0.5).abs() < 1e-12);
    }
}
