//! Yoga of the day.
//!
//! Like [`crate::nakshatra`], the default is the day-of-year simplification;
//! [`yoga_from_sum`] gives the astronomical yoga from the sidereal Sun + Moon
//! longitude.

use vaas_time::CivilTime;

use crate::language::{Bilingual, Language};
use crate::util::segment_index;

/// Span of one yoga: 360/27 degrees of combined longitude.
pub const YOGA_SPAN: f64 = 360.0 / 27.0;

/// The 27 yogas from Vishkambha to Vaidhriti.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

/// All 27 yogas in order (0 = Vishkambha).
pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        self.label().english
    }

    pub const fn label(self) -> Bilingual {
        match self {
            Self::Vishkambha => Bilingual::new("विष्कुम्भ", "Vishkambha"),
            Self::Priti => Bilingual::new("प्रीति", "Priti"),
            Self::Ayushman => Bilingual::new("आयुष्मान", "Ayushman"),
            Self::Saubhagya => Bilingual::new("सौभाग्य", "Saubhagya"),
            Self::Shobhana => Bilingual::new("शोभन", "Shobhana"),
            Self::Atiganda => Bilingual::new("अतिगण्ड", "Atiganda"),
            Self::Sukarma => Bilingual::new("सुकर्मा", "Sukarma"),
            Self::Dhriti => Bilingual::new("धृति", "Dhriti"),
            Self::Shula => Bilingual::new("शूल", "Shula"),
            Self::Ganda => Bilingual::new("गण्ड", "Ganda"),
            Self::Vriddhi => Bilingual::new("वृद्धि", "Vriddhi"),
            Self::Dhruva => Bilingual::new("ध्रुव", "Dhruva"),
            Self::Vyaghata => Bilingual::new("व्याघात", "Vyaghata"),
            Self::Harshana => Bilingual::new("हर्षण", "Harshana"),
            Self::Vajra => Bilingual::new("वज्र", "Vajra"),
            Self::Siddhi => Bilingual::new("सिद्धि", "Siddhi"),
            Self::Vyatipata => Bilingual::new("व्यतीपात", "Vyatipata"),
            Self::Variyan => Bilingual::new("वरीयान", "Variyan"),
            Self::Parigha => Bilingual::new("परिघ", "Parigha"),
            Self::Shiva => Bilingual::new("शिव", "Shiva"),
            Self::Siddha => Bilingual::new("सिद्ध", "Siddha"),
            Self::Sadhya => Bilingual::new("साध्य", "Sadhya"),
            Self::Shubha => Bilingual::new("शुभ", "Shubha"),
            Self::Shukla => Bilingual::new("शुक्ल", "Shukla"),
            Self::Brahma => Bilingual::new("ब्रह्म", "Brahma"),
            Self::Indra => Bilingual::new("इन्द्र", "Indra"),
            Self::Vaidhriti => Bilingual::new("वैधृति", "Vaidhriti"),
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

/// A yoga with its 1-based number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YogaResult {
    /// 1..=27.
    pub number: u8,
    pub yoga: Yoga,
}

impl YogaResult {
    fn from_index(index: u8) -> Self {
        let index = index % 27;
        Self {
            number: index + 1,
            yoga: ALL_YOGAS[index as usize],
        }
    }

    pub fn name_in(&self, lang: Language) -> &'static str {
        self.yoga.label().get(lang)
    }
}

/// Yoga by day of year: `index = day_of_year mod 27` (Jan 1 = 1).
pub fn yoga_for_day(date: &CivilTime) -> YogaResult {
    YogaResult::from_index((date.day_of_year() % 27) as u8)
}

/// Yoga from the sum of sidereal Sun and Moon longitudes in degrees.
pub fn yoga_from_sum(sidereal_sum_deg: f64) -> YogaResult {
    YogaResult::from_index(segment_index(sidereal_sum_deg, YOGA_SPAN, 27))
}
