//! Shiva vrat (observance) days.
//!
//! Monday is sacred to Shiva every week; Mondays in July and August stand in
//! for the month of Shravan. Trayodashi is Pradosh and Chaturdashi is the
//! monthly Shivaratri, in either paksha.

use vaas_time::CivilTime;

use crate::language::{Bilingual, BilingualList, Language};
use crate::tithi::TithiResult;
use crate::vaar::{Vaar, vaar_for_date};

/// A Shiva observance falling on a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShivObservance {
    SomvarVrat,
    /// Replaces [`ShivObservance::SomvarVrat`] on Mondays in July and August.
    ShravanSomvar,
    Pradosh,
    MasikShivaratri,
}

impl ShivObservance {
    pub const fn name(self) -> Bilingual {
        match self {
            Self::SomvarVrat => Bilingual::new("सोमवार व्रत", "Somvar Vrat"),
            Self::ShravanSomvar => Bilingual::new("श्रावण सोमवार व्रत", "Shravan Somvar Vrat"),
            Self::Pradosh => Bilingual::new("प्रदोष व्रत", "Pradosh Vrat"),
            Self::MasikShivaratri => Bilingual::new("मासिक शिवरात्रि", "Masik Shivaratri"),
        }
    }

    pub const fn significance(self) -> Bilingual {
        match self {
            Self::SomvarVrat => Bilingual::new(
                "भगवान शिव को समर्पित पवित्र दिन",
                "A holy day dedicated to Lord Shiva",
            ),
            Self::ShravanSomvar => Bilingual::new(
                "श्रावण मास का सोमवार - सर्वोत्तम शिव व्रत",
                "Monday of Shravan, the finest Shiva fast",
            ),
            Self::Pradosh => Bilingual::new(
                "प्रदोष काल में शिव पूजा अत्यंत फलदायी",
                "Shiva worship at dusk is especially fruitful",
            ),
            Self::MasikShivaratri => Bilingual::new(
                "मासिक शिवरात्रि - अत्यंत पुण्यकारी",
                "Monthly Shivaratri, highly meritorious",
            ),
        }
    }

    pub const fn practices(self) -> BilingualList {
        match self {
            Self::SomvarVrat | Self::ShravanSomvar => BilingualList {
                sanskrit: &["सूर्योदय से सूर्यास्त तक उपवास", "शिव मंत्र जाप", "रुद्राभिषेक", "बिल्व पत्र अर्पण"],
                english: &[
                    "Fast from sunrise to sunset",
                    "Chant Shiva mantras",
                    "Rudrabhishek",
                    "Offer bilva leaves",
                ],
            },
            Self::Pradosh => BilingualList {
                sanskrit: &["संध्या काल पूजा", "शिव चालीसा पाठ", "नंदी दर्शन", "धूप दीप अर्पण"],
                english: &[
                    "Evening worship",
                    "Recite Shiv Chalisa",
                    "Darshan of Nandi",
                    "Offer incense and lamps",
                ],
            },
            Self::MasikShivaratri => BilingualList {
                sanskrit: &["रात्रि जागरण", "निर्जला उपवास", "शिव तांडव स्तोत्र", "महामृत्युंजय मंत्र"],
                english: &[
                    "Night vigil",
                    "Waterless fast",
                    "Shiva Tandava Stotram",
                    "Mahamrityunjaya mantra",
                ],
            },
        }
    }

    pub fn name_in(self, lang: Language) -> &'static str {
        self.name().get(lang)
    }
}

/// Observances on `date` given the tithi prevailing at its sunrise.
///
/// Tithi-based observances come first, then the Monday observance.
pub fn shiv_observances(date: &CivilTime, tithi: &TithiResult) -> Vec<ShivObservance> {
    let mut out = Vec::with_capacity(2);
    match tithi.tithi_in_paksha {
        13 => out.push(ShivObservance::Pradosh),
        14 => out.push(ShivObservance::MasikShivaratri),
        _ => {}
    }
    if vaar_for_date(date) == Vaar::Somvaar {
        if matches!(date.month, 7 | 8) {
            out.push(ShivObservance::ShravanSomvar);
        } else {
            out.push(ShivObservance::SomvarVrat);
        }
    }
    out
}
