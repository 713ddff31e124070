//! Shiv Vaas: the abode Shiva occupies on a given tithi.
//!
//! Double the tithi number, add five and divide by seven; the remainder
//! (seven when it is zero) names one of seven abodes. The first three are
//! favourable for Shiva worship, the next three unfavourable, and the
//! seventh, the cremation ground, the least favourable of all.

use crate::language::{Bilingual, BilingualList, Language};

/// The rule itself, in verse.
pub const FORMULA_SHLOKA: &str = "तिथिं च द्विगुणी कृत्वा पुनः पञ्च समन्वितम । सप्तभिस्तुहरेद्भागम शेषं शिव वास उच्यते ।।";

/// The abode named for each remainder, in verse.
pub const ABODE_SHLOKA: &str = "एकेन वासः कैलाशे द्वितीये गौरी सन्निधौ ।  तृतीये वृषभारुढ़ः सभायां च चतुष्टये । पंचमे भोजने चैव क्रीड़ायां च रसात्मके ।  श्मशाने सप्तशेषे च शिववासः उदीरितः ।।";

/// Attribution heading for the formula.
pub const FORMULA_TITLE: Bilingual = Bilingual::new(
    "देवर्षि नारद जी द्वारा साझा किए गए सूत्र के अनुसार",
    "By applying the formula shared by Devarshi Narad Ji",
);

/// Shiv Vaas index 1..=7 for a tithi number 1..=30.
///
/// `r = (2n + 5) mod 7`, and `r = 0` maps to 7. Total over all `u8`.
pub fn shiv_vaas_index(tithi_number: u8) -> u8 {
    let r = ((2 * tithi_number as u32 + 5) % 7) as u8;
    if r == 0 { 7 } else { r }
}

/// Human-readable derivation, e.g. `"(14 × 2 + 5) mod 7 = 5"`.
///
/// A zero remainder is shown with its mapping: `"(1 × 2 + 5) mod 7 = 0 → 7"`.
pub fn formula_string(tithi_number: u8) -> String {
    let n = tithi_number as u32;
    let r = (2 * n + 5) % 7;
    if r == 0 {
        format!("({n} × 2 + 5) mod 7 = 0 → 7")
    } else {
        format!("({n} × 2 + 5) mod 7 = {r}")
    }
}

/// How favourable an abode is for Shiva worship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Auspiciousness {
    /// Abodes 1-3.
    Auspicious,
    /// Abodes 4-6: worship is possible but desire-driven rites are avoided.
    InauspiciousWithCaveats,
    /// Abode 7.
    MostInauspicious,
}

impl Auspiciousness {
    pub const fn label(self) -> Bilingual {
        match self {
            Self::Auspicious => Bilingual::new("शुभ", "Auspicious"),
            Self::InauspiciousWithCaveats => Bilingual::new("अशुभ", "Inauspicious"),
            Self::MostInauspicious => Bilingual::new("अत्यंत अशुभ", "Most inauspicious"),
        }
    }

    pub fn is_auspicious(self) -> bool {
        self == Self::Auspicious
    }
}

/// The seven abodes in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShivVaasAbode {
    Kailash,
    GauriSannidhi,
    Vrishabharudha,
    Sabha,
    Bhojan,
    Krida,
    Shmashan,
}

pub const ALL_ABODES: [ShivVaasAbode; 7] = [
    ShivVaasAbode::Kailash,
    ShivVaasAbode::GauriSannidhi,
    ShivVaasAbode::Vrishabharudha,
    ShivVaasAbode::Sabha,
    ShivVaasAbode::Bhojan,
    ShivVaasAbode::Krida,
    ShivVaasAbode::Shmashan,
];

/// Static description of one abode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbodeInfo {
    pub name: Bilingual,
    pub significance: Bilingual,
    pub recommended: BilingualList,
    pub avoid: BilingualList,
    /// Short outcome label.
    pub result: Bilingual,
    pub shastric_statement: Bilingual,
}

const FAVOURABLE_RITES: BilingualList = BilingualList {
    sanskrit: &["रुद्राभिषेक", "महामृत्युंजय जाप", "काम्य अनुष्ठान", "बिल्व पत्र अर्पण"],
    english: &[
        "Rudrabhishek",
        "Mahamrityunjaya japa",
        "Desire-fulfilling (kamya) rites",
        "Offering bilva leaves",
    ],
};

const NOTHING_TO_AVOID: BilingualList = BilingualList {
    sanskrit: &[],
    english: &[],
};

const DAILY_WORSHIP_ONLY: BilingualList = BilingualList {
    sanskrit: &["नित्य पूजा", "नाम जाप", "शिव चालीसा पाठ"],
    english: &["Daily (nitya) worship", "Chanting the divine name", "Reciting Shiv Chalisa"],
};

const AVOID_KAMYA: BilingualList = BilingualList {
    sanskrit: &["रुद्राभिषेक", "काम्य अनुष्ठान", "सकाम संकल्प"],
    english: &[
        "Rudrabhishek",
        "Desire-fulfilling (kamya) rites",
        "Vows made for a specific wish",
    ],
};

const ABODES: [AbodeInfo; 7] = [
    AbodeInfo {
        name: Bilingual::new("कैलाश", "Kailash"),
        significance: Bilingual::new(
            "शिव कैलाश पर्वत पर विराजमान हैं",
            "Shiva is seated on Mount Kailash",
        ),
        recommended: FAVOURABLE_RITES,
        avoid: NOTHING_TO_AVOID,
        result: Bilingual::new("सुख", "Happiness"),
        shastric_statement: Bilingual::new(
            "कैलाश वासी शिव का अनुष्ठान करने से सुख प्राप्ति होती है।",
            "Performing rituals when Shiva resides at Kailash brings happiness and fulfillment.",
        ),
    },
    AbodeInfo {
        name: Bilingual::new("गौरी सन्निधि", "Gauri Sannidhi"),
        significance: Bilingual::new(
            "शिव माता गौरी के सान्निध्य में हैं",
            "Shiva is in the company of Gauri",
        ),
        recommended: FAVOURABLE_RITES,
        avoid: NOTHING_TO_AVOID,
        result: Bilingual::new("सुख-सम्पदा", "Happiness and prosperity"),
        shastric_statement: Bilingual::new(
            "गौरी-सानिध्य में रहने पर सुख-सम्पदा की प्राप्ति होती है।",
            "When in the company of Gauri, one attains happiness and prosperity.",
        ),
    },
    AbodeInfo {
        name: Bilingual::new("वृषभारूढ़", "Vrishabharudha"),
        significance: Bilingual::new("शिव नंदी पर आरूढ़ हैं", "Shiva is riding Nandi the bull"),
        recommended: FAVOURABLE_RITES,
        avoid: NOTHING_TO_AVOID,
        result: Bilingual::new("अभीष्ट सिद्धि", "Desired objectives fulfilled"),
        shastric_statement: Bilingual::new(
            "वृषारुढ़ शिव की विशेष उपासना से अभीष्ट की सिद्धि होती है।",
            "Special worship of Shiva riding the bull fulfills desired objectives.",
        ),
    },
    AbodeInfo {
        name: Bilingual::new("सभा", "Sabha"),
        significance: Bilingual::new("शिव देव सभा में हैं", "Shiva is attending the divine assembly"),
        recommended: DAILY_WORSHIP_ONLY,
        avoid: AVOID_KAMYA,
        result: Bilingual::new("संताप", "Distress"),
        shastric_statement: Bilingual::new(
            "सभासद शिव पूजन से संताप होता है।",
            "Worship of Shiva in assembly causes distress and suffering.",
        ),
    },
    AbodeInfo {
        name: Bilingual::new("भोजन", "Bhojan"),
        significance: Bilingual::new("शिव भोजन कर रहे हैं", "Shiva is taking His meal"),
        recommended: DAILY_WORSHIP_ONLY,
        avoid: AVOID_KAMYA,
        result: Bilingual::new("पीड़ा", "Pain"),
        shastric_statement: Bilingual::new(
            "भोजन करते हुए शिव की आराधना पीड़ादायी है।",
            "Worship of Shiva while He is eating causes pain and trouble.",
        ),
    },
    AbodeInfo {
        name: Bilingual::new("क्रीड़ा", "Krida"),
        significance: Bilingual::new("शिव क्रीड़ा में रत हैं", "Shiva is at play"),
        recommended: DAILY_WORSHIP_ONLY,
        avoid: AVOID_KAMYA,
        result: Bilingual::new("कष्ट", "Difficulties"),
        shastric_statement: Bilingual::new(
            "क्रीड़ारत शिवाराधन भी कष्टकारी है।",
            "Worship of Shiva while He is at play also causes difficulties.",
        ),
    },
    AbodeInfo {
        name: Bilingual::new("श्मशान", "Shmashan"),
        significance: Bilingual::new("शिव श्मशान में वास करते हैं", "Shiva dwells in the cremation ground"),
        recommended: DAILY_WORSHIP_ONLY,
        avoid: AVOID_KAMYA,
        result: Bilingual::new("मरण तुल्य कष्ट", "Death or death-like suffering"),
        shastric_statement: Bilingual::new(
            "श्मशानवासी शिवाराधन मरण या मरण तुल्य कष्ट देता है।",
            "Worship of Shiva residing in cremation ground brings death or death-like suffering.",
        ),
    },
];

impl ShivVaasAbode {
    /// Abode for an index 1..=7; other values wrap mod 7 with 0 → 7.
    pub fn from_index(index: u8) -> Self {
        let i = match index % 7 {
            0 => 7,
            r => r,
        };
        ALL_ABODES[(i - 1) as usize]
    }

    /// 1..=7.
    pub fn index(self) -> u8 {
        self as u8 + 1
    }

    pub fn info(self) -> &'static AbodeInfo {
        &ABODES[self as usize]
    }

    pub fn name_in(self, lang: Language) -> &'static str {
        self.info().name.get(lang)
    }

    pub fn auspiciousness(self) -> Auspiciousness {
        match self.index() {
            1..=3 => Auspiciousness::Auspicious,
            7 => Auspiciousness::MostInauspicious,
            _ => Auspiciousness::InauspiciousWithCaveats,
        }
    }
}

/// Classification of one tithi.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShivVaasClass {
    pub tithi_number: u8,
    /// 1..=7.
    pub index: u8,
    pub abode: ShivVaasAbode,
    pub auspiciousness: Auspiciousness,
    pub formula: String,
}

impl ShivVaasClass {
    pub fn info(&self) -> &'static AbodeInfo {
        self.abode.info()
    }
}

/// Classify a tithi number (1..=30) into its Shiv Vaas abode.
pub fn classify(tithi_number: u8) -> ShivVaasClass {
    let index = shiv_vaas_index(tithi_number);
    let abode = ShivVaasAbode::from_index(index);
    ShivVaasClass {
        tithi_number,
        index,
        abode,
        auspiciousness: abode.auspiciousness(),
        formula: formula_string(tithi_number),
    }
}
