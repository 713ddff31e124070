//! Output language selection and paired Sanskrit/English strings.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Language for names and descriptive text in results.
///
/// `Sanskrit` covers the Devanagari (Sanskrit/Hindi) rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Sanskrit,
    English,
}

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Sanskrit => "sanskrit",
            Self::English => "english",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Unrecognized language name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl Display for UnknownLanguage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown language '{}' (expected sanskrit or english)", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sanskrit" | "sa" | "hindi" | "hi" => Ok(Self::Sanskrit),
            "english" | "en" => Ok(Self::English),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// A static string available in both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    pub sanskrit: &'static str,
    pub english: &'static str,
}

impl Bilingual {
    pub const fn new(sanskrit: &'static str, english: &'static str) -> Self {
        Self { sanskrit, english }
    }

    pub const fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::Sanskrit => self.sanskrit,
            Language::English => self.english,
        }
    }
}

/// A static list of strings available in both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BilingualList {
    pub sanskrit: &'static [&'static str],
    pub english: &'static [&'static str],
}

impl BilingualList {
    pub const fn get(&self, lang: Language) -> &'static [&'static str] {
        match lang {
            Language::Sanskrit => self.sanskrit,
            Language::English => self.english,
        }
    }
}
