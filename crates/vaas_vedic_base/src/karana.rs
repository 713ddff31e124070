//! Karana (half-tithi).
//!
//! Each tithi has two karanas of 6 deg elongation, 60 per synodic month.
//! Four are fixed (sthira): Kimstughna opens the month, Shakuni, Chatushpada
//! and Naga close it. The 56 in between cycle through the seven movable
//! (chara) karanas Bava .. Vishti.

use crate::language::{Bilingual, Language};
use crate::util::segment_index;

/// Elongation span of one karana in degrees.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// The eleven karanas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    /// Also called Bhadra; inauspicious for new undertakings.
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

const MOVABLE: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        self.label().english
    }

    pub const fn label(self) -> Bilingual {
        match self {
            Self::Bava => Bilingual::new("बव", "Bava"),
            Self::Balava => Bilingual::new("बालव", "Balava"),
            Self::Kaulava => Bilingual::new("कौलव", "Kaulava"),
            Self::Taitila => Bilingual::new("तैतिल", "Taitila"),
            Self::Garaja => Bilingual::new("गर", "Garaja"),
            Self::Vanija => Bilingual::new("वणिज", "Vanija"),
            Self::Vishti => Bilingual::new("विष्टि", "Vishti"),
            Self::Shakuni => Bilingual::new("शकुनि", "Shakuni"),
            Self::Chatushpada => Bilingual::new("चतुष्पद", "Chatushpada"),
            Self::Naga => Bilingual::new("नाग", "Naga"),
            Self::Kimstughna => Bilingual::new("किंस्तुघ्न", "Kimstughna"),
        }
    }

    /// Whether this is one of the four fixed karanas.
    pub fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }
}

/// Karana at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KaranaResult {
    /// Position in the month, 1..=60.
    pub number: u8,
    pub karana: Karana,
}

impl KaranaResult {
    pub fn name_in(&self, lang: Language) -> &'static str {
        self.karana.label().get(lang)
    }
}

/// Karana from the Moon - Sun elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaResult {
    let i = segment_index(elongation_deg, KARANA_SEGMENT_DEG, 60);
    let karana = match i {
        0 => Karana::Kimstughna,
        57 => Karana::Shakuni,
        58 => Karana::Chatushpada,
        59 => Karana::Naga,
        _ => MOVABLE[((i - 1) % 7) as usize],
    };
    KaranaResult {
        number: i + 1,
        karana,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_opens_with_kimstughna() {
        assert_eq!(karana_from_elongation(0.0).karana, Karana::Kimstughna);
        assert_eq!(karana_from_elongation(6.0).karana, Karana::Bava);
        assert_eq!(karana_from_elongation(12.0).karana, Karana::Balava);
    }

    #[test]
    fn month_closes_with_fixed_karanas() {
        assert_eq!(karana_from_elongation(343.0).karana, Karana::Shakuni);
        assert_eq!(karana_from_elongation(349.0).karana, Karana::Chatushpada);
        assert_eq!(karana_from_elongation(355.0).karana, Karana::Naga);
    }

    #[test]
    fn last_movable_is_vishti() {
        // index 56 → (56 - 1) % 7 = 6
        let k = karana_from_elongation(56.0 * 6.0 + 1.0);
        assert_eq!(k.number, 57);
        assert_eq!(k.karana, Karana::Vishti);
    }

    #[test]
    fn movable_cycle_counts() {
        let bava = (0..60)
            .filter(|&i| karana_from_elongation(i as f64 * 6.0 + 3.0).karana == Karana::Bava)
            .count();
        assert_eq!(bava, 8);
    }

    #[test]
    fn fixed_flag() {
        assert!(Karana::Naga.is_fixed());
        assert!(!Karana::Vishti.is_fixed());
    }
}
