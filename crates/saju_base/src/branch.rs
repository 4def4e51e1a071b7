//! The 12 earthly branches (jiji) and their zodiac animals.

use serde::Serialize;

use crate::element::{Element, Polarity};

/// The 12 earthly branches starting from Ja (子, rat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in cycle order (0 = Ja, 11 = Hae).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

impl Branch {
    /// Romanized Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ja => "Ja",
            Self::Chuk => "Chuk",
            Self::In => "In",
            Self::Myo => "Myo",
            Self::Jin => "Jin",
            Self::Sa => "Sa",
            Self::O => "O",
            Self::Mi => "Mi",
            Self::Sin => "Sin",
            Self::Yu => "Yu",
            Self::Sul => "Sul",
            Self::Hae => "Hae",
        }
    }

    /// Zodiac animal (English).
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Ja => "Rat",
            Self::Chuk => "Ox",
            Self::In => "Tiger",
            Self::Myo => "Rabbit",
            Self::Jin => "Dragon",
            Self::Sa => "Snake",
            Self::O => "Horse",
            Self::Mi => "Goat",
            Self::Sin => "Monkey",
            Self::Yu => "Rooster",
            Self::Sul => "Dog",
            Self::Hae => "Pig",
        }
    }

    /// Hanja glyph.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ja => "子",
            Self::Chuk => "丑",
            Self::In => "寅",
            Self::Myo => "卯",
            Self::Jin => "辰",
            Self::Sa => "巳",
            Self::O => "午",
            Self::Mi => "未",
            Self::Sin => "申",
            Self::Yu => "酉",
            Self::Sul => "戌",
            Self::Hae => "亥",
        }
    }

    /// Hangul reading.
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Ja => "자",
            Self::Chuk => "축",
            Self::In => "인",
            Self::Myo => "묘",
            Self::Jin => "진",
            Self::Sa => "사",
            Self::O => "오",
            Self::Mi => "미",
            Self::Sin => "신",
            Self::Yu => "유",
            Self::Sul => "술",
            Self::Hae => "해",
        }
    }

    /// 0-based index (Ja=0 .. Hae=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Branch from any integer, wrapping modulo 12.
    pub const fn from_index(i: i64) -> Self {
        ALL_BRANCHES[i.rem_euclid(12) as usize]
    }

    /// Element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => Element::Earth,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Hae | Self::Ja => Element::Water,
        }
    }

    /// Yang for even indices, Yin for odd.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_even(self.index() % 2 == 0)
    }

    /// Branch `steps` positions away in the cycle (negative steps go back).
    pub const fn offset(self, steps: i64) -> Self {
        Self::from_index(self.index() as i64 + steps)
    }

    /// Index of the three-branch group (triad) this branch belongs to.
    ///
    /// 0 = Sin-Ja-Jin (water), 1 = In-O-Sul (fire), 2 = Sa-Yu-Chuk (metal),
    /// 3 = Hae-Myo-Mi (wood).
    pub const fn triad(self) -> u8 {
        match self {
            Self::Sin | Self::Ja | Self::Jin => 0,
            Self::In | Self::O | Self::Sul => 1,
            Self::Sa | Self::Yu | Self::Chuk => 2,
            Self::Hae | Self::Myo | Self::Mi => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(Branch::from_index(i as i64), *b);
        }
    }

    #[test]
    fn element_counts() {
        let earth = ALL_BRANCHES
            .iter()
            .filter(|b| b.element() == Element::Earth)
            .count();
        assert_eq!(earth, 4);
        for e in [Element::Wood, Element::Fire, Element::Metal, Element::Water] {
            assert_eq!(ALL_BRANCHES.iter().filter(|b| b.element() == e).count(), 2);
        }
    }

    #[test]
    fn triads_are_four_apart() {
        for b in ALL_BRANCHES {
            assert_eq!(b.triad(), b.offset(4).triad());
            assert_eq!(b.triad(), b.offset(8).triad());
        }
    }

    #[test]
    fn zodiac_animals() {
        assert_eq!(Branch::Ja.animal(), "Rat");
        assert_eq!(Branch::O.animal(), "Horse");
        assert_eq!(Branch::Hae.animal(), "Pig");
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(Branch::Hae.offset(1), Branch::Ja);
        assert_eq!(Branch::Ja.offset(-1), Branch::Hae);
        assert_eq!(Branch::from_index(-13), Branch::Hae);
    }
}
