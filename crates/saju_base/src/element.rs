//! Five elements (ohaeng), polarity, and elemental tallies.
//!
//! Generation cycle: Wood -> Fire -> Earth -> Metal -> Water -> Wood.
//! Control cycle: Wood -> Earth -> Water -> Fire -> Metal -> Wood.
//!
//! With elements indexed 0..5 in generation order, the relation of A to B is
//! fully determined by `(B - A) mod 5`, so every one of the 25 ordered pairs
//! has exactly one relation.

use serde::Serialize;

use crate::pillar::Chart;

/// The five elements, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in generation order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Hanja glyph (木火土金水).
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element from a 0-based index, wrapping modulo 5.
    pub const fn from_index(i: u8) -> Self {
        ALL_ELEMENTS[(i % 5) as usize]
    }

    /// The element this one produces.
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element this one restrains.
    pub const fn controls(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// The element that produces this one.
    pub const fn generated_by(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// The element that restrains this one.
    pub const fn controlled_by(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Relation of `self` towards `other`.
    pub const fn relation_to(self, other: Element) -> ElementRelation {
        match (other.index() + 5 - self.index()) % 5 {
            0 => ElementRelation::Same,
            1 => ElementRelation::Generates,
            2 => ElementRelation::Controls,
            3 => ElementRelation::ControlledBy,
            _ => ElementRelation::GeneratedBy,
        }
    }
}

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Yang for even values, Yin for odd ones.
    pub const fn from_even(even: bool) -> Self {
        if even { Self::Yang } else { Self::Yin }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}

/// Relation of an element A towards an element B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementRelation {
    /// A and B are the same element.
    Same,
    /// A produces B.
    Generates,
    /// A restrains B.
    Controls,
    /// B restrains A.
    ControlledBy,
    /// B produces A.
    GeneratedBy,
}

/// Per-element occurrence counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ElementTally {
    /// Counts indexed by `Element::index()`.
    pub counts: [u8; 5],
}

impl ElementTally {
    /// Tally built from any sequence of elements.
    pub fn from_elements<I: IntoIterator<Item = Element>>(elements: I) -> Self {
        let mut counts = [0u8; 5];
        for e in elements {
            counts[e.index() as usize] += 1;
        }
        Self { counts }
    }

    /// Tally of all 8 stem/branch slots of a chart.
    pub fn from_chart(chart: &Chart) -> Self {
        let tally = Self::from_elements(
            chart
                .pillars()
                .iter()
                .flat_map(|p| [p.stem.element(), p.branch.element()]),
        );
        debug_assert_eq!(tally.total(), 8);
        tally
    }

    /// Count for one element.
    pub fn count(&self, element: Element) -> u8 {
        self.counts[element.index() as usize]
    }

    /// Sum of all counts.
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| c as u32).sum()
    }

    /// Elements with a zero count.
    pub fn missing(&self) -> Vec<Element> {
        ALL_ELEMENTS
            .into_iter()
            .filter(|&e| self.count(e) == 0)
            .collect()
    }

    /// Elements tied for the highest count.
    pub fn dominant(&self) -> Vec<Element> {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        ALL_ELEMENTS
            .into_iter()
            .filter(|&e| self.count(e) == max)
            .collect()
    }

    /// Sum of absolute per-element differences.
    pub fn abs_diff(&self, other: &ElementTally) -> u32 {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .map(|(&a, &b)| a.abs_diff(b) as u32)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_cycle_closes() {
        let mut e = Element::Wood;
        for _ in 0..5 {
            e = e.generates();
        }
        assert_eq!(e, Element::Wood);
        assert_eq!(Element::Water.generates(), Element::Wood);
    }

    #[test]
    fn control_cycle() {
        assert_eq!(Element::Wood.controls(), Element::Earth);
        assert_eq!(Element::Earth.controls(), Element::Water);
        assert_eq!(Element::Water.controls(), Element::Fire);
        assert_eq!(Element::Fire.controls(), Element::Metal);
        assert_eq!(Element::Metal.controls(), Element::Wood);
    }

    #[test]
    fn inverse_helpers() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.generates().generated_by(), e);
            assert_eq!(e.controls().controlled_by(), e);
        }
    }

    #[test]
    fn relation_is_total_and_consistent() {
        for a in ALL_ELEMENTS {
            for b in ALL_ELEMENTS {
                let r = a.relation_to(b);
                match r {
                    ElementRelation::Same => assert_eq!(a, b),
                    ElementRelation::Generates => assert_eq!(a.generates(), b),
                    ElementRelation::Controls => assert_eq!(a.controls(), b),
                    ElementRelation::ControlledBy => assert_eq!(b.controls(), a),
                    ElementRelation::GeneratedBy => assert_eq!(b.generates(), a),
                }
            }
        }
    }

    #[test]
    fn tally_missing_and_dominant() {
        let t = ElementTally::from_elements([
            Element::Wood,
            Element::Wood,
            Element::Fire,
            Element::Water,
            Element::Water,
        ]);
        assert_eq!(t.total(), 5);
        assert_eq!(t.missing(), vec![Element::Earth, Element::Metal]);
        assert_eq!(t.dominant(), vec![Element::Wood, Element::Water]);
    }

    #[test]
    fn tally_abs_diff() {
        let a = ElementTally { counts: [3, 1, 2, 1, 1] };
        let b = ElementTally { counts: [1, 1, 2, 2, 2] };
        assert_eq!(a.abs_diff(&b), 4);
        assert_eq!(a.abs_diff(&a), 0);
    }
}
