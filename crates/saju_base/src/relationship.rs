//! Pairwise harmony and clash tables for stems and branches.
//!
//! All four relations are symmetric; a symbol never harmonizes or clashes
//! with itself.

use crate::branch::Branch;
use crate::stem::Stem;

/// Stem harmony (天干合) pairs.
pub const STEM_HARMONY_PAIRS: [(Stem, Stem); 5] = [
    (Stem::Gap, Stem::Gi),
    (Stem::Eul, Stem::Gyeong),
    (Stem::Byeong, Stem::Sin),
    (Stem::Jeong, Stem::Im),
    (Stem::Mu, Stem::Gye),
];

/// Stem clash (天干沖) pairs.
pub const STEM_CLASH_PAIRS: [(Stem, Stem); 4] = [
    (Stem::Gap, Stem::Gyeong),
    (Stem::Eul, Stem::Sin),
    (Stem::Byeong, Stem::Im),
    (Stem::Jeong, Stem::Gye),
];

/// Branch six-harmony (六合) pairs.
pub const BRANCH_HARMONY_PAIRS: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::Chuk),
    (Branch::In, Branch::Hae),
    (Branch::Myo, Branch::Sul),
    (Branch::Jin, Branch::Yu),
    (Branch::Sa, Branch::Sin),
    (Branch::O, Branch::Mi),
];

/// Branch six-clash (六沖) pairs.
pub const BRANCH_CLASH_PAIRS: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::O),
    (Branch::Chuk, Branch::Mi),
    (Branch::In, Branch::Sin),
    (Branch::Myo, Branch::Yu),
    (Branch::Jin, Branch::Sul),
    (Branch::Sa, Branch::Hae),
];

fn pair_in<T: PartialEq + Copy>(table: &[(T, T)], a: T, b: T) -> bool {
    table
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

pub fn stems_harmonize(a: Stem, b: Stem) -> bool {
    pair_in(&STEM_HARMONY_PAIRS, a, b)
}

pub fn stems_clash(a: Stem, b: Stem) -> bool {
    pair_in(&STEM_CLASH_PAIRS, a, b)
}

pub fn branches_harmonize(a: Branch, b: Branch) -> bool {
    pair_in(&BRANCH_HARMONY_PAIRS, a, b)
}

pub fn branches_clash(a: Branch, b: Branch) -> bool {
    pair_in(&BRANCH_CLASH_PAIRS, a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::stem::ALL_STEMS;

    #[test]
    fn symmetric() {
        for a in ALL_STEMS {
            for b in ALL_STEMS {
                assert_eq!(stems_harmonize(a, b), stems_harmonize(b, a));
                assert_eq!(stems_clash(a, b), stems_clash(b, a));
            }
        }
        for a in ALL_BRANCHES {
            for b in ALL_BRANCHES {
                assert_eq!(branches_harmonize(a, b), branches_harmonize(b, a));
                assert_eq!(branches_clash(a, b), branches_clash(b, a));
            }
        }
    }

    #[test]
    fn no_self_relations() {
        for s in ALL_STEMS {
            assert!(!stems_harmonize(s, s));
            assert!(!stems_clash(s, s));
        }
        for b in ALL_BRANCHES {
            assert!(!branches_harmonize(b, b));
            assert!(!branches_clash(b, b));
        }
    }

    #[test]
    fn stem_harmony_is_five_apart() {
        for (a, b) in STEM_HARMONY_PAIRS {
            assert_eq!(a.offset(5), b);
        }
    }

    #[test]
    fn branch_clash_is_opposite() {
        for (a, b) in BRANCH_CLASH_PAIRS {
            assert_eq!(a.offset(6), b);
        }
        // every branch has exactly one clash partner
        for a in ALL_BRANCHES {
            let n = ALL_BRANCHES.iter().filter(|&&b| branches_clash(a, b)).count();
            assert_eq!(n, 1);
        }
    }
}
