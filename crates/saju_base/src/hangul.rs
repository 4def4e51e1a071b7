//! Stroke counts for Hangul syllables and a curated set of hanja.
//!
//! A precomposed syllable (U+AC00..=U+D7A3) is split into initial, medial and
//! final jamo; its stroke count is the sum of the three table entries.
//! Hanja counts follow the traditional full-form convention (radicals such as
//! 氵 or 艹 count as their full forms).

/// First precomposed Hangul syllable (가).
pub const SYLLABLE_BASE: u32 = 0xAC00;

/// Last precomposed Hangul syllable (힣).
pub const SYLLABLE_LAST: u32 = 0xD7A3;

const MEDIAL_COUNT: u32 = 21;
const FINAL_COUNT: u32 = 28;

/// ㄱ ㄲ ㄴ ㄷ ㄸ ㄹ ㅁ ㅂ ㅃ ㅅ ㅆ ㅇ ㅈ ㅉ ㅊ ㅋ ㅌ ㅍ ㅎ
pub const INITIAL_STROKES: [u8; 19] = [2, 4, 2, 3, 6, 5, 4, 4, 8, 2, 4, 1, 3, 6, 4, 3, 4, 4, 3];

/// ㅏ ㅐ ㅑ ㅒ ㅓ ㅔ ㅕ ㅖ ㅗ ㅘ ㅙ ㅚ ㅛ ㅜ ㅝ ㅞ ㅟ ㅠ ㅡ ㅢ ㅣ
pub const MEDIAL_STROKES: [u8; 21] = [2, 3, 3, 4, 2, 3, 3, 4, 2, 4, 5, 3, 3, 2, 4, 5, 3, 3, 1, 2, 1];

/// (none) ㄱ ㄲ ㄳ ㄴ ㄵ ㄶ ㄷ ㄹ ㄺ ㄻ ㄼ ㄽ ㄾ ㄿ ㅀ ㅁ ㅂ ㅄ ㅅ ㅆ ㅇ ㅈ ㅊ ㅋ ㅌ ㅍ ㅎ
pub const FINAL_STROKES: [u8; 28] = [
    0, 2, 4, 4, 2, 5, 5, 3, 5, 7, 9, 9, 7, 9, 9, 8, 4, 4, 6, 2, 4, 1, 3, 4, 3, 4, 4, 3,
];

/// Customary hanja stroke counts of common single-syllable Hangul surnames.
pub const SURNAME_STROKES: &[(char, u8)] = &[
    ('김', 8),  // 金
    ('이', 7),  // 李
    ('박', 6),  // 朴
    ('최', 11), // 崔
    ('정', 19), // 鄭
    ('강', 9),  // 姜
    ('조', 14), // 趙
    ('윤', 4),  // 尹
    ('장', 11), // 張
    ('임', 8),  // 林
    ('한', 17), // 韓
    ('오', 7),  // 吳
    ('서', 10), // 徐
    ('신', 5),  // 申
    ('권', 22), // 權
    ('황', 12), // 黃
    ('안', 6),  // 安
    ('송', 7),  // 宋
    ('류', 9),  // 柳
    ('유', 9),  // 柳
    ('홍', 10), // 洪
    ('전', 6),  // 全
    ('고', 10), // 高
    ('문', 4),  // 文
    ('손', 10), // 孫
    ('양', 11), // 梁
    ('백', 5),  // 白
    ('허', 11), // 許
    ('남', 9),  // 南
    ('성', 7),  // 成
    ('차', 7),  // 車
    ('주', 6),  // 朱
    ('구', 8),  // 具
    ('민', 12), // 閔
    ('원', 4),  // 元
    ('천', 3),  // 千
    ('방', 4),  // 方
    ('공', 4),  // 孔
    ('현', 5),  // 玄
    ('석', 5),  // 石
    ('마', 10), // 馬
    ('길', 6),  // 吉
    ('명', 8),  // 明
    ('왕', 4),  // 王
];

/// Two-syllable surnames with the customary count of each syllable.
pub const DOUBLE_SURNAMES: &[([char; 2], [char; 2], [u8; 2])] = &[
    (['남', '궁'], ['南', '宮'], [9, 10]),
    (['황', '보'], ['皇', '甫'], [9, 7]),
    (['제', '갈'], ['諸', '葛'], [16, 15]),
    (['선', '우'], ['鮮', '于'], [17, 3]),
    (['독', '고'], ['獨', '孤'], [17, 8]),
    (['사', '공'], ['司', '空'], [5, 8]),
    (['서', '문'], ['西', '門'], [6, 8]),
];

/// Curated hanja for surnames and given names.
pub const HANJA_STROKES: &[(char, u8)] = &[
    // surnames
    ('金', 8),
    ('李', 7),
    ('朴', 6),
    ('崔', 11),
    ('鄭', 19),
    ('姜', 9),
    ('趙', 14),
    ('尹', 4),
    ('張', 11),
    ('林', 8),
    ('韓', 17),
    ('吳', 7),
    ('徐', 10),
    ('申', 5),
    ('權', 22),
    ('黃', 12),
    ('安', 6),
    ('宋', 7),
    ('柳', 9),
    ('洪', 10),
    ('全', 6),
    ('高', 10),
    ('文', 4),
    ('孫', 10),
    ('梁', 11),
    ('白', 5),
    ('許', 11),
    ('南', 9),
    ('成', 7),
    ('車', 7),
    ('朱', 6),
    ('具', 8),
    ('閔', 12),
    ('元', 4),
    ('千', 3),
    ('方', 4),
    ('孔', 4),
    ('玄', 5),
    ('石', 5),
    ('馬', 10),
    ('吉', 6),
    ('明', 8),
    ('王', 4),
    ('宮', 10),
    ('皇', 9),
    ('甫', 7),
    ('諸', 16),
    ('葛', 15),
    ('鮮', 17),
    ('于', 3),
    ('獨', 17),
    ('孤', 8),
    ('司', 5),
    ('空', 8),
    ('西', 6),
    ('門', 8),
    // given names
    ('一', 1),
    ('三', 3),
    ('大', 3),
    ('中', 4),
    ('仁', 4),
    ('允', 4),
    ('民', 5),
    ('正', 5),
    ('永', 5),
    ('世', 5),
    ('玉', 5),
    ('平', 5),
    ('光', 6),
    ('宇', 6),
    ('在', 6),
    ('秀', 7),
    ('和', 8),
    ('東', 8),
    ('昌', 8),
    ('俊', 9),
    ('美', 9),
    ('貞', 9),
    ('相', 9),
    ('泰', 9),
    ('炫', 9),
    ('哲', 10),
    ('恩', 10),
    ('珍', 10),
    ('娜', 10),
    ('英', 11),
    ('浩', 11),
    ('國', 11),
    ('敏', 11),
    ('智', 12),
    ('植', 12),
    ('善', 12),
    ('雅', 12),
    ('鉉', 13),
    ('賢', 15),
    ('龍', 16),
    ('勳', 16),
];

/// True for a precomposed Hangul syllable.
pub fn is_syllable(c: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(c as u32))
}

/// Initial, medial and final jamo indices of a syllable.
pub fn decompose(c: char) -> Option<(usize, usize, usize)> {
    if !is_syllable(c) {
        return None;
    }
    let code = c as u32 - SYLLABLE_BASE;
    let initial = code / (MEDIAL_COUNT * FINAL_COUNT);
    let medial = (code % (MEDIAL_COUNT * FINAL_COUNT)) / FINAL_COUNT;
    let fin = code % FINAL_COUNT;
    Some((initial as usize, medial as usize, fin as usize))
}

/// Stroke count of a syllable from its jamo.
pub fn jamo_strokes(c: char) -> Option<u32> {
    let (i, m, f) = decompose(c)?;
    Some(u32::from(INITIAL_STROKES[i]) + u32::from(MEDIAL_STROKES[m]) + u32::from(FINAL_STROKES[f]))
}

fn lookup(table: &[(char, u8)], c: char) -> Option<u32> {
    table.iter().find(|(k, _)| *k == c).map(|&(_, n)| u32::from(n))
}

/// Stroke count of a curated hanja.
pub fn hanja_strokes(c: char) -> Option<u32> {
    lookup(HANJA_STROKES, c)
}

/// Customary stroke count of a Hangul surname syllable.
pub fn surname_strokes(c: char) -> Option<u32> {
    lookup(SURNAME_STROKES, c)
}

/// Per-syllable counts when `first` and `second` form a two-syllable surname,
/// written in either Hangul or hanja.
pub fn double_surname(first: char, second: char) -> Option<[u32; 2]> {
    DOUBLE_SURNAMES
        .iter()
        .find(|(hangul, hanja, _)| *hangul == [first, second] || *hanja == [first, second])
        .map(|(_, _, n)| n.map(u32::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose_bounds() {
        assert_eq!(decompose('가'), Some((0, 0, 0)));
        assert_eq!(decompose('힣'), Some((18, 20, 27)));
        assert_eq!(decompose('a'), None);
        assert_eq!(decompose('金'), None);
    }

    #[test]
    fn jamo_sums() {
        // ㅁ 4 + ㅣ 1 + ㄴ 2
        assert_eq!(jamo_strokes('민'), Some(7));
        // ㅅ 2 + ㅜ 2
        assert_eq!(jamo_strokes('수'), Some(4));
        // ㅇ 1 + ㅣ 1
        assert_eq!(jamo_strokes('이'), Some(2));
        assert_eq!(jamo_strokes('x'), None);
    }

    #[test]
    fn compound_finals_are_sums() {
        let single = |idx: usize| FINAL_STROKES[idx];
        // ㄳ = ㄱ + ㅅ, ㄺ = ㄹ + ㄱ, ㅄ = ㅂ + ㅅ
        assert_eq!(FINAL_STROKES[3], single(1) + single(19));
        assert_eq!(FINAL_STROKES[9], single(8) + single(1));
        assert_eq!(FINAL_STROKES[18], single(17) + single(19));
    }

    #[test]
    fn double_initials_are_doubles() {
        for (double, base) in [(1, 0), (4, 3), (8, 7), (10, 9), (13, 12)] {
            assert_eq!(INITIAL_STROKES[double], 2 * INITIAL_STROKES[base]);
        }
    }

    #[test]
    fn surname_counts_agree_with_hanja() {
        assert_eq!(surname_strokes('김'), hanja_strokes('金'));
        assert_eq!(surname_strokes('박'), hanja_strokes('朴'));
        assert_eq!(surname_strokes('정'), hanja_strokes('鄭'));
        for (hangul, hanja, counts) in DOUBLE_SURNAMES {
            for k in 0..2 {
                assert_eq!(hanja_strokes(hanja[k]), Some(u32::from(counts[k])), "{hangul:?}");
            }
        }
    }

    #[test]
    fn tables_have_no_duplicates() {
        for table in [HANJA_STROKES, SURNAME_STROKES] {
            for (i, (a, _)) in table.iter().enumerate() {
                assert!(table[i + 1..].iter().all(|(b, _)| a != b), "{a}");
            }
        }
    }

    #[test]
    fn double_surname_lookup() {
        assert_eq!(double_surname('남', '궁'), Some([9, 10]));
        assert_eq!(double_surname('諸', '葛'), Some([16, 15]));
        assert_eq!(double_surname('김', '민'), None);
    }
}
