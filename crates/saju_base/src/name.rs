//! Name-stroke numerology (seongmyeong).
//!
//! A name is split into surname and given name, each character is assigned a
//! stroke count, and five grid values are derived:
//!
//! - heaven = surname + 1
//! - human = surname + first given character
//! - earth = sum of given characters + 1
//! - total = surname + sum of given characters
//! - outer = heaven + earth - human
//!
//! Each value maps to an element by its last digit, a polarity by parity,
//! and a fortune tier through the 81-number table.

use serde::Serialize;
use tracing::debug;

use crate::element::{Element, ElementTally, Polarity};
use crate::error::SajuError;
use crate::hangul::{double_surname, hanja_strokes, is_syllable, jamo_strokes, surname_strokes};
use crate::pillar::Chart;

/// Numbers wrap into 1..=81 before the tier lookup.
pub const NUMBER_CYCLE: u32 = 80;

pub const BEST_NUMBERS: [u32; 17] = [1, 11, 15, 16, 21, 23, 24, 29, 31, 32, 33, 41, 45, 47, 48, 52, 81];

pub const GOOD_NUMBERS: [u32; 18] = [3, 5, 6, 7, 8, 13, 17, 18, 25, 35, 37, 39, 57, 61, 63, 65, 67, 68];

pub const NEUTRAL_NUMBERS: [u32; 13] = [27, 28, 30, 38, 51, 53, 55, 58, 71, 73, 75, 77, 78];

pub const BAD_NUMBERS: [u32; 19] = [
    2, 4, 9, 10, 12, 14, 19, 20, 22, 26, 34, 36, 40, 42, 43, 44, 46, 49, 50,
];

/// Fortune tier of a grid value, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum NumberTier {
    Best,
    Good,
    Neutral,
    Bad,
    VeryBad,
}

impl NumberTier {
    /// Tier of a value after wrapping it into 1..=81.
    pub fn of(value: u32) -> Self {
        let v = reduce(value);
        if BEST_NUMBERS.contains(&v) {
            Self::Best
        } else if GOOD_NUMBERS.contains(&v) {
            Self::Good
        } else if NEUTRAL_NUMBERS.contains(&v) {
            Self::Neutral
        } else if BAD_NUMBERS.contains(&v) {
            Self::Bad
        } else {
            Self::VeryBad
        }
    }

    pub const fn points(self) -> u32 {
        match self {
            Self::Best => 100,
            Self::Good => 80,
            Self::Neutral => 60,
            Self::Bad => 40,
            Self::VeryBad => 20,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Best => "Best",
            Self::Good => "Good",
            Self::Neutral => "Neutral",
            Self::Bad => "Bad",
            Self::VeryBad => "VeryBad",
        }
    }
}

/// Wrap values above 81 down by 80 until they fit.
pub const fn reduce(mut value: u32) -> u32 {
    while value > 81 {
        value -= NUMBER_CYCLE;
    }
    value
}

/// Element of a number by its last digit.
pub const fn number_element(value: u32) -> Element {
    match value % 10 {
        1 | 2 => Element::Wood,
        3 | 4 => Element::Fire,
        5 | 6 => Element::Earth,
        7 | 8 => Element::Metal,
        _ => Element::Water,
    }
}

/// Odd numbers are Yang.
pub const fn number_polarity(value: u32) -> Polarity {
    if value % 2 == 1 { Polarity::Yang } else { Polarity::Yin }
}

/// Where a character's stroke count came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StrokeSource {
    /// Summed from Hangul jamo.
    Jamo,
    /// Curated hanja table.
    Hanja,
    /// Customary hanja count of a Hangul surname.
    Surname,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharStrokes {
    pub ch: char,
    pub strokes: u32,
    pub source: StrokeSource,
}

/// One of the five derived values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridValue {
    pub value: u32,
    pub element: Element,
    pub polarity: Polarity,
    pub tier: NumberTier,
}

impl GridValue {
    pub fn new(value: u32) -> Self {
        Self {
            value,
            element: number_element(value),
            polarity: number_polarity(value),
            tier: NumberTier::of(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FiveGrids {
    pub heaven: GridValue,
    pub human: GridValue,
    pub earth: GridValue,
    pub total: GridValue,
    pub outer: GridValue,
}

impl FiveGrids {
    /// Derive all five values from the surname count and given-name counts.
    pub fn from_strokes(surname: u32, given: &[u32]) -> Self {
        let given_sum: u32 = given.iter().sum();
        let first = given.first().copied().unwrap_or(0);
        let heaven = surname + 1;
        let human = surname + first;
        let earth = given_sum + 1;
        Self {
            heaven: GridValue::new(heaven),
            human: GridValue::new(human),
            earth: GridValue::new(earth),
            total: GridValue::new(surname + given_sum),
            // heaven + earth always exceeds human by at least 2
            outer: GridValue::new(heaven + earth - human),
        }
    }

    pub const fn values(&self) -> [GridValue; 5] {
        [self.heaven, self.human, self.earth, self.total, self.outer]
    }

    /// Mean tier points of human, earth, total and outer.
    pub fn score(&self) -> u8 {
        let sum: u32 = [self.human, self.earth, self.total, self.outer]
            .iter()
            .map(|g| g.tier.points())
            .sum();
        (sum / 4) as u8
    }
}

/// How the name's human element relates to the chart's day element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NameRelation {
    /// Name element generates the day element.
    Supportive,
    /// Same element.
    Harmonious,
    /// Day element generates the name element.
    Draining,
    /// Day element controls the name element.
    Controlled,
    /// Name element controls the day element.
    Conflicting,
}

impl NameRelation {
    pub const fn between(name: Element, day: Element) -> Self {
        use crate::element::ElementRelation as R;
        match name.relation_to(day) {
            R::Generates => Self::Supportive,
            R::Same => Self::Harmonious,
            R::GeneratedBy => Self::Draining,
            R::ControlledBy => Self::Controlled,
            R::Controls => Self::Conflicting,
        }
    }

    pub const fn base_score(self) -> u8 {
        match self {
            Self::Supportive => 90,
            Self::Harmonious => 80,
            Self::Draining => 60,
            Self::Controlled => 50,
            Self::Conflicting => 40,
        }
    }
}

/// Bonus when the name supplies an element the chart lacks.
pub const MISSING_ELEMENT_BONUS: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartMatch {
    pub day_element: Element,
    pub name_element: Element,
    pub relation: NameRelation,
    /// Elements with zero count in the chart.
    pub missing: Vec<Element>,
    pub fills_missing: bool,
    pub score: u8,
}

impl ChartMatch {
    pub fn new(name_element: Element, chart: &Chart) -> Self {
        let day_element = chart.day_element();
        let relation = NameRelation::between(name_element, day_element);
        let missing = ElementTally::from_chart(chart).missing();
        let fills_missing = missing.contains(&name_element);
        let bonus = if fills_missing { MISSING_ELEMENT_BONUS } else { 0 };
        Self {
            day_element,
            name_element,
            relation,
            missing,
            fills_missing,
            score: relation.base_score().saturating_add(bonus).min(100),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameStrokeProfile {
    pub name: String,
    pub surname: String,
    pub given: String,
    pub characters: Vec<CharStrokes>,
    pub grids: FiveGrids,
    /// Element tally over the five grid values.
    pub distribution: ElementTally,
    pub score: u8,
    pub chart_match: Option<ChartMatch>,
}

fn char_strokes(c: char, in_surname: bool) -> Result<CharStrokes, SajuError> {
    if in_surname {
        if let Some(strokes) = surname_strokes(c) {
            return Ok(CharStrokes {
                ch: c,
                strokes,
                source: StrokeSource::Surname,
            });
        }
    }
    if let Some(strokes) = hanja_strokes(c) {
        return Ok(CharStrokes {
            ch: c,
            strokes,
            source: StrokeSource::Hanja,
        });
    }
    if is_syllable(c) {
        if let Some(strokes) = jamo_strokes(c) {
            return Ok(CharStrokes {
                ch: c,
                strokes,
                source: StrokeSource::Jamo,
            });
        }
    }
    Err(SajuError::InvalidName(format!("unsupported character {c:?}")))
}

/// Analyze a name, optionally against a chart.
///
/// Whitespace is ignored. Names need at least two characters; two-syllable
/// surnames are recognised only when at least one given character follows.
pub fn analyze(name: &str, chart: Option<&Chart>) -> Result<NameStrokeProfile, SajuError> {
    let chars: Vec<char> = name.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.len() < 2 {
        return Err(SajuError::InvalidName(format!(
            "{name:?} needs at least two characters"
        )));
    }

    let mut characters = Vec::with_capacity(chars.len());
    let surname_len = match double_surname(chars[0], chars[1]) {
        Some(counts) if chars.len() >= 3 => {
            for (k, strokes) in counts.into_iter().enumerate() {
                characters.push(CharStrokes {
                    ch: chars[k],
                    strokes,
                    source: StrokeSource::Surname,
                });
            }
            2
        }
        _ => {
            characters.push(char_strokes(chars[0], true)?);
            1
        }
    };
    for &c in &chars[surname_len..] {
        characters.push(char_strokes(c, false)?);
    }

    let surname: u32 = characters[..surname_len].iter().map(|c| c.strokes).sum();
    let given: Vec<u32> = characters[surname_len..].iter().map(|c| c.strokes).collect();
    let grids = FiveGrids::from_strokes(surname, &given);
    let distribution = ElementTally::from_elements(grids.values().map(|g| g.element));
    let chart_match = chart.map(|c| ChartMatch::new(grids.human.element, c));

    debug!(
        surname,
        given = ?given,
        human = grids.human.value,
        "analyzed name strokes"
    );

    Ok(NameStrokeProfile {
        name: chars.iter().collect(),
        surname: chars[..surname_len].iter().collect(),
        given: chars[surname_len..].iter().collect(),
        characters,
        score: grids.score(),
        grids,
        distribution,
        chart_match,
    })
}
