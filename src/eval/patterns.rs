//! Pattern catalog for line-fragment classification
//!
//! A fragment extracted around a candidate cell never contains opposing
//! marks (extraction stops at them), so each of its cells is either the
//! evaluated side's mark or empty. The catalog classifies a fragment into
//! one of 8 combination classes by substring containment, checked in
//! priority order with first match winning. Shapes are symmetric under
//! mark substitution, so one table serves both sides.

/// One cell of a line fragment, relative to the side being scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCell {
    /// The evaluated side's mark
    Own,
    Empty,
}

use LineCell::{Empty as E, Own as M};

/// Scores awarded per combination class
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - completes the game
    pub const FIVE: i32 = 10_000;
    /// Open four: _mmmm_
    pub const OPEN_FOUR: i32 = 65;
    /// Four with one gap or one blocked end
    pub const CLOSED_FOUR: i32 = 33;
    /// Three with both extension cells empty
    pub const OPEN_THREE: i32 = 17;
    /// Two with room to grow on both sides
    pub const OPEN_TWO: i32 = 9;
    /// Three with one gap or one blocked end
    pub const CLOSED_THREE: i32 = 5;
    /// Lone mark with empty surroundings
    pub const OPEN_ONE: i32 = 3;
    /// Pair with one gap or one blocked end
    pub const CLOSED_TWO: i32 = 2;
}

type Shape = &'static [LineCell];

const FIVE_SHAPES: &[Shape] = &[&[M, M, M, M, M]];

const OPEN_FOUR_SHAPES: &[Shape] = &[&[E, M, M, M, M, E]];

const CLOSED_FOUR_SHAPES: &[Shape] = &[
    &[E, M, M, M, M],
    &[M, E, M, M, M],
    &[M, M, E, M, M],
    &[M, M, M, E, M],
    &[M, M, M, M, E],
];

const OPEN_THREE_SHAPES: &[Shape] = &[
    &[E, M, M, M, E, E],
    &[E, E, M, M, M, E],
    &[E, M, E, M, M, E],
    &[E, M, M, E, M, E],
];

const OPEN_TWO_SHAPES: &[Shape] = &[
    &[E, M, M, E, E, E],
    &[E, E, M, M, E, E],
    &[E, E, E, M, M, E],
    &[E, M, E, M, E, E],
    &[E, E, M, E, M, E],
];

const CLOSED_THREE_SHAPES: &[Shape] = &[
    &[E, E, M, M, M],
    &[E, M, M, M, E],
    &[M, M, M, E, E],
    &[E, M, M, E, M],
    &[M, E, M, M, E],
    &[E, M, E, M, M],
    &[M, M, E, M, E],
    &[M, E, E, M, M],
    &[M, M, E, E, M],
    &[M, E, M, E, M],
];

const OPEN_ONE_SHAPES: &[Shape] = &[
    &[E, E, E, E, M, E],
    &[E, E, E, M, E, E],
    &[E, E, M, E, E, E],
    &[E, M, E, E, E, E],
];

const CLOSED_TWO_SHAPES: &[Shape] = &[
    &[E, E, E, M, M],
    &[E, E, M, M, E],
    &[E, M, M, E, E],
    &[M, M, E, E, E],
    &[E, E, M, E, M],
    &[E, M, E, E, M],
    &[M, E, E, E, M],
    &[M, E, M, E, E],
    &[M, E, E, M, E],
    &[E, M, E, M, E],
];

/// Combination classes in match-priority order
const CLASSES: &[(&[Shape], i32)] = &[
    (FIVE_SHAPES, PatternScore::FIVE),
    (OPEN_FOUR_SHAPES, PatternScore::OPEN_FOUR),
    (CLOSED_FOUR_SHAPES, PatternScore::CLOSED_FOUR),
    (OPEN_THREE_SHAPES, PatternScore::OPEN_THREE),
    (OPEN_TWO_SHAPES, PatternScore::OPEN_TWO),
    (CLOSED_THREE_SHAPES, PatternScore::CLOSED_THREE),
    (OPEN_ONE_SHAPES, PatternScore::OPEN_ONE),
    (CLOSED_TWO_SHAPES, PatternScore::CLOSED_TWO),
];

/// Classify a fragment and return its combination score.
///
/// Returns 0 when no catalog shape is contained in the fragment.
pub fn classify(fragment: &[LineCell]) -> i32 {
    for &(shapes, score) in CLASSES {
        if shapes.iter().any(|shape| contains(fragment, shape)) {
            return score;
        }
    }
    0
}

/// Sliding-window substring containment over fragment cells
fn contains(fragment: &[LineCell], shape: &[LineCell]) -> bool {
    fragment.len() >= shape.len() && fragment.windows(shape.len()).any(|window| window == shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::CLOSED_FOUR);
        assert!(PatternScore::CLOSED_FOUR > PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::OPEN_TWO);
        assert!(PatternScore::OPEN_TWO > PatternScore::CLOSED_THREE);
        assert!(PatternScore::CLOSED_THREE > PatternScore::OPEN_ONE);
        assert!(PatternScore::OPEN_ONE > PatternScore::CLOSED_TWO);
    }

    #[test]
    fn test_classify_five() {
        assert_eq!(classify(&[M, M, M, M, M]), PatternScore::FIVE);
        // Five anywhere inside a longer fragment still wins the match
        assert_eq!(classify(&[E, M, M, M, M, M, E]), PatternScore::FIVE);
    }

    #[test]
    fn test_classify_open_four() {
        assert_eq!(classify(&[E, M, M, M, M, E]), PatternScore::OPEN_FOUR);
        assert_eq!(classify(&[E, E, M, M, M, M, E, E]), PatternScore::OPEN_FOUR);
    }

    #[test]
    fn test_classify_closed_four() {
        // mm_mm: the gap cell completes five
        assert_eq!(classify(&[M, M, E, M, M]), PatternScore::CLOSED_FOUR);
        // Four flush against the fragment end (blocked side truncated away)
        assert_eq!(classify(&[M, M, M, M, E]), PatternScore::CLOSED_FOUR);
    }

    #[test]
    fn test_classify_open_three() {
        assert_eq!(classify(&[E, M, M, M, E, E]), PatternScore::OPEN_THREE);
        assert_eq!(classify(&[E, M, E, M, M, E]), PatternScore::OPEN_THREE);
    }

    #[test]
    fn test_classify_open_two_before_closed_three() {
        // __mm__ matches open two; a bare _mmm_ (5 cells) is only a closed three
        assert_eq!(classify(&[E, E, M, M, E, E]), PatternScore::OPEN_TWO);
        assert_eq!(classify(&[E, M, M, M, E]), PatternScore::CLOSED_THREE);
    }

    #[test]
    fn test_classify_closed_three() {
        assert_eq!(classify(&[M, M, M, E, E]), PatternScore::CLOSED_THREE);
        assert_eq!(classify(&[M, E, M, E, M]), PatternScore::CLOSED_THREE);
    }

    #[test]
    fn test_classify_open_one() {
        assert_eq!(classify(&[E, E, E, M, E, E]), PatternScore::OPEN_ONE);
        // Full 9-cell fragment around a lone candidate on an empty axis
        assert_eq!(
            classify(&[E, E, E, E, M, E, E, E, E]),
            PatternScore::OPEN_ONE
        );
    }

    #[test]
    fn test_classify_closed_two() {
        assert_eq!(classify(&[M, M, E, E, E]), PatternScore::CLOSED_TWO);
        assert_eq!(classify(&[M, E, E, E, M]), PatternScore::CLOSED_TWO);
    }

    #[test]
    fn test_classify_nothing() {
        assert_eq!(classify(&[M]), 0);
        assert_eq!(classify(&[M, E]), 0);
        assert_eq!(classify(&[E, M, E]), 0);
        assert_eq!(classify(&[]), 0);
    }

    #[test]
    fn test_priority_first_match_wins() {
        // Contains both an open four and (trivially) lesser shapes
        assert_eq!(
            classify(&[E, M, M, M, M, E, M, E]),
            PatternScore::OPEN_FOUR
        );
    }
}
