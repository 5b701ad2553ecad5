//! Guess evaluation against the daily answer
//!
//! Each submitted guess is classified letter-by-letter:
//! - `Correct` (green): right letter, right position
//! - `Present` (yellow): letter in the answer, wrong position
//! - `Absent` (gray): letter not in the answer (or already consumed)
//!
//! Duplicate letters follow the standard consume-from-pool rules: a letter in
//! the answer can only account for one `Correct` or `Present` mark per
//! occurrence, with exact-position matches claiming their instance first.

use super::Word;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterStatus {
    Correct,
    Present,
    Absent,
}

/// A guessed letter together with its classification
///
/// Produced only by [`evaluate`]; never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterState {
    pub letter: char,
    pub status: LetterStatus,
}

impl LetterState {
    /// Emoji square for this letter's classification
    ///
    /// Used for the shareable result grid, so the mapping is a player-visible
    /// contract: 🟩 correct, 🟨 present, ⬜ absent.
    #[must_use]
    pub const fn emoji(self) -> char {
        match self.status {
            LetterStatus::Correct => '🟩',
            LetterStatus::Present => '🟨',
            LetterStatus::Absent => '⬜',
        }
    }
}

/// Evaluate `guess` against `target`, one [`LetterState`] per position
///
/// Both words are already validated 5-letter uppercase [`Word`]s, so this
/// function has no error path.
///
/// # Algorithm
/// 1. First pass: mark exact-position matches `Correct` and remove each
///    matched letter from the answer's availability pool.
/// 2. Second pass: for unmarked positions, mark `Present` only while pool
///    instances of that letter remain, decrementing the pool; otherwise
///    `Absent`.
///
/// A naive single pass double-counts repeated letters (target `LEVEL`,
/// guess `ELOPE` would flag letters beyond the available pool); the two-pass
/// form is required for scoring and share-grid fidelity.
///
/// # Examples
/// ```
/// use word_patrol::core::{evaluate, LetterStatus, Word};
///
/// let guess = Word::new("CRANE").unwrap();
/// let target = Word::new("TRACE").unwrap();
/// let result = evaluate(&guess, &target);
///
/// // C(present) R(correct) A(correct) N(absent) E(correct)
/// assert_eq!(result[0].status, LetterStatus::Present);
/// assert_eq!(result[1].status, LetterStatus::Correct);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> [LetterState; 5] {
    let mut result = [LetterState {
        letter: ' ',
        status: LetterStatus::Absent,
    }; 5];
    let mut available = target.char_counts();

    // First pass: exact-position matches claim their letter instance
    // Allow: Index needed to access guess[i], target[i], and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..5 {
        let letter = guess.chars()[i];
        result[i].letter = letter as char;

        if letter == target.chars()[i] {
            result[i].status = LetterStatus::Correct;
            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong-position letters consume what remains of the pool
    #[allow(clippy::needless_range_loop)]
    for i in 0..5 {
        if result[i].status == LetterStatus::Correct {
            continue;
        }

        let letter = guess.chars()[i];
        if let Some(count) = available.get_mut(&letter)
            && *count > 0
        {
            result[i].status = LetterStatus::Present;
            *count -= 1;
        }
    }

    result
}

/// Render an evaluated row as its emoji grid line
#[must_use]
pub fn row_emoji(row: &[LetterState; 5]) -> String {
    row.iter().map(|state| state.emoji()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn statuses(guess: &str, target: &str) -> [LetterStatus; 5] {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        evaluate(&guess, &target).map(|state| state.status)
    }

    #[test]
    fn all_correct_on_exact_match() {
        use LetterStatus::Correct;
        assert_eq!(statuses("LEVEL", "LEVEL"), [Correct; 5]);
    }

    #[test]
    fn all_absent_on_disjoint_letters() {
        use LetterStatus::Absent;
        assert_eq!(statuses("ABCDE", "FGHIJ"), [Absent; 5]);
    }

    #[test]
    fn duplicate_letters_consume_the_pool() {
        // Target LEVEL has two E's and two L's. Guess ELOPE:
        // E(present) L(present) O(absent) P(absent) E(present)
        // The second guessed E takes the second target E; nothing is
        // double-counted beyond the available pool.
        use LetterStatus::{Absent, Present};
        assert_eq!(
            statuses("ELOPE", "LEVEL"),
            [Present, Present, Absent, Absent, Present]
        );
    }

    #[test]
    fn correct_takes_priority_over_present() {
        // Target SIREN, guess RADIO: the R at position 0 is present (SIREN's
        // R sits at position 2), nothing else but I matches.
        use LetterStatus::{Absent, Present};
        assert_eq!(
            statuses("RADIO", "SIREN"),
            [Present, Absent, Absent, Present, Absent]
        );
    }

    #[test]
    fn exact_match_claims_instance_before_present() {
        // Guess EERIE vs target SCENE: the final E is an exact-position match
        // and claims one of SCENE's two E's first. The leading E takes the
        // remaining instance as present; the middle E finds an empty pool.
        use LetterStatus::{Absent, Correct, Present};
        assert_eq!(
            statuses("EERIE", "SCENE"),
            [Present, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn correct_plus_present_never_exceeds_letter_overlap() {
        let pairs = [
            ("LEVEL", "ELOPE"),
            ("SPEED", "SCENE"),
            ("AAAAA", "ABCDE"),
            ("TRUST", "TRUTH"),
            ("OATHS", "WATCH"),
        ];

        for (guess, target) in pairs {
            let g = Word::new(guess).unwrap();
            let t = Word::new(target).unwrap();
            let result = evaluate(&g, &t);

            let mut target_counts = t.char_counts();
            let mut marked = 0u8;
            let mut overlap = 0u8;

            for state in &result {
                if state.status != LetterStatus::Absent {
                    marked += 1;
                }
            }
            for &ch in g.chars() {
                if let Some(count) = target_counts.get_mut(&ch)
                    && *count > 0
                {
                    overlap += 1;
                    *count -= 1;
                }
            }

            assert!(
                marked <= overlap,
                "{guess} vs {target}: {marked} marks exceed overlap {overlap}"
            );
        }
    }

    #[test]
    fn letters_carried_through() {
        let guess = Word::new("BADGE").unwrap();
        let target = Word::new("GAVEL").unwrap();
        let result = evaluate(&guess, &target);

        let letters: String = result.iter().map(|state| state.letter).collect();
        assert_eq!(letters, "BADGE");
    }

    #[test]
    fn row_emoji_matches_statuses() {
        let guess = Word::new("ELOPE").unwrap();
        let target = Word::new("LEVEL").unwrap();
        let row = evaluate(&guess, &target);

        assert_eq!(row_emoji(&row), "🟨🟨⬜⬜🟨");
    }
}
