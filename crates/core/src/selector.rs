use thiserror::Error;

/// Errors returned by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("cannot select the longest token of an empty sequence")]
    EmptyInput,
}

/// Outcome of a selection: the chosen token, where it sits in the input and its length.
#[derive(Debug, PartialEq, Eq)]
pub struct Selection<'a, S> {
    pub index: usize,
    pub token: &'a S,
    pub length: usize,
}

impl<S> Clone for Selection<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Selection<'_, S> {}

/// Length of a token in characters.
///
/// Multi-byte characters count once, so `"é"` and `"e"` have the same length.
pub fn token_len(token: &str) -> usize {
    token.chars().count()
}

/// Returns the longest token, preferring the earliest one when several share
/// the maximum length.
///
/// The returned reference points into `tokens`; nothing is copied.
///
/// ```
/// use token_select_core::selector::longest;
///
/// assert_eq!(longest(&["1", "2", "3"]), Ok(&"1"));
/// assert_eq!(longest(&["a", "bb", "c"]), Ok(&"bb"));
/// ```
pub fn longest<S: AsRef<str>>(tokens: &[S]) -> Result<&S, SelectorError> {
    select(tokens).map(|selection| selection.token)
}

/// Same choice as [`longest`], also reporting the index and length of the winner.
pub fn select<S: AsRef<str>>(tokens: &[S]) -> Result<Selection<'_, S>, SelectorError> {
    let (first, rest) = tokens.split_first().ok_or(SelectorError::EmptyInput)?;

    let mut best = Selection {
        index: 0,
        token: first,
        length: token_len(first.as_ref()),
    };

    for (offset, token) in rest.iter().enumerate() {
        let length = token_len(token.as_ref());
        // Strictly greater: an equal length never displaces an earlier token.
        if length > best.length {
            best = Selection {
                index: offset + 1,
                token,
                length,
            };
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn all_equal_lengths_pick_first() {
        assert_eq!(longest(&["1", "2", "3"]), Ok(&"1"));
    }

    #[test]
    fn picks_strictly_longest() {
        assert_eq!(longest(&["a", "bb", "c"]), Ok(&"bb"));
    }

    #[test]
    fn tie_resolves_to_earliest() {
        let selection = select(&["xx", "yy", "z"]).expect("non-empty input");
        assert_eq!(*selection.token, "xx");
        assert_eq!(selection.index, 0);
        assert_eq!(selection.length, 2);
    }

    #[test]
    fn single_token_is_returned() {
        assert_eq!(longest(&["single"]), Ok(&"single"));
    }

    #[test]
    fn empty_input_is_an_error() {
        let tokens: [&str; 0] = [];
        assert_eq!(longest(&tokens), Err(SelectorError::EmptyInput));
        assert_eq!(
            SelectorError::EmptyInput.to_string(),
            "cannot select the longest token of an empty sequence"
        );
    }

    #[test]
    fn returns_reference_into_input() {
        let tokens = vec!["short".to_string(), "longer one".to_string()];
        let chosen = longest(&tokens).expect("non-empty input");
        assert!(std::ptr::eq(chosen, &tokens[1]));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(token_len("héllo"), 5);
        // "ééé" is 6 bytes but only 3 characters, so the 4-char ASCII token wins.
        assert_eq!(longest(&["ééé", "abcd"]), Ok(&"abcd"));
        assert_eq!(longest(&["ab", "éé"]), Ok(&"ab"));
    }

    #[test]
    fn later_longer_token_replaces_earlier() {
        let selection = select(&["a", "bb", "ccc", "dd", "ccc"]).expect("non-empty input");
        assert_eq!(selection.index, 2);
        assert_eq!(selection.length, 3);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn selection_is_first_maximal_member(
            tokens in prop::collection::vec(any::<String>(), 1..32)
        ) {
            let selection = select(&tokens).expect("non-empty input");
            let max = tokens.iter().map(|t| token_len(t)).max().expect("non-empty input");

            prop_assert!(std::ptr::eq(selection.token, &tokens[selection.index]));
            prop_assert_eq!(selection.length, max);
            prop_assert_eq!(token_len(selection.token), max);
            prop_assert!(tokens[..selection.index].iter().all(|t| token_len(t) < max));
        }

        #[test]
        fn ties_on_short_alphabet_resolve_to_first_maximal(
            tokens in prop::collection::vec("[ab]{0,3}", 1..12)
        ) {
            let chosen = longest(&tokens).expect("non-empty input");
            let max = tokens.iter().map(|t| t.len()).max().expect("non-empty input");
            let first = tokens
                .iter()
                .position(|t| t.len() == max)
                .expect("a maximal token exists");

            prop_assert!(std::ptr::eq(chosen, &tokens[first]));
        }
    }
}
