//! Joining items with a repeating delimiter sequence.

use thiserror::Error;

/// Errors that can occur while joining.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JoinError {
    /// The delimiter sequence was empty.
    #[error("delimiter sequence must not be empty")]
    EmptyDelimiters,
}

/// Join `items` in order, inserting delimiters drawn round-robin from
/// `delimiters`.
///
/// The delimiter placed after item `i` is `delimiters[i % delimiters.len()]`;
/// no delimiter follows the final item. An empty item sequence joins to the
/// empty string.
pub fn interleave_join<S: AsRef<str>>(items: &[S], delimiters: &[char]) -> Result<String, JoinError> {
    if delimiters.is_empty() {
        return Err(JoinError::EmptyDelimiters);
    }

    let mut joined = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            joined.push(delimiters[(i - 1) % delimiters.len()]);
        }
        joined.push_str(item.as_ref());
    }

    Ok(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_through_delimiters() {
        let items = ["apple", "banana", "cherry", "date"];
        let joined = interleave_join(&items, &['-', '+', '=']).unwrap();
        assert_eq!(joined, "apple-banana+cherry=date");
    }

    #[test]
    fn test_single_item_has_no_delimiter() {
        let joined = interleave_join(&["x"], &['-', '+']).unwrap();
        assert_eq!(joined, "x");
    }

    #[test]
    fn test_empty_items_join_to_empty_string() {
        let items: [&str; 0] = [];
        assert_eq!(interleave_join(&items, &['-']).unwrap(), "");
    }

    #[test]
    fn test_empty_delimiters_rejected() {
        let err = interleave_join(&["a", "b"], &[]).unwrap_err();
        assert_eq!(err, JoinError::EmptyDelimiters);
    }

    #[test]
    fn test_delimiter_assignment_is_periodic() {
        let delimiters = ['-', '+', '='];
        let items: Vec<String> = (0..10).map(|i| format!("w{i}")).collect();

        let joined = interleave_join(&items, &delimiters).unwrap();

        // The delimiter after item i is delimiters[i % 3], for every i
        let mut expected = String::new();
        for (i, item) in items.iter().enumerate() {
            expected.push_str(item);
            if i + 1 < items.len() {
                expected.push(delimiters[i % delimiters.len()]);
            }
        }
        assert_eq!(joined, expected);
    }

    #[test]
    fn test_delimiter_count_need_not_divide_item_count() {
        let joined = interleave_join(&["a", "b", "c"], &['-', '+']).unwrap();
        assert_eq!(joined, "a-b+c");

        let joined = interleave_join(&["a", "b", "c", "d", "e"], &['-', '+']).unwrap();
        assert_eq!(joined, "a-b+c-d+e");
    }
}
