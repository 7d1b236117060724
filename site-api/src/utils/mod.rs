/// Truncate to at most `max` characters, never splitting a character.
/// Used to cap error detail strings surfaced to callers.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_strings() {
        assert_eq!(truncate_chars("abcdef", 4), "abcd");
    }

    #[test]
    fn leaves_short_strings_alone() {
        assert_eq!(truncate_chars("abc", 120), "abc");
    }

    #[test]
    fn respects_multibyte_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
    }
}
