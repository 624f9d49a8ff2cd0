// src/core/presence.rs
//
// The one rule for optional data: absent, or present but empty, counts as
// "not there". Filter flags, completeness and frequency tables all go
// through these so they can never disagree.

/// Collection present and non-empty.
#[inline]
pub fn has_items<T>(v: &Option<Vec<T>>) -> bool {
    v.as_ref().is_some_and(|v| !v.is_empty())
}

/// Borrow the collection, or an empty slice when absent.
#[inline]
pub fn items<T>(v: &Option<Vec<T>>) -> &[T] {
    v.as_deref().unwrap_or(&[])
}

/// Non-empty string or nothing.
#[inline]
pub fn text(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

/// Same as `text`, for callers that only need the yes/no.
#[inline]
pub fn present(v: &Option<String>) -> bool {
    text(v).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_absent_agree() {
        let none: Option<Vec<u8>> = None;
        let empty: Option<Vec<u8>> = Some(vec![]);
        let one = Some(vec![1u8]);

        assert!(!has_items(&none));
        assert!(!has_items(&empty));
        assert!(has_items(&one));
        assert!(items(&none).is_empty());
        assert_eq!(items(&one), &[1]);

        assert_eq!(text(&None), None);
        assert_eq!(text(&Some(s!())), None);
        assert_eq!(text(&Some(s!(" "))), Some(" "));
        assert!(!present(&Some(s!())));
    }
}
