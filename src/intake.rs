//! Pending-batch operations
//!
//! Pure list manipulation for the file intake surface: collision-free
//! display names and index-based reorder/delete. The controller applies
//! these to its batch signal; nothing here touches the DOM.

use std::collections::HashSet;

/// Returns `name` unchanged if it is free, otherwise appends `(n)` before
/// the extension with the smallest positive `n` not already in use.
pub fn unique_file_name(name: &str, existing: &HashSet<String>) -> String {
    if !existing.contains(name) {
        return name.to_string();
    }

    let (base, ext) = split_extension(name);
    let mut n = 1;
    loop {
        let candidate = format!("{}({}){}", base, n, ext);
        if !existing.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Splits at the last dot so `a.tar.gz` becomes `("a.tar", ".gz")`.
/// A name without a dot has an empty extension.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(index) => name.split_at(index),
        None => (name, ""),
    }
}

/// Swaps the element with its predecessor. No-op at index 0.
pub fn move_up<T>(items: &mut [T], index: usize) -> bool {
    if index == 0 || index >= items.len() {
        return false;
    }
    items.swap(index - 1, index);
    true
}

/// Swaps the element with its successor. No-op at the last index.
pub fn move_down<T>(items: &mut [T], index: usize) -> bool {
    if index + 1 >= items.len() {
        return false;
    }
    items.swap(index, index + 1);
    true
}

/// Removes and returns the element at `index`; later elements shift down.
pub fn remove_at<T>(items: &mut Vec<T>, index: usize) -> Option<T> {
    if index < items.len() {
        Some(items.remove(index))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> HashSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    // =============================================
    // Unique naming
    // =============================================

    #[test]
    fn test_unique_name_no_collision() {
        let existing = names(&["b.png"]);
        assert_eq!(unique_file_name("a.png", &existing), "a.png");
    }

    #[test]
    fn test_unique_name_first_suffix() {
        let existing = names(&["a.png"]);
        assert_eq!(unique_file_name("a.png", &existing), "a(1).png");
    }

    #[test]
    fn test_unique_name_smallest_free_suffix() {
        let existing = names(&["scan.pdf", "scan(1).pdf", "scan(2).pdf"]);
        assert_eq!(unique_file_name("scan.pdf", &existing), "scan(3).pdf");
    }

    #[test]
    fn test_unique_name_gap_is_reused() {
        let existing = names(&["scan.pdf", "scan(2).pdf"]);
        assert_eq!(unique_file_name("scan.pdf", &existing), "scan(1).pdf");
    }

    #[test]
    fn test_unique_name_without_extension() {
        let existing = names(&["notes"]);
        assert_eq!(unique_file_name("notes", &existing), "notes(1)");
    }

    #[test]
    fn test_unique_name_multiple_dots() {
        let existing = names(&["a.tar.gz"]);
        assert_eq!(unique_file_name("a.tar.gz", &existing), "a.tar(1).gz");
    }

    #[test]
    fn test_unique_name_leading_dot() {
        let existing = names(&[".config"]);
        assert_eq!(unique_file_name(".config", &existing), "(1).config");
    }

    // =============================================
    // Reorder / delete
    // =============================================

    #[test]
    fn test_move_up_at_zero_is_noop() {
        let mut items = vec![1, 2, 3];
        assert!(!move_up(&mut items, 0));
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_move_up_swaps_adjacent_only() {
        let mut items = vec![1, 2, 3, 4];
        assert!(move_up(&mut items, 2));
        assert_eq!(items, vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_move_down_at_last_is_noop() {
        let mut items = vec![1, 2, 3];
        assert!(!move_down(&mut items, 2));
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_move_down_swaps_adjacent_only() {
        let mut items = vec![1, 2, 3, 4];
        assert!(move_down(&mut items, 1));
        assert_eq!(items, vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_move_on_empty_list() {
        let mut items: Vec<i32> = vec![];
        assert!(!move_up(&mut items, 0));
        assert!(!move_down(&mut items, 0));
    }

    #[test]
    fn test_remove_at_shifts_later_elements() {
        let mut items = vec!["a", "b", "c"];
        assert_eq!(remove_at(&mut items, 1), Some("b"));
        assert_eq!(items, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut items = vec!["a"];
        assert_eq!(remove_at(&mut items, 1), None);
        assert_eq!(items, vec!["a"]);
    }
}
