//! Pure state-transition helpers behind the UI controls.

/// Clamp a raw slider value into a valid index for a list of `len` items.
pub fn clamp_index(raw: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    raw.clamp(0, len as i64 - 1) as usize
}

/// Toggle `item` in `selection`, capped at `cap` members.
///
/// Removing always succeeds; adding while at capacity is a no-op rather
/// than an error, so a user with three demographics selected must
/// deselect one before picking a fourth.
pub fn toggle_capped<T: PartialEq + Copy>(selection: &mut Vec<T>, item: T, cap: usize) {
    if let Some(pos) = selection.iter().position(|x| *x == item) {
        selection.remove(pos);
    } else if selection.len() < cap {
        selection.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_both_ends() {
        assert_eq!(clamp_index(-5, 10), 0);
        assert_eq!(clamp_index(0, 10), 0);
        assert_eq!(clamp_index(9, 10), 9);
        assert_eq!(clamp_index(42, 10), 9);
        assert_eq!(clamp_index(3, 0), 0);
    }

    #[test]
    fn toggle_adds_removes_and_caps() {
        let mut sel = vec!["hispanic", "black"];
        toggle_capped(&mut sel, "asian", 3);
        assert_eq!(sel, vec!["hispanic", "black", "asian"]);

        // Fourth member at capacity: unchanged membership.
        toggle_capped(&mut sel, "other", 3);
        assert_eq!(sel, vec!["hispanic", "black", "asian"]);

        // Removal works at capacity.
        toggle_capped(&mut sel, "black", 3);
        assert_eq!(sel, vec!["hispanic", "asian"]);

        // And the slot freed up can be refilled.
        toggle_capped(&mut sel, "other", 3);
        assert_eq!(sel, vec!["hispanic", "asian", "other"]);
    }
}
