pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Move `index` by `delta` rows, stopping at either end.
pub const fn step_clamped(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let target = index.saturating_add_signed(delta);
    if target >= len {
        len - 1
    } else {
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_goes_round_both_ends() {
        assert_eq!(wrap_decrement(0, 9), 8);
        assert_eq!(wrap_increment(8, 9), 0);
        assert_eq!(wrap_increment(3, 0), 0);
    }

    #[test]
    fn clamped_steps_stop_at_the_edges() {
        assert_eq!(step_clamped(2, -5, 10), 0);
        assert_eq!(step_clamped(8, 5, 10), 9);
        assert_eq!(step_clamped(4, 1, 10), 5);
        assert_eq!(step_clamped(4, 1, 0), 0);
    }
}
