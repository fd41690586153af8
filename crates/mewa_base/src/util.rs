//! Shared cyclic arithmetic for nine-palace numbers.

/// Wrap an integer onto the nine-palace ring 1..=9 (10 → 1, 0 → 9, 12 → 3).
pub fn wrap_nine(value: i32) -> u8 {
    ((value - 1).rem_euclid(9) + 1) as u8
}

/// Step `n` forward by `step` on the 1..=9 ring.
pub fn step_nine(n: u8, step: i32) -> u8 {
    wrap_nine(i32::from(n) + step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_identity_inside_ring() {
        for n in 1..=9 {
            assert_eq!(wrap_nine(n), n as u8);
        }
    }

    #[test]
    fn wrap_never_zero() {
        assert_eq!(wrap_nine(0), 9);
        assert_eq!(wrap_nine(9), 9);
        assert_eq!(wrap_nine(18), 9);
    }

    #[test]
    fn wrap_above_nine() {
        assert_eq!(wrap_nine(10), 1);
        assert_eq!(wrap_nine(12), 3);
    }

    #[test]
    fn wrap_negative() {
        assert_eq!(wrap_nine(-1), 8);
        assert_eq!(wrap_nine(-8), 1);
    }

    #[test]
    fn step_forward_three() {
        assert_eq!(step_nine(9, 3), 3);
        assert_eq!(step_nine(6, 3), 9);
        assert_eq!(step_nine(1, -1), 9);
    }
}
