//! Numeric helpers

/// Round `val` to `places` decimal places.
///
/// Rounds up when the fractional part of the scaled value is at least 0.5,
/// down otherwise. The fraction keeps the sign of `val`, so negative values
/// always round down (towards negative infinity).
///
/// ```rust
/// use toolglue_core::numeric::round;
///
/// assert_eq!(round(2.5, 0), 3.0);
/// assert_eq!(round(3.14159, 2), 3.14);
/// ```
#[must_use]
pub fn round(val: f64, places: i32) -> f64 {
    const ROUND_ON: f64 = 0.5;

    let pow = 10f64.powi(places);
    let digit = pow * val;

    let rounded = if digit.fract() >= ROUND_ON {
        digit.ceil()
    } else {
        digit.floor()
    };

    rounded / pow
}

/// Word size of this machine in bits, typically 64 or 32
#[must_use]
pub fn word_size() -> u32 {
    usize::BITS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round(2.5, 0), 3.0);
        assert_eq!(round(2.4, 0), 2.0);
        assert_eq!(round(0.125, 2), 0.13);
    }

    #[test]
    fn test_round_places() {
        assert_eq!(round(3.14159, 2), 3.14);
        assert_eq!(round(3.14159, 3), 3.142);
        assert_eq!(round(7.0, 4), 7.0);
    }

    #[test]
    fn test_round_negative_rounds_down() {
        assert_eq!(round(-2.4, 0), -3.0);
        assert_eq!(round(-2.0, 0), -2.0);
    }

    #[test]
    fn test_word_size() {
        let bits = word_size();
        assert!(bits == 32 || bits == 64);
        assert_eq!(bits as usize, std::mem::size_of::<usize>() * 8);
    }
}
