/// Computes `base^exponent mod modulus` by square-and-multiply.
///
/// Products are formed in 32 bits so that two residues below `2^16` never
/// overflow. The loop walks every bit of `exponent` from least to most
/// significant.
///
/// `modulus` must be non-zero. Keys built by this crate always have a
/// modulus of at least 256.
#[inline]
pub fn mod_pow(base: u16, exponent: u16, modulus: u16) -> u16 {
    debug_assert!(modulus != 0, "mod_pow with zero modulus");

    let m = u32::from(modulus);
    let mut result = 1u32;
    let mut power = u32::from(base) % m;
    let mut exponent = exponent;

    while exponent > 0 {
        if exponent & 1 == 1 {
            result = (result * power) % m;
        }
        power = (power * power) % m;
        exponent >>= 1;
    }

    result as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(base: u16, exponent: u16, modulus: u16) -> u16 {
        let m = u64::from(modulus);
        let mut acc = 1u64;
        for _ in 0..exponent {
            acc = (acc * u64::from(base)) % m;
        }
        acc as u16
    }

    #[test]
    fn matches_repeated_multiplication() {
        for &modulus in &[257u16, 323, 37909, 65021] {
            for base in (0u16..=u16::MAX).step_by(997) {
                for exponent in [0u16, 1, 2, 3, 17, 255, 1000] {
                    assert_eq!(
                        mod_pow(base, exponent, modulus),
                        naive(base, exponent, modulus),
                        "{base}^{exponent} mod {modulus}"
                    );
                }
            }
        }
    }

    #[test]
    fn zero_exponent_is_one() {
        assert_eq!(mod_pow(1234, 0, 37909), 1);
        assert_eq!(mod_pow(0, 0, 37909), 1);
    }

    #[test]
    fn base_is_reduced_first() {
        assert_eq!(mod_pow(37909 + 5, 3, 37909), 125);
    }

    #[test]
    fn large_residues_do_not_overflow() {
        let m = 65_021u16;
        assert_eq!(mod_pow(m - 1, 2, m), 1);
        assert_eq!(mod_pow(m - 1, 3, m), m - 1);
    }

    #[test]
    fn known_value() {
        assert_eq!(mod_pow(65, 5707, 37909), 34823);
    }
}
