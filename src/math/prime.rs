/// Returns `true` if `x` is prime.
///
/// Trial division by 2 and 3, then by every `6k ± 1` candidate up to
/// `sqrt(x)`. `0` and `1` are not prime.
pub fn is_prime(x: u16) -> bool {
    if x <= 1 {
        return false;
    }
    if x <= 3 {
        return true;
    }
    if x % 2 == 0 || x % 3 == 0 {
        return false;
    }

    let x = u32::from(x);
    let mut i = 5u32;

    // i * i can exceed u16::MAX near the top of the range
    while i * i <= x {
        if x % i == 0 || x % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }

    true
}
