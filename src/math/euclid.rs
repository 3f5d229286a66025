use crate::error::{Result, Rsa16Error};

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `a * x + b * y == g`, where `g` is the greatest
/// common divisor of `a` and `b` (non-negative for non-negative inputs).
///
/// `extended_gcd(0, b)` is `(b, 0, 1)`.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    // Invariant: old_r = a*old_x + b*old_y and r = a*x + b*y
    let (mut old_r, mut r) = (b, a);
    let (mut old_x, mut x) = (0i64, 1i64);
    let (mut old_y, mut y) = (1i64, 0i64);

    while r != 0 {
        let q = old_r / r;

        (old_r, r) = (r, old_r - q * r);
        (old_x, x) = (x, old_x - q * x);
        (old_y, y) = (y, old_y - q * y);
    }

    (old_r, old_x, old_y)
}

/// Computes `a⁻¹ mod m`, normalized to `[0, m)`.
///
/// # Errors
/// Returns [`Rsa16Error::NoInverseExists`] when `gcd(a, m) != 1` or when
/// `m` is not positive.
pub fn mod_inverse(a: i64, m: i64) -> Result<i64> {
    if m <= 0 {
        return Err(Rsa16Error::NoInverseExists { value: a, modulus: m });
    }

    let (g, x, _) = extended_gcd(a, m);
    if g != 1 {
        return Err(Rsa16Error::NoInverseExists { value: a, modulus: m });
    }

    Ok(x.rem_euclid(m))
}
