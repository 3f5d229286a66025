use crate::error::{KeyHalf, Result, Rsa16Error};

/// Smallest modulus for which every byte value is a distinct residue.
pub const MIN_MODULUS: u16 = 256;

fn check_modulus(modulus: u16) -> Result<u16> {
    if modulus < MIN_MODULUS {
        return Err(Rsa16Error::ModulusTooSmall(modulus));
    }
    Ok(modulus)
}

fn check_exponent(exponent: u16, half: KeyHalf) -> Result<u16> {
    if exponent == 0 {
        return Err(Rsa16Error::KeyUnavailable(half));
    }
    Ok(exponent)
}

/// Anything that carries an RSA16 modulus.
pub trait RsaKey {
    /// The modulus `n`.
    fn modulus(&self) -> u16;

    /// Raw `(n, e, d)` view of this key, with absent halves as `None`.
    fn triple(&self) -> KeyTriple;
}

/// A key that can run the public operation (`x^e mod n`).
pub trait PublicHalf: RsaKey {
    /// The public exponent `e`, never zero.
    fn public_exponent(&self) -> u16;
}

/// A key that can run the private operation (`x^d mod n`).
pub trait PrivateHalf: RsaKey {
    /// The private exponent `d`, never zero.
    fn private_exponent(&self) -> u16;
}

/// Raw key components, as exchanged with other implementations.
///
/// An exponent of `0` in [`from_raw`](Self::from_raw) marks that half as
/// unavailable, e.g. a public-only key has no private exponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyTriple {
    modulus: u16,
    public_exponent: Option<u16>,
    private_exponent: Option<u16>,
}

impl KeyTriple {
    /// Builds a triple from `(n, e, d)`, reading `0` exponents as absent.
    ///
    /// # Errors
    /// Returns [`Rsa16Error::ModulusTooSmall`] if `n < 256`.
    pub fn from_raw(modulus: u16, public_exponent: u16, private_exponent: u16) -> Result<Self> {
        Ok(Self {
            modulus: check_modulus(modulus)?,
            public_exponent: (public_exponent != 0).then_some(public_exponent),
            private_exponent: (private_exponent != 0).then_some(private_exponent),
        })
    }

    /// Returns `(n, e, d)` with absent exponents written back as `0`.
    pub fn to_raw(&self) -> (u16, u16, u16) {
        (
            self.modulus,
            self.public_exponent.unwrap_or(0),
            self.private_exponent.unwrap_or(0),
        )
    }

    pub fn modulus(&self) -> u16 {
        self.modulus
    }

    pub fn public_exponent(&self) -> Option<u16> {
        self.public_exponent
    }

    pub fn private_exponent(&self) -> Option<u16> {
        self.private_exponent
    }

    /// Narrows to the public half.
    ///
    /// # Errors
    /// [`Rsa16Error::KeyUnavailable`] if `e` is absent.
    pub fn public_key(&self) -> Result<PublicKey> {
        let exponent = self
            .public_exponent
            .ok_or(Rsa16Error::KeyUnavailable(KeyHalf::Public))?;
        Ok(PublicKey {
            modulus: self.modulus,
            exponent,
        })
    }

    /// Narrows to the private half.
    ///
    /// # Errors
    /// [`Rsa16Error::KeyUnavailable`] if `d` is absent.
    pub fn private_key(&self) -> Result<PrivateKey> {
        let exponent = self
            .private_exponent
            .ok_or(Rsa16Error::KeyUnavailable(KeyHalf::Private))?;
        Ok(PrivateKey {
            modulus: self.modulus,
            exponent,
        })
    }

    /// Requires both halves.
    ///
    /// # Errors
    /// [`Rsa16Error::KeyUnavailable`] naming the first missing half.
    pub fn key_pair(&self) -> Result<KeyPair> {
        let public = self.public_key()?;
        let private = self.private_key()?;
        Ok(KeyPair {
            modulus: self.modulus,
            public_exponent: public.exponent,
            private_exponent: private.exponent,
        })
    }
}

impl RsaKey for KeyTriple {
    fn modulus(&self) -> u16 {
        self.modulus
    }

    fn triple(&self) -> KeyTriple {
        *self
    }
}

/// Public key `(n, e)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey {
    modulus: u16,
    exponent: u16,
}

impl PublicKey {
    /// # Errors
    /// [`Rsa16Error::ModulusTooSmall`] if `n < 256`,
    /// [`Rsa16Error::KeyUnavailable`] if `e == 0`.
    pub fn new(modulus: u16, exponent: u16) -> Result<Self> {
        Ok(Self {
            modulus: check_modulus(modulus)?,
            exponent: check_exponent(exponent, KeyHalf::Public)?,
        })
    }

    pub fn exponent(&self) -> u16 {
        self.exponent
    }
}

impl RsaKey for PublicKey {
    fn modulus(&self) -> u16 {
        self.modulus
    }

    fn triple(&self) -> KeyTriple {
        KeyTriple {
            modulus: self.modulus,
            public_exponent: Some(self.exponent),
            private_exponent: None,
        }
    }
}

impl PublicHalf for PublicKey {
    fn public_exponent(&self) -> u16 {
        self.exponent
    }
}

/// Private key `(n, d)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrivateKey {
    modulus: u16,
    exponent: u16,
}

impl PrivateKey {
    /// # Errors
    /// [`Rsa16Error::ModulusTooSmall`] if `n < 256`,
    /// [`Rsa16Error::KeyUnavailable`] if `d == 0`.
    pub fn new(modulus: u16, exponent: u16) -> Result<Self> {
        Ok(Self {
            modulus: check_modulus(modulus)?,
            exponent: check_exponent(exponent, KeyHalf::Private)?,
        })
    }

    pub fn exponent(&self) -> u16 {
        self.exponent
    }
}

impl RsaKey for PrivateKey {
    fn modulus(&self) -> u16 {
        self.modulus
    }

    fn triple(&self) -> KeyTriple {
        KeyTriple {
            modulus: self.modulus,
            public_exponent: None,
            private_exponent: Some(self.exponent),
        }
    }
}

impl PrivateHalf for PrivateKey {
    fn private_exponent(&self) -> u16 {
        self.exponent
    }
}

/// Full key pair `(n, e, d)`.
///
/// Nothing checks that `e` and `d` actually invert each other; keys from
/// [`generate_keys`](super::generate_keys) always do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyPair {
    modulus: u16,
    public_exponent: u16,
    private_exponent: u16,
}

impl KeyPair {
    /// # Errors
    /// [`Rsa16Error::ModulusTooSmall`] if `n < 256`,
    /// [`Rsa16Error::KeyUnavailable`] if either exponent is `0`.
    pub fn new(modulus: u16, public_exponent: u16, private_exponent: u16) -> Result<Self> {
        Ok(Self {
            modulus: check_modulus(modulus)?,
            public_exponent: check_exponent(public_exponent, KeyHalf::Public)?,
            private_exponent: check_exponent(private_exponent, KeyHalf::Private)?,
        })
    }

    /// The `(n, e)` half, for handing to a peer.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            modulus: self.modulus,
            exponent: self.public_exponent,
        }
    }

    /// The `(n, d)` half.
    pub fn private_key(&self) -> PrivateKey {
        PrivateKey {
            modulus: self.modulus,
            exponent: self.private_exponent,
        }
    }
}

impl RsaKey for KeyPair {
    fn modulus(&self) -> u16 {
        self.modulus
    }

    fn triple(&self) -> KeyTriple {
        KeyTriple {
            modulus: self.modulus,
            public_exponent: Some(self.public_exponent),
            private_exponent: Some(self.private_exponent),
        }
    }
}

impl PublicHalf for KeyPair {
    fn public_exponent(&self) -> u16 {
        self.public_exponent
    }
}

impl PrivateHalf for KeyPair {
    fn private_exponent(&self) -> u16 {
        self.private_exponent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_exponents_become_absent() {
        let triple = KeyTriple::from_raw(37909, 5707, 0).unwrap();
        assert_eq!(triple.public_exponent(), Some(5707));
        assert_eq!(triple.private_exponent(), None);
        assert_eq!(triple.to_raw(), (37909, 5707, 0));
    }

    #[test]
    fn narrowing_reports_missing_half() {
        let public_only = KeyTriple::from_raw(37909, 5707, 0).unwrap();
        assert!(public_only.public_key().is_ok());
        assert_eq!(
            public_only.private_key(),
            Err(Rsa16Error::KeyUnavailable(KeyHalf::Private))
        );
        assert_eq!(
            public_only.key_pair(),
            Err(Rsa16Error::KeyUnavailable(KeyHalf::Private))
        );

        let private_only = KeyTriple::from_raw(37909, 0, 25427).unwrap();
        assert_eq!(
            private_only.key_pair(),
            Err(Rsa16Error::KeyUnavailable(KeyHalf::Public))
        );
    }

    #[test]
    fn small_modulus_rejected() {
        assert_eq!(
            KeyTriple::from_raw(255, 3, 7),
            Err(Rsa16Error::ModulusTooSmall(255))
        );
        assert_eq!(
            KeyPair::new(0, 3, 7),
            Err(Rsa16Error::ModulusTooSmall(0))
        );
        assert!(PublicKey::new(256, 3).is_ok());
    }

    #[test]
    fn typed_constructors_reject_sentinel() {
        assert_eq!(
            PublicKey::new(37909, 0),
            Err(Rsa16Error::KeyUnavailable(KeyHalf::Public))
        );
        assert_eq!(
            PrivateKey::new(37909, 0),
            Err(Rsa16Error::KeyUnavailable(KeyHalf::Private))
        );
        assert_eq!(
            KeyPair::new(37909, 5707, 0),
            Err(Rsa16Error::KeyUnavailable(KeyHalf::Private))
        );
    }

    #[test]
    fn pair_splits_and_round_trips_through_triple() {
        let pair = KeyPair::new(37909, 5707, 25427).unwrap();

        assert_eq!(pair.public_key(), PublicKey::new(37909, 5707).unwrap());
        assert_eq!(pair.private_key(), PrivateKey::new(37909, 25427).unwrap());
        assert_eq!(pair.triple().key_pair().unwrap(), pair);
        assert_eq!(pair.public_key().triple().to_raw(), (37909, 5707, 0));
        assert_eq!(pair.private_key().triple().to_raw(), (37909, 0, 25427));
    }
}
