use crate::cipher::ChainState;
use crate::error::Result;
use crate::keys::{
    KeyGenParams, KeyPair, KeyTriple, PrivateHalf, PublicHalf, RsaKey, generate_keys_with,
};
use crate::math::mod_pow;
use crate::rng::{Csprng, RandomSource};

/// Initial value of both chaining registers unless another IV is given.
pub const DEFAULT_IV: u8 = 0x5C;

/// Textbook RSA over a 16-bit modulus, with a chained stream mode.
///
/// `K` decides which operations are available: [`KeyPair`] allows all of
/// them, [`PublicKey`](crate::keys::PublicKey) only encryption and
/// verification, [`PrivateKey`](crate::keys::PrivateKey) only decryption and
/// signing.
///
/// Stream encryption and decryption take `&mut self` because they advance
/// the chaining registers. To share one instance between threads, put it
/// behind a `Mutex`; interleaving two streams on one instance corrupts both.
///
/// # Examples
///
/// ```
/// use rsa16::{KeyPair, Rsa16};
///
/// let key = KeyPair::new(37909, 5707, 25427).unwrap();
/// let mut alice = Rsa16::new(key);
/// let mut bob = Rsa16::new(key);
///
/// let cipher = alice.encrypt_stream(b"hello");
/// assert_eq!(cipher.len(), 10);
/// assert_eq!(bob.decrypt_stream(&cipher).unwrap(), b"hello");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rsa16<K> {
    pub(crate) key: K,
    pub(crate) chain: ChainState,
}

impl<K: RsaKey> Rsa16<K> {
    /// Wraps `key` with both registers at [`DEFAULT_IV`].
    pub fn new(key: K) -> Self {
        Self::with_iv(key, DEFAULT_IV)
    }

    /// Wraps `key` with both registers at `iv`.
    pub fn with_iv(key: K, iv: u8) -> Self {
        Self {
            key,
            chain: ChainState::new(iv),
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Raw `(n, e, d)` view of the key.
    pub fn triple(&self) -> KeyTriple {
        self.key.triple()
    }

    pub fn modulus(&self) -> u16 {
        self.key.modulus()
    }

    pub fn chain(&self) -> &ChainState {
        &self.chain
    }

    /// Sets both registers to `iv`, which also becomes the rewind point.
    pub fn reset_iv(&mut self, iv: u8) {
        self.chain.reset(iv);
    }

    /// Returns both registers to the most recent IV seed.
    pub fn rewind(&mut self) {
        self.chain.rewind();
    }
}

impl Rsa16<KeyPair> {
    /// Builds a cipher from raw components.
    ///
    /// # Errors
    /// [`Rsa16Error::ModulusTooSmall`](crate::Rsa16Error::ModulusTooSmall) or
    /// [`Rsa16Error::KeyUnavailable`](crate::Rsa16Error::KeyUnavailable) if
    /// either exponent is the `0` sentinel.
    pub fn from_components(
        modulus: u16,
        public_exponent: u16,
        private_exponent: u16,
        iv: u8,
    ) -> Result<Self> {
        let key = KeyPair::new(modulus, public_exponent, private_exponent)?;
        Ok(Self::with_iv(key, iv))
    }

    /// Builds a cipher around a freshly generated key pair.
    ///
    /// # Errors
    /// See [`generate_keys`](crate::keys::generate_keys).
    pub fn generate() -> Result<Self> {
        Self::generate_with(&mut Csprng::new(), &KeyGenParams::default())
    }

    /// Like [`generate`](Self::generate), drawing from `rng` under `params`.
    ///
    /// # Errors
    /// See [`generate_keys_with`].
    pub fn generate_with<R>(rng: &mut R, params: &KeyGenParams) -> Result<Self>
    where
        R: RandomSource + ?Sized,
    {
        Ok(Self::new(generate_keys_with(rng, params)?))
    }
}

impl<K: PublicHalf> Rsa16<K> {
    /// `x^e mod n`.
    #[inline]
    pub(crate) fn public_op(&self, x: u16) -> u16 {
        mod_pow(x, self.key.public_exponent(), self.key.modulus())
    }

    /// Encrypts one byte into a 16-bit cipher value.
    pub fn encrypt_byte(&self, message: u8) -> u16 {
        self.public_op(u16::from(message))
    }
}

impl<K: PrivateHalf> Rsa16<K> {
    /// `x^d mod n`.
    #[inline]
    pub(crate) fn private_op(&self, x: u16) -> u16 {
        mod_pow(x, self.key.private_exponent(), self.key.modulus())
    }

    /// Decrypts a 16-bit cipher value, keeping the low byte.
    ///
    /// For a matching key pair,
    /// `decrypt_byte(encrypt_byte(m)) == m` for every byte `m`.
    pub fn decrypt_byte(&self, cipher: u16) -> u8 {
        self.private_op(cipher) as u8
    }
}
