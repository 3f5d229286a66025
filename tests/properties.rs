use proptest::prelude::*;

use rsa16::math::{extended_gcd, mod_inverse, mod_pow};
use rsa16::{Csprng, KeyGenParams, KeyPair, Rsa16, crc16, generate_keys_with};

fn arb_key() -> impl Strategy<Value = KeyPair> {
    any::<[u8; 32]>().prop_map(|seed| {
        generate_keys_with(&mut Csprng::from_seed(seed), &KeyGenParams::default())
            .expect("default parameters always yield a key")
    })
}

fn arb_message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..300)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn stream_round_trip(key in arb_key(), iv in any::<u8>(), message in arb_message()) {
        let mut sender = Rsa16::with_iv(key.public_key(), iv);
        let mut receiver = Rsa16::with_iv(key.private_key(), iv);

        let cipher = sender.encrypt_stream(&message);
        prop_assert_eq!(cipher.len(), 2 * message.len());
        prop_assert_eq!(receiver.decrypt_stream(&cipher).unwrap(), message);
    }

    #[test]
    fn chain_continues_across_calls(
        key in arb_key(),
        a in arb_message(),
        b in arb_message(),
    ) {
        let mut split = Rsa16::new(key);
        let mut joined = split.encrypt_stream(&a);
        joined.extend(split.encrypt_stream(&b));

        let whole: Vec<u8> = a.iter().chain(&b).copied().collect();
        let mut single = Rsa16::new(key);
        prop_assert_eq!(single.encrypt_stream(&whole), joined.clone());

        let mut receiver = Rsa16::new(key);
        let mut recovered = receiver.decrypt_stream(&joined[..2 * a.len()]).unwrap();
        recovered.extend(receiver.decrypt_stream(&joined[2 * a.len()..]).unwrap());
        prop_assert_eq!(recovered, whole);
    }

    #[test]
    fn byte_operations_invert(key in arb_key(), m in any::<u8>()) {
        let rsa = Rsa16::new(key);
        prop_assert_eq!(rsa.decrypt_byte(rsa.encrypt_byte(m)), m);
        prop_assert!(rsa.verify_byte(m, rsa.sign_byte(m)));
    }

    #[test]
    fn signatures_verify(key in arb_key(), message in arb_message()) {
        let rsa = Rsa16::new(key);

        let signature = rsa.sign_stream(&message);
        prop_assert!(rsa.verify_stream(&message, &signature));

        let checksum = rsa.sign_checksum(&message);
        prop_assert!(rsa.verify_checksum(&message, checksum));
    }

    #[test]
    fn crc_detects_single_bit_flip(
        message in prop::collection::vec(any::<u8>(), 1..128),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut flipped = message.clone();
        flipped[index.index(message.len())] ^= 1 << bit;
        prop_assert_ne!(crc16(&message), crc16(&flipped));
    }

    #[test]
    fn extended_gcd_is_bezout(a in 0i64..70_000, b in 0i64..70_000) {
        let (g, x, y) = extended_gcd(a, b);
        prop_assert_eq!(a * x + b * y, g);
    }

    #[test]
    fn inverse_multiplies_to_one(a in 1i64..70_000, m in 2i64..70_000) {
        if let Ok(inv) = mod_inverse(a, m) {
            prop_assert!((0..m).contains(&inv));
            prop_assert_eq!((a * inv).rem_euclid(m), 1);
        } else {
            prop_assert_ne!(extended_gcd(a, m).0, 1);
        }
    }

    #[test]
    fn mod_pow_splits_exponent(base in any::<u16>(), x in 0u16..1000, y in 0u16..1000, n in 256u16..) {
        let lhs = mod_pow(base, x + y, n);
        let rhs = (u32::from(mod_pow(base, x, n)) * u32::from(mod_pow(base, y, n)) % u32::from(n)) as u16;
        prop_assert_eq!(lhs, rhs);
    }
}
