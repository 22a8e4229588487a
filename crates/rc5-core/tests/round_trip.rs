use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rc5_core::{derive_key, CipherConfig, Rc5Cipher, Rc5Error, WordSize};

/// (word bits, rounds, key bytes)
const PARAMETER_GRID: [(u32, u32, usize); 25] = [
    (16, 8, 16),
    (32, 12, 16),
    (64, 16, 32),
    (16, 20, 16),
    (32, 8, 32),
    (64, 12, 8),
    (16, 16, 8),
    (32, 20, 16),
    (64, 8, 32),
    (16, 12, 16),
    (32, 16, 8),
    (64, 20, 16),
    (16, 8, 32),
    (32, 12, 32),
    (64, 16, 16),
    (16, 20, 8),
    (32, 8, 8),
    (64, 12, 16),
    (16, 16, 32),
    (32, 20, 32),
    (64, 8, 16),
    (16, 12, 8),
    (32, 16, 32),
    (64, 20, 8),
    (16, 8, 8),
];

fn seeded_rng(seed: u64) -> ChaCha20Rng {
    let mut seed_bytes = [0u8; 32];
    seed_bytes[..8].copy_from_slice(&seed.to_le_bytes());
    ChaCha20Rng::from_seed(seed_bytes)
}

#[test]
fn rc5_32_12_16_ciphertext_is_stable() {
    let key = derive_key(b"abcd", 16);
    assert_eq!(hex::encode(&key), "e2fc714c4727ee9395f324cd2e7f331f");

    let cipher = Rc5Cipher::with_params(32, 12, 16).unwrap();
    let ciphertext = cipher.encode(b"Security is cool", &key);
    assert_eq!(
        hex::encode(&ciphertext),
        "cb59a1acd79b3b7746094cec83687ccab68b5eeae4007155c77e43a04a784547"
    );
    assert_eq!(cipher.decode(&ciphertext, &key).unwrap(), b"Security is cool");
}

#[test]
fn passphrase_message_round_trips_across_grid() {
    let message = b"Security is cool";
    for (w, r, b) in PARAMETER_GRID {
        let key = derive_key(b"abcd", b);
        let cipher = Rc5Cipher::with_params(w, r, b).unwrap();
        let encoded = cipher.encode(message, &key);
        let decoded = cipher.decode(&encoded, &key).unwrap();
        assert_eq!(decoded, message, "RC5-{w}/{r}/{b}");
    }
}

#[test]
fn random_plaintexts_round_trip_across_grid() {
    let mut rng = seeded_rng(7);
    for (w, r, b) in PARAMETER_GRID {
        let cipher = Rc5Cipher::with_params(w, r, b).unwrap();
        for _ in 0..8 {
            let mut key = vec![0u8; b];
            rng.fill_bytes(&mut key);
            let mut plaintext = vec![0u8; rng.gen_range(0..100)];
            rng.fill_bytes(&mut plaintext);

            let encoded = cipher.encode(&plaintext, &key);
            assert_eq!(cipher.decode(&encoded, &key).unwrap(), plaintext);
        }
    }
}

#[test]
fn empty_plaintext_round_trips() {
    for word_size in WordSize::ALL {
        let cipher = Rc5Cipher::new(CipherConfig {
            word_size,
            ..CipherConfig::default()
        })
        .unwrap();
        let encoded = cipher.encode(&[], b"key");
        assert_eq!(encoded.len(), 2 * word_size.block_size());
        assert!(cipher.decode(&encoded, b"key").unwrap().is_empty());
    }
}

#[test]
fn output_length_counts_iv_and_padding() {
    for word_size in WordSize::ALL {
        let cipher = Rc5Cipher::new(CipherConfig {
            word_size,
            ..CipherConfig::default()
        })
        .unwrap();
        let bs = cipher.block_size();
        for len in 0..50 {
            let encoded = cipher.encode(&vec![0x5A; len], b"key");
            assert_eq!(encoded.len(), bs + bs * (len + 1).div_ceil(bs), "len {len}");
        }
    }
}

#[test]
fn aligned_plaintext_gets_full_padding_block() {
    for word_size in WordSize::ALL {
        let cipher = Rc5Cipher::new(CipherConfig {
            word_size,
            ..CipherConfig::default()
        })
        .unwrap();
        let bs = cipher.block_size();
        let plaintext = vec![0x11; 2 * bs];
        let encoded = cipher.encode(&plaintext, b"key");
        assert_eq!(encoded.len(), bs + 3 * bs);
        assert_eq!(cipher.decode(&encoded, b"key").unwrap(), plaintext);
    }
}

#[test]
fn wrong_key_never_recovers_plaintext() {
    let mut rng = seeded_rng(11);
    for (w, r, b) in PARAMETER_GRID {
        let cipher = Rc5Cipher::with_params(w, r, b).unwrap();
        let mut plaintext = vec![0u8; 33];
        rng.fill_bytes(&mut plaintext);
        let right = derive_key(b"right", b);
        let wrong = derive_key(b"wrong", b);

        let encoded = cipher.encode(&plaintext, &right);
        match cipher.decode(&encoded, &wrong) {
            Ok(decoded) => assert_ne!(decoded, plaintext, "RC5-{w}/{r}/{b}"),
            Err(err) => assert!(
                matches!(err, Rc5Error::InvalidPadding { .. }),
                "unexpected error {err}"
            ),
        }
    }
}

#[test]
fn encoding_is_deterministic() {
    let cipher = Rc5Cipher::with_params(64, 12, 16).unwrap();
    let first = cipher.encode(b"same input", b"same key");
    let second = cipher.encode(b"same input", b"same key");
    assert_eq!(first, second);
}
