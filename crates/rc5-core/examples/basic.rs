//! Encrypts a message under each word size and decrypts it back.

use rc5_core::{derive_key, CipherConfig, Rc5Cipher, WordSize};

fn main() {
    let message = b"Security is cool";
    let key = derive_key(b"abcd", 16);

    for word_size in WordSize::ALL {
        let config = CipherConfig {
            word_size,
            rounds: 12,
            key_len: 16,
        };
        let cipher = Rc5Cipher::new(config).unwrap();
        let ciphertext = cipher.encode(message, &key);
        let decrypted = cipher.decode(&ciphertext, &key).unwrap();
        assert_eq!(decrypted, message);
        println!("{config}: {} ciphertext bytes", ciphertext.len());
    }

    println!("md5(\"abc\") = {}", md5_core::digest_hex(b"abc"));
}
