use std::thread;

use aes_core::{encrypt_block, Aes128Key};
use aes_tbox::{generate_tables, tables, TBoxCipher};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[test]
fn concurrent_first_use_sees_complete_tables() {
    let expected = generate_tables();
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| tables() as *const _ as usize))
        .collect();
    let addrs: Vec<usize> = handles
        .into_iter()
        .map(|h| h.join().expect("reader thread"))
        .collect();
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(*tables(), expected);
}

#[test]
fn ciphers_on_many_threads_agree_with_reference() {
    let handles: Vec<_> = (0..4u8)
        .map(|seed| {
            thread::spawn(move || {
                let mut rng = ChaCha20Rng::from_seed([seed; 32]);
                for _ in 0..64 {
                    let mut key_bytes = [0u8; 16];
                    let mut block = [0u8; 16];
                    rng.fill_bytes(&mut key_bytes);
                    rng.fill_bytes(&mut block);
                    let key = Aes128Key::from(key_bytes);
                    let fast = TBoxCipher::new(&key).encrypt_block(&block);
                    assert_eq!(fast, encrypt_block(&key, &block));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("cipher thread");
    }
}

#[test]
fn chained_encryption_matches_reference() {
    let key = Aes128Key::from([
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ]);
    let cipher = TBoxCipher::new(&key);
    let mut fast = [
        0xab, 0xcd, 0xef, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x01, 0x23, 0x45, 0x67,
        0x89,
    ];
    let mut reference = fast;
    for _ in 0..1000 {
        fast = cipher.encrypt_block(&fast);
        reference = encrypt_block(&key, &reference);
    }
    assert_eq!(fast, reference);
}
