//! Digest known-answer tests (empty string and "abc").

use purse_srp::digest::digest_bytes;
use purse_srp::{hash, int_to_hex, HashAlgorithm, HashInput};

struct DigestVector {
    algorithm: HashAlgorithm,
    empty: &'static str,
    abc: &'static str,
}

const VECTORS: [DigestVector; 7] = [
    DigestVector {
        algorithm: HashAlgorithm::Sha1,
        empty: "da39a3ee5e6b4b0d3255bfef95601890afd80709",
        abc: "a9993e364706816aba3e25717850c26c9cd0d89d",
    },
    DigestVector {
        algorithm: HashAlgorithm::Sha256,
        empty: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        abc: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    DigestVector {
        algorithm: HashAlgorithm::Sha384,
        empty: concat!(
            "38b060a751ac96384cd9327eb1b1e36a21fdb71114be0743",
            "4c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b",
        ),
        abc: concat!(
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded163",
            "1a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7",
        ),
    },
    DigestVector {
        algorithm: HashAlgorithm::Sha512,
        empty: concat!(
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce",
            "47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
        ),
        abc: concat!(
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a",
            "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
        ),
    },
    DigestVector {
        algorithm: HashAlgorithm::Blake2b512,
        empty: concat!(
            "786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419",
            "d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce",
        ),
        abc: concat!(
            "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1",
            "7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923",
        ),
    },
    DigestVector {
        algorithm: HashAlgorithm::Blake2s256,
        empty: "69217a3079908094e11121d042354a7c1f55b6482ca1a51e1b250dfd1ed0eef9",
        abc: "508c5e8c327c14e2e1a72ba34eeb452f37458b209ed63a294d999b4c86675982",
    },
    DigestVector {
        algorithm: HashAlgorithm::Blake3,
        empty: "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262",
        abc: "6437b3ac38465133ffb63b75273a8db548c558465d79db03fd359c6cd5bd9d85",
    },
];

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[test]
fn digest_bytes_match_reference() {
    for v in &VECTORS {
        assert_eq!(
            to_hex(&digest_bytes(v.algorithm, b"")),
            v.empty,
            "{} empty-string digest",
            v.algorithm
        );
        assert_eq!(
            to_hex(&digest_bytes(v.algorithm, b"abc")),
            v.abc,
            "{} \"abc\" digest",
            v.algorithm
        );
    }
}

#[test]
fn hash_returns_digest_as_integer() {
    for v in &VECTORS {
        let value = hash(v.algorithm, HashInput::Text("abc")).unwrap();
        let hex = int_to_hex(&value);
        // None of the "abc" digests start with a zero byte.
        assert_eq!(hex, v.abc, "{}", v.algorithm);
    }
}

#[test]
fn sha1_of_empty_text() {
    let value = hash(HashAlgorithm::Sha1, HashInput::Text("")).unwrap();
    assert_eq!(int_to_hex(&value), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
}
