//! Unknown identities must be indistinguishable from wrong passwords.

use rand::rngs::OsRng;

use purse_srp::{
    ClientHandshake, FakeCredentialGenerator, HashAlgorithm, NamedGroup, ServerHandshake,
    ServerSecret, SrpPolicy,
};

const SECRET: [u8; 32] = [0x5A; 32];

fn generator() -> FakeCredentialGenerator {
    FakeCredentialGenerator::new(ServerSecret::new(&SECRET).unwrap())
}

#[test]
fn decoys_survive_restart() {
    let group = NamedGroup::Rfc5054_1024.parameters();
    // Two generators built from the same persisted secret stand in for two
    // process lifetimes.
    let first = generator()
        .credentials("ghost", group, HashAlgorithm::Sha256)
        .unwrap();
    let second = generator()
        .credentials("ghost", group, HashAlgorithm::Sha256)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn decoy_salts_differ_per_identity() {
    let gen = generator();
    let salts: Vec<_> = (0..50).map(|i| gen.salt(&format!("user{i}"))).collect();
    for (i, a) in salts.iter().enumerate() {
        for b in &salts[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn decoy_handshake_never_agrees() {
    let policy = SrpPolicy {
        group: NamedGroup::Rfc5054_1024,
        ..SrpPolicy::default()
    };
    let credentials = generator()
        .credentials("nobody", NamedGroup::Rfc5054_1024.parameters(), HashAlgorithm::Sha256)
        .unwrap();
    for guess in ["", "password", "nobody", "salt"] {
        let mut server = ServerHandshake::start(
            &mut OsRng,
            NamedGroup::Rfc5054_1024,
            HashAlgorithm::Sha256,
            credentials.clone(),
        )
        .unwrap();
        let client = ClientHandshake::start(&mut OsRng, "nobody").unwrap();
        let response = client.respond(guess, &server.challenge(), &policy).unwrap();
        let server_s = server.compute_premaster(&response.a_pub).unwrap();
        assert_ne!(server_s, response.premaster, "guess {guess:?} matched decoy");
    }
}

#[test]
fn decoy_challenge_has_real_shape() {
    let group = NamedGroup::Rfc5054_1024;
    let credentials = generator()
        .credentials("nobody", group.parameters(), HashAlgorithm::Sha256)
        .unwrap();
    let server =
        ServerHandshake::start(&mut OsRng, group, HashAlgorithm::Sha256, credentials).unwrap();
    let challenge = server.challenge();
    assert!(&challenge.b_pub < group.parameters().n());
    // HMAC-SHA256 output: at most 32 bytes of salt, like a real enrollment.
    assert!(challenge.salt.bits() <= 256);
}
