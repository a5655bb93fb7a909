//! Enrollment → challenge → response → premaster agreement.

use rand::rngs::OsRng;

use purse_srp::{
    ClientHandshake, Enrollment, HashAlgorithm, NamedGroup, ServerHandshake, ServerState,
    SrpError, SrpPolicy,
};

fn policy(group: NamedGroup) -> SrpPolicy {
    SrpPolicy {
        group,
        allowed_algorithms: HashAlgorithm::ALL.to_vec(),
        default_algorithm: HashAlgorithm::Sha256,
    }
}

/// Run one login; returns whether both sides derived the same secret.
fn login(enrollment: &Enrollment, password: &str, policy: &SrpPolicy) -> bool {
    let mut server = ServerHandshake::start(
        &mut OsRng,
        enrollment.group,
        enrollment.algorithm,
        enrollment.credentials.clone(),
    )
    .expect("server start");
    let challenge = server.challenge();

    let client = ClientHandshake::start(&mut OsRng, &enrollment.identity).expect("client start");
    let response = client
        .respond(password, &challenge, policy)
        .expect("client respond");

    let server_s = server
        .compute_premaster(&response.a_pub)
        .expect("server premaster");
    server.finish().expect("finish");
    assert_eq!(server.state(), ServerState::Done);
    server_s == response.premaster
}

#[test]
fn every_algorithm_agrees_on_1024_bit_group() {
    let policy = policy(NamedGroup::Rfc5054_1024);
    for algorithm in HashAlgorithm::ALL {
        let enrollment = Enrollment::create(
            &mut OsRng,
            "alice@example.com",
            "s3cret",
            NamedGroup::Rfc5054_1024,
            algorithm,
        )
        .unwrap();
        assert!(
            login(&enrollment, "s3cret", &policy),
            "premaster mismatch with {algorithm}"
        );
    }
}

#[test]
fn default_group_agrees() {
    let policy = SrpPolicy::default();
    let enrollment = Enrollment::create(
        &mut OsRng,
        "bob",
        "hunter2",
        policy.group,
        policy.default_algorithm,
    )
    .unwrap();
    assert!(login(&enrollment, "hunter2", &policy));
}

#[test]
fn larger_groups_agree() {
    for group in [NamedGroup::Rfc5054_1536, NamedGroup::Rfc5054_3072] {
        let policy = policy(group);
        let enrollment =
            Enrollment::create(&mut OsRng, "carol", "pw", group, HashAlgorithm::Sha512).unwrap();
        assert!(login(&enrollment, "pw", &policy), "mismatch in {group}");
    }
}

#[test]
fn wrong_password_never_agrees() {
    let policy = policy(NamedGroup::Rfc5054_1024);
    let enrollment = Enrollment::create(
        &mut OsRng,
        "dave",
        "right",
        NamedGroup::Rfc5054_1024,
        HashAlgorithm::Blake2s256,
    )
    .unwrap();
    assert!(!login(&enrollment, "wrong", &policy));
    assert!(!login(&enrollment, "Right", &policy));
    assert!(!login(&enrollment, "", &policy));
}

#[test]
fn unicode_identity_and_password() {
    let policy = policy(NamedGroup::Rfc5054_1024);
    let enrollment = Enrollment::create(
        &mut OsRng,
        "zoë@exämple.org",
        "пароль 🔑",
        NamedGroup::Rfc5054_1024,
        HashAlgorithm::Sha256,
    )
    .unwrap();
    assert!(login(&enrollment, "пароль 🔑", &policy));
}

#[test]
fn client_rejects_group_mismatch_with_policy() {
    let enrollment = Enrollment::create(
        &mut OsRng,
        "erin",
        "pw",
        NamedGroup::Rfc5054_1024,
        HashAlgorithm::Sha256,
    )
    .unwrap();
    let server = ServerHandshake::start(
        &mut OsRng,
        enrollment.group,
        enrollment.algorithm,
        enrollment.credentials,
    )
    .unwrap();
    let client = ClientHandshake::start(&mut OsRng, "erin").unwrap();
    let result = client.respond("pw", &server.challenge(), &SrpPolicy::default());
    assert!(matches!(result, Err(SrpError::InsufficientSecurity(_))));
}

#[test]
fn challenge_serializes_as_hex() {
    let enrollment = Enrollment::create(
        &mut OsRng,
        "frank",
        "pw",
        NamedGroup::Rfc5054_1024,
        HashAlgorithm::Sha256,
    )
    .unwrap();
    let server = ServerHandshake::start(
        &mut OsRng,
        enrollment.group,
        enrollment.algorithm,
        enrollment.credentials,
    )
    .unwrap();
    let challenge = server.challenge();
    let json = serde_json::to_value(&challenge).unwrap();
    assert_eq!(json["g"], "02");
    assert_eq!(json["algorithm"], "sha256");
    assert!(json["n"].as_str().unwrap().starts_with("eeaf0ab9"));
    let back: purse_srp::ServerChallenge = serde_json::from_value(json).unwrap();
    assert_eq!(back, challenge);
}
