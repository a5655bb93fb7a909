//! RFC 5054 Appendix B SRP test vectors.
//!
//! I = "alice", P = "password123", H = SHA-1, 1024-bit group.

use num_bigint::BigUint;
use purse_srp::{
    client_premaster_secret, client_public_value, compute_u, compute_x, hex_to_int, int_to_hex,
    server_premaster_secret, server_public_value, verifier, ClientHandshake, Credentials,
    HashAlgorithm, NamedGroup, PrivateValue, ServerHandshake, ServerPublic, SrpPolicy,
};

const IDENTITY: &str = "alice";
const PASSWORD: &str = "password123";
const ALG: HashAlgorithm = HashAlgorithm::Sha1;

const SALT: &str = "BEB25379D1A8581EB5A727673A2441EE";

const K: &str = "7556AA045AEF2CDD07ABAF0F665C3E818913186F";

const X: &str = "94B7555AABE9127CC58CCF4993DB6CF84D16C124";

const V: &str = concat!(
    "7E273DE8696FFC4F4E337D05B4B375BEB0DDE1569E8FA00A9886D812",
    "9BADA1F1822223CA1A605B530E379BA4729FDC59F105B4787E5186F5",
    "C671085A1447B52A48CF1970B4FB6F8400BBF4CEBFBB168152E08AB5",
    "EA53D15C1AFF87B2B9DA6E04E058AD51CC72BFC9033B564E26480D78",
    "E955A5E29E7AB245DB2BE315E2099AFB",
);

const A_PRIV: &str = "60975527035CF2AD1989806F0407210BC81EDC04E2762A56AFD529DDDA2D4393";

const B_PRIV: &str = "E487CB59D31AC550471E81F00F6928E01DDA08E974A004F49E61F5D105284D20";

const A_PUB: &str = concat!(
    "61D5E490F6F1B79547B0704C436F523DD0E560F0C64115BB72557EC4",
    "4352E8903211C04692272D8B2D1A5358A2CF1B6E0BFCF99F921530EC",
    "8E39356179EAE45E42BA92AEACED825171E1E8B9AF6D9C03E1327F44",
    "BE087EF06530E69F66615261EEF54073CA11CF5858F0EDFDFE15EFEA",
    "B349EF5D76988A3672FAC47B0769447B",
);

const B_PUB: &str = concat!(
    "BD0C61512C692C0CB6D041FA01BB152D4916A1E77AF46AE105393011",
    "BAF38964DC46A0670DD125B95A981652236F99D9B681CBF87837EC99",
    "6C6DA04453728610D0C6DDB58B318885D7D82C7F8DEB75CE7BD4FBAA",
    "37089E6F9C6059F388838E7A00030B331EB76840910440B1B27AAEAE",
    "EB4012B7D7665238A8E3FB004B117B58",
);

const U: &str = "CE38B9593487DA98554ED47D70A7AE5F462EF019";

const S: &str = concat!(
    "B0DC82BABCF30674AE450C0287745E7990A3381F63B387AAF271A10D",
    "233861E359B48220F7C4693C9AE12B0A6F67809F0876E2D013800D6C",
    "41BB59B6D5979B5C00A172B4A2A5903A0BDCAF8A709585EB2AFAFA8F",
    "3499B200210DCC1F10EB33943CD67FC88A2F39A4BE5BEC4EC0A3212D",
    "C346D7E474B29EDE8A469FFECA686E5A",
);

fn int(hex: &str) -> BigUint {
    hex_to_int(hex).unwrap()
}

#[test]
fn rfc5054_modulus_and_generator() {
    let group = NamedGroup::Rfc5054_1024.parameters();
    assert_eq!(
        int_to_hex(group.n()),
        concat!(
            "eeaf0ab9adb38dd69c33f80afa8fc5e86072618775ff3c0b9ea2314c",
            "9c256576d674df7496ea81d3383b4813d692c6e0e0d5d8e250b98be4",
            "8e495c1d6089dad15dc7d7b46154d6b6ce8ef4ad69b15d4982559b29",
            "7bcf1885c529f566660e57ec68edbc3c05726cc02fd4cbf4976eaa9a",
            "fd5138fe8376435b9fc61d2fc0eb06e3",
        )
    );
    assert_eq!(group.g(), &BigUint::from(2u8));
}

#[test]
fn rfc5054_k() {
    let k = NamedGroup::Rfc5054_1024.parameters().k(ALG).unwrap();
    assert_eq!(k, int(K));
}

#[test]
fn rfc5054_x() {
    let x = compute_x(&int(SALT), IDENTITY, PASSWORD, ALG).unwrap();
    assert_eq!(x, int(X));
}

#[test]
fn rfc5054_verifier() {
    let group = NamedGroup::Rfc5054_1024.parameters();
    let v = verifier(&int(SALT), IDENTITY, PASSWORD, group, ALG).unwrap();
    assert_eq!(v, int(V));
}

#[test]
fn rfc5054_client_public_value() {
    let group = NamedGroup::Rfc5054_1024.parameters();
    let a = PrivateValue::from_hex(A_PRIV).unwrap();
    assert_eq!(client_public_value(&a, group).unwrap(), int(A_PUB));
}

#[test]
fn rfc5054_server_public_value() {
    let group = NamedGroup::Rfc5054_1024.parameters();
    let b = PrivateValue::from_hex(B_PRIV).unwrap();
    assert_eq!(
        server_public_value(&b, &int(V), group, ALG).unwrap(),
        int(B_PUB)
    );
}

#[test]
fn rfc5054_u() {
    let group = NamedGroup::Rfc5054_1024.parameters();
    assert_eq!(compute_u(&int(A_PUB), &int(B_PUB), group, ALG).unwrap(), int(U));
}

#[test]
fn rfc5054_client_premaster_secret() {
    let group = NamedGroup::Rfc5054_1024.parameters();
    let a = PrivateValue::from_hex(A_PRIV).unwrap();
    let server = ServerPublic {
        group,
        salt: &int(SALT),
        b_pub: &int(B_PUB),
    };
    let s = client_premaster_secret(&a, IDENTITY, PASSWORD, &server, ALG).unwrap();
    assert_eq!(s.to_biguint(), int(S));
    assert_eq!(s.len(), 128);
}

#[test]
fn rfc5054_server_premaster_secret() {
    let group = NamedGroup::Rfc5054_1024.parameters();
    let b = PrivateValue::from_hex(B_PRIV).unwrap();
    let s = server_premaster_secret(&b, group, &int(V), &int(A_PUB), ALG).unwrap();
    assert_eq!(s.to_biguint(), int(S));
}

/// The same vectors driven through the handshake state machines.
#[test]
fn rfc5054_full_handshake() {
    let policy = SrpPolicy {
        group: NamedGroup::Rfc5054_1024,
        allowed_algorithms: vec![ALG],
        default_algorithm: ALG,
    };
    let credentials = Credentials {
        salt: int(SALT),
        verifier: int(V),
    };
    let mut server = ServerHandshake::with_private_value(
        NamedGroup::Rfc5054_1024,
        ALG,
        credentials,
        PrivateValue::from_hex(B_PRIV).unwrap(),
    )
    .unwrap();
    let challenge = server.challenge();
    assert_eq!(challenge.b_pub, int(B_PUB));

    let client =
        ClientHandshake::with_private_value(IDENTITY, PrivateValue::from_hex(A_PRIV).unwrap());
    let response = client.respond(PASSWORD, &challenge, &policy).unwrap();
    assert_eq!(response.a_pub, int(A_PUB));

    let server_s = server.compute_premaster(&response.a_pub).unwrap();
    assert_eq!(server_s, response.premaster);
    assert_eq!(server_s.to_biguint(), int(S));
}
