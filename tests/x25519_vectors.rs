use x25519_core::keys::x25519::scalarmult;

fn parse_hex(s: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).unwrap();
    }
    out
}

fn to_hex(bytes: [u8; 32]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[test]
fn rfc7748_test_vector_1() {
    let k = parse_hex("a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4");
    let u = parse_hex("e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c");
    let expected = "c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552";

    let result = scalarmult(&k, &u).unwrap();
    assert_eq!(to_hex(result), expected);
}

#[test]
fn rfc7748_test_vector_2() {
    let k = parse_hex("4b66e9d4d1b4673c5ad22691957d6af5c11b6421e0ea01d42ca4169e7918ba0d");
    let u = parse_hex("e5210f12786811d3f4b7959d0538ae2c31dbe7106fc03c3efc4cd549c715a493");
    let expected = "95cbde9476e8907d7aade45cb4b873f88b595a68799fa152e6f8f7647aac7957";

    let result = scalarmult(&k, &u).unwrap();
    assert_eq!(to_hex(result), expected);
}

#[test]
fn iterated_vector_one_round() {
    let mut k = [0u8; 32];
    k[0] = 9;
    let u = k;

    let result = scalarmult(&k, &u).unwrap();
    assert_eq!(
        to_hex(result),
        "422c8e7a6227d7bca1350b3e2bb7279f7897b87bb6854b783c60e80311ae3079"
    );
}

#[test]
fn iterated_vector_one_thousand_rounds() {
    let mut k = [0u8; 32];
    k[0] = 9;
    let mut u = k;

    for _ in 0..1000 {
        let next = scalarmult(&k, &u).unwrap();
        u = k;
        k = next;
    }

    assert_eq!(
        to_hex(k),
        "684cf59ba83309552800ef566f2f4d3c1c3887c49360e3875f2eb94d99532c51"
    );
}

#[test]
#[ignore = "expensive: 1,000,000 ladder iterations"]
fn iterated_vector_one_million_rounds() {
    let mut k = [0u8; 32];
    k[0] = 9;
    let mut u = k;

    for _ in 0..1_000_000 {
        let next = scalarmult(&k, &u).unwrap();
        u = k;
        k = next;
    }

    assert_eq!(
        to_hex(k),
        "7c3911e0ab2586fd864497297e575e6f3bc601c0883c30df5f4dd2d24f665424"
    );
}

#[test]
fn full_diffie_hellman_vector() {
    use x25519_core::keys::x25519::{compute_shared_secret, generate_public_key};

    let alice_priv = parse_hex("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a");
    let bob_priv = parse_hex("5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb");

    let alice_pub = generate_public_key(&alice_priv).unwrap();
    let bob_pub = generate_public_key(&bob_priv).unwrap();

    assert_eq!(
        to_hex(alice_pub),
        "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a"
    );
    assert_eq!(
        to_hex(bob_pub),
        "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f"
    );

    let shared = compute_shared_secret(&alice_priv, &bob_pub).unwrap();
    assert_eq!(
        to_hex(shared),
        "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742"
    );
    assert_eq!(shared, compute_shared_secret(&bob_priv, &alice_pub).unwrap());
}

#[test]
fn u_coordinate_top_bit_is_ignored() {
    let mut k = [0u8; 32];
    k[0] = 9;

    let mut u_high = [0u8; 32];
    u_high[31] = 0xff;
    let mut u_low = [0u8; 32];
    u_low[31] = 0x7f;

    assert_eq!(
        scalarmult(&k, &u_high).unwrap(),
        scalarmult(&k, &u_low).unwrap()
    );
}

#[test]
fn u_coordinate_0x80_decodes_to_zero() {
    let mut k = [0u8; 32];
    k[0] = 9;

    let mut u = [0u8; 32];
    u[31] = 0x80;

    assert_eq!(scalarmult(&k, &u).unwrap(), [0u8; 32]);
}

#[test]
fn scalarmult_with_zero_point_is_zero() {
    let k = [0x42u8; 32];
    let u = [0u8; 32];

    assert_eq!(scalarmult(&k, &u).unwrap(), [0u8; 32]);
}

#[test]
fn wrong_length_inputs_are_rejected() {
    let k32 = [9u8; 32];
    assert!(scalarmult(&[9u8; 31], &k32).is_err());
    assert!(scalarmult(&k32, &[9u8; 33]).is_err());
    assert!(scalarmult(&[], &[]).is_err());
}
