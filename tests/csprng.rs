use x25519_core::rng::Csprng;

#[test]
fn csprng_is_deterministic_from_seed() {
    let seed = [0x42u8; 32];

    let mut rng1 = Csprng::from_seed(seed);
    let mut rng2 = Csprng::from_seed(seed);

    let mut a = [0u8; 128];
    let mut b = [0u8; 128];

    rng1.fill_bytes(&mut a);
    rng2.fill_bytes(&mut b);

    assert_eq!(a, b);
}

#[test]
fn csprng_rekey_changes_output() {
    let seed = [0xaau8; 32];
    let mut rng = Csprng::from_seed(seed);

    let mut a = [0u8; 64];
    let mut b = [0u8; 64];

    rng.fill_bytes(&mut a);
    rng.fill_bytes(&mut b);

    assert_ne!(a, b);
}

#[test]
fn csprng_output_is_not_all_zero() {
    let seed = [0u8; 32];
    let mut rng = Csprng::from_seed(seed);

    let mut out = [0u8; 64];
    rng.fill_bytes(&mut out);

    assert!(out.iter().any(|&b| b != 0));
}

#[test]
fn csprng_handles_buffers_spanning_multiple_blocks() {
    let mut rng = Csprng::from_seed([0x11u8; 32]);

    let mut out = [0u8; 200];
    rng.fill_bytes(&mut out);

    assert!(out.iter().any(|&b| b != 0));
}

#[test]
fn csprng_from_os_produces_varying_output() {
    let mut rng = Csprng::from_os();

    let mut a = [0u8; 32];
    let mut b = [0u8; 32];
    rng.fill_bytes(&mut a);
    rng.fill_bytes(&mut b);

    assert_ne!(a, b);
}
