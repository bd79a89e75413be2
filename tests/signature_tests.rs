use jornada::core::signature::{sign, verify};

#[test]
fn digest_is_64_lowercase_hex_chars() {
    let d = sign(b"000000001708:00");
    assert_eq!(d.len(), 64);
    assert!(d.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn known_digest_for_abc() {
    // FIPS 180-2 test vector
    assert_eq!(
        sign(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn round_trip_verifies() {
    for payload in [&b""[..], b"x", "registro de ponto \u{e9}".as_bytes()] {
        let digest = sign(payload);
        assert!(verify(payload, &digest));
    }
}

#[test]
fn mutated_digest_fails_verification() {
    let payload = b"0000000427clock";
    let digest = sign(payload);

    // Flip every character in turn; all must fail.
    for i in 0..digest.len() {
        let mut bytes = digest.clone().into_bytes();
        bytes[i] = if bytes[i] == b'0' { b'1' } else { b'0' };
        let tampered = String::from_utf8(bytes).unwrap();
        assert!(!verify(payload, &tampered), "mutation at {} verified", i);
    }
}

#[test]
fn different_payloads_different_digests() {
    assert_ne!(sign(b"a"), sign(b"b"));
}
