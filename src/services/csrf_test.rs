use super::*;

const NOW: u64 = 1_700_000_000;

fn signer() -> CsrfSigner {
    CsrfSigner::new("test-secret")
}

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_pads_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a, 0xff]), "0aff");
}

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

// =============================================================================
// issue / verify
// =============================================================================

#[test]
fn issued_token_has_three_parts() {
    let token = signer().issue_at(NOW);
    let parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], NOW.to_string());
    assert_eq!(parts[1].len(), 32);
    assert_eq!(parts[2].len(), 64);
}

#[test]
fn issued_tokens_are_unique() {
    let s = signer();
    assert_ne!(s.issue_at(NOW), s.issue_at(NOW));
}

#[test]
fn fresh_token_verifies() {
    let s = signer();
    let token = s.issue_at(NOW);
    assert_eq!(s.verify_at(&token, NOW + 10), Ok(()));
}

#[test]
fn token_from_live_clock_verifies() {
    let s = signer();
    let token = s.issue();
    assert_eq!(s.verify(&token), Ok(()));
}

#[test]
fn empty_token_is_missing() {
    assert_eq!(signer().verify_at("  ", NOW), Err(CsrfError::Missing));
}

#[test]
fn garbage_token_is_malformed() {
    let s = signer();
    assert_eq!(s.verify_at("not-a-token", NOW), Err(CsrfError::Malformed));
    assert_eq!(s.verify_at("abc.def.ghi", NOW), Err(CsrfError::Malformed));
    assert_eq!(s.verify_at("123..sig", NOW), Err(CsrfError::Malformed));
    assert_eq!(s.verify_at("123.zz.sig", NOW), Err(CsrfError::Malformed));
}

#[test]
fn tampered_signature_is_rejected() {
    let s = signer();
    let token = s.issue_at(NOW);
    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == '0' { '1' } else { '0' });
    assert_eq!(s.verify_at(&tampered, NOW), Err(CsrfError::BadSignature));
}

#[test]
fn tampered_timestamp_is_rejected() {
    let s = signer();
    let token = s.issue_at(NOW);
    let rest = token.split_once('.').unwrap().1;
    let forged = format!("{}.{rest}", NOW + 100);
    assert_eq!(s.verify_at(&forged, NOW + 100), Err(CsrfError::BadSignature));
}

#[test]
fn token_from_other_secret_is_rejected() {
    let token = CsrfSigner::new("other-secret").issue_at(NOW);
    assert_eq!(signer().verify_at(&token, NOW), Err(CsrfError::BadSignature));
}

#[test]
fn expired_token_is_rejected() {
    let s = signer();
    let token = s.issue_at(NOW);
    assert_eq!(
        s.verify_at(&token, NOW + CSRF_MAX_AGE_SECS + 1),
        Err(CsrfError::Expired { age_secs: CSRF_MAX_AGE_SECS + 1 })
    );
}

#[test]
fn token_at_exact_max_age_is_accepted() {
    let s = signer();
    let token = s.issue_at(NOW);
    assert_eq!(s.verify_at(&token, NOW + CSRF_MAX_AGE_SECS), Ok(()));
}

#[test]
fn custom_max_age_applies() {
    let s = signer().with_max_age(5);
    let token = s.issue_at(NOW);
    assert!(matches!(s.verify_at(&token, NOW + 6), Err(CsrfError::Expired { .. })));
}

#[test]
fn constant_time_eq_compares_contents_and_length() {
    assert!(constant_time_eq(b"abc", b"abc"));
    assert!(!constant_time_eq(b"abc", b"abd"));
    assert!(!constant_time_eq(b"abc", b"abcd"));
}
