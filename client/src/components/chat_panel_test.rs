use super::*;

#[test]
fn enter_submits_unless_shifted() {
    assert_eq!(classify_key("Enter", false), InputKey::Submit);
    assert_eq!(classify_key("Enter", true), InputKey::Other);
}

#[test]
fn escape_clears_input() {
    assert_eq!(classify_key("Escape", false), InputKey::Clear);
    assert_eq!(classify_key("Escape", true), InputKey::Clear);
}

#[test]
fn other_keys_are_ignored() {
    assert_eq!(classify_key("a", false), InputKey::Other);
    assert_eq!(classify_key("Tab", false), InputKey::Other);
}
