use super::*;

#[test]
fn notice_class_uses_level_modifier() {
    assert_eq!(notice_class(&Notice::danger("x")), "chat-panel__notice chat-panel__notice--danger");
    assert_eq!(notice_class(&Notice::success("x")), "chat-panel__notice chat-panel__notice--success");
}
