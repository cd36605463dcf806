use super::*;

#[test]
fn chat_state_default_is_idle_and_empty() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(!state.awaiting_response);
    assert_eq!(state.phase, ExchangePhase::Idle);
}

#[test]
fn constructors_set_sender_and_error_flag() {
    let user = Message::user("hi");
    assert_eq!(user.sender, Sender::User);
    assert!(!user.is_error);
    assert!(user.sources.is_empty());

    let answer = Message::assistant("hello", vec!["doc1".to_owned()]);
    assert_eq!(answer.sender, Sender::Assistant);
    assert_eq!(answer.sources, vec!["doc1"]);
    assert!(!answer.is_error);

    let failed = Message::error("oops");
    assert_eq!(failed.sender, Sender::Assistant);
    assert!(failed.is_error);
}

#[test]
fn constructors_stamp_creation_time() {
    assert!(Message::user("hi").timestamp > 0.0);
}

#[test]
fn message_serializes_with_stored_field_names() {
    let mut msg = Message::error("bad");
    msg.timestamp = 1.5;
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json["content"], "bad");
    assert_eq!(json["sender"], "assistant");
    assert_eq!(json["isError"], true);
    assert_eq!(json["timestamp"], 1.5);
    assert!(json["sources"].as_array().unwrap().is_empty());
}

#[test]
fn message_deserializes_with_missing_optional_fields() {
    let msg: Message = serde_json::from_str(r#"{"content":"hi","sender":"user"}"#).unwrap();
    assert_eq!(msg.sender, Sender::User);
    assert!(msg.sources.is_empty());
    assert!(!msg.is_error);
}

#[test]
fn welcome_detection_requires_assistant_sender() {
    let sentinel = "Welcome to the VaultLogic";
    assert!(Message::assistant("Welcome to the VaultLogic assistant!", Vec::new()).is_welcome(sentinel));
    assert!(!Message::user("Welcome to the VaultLogic assistant!").is_welcome(sentinel));
    assert!(!Message::assistant("Something else", Vec::new()).is_welcome(sentinel));
    assert!(!Message::assistant("anything", Vec::new()).is_welcome(""));
}

#[test]
fn class_names_match_transcript_css() {
    assert_eq!(Sender::User.as_class(), "user");
    assert_eq!(Sender::Assistant.as_class(), "assistant");
    assert_eq!(NoticeLevel::Danger.as_class(), "danger");
}

#[test]
fn notice_helpers_set_level() {
    assert_eq!(Notice::info("a").level, NoticeLevel::Info);
    assert_eq!(Notice::success("a").level, NoticeLevel::Success);
    assert_eq!(Notice::warning("a").level, NoticeLevel::Warning);
    assert_eq!(Notice::danger("a").message, "a");
}

#[test]
fn stored_message_with_date_string_timestamp_still_loads() {
    let raw = r#"{"content":"hi","sender":"assistant","sources":null,"timestamp":"2024-05-01T10:00:00.000Z","isError":false}"#;
    let msg: Message = serde_json::from_str(raw).unwrap();
    assert!(msg.timestamp.abs() < f64::EPSILON);
    assert!(msg.sources.is_empty());
}

#[test]
fn notice_slot_show_bumps_sequence() {
    let mut slot = NoticeSlot::default();
    assert_eq!(slot.current(), None);
    let first = slot.show(Notice::info("a"));
    let second = slot.show(Notice::info("a"));
    assert!(second > first);
    assert_eq!(slot.seq(), second);
    assert_eq!(slot.current(), Some(&Notice::info("a")));
}

#[test]
fn stale_timer_does_not_dismiss_repeated_notice() {
    let mut slot = NoticeSlot::default();
    let first = slot.show(Notice::info("Please wait"));
    let second = slot.show(Notice::info("Please wait"));

    assert!(!slot.expire(first));
    assert!(slot.current().is_some());
    assert!(slot.expire(second));
    assert_eq!(slot.current(), None);
    assert!(!slot.expire(second));
}

#[test]
fn manual_dismiss_keeps_sequence() {
    let mut slot = NoticeSlot::default();
    let seq = slot.show(Notice::danger("x"));
    slot.dismiss();
    assert_eq!(slot.current(), None);
    assert_eq!(slot.seq(), seq);
}
