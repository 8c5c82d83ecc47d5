use super::*;

fn roles(history: &[ChatMessage]) -> Vec<&str> {
    history.iter().map(|m| m.role.as_str()).collect()
}

// =============================================================
// Transcript
// =============================================================

#[test]
fn new_chat_opens_with_localized_greeting() {
    let chat = TutorChat::new(Language::Es, 1);
    assert_eq!(chat.messages().len(), 1);
    assert_eq!(chat.messages()[0].sender, Sender::Bot);
    assert!(chat.messages()[0].content.starts_with("¡Hola!"));
}

#[test]
fn blank_send_is_noop() {
    let mut chat = TutorChat::new(Language::En, 1);
    let before = chat.clone();
    assert!(chat.begin_send("   ", Language::En, 2).is_none());
    assert_eq!(chat, before);
    assert!(!chat.is_pending());
}

#[test]
fn send_then_receive_appends_user_and_bot_turns() {
    let mut chat = TutorChat::new(Language::En, 1);
    chat.begin_send("What is x?", Language::En, 2).unwrap();
    assert!(chat.is_pending());
    chat.receive("x is a variable.".to_owned(), 3);
    let senders: Vec<Sender> = chat.messages().iter().map(|m| m.sender).collect();
    assert_eq!(senders, [Sender::Bot, Sender::User, Sender::Bot]);
    assert!(!chat.is_pending());
}

#[test]
fn failure_appends_exactly_one_localized_error() {
    let mut chat = TutorChat::new(Language::En, 1);
    chat.begin_send("hi", Language::En, 2).unwrap();
    chat.fail(Language::En, 3);
    assert_eq!(chat.messages().len(), 3);
    assert_eq!(chat.messages()[2].content, i18n::t(Language::En, "tutor.errorResponse"));
}

// =============================================================
// History
// =============================================================

#[test]
fn history_is_system_then_transcript_then_new_turn() {
    let mut chat = TutorChat::new(Language::En, 1);
    chat.begin_send("first", Language::En, 2).unwrap();
    chat.receive("answer".to_owned(), 3);

    let history = chat.begin_send("second", Language::Fr, 4).unwrap();
    assert_eq!(roles(&history), ["system", "assistant", "user", "assistant", "user"]);
    assert!(history[0].content.ends_with("language code: fr."));
    assert_eq!(history[2].content, "first");
    assert_eq!(history[4].content, "second");
}

#[test]
fn history_excludes_nothing_from_transcript() {
    let transcript = vec![TutorMessage::bot("hello", 0), TutorMessage::user("q", 1)];
    let history = build_history(&transcript, "next", Language::En);
    assert_eq!(history.len(), transcript.len() + 2);
}

// =============================================================
// Prompts
// =============================================================

#[test]
fn suggestions_follow_language_with_english_fallback() {
    assert_eq!(suggested_questions(Language::En)[0], "Explain quadratic equations");
    assert_eq!(suggested_questions(Language::Es)[0], "Explicar ecuaciones cuadráticas");
    assert_eq!(suggested_questions(Language::De), suggested_questions(Language::En));
    assert_eq!(quick_actions(Language::En).len(), 3);
}
