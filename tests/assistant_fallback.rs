use spacelink::services::assistant::{canned_reply, respond, DEFAULT_REPLY};
use spacelink::{AssistantConfig, Conversation, Language};

fn unreachable_config() -> AssistantConfig {
    AssistantConfig {
        // Nothing listens on the discard port; the send fails fast.
        webhook_url: Some("http://127.0.0.1:9/hooks/assistant".to_string()),
        timeout_ms: 300,
        audit: false,
        ..Default::default()
    }
}

#[test]
fn unreachable_webhook_falls_back_to_the_insurance_rule() {
    let reply = respond(&unreachable_config(), "Explain insurance coverage");
    assert!(!reply.is_empty());
    assert_eq!(reply, canned_reply("Explain insurance coverage"));
    assert!(reply.contains("HK$50,000"));
}

#[test]
fn unconfigured_webhook_goes_straight_to_the_rules() {
    let config = AssistantConfig {
        audit: false,
        ..Default::default()
    };
    assert!(respond(&config, "is the nearest space secure?").contains("24/7 access"));
    assert_eq!(respond(&config, "good morning"), DEFAULT_REPLY);
}

#[test]
fn conversation_always_ends_with_a_bot_message() {
    let mut chat = Conversation::new(Language::En);
    assert_eq!(chat.messages().len(), 1);
    assert!(!chat.messages()[0].from_user);

    let reply = chat.send(&unreachable_config(), "what does storage cost?");
    assert!(!reply.from_user);
    assert!(!reply.body.is_empty());
    assert!(reply.body.contains("HK$80-300"));

    // welcome + user message + bot reply
    assert_eq!(chat.messages().len(), 3);
    assert!(chat.messages()[1].from_user);
}

#[test]
fn welcome_and_quick_replies_follow_the_language() {
    use spacelink::services::assistant::{quick_replies, welcome_message};

    assert_eq!(
        welcome_message(Language::En).body,
        "Hi! How can I help you find storage today?"
    );
    assert_eq!(
        welcome_message(Language::Zh).body,
        "您好！今天我可以如何幫您找到儲存空間？"
    );
    assert_eq!(
        quick_replies(Language::En),
        vec!["Show nearest 24h spaces", "Explain insurance"]
    );
}
