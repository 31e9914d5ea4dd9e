use crate::domain::models::{AssistantConfig, ChatMessage};
use crate::services::i18n::{translate, Language};
use crate::services::storage::{assistant_config_path, audit, unix_timestamp};
use serde::Serialize;
use std::time::Duration;

/// Ordered fallback rules, evaluated top to bottom; first match wins. The
/// default reply below closes the set, so every message gets an answer.
pub struct ResponseRule {
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

pub const RESPONSE_RULES: [ResponseRule; 4] = [
    ResponseRule {
        keywords: &["24", "nearest"],
        reply: "I found 12 storage spaces with 24/7 access within 2km of your location. The closest one is in Kwun Tong at HK$150/day with excellent security features.",
    },
    ResponseRule {
        keywords: &["insurance"],
        reply: "Our comprehensive insurance covers up to HK$50,000 per item. Coverage includes theft, fire, water damage, and natural disasters. Premium starts from HK$15/month.",
    },
    ResponseRule {
        keywords: &["price", "cost"],
        reply: "Storage prices in Hong Kong typically range from HK$80-300 per day depending on location, size, and features. Central areas are more expensive, while New Territories offer better value.",
    },
    ResponseRule {
        keywords: &["secure", "safe"],
        reply: "All our verified hosts meet strict security standards including CCTV monitoring, secure access systems, and background checks. Look for the blue security badge on listings.",
    },
];

pub const DEFAULT_REPLY: &str = "Thank you for your question! Our team is here to help you find the perfect storage solution. Would you like me to search for spaces in a specific area?";

pub fn canned_reply(message: &str) -> &'static str {
    let msg = message.to_lowercase();
    RESPONSE_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| msg.contains(k)))
        .map(|rule| rule.reply)
        .unwrap_or(DEFAULT_REPLY)
}

pub fn load_config() -> anyhow::Result<AssistantConfig> {
    let path = assistant_config_path()?;
    if !path.exists() {
        return Ok(AssistantConfig::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    message: &'a str,
    timestamp: u64,
    #[serde(rename = "userId")]
    user_id: &'a str,
}

fn extract_reply(body: &str) -> anyhow::Result<String> {
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["reply", "response", "message"] {
            if let Some(s) = v.get(field).and_then(|x| x.as_str()) {
                if !s.trim().is_empty() {
                    return Ok(s.trim().to_string());
                }
            }
        }
        if let Some(s) = v.as_str() {
            if !s.trim().is_empty() {
                return Ok(s.trim().to_string());
            }
        }
        anyhow::bail!("webhook reply carried no text field");
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        anyhow::bail!("empty webhook reply");
    }
    Ok(trimmed.to_string())
}

fn forward_to_webhook(config: &AssistantConfig, message: &str) -> anyhow::Result<String> {
    let url = config
        .webhook_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("no webhook endpoint configured"))?;
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_millis(config.timeout_ms))
        .build()?;
    let payload = WebhookPayload {
        message,
        timestamp: unix_timestamp(),
        user_id: &config.user_id,
    };
    let resp = client.post(url).json(&payload).send()?.error_for_status()?;
    extract_reply(&resp.text()?)
}

/// Produce the bot reply for a user message. Transport failures, non-2xx
/// statuses and unparseable bodies all collapse into the local rules; the
/// user never sees an error and nothing is retried.
pub fn respond(config: &AssistantConfig, message: &str) -> String {
    match forward_to_webhook(config, message) {
        Ok(reply) => {
            if config.audit {
                audit("chat_forwarded", serde_json::json!({ "user": config.user_id }));
            }
            reply
        }
        Err(_) => {
            if config.audit {
                audit("chat_fallback", serde_json::json!({ "user": config.user_id }));
            }
            canned_reply(message).to_string()
        }
    }
}

pub fn welcome_message(lang: Language) -> ChatMessage {
    ChatMessage {
        body: translate(lang, "chat.welcome").to_string(),
        from_user: false,
        timestamp: unix_timestamp(),
    }
}

pub fn quick_replies(lang: Language) -> Vec<String> {
    vec![
        translate(lang, "chat.quickReply.nearestSpaces").to_string(),
        translate(lang, "chat.quickReply.insurance").to_string(),
    ]
}

/// Message log for one chat window, seeded with the localized welcome.
#[derive(Debug)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new(lang: Language) -> Self {
        Self {
            messages: vec![welcome_message(lang)],
        }
    }

    /// Append the user message and the bot reply it produced.
    pub fn send(&mut self, config: &AssistantConfig, body: &str) -> &ChatMessage {
        self.messages.push(ChatMessage {
            body: body.to_string(),
            from_user: true,
            timestamp: unix_timestamp(),
        });
        let reply = respond(config, body);
        self.messages.push(ChatMessage {
            body: reply,
            from_user: false,
            timestamp: unix_timestamp(),
        });
        let idx = self.messages.len() - 1;
        &self.messages[idx]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_match_in_order_first_wins() {
        // "nearest" outranks "price" because the 24h rule is listed first.
        let reply = canned_reply("What is the price of the nearest space?");
        assert!(reply.contains("24/7 access"));
    }

    #[test]
    fn keyword_matching_is_case_insensitive_substring() {
        assert!(canned_reply("Tell me about INSURANCE options").contains("HK$50,000"));
        assert!(canned_reply("is it safe?").contains("security standards"));
        assert!(canned_reply("how much does it cost").contains("HK$80-300"));
    }

    #[test]
    fn unmatched_messages_get_the_default_reply() {
        assert_eq!(canned_reply("hello there"), DEFAULT_REPLY);
    }

    #[test]
    fn webhook_reply_extraction_accepts_json_and_plain_text() {
        assert_eq!(extract_reply(r#"{"reply":"hi"}"#).unwrap(), "hi");
        assert_eq!(extract_reply(r#"{"response":"ok"}"#).unwrap(), "ok");
        assert_eq!(extract_reply(r#"{"message":"sure"}"#).unwrap(), "sure");
        assert_eq!(extract_reply("plain text answer").unwrap(), "plain text answer");
        assert!(extract_reply("").is_err());
        assert!(extract_reply(r#"{"status":200}"#).is_err());
    }
}
