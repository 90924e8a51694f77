//! AI chat replies through the OpenAI chat completions API.

use serde::{Deserialize, Serialize};

use crate::server::error::AppError;

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-4o";

/// Used when the guild leaves `ai_system_prompt` empty.
pub const DEFAULT_SYSTEM_PROMPT: &str = "Du bist ein freundlicher Discord-Bot.";

/// Discord rejects messages longer than this.
const MAX_MESSAGE_CHARS: usize = 2000;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Asks the model to answer `message` and returns the reply, cut to Discord's limit.
pub async fn complete(
    client: &reqwest::Client,
    api_key: &str,
    system_prompt: &str,
    message: &str,
) -> Result<String, AppError> {
    let system_prompt = if system_prompt.trim().is_empty() {
        DEFAULT_SYSTEM_PROMPT
    } else {
        system_prompt
    };

    let request = ChatRequest {
        model: MODEL,
        messages: [
            ChatMessage {
                role: "system",
                content: system_prompt,
            },
            ChatMessage {
                role: "user",
                content: message,
            },
        ],
    };

    let response: ChatResponse = client
        .post(COMPLETIONS_URL)
        .bearer_auth(api_key)
        .json(&request)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let reply = response
        .choices
        .into_iter()
        .find_map(|choice| choice.message.content)
        .ok_or_else(|| AppError::InternalError("AI response contained no message".to_string()))?;

    Ok(truncate_message(&reply))
}

fn truncate_message(text: &str) -> String {
    if text.chars().count() <= MAX_MESSAGE_CHARS {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(MAX_MESSAGE_CHARS - 1).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_short_replies() {
        assert_eq!(truncate_message("hello"), "hello");
    }

    #[test]
    fn cuts_long_replies_to_discord_limit() {
        let long = "ä".repeat(MAX_MESSAGE_CHARS + 10);
        let truncated = truncate_message(&long);

        assert_eq!(truncated.chars().count(), MAX_MESSAGE_CHARS);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn parses_completion_response() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Hi!"}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.choices[0].message.content.as_deref(), Some("Hi!"));
    }
}
