//! `emissary chat` - interactive terminal client
//!
//! Drives the core session state machine against a running server. One
//! outstanding request at a time: input typed while a response is pending is
//! ignored by the session, and bubbles are appended with the staggered
//! schedule the web frontend uses.

use anyhow::Result;
use colored::Colorize;
use serde::Deserialize;
use serde_json::json;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use emissary_config::Config;
use emissary_core::{ChatSession, Message, Sender};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatResponseBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    message_parts: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub async fn run(config: Config, url: String) -> Result<()> {
    let client = reqwest::Client::new();
    let base_url = url.trim_end_matches('/').to_string();
    let persona_name = config.persona.display_name.clone();
    let mut session = ChatSession::new(config.persona.greeting.clone());

    println!(
        "{}",
        "Type a question, /clear to reset the conversation, /quit to exit.".dimmed()
    );
    for message in session.messages() {
        render(message, &persona_name);
    }

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all("you> ".as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = stdin.next_line().await? else {
            break;
        };

        match line.trim() {
            "/quit" | "/exit" => break,
            "/clear" => {
                session.reset();
                println!("{}", "Conversation cleared.".dimmed());
                for message in session.messages() {
                    render(message, &persona_name);
                }
            }
            input => {
                if session.submit(input).is_none() {
                    continue;
                }
                println!("{}", format!("{persona_name} is typing...").dimmed());

                match request_reply(&client, &base_url, input).await {
                    Ok(parts) => {
                        for (index, part) in parts.iter().enumerate() {
                            tokio::time::sleep(ChatSession::bubble_delay(index)).await;
                            let message = session.append_bot_bubble(part.clone());
                            render(message, &persona_name);
                        }
                        session.complete();
                    }
                    Err(error_text) => {
                        let message = session.fail(&error_text);
                        render(message, &persona_name);
                    }
                }
            }
        }
    }

    Ok(())
}

/// POST the message and decide which texts become bubbles.
async fn request_reply(
    client: &reqwest::Client,
    base_url: &str,
    message: &str,
) -> Result<Vec<String>, String> {
    let response = client
        .post(format!("{base_url}/api/chat"))
        .json(&json!({ "message": message }))
        .send()
        .await
        .map_err(|e| format!("Failed to reach the assistant: {e}"))?;

    if !response.status().is_success() {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| "Failed to connect to the server.".to_string());
        return Err(message);
    }

    let body: ChatResponseBody = response
        .json()
        .await
        .map_err(|_| "Invalid response from the assistant.".to_string())?;
    choose_parts(body)
}

/// Prefer the server's bubble split; fall back to the whole message.
fn choose_parts(body: ChatResponseBody) -> Result<Vec<String>, String> {
    if body.message.is_empty() && body.message_parts.is_empty() {
        return Err("Invalid response from the assistant.".to_string());
    }
    if body.message_parts.is_empty() {
        Ok(vec![body.message])
    } else {
        Ok(body.message_parts)
    }
}

fn render(message: &Message, persona_name: &str) {
    match message.sender {
        Sender::User => println!("{} {}", "you:".blue().bold(), message.text),
        Sender::Bot => println!(
            "{} {}",
            format!("{persona_name}:").green().bold(),
            message.text
        ),
    }
}
