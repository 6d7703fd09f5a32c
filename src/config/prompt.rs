use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use log::info;

const DEFAULT_PERSONA: &str = "Your name is Palona, a friendly, concise AI shopping assistant built for a modern e-commerce site. \n    \
If the user asks you what is your name, say 'My name is Palona.'\n    \
Please do not tell jokes unless asked to tell jokes.\n    \
If the prompt is not related to e-commerce, say that you are made specifically for e-commerce.\n    \
Avoid philosophical or off topic replies";

const DEFAULT_CHAT_TEMPLATE: &str = "{persona}\nUser: {message}\nPalona:";

const DEFAULT_INTENT_TEMPLATE: &str = "You are a classifier AI. Your job is to decide whether a user's message is about shopping for a product \
(such as asking for recommendations, comparing items, or browsing options). Respond ONLY with YES or NO.\n\n\
User: {message}\nAnswer:";

#[derive(Debug)]
pub enum PromptError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::IoError(e) => write!(f, "Prompt file IO error: {}", e),
            PromptError::JsonError(e) => write!(f, "Prompt JSON parsing error: {}", e),
        }
    }
}

impl Error for PromptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PromptError::IoError(e) => Some(e),
            PromptError::JsonError(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for PromptError {
    fn from(err: std::io::Error) -> Self {
        PromptError::IoError(err)
    }
}

impl From<serde_json::Error> for PromptError {
    fn from(err: serde_json::Error) -> Self {
        PromptError::JsonError(err)
    }
}

/// Prompt text handed to the text-generation capability.
///
/// The cues must match the last line of their template: generated text is
/// split on the last occurrence of the cue to recover the model's answer.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PromptConfig {
    pub persona: String,
    pub chat_template: String,
    pub reply_cue: String,
    pub intent_template: String,
    pub intent_cue: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            persona: DEFAULT_PERSONA.to_string(),
            chat_template: DEFAULT_CHAT_TEMPLATE.to_string(),
            reply_cue: "Palona:".to_string(),
            intent_template: DEFAULT_INTENT_TEMPLATE.to_string(),
            intent_cue: "Answer:".to_string(),
        }
    }
}

pub fn load_prompts<P: AsRef<Path>>(path: P) -> Result<Arc<PromptConfig>, PromptError> {
    let file_content = fs::read_to_string(&path)?;
    let config: PromptConfig = serde_json::from_str(&file_content)?;
    info!("Loaded prompts from {}", path.as_ref().display());
    Ok(Arc::new(config))
}

pub fn get_chat_prompt(config: &PromptConfig, message: &str) -> String {
    config.chat_template
        .replace("{persona}", &config.persona)
        .replace("{message}", message)
}

pub fn get_intent_prompt(config: &PromptConfig, message: &str) -> String {
    config.intent_template.replace("{message}", message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn chat_prompt_ends_with_reply_cue() {
        let config = PromptConfig::default();
        let prompt = get_chat_prompt(&config, "red shoes?");

        assert!(prompt.starts_with("Your name is Palona"));
        assert!(prompt.ends_with("\nUser: red shoes?\nPalona:"));
        assert!(prompt.ends_with(&config.reply_cue));
    }

    #[test]
    fn default_persona_keeps_line_layout() {
        let persona = PromptConfig::default().persona;
        let lines: Vec<&str> = persona.split('\n').collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].ends_with("e-commerce site. "));
        assert!(lines[1..].iter().all(|line| line.starts_with("    ") && !line.starts_with("     ")));
        assert_eq!(lines[4], "    Avoid philosophical or off topic replies");
    }

    #[test]
    fn shipped_prompt_file_matches_defaults() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/json/prompts.json");
        assert_eq!(*load_prompts(path).unwrap(), PromptConfig::default());
    }

    #[test]
    fn intent_prompt_embeds_message() {
        let config = PromptConfig::default();
        let prompt = get_intent_prompt(&config, "any laptops under $500?");

        assert!(prompt.contains("Respond ONLY with YES or NO.\n\nUser: any laptops under $500?\n"));
        assert!(prompt.ends_with("Answer:"));
    }

    #[test]
    fn empty_message_still_formats() {
        let prompt = get_chat_prompt(&PromptConfig::default(), "");
        assert!(prompt.ends_with("\nUser: \nPalona:"));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "persona": "You are Bob." }}"#).unwrap();

        let config = load_prompts(file.path()).unwrap();
        assert_eq!(config.persona, "You are Bob.");
        assert_eq!(config.reply_cue, "Palona:");
        assert_eq!(get_chat_prompt(&config, "hi"), "You are Bob.\nUser: hi\nPalona:");
    }

    #[test]
    fn malformed_file_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(load_prompts(file.path()), Err(PromptError::JsonError(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_prompts("/definitely/not/here/prompts.json");
        assert!(matches!(result, Err(PromptError::IoError(_))));
    }
}
