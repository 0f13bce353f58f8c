//! The bot's registered command set.
//!
//! The enum doubles as the command table: variant order is the menu order,
//! and the per-variant descriptions feed both the `/help` body and the
//! command menu registered with Telegram via `set_my_commands`.

use teloxide::types::BotCommand;
use teloxide::utils::command::{BotCommands, ParseError};

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "🚀 Start the bot")]
    Start,
    #[command(description = "📰 Get news on a topic", parse_with = plain_text)]
    News(String),
    #[command(description = "🌍 Learn about OpenStart")]
    About,
    #[command(description = "💡 Get a motivational quote")]
    Quote,
    #[command(description = "❓ See this list of commands")]
    Help,
    #[command(description = "👥 Meet the OpenStart team")]
    Team,
    #[command(description = "📅 See upcoming events")]
    Events,
    #[command(description = "🎓 Learn about mentorship")]
    Mentor,
    #[command(description = "📚 Access learning materials")]
    Resources,
    #[command(description = "❔ Frequently Asked Questions")]
    Faq,
    #[command(description = "📝 How to apply for programs")]
    Apply,
    #[command(description = "📩 Get in touch with the team")]
    Contact,
    #[command(description = "💬 Share your feedback with us")]
    Feedback,
    #[command(description = "🌐 Join our global community")]
    Community,
}

// Keeps everything after the command word as one argument, so
// `/news funding accelerator` arrives as a single topic string.
fn plain_text(input: String) -> Result<(String,), ParseError> {
    Ok((input,))
}

/// Command list in the shape `set_my_commands` expects.
pub fn command_menu() -> Vec<BotCommand> {
    Command::bot_commands()
}

/// The `/help` body: one line per registered command.
pub fn help_text() -> String {
    Command::descriptions().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT_NAME: &str = "openstart_bot";

    #[test]
    fn test_fourteen_commands_registered() {
        assert_eq!(command_menu().len(), 14);
    }

    #[test]
    fn test_help_text_has_one_line_per_command() {
        assert_eq!(help_text().lines().count(), command_menu().len());
    }

    #[test]
    fn test_help_text_mentions_every_command() {
        let help = help_text();
        for entry in command_menu() {
            assert!(
                help.contains(&entry.command),
                "help text is missing {}",
                entry.command
            );
        }
    }

    #[test]
    fn test_simple_command_parses() {
        assert_eq!(Command::parse("/start", BOT_NAME).unwrap(), Command::Start);
        assert_eq!(Command::parse("/quote", BOT_NAME).unwrap(), Command::Quote);
    }

    #[test]
    fn test_mention_form_parses() {
        assert_eq!(
            Command::parse("/help@openstart_bot", BOT_NAME).unwrap(),
            Command::Help
        );
    }

    #[test]
    fn test_news_keeps_multi_word_topic() {
        assert_eq!(
            Command::parse("/news funding accelerator", BOT_NAME).unwrap(),
            Command::News("funding accelerator".to_string())
        );
    }

    #[test]
    fn test_news_without_topic_parses_empty() {
        assert_eq!(
            Command::parse("/news", BOT_NAME).unwrap(),
            Command::News(String::new())
        );
    }

    #[test]
    fn test_unregistered_command_fails_to_parse() {
        assert!(Command::parse("/banana", BOT_NAME).is_err());
        assert!(Command::parse("not a command", BOT_NAME).is_err());
    }
}
