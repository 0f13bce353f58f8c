use std::sync::Arc;

use anyhow::{Context, Result};
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
    LinkPreviewOptions, ParseMode, Url,
};
use tracing::{debug, error, info};

use crate::commands::{self, Command};
use crate::config::Config;
use crate::news::{self, NewsClient};
use crate::quotes::QuoteCorpus;

// ── Reply texts ────────────────────────────────────────────────────────────────

const ABOUT_TEXT: &str = "**🌍 About OpenStart**\n\n\
    OpenStart is a global accelerator program for **high school students**. \
    Our mission is to connect ambitious young minds with world-class mentorship, \
    resources, and opportunities to build real, meaningful projects.";

const TEAM_TEXT: &str = "**👥 The OpenStart Team**\n\n\
    Our team is a global collaboration of passionate young leaders:\n\
    ▪️ **Vikusyaaa** (Ukraine)\n\
    ▪️ **Rakesh Kumar** (India)\n\
    ▪️ **Cheedhe** (Tunisia)";

const EVENTS_TEXT: &str =
    "📅 Upcoming events and deadlines will be announced here soon. Stay tuned!";

const RESOURCES_TEXT: &str = "📚 We are compiling a library of guides, books, and tools \
    for young founders. This feature will be available shortly!";

const COMMUNITY_TEXT: &str = "🌐 Join our global community of young innovators on Discord \
    to connect, collaborate, and share ideas!";

const MENTOR_TEXT: &str =
    "🎓 We will initially assign a mentor for you related to your startup niche and business tech.";

const FAQ_TEXT: &str = "**❔ Frequently Asked Questions**\n\n\
    **Q: Who can apply for OpenStart?**\n\
    A: Ambitious high school students from anywhere in the world!\n\n\
    **Q: Is there a fee to participate?**\n\
    A: Our goal is to make our programs as accessible as possible. \
    Details about costs will be available soon.";

const APPLY_TEXT: &str = "📝 As of now, you can either visit our website or fill out \
    this Google Form. We will respond to you within 48 hours.";

const CONTACT_TEXT: &str =
    "📩 You can visit our website to get in touch with the OpenStart team.";

const FEEDBACK_TEXT: &str =
    "💬 You can share your feedback with us by filling out this form.";

const UNKNOWN_COMMAND_TEXT: &str =
    "Sorry, I didn't understand that. Try /help for a list of commands.";

const NEWS_ERROR_TEXT: &str = "Sorry, an error occurred while fetching news.";

const COMMUNITY_URL: &str = "https://discord.gg/your-invite-link";
const APPLY_FORM_URL: &str = "https://forms.gle/oqeBL4fRJXTnTymh9";
const FEEDBACK_FORM_URL: &str = "https://forms.gle/5azM3K8h7ek2B2cn8";

const GREETINGS: [&str; 3] = ["hello", "hi", "hey"];

fn welcome_text(first_name: &str) -> String {
    format!(
        "Hi {first_name}! 👋\n\n\
         Welcome to the **OpenStart Project Bot**!\n\n\
         I'm your assistant for all things related to startups, funding, and innovation \
         for young founders. What would you like to do first?"
    )
}

fn greeting_text(first_name: &str) -> String {
    format!("Hello {first_name}! Use /help to see what I can do.")
}

// Substring match, so "hi" inside a longer word counts too.
fn contains_greeting(text: &str) -> bool {
    let lower = text.to_lowercase();
    GREETINGS.iter().any(|greeting| lower.contains(greeting))
}

// ── Keyboards ──────────────────────────────────────────────────────────────────

fn start_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new([
        [
            KeyboardButton::new("/news funding"),
            KeyboardButton::new("/quote"),
        ],
        [KeyboardButton::new("/team"), KeyboardButton::new("/help")],
    ])
    .resize_keyboard()
}

fn link_button(label: &str, url: &str) -> InlineKeyboardMarkup {
    let url = Url::parse(url).expect("hardcoded button URL is valid");
    InlineKeyboardMarkup::new([[InlineKeyboardButton::url(label, url)]])
}

fn disabled_link_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

// ── Shared state ───────────────────────────────────────────────────────────────

/// Read-only dependencies shared by every handler.
pub struct AppState {
    config: Config,
    news: NewsClient,
    quotes: QuoteCorpus,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let news = NewsClient::new(&config.news_api_key);
        Self {
            config,
            news,
            quotes: QuoteCorpus::builtin(),
        }
    }
}

// ── Dispatcher ─────────────────────────────────────────────────────────────────

/// Register the command menu and run the long-polling dispatch loop.
///
/// Fallbacks are priority-ordered branches: a recognized command wins, then
/// the unknown-command reply for anything starting with `/`, then the
/// greeting reply. At most one branch fires per message; everything else
/// falls through to the default handler, which only logs.
pub async fn run(state: Arc<AppState>) -> Result<()> {
    let bot = Bot::new(&state.config.telegram_token);

    bot.set_my_commands(commands::command_menu())
        .await
        .context("Failed to register command menu with Telegram")?;
    info!("Command menu registered");

    let handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(
            dptree::filter(|msg: Message| {
                msg.text().map(|t| t.starts_with('/')).unwrap_or(false)
            })
            .endpoint(handle_unknown_command),
        )
        .branch(
            dptree::filter(|msg: Message| msg.text().map(contains_greeting).unwrap_or(false))
                .endpoint(handle_greeting),
        );

    info!("Starting Telegram polling...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .default_handler(|upd| async move {
            debug!("No reply for update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("bot"))
        .build()
        .dispatch()
        .await;

    Ok(())
}

// ── Handlers ───────────────────────────────────────────────────────────────────

async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    info!("Command {:?} from chat {}", cmd, msg.chat.id);

    match cmd {
        Command::Start => {
            bot.send_message(msg.chat.id, welcome_text(&sender_first_name(&msg)))
                .parse_mode(ParseMode::Markdown)
                .reply_markup(start_keyboard())
                .await?;
        }
        Command::News(args) => cmd_news(&bot, &msg, &state, &args).await?,
        Command::About => {
            bot.send_message(msg.chat.id, ABOUT_TEXT)
                .parse_mode(ParseMode::Markdown)
                .await?;
        }
        Command::Quote => {
            let quote = state.quotes.pick();
            bot.send_message(msg.chat.id, format!("💡 *“{quote}”*"))
                .parse_mode(ParseMode::Markdown)
                .await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, commands::help_text()).await?;
        }
        Command::Team => {
            bot.send_message(msg.chat.id, TEAM_TEXT)
                .parse_mode(ParseMode::Markdown)
                .await?;
        }
        Command::Events => {
            bot.send_message(msg.chat.id, EVENTS_TEXT).await?;
        }
        Command::Mentor => {
            bot.send_message(msg.chat.id, MENTOR_TEXT).await?;
        }
        Command::Resources => {
            bot.send_message(msg.chat.id, RESOURCES_TEXT).await?;
        }
        Command::Faq => {
            bot.send_message(msg.chat.id, FAQ_TEXT)
                .parse_mode(ParseMode::Markdown)
                .await?;
        }
        Command::Apply => {
            bot.send_message(msg.chat.id, APPLY_TEXT)
                .reply_markup(link_button("Fill Application Form", APPLY_FORM_URL))
                .await?;
        }
        Command::Contact => {
            bot.send_message(msg.chat.id, CONTACT_TEXT).await?;
        }
        Command::Feedback => {
            bot.send_message(msg.chat.id, FEEDBACK_TEXT)
                .reply_markup(link_button("Share Feedback", FEEDBACK_FORM_URL))
                .await?;
        }
        Command::Community => {
            bot.send_message(msg.chat.id, COMMUNITY_TEXT)
                .reply_markup(link_button("Join Discord", COMMUNITY_URL))
                .await?;
        }
    }

    Ok(())
}

// The acknowledgment is awaited before the lookup starts, so the user
// always sees it before the result or the apology.
async fn cmd_news(bot: &Bot, msg: &Message, state: &AppState, args: &str) -> ResponseResult<()> {
    let topic = news::resolve_topic(args);

    bot.send_message(
        msg.chat.id,
        format!("🔍 Searching for the latest news about '{topic}'..."),
    )
    .await?;

    match state.news.search(&topic).await {
        Ok(articles) if articles.is_empty() => {
            bot.send_message(
                msg.chat.id,
                format!("Sorry, I couldn't find any recent news for '{topic}'."),
            )
            .await?;
        }
        Ok(articles) => {
            bot.send_message(msg.chat.id, news::format_articles(&topic, &articles))
                .parse_mode(ParseMode::Markdown)
                .link_preview_options(disabled_link_preview())
                .await?;
        }
        Err(e) => {
            error!("News command error: {:#}", e);
            bot.send_message(msg.chat.id, NEWS_ERROR_TEXT).await?;
        }
    }

    Ok(())
}

async fn handle_unknown_command(bot: Bot, msg: Message) -> ResponseResult<()> {
    if let Some(text) = msg.text() {
        info!("Unrecognized command from chat {}: {}", msg.chat.id, text);
    }
    bot.send_message(msg.chat.id, UNKNOWN_COMMAND_TEXT).await?;
    Ok(())
}

async fn handle_greeting(bot: Bot, msg: Message) -> ResponseResult<()> {
    bot.send_message(msg.chat.id, greeting_text(&sender_first_name(&msg)))
        .await?;
    Ok(())
}

fn sender_first_name(msg: &Message) -> String {
    msg.from
        .as_ref()
        .map(|user| user.first_name.clone())
        .unwrap_or_else(|| "there".to_string())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_detected_case_insensitively() {
        assert!(contains_greeting("hello"));
        assert!(contains_greeting("Hi everyone"));
        assert!(contains_greeting("HEY!"));
    }

    #[test]
    fn test_greeting_matches_substring_inside_words() {
        // "this" contains "hi"; the original matched substrings, so do we.
        assert!(contains_greeting("is this thing on?"));
    }

    #[test]
    fn test_no_greeting_means_no_match() {
        assert!(!contains_greeting("what can you do?"));
        assert!(!contains_greeting(""));
    }

    #[test]
    fn test_welcome_text_is_personalized() {
        let text = welcome_text("Ada");
        assert!(text.starts_with("Hi Ada! 👋"));
        assert!(text.contains("OpenStart Project Bot"));
    }

    #[test]
    fn test_greeting_text_points_at_help() {
        let text = greeting_text("Ada");
        assert!(text.contains("Ada"));
        assert!(text.contains("/help"));
    }

    #[test]
    fn test_start_keyboard_is_two_by_two() {
        let keyboard = start_keyboard();
        assert_eq!(keyboard.keyboard.len(), 2);
        assert_eq!(keyboard.keyboard[0].len(), 2);
        assert_eq!(keyboard.keyboard[1].len(), 2);
        assert_eq!(keyboard.keyboard[0][0].text, "/news funding");
        assert_eq!(keyboard.keyboard[1][1].text, "/help");
    }

    #[test]
    fn test_button_urls_are_valid() {
        for url in [COMMUNITY_URL, APPLY_FORM_URL, FEEDBACK_FORM_URL] {
            assert!(Url::parse(url).is_ok(), "invalid button URL: {url}");
        }
    }

    #[test]
    fn test_about_mentions_openstart() {
        assert!(ABOUT_TEXT.contains("OpenStart"));
    }

    #[test]
    fn test_team_lists_three_members() {
        assert_eq!(TEAM_TEXT.matches("▪️").count(), 3);
    }
}
