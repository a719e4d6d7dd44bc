//! # Solace Chat Loop
//!
//! File: cli/src/commands/chat/repl.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The read-eval-print loop behind `solace chat`. It is generic over its input
//! (`BufRead`) and output (`Write`) so the whole conversation can be driven from
//! an in-memory buffer in tests, and over the engine's RNG and clock so replies
//! are reproducible.
//!
//! ## Flow
//!
//! 1. Print the banner and, unless a name was preset, ask what to call the user.
//! 2. Read lines until a quit word or end of input:
//!    - blank lines are skipped
//!    - `mood` runs a check-in, reprompting until a valid 1-10 score is entered
//!    - `strategy` suggests a coping strategy for the most recent message's emotion
//!    - `quit`, `exit`, `bye`, `goodbye` print a farewell and the session summary
//!    - anything else is recorded as a turn and answered
//! 3. End of input (Ctrl-D) is treated like an interrupt: a short goodbye, no summary.
//!
use crate::core::error::{Result, SolaceError};
use crate::engine::{Clock, EmotionCategory, Engine, MoodScore, Session};
use anyhow::Context;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Presentation settings for one chat run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSettings {
    /// Label printed before every bot reply.
    pub bot_label: String,
    /// Name to address the user by. When `None` the user is asked.
    pub preset_name: Option<String>,
    /// Append a coping strategy to replies for distressing emotions.
    pub suggest_strategies: bool,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            bot_label: "Bot".to_string(),
            preset_name: None,
            suggest_strategies: true,
        }
    }
}

/// What a single line of user input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChatInput<'a> {
    Quit,
    Mood,
    Strategy,
    Message(&'a str),
}

impl<'a> ChatInput<'a> {
    fn parse(line: &'a str) -> Self {
        let lowered = line.to_lowercase();
        match lowered.as_str() {
            "quit" | "exit" | "bye" | "goodbye" => ChatInput::Quit,
            "mood" => ChatInput::Mood,
            "strategy" => ChatInput::Strategy,
            _ => ChatInput::Message(line),
        }
    }
}

/// # Run Chat (`run_chat`)
///
/// Runs one complete conversation over `input`/`output` and returns the
/// finished session.
///
/// ## Returns
///
/// * `Ok(Session)`: The session as it stood when the user quit or input ended.
/// * `Err`: Reading from `input` or writing to `output` failed.
pub fn run_chat<R, C, I, O>(
    engine: &mut Engine<R, C>,
    settings: &ChatSettings,
    input: &mut I,
    output: &mut O,
) -> Result<Session>
where
    R: Rng,
    C: Clock,
    I: BufRead,
    O: Write,
{
    let bot = settings.bot_label.as_str();
    print_banner(output)?;

    let mut session = engine.start_session();
    let name = match &settings.preset_name {
        Some(name) => name.clone(),
        None => match read_line(input, output, "What would you like me to call you? ")? {
            Some(name) => name,
            None => {
                say_interrupted(output, bot, &session)?;
                return Ok(session);
            }
        },
    };
    session.set_user_name(&name);

    match session.user_name() {
        Some(name) => writeln!(output, "\nNice to meet you, {}! How are you feeling today?", name)?,
        None => writeln!(output, "\nHow are you feeling today?")?,
    }

    loop {
        let prompt = format!("\n{}: ", session.user_name().unwrap_or("You"));
        let Some(line) = read_line(input, output, &prompt)? else {
            info!("Input closed; ending session");
            say_interrupted(output, bot, &session)?;
            return Ok(session);
        };
        if line.is_empty() {
            continue;
        }

        match ChatInput::parse(&line) {
            ChatInput::Quit => {
                match session.user_name() {
                    Some(name) => writeln!(
                        output,
                        "\n{}: Take care, {}! Remember, I'm here whenever you need support.",
                        bot, name
                    )?,
                    None => writeln!(
                        output,
                        "\n{}: Take care! Remember, I'm here whenever you need support.",
                        bot
                    )?,
                }
                writeln!(output, "{}", engine.end_session_summary(&session))?;
                info!(
                    "Session ended after {} turn(s) and {} mood check-in(s)",
                    session.turn_count(),
                    session.mood_scores().len()
                );
                return Ok(session);
            }
            ChatInput::Mood => {
                let Some(score) = read_mood_score(input, output)? else {
                    say_interrupted(output, bot, &session)?;
                    return Ok(session);
                };
                let reply = engine.mood_check_in(&mut session, score);
                writeln!(output, "\n{}: {}", bot, reply)?;
            }
            ChatInput::Strategy => {
                let category = session
                    .last_turn()
                    .map(|text| engine.classify(text))
                    .unwrap_or(EmotionCategory::General);
                debug!("Strategy requested; context category '{}'", category);
                let strategy = engine.suggest_coping_strategy(category);
                writeln!(output, "\n{}: Here's a coping strategy for you:{}", bot, strategy)?;
            }
            ChatInput::Message(text) => {
                session.record_turn(text);
                let reply = respond_to_message(engine, settings, text);
                writeln!(output, "\n{}: {}", bot, reply)?;
            }
        }
    }
}

/// # Run Chat With Fallback (`run_chat_with_fallback`)
///
/// Same as [`run_chat`], but if the conversation fails part way the user still
/// sees an apology and the crisis hotline, written to `fallback`, before the
/// error is returned.
pub fn run_chat_with_fallback<R, C, I, O, F>(
    engine: &mut Engine<R, C>,
    settings: &ChatSettings,
    input: &mut I,
    output: &mut O,
    fallback: &mut F,
) -> Result<Session>
where
    R: Rng,
    C: Clock,
    I: BufRead,
    O: Write,
    F: Write,
{
    match run_chat(engine, settings, input, output) {
        Ok(session) => Ok(session),
        Err(err) => {
            warn!("Chat ended unexpectedly: {:#}", err);
            if let Err(notice_err) = write_failure_notice(fallback, &settings.bot_label) {
                warn!("Could not show the failure notice: {}", notice_err);
            }
            Err(err)
        }
    }
}

fn write_failure_notice<F: Write>(fallback: &mut F, bot: &str) -> std::io::Result<()> {
    writeln!(
        fallback,
        "\n{}: I'm sorry, something went wrong. Please remember that if you're in crisis, help is available.",
        bot
    )?;
    writeln!(fallback, "National Suicide Prevention Lifeline: 988")?;
    fallback.flush()
}

/// Reply to an ordinary message: the engine response, plus a coping strategy
/// for distressing emotions when enabled. Crisis replies are left as they are.
fn respond_to_message<R: Rng, C: Clock>(
    engine: &mut Engine<R, C>,
    settings: &ChatSettings,
    text: &str,
) -> String {
    let mut reply = engine.generate_response(text);
    if settings.suggest_strategies && !engine.detect_crisis(text) {
        let category = engine.classify(text);
        if category.is_distressing() {
            reply.push_str(&engine.suggest_coping_strategy(category));
        }
    }
    reply
}

fn print_banner<O: Write>(output: &mut O) -> Result<()> {
    writeln!(output, "💙 Solace - Mental Health Support Chat")?;
    writeln!(output, "{}", "=".repeat(40))?;
    writeln!(output, "Hello! I'm here to listen and provide support.")?;
    writeln!(output, "You can talk to me about anything on your mind.")?;
    writeln!(
        output,
        "Type 'mood' for a mood check-in, 'strategy' for coping tips, or 'quit' to end.\n"
    )?;
    Ok(())
}

fn say_interrupted<O: Write>(output: &mut O, bot: &str, session: &Session) -> Result<()> {
    writeln!(
        output,
        "\n\n{}: I understand you need to go. Take care of yourself! 💙",
        bot
    )?;
    if let Some(name) = session.user_name() {
        writeln!(output, "Goodbye, {}.", name)?;
    }
    Ok(())
}

/// Asks for a mood score until a valid one is given. `None` if input ends first.
fn read_mood_score<I: BufRead, O: Write>(input: &mut I, output: &mut O) -> Result<Option<MoodScore>> {
    loop {
        writeln!(output, "\nOn a scale of 1-10, how would you rate your current mood?")?;
        writeln!(output, "(1 = Very low, 10 = Excellent)")?;
        let Some(answer) = read_line(input, output, "Your mood score: ")? else {
            return Ok(None);
        };
        match answer.parse::<i64>() {
            Ok(value) => match MoodScore::new(value) {
                Ok(score) => return Ok(Some(score)),
                Err(err) => {
                    debug!("Rejected mood input: {}", err);
                    writeln!(output, "Please enter a number between 1 and 10.")?;
                }
            },
            Err(_) => writeln!(output, "Please enter a valid number.")?,
        }
    }
}

/// Prints `prompt` and reads one trimmed line. `None` at end of input.
fn read_line<I: BufRead, O: Write>(input: &mut I, output: &mut O, prompt: &str) -> Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output
        .flush()
        .map_err(SolaceError::from)
        .context("Failed to flush output")?;

    let mut bytes = Vec::new();
    let read = input
        .read_until(b'\n', &mut bytes)
        .map_err(SolaceError::from)
        .context("Failed to read from input")?;
    if read == 0 {
        return Ok(None);
    }
    // Undecodable bytes become U+FFFD instead of ending the conversation.
    Ok(Some(String::from_utf8_lossy(&bytes).trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tables::{ANXIETY_STRATEGIES, COPING_STRATEGY_MARKER, CRISIS_SUPPORT_MESSAGE};
    use crate::engine::FixedClock;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn engine() -> Engine<StdRng, FixedClock> {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        Engine::new(StdRng::seed_from_u64(11), FixedClock(now))
    }

    fn chat(script: &str, settings: &ChatSettings) -> (Session, String) {
        chat_bytes(script.as_bytes(), settings)
    }

    fn chat_bytes(script: &[u8], settings: &ChatSettings) -> (Session, String) {
        let mut engine = engine();
        let mut input = Cursor::new(script.to_vec());
        let mut output = Vec::new();
        let session = run_chat(&mut engine, settings, &mut input, &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ChatInput::parse("QUIT"), ChatInput::Quit);
        assert_eq!(ChatInput::parse("Goodbye"), ChatInput::Quit);
        assert_eq!(ChatInput::parse("mood"), ChatInput::Mood);
        assert_eq!(ChatInput::parse("Strategy"), ChatInput::Strategy);
        assert_eq!(
            ChatInput::parse("my mood is low"),
            ChatInput::Message("my mood is low")
        );
    }

    #[test]
    fn test_full_conversation() {
        let (session, out) = chat(
            "Sam\n\nI feel so anxious and scared about tomorrow\nmood\nten\n0\n2\nquit\n",
            &ChatSettings::default(),
        );

        assert_eq!(session.user_name(), Some("Sam"));
        assert_eq!(session.turns(), ["I feel so anxious and scared about tomorrow"]);
        assert_eq!(session.mood_scores(), [MoodScore::new(2).unwrap()]);

        assert!(out.contains("Nice to meet you, Sam! How are you feeling today?"));
        assert!(out.contains("Please enter a valid number."));
        assert!(out.contains("Please enter a number between 1 and 10."));
        assert!(out.contains("A score of 2 suggests"));
        assert!(out.contains("Bot: Take care, Sam!"));
        assert!(out.contains("• Messages exchanged: 1"));
        assert!(out.contains("• Average mood score: 2.0/10"));
        // Anxiety reply is followed by an anxiety coping strategy.
        assert!(ANXIETY_STRATEGIES.iter().any(|s| out.contains(s)));
    }

    #[test]
    fn test_commands_are_not_turns() {
        let (session, out) = chat("\nstrategy\nmood\n8\nbye\n", &ChatSettings::default());

        assert_eq!(session.turn_count(), 0);
        assert!(out.contains("How are you feeling today?"));
        assert!(out.contains("Here's a coping strategy for you:"));
        assert!(out.contains("\nYou: "));
        assert!(out.contains("Bot: Take care! Remember"));
        assert!(out.contains("• Messages exchanged: 0"));
    }

    #[test]
    fn test_strategy_uses_last_message() {
        let settings = ChatSettings {
            preset_name: Some("Ana".into()),
            suggest_strategies: false,
            ..Default::default()
        };
        let (_, out) = chat("I'm so nervous\nstrategy\nexit\n", &settings);

        let (_, tip) = out
            .split_once("Here's a coping strategy for you:")
            .expect("strategy line missing");
        let tip = tip.strip_prefix(COPING_STRATEGY_MARKER).unwrap();
        assert!(ANXIETY_STRATEGIES.iter().any(|s| tip.starts_with(s)));
        // The preset name skips the question.
        assert!(!out.contains("What would you like me to call you?"));
    }

    #[test]
    fn test_crisis_reply_has_no_strategy() {
        let settings = ChatSettings {
            preset_name: Some("Ana".into()),
            ..Default::default()
        };
        let (_, out) = chat("I'm so sad I want to end it all\nquit\n", &settings);

        assert!(out.contains(CRISIS_SUPPORT_MESSAGE));
        assert!(!out.contains("Coping Strategy"));
    }

    #[test]
    fn test_end_of_input_says_goodbye_without_summary() {
        let (session, out) = chat("Sam\nI'm tired\n", &ChatSettings::default());

        assert_eq!(session.turn_count(), 1);
        assert!(out.contains("I understand you need to go."));
        assert!(out.contains("Goodbye, Sam."));
        assert!(!out.contains("Session Summary"));
    }

    #[test]
    fn test_end_of_input_during_mood_prompt() {
        let (session, out) = chat("Sam\nmood\n", &ChatSettings::default());

        assert!(session.mood_scores().is_empty());
        assert!(out.contains("I understand you need to go."));
    }

    /// Accepts nothing; every write fails.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Fails every read.
    struct UnreadableInput;

    impl std::io::Read for UnreadableInput {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "device gone"))
        }
    }

    impl BufRead for UnreadableInput {
        fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "device gone"))
        }
        fn consume(&mut self, _amt: usize) {}
    }

    #[test]
    fn test_invalid_utf8_line_keeps_session_alive() {
        let (session, out) = chat_bytes(
            b"Sam\nI'm sad\nmood\n3\ncaf\xe9 was nice\nquit\n",
            &ChatSettings::default(),
        );

        assert_eq!(session.turns(), ["I'm sad", "caf\u{FFFD} was nice"]);
        assert_eq!(session.mood_scores(), [MoodScore::new(3).unwrap()]);
        assert!(out.contains("Session Summary"));
        assert!(out.contains("• Average mood score: 3.0/10"));
    }

    #[test]
    fn test_failed_output_shows_hotline_on_fallback() {
        let mut engine = engine();
        let mut input = Cursor::new(b"Sam\nquit\n".to_vec());
        let mut fallback = Vec::new();

        let result = run_chat_with_fallback(
            &mut engine,
            &ChatSettings::default(),
            &mut input,
            &mut BrokenPipe,
            &mut fallback,
        );

        assert!(result.is_err());
        let notice = String::from_utf8(fallback).unwrap();
        assert!(notice.contains(
            "Bot: I'm sorry, something went wrong. Please remember that if you're in crisis, help is available."
        ));
        assert!(notice.contains("National Suicide Prevention Lifeline: 988"));
    }

    #[test]
    fn test_failed_input_shows_hotline_on_fallback() {
        let mut engine = engine();
        let mut output = Vec::new();
        let mut fallback = Vec::new();

        let result = run_chat_with_fallback(
            &mut engine,
            &ChatSettings::default(),
            &mut UnreadableInput,
            &mut output,
            &mut fallback,
        );

        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read from input"));
        assert!(String::from_utf8(fallback).unwrap().contains("988"));
    }

    #[test]
    fn test_fallback_unused_on_success() {
        let mut engine = engine();
        let mut input = Cursor::new(b"Sam\nquit\n".to_vec());
        let mut output = Vec::new();
        let mut fallback = Vec::new();

        run_chat_with_fallback(
            &mut engine,
            &ChatSettings::default(),
            &mut input,
            &mut output,
            &mut fallback,
        )
        .unwrap();

        assert!(fallback.is_empty());
    }

    #[test]
    fn test_custom_bot_label() {
        let settings = ChatSettings {
            bot_label: "Solace".into(),
            preset_name: Some("Jo".into()),
            suggest_strategies: true,
        };
        let (_, out) = chat("hello\nquit\n", &settings);
        assert!(out.contains("\nSolace: "));
        assert!(!out.contains("\nBot: "));
    }
}
