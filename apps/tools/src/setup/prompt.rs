use std::collections::VecDeque;

use console::style;

use crate::errors::SetupError;

/// Kind of message shown between prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Heading,
    Info,
    Hint,
    Success,
    Warning,
    Error,
}

/// Everything the setup flow needs from a terminal.
pub trait Prompter {
    /// Yes/no gate. Anything other than an explicit yes is a no.
    fn confirm(&mut self, prompt: &str) -> Result<bool, SetupError>;

    /// Free-text answer, possibly empty.
    fn input(&mut self, prompt: &str) -> Result<String, SetupError>;

    /// Like [`Prompter::input`] but without echoing the answer.
    fn password(&mut self, prompt: &str) -> Result<String, SetupError>;

    fn message(&mut self, tone: Tone, text: &str) -> Result<(), SetupError>;

    /// Free-text answer where a blank reply selects `default`.
    fn input_or(&mut self, prompt: &str, default: &str) -> Result<String, SetupError> {
        let answer = self.input(&format!("{prompt} [{default}]"))?;
        if answer.trim().is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }
}

/// `y` or `yes`, case-insensitive.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Interactive prompter backed by `cliclack`.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, prompt: &str) -> Result<bool, SetupError> {
        Ok(cliclack::confirm(prompt).initial_value(false).interact()?)
    }

    fn input(&mut self, prompt: &str) -> Result<String, SetupError> {
        Ok(cliclack::input(prompt).required(false).interact()?)
    }

    /// Blank answers are allowed: they skip a key, leave a local password
    /// empty, or ask for a generated secret.
    fn password(&mut self, prompt: &str) -> Result<String, SetupError> {
        Ok(cliclack::password(prompt)
            .mask('▪')
            .allow_empty()
            .interact()?)
    }

    fn message(&mut self, tone: Tone, text: &str) -> Result<(), SetupError> {
        match tone {
            Tone::Heading => cliclack::log::step(style(text).blue().bold())?,
            Tone::Info => cliclack::log::info(text)?,
            Tone::Hint => cliclack::log::info(style(text).yellow())?,
            Tone::Success => cliclack::log::success(text)?,
            Tone::Warning => cliclack::log::warning(text)?,
            Tone::Error => cliclack::log::error(text)?,
        }
        Ok(())
    }
}

/// Replays canned answers in order and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
    pub messages: Vec<(Tone, String)>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    pub fn messages_with(&self, tone: Tone) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .filter(move |(t, _)| *t == tone)
            .map(|(_, m)| m.as_str())
    }

    fn next(&mut self, prompt: &str) -> Result<String, SetupError> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| SetupError::InputExhausted(prompt.to_string()))
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, prompt: &str) -> Result<bool, SetupError> {
        self.next(prompt).map(|a| is_affirmative(&a))
    }

    fn input(&mut self, prompt: &str) -> Result<String, SetupError> {
        self.next(prompt)
    }

    fn password(&mut self, prompt: &str) -> Result<String, SetupError> {
        self.next(prompt)
    }

    fn message(&mut self, tone: Tone, text: &str) -> Result<(), SetupError> {
        self.messages.push((tone, text.to_string()));
        Ok(())
    }
}
