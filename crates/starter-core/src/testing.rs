//! Test doubles for the prompter and command runner

use crate::prompt::{Choice, Prompter};
use crate::runtime::{CommandLine, CommandRunner, Outcome};
use anyhow::Result;
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Answer {
    Confirm(bool),
    /// Index into the listed choices
    Select(usize),
    Multi(Vec<usize>),
    Number(u32),
}

/// Replays scripted answers and records everything shown
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub asked: Vec<String>,
    pub messages: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            ..Self::default()
        }
    }

    fn next(&mut self, prompt: &str) -> Answer {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer for '{}'", prompt))
    }

    pub fn logged(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool> {
        match self.next(prompt) {
            Answer::Confirm(value) => Ok(value),
            other => panic!("expected confirm for '{}', got {:?}", prompt, other),
        }
    }

    fn select<T: Clone + Eq + 'static>(
        &mut self,
        prompt: &str,
        choices: &[Choice<T>],
        _default: &T,
    ) -> Result<T> {
        match self.next(prompt) {
            Answer::Select(idx) => Ok(choices[idx].value.clone()),
            other => panic!("expected select for '{}', got {:?}", prompt, other),
        }
    }

    fn multiselect<T: Clone + Eq + 'static>(
        &mut self,
        prompt: &str,
        choices: &[Choice<T>],
    ) -> Result<Vec<T>> {
        match self.next(prompt) {
            Answer::Multi(indices) => Ok(indices
                .into_iter()
                .map(|idx| choices[idx].value.clone())
                .collect()),
            other => panic!("expected multiselect for '{}', got {:?}", prompt, other),
        }
    }

    fn input_number(&mut self, prompt: &str, _default: u32) -> Result<u32> {
        match self.next(prompt) {
            Answer::Number(value) => Ok(value),
            other => panic!("expected number for '{}', got {:?}", prompt, other),
        }
    }

    fn info(&mut self, message: &str) -> Result<()> {
        self.messages.push(message.to_string());
        Ok(())
    }

    fn step(&mut self, message: &str) -> Result<()> {
        self.messages.push(message.to_string());
        Ok(())
    }

    fn success(&mut self, message: &str) -> Result<()> {
        self.messages.push(message.to_string());
        Ok(())
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        self.messages.push(format!("warning: {}", message));
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        self.messages.push(format!("error: {}", message));
        Ok(())
    }
}

/// Records commands instead of running them
///
/// A command whose rendered form contains a registered needle fails (or
/// times out) instead of succeeding.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub calls: Vec<CommandLine>,
    failing: Vec<String>,
    timing_out: Vec<String>,
    unstartable: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_on(mut self, needle: &str) -> Self {
        self.failing.push(needle.to_string());
        self
    }

    pub fn time_out_on(mut self, needle: &str) -> Self {
        self.timing_out.push(needle.to_string());
        self
    }

    pub fn refuse_to_start(mut self, needle: &str) -> Self {
        self.unstartable.push(needle.to_string());
        self
    }

    /// Rendered command lines, in call order
    pub fn rendered(&self) -> Vec<String> {
        self.calls.iter().map(ToString::to_string).collect()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&mut self, command: &CommandLine) -> Result<Outcome> {
        self.calls.push(command.clone());
        let rendered = command.to_string();

        if self.unstartable.iter().any(|n| rendered.contains(n)) {
            anyhow::bail!("Failed to start: {}", rendered);
        }
        if self.timing_out.iter().any(|n| rendered.contains(n)) {
            return Ok(Outcome::TimedOut(Duration::from_secs(600)));
        }
        if self.failing.iter().any(|n| rendered.contains(n)) {
            return Ok(Outcome::Failed {
                code: Some(1),
                stderr: format!("{} exploded", command.program),
            });
        }
        Ok(Outcome::Success)
    }
}
