//! Operator interaction
//!
//! Every stage talks to the operator through [`Prompter`], so the pipeline
//! can run against cliclack in the terminal or against a script in tests.

use anyhow::Result;

/// One option in a select or multiselect prompt
#[derive(Debug, Clone)]
pub struct Choice<T> {
    pub value: T,
    pub label: String,
    pub hint: String,
}

impl<T> Choice<T> {
    pub fn new(value: T, label: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            hint: hint.into(),
        }
    }
}

/// Questions and status messages shown to the operator
pub trait Prompter {
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    fn select<T: Clone + Eq + 'static>(
        &mut self,
        prompt: &str,
        choices: &[Choice<T>],
        default: &T,
    ) -> Result<T>;

    /// Zero or more of `choices`, in the order they are listed
    fn multiselect<T: Clone + Eq + 'static>(
        &mut self,
        prompt: &str,
        choices: &[Choice<T>],
    ) -> Result<Vec<T>>;

    /// A non-negative decimal integer
    fn input_number(&mut self, prompt: &str, default: u32) -> Result<u32>;

    /// Whether answers come from a person at a terminal
    fn is_interactive(&self) -> bool {
        true
    }

    fn info(&mut self, message: &str) -> Result<()>;
    fn step(&mut self, message: &str) -> Result<()>;
    fn success(&mut self, message: &str) -> Result<()>;
    fn warning(&mut self, message: &str) -> Result<()>;
    fn error(&mut self, message: &str) -> Result<()>;
}

/// Answers every question with its default (`--yes`)
///
/// Multiselects answer with nothing selected. Messages pass through to the
/// wrapped prompter.
pub struct AssumeDefaults<P> {
    inner: P,
}

impl<P: Prompter> AssumeDefaults<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Prompter> Prompter for AssumeDefaults<P> {
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let answer = if default { "yes" } else { "no" };
        self.inner.info(&format!("{} {}", prompt, answer))?;
        Ok(default)
    }

    fn select<T: Clone + Eq + 'static>(
        &mut self,
        prompt: &str,
        choices: &[Choice<T>],
        default: &T,
    ) -> Result<T> {
        if let Some(choice) = choices.iter().find(|c| &c.value == default) {
            self.inner.info(&format!("{} {}", prompt, choice.label))?;
        }
        Ok(default.clone())
    }

    fn multiselect<T: Clone + Eq + 'static>(
        &mut self,
        _prompt: &str,
        _choices: &[Choice<T>],
    ) -> Result<Vec<T>> {
        Ok(Vec::new())
    }

    fn input_number(&mut self, prompt: &str, default: u32) -> Result<u32> {
        self.inner.info(&format!("{} {}", prompt, default))?;
        Ok(default)
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn info(&mut self, message: &str) -> Result<()> {
        self.inner.info(message)
    }

    fn step(&mut self, message: &str) -> Result<()> {
        self.inner.step(message)
    }

    fn success(&mut self, message: &str) -> Result<()> {
        self.inner.success(message)
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        self.inner.warning(message)
    }

    fn error(&mut self, message: &str) -> Result<()> {
        self.inner.error(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedPrompter;

    #[test]
    fn test_defaults_never_consult_script() {
        let mut prompter = AssumeDefaults::new(ScriptedPrompter::new(vec![]));
        let choices = vec![Choice::new(1, "one", ""), Choice::new(2, "two", "")];

        assert!(prompter.confirm("Proceed?", true).unwrap());
        assert!(!prompter.confirm("Delete?", false).unwrap());
        assert_eq!(prompter.select("Pick", &choices, &2).unwrap(), 2);
        assert!(prompter.multiselect("Extras", &choices).unwrap().is_empty());
        assert_eq!(prompter.input_number("UID", 1000).unwrap(), 1000);
        assert!(!prompter.is_interactive());

        let inner = prompter.into_inner();
        assert!(inner.asked.is_empty());
        assert!(inner.logged("Pick two"));
    }
}
