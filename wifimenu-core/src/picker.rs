/*!
 * Menu Picker
 * Single-choice and masked-input prompts through rofi
 */

use crate::command;
use crate::error::CommandError;

#[allow(async_fn_in_trait)]
pub trait Picker {
    /// Shows `options` and returns the chosen line, `None` if the user dismissed the menu.
    async fn choose(&self, options: &[String], prompt: &str) -> Result<Option<String>, CommandError>;

    /// Masked single-line input, `None` if cancelled or left empty.
    async fn read_secret(&self, prompt: &str) -> Result<Option<String>, CommandError>;
}

pub struct Rofi {
    program: String,
    menu_theme: String,
    password_theme: String,
}

impl Rofi {
    pub fn new(
        program: impl Into<String>,
        menu_theme: impl Into<String>,
        password_theme: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            menu_theme: menu_theme.into(),
            password_theme: password_theme.into(),
        }
    }
}

impl Picker for Rofi {
    async fn choose(&self, options: &[String], prompt: &str) -> Result<Option<String>, CommandError> {
        let input = options.join("\n");
        let out = command::run(
            &self.program,
            &["-dmenu", "-i", "-p", prompt, "-format", "s", "-theme-str", &self.menu_theme],
            Some(&input),
        )
        .await?;

        if !out.success() {
            tracing::debug!("menu dismissed (status {})", out.status);
            return Ok(None);
        }

        let selection = out.stdout.trim();
        Ok((!selection.is_empty()).then(|| selection.to_string()))
    }

    async fn read_secret(&self, prompt: &str) -> Result<Option<String>, CommandError> {
        let out = command::run(
            &self.program,
            &["-dmenu", "-p", prompt, "-password", "-theme-str", &self.password_theme],
            None,
        )
        .await?;

        if !out.success() {
            return Ok(None);
        }

        Ok(strip_line_ending(&out.stdout).map(str::to_string))
    }
}

/// Drops the trailing newline rofi prints; other whitespace belongs to the secret.
fn strip_line_ending(stdout: &str) -> Option<&str> {
    let secret = stdout
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(stdout);
    (!secret.is_empty()).then_some(secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_keeps_inner_whitespace() {
        assert_eq!(strip_line_ending(" pass word \n"), Some(" pass word "));
        assert_eq!(strip_line_ending("hunter2\r\n"), Some("hunter2"));
        assert_eq!(strip_line_ending("hunter2"), Some("hunter2"));
        assert_eq!(strip_line_ending("\n"), None);
        assert_eq!(strip_line_ending(""), None);
    }
}
