/// One line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum InputLine {
    Number(f64),
    Random,
    Exit,
    Invalid(String),
}

pub struct InputValidator;

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl InputValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, line: &str) -> InputLine {
        let trimmed = line.trim();

        if trimmed.eq_ignore_ascii_case("exit") {
            return InputLine::Exit;
        }
        if trimmed.eq_ignore_ascii_case("random") {
            return InputLine::Random;
        }

        match self.parse_number(trimmed) {
            Some(number) => InputLine::Number(number),
            None => InputLine::Invalid(trimmed.to_string()),
        }
    }

    /// Accepts anything `f64` parses, except the empty string.
    pub fn parse_number(&self, text: &str) -> Option<f64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        text.parse::<f64>().ok()
    }
}
