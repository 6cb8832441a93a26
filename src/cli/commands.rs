use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{BufRead, Write};

use crate::ai::{BogoSorter, ChatBackend, OpenAiClient, PromptBuilder};
use crate::cli::{Commands, OutputFormatter, Spinner};
use crate::config::{Settings, TargetOverrides};
use crate::utils::{InputLine, InputValidator, RandomNumbers};

/// Numbers gathered by the interactive prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Collected {
    Typed(Vec<f64>),
    Generated(Vec<f64>),
}

impl Collected {
    pub fn numbers(&self) -> &[f64] {
        match self {
            Collected::Typed(numbers) | Collected::Generated(numbers) => numbers,
        }
    }
}

pub struct CommandHandler<B = OpenAiClient> {
    sorter: BogoSorter<B>,
    settings: Settings,
    formatter: OutputFormatter,
    validator: InputValidator,
    random: RandomNumbers,
    show_spinner: bool,
}

impl CommandHandler<OpenAiClient> {
    pub fn new(settings: Settings) -> Result<Self> {
        let client = OpenAiClient::new(settings.timeout())
            .context("Failed to create HTTP client")?
            .with_temperature(settings.model.temperature);
        Ok(Self::with_backend(settings, client))
    }
}

impl<B: ChatBackend> CommandHandler<B> {
    pub fn with_backend(settings: Settings, backend: B) -> Self {
        let sorter = BogoSorter::new(backend, settings.target());
        let formatter = OutputFormatter::new(settings.output.use_colors);
        let random = RandomNumbers::new(&settings.demo);

        Self {
            sorter,
            settings,
            formatter,
            validator: InputValidator::new(),
            random,
            show_spinner: true,
        }
    }

    pub fn without_spinner(mut self) -> Self {
        self.show_spinner = false;
        self
    }

    pub async fn handle_sort(&self, numbers: &[f64], overrides: &TargetOverrides) -> Result<String> {
        debug!("Sorting {} numbers", numbers.len());

        let spinner = self
            .show_spinner
            .then(|| Spinner::new("Consulting the model..."));
        let result = self.sorter.sort_with(numbers, overrides).await;
        if let Some(spinner) = spinner {
            spinner.stop();
        }

        let result = result.context("Failed to get a reply from the model")?;
        info!("Model answered for {} numbers", numbers.len());
        Ok(self.formatter.format_result(&result))
    }

    pub async fn handle_command(
        &self,
        command: Commands,
        overrides: &TargetOverrides,
    ) -> Result<String> {
        match command {
            Commands::Interactive => {
                let stdin = std::io::stdin();
                let stdout = std::io::stdout();
                self.handle_interactive(stdin.lock(), stdout.lock(), overrides)
                    .await
            }
            Commands::Config { init } => {
                let mut output = String::new();
                if init {
                    output.push_str(&self.handle_init()?);
                    output.push('\n');
                }
                output.push_str(&self.handle_config(overrides)?);
                Ok(output)
            }
        }
    }

    /// Runs the prompt loop on `input`, then sorts whatever was collected.
    pub async fn handle_interactive<R: BufRead, W: Write>(
        &self,
        input: R,
        mut output: W,
        overrides: &TargetOverrides,
    ) -> Result<String> {
        let collected = self.collect_numbers(input, &mut output)?;
        let numbers = collected.numbers();

        if numbers.is_empty() {
            return Ok("No numbers entered. Exiting.".to_string());
        }

        writeln!(
            output,
            "\nSorting {} number(s) using Bogomagic...",
            numbers.len()
        )?;
        output.flush()?;

        let result = self.handle_sort(numbers, overrides).await?;
        Ok(format!("\n{result}"))
    }

    pub fn collect_numbers<R: BufRead, W: Write>(
        &self,
        mut input: R,
        output: &mut W,
    ) -> Result<Collected> {
        let mut numbers = Vec::new();

        writeln!(
            output,
            "Enter numbers to sort (type 'exit' to finish, or 'random' for chaos):"
        )?;

        loop {
            write!(output, "> ")?;
            output.flush()?;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .context("Failed to read input")?;
            if read == 0 {
                // EOF ends input like `exit`
                writeln!(output)?;
                break;
            }

            match self.validator.classify(&line) {
                InputLine::Exit => break,
                InputLine::Random => {
                    let generated = self.random.generate();
                    writeln!(
                        output,
                        "Generated {} random numbers: [{}]",
                        generated.len(),
                        PromptBuilder::join_numbers(&generated)
                    )?;
                    return Ok(Collected::Generated(generated));
                }
                InputLine::Number(number) => {
                    numbers.push(number);
                    writeln!(output, "Added: {number}")?;
                }
                InputLine::Invalid(text) => {
                    writeln!(
                        output,
                        "{}",
                        self.formatter.format_warning(&format!(
                            "Invalid input: '{text}'. Please enter a number, 'random', or 'exit'."
                        ))
                    )?;
                }
            }
        }

        Ok(Collected::Typed(numbers))
    }

    fn handle_init(&self) -> Result<String> {
        let path = self.settings.get_config_path()?;
        if Settings::init_file(&path)? {
            info!("Wrote default config to {}", path.display());
            Ok(self
                .formatter
                .format_success(&format!("Created {}", path.display())))
        } else {
            Ok(self
                .formatter
                .format_info(&format!("{} already exists, leaving it alone", path.display())))
        }
    }

    fn handle_config(&self, overrides: &TargetOverrides) -> Result<String> {
        let target = self.sorter.target().with_overrides(overrides);
        let timeout = self
            .settings
            .model
            .timeout_secs
            .map_or("none".to_string(), |secs| format!("{secs}s"));

        Ok(format!(
            "Bogo Configuration:\n\
            - Config file: {}\n\
            - Model: {}\n\
            - API URL: {}\n\
            - API key: {}\n\
            - Temperature: {}\n\
            - Timeout: {}\n\
            - Use colors: {}",
            self.settings
                .get_config_path()
                .map_or("unavailable".to_string(), |p| p.display().to_string()),
            target.model,
            target.api_url,
            mask_key(&target.api_key),
            self.settings.model.temperature,
            timeout,
            self.settings.output.use_colors
        ))
    }

    pub fn format_error(&self, message: &str) -> String {
        self.formatter.format_error(message)
    }

    pub fn format_info(&self, message: &str) -> String {
        self.formatter.format_info(message)
    }
}

fn mask_key(key: &str) -> String {
    let visible: String = key.chars().take(3).collect();
    if key.chars().count() <= 6 {
        "***".to_string()
    } else {
        format!("{visible}***")
    }
}
