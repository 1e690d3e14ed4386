//! Error handling and display for the CLI.

use colored::Colorize;
use routeid::IdError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid ID configuration")]
    Config(#[source] IdError),

    #[error("Malformed ID '{input}'")]
    Malformed {
        input: String,
        #[source]
        source: IdError,
    },

    #[error(transparent)]
    Id(#[from] IdError),
}

impl CliError {
    /// Wrap a decode failure with the input that caused it.
    pub fn malformed(input: impl Into<String>, source: IdError) -> Self {
        Self::Malformed {
            input: input.into(),
            source,
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::Config(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Check `characters` and `length` in the config file or the ROUTEID_* environment variables."
                        .yellow()
                );
            }
            CliError::Malformed { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: IDs only decode with the alphabet and length they were generated with."
                        .yellow()
                );
            }
            CliError::Id(IdError::UnknownCharacter { .. }) => {
                eprintln!(
                    "\n{}",
                    "Hint: Run `routeid config show` to see the configured alphabet.".yellow()
                );
            }
            CliError::Id(_) => {}
        }
    }
}
