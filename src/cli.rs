use std::fmt::Write as _;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use zeroize::Zeroizing;

use crate::commands::{CombineResult, combine_shares, split_secret};
use crate::domain::SplitConfig;

#[derive(Parser)]
#[command(name = "shamir384")]
#[command(about = "Split a 256-bit hex secret into threshold shares, or combine shares back")]
#[command(
    override_usage = "shamir384 [--json] <THRESHOLD> <TOTAL> <SECRET>\n       shamir384 [--json] <THRESHOLD> <TOTAL> <SHARE> <SHARE>..."
)]
pub struct Cli {
    /// Minimum number of shares needed to reconstruct
    pub threshold: Option<u16>,

    /// Number of shares to create
    pub total: Option<u16>,

    /// One hex secret to split, or two or more shares to combine
    pub inputs: Vec<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

/// What the positional arguments ask for
#[derive(Debug, PartialEq, Eq)]
pub enum Mode<'a> {
    /// Fewer than three positional arguments
    Usage,
    Split {
        threshold: u16,
        total: u16,
        secret: &'a str,
    },
    Combine {
        shares: &'a [String],
    },
}

impl Cli {
    /// Classifies the invocation by its positional argument count
    #[must_use]
    pub fn mode(&self) -> Mode<'_> {
        match (self.threshold, self.total, self.inputs.as_slice()) {
            (Some(threshold), Some(total), [secret]) => Mode::Split {
                threshold,
                total,
                secret: secret.as_str(),
            },
            (Some(_), Some(_), shares @ [_, _, ..]) => Mode::Combine { shares },
            _ => Mode::Usage,
        }
    }

    /// Runs the requested command and returns what should be printed to stdout
    ///
    /// # Errors
    /// Returns an error if the secret or any share is invalid, or if the
    /// threshold and total do not form a valid split
    pub fn run(&self) -> Result<Zeroizing<String>> {
        let mut output = Zeroizing::new(String::new());

        match self.mode() {
            Mode::Usage => {
                output.push_str(&Self::command().render_help().to_string());
                if !output.ends_with('\n') {
                    output.push('\n');
                }
            }
            Mode::Split {
                threshold,
                total,
                secret,
            } => {
                let config = SplitConfig::from_raw(threshold, total)?;
                let result = split_secret(secret, config)?;

                if self.json {
                    output.push_str(&serde_json::to_string_pretty(&result)?);
                    output.push('\n');
                } else {
                    for share in &result.shares {
                        writeln!(output, "{share}")?;
                    }
                }
            }
            Mode::Combine { shares } => {
                let secret = combine_shares(shares)?;

                if self.json {
                    let result = CombineResult { secret };
                    output.push_str(&serde_json::to_string_pretty(&result)?);
                } else {
                    output.push_str(&secret);
                }
                output.push('\n');
            }
        }

        Ok(output)
    }
}
