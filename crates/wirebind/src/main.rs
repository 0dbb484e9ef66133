//! wirebind - Entry Point
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `wirebind check <MODEL>` | Analyze registrations and print a report |
//! | `wirebind generate <MODEL>` | Emit registration code for valid registrations |
//! | `wirebind diagnostics` | List the diagnostic catalog |

use clap::Parser;
use std::process::ExitCode;
use wirebind::{Cli, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
