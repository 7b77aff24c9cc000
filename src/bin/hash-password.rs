//! Generates a password record for the `AUTH_PASSWORD_HASH` environment
//! variable.
//!
//! ```bash
//! cargo run --features cli --bin hash-password -- 'your-password-here'
//! ```

use std::process::ExitCode;

use clap::Parser;

use wicket::crypto::{PasswordHasher, Pbkdf2Hasher};

/// Hash a password into a PBKDF2 record for AUTH_PASSWORD_HASH.
#[derive(Parser, Debug)]
#[command(name = "hash-password")]
#[command(version, about = "Generate a PBKDF2 password record for AUTH_PASSWORD_HASH")]
struct Cli {
    /// Plaintext password to hash. Quote it if it contains shell
    /// metacharacters.
    password: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match Pbkdf2Hasher::default().hash(&cli.password) {
        Ok(record) => {
            println!();
            println!("AUTH_PASSWORD_HASH={record}");
            println!();
            println!("Add this to the deployment environment or your secret store.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
