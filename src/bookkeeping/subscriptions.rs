use std::fs::{create_dir_all, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::{Result, TimetableError};

pub const EMAILS_FILE: &str = "emails.txt";

/// Agrega un correo (una línea) a `emails.txt` en `data_dir`.
pub fn subscribe_email(data_dir: &Path, email: &str) -> Result<()> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') || email.contains('\n') {
        return Err(TimetableError::InvalidInput(format!("invalid email '{}'", email)));
    }

    create_dir_all(data_dir)?;
    let mut f = OpenOptions::new().create(true).append(true).open(data_dir.join(EMAILS_FILE))?;
    writeln!(f, "{}", email)?;
    Ok(())
}
