// src/system/io.rs

use dialoguer::{Input, theme::ColorfulTheme};
use std::io::{self, BufRead, IsTerminal, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Error de entrada/salida: {0}")]
    Io(#[from] io::Error),
    #[error("Error de Interfaz de Usuario: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

/// Pide al usuario una línea. Devuelve `None` si la entrada terminó o se interrumpió.
pub fn prompt(message: &str) -> Result<Option<String>, PromptError> {
    if io::stdin().is_terminal() {
        prompt_interactive(message)
    } else {
        prompt_plain(message, &mut io::stdin().lock())
    }
}

fn prompt_interactive(message: &str) -> Result<Option<String>, PromptError> {
    let result = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .allow_empty(true)
        .interact_text();

    match result {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(dialoguer::Error::IO(e))
            if matches!(
                e.kind(),
                io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof
            ) =>
        {
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Lectura sin terminal (tuberías, scripts).
fn prompt_plain<R: BufRead>(message: &str, reader: &mut R) -> Result<Option<String>, PromptError> {
    print!("{}: ", message);
    io::stdout().flush()?; // Asegurarse de que el mensaje se muestre antes de leer.

    let mut buffer = String::new();
    if reader.read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}
