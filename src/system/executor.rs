// src/system/executor.rs

use std::process::{Command as StdCommand, ExitStatus, Stdio};
use thiserror::Error;

use crate::models::FinalCommand;

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("El comando '{0}' no se pudo ejecutar: {1}")]
    CommandFailed(String, std::io::Error),
}

/// Ejecuta el comando final y devuelve el código de salida del proceso hijo.
/// Un código distinto de cero solo se informa: galias no lo interpreta.
pub fn execute_command(
    command: &FinalCommand,
    shell: Option<&str>,
) -> Result<Option<i32>, ExecutionError> {
    log::info!("Ejecutando comando: '{}'", command);

    let mut process = match command {
        FinalCommand::Native { program, args } => {
            let mut process = StdCommand::new(program);
            process.args(args);
            process
        }
        // Límite de confianza: la línea se entrega a la shell sin sanear.
        FinalCommand::Shell { command_line } => {
            let mut process = shell_command(shell);
            process.arg(command_line);
            process
        }
    };

    let status: ExitStatus = process
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit()) // Redirige stdout del subproceso a nuestro stdout
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| ExecutionError::CommandFailed(command.to_string(), e))?;

    if !status.success() {
        log::warn!(
            "El comando '{}' terminó con un código de error: {:?}",
            command,
            status.code()
        );
    }

    Ok(status.code())
}

/// Determina la shell a usar. En Windows, `cmd`.
fn shell_command(shell: Option<&str>) -> StdCommand {
    let (program, arg) = match shell {
        Some(program) if cfg!(target_os = "windows") => (program, "/C"),
        Some(program) => (program, "-c"),
        None if cfg!(target_os = "windows") => ("cmd", "/C"),
        None => ("sh", "-c"),
    };
    let mut command = StdCommand::new(program);
    command.arg(arg);
    command
}
