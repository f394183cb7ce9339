// src/system/alias_source.rs

use std::process::{Command, Stdio};
use thiserror::Error;

use crate::constants::ALIAS_KEY_PATTERN;

#[derive(Error, Debug)]
pub enum ConfigReadError {
    #[error("No se pudo ejecutar '{program}' para leer los alias: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{program} config' falló con código {code:?}: {stderr}")]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Origen de las definiciones de alias: líneas `alias.<nombre> <definición>`.
pub trait AliasSource {
    fn alias_lines(&self) -> Result<Vec<String>, ConfigReadError>;
}

/// Lee los alias con `git config --get-regexp`.
pub struct GitConfigSource {
    program: String,
}

impl GitConfigSource {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl AliasSource for GitConfigSource {
    fn alias_lines(&self) -> Result<Vec<String>, ConfigReadError> {
        log::debug!(
            "Leyendo alias: {} config --get-regexp {}",
            self.program,
            ALIAS_KEY_PATTERN
        );
        let output = Command::new(&self.program)
            .args(["config", "--get-regexp", ALIAS_KEY_PATTERN])
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ConfigReadError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        // git devuelve 1 sin salida cuando ninguna clave coincide.
        if !output.status.success() {
            if output.status.code() == Some(1) && stdout.trim().is_empty() {
                return Ok(Vec::new());
            }
            return Err(ConfigReadError::Failed {
                program: self.program.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(stdout.lines().map(String::from).collect())
    }
}

impl AliasSource for Vec<String> {
    fn alias_lines(&self) -> Result<Vec<String>, ConfigReadError> {
        Ok(self.clone())
    }
}
