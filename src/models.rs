// src/models.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DEFAULT_MAX_LOG_KB, DEFAULT_TOOL, DEFAULT_TOP_COUNT};

// --- MODELO DE `galias.toml` ---

/// Ajustes del usuario. Todos los campos son opcionales en el archivo.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Programa para las invocaciones nativas y para leer los alias.
    pub tool: String,
    /// Shell para los alias con `!`. Si no se define, `sh -c` (o `cmd /C`).
    pub shell: Option<String>,
    /// Tamaño máximo del registro de uso, en KB.
    pub max_log_kb: u64,
    /// Cantidad de alias destacados.
    pub top: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            shell: None,
            max_log_kb: DEFAULT_MAX_LOG_KB,
            top: DEFAULT_TOP_COUNT,
        }
    }
}

// --- MODELOS DE ALIAS ---

/// Un alias tal como viene del almacén de configuración. `raw` conserva el texto exacto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasDefinition {
    pub name: String,
    pub raw: String,
}

/// Clasificación de una definición.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Tokens que se pasan a la herramienta.
    Native(Vec<String>),
    /// Comando de shell crudo, sin el marcador `!`.
    Shell(String),
}

/// La tabla de alias de una ejecución. Mantiene el orden en que se cargaron.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: Vec<AliasDefinition>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserta un alias. Si el nombre ya existe, gana la última definición (como en git).
    pub fn insert(&mut self, definition: AliasDefinition) {
        match self.entries.iter_mut().find(|e| e.name == definition.name) {
            Some(existing) => existing.raw = definition.raw,
            None => self.entries.push(definition),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AliasDefinition> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AliasDefinition> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// --- MODELOS DE USO ---

/// Una posición del ranking de uso.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankEntry {
    pub name: String,
    pub count: usize,
}

impl RankEntry {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

// --- COMANDO FINAL ---

/// El comando que se entrega al ejecutor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalCommand {
    /// La herramienta con un vector de argumentos ya separado. No pasa por ninguna shell.
    Native { program: String, args: Vec<String> },
    /// Línea cruda para la shell. Contenido NO saneado: viene tal cual de la
    /// definición del alias y de la entrada del usuario.
    Shell { command_line: String },
}

impl fmt::Display for FinalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinalCommand::Native { program, args } => {
                write!(f, "{}", program)?;
                for arg in args {
                    write!(f, " {}", arg)?;
                }
                Ok(())
            }
            FinalCommand::Shell { command_line } => write!(f, "{}", command_line),
        }
    }
}
