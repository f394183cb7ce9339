// src/constants.rs

/// El nombre del directorio de galias dentro del directorio de configuración del sistema.
pub const APP_DIR: &str = "galias";

/// Variable de entorno que reemplaza el directorio de configuración completo.
pub const CONFIG_DIR_ENV: &str = "GALIAS_CONFIG_DIR";

/// El nombre del archivo de ajustes (dentro del directorio de configuración).
pub const SETTINGS_FILENAME: &str = "galias.toml";

/// El registro de uso: un nombre de alias por línea.
pub const USAGE_LOG_FILENAME: &str = "usage.log";

/// El archivo donde se acumulan los resúmenes de cada rotación.
pub const USAGE_ARCHIVE_FILENAME: &str = "usage_archive.log";

/// Herramienta de control de versiones por defecto.
pub const DEFAULT_TOOL: &str = "git";

/// Tamaño (KB) a partir del cual se rota el registro de uso.
pub const DEFAULT_MAX_LOG_KB: u64 = 100;

/// Cantidad de alias destacados por defecto.
pub const DEFAULT_TOP_COUNT: usize = 5;

/// Cantidad de alias que se guardan en el archivo en cada rotación.
pub const ARCHIVE_TOP_COUNT: usize = 5;

/// Prefijo de las claves de alias en la configuración de git.
pub const ALIAS_KEY_PREFIX: &str = "alias.";

/// Patrón que se pasa a `git config --get-regexp`.
pub const ALIAS_KEY_PATTERN: &str = r"^alias\.";

/// Un alias cuya definición empieza con este carácter es un comando de shell.
pub const SHELL_ESCAPE_MARKER: char = '!';

/// Argumentos de formato cuyo valor puede llegar partido en varios tokens.
pub const FORMAT_PREFIXES: &[&str] = &[
    "--pretty=format:",
    "--pretty=tformat:",
    "--format=format:",
    "--format=tformat:",
];

/// Marcador que se añade a los alias más usados en el listado.
pub const TOP_MARKER: &str = "(**)";
