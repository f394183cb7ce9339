// src/core/alias_resolver.rs

use thiserror::Error;

use crate::constants::{ALIAS_KEY_PREFIX, SHELL_ESCAPE_MARKER};
use crate::core::reassembler::split_tokens;
use crate::models::{AliasDefinition, AliasTable, Invocation};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Línea de configuración de alias mal formada: '{0}'")]
    MalformedEntry(String),
    #[error("No hay alias configurados.")]
    EmptyAliasSet,
    #[error("No se proporcionó ningún nombre de alias.")]
    EmptySelection,
    #[error("El alias '{0}' no existe.")]
    NotFound(String),
}

type ResolveResult<T> = Result<T, ResolveError>;

/// Construye la tabla de alias a partir de líneas `alias.<nombre> <definición>`.
/// La definición se conserva exacta, con sus espacios internos.
pub fn parse_alias_lines<S: AsRef<str>>(lines: &[S]) -> ResolveResult<AliasTable> {
    let mut table = AliasTable::new();
    for line in lines {
        let line = line.as_ref().trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }
        // Un alias sin valor aparece como la clave sola.
        let (key, raw) = line.split_once(' ').unwrap_or((line, ""));
        let name = key
            .strip_prefix(ALIAS_KEY_PREFIX)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ResolveError::MalformedEntry(line.to_string()))?;
        table.insert(AliasDefinition {
            name: name.to_string(),
            raw: raw.to_string(),
        });
    }
    log::debug!("{} alias cargados.", table.len());
    Ok(table)
}

/// Busca un alias por nombre.
pub fn lookup<'a>(name: &str, table: &'a AliasTable) -> ResolveResult<&'a AliasDefinition> {
    table
        .get(name)
        .ok_or_else(|| ResolveError::NotFound(name.to_string()))
}

/// Decide si el alias es una invocación de la herramienta o un comando de shell.
pub fn classify(definition: &AliasDefinition) -> Invocation {
    match definition.raw.strip_prefix(SHELL_ESCAPE_MARKER) {
        Some(command) => Invocation::Shell(command.trim().to_string()),
        None => Invocation::Native(split_tokens(&definition.raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(name: &str, raw: &str) -> AliasDefinition {
        AliasDefinition {
            name: name.into(),
            raw: raw.into(),
        }
    }

    #[test]
    fn parses_lines_preserving_definition_text() {
        let lines = [
            "alias.lg log --pretty=format:%h by %an  --graph",
            "alias.hi !echo hi",
            "alias.empty",
        ];
        let table = parse_alias_lines(&lines).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.get("lg").unwrap().raw,
            "log --pretty=format:%h by %an  --graph"
        );
        assert_eq!(table.get("hi").unwrap().raw, "!echo hi");
        assert_eq!(table.get("empty").unwrap().raw, "");
    }

    #[test]
    fn empty_output_is_an_empty_table() {
        let lines: [&str; 0] = [];
        assert!(parse_alias_lines(&lines).unwrap().is_empty());
        assert!(parse_alias_lines(&["", "  "]).unwrap().is_empty());
    }

    #[test]
    fn keys_outside_alias_section_are_malformed() {
        assert_eq!(
            parse_alias_lines(&["user.name Ana"]).unwrap_err(),
            ResolveError::MalformedEntry("user.name Ana".into())
        );
        assert!(matches!(
            parse_alias_lines(&["alias. status"]),
            Err(ResolveError::MalformedEntry(_))
        ));
    }

    #[test]
    fn lookup_reports_missing_alias() {
        let table = parse_alias_lines(&["alias.st status"]).unwrap();
        assert_eq!(lookup("st", &table).unwrap().raw, "status");
        assert_eq!(
            lookup("nope", &table).unwrap_err(),
            ResolveError::NotFound("nope".into())
        );
    }

    #[test]
    fn bang_definitions_are_shell_invocations() {
        assert_eq!(
            classify(&def("hi", "!echo hi")),
            Invocation::Shell("echo hi".into())
        );
        assert_eq!(
            classify(&def("hi", "! echo hi ")),
            Invocation::Shell("echo hi".into())
        );
    }

    #[test]
    fn other_definitions_are_native_tokens() {
        assert_eq!(
            classify(&def("ol", "log --oneline")),
            Invocation::Native(vec!["log".into(), "--oneline".into()])
        );
        assert_eq!(classify(&def("x", "")), Invocation::Native(vec![]));
    }
}
