// src/core/dispatcher.rs

//! Une la selección del usuario, la clasificación del alias, el reensamblado de
//! argumentos y el registro de uso en un comando final listo para ejecutar.

use thiserror::Error;

use crate::core::alias_resolver::{self, ResolveError};
use crate::core::reassembler;
use crate::core::usage_log::{FileStore, UsageLog, UsageLogError, UsageStore};
use crate::models::{AliasDefinition, AliasTable, FinalCommand, Invocation};

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    UsageLog(#[from] UsageLogError),
}

type DispatchResult<T> = Result<T, DispatchError>;

/// Valida el nombre introducido y lo busca en la tabla.
pub fn select<'t>(
    table: &'t AliasTable,
    input: &str,
) -> Result<&'t AliasDefinition, ResolveError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(ResolveError::EmptySelection);
    }
    alias_resolver::lookup(name, table)
}

pub struct Dispatcher<'a, S: UsageStore = FileStore> {
    usage_log: &'a mut UsageLog<S>,
    tool: &'a str,
}

impl<'a, S: UsageStore> Dispatcher<'a, S> {
    pub fn new(usage_log: &'a mut UsageLog<S>, tool: &'a str) -> Self {
        Self { usage_log, tool }
    }

    /// Construye el comando final a partir de la invocación y los tokens extra del usuario.
    pub fn build_command(&self, invocation: Invocation, extra: &[String]) -> FinalCommand {
        match invocation {
            Invocation::Native(mut tokens) => {
                tokens.extend_from_slice(extra);
                FinalCommand::Native {
                    program: self.tool.to_string(),
                    args: reassembler::reassemble(&tokens),
                }
            }
            // Los comandos de shell pasan tal cual: no son argumentos de la herramienta.
            Invocation::Shell(command) => {
                let command_line = if extra.is_empty() {
                    command
                } else {
                    format!("{} {}", command, extra.join(" "))
                };
                FinalCommand::Shell { command_line }
            }
        }
    }

    /// Resuelve la selección, construye el comando y registra el uso del alias.
    /// Si la selección falla no se registra nada.
    pub fn dispatch(
        &mut self,
        table: &AliasTable,
        selection: &str,
        extra: &[String],
    ) -> DispatchResult<FinalCommand> {
        let definition = select(table, selection)?;
        log::debug!("Alias seleccionado: '{}' -> '{}'", definition.name, definition.raw);

        let invocation = alias_resolver::classify(definition);
        log::debug!("Alias clasificado como {:?}", invocation);

        let command = self.build_command(invocation, extra);
        self.usage_log.append(&definition.name)?;
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alias_resolver::parse_alias_lines;
    use crate::core::usage_log::MemoryStore;

    fn table() -> AliasTable {
        parse_alias_lines(&[
            "alias.lg log --pretty=format:%h by %an",
            "alias.hi !echo hi",
            "alias.st status",
        ])
        .unwrap()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn native_alias_is_reassembled_with_extra_tokens() {
        let mut log = UsageLog::with_store(MemoryStore::default());
        let mut dispatcher = Dispatcher::new(&mut log, "git");

        let command = dispatcher
            .dispatch(&table(), " lg ", &strings(&["-n", "5"]))
            .unwrap();

        assert_eq!(
            command,
            FinalCommand::Native {
                program: "git".into(),
                args: strings(&["log", "--pretty=format:%h by %an", "-n", "5"]),
            }
        );
        assert_eq!(log.store().log, "lg\n");
    }

    #[test]
    fn extra_tokens_can_continue_a_format_value() {
        let mut log = UsageLog::with_store(MemoryStore::default());
        let mut dispatcher = Dispatcher::new(&mut log, "git");

        let command = dispatcher
            .dispatch(&table(), "lg", &strings(&["on", "%ad"]))
            .unwrap();
        assert_eq!(command.to_string(), "git log --pretty=format:%h by %an on %ad");
    }

    #[test]
    fn shell_alias_appends_extra_tokens_verbatim() {
        let mut log = UsageLog::with_store(MemoryStore::default());
        let mut dispatcher = Dispatcher::new(&mut log, "git");

        let command = dispatcher
            .dispatch(&table(), "hi", &strings(&["--pretty=format:%h", "x"]))
            .unwrap();
        assert_eq!(
            command,
            FinalCommand::Shell {
                command_line: "echo hi --pretty=format:%h x".into()
            }
        );

        let bare = dispatcher.dispatch(&table(), "hi", &[]).unwrap();
        assert_eq!(bare.to_string(), "echo hi");
        assert_eq!(log.store().log, "hi\nhi\n");
    }

    #[test]
    fn unknown_alias_is_not_logged() {
        let mut log = UsageLog::with_store(MemoryStore::default());
        let mut dispatcher = Dispatcher::new(&mut log, "git");

        let err = dispatcher.dispatch(&table(), "nope", &[]).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Resolve(ResolveError::NotFound(ref name)) if name == "nope"
        ));
        assert!(log.store().log.is_empty());
    }

    #[test]
    fn select_trims_and_validates_input() {
        let table = table();
        assert_eq!(select(&table, "  st\n").unwrap().raw, "status");
        assert_eq!(select(&table, "").unwrap_err(), ResolveError::EmptySelection);
        assert_eq!(
            select(&table, "nope").unwrap_err(),
            ResolveError::NotFound("nope".into())
        );
    }

    #[test]
    fn blank_selection_is_rejected() {
        let mut log = UsageLog::with_store(MemoryStore::default());
        let mut dispatcher = Dispatcher::new(&mut log, "git");

        let err = dispatcher.dispatch(&table(), "   ", &[]).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Resolve(ResolveError::EmptySelection)
        ));
        assert!(log.store().log.is_empty());
    }

    #[test]
    fn logged_name_is_the_alias_not_the_command() {
        let mut log = UsageLog::with_store(MemoryStore::default());
        {
            let mut dispatcher = Dispatcher::new(&mut log, "git");
            dispatcher.dispatch(&table(), "st", &strings(&["-sb"])).unwrap();
            dispatcher.dispatch(&table(), "lg", &[]).unwrap();
            dispatcher.dispatch(&table(), "st", &[]).unwrap();
        }
        let top = log.rank_top(5).unwrap();
        assert_eq!(top[0].name, "st");
        assert_eq!(top[0].count, 2);
        assert_eq!(top[1].name, "lg");
    }
}
