// src/bin/galias.rs

use anyhow::{Context, Result};
use clap::Parser;

use galias::cli::Cli;
use galias::config;
use galias::core::alias_display;
use galias::core::alias_resolver::{self, ResolveError};
use galias::core::dispatcher::{self, Dispatcher};
use galias::core::reassembler;
use galias::core::usage_log::{Rotation, UsageLog};
use galias::models::{AliasTable, Settings};
use galias::system::alias_source::{AliasSource, GitConfigSource};
use galias::system::interrupt::InterruptState;
use galias::system::{executor, io};

/// El punto de entrada principal de la aplicación.
fn main() {
    // Inicializar el logger. Para ver los logs, ejecuta con `RUST_LOG=debug galias ...`
    env_logger::init();

    // Ctrl+C termina limpio: cada escritura del registro es una sola llamada.
    // Con un comando en curso, se espera a que termine.
    let interrupts = InterruptState::new();
    if let Err(e) = interrupts.install() {
        log::warn!("No se pudo instalar el manejador de Ctrl+C: {}", e);
    }

    let cli = Cli::parse();

    if let Err(e) = run_cli(cli, &interrupts) {
        eprintln!("\nError: {:?}", e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli, interrupts: &InterruptState) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let config_dir = config::get_config_dir()?;
    let settings = apply_overrides(config::load_settings(&config_dir)?, &cli);
    log::debug!("Ajustes efectivos: {:?}", settings);

    // 1. Rotar el registro de uso si creció demasiado.
    let mut usage_log = UsageLog::open(
        &config::usage_log_path(&config_dir),
        &config::usage_archive_path(&config_dir),
    )
    .context("No se pudo abrir el registro de uso.")?;
    if let Rotation::Rotated { archived } = usage_log.rotate_if_needed(settings.max_log_kb)? {
        log::info!("Se archivaron {} alias del ranking anterior.", archived.len());
    }

    if cli.stats {
        alias_display::display_ranking(&usage_log.rank_top(settings.top)?);
        return Ok(usage_log.close()?);
    }

    // 2. Cargar y listar los alias.
    let table = load_alias_table(&GitConfigSource::new(settings.tool.as_str()))?;
    let ranking = usage_log.rank_top(settings.top)?;

    if cli.list {
        alias_display::display_alias_list(&table, &ranking);
        return Ok(usage_log.close()?);
    }

    // 3. Selección y argumentos extra: desde la línea de comandos o preguntando.
    let (selection, extra) = match cli.alias_and_args() {
        Some(alias_and_args) => alias_and_args,
        None => {
            alias_display::display_alias_list(&table, &ranking);
            let Some(selection) = io::prompt("\nAlias a ejecutar")? else {
                println!("\nOperación cancelada.");
                return Ok(());
            };
            // Validar antes de pedir los argumentos.
            dispatcher::select(&table, &selection)?;
            let Some(extra_line) = io::prompt("Argumentos adicionales (opcional)")? else {
                println!("\nOperación cancelada.");
                return Ok(());
            };
            (selection, reassembler::split_tokens(&extra_line))
        }
    };

    // 4. Construir el comando y registrar el uso.
    let command = Dispatcher::new(&mut usage_log, &settings.tool)
        .dispatch(&table, &selection, &extra)?;
    usage_log.close()?;

    // 5. Ejecutar. El código de salida del comando no cambia el nuestro.
    println!("\n> {}", command);
    let code = {
        let _child = interrupts.child_running();
        executor::execute_command(&command, settings.shell.as_deref())?
    };
    log::info!("Comando finalizado con código {:?}", code);
    Ok(())
}

/// Las opciones de la línea de comandos tienen prioridad sobre `galias.toml`.
fn apply_overrides(mut settings: Settings, cli: &Cli) -> Settings {
    if let Some(kb) = cli.max_log_kb {
        settings.max_log_kb = kb;
    }
    if let Some(top) = cli.top {
        settings.top = top;
    }
    settings
}

fn load_alias_table(source: &impl AliasSource) -> Result<AliasTable> {
    let lines = source
        .alias_lines()
        .context("No se pudo leer la configuración de alias.")?;
    let table = alias_resolver::parse_alias_lines(&lines)?;
    if table.is_empty() {
        return Err(ResolveError::EmptyAliasSet.into());
    }
    Ok(table)
}
