// src/cli.rs

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "galias: elige y ejecuta tus alias de git, ordenados por uso.", long_about = None)]
pub struct Cli {
    /// Alias a ejecutar seguido de sus argumentos. Las opciones de galias van antes del alias.
    /// Si se omite, se muestra la lista y se pregunta.
    #[arg(value_name = "ALIAS [ARGS]", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,

    /// Muestra la lista de alias y termina.
    #[arg(short, long)]
    pub list: bool,

    /// Muestra el ranking de los alias más usados y termina.
    #[arg(long)]
    pub stats: bool,

    /// Tamaño máximo del registro de uso, en KB, antes de rotarlo.
    #[arg(long, value_name = "KB")]
    pub max_log_kb: Option<u64>,

    /// Cantidad de alias destacados.
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

impl Cli {
    /// Separa el alias de los argumentos que se le pasan. Todo lo que sigue al
    /// alias pertenece al alias, aunque coincida con una opción de galias.
    pub fn alias_and_args(&self) -> Option<(String, Vec<String>)> {
        let (alias, args) = self.command.split_first()?;
        Some((alias.clone(), args.to_vec()))
    }
}
