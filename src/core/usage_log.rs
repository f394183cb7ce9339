// src/core/usage_log.rs

//! Registro de uso de los alias: un nombre por línea, en orden de uso.
//!
//! El registro solo crece por `append` y solo se vacía en una rotación, después
//! de que el resumen (top 5) quedó escrito en el archivo histórico.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::ARCHIVE_TOP_COUNT;
use crate::models::RankEntry;

#[derive(Error, Debug)]
pub enum UsageLogError {
    #[error("No se pudo leer el registro de uso: {0}")]
    Read(#[source] io::Error),
    #[error("No se pudo escribir en el registro de uso: {0}")]
    Write(#[source] io::Error),
    #[error("No se pudo archivar el resumen de uso; el registro no se ha truncado: {0}")]
    RotationArchive(#[source] io::Error),
    #[error("El nombre de alias '{0}' no es válido para el registro de uso.")]
    InvalidName(String),
}

type UsageLogResult<T> = Result<T, UsageLogError>;

/// Almacenamiento detrás de un `UsageLog`.
pub trait UsageStore {
    /// Todas las líneas no vacías del registro, en orden.
    fn records(&self) -> io::Result<Vec<String>>;
    /// Añade una línea y no vuelve hasta que está en disco.
    fn append_record(&mut self, name: &str) -> io::Result<()>;
    fn size_bytes(&self) -> io::Result<u64>;
    fn truncate(&mut self) -> io::Result<()>;
    /// Añade un bloque al archivo histórico y no vuelve hasta que está en disco.
    fn append_archive(&mut self, block: &str) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Almacenamiento en archivos de texto plano.
#[derive(Debug, Clone)]
pub struct FileStore {
    log_path: PathBuf,
    archive_path: PathBuf,
}

impl FileStore {
    /// Crea los directorios y el registro si no existen.
    pub fn open(log_path: &Path, archive_path: &Path) -> io::Result<Self> {
        for path in [log_path, archive_path] {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
        }
        OpenOptions::new().create(true).append(true).open(log_path)?;
        Ok(Self {
            log_path: log_path.to_path_buf(),
            archive_path: archive_path.to_path_buf(),
        })
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }
}

/// Escribe `bytes` en una sola llamada y sincroniza con el disco.
fn append_durably(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

impl UsageStore for FileStore {
    fn records(&self) -> io::Result<Vec<String>> {
        let content = match fs::read_to_string(&self.log_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        Ok(non_blank_lines(&content))
    }

    fn append_record(&mut self, name: &str) -> io::Result<()> {
        append_durably(&self.log_path, format!("{}\n", name).as_bytes())
    }

    fn size_bytes(&self) -> io::Result<u64> {
        match fs::metadata(&self.log_path) {
            Ok(meta) => Ok(meta.len()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e),
        }
    }

    fn truncate(&mut self) -> io::Result<()> {
        let file = File::create(&self.log_path)?;
        file.sync_all()
    }

    fn append_archive(&mut self, block: &str) -> io::Result<()> {
        append_durably(&self.archive_path, block.as_bytes())
    }
}

/// Almacenamiento en memoria para pruebas. Puede simular un fallo al archivar.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub log: String,
    pub archive: String,
    pub fail_archive: bool,
}

impl MemoryStore {
    pub fn with_records<S: AsRef<str>>(names: &[S]) -> Self {
        let mut log = String::new();
        for name in names {
            log.push_str(name.as_ref());
            log.push('\n');
        }
        Self {
            log,
            ..Self::default()
        }
    }
}

impl UsageStore for MemoryStore {
    fn records(&self) -> io::Result<Vec<String>> {
        Ok(non_blank_lines(&self.log))
    }

    fn append_record(&mut self, name: &str) -> io::Result<()> {
        self.log.push_str(name);
        self.log.push('\n');
        Ok(())
    }

    fn size_bytes(&self) -> io::Result<u64> {
        Ok(self.log.len() as u64)
    }

    fn truncate(&mut self) -> io::Result<()> {
        self.log.clear();
        Ok(())
    }

    fn append_archive(&mut self, block: &str) -> io::Result<()> {
        if self.fail_archive {
            return Err(io::Error::other("fallo de archivo simulado"));
        }
        self.archive.push_str(block);
        Ok(())
    }
}

fn non_blank_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Resultado de `rotate_if_needed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rotation {
    NotNeeded { size_bytes: u64 },
    Rotated { archived: Vec<RankEntry> },
}

/// El registro de uso de una ejecución. Se construye una vez y se pasa por referencia.
#[derive(Debug)]
pub struct UsageLog<S: UsageStore = FileStore> {
    store: S,
}

impl UsageLog<FileStore> {
    pub fn open(log_path: &Path, archive_path: &Path) -> UsageLogResult<Self> {
        let store = FileStore::open(log_path, archive_path).map_err(UsageLogError::Write)?;
        log::debug!("Registro de uso abierto en {:?}", store.log_path());
        Ok(Self { store })
    }
}

impl<S: UsageStore> UsageLog<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Registra un uso de `name`.
    pub fn append(&mut self, name: &str) -> UsageLogResult<()> {
        if name.trim().is_empty() || name.contains(['\n', '\r']) {
            return Err(UsageLogError::InvalidName(name.to_string()));
        }
        self.store
            .append_record(name)
            .map_err(UsageLogError::Write)?;
        log::debug!("Uso registrado: '{}'", name);
        Ok(())
    }

    /// Los `n` alias más usados. A igual cantidad, queda primero el que apareció antes.
    pub fn rank_top(&self, n: usize) -> UsageLogResult<Vec<RankEntry>> {
        let records = self.store.records().map_err(UsageLogError::Read)?;
        Ok(rank(&records, n))
    }

    /// Si el registro supera `max_size_kb`, archiva el top 5 y lo vacía.
    /// Si el archivo histórico no se puede escribir, el registro queda intacto.
    pub fn rotate_if_needed(&mut self, max_size_kb: u64) -> UsageLogResult<Rotation> {
        let size_bytes = self.store.size_bytes().map_err(UsageLogError::Read)?;
        let limit = max_size_kb.saturating_mul(1024);
        if size_bytes <= limit {
            log::debug!(
                "Registro de uso en {} bytes (límite {}). No se rota.",
                size_bytes,
                limit
            );
            return Ok(Rotation::NotNeeded { size_bytes });
        }

        let archived = self.rank_top(ARCHIVE_TOP_COUNT)?;
        let block = format_archive_entry(&archived);
        self.store
            .append_archive(&block)
            .map_err(UsageLogError::RotationArchive)?;
        self.store.truncate().map_err(UsageLogError::Write)?;

        log::info!(
            "Registro de uso rotado ({} bytes > {} bytes).",
            size_bytes,
            limit
        );
        Ok(Rotation::Rotated { archived })
    }

    pub fn close(mut self) -> UsageLogResult<()> {
        self.store.flush().map_err(UsageLogError::Write)
    }
}

fn rank(records: &[String], n: usize) -> Vec<RankEntry> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut ranking: Vec<RankEntry> = Vec::new();
    for name in records {
        match positions.get(name.as_str()) {
            Some(&i) => ranking[i].count += 1,
            None => {
                positions.insert(name.as_str(), ranking.len());
                ranking.push(RankEntry::new(name.as_str(), 1));
            }
        }
    }
    // `sort_by` es estable: se conserva el orden de primera aparición en los empates.
    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking.truncate(n);
    ranking
}

/// Da formato al bloque que se añade al archivo histórico.
pub fn format_archive_entry(top: &[RankEntry]) -> String {
    let mut block = String::from("Top 5 most used aliases before rotation:\n");
    for entry in top {
        block.push_str(&format!("{} {}\n", entry.name, entry.count));
    }
    block.push_str("---\n");
    block
}
