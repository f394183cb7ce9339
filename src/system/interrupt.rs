// src/system/interrupt.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Estado compartido con el manejador de Ctrl+C.
///
/// Mientras hay un proceso hijo en primer plano, Ctrl+C le llega también a él;
/// galias no debe salir antes de que el hijo termine.
#[derive(Debug, Clone, Default)]
pub struct InterruptState {
    child_running: Arc<AtomicBool>,
}

impl InterruptState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instala el manejador: sale con código 0 salvo que haya un hijo en ejecución.
    pub fn install(&self) -> Result<(), ctrlc::Error> {
        let state = self.clone();
        ctrlc::set_handler(move || {
            if state.should_exit() {
                std::process::exit(0);
            }
            log::debug!("Ctrl+C ignorado: se espera a que termine el comando en curso.");
        })
    }

    /// `true` si una interrupción debe terminar galias ahora mismo.
    pub fn should_exit(&self) -> bool {
        !self.child_running.load(Ordering::SeqCst)
    }

    /// Marca que hay un hijo en ejecución hasta que se suelte la guarda.
    pub fn child_running(&self) -> ChildGuard {
        self.child_running.store(true, Ordering::SeqCst);
        ChildGuard {
            flag: Arc::clone(&self.child_running),
        }
    }
}

pub struct ChildGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
