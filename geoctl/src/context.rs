//! Process-wide application context.
//!
//! Everything a command handler touches beyond its own arguments lives
//! here: the record store plus the injected id-generation and confirmation
//! capabilities. Built once at startup and passed explicitly, so handlers
//! have no hidden global state and tests can substitute deterministic
//! implementations.

use crate::prompt::{Confirmer, ConsoleConfirmer};
use libgeo::{
    id::{IdGenerator, SystemIdGenerator},
    store::RecordStore,
};
use std::path::PathBuf;

pub struct AppContext {
    pub store: RecordStore,
    pub ids: Box<dyn IdGenerator>,
    pub confirm: Box<dyn Confirmer>,
}

impl AppContext {
    pub fn new(datafile: PathBuf) -> Self {
        Self {
            store: RecordStore::new(datafile),
            ids: Box::new(SystemIdGenerator),
            confirm: Box::new(ConsoleConfirmer),
        }
    }
}
