//! Errores del crawler.
//!
//! Solo fallas de transporte, que cortan la corrida. Un 404 no es un error
//! (se guarda igual) y una imagen que no se pudo escribir queda registrada en
//! el reporte.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not connect to {address}: {source}")]
    Connect { address: String, source: io::Error },

    #[error("I/O error talking to {address}: {source}")]
    Io { address: String, source: io::Error },
}
