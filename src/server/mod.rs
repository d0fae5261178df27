//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Servidor de archivos que:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones de a una
//! 3. Lee y parsea la request line
//! 4. Responde con el archivo pedido (o 400/404/405) y cierra

pub mod files;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::Server;
