//! # Configuración
//! src/config.rs
//!
//! Configuración del servidor y del crawler con soporte para argumentos CLI y
//! variables de entorno. Host y puerto se pasan explícitamente a `Server` y
//! a `Crawler`, no hay estado global.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./http_mirror serve --port 12000 --root ./public
//! ./http_mirror crawl --host localhost --port 12000 --output-dir ./descargas
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=12000 SERVE_ROOT=./public ./http_mirror serve
//! CRAWL_HOST=localhost OUTPUT_DIR=./descargas ./http_mirror crawl
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Puerto por defecto de ambos lados
pub const DEFAULT_PORT: u16 = 12000;

/// Recurso que se sirve cuando el path viene vacío
pub const DEFAULT_INDEX: &str = "index.html";

/// Bodies menores a esto se reportan como sospechosos
pub const DEFAULT_SMALL_BODY_THRESHOLD: usize = 100;

/// Argumentos de línea de comandos
#[derive(Debug, Parser)]
#[command(name = "http_mirror")]
#[command(about = "Servidor de archivos HTTP/1.1 y crawler de imágenes .jpg")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sirve archivos desde un directorio
    Serve(ServerConfig),

    /// Descarga una página y todas sus imágenes .jpg
    Crawl(ClientConfig),
}

/// Configuración del servidor de archivos
#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "HTTP_PORT")]
    pub port: u16,

    /// Directorio desde donde se sirven los archivos
    #[arg(long, default_value = ".", env = "SERVE_ROOT")]
    pub root: PathBuf,

    /// Archivo que se sirve para el path vacío
    #[arg(long, default_value = DEFAULT_INDEX)]
    pub index: String,
}

impl ServerConfig {
    /// Obtiene la dirección completa para bind (host:port)
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Host must not be empty".to_string());
        }
        if self.index.is_empty() {
            return Err("Index file name must not be empty".to_string());
        }
        if !self.root.is_dir() {
            return Err(format!("Root {} is not a directory", self.root.display()));
        }
        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("🌐 Servidor:");
        println!("   Address:      {}", self.address());
        println!("   Root:         {}", self.root.display());
        println!("   Index:        {}", self.index);
        println!();
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            root: PathBuf::from("."),
            index: DEFAULT_INDEX.to_string(),
        }
    }
}

/// Configuración del crawler
#[derive(Debug, Clone, Args)]
pub struct ClientConfig {
    /// Host del servidor
    #[arg(long, default_value = "localhost", env = "CRAWL_HOST")]
    pub host: String,

    /// Puerto del servidor
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "HTTP_PORT")]
    pub port: u16,

    /// Página inicial (vacío = index del servidor)
    #[arg(long, default_value = "")]
    pub path: String,

    /// Directorio donde se guardan las imágenes
    #[arg(long = "output-dir", default_value = ".", env = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Bodies con menos bytes que esto se reportan como sospechosos
    #[arg(long = "small-body-threshold", default_value_t = DEFAULT_SMALL_BODY_THRESHOLD)]
    pub small_body_threshold: usize,
}

impl ClientConfig {
    /// Dirección del servidor (host:port)
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Host must not be empty".to_string());
        }
        if self.port == 0 {
            return Err("Port must be >= 1".to_string());
        }
        if !self.output_dir.is_dir() {
            return Err(format!(
                "Output dir {} is not a directory",
                self.output_dir.display()
            ));
        }
        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("🕷️  Crawler:");
        println!("   Servidor:     {}", self.address());
        println!("   Página:       /{}", self.path);
        println!("   Output dir:   {}", self.output_dir.display());
        println!("   Umbral:       {} bytes", self.small_body_threshold);
        println!();
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_PORT,
            path: String::new(),
            output_dir: PathBuf::from("."),
            small_body_threshold: DEFAULT_SMALL_BODY_THRESHOLD,
        }
    }
}
