//! # Módulo del Cliente HTTP
//! src/client/mod.rs
//!
//! Crawler que descarga una página HTML y todas las imágenes `.jpg` que
//! referencia, una conexión por request.

pub mod crawl;
pub mod error;
pub mod fetch;
pub mod links;

pub use crawl::{CrawlReport, Crawler, FetchedImage};
pub use error::ClientError;
