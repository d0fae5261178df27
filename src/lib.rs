//! # HTTP Mirror
//! src/lib.rs
//!
//! Par mínimo de HTTP/1.1 implementado sobre sockets TCP:
//! un servidor de archivos y un crawler que descarga una página HTML y sus
//! imágenes `.jpg`.
//!
//! ## Arquitectura
//!
//! - `http`: framing HTTP (requests, responses, content-type, encoding)
//! - `server`: servidor TCP secuencial que sirve archivos
//! - `client`: envío de requests, búsqueda de links y crawler
//! - `config`: configuración por CLI y variables de entorno
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use http_mirror::client::Crawler;
//! use http_mirror::config::{ClientConfig, ServerConfig};
//! use http_mirror::server::Server;
//!
//! let server = Server::bind(ServerConfig::default()).expect("bind");
//! std::thread::spawn(move || server.run());
//!
//! let report = Crawler::new(ClientConfig::default()).run().expect("crawl");
//! println!("{} imágenes", report.images.len());
//! ```

pub mod client;
pub mod config;
pub mod http;
pub mod server;
