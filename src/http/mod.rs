//! # Módulo HTTP
//!
//! Este módulo implementa el subconjunto de HTTP/1.1 que usan el servidor de
//! archivos y el crawler, sin librerías de alto nivel:
//!
//! - Construcción de requests GET (cliente)
//! - Parsing de la request line (servidor)
//! - Construcción de responses (servidor)
//! - Separación de headers y body (cliente)
//! - Content-Type por extensión
//! - Percent-encoding de paths
//!
//! Sin keep-alive: cada request abre una conexión nueva y el servidor la
//! cierra después de responder. El cliente lee hasta que el servidor cierra,
//! así que nunca necesita `Content-Length`.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /cat.jpg HTTP/1.1\r\n
//! Host: localhost\r\n
//! Connection: close\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 404 Not Found\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 14\r\n
//! \r\n
//! File Not Found
//! ```

pub mod client_request; // Requests GET del crawler
pub mod encoding;       // Percent-encoding y texto de un byte
pub mod mime;           // Content-Type por extensión
pub mod request;        // Parsing de la request line
pub mod response;       // Responses y separación headers/body
pub mod status;         // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use client_request::ClientRequest;
pub use request::{Method, ParseError, Request};
pub use response::{ParsedResponse, Response};
pub use status::StatusCode;
