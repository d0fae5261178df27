//! # Respuestas HTTP
//! src/http/response.rs
//!
//! Dos mitades del mismo formato:
//!
//! - `Response`: el servidor la construye y la convierte a bytes
//! - `ParsedResponse`: el cliente separa los bytes recibidos en headers y body
//!
//! ## Formato de una respuesta HTTP/1.1
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: image/jpeg\r\n
//! Content-Length: 500\r\n
//! \r\n
//! <500 bytes>
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use http_mirror::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_header("Content-Type", "text/html")
//!     .with_body(b"<html></html>".to_vec());
//!
//! let bytes = response.to_bytes();
//! assert!(bytes.starts_with(b"HTTP/1.1 200 OK\r\n"));
//! ```

use super::encoding::decode_single_byte;
use super::StatusCode;

/// Separador entre headers y body
pub const HEADER_DELIMITER: &[u8] = b"\r\n\r\n";

/// Body fijo de la respuesta 404
pub const NOT_FOUND_BODY: &[u8] = b"File Not Found";

/// Representa una respuesta HTTP/1.1 completa
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,

    /// Headers en el orden en que se agregaron
    headers: Vec<(String, String)>,

    body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta sin headers ni body
    ///
    /// Así se envían 400 y 405: solo la status line y la línea vacía.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header a la respuesta
    ///
    /// Si el header ya existe, se sobrescribe conservando su posición.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.add_header(name, value);
        self
    }

    /// Agrega un header a una respuesta existente (versión mutable)
    pub fn add_header(&mut self, name: &str, value: &str) {
        match self.headers.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    /// Establece el cuerpo de la respuesta
    ///
    /// Automáticamente agrega el header `Content-Length` con el tamaño exacto.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        let length = self.body.len().to_string();
        self.add_header("Content-Length", &length);
        self
    }

    /// Respuesta 200 con el contenido de un archivo
    pub fn file(content_type: &str, body: Vec<u8>) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", content_type)
            .with_body(body)
    }

    /// Respuesta 404 con el body fijo en texto plano
    pub fn not_found() -> Self {
        Self::new(StatusCode::NotFound)
            .with_header("Content-Type", "text/plain")
            .with_body(NOT_FOUND_BODY.to_vec())
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Headers: `Header-Name: Value\r\n`
    /// - Línea vacía: `\r\n`
    /// - Body: contenido binario
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(64 + self.body.len());

        result.extend_from_slice(format!("HTTP/1.1 {}\r\n", self.status).as_bytes());

        for (name, value) in &self.headers {
            result.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
        }

        result.extend_from_slice(b"\r\n");
        result.extend_from_slice(&self.body);

        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene un header específico
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Respuesta recibida por el cliente, separada en headers y body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    /// Bloque de headers (incluye la status line), un carácter por byte
    pub headers: String,

    /// Body sin interpretar
    pub body: Vec<u8>,
}

impl ParsedResponse {
    /// Separa una respuesta cruda en el primer `\r\n\r\n`
    ///
    /// Si no hay separador, todo el contenido son headers y el body queda
    /// vacío. No es un error.
    ///
    /// # Ejemplo
    /// ```
    /// use http_mirror::http::ParsedResponse;
    ///
    /// let parsed = ParsedResponse::split(b"HTTP/1.1 200 OK\r\n\r\nhello");
    /// assert_eq!(parsed.headers, "HTTP/1.1 200 OK");
    /// assert_eq!(parsed.body, b"hello");
    /// ```
    pub fn split(raw: &[u8]) -> Self {
        match find_delimiter(raw) {
            Some(pos) => Self {
                headers: decode_single_byte(&raw[..pos]),
                body: raw[pos + HEADER_DELIMITER.len()..].to_vec(),
            },
            None => Self {
                headers: decode_single_byte(raw),
                body: Vec::new(),
            },
        }
    }

    /// Código numérico de la status line, si se puede leer
    pub fn status_code(&self) -> Option<u16> {
        let status_line = self.headers.lines().next()?;
        let mut parts = status_line.split_whitespace();
        let version = parts.next()?;
        if !version.starts_with("HTTP/") {
            return None;
        }
        parts.next()?.parse().ok()
    }

    /// Obtiene el valor de un header (sin distinguir mayúsculas en el nombre)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.lines().skip(1).find_map(|line| {
            let (n, v) = line.split_once(':')?;
            n.trim().eq_ignore_ascii_case(name).then(|| v.trim())
        })
    }

    /// Body decodificado como texto de un byte por carácter (para HTML)
    pub fn body_text(&self) -> String {
        decode_single_byte(&self.body)
    }
}

fn find_delimiter(raw: &[u8]) -> Option<usize> {
    raw.windows(HEADER_DELIMITER.len())
        .position(|window| window == HEADER_DELIMITER)
}
