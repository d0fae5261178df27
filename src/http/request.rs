//! # Parsing de Requests HTTP
//! src/http/request.rs
//!
//! Parser mínimo del lado del servidor. Solo interesa la request line:
//!
//! ```text
//! GET /img/cat.jpg HTTP/1.1\r\n
//! Host: localhost\r\n
//! Connection: close\r\n
//! \r\n
//! ```
//!
//! ## Reglas
//!
//! 1. Se toma el texto hasta el primer `\n`
//! 2. Se separa por espacios en blanco: deben quedar exactamente tres partes
//!    (método, path, versión). Si no, es un request malformado (400)
//! 3. El método no se valida aquí: el servidor decide si responde 405
//! 4. Al path se le quita un `/` inicial y se le aplica percent-decoding

use super::encoding::decode_path;
use thiserror::Error;

/// Método HTTP de la request line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - El único método que el servidor atiende
    GET,

    /// Cualquier otro token (POST, DELETE, "FOO", ...)
    Other(String),
}

impl Method {
    fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            other => Method::Other(other.to_string()),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::Other(m) => m,
        }
    }
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// La primera línea no tiene exactamente tres partes
    #[error("Invalid request line: {0:?}")]
    InvalidRequestLine(String),
}

/// Representa un request HTTP parseado
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,

    /// Path decodificado y sin el `/` inicial (ej: "my cat.jpg").
    /// Puede ser vacío: el servidor lo reemplaza por el index.
    path: String,
}

impl Request {
    /// Parsea un request HTTP desde bytes
    ///
    /// Los bytes que no son UTF-8 válido se reemplazan, nunca producen error.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use http_mirror::http::Request;
    ///
    /// let raw = b"GET /my%20cat.jpg HTTP/1.1\r\nHost: localhost\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "my cat.jpg");
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        let text = String::from_utf8_lossy(buffer);
        let first_line = text.split('\n').next().unwrap_or_default();

        let parts: Vec<&str> = first_line.split_whitespace().collect();
        let &[method, target, _version] = parts.as_slice() else {
            return Err(ParseError::InvalidRequestLine(first_line.trim_end().to_string()));
        };

        let stripped = target.strip_prefix('/').unwrap_or(target);

        Ok(Request {
            method: Method::from_token(method),
            path: decode_path(stripped),
        })
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Obtiene el path decodificado
    pub fn path(&self) -> &str {
        &self.path
    }
}
