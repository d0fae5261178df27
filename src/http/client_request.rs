//! # Construcción de Requests (lado cliente)
//! src/http/client_request.rs
//!
//! Siempre el mismo formato, solo cambian el path y el host:
//!
//! ```text
//! GET /<path> HTTP/1.1\r\n
//! Host: <host>\r\n
//! Connection: close\r\n
//! \r\n
//! ```

use super::encoding::normalize_path;

/// Request GET que envía el crawler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRequest {
    host: String,

    /// Path normalizado, sin el `/` inicial
    path: String,
}

impl ClientRequest {
    /// Crea un request para `path` en `host`
    ///
    /// El path se normaliza (`encode(decode(path))`) y se le quita un `/`
    /// inicial, porque la request line ya lo agrega.
    ///
    /// # Ejemplo
    /// ```
    /// use http_mirror::http::ClientRequest;
    ///
    /// let request = ClientRequest::get("localhost", "my cat.jpg");
    /// assert_eq!(request.request_line(), "GET /my%20cat.jpg HTTP/1.1");
    /// ```
    pub fn get(host: &str, path: &str) -> Self {
        let normalized = normalize_path(path);
        let path = match normalized.strip_prefix('/') {
            Some(rest) => rest.to_string(),
            None => normalized,
        };

        Self {
            host: host.to_string(),
            path,
        }
    }

    /// `GET /<path> HTTP/1.1`
    pub fn request_line(&self) -> String {
        format!("GET /{} HTTP/1.1", self.path)
    }

    /// Convierte el request a bytes listos para enviar
    pub fn to_bytes(&self) -> Vec<u8> {
        format!(
            "{}\r\nHost: {}\r\nConnection: close\r\n\r\n",
            self.request_line(),
            self.host
        )
        .into_bytes()
    }
}
