//! # Códigos de Estado HTTP
//!
//! Este módulo define los códigos de estado HTTP/1.1 que usa el servidor.
//! El servidor de archivos solo necesita cuatro:
//!
//! - **2xx**: Éxito (200 OK)
//! - **4xx**: Error del cliente (400, 404, 405)

/// Representa los códigos de estado HTTP que soporta nuestro servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - El archivo existe y se envía completo
    Ok = 200,

    /// 400 Bad Request - La request line no tiene tres partes
    BadRequest = 400,

    /// 404 Not Found - El archivo no existe bajo el directorio raíz
    NotFound = 404,

    /// 405 Method Not Allowed - Cualquier método distinto de GET
    MethodNotAllowed = 405,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use http_mirror::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// # Ejemplo
    /// ```
    /// use http_mirror::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::MethodNotAllowed.reason_phrase(), "Method Not Allowed");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}
