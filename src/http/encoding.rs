//! # Codificación de Paths y Texto
//! src/http/encoding.rs
//!
//! Funciones puras que usan ambos lados del protocolo:
//!
//! - `decode_path`: percent-decoding (`%20` → espacio)
//! - `encode_path`: percent-encoding dejando `/` y los caracteres
//!   no reservados (`A-Z a-z 0-9 - _ . ~`) tal cual
//! - `normalize_path`: `encode(decode(p))`, para no codificar dos veces un
//!   path que ya llega codificado
//! - `decode_single_byte`: cada byte se convierte en un carácter (ISO-8859-1),
//!   usado para headers y para el HTML

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Caracteres que se codifican en un path: todo excepto alfanuméricos,
/// `/` y los no reservados `- _ . ~`
const PATH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Decodifica un path (`%XX` → byte)
///
/// Las secuencias inválidas se dejan tal cual y los bytes que no forman
/// UTF-8 válido se reemplazan por U+FFFD.
///
/// # Ejemplo
/// ```
/// use http_mirror::http::encoding::decode_path;
/// assert_eq!(decode_path("my%20cat.jpg"), "my cat.jpg");
/// ```
pub fn decode_path(path: &str) -> String {
    percent_decode_str(path).decode_utf8_lossy().into_owned()
}

/// Codifica un path para la request line
///
/// # Ejemplo
/// ```
/// use http_mirror::http::encoding::encode_path;
/// assert_eq!(encode_path("img/my cat.jpg"), "img/my%20cat.jpg");
/// ```
pub fn encode_path(path: &str) -> String {
    utf8_percent_encode(path, PATH_ENCODE_SET).to_string()
}

/// Normaliza un path: primero decodifica, después codifica
///
/// Es idempotente: `normalize_path(normalize_path(p)) == normalize_path(p)`.
pub fn normalize_path(path: &str) -> String {
    encode_path(&decode_path(path))
}

/// Decodifica bytes como texto de un byte por carácter
///
/// Los headers HTTP están limitados a ese rango, así que nunca falla.
pub fn decode_single_byte(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
