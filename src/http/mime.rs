//! # Resolución de Content-Type
//! src/http/mime.rs
//!
//! Tabla fija por extensión. La comparación es por sufijo y distingue
//! mayúsculas: `foto.JPG` no es `image/jpeg`.

/// Tipo genérico para cualquier extensión desconocida
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Sufijo → MIME type
const EXTENSION_TABLE: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".jpg", "image/jpeg"),
    (".ico", "image/x-icon"),
];

/// Determina el Content-Type de un archivo a partir de su nombre
///
/// # Ejemplo
/// ```
/// use http_mirror::http::mime::content_type_for;
/// assert_eq!(content_type_for("index.html"), "text/html");
/// assert_eq!(content_type_for("notes.txt"), "application/octet-stream");
/// ```
pub fn content_type_for(path: &str) -> &'static str {
    EXTENSION_TABLE
        .iter()
        .find(|(suffix, _)| path.ends_with(suffix))
        .map(|(_, mime)| *mime)
        .unwrap_or(OCTET_STREAM)
}
