//! # Resolución de Archivos
//! src/server/files.rs
//!
//! Convierte el path decodificado de un GET en una `Response`. El archivo se
//! lee completo en cada request, no hay caché.

use crate::http::mime::content_type_for;
use crate::http::Response;
use log::warn;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Resuelve `path` bajo `root` y construye la respuesta
///
/// - Archivo regular legible → 200 con Content-Type y Content-Length
/// - Cualquier otra cosa → 404 con el body fijo
///
/// Nunca retorna error: un archivo faltante es un resultado normal.
pub fn serve_file(root: &Path, path: &str) -> Response {
    let Some(full_path) = resolve(root, path) else {
        return Response::not_found();
    };

    if !full_path.is_file() {
        return Response::not_found();
    }

    match fs::read(&full_path) {
        Ok(body) => Response::file(content_type_for(path), body),
        Err(e) => {
            warn!("No se pudo leer {}: {}", full_path.display(), e);
            Response::not_found()
        }
    }
}

/// Une `path` a `root` sin permitir salir del directorio raíz
///
/// Retorna `None` para paths absolutos o con componentes `..`.
fn resolve(root: &Path, path: &str) -> Option<PathBuf> {
    let relative = Path::new(path);
    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

    if escapes {
        return None;
    }

    Some(root.join(relative))
}
