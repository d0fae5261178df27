//! # Búsqueda de Imágenes en HTML
//! src/client/links.rs
//!
//! No es un parser de HTML: es la regex `src="([^"]+\.jpg)"` aplicada de
//! izquierda a derecha. Distingue mayúsculas, solo comillas dobles y sin
//! espacios alrededor del `=`. Los duplicados se conservan.

use regex::Regex;
use std::sync::OnceLock;

fn jpg_src_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"src="([^"]+\.jpg)""#).expect("patrón válido"))
}

/// Retorna, en orden, todos los valores de `src="...jpg"` del HTML
///
/// # Ejemplo
/// ```
/// use http_mirror::client::links::find_jpg_links;
///
/// let html = r#"<img src="pic1.jpg"><img src="dir/pic2.jpg">"#;
/// assert_eq!(find_jpg_links(html), vec!["pic1.jpg", "dir/pic2.jpg"]);
/// ```
pub fn find_jpg_links(html: &str) -> Vec<String> {
    jpg_src_pattern()
        .captures_iter(html)
        .map(|caps| caps[1].to_string())
        .collect()
}
