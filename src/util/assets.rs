use std::{borrow::Cow, sync::OnceLock};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rust_embed::RustEmbed;
use thiserror::Error;

/// Everything under `assets/` ships inside the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("embedded asset {0} is missing")]
    Missing(String),
    #[error("embedded asset {0} is not valid UTF-8")]
    NotUtf8(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

/// Stylesheet for the desktop shell. Empty when the asset cannot be read.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| text_or_empty("main.css"))
        .as_str()
}

pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| match load_asset("favicon.svg") {
            Ok(bytes) => format!(
                "data:{};base64,{}",
                guess_mime("favicon.svg"),
                BASE64.encode(bytes.as_ref())
            ),
            Err(err) => {
                tracing::warn!("favicon unavailable: {err}");
                String::new()
            }
        })
        .as_str()
}

/// Raw JSON of the roadside price table.
pub fn roadside_prices_json() -> Result<String, AssetError> {
    load_text("roadside_prices.json")
}

fn text_or_empty(path: &str) -> String {
    load_text(path).unwrap_or_else(|err| {
        tracing::warn!("{err}");
        String::new()
    })
}

fn load_text(path: &str) -> Result<String, AssetError> {
    let bytes = load_asset(path)?;
    String::from_utf8(bytes.into_owned()).map_err(|_| AssetError::NotUtf8(path.to_string()))
}

fn load_asset(path: &str) -> Result<Cow<'static, [u8]>, AssetError> {
    let canonical = path.trim_start_matches('/').trim_start_matches("assets/");
    EmbeddedAssets::get(canonical)
        .map(|file| file.data)
        .ok_or_else(|| AssetError::Missing(path.to_string()))
}

fn guess_mime(path: &str) -> &'static str {
    if path.ends_with(".css") {
        "text/css"
    } else if path.ends_with(".svg") {
        "image/svg+xml"
    } else if path.ends_with(".json") {
        "application/json"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_assets_resolve() {
        assert!(!main_css().is_empty());
        let favicon = favicon_data_uri();
        let payload = favicon.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let decoded = BASE64.decode(payload).unwrap();
        assert!(String::from_utf8(decoded).unwrap().contains("<svg"));
        assert!(roadside_prices_json().unwrap().contains("松戸市"));
        assert!(matches!(load_asset("/assets/nope.txt"), Err(AssetError::Missing(_))));
    }
}
