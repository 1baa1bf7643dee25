#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};
use tracing_subscriber::EnvFilter;

use land_valuation::{app, util::version::APP_NAME};

fn main() {
    // RUST_LOG overrides the default level, e.g. `RUST_LOG=land_valuation=debug`.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("Logging already initialised: {err}");
    }

    for (key, value) in wayland_env_defaults(|key| std::env::var_os(key).is_some()) {
        std::env::set_var(key, value);
    }

    tracing::info!(version = %land_valuation::util::version::version_label(), "starting {APP_NAME}");

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
            )
        };
        builder.with_cfg(config)
    };

    #[cfg(not(feature = "desktop"))]
    let builder = builder;

    builder.launch(app::App);
}

/// Environment defaults for Wayland sessions, skipping any the caller already set.
/// Explicit sync crashes on some drivers: wgpu falls back to GL and WebKit's
/// DMABUF renderer is turned off.
fn wayland_env_defaults(is_set: impl Fn(&str) -> bool) -> Vec<(&'static str, &'static str)> {
    if !is_set("WAYLAND_DISPLAY") {
        return Vec::new();
    }

    [("WGPU_BACKEND", "gl"), ("WEBKIT_DISABLE_DMABUF_RENDERER", "1")]
        .into_iter()
        .filter(|(key, _)| !is_set(*key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wayland_defaults_respect_existing_overrides() {
        assert!(wayland_env_defaults(|_| false).is_empty());

        let defaults = wayland_env_defaults(|key| key == "WAYLAND_DISPLAY");
        assert_eq!(
            defaults,
            vec![("WGPU_BACKEND", "gl"), ("WEBKIT_DISABLE_DMABUF_RENDERER", "1")]
        );

        let defaults =
            wayland_env_defaults(|key| key == "WAYLAND_DISPLAY" || key == "WGPU_BACKEND");
        assert_eq!(defaults, vec![("WEBKIT_DISABLE_DMABUF_RENDERER", "1")]);
    }
}
