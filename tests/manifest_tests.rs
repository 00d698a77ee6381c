// Host-side checks on the web crate manifest.

const MANIFEST: &str = include_str!("../Cargo.toml");

/// Crate names listed in the root package's `[dependencies]` table.
fn root_dependencies() -> Vec<&'static str> {
    let Some(start) = MANIFEST.find("\n[dependencies]\n") else {
        return Vec::new();
    };
    let body = &MANIFEST[start + "\n[dependencies]\n".len()..];
    let body = body.split("\n[").next().unwrap_or("");
    body.lines()
        .filter(|l| !l.starts_with(' ') && !l.starts_with('"') && !l.starts_with(']'))
        .filter_map(|l| l.split_once('=').map(|(name, _)| name.trim()))
        .filter(|name| !name.is_empty())
        .collect()
}

#[test]
fn web_crate_depends_on_core_and_browser_stack() {
    let deps = root_dependencies();
    for name in ["curve-core", "wasm-bindgen", "web-sys", "js-sys", "console_log", "log", "anyhow", "glam"] {
        assert!(deps.contains(&name), "missing {name} in {deps:?}");
    }
}

#[test]
fn web_crate_reaches_the_clock_through_core() {
    // The fallback clock is curve_core::InstantClock; no direct timer crate.
    let deps = root_dependencies();
    assert!(!deps.contains(&"instant"), "{deps:?}");
    assert!(MANIFEST.contains("instant = { version = \"0.1\""));
}
