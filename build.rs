//! Generates `app_metadata.rs` in `OUT_DIR` with the package name and the
//! owner declared under `[package.metadata]`. `DataStorage` builds the data
//! directory path from both.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

const FALLBACK_OWNER: &str = "satchel-app";

fn package_owner(manifest: &str) -> io::Result<String> {
    let manifest: toml::Table = toml::from_str(manifest).map_err(io::Error::other)?;
    let owner = manifest
        .get("package")
        .and_then(|package| package.get("metadata"))
        .and_then(|metadata| metadata.get("owner"))
        .and_then(toml::Value::as_str)
        .unwrap_or(FALLBACK_OWNER);
    Ok(owner.to_string())
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=Cargo.toml");

    let owner = package_owner(&fs::read_to_string("Cargo.toml")?)?;
    let name = env::var("CARGO_PKG_NAME").map_err(io::Error::other)?;
    let out_dir = env::var("OUT_DIR").map_err(io::Error::other)?;

    let consts = format!(
        "pub const APP_METADATA_NAME: &str = {:?};\npub const APP_METADATA_OWNER: &str = {:?};\n",
        name, owner
    );
    fs::write(PathBuf::from(out_dir).join("app_metadata.rs"), consts)
}
