//! Copies the sample catalog next to the compiled binaries, where
//! `Catalog::default_path()` looks for it.

use std::path::PathBuf;
use std::{env, fs};

const CATALOG: &str = "data/videojuegos.json";
const CATALOG_FILE_NAME: &str = "videojuegos.json";

fn main() {
    println!("cargo:rerun-if-changed={CATALOG}");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR"));

    // OUT_DIR is <target>/<profile>/build/<pkg>-<hash>/out
    let Some(profile_dir) = out_dir.ancestors().nth(3) else {
        println!("cargo:warning=could not locate the profile directory from {}", out_dir.display());
        return;
    };

    // Test and example binaries run from deps/
    for dir in [profile_dir.to_path_buf(), profile_dir.join("deps")] {
        fs::create_dir_all(&dir).expect("create output directory");
        fs::copy(CATALOG, dir.join(CATALOG_FILE_NAME)).expect("copy sample catalog");
    }
}
