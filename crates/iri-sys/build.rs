//! Build script for iri-sys
//!
//! Locates the compiled IRI Fortran library (libiri) so the `iri_sub_`
//! entry points can be linked. Linking is only requested when the library
//! is actually found (or the `link-native` feature insists on it), so the
//! default build works on machines without the Fortran toolchain.

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=IRI_LIB_DIR");

    // Strategy 1: pre-built library via environment variable
    if let Ok(lib_dir) = env::var("IRI_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", lib_dir);
        link_iri();
        return;
    }

    // Strategy 2: pkg-config
    if pkg_config::Config::new().probe("iri").is_ok() {
        link_fortran_runtime();
        return;
    }

    // Strategy 3: common install locations
    let search_paths = ["/usr/local/lib", "/usr/lib", "/usr/lib/x86_64-linux-gnu"];
    for path in &search_paths {
        for name in ["libiri.so", "libiri.a"] {
            if PathBuf::from(path).join(name).exists() {
                println!("cargo:rustc-link-search=native={}", path);
                link_iri();
                return;
            }
        }
    }

    // features reach build scripts as environment variables
    if env::var("CARGO_FEATURE_LINK_NATIVE").is_ok() {
        eprintln!("Could not find the IRI Fortran library.");
        eprintln!("Options:");
        eprintln!("  1. Set IRI_LIB_DIR to the directory containing libiri");
        eprintln!("  2. Install libiri system-wide (pkg-config name: iri)");
        panic!("IRI library not found but the link-native feature is enabled");
    }

    // No library and no demand for one: emit nothing so crates that only
    // declare the symbols (mock-oracle builds, tests) still link cleanly.
    println!("cargo:warning=IRI Fortran library not found; native calls will be unavailable");
}

fn link_iri() {
    println!("cargo:rustc-link-lib=dylib=iri");
    link_fortran_runtime();
}

fn link_fortran_runtime() {
    // gfortran-compiled objects need the Fortran runtime at link time
    #[cfg(target_os = "linux")]
    println!("cargo:rustc-link-lib=dylib=gfortran");
}
