//! Build script for the currency service.
//!
//! Compiles the gRPC Protocol Buffer definitions using tonic-prost-build.
//! The schemas are fixed and known ahead of time, so the bindings are
//! generated at compile time rather than loaded at runtime.

use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Rerun if proto files change
    println!("cargo:rerun-if-changed=proto/");

    compile_protos()?;

    Ok(())
}

/// Compile Protocol Buffer definitions for gRPC services.
fn compile_protos() -> Result<(), Box<dyn std::error::Error>> {
    let proto_dir = PathBuf::from("proto");

    // Check if proto directory exists
    if !proto_dir.exists() {
        println!("cargo:warning=Proto directory not found, skipping gRPC compilation");
        return Ok(());
    }

    // Find all .proto files recursively
    let proto_files = find_proto_files(&proto_dir)?;

    if proto_files.is_empty() {
        println!("cargo:warning=No proto files found, skipping gRPC compilation");
        return Ok(());
    }

    // Ensure a protoc binary is available even when the system package is
    // missing, by pointing PROTOC at the vendored compiler binary.
    if std::env::var_os("PROTOC").is_none() {
        if let Ok(protoc) = protoc_bin_vendored::protoc_bin_path() {
            // SAFETY: set during single-threaded build script execution.
            unsafe {
                std::env::set_var("PROTOC", protoc);
            }
        }
    }

    // Compile all proto files using tonic_prost_build with proper include path
    tonic_prost_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&proto_files, &[proto_dir])?;

    Ok(())
}

/// Recursively find all .proto files in a directory.
fn find_proto_files(dir: &PathBuf) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut proto_files = Vec::new();

    if dir.is_dir() {
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                proto_files.extend(find_proto_files(&path)?);
            } else if path.extension().map(|ext| ext == "proto").unwrap_or(false) {
                proto_files.push(path);
            }
        }
    }

    Ok(proto_files)
}
