use std::env;
use std::path::PathBuf;

fn main() {
    // The C header is only needed when the C API is compiled in
    if env::var_os("CARGO_FEATURE_C_API").is_none() {
        return;
    }

    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();

    let header_path = PathBuf::from(&crate_dir)
        .join("include")
        .join("gltf_accessors.h");

    std::fs::create_dir_all(header_path.parent().unwrap()).unwrap();

    let bindings = cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_include_guard("GLTF_ACCESSORS_H")
        .with_language(cbindgen::Language::C)
        .with_header("// GENERATED FILE -- DO NOT EDIT")
        .with_sys_include("stddef.h")
        .with_sys_include("stdint.h")
        .with_cpp_compat(true)
        .generate()
        .expect("Unable to generate bindings");

    if !bindings.write_to_file(&header_path) {
        println!("cargo:warning=C header unchanged at: {}", header_path.display());
    }

    println!("cargo:rerun-if-changed=src/");
    println!("cargo:rerun-if-changed=build.rs");

    let include_dir = PathBuf::from(&crate_dir).join("include");
    println!("cargo:include={}", include_dir.display());
}
