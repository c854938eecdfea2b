//! Generates the protobuf message types from `proto/`.
//!
//! The schema is compiled with `protox`, so no system `protoc` is needed.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/happyday.proto");

    let file_descriptors = protox::compile(["proto/happyday.proto"], ["proto"])?;

    prost_build::Config::new()
        .enable_type_names()
        .compile_fds(file_descriptors)?;

    Ok(())
}
