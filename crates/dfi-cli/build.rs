#![allow(clippy::print_stdout)]

fn main() {
    println!("cargo:rerun-if-env-changed=DFI_GIT_COMMIT");
    println!("cargo:rerun-if-env-changed=DFI_BUILD_DATE");

    for key in ["DFI_GIT_COMMIT", "DFI_BUILD_DATE"] {
        let value = std::env::var(key).unwrap_or_else(|_| "unknown".to_string());
        println!("cargo:rustc-env={key}={value}");
    }
}
