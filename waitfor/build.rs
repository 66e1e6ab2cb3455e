use std::env;

fn main() {
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".into());
    let commit = env::var("WAITFOR_COMMIT").unwrap_or_else(|_| "XXXXX".into());
    let date = env::var("WAITFOR_BUILD_DATE").unwrap_or_else(|_| "1970-01-01T00:00:00Z".into());
    println!("cargo:rustc-env=WAITFOR_VERSION={}-{} [{}]", version, commit, date);
    println!("cargo:rerun-if-env-changed=WAITFOR_COMMIT");
    println!("cargo:rerun-if-env-changed=WAITFOR_BUILD_DATE");
}
