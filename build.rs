fn main() {
    // Embed the build time so `serve` can report which binary is running.
    println!(
        "cargo:rustc-env=BUILD_TIMESTAMP={}",
        chrono::Utc::now().to_rfc3339()
    );
}
