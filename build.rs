/// Expose the compilation target triple as an environment variable at build time.
///
/// The `version` command prints `env!("TARGET")` so bug reports carry the
/// platform the library was built for.
fn main() {
    println!(
        "cargo:rustc-env=TARGET={}",
        std::env::var("TARGET").unwrap()
    );
}
