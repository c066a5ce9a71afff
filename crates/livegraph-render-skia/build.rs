// File: crates/livegraph-render-skia/build.rs
// Summary: Links the extra Windows system library the skia textlayout/ICU build needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // ICU data lookup in skia's textlayout (skparagraph/skunicode) reads the registry
        // through RegOpenKeyExW/RegQueryInfoKeyW, which live in advapi32.
        println!("cargo:rustc-link-lib=advapi32");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
