// SPDX-License-Identifier: MPL-2.0
//! Build script for platform-specific resources.
//!
//! On Windows, this embeds the product metadata into the executable
//! so it appears in the file properties dialog.

fn main() {
    println!("cargo:rerun-if-changed=assets/i18n");

    // Only run on Windows
    #[cfg(target_os = "windows")]
    {
        let mut res = winresource::WindowsResource::new();
        res.set("ProductName", "Feline Fascination");
        res.set("FileDescription", "Fascinating feline facts");
        res.compile().expect("Failed to compile Windows resources");
    }
}
