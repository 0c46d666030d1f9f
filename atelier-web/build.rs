use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::Command;

const IMAGE_EXTENSIONS: &[&str] = &["avif", "gif", "jpeg", "jpg", "png", "svg", "webp"];

fn main() {
    generate_art_manifest();
    generate_tailwind();
}

/// Write `$OUT_DIR/art_manifest.rs`: one `asset!` per image under `public/art`,
/// keyed by its path relative to the crate root.
fn generate_art_manifest() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let art_dir = Path::new(manifest_dir).join("public/art");

    println!("cargo:rerun-if-changed={}", art_dir.display());

    let mut images = Vec::new();
    collect_images(&art_dir, &mut images);
    images.sort();

    let mut source = String::from("pub const ART_MANIFEST: &[(&str, Asset)] = &[\n");
    for image in &images {
        let relative = image
            .strip_prefix(manifest_dir)
            .expect("Image outside the crate directory")
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let absolute = format!("/{relative}");
        writeln!(source, "    ({relative:?}, asset!({absolute:?})),").unwrap();
    }
    source.push_str("];\n");

    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR not set");
    std::fs::write(Path::new(&out_dir).join("art_manifest.rs"), source)
        .expect("Failed to write art manifest");

    if images.is_empty() {
        println!("cargo:warning=No images found under public/art");
    }
}

fn collect_images(dir: &Path, images: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let hidden = path
            .file_name()
            .map(|n| n.to_string_lossy().starts_with('.'))
            .unwrap_or(true);
        if hidden {
            continue;
        }
        if path.is_dir() {
            println!("cargo:rerun-if-changed={}", path.display());
            collect_images(&path, images);
        } else if is_image(&path) {
            images.push(path);
        }
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Rebuild `assets/tailwind.css` from the `tailwind.css` entry point when the
/// npm toolchain is present. Without it the checked-in stylesheet is served as
/// is; slide, reveal and dimming opacity are inline styles and do not need it.
fn generate_tailwind() {
    let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let entry = crate_dir.join("tailwind.css");
    let stylesheet = crate_dir.join("assets/tailwind.css");

    // Class names are scanned from both crates that render markup
    for watched in [entry.clone(), crate_dir.join("src"), crate_dir.join("../atelier-ui/src")] {
        println!("cargo:rerun-if-changed={}", watched.display());
    }

    let cli = crate_dir.join("node_modules/.bin/tailwindcss");
    if !cli.is_file() {
        println!(
            "cargo:warning=Skipping Tailwind: {} missing, run `npm install` in atelier-web",
            cli.display()
        );
        return;
    }

    let status = Command::new(&cli)
        .arg("--input")
        .arg(&entry)
        .arg("--output")
        .arg(&stylesheet)
        .current_dir(crate_dir)
        .status()
        .unwrap_or_else(|e| panic!("Could not start {}: {e}", cli.display()));
    if !status.success() {
        panic!("Tailwind exited with {status} while building {}", stylesheet.display());
    }
}
