use clap::Parser;
use std::path::{Path, PathBuf};

use blal::{BlalContainer, BlalDump};

#[derive(Parser)]
#[command(name = "blal", about = "Converter for LoopAssetList (.blal) hash tables")]
struct Cli {
    /// File to convert (accepts wildcards for converting multiple files)
    file: String,
    /// Use big endian mode when writing .blal output
    #[arg(short, long)]
    bigendian: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut paths: Vec<PathBuf> = glob::glob(&cli.file)?.flatten().collect();
    if paths.is_empty() {
        // Not a pattern; let the conversion surface the real I/O error.
        paths.push(PathBuf::from(&cli.file));
    }

    for path in &paths {
        convert(path, cli.bigendian)?;
    }
    Ok(())
}

fn convert(path: &Path, bigendian: bool) -> Result<(), Box<dyn std::error::Error>> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("blal") => {
            if bigendian {
                eprintln!(
                    "WARNING: -b is ignored when converting .blal files. \
                     Make sure to use it when converting back"
                );
            }
            dump_yaml(path)
        }
        Some("yml") | Some("yaml") => write_blal(path, bigendian),
        other => Err(format!(
            ".{} is not one of: .blal, .yml, .yaml",
            other.unwrap_or_default()
        )
        .into()),
    }
}

fn dump_yaml(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(path)?;
    let dump = BlalContainer::from_bytes(&data)?.to_dump();
    let out = path.with_extension("yml");
    back_up(&out)?;
    std::fs::write(&out, serde_yaml::to_string(&dump)?)?;
    println!("  wrote  {}", out.display());
    Ok(())
}

fn write_blal(path: &Path, bigendian: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let dump: BlalDump = serde_yaml::from_str(&text)?;
    let bytes = BlalContainer::from_dump(&dump, bigendian)?.to_bytes();
    let out = path.with_extension("blal");
    back_up(&out)?;
    std::fs::write(&out, bytes)?;
    println!("  wrote  {}", out.display());
    Ok(())
}

/// Keep one generation of a previous output as `<name>.bak`.
fn back_up(path: &Path) -> std::io::Result<()> {
    if path.exists() {
        let mut bak = path.as_os_str().to_owned();
        bak.push(".bak");
        std::fs::rename(path, PathBuf::from(bak))?;
    }
    Ok(())
}
