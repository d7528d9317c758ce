use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use log::{debug, error};

use crate::error::{Error, Result};
use crate::scrape::{filter_models, scan_images, ImageDescriptor};
use crate::util::{resolve_filename, unique_filename};
use crate::wiki::Wiki;

mod error;
mod scrape;
mod util;
mod wiki;

const WIKI_URL: &str = "https://wiki.cobblemon.com/index.php/Pok%C3%A9_Ball";
const BASE_URL: &str = "https://wiki.cobblemon.com";
const OUTPUT_DIR: &str = "pokeball_models";
const DOWNLOAD_PAUSE_MS: u64 = 500;

/// Downloads the Poké Ball 3D model renders from the Cobblemon wiki
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Wiki page to scan for model images
    #[arg(long, default_value = WIKI_URL)]
    url: String,

    /// Base URL relative image paths are resolved against
    #[arg(long, default_value = BASE_URL)]
    base_url: String,

    /// Directory the downloaded images are saved to
    #[arg(short, long, default_value = OUTPUT_DIR)]
    output: PathBuf,

    /// Pause between downloads in milliseconds
    #[arg(long, default_value_t = DOWNLOAD_PAUSE_MS)]
    delay_ms: u64,
}

fn ensure_output_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    std::fs::create_dir_all(path).map_err(Error::CreateOutputDir)?;
    println!("✓ Directory '{}' created", path.display());

    Ok(())
}

fn download_all<F>(
    images: &[ImageDescriptor],
    output: &Path,
    delay: Duration,
    mut fetch: F,
) -> usize
where
    F: FnMut(&ImageDescriptor) -> Result<Vec<u8>>,
{
    let total = images.len();

    let mut used = HashSet::new();
    let mut downloaded = 0;

    for (idx, img) in images.iter().enumerate() {
        let filename =
            unique_filename(&resolve_filename(&img.alt, &img.src), &mut used);
        let filepath = output.join(&filename);

        println!("[{}/{}] Downloading: {}", idx + 1, total, filename);

        let res = fetch(img).and_then(|data| {
            std::fs::write(&filepath, &data)
                .map_err(|e| Error::WriteImage(filepath.clone(), e))
        });

        match res {
            Ok(()) => {
                println!("    ✓ Saved as: {}", filepath.display());
                println!("    Dimensions: {}x{}", img.width, img.height);
                downloaded += 1;

                // Courtesy pause so we don't hammer the wiki
                std::thread::sleep(delay);
            }
            Err(e) => {
                error!("download of '{}' failed: {:?}", img.alt, e);
                println!("    ✗ Error downloading '{}': {:?}", img.alt, e);
            }
        }
    }

    downloaded
}

fn run(args: &Args) -> Result<()> {
    ensure_output_dir(&args.output)?;

    let wiki = Wiki::new(&args.base_url)?;

    println!("Fetching page: {}", args.url);
    let html = wiki.fetch_page(&args.url)?;

    let images = filter_models(scan_images(&html));
    let total = images.len();

    println!();
    println!("✓ Found {} model images", total);
    println!("{}", "-".repeat(60));

    let downloaded = download_all(
        &images,
        &args.output,
        Duration::from_millis(args.delay_ms),
        |img| {
            let url = wiki.resolve(&img.src)?;
            println!("    URL: {}", url);

            wiki.fetch_image(&url)
        },
    );

    println!("{}", "-".repeat(60));
    println!();
    println!("✓ Download complete: {}/{} models downloaded", downloaded, total);

    let abs = std::fs::canonicalize(&args.output)
        .unwrap_or_else(|_| args.output.clone());
    println!("✓ Files saved in: {}", abs.display());

    println!();
    println!("{}", "=".repeat(60));
    println!("MODELS FOUND:");
    println!("{}", "=".repeat(60));
    for img in images.iter() {
        println!("• {}", img.alt);
    }
    println!("{}", "=".repeat(60));

    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    debug!("Args: {:#?}", args);

    if let Err(e) = run(&args) {
        println!();
        println!("✗ Error: {:?}", e);
        std::process::exit(1);
    }
}
