use std::path::PathBuf;
use std::{env, fs, process};

use anyhow::{Context, Result, bail};
use html::dom_snapshot::{DomSnapshot, DomSnapshotOptions};
use layout::{DisplayItem, FixedFont, FixedMetrics, FontCache, LayoutOptions, layout};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

enum Mode {
    Tree,
    Layout,
    Screen,
}

struct Args {
    path: PathBuf,
    mode: Mode,
}

fn parse_args() -> Result<Args> {
    let mut path = None;
    let mut mode = Mode::Layout;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--tree" => mode = Mode::Tree,
            "--screen" => mode = Mode::Screen,
            _ if arg.starts_with("--") => bail!("unknown flag {arg}"),
            _ if path.is_none() => path = Some(PathBuf::from(arg)),
            _ => bail!("unexpected argument {arg}"),
        }
    }
    let Some(path) = path else {
        bail!("usage: glyphweb <file.html> [--tree | --screen]");
    };
    Ok(Args { path, mode })
}

fn run() -> Result<()> {
    let args = parse_args()?;
    let body = fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    let doc = html::parse(&body);
    log::info!("parsed {} nodes from {}", doc.len(), args.path.display());

    match args.mode {
        Mode::Tree => {
            println!("{}", DomSnapshot::new(&doc, DomSnapshotOptions::default()));
        }
        Mode::Layout | Mode::Screen => {
            let options = LayoutOptions::defaults();
            let metrics = FontCache::new(FixedMetrics::default());
            let list = layout(&doc, &metrics, &options).context("layout failed")?;
            let shown: Vec<&DisplayItem<FixedFont>> = match args.mode {
                Mode::Screen => list.visible(0.0, options.height, options.vstep).collect(),
                _ => list.iter().collect(),
            };
            for item in &shown {
                println!(
                    "{:>8.2} {:>8.2} [{}] {}",
                    item.x, item.y, item.font.key, item.text
                );
            }
            log::info!(
                "{} of {} items shown, content height {:.2}, {} fonts",
                shown.len(),
                list.len(),
                list.content_height(),
                metrics.len()
            );
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}
