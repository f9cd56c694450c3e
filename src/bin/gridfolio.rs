use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "gridfolio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out a JSON array of image descriptors.
    Layout(LayoutArgs),
    /// Hydrate a project from an images manifest, then lay it out.
    Gallery(GalleryArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input JSON: an array of image descriptors.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Project key used as the layout seed.
    #[arg(long)]
    project: String,

    #[command(flatten)]
    layout: LayoutFlags,
}

#[derive(Parser, Debug)]
struct GalleryArgs {
    /// Images manifest JSON.
    #[arg(long)]
    manifest: PathBuf,

    /// Manifest category (e.g. `visual`).
    #[arg(long)]
    category: String,

    /// Project id inside the category; also the layout seed.
    #[arg(long)]
    project: String,

    /// Project title used for alt text (defaults to the id).
    #[arg(long)]
    title: Option<String>,

    #[command(flatten)]
    layout: LayoutFlags,
}

#[derive(Args, Debug)]
struct LayoutFlags {
    /// Plain-text block placed among the images.
    #[arg(long)]
    text: Option<String>,

    /// HTML block placed among the images.
    #[arg(long)]
    html: Option<String>,

    /// Size of the text block.
    #[arg(long, value_enum, default_value_t = SizeChoice::Md)]
    text_size: SizeChoice,

    /// Grid columns.
    #[arg(long, default_value_t = gridfolio::GridSize::DEFAULT.width())]
    grid_width: u32,

    /// Grid rows.
    #[arg(long, default_value_t = gridfolio::GridSize::DEFAULT.height())]
    grid_height: u32,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SizeChoice {
    Sm,
    Md,
    Lg,
}

impl From<SizeChoice> for gridfolio::TileSize {
    fn from(value: SizeChoice) -> Self {
        match value {
            SizeChoice::Sm => gridfolio::TileSize::Sm,
            SizeChoice::Md => gridfolio::TileSize::Md,
            SizeChoice::Lg => gridfolio::TileSize::Lg,
        }
    }
}

impl LayoutFlags {
    fn options(&self) -> anyhow::Result<gridfolio::LayoutOptions> {
        let grid = gridfolio::GridSize::new(self.grid_width, self.grid_height)?;
        let mut opts = gridfolio::LayoutOptions::default().with_grid(grid);
        if self.text.is_some() || self.html.is_some() {
            opts = opts.with_text_block(gridfolio::TextBlock {
                html: self.html.clone(),
                text: self.text.clone(),
                size: self.text_size.into(),
            });
        }
        Ok(opts)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME")))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Gallery(args) => cmd_gallery(args),
    }
}

fn read_images_json(path: &Path) -> anyhow::Result<Vec<gridfolio::ImageDescriptor>> {
    let f = File::open(path).with_context(|| format!("open images '{}'", path.display()))?;
    let r = BufReader::new(f);
    let images: Vec<gridfolio::ImageDescriptor> =
        serde_json::from_reader(r).with_context(|| "parse images JSON")?;
    Ok(images)
}

fn read_manifest(path: &Path) -> anyhow::Result<gridfolio::ImagesManifest> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("open manifest '{}'", path.display()))?;
    let manifest = gridfolio::ImagesManifest::from_json_str(&s)
        .with_context(|| format!("parse manifest '{}'", path.display()))?;
    Ok(manifest)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let images = read_images_json(&args.in_path)?;
    let opts = args.layout.options()?;
    let layout = gridfolio::choose_layout(&args.project, &images, &opts);
    write_json(&layout, args.layout.out.as_deref())
}

fn cmd_gallery(args: GalleryArgs) -> anyhow::Result<()> {
    let manifest = read_manifest(&args.manifest)?;
    let gallery =
        manifest.project_gallery(&args.category, &args.project, args.title.as_deref())?;
    let opts = args.layout.options()?;
    let layout = gridfolio::choose_layout(&args.project, &gallery.descriptors(), &opts);

    let doc = GalleryDoc {
        cover: gallery.cover.as_deref(),
        items: &gallery.items,
        layout: &layout,
    };
    write_json(&doc, args.layout.out.as_deref())
}

#[derive(serde::Serialize)]
struct GalleryDoc<'a> {
    cover: Option<&'a str>,
    items: &'a [gridfolio::GalleryItem],
    layout: &'a gridfolio::Layout,
}

fn write_json<T: serde::Serialize>(value: &T, out: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).with_context(|| "serialize layout JSON")?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json.as_bytes())
                .with_context(|| format!("write layout '{}'", path.display()))?;
            tracing::info!(path = %path.display(), "wrote layout");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
