use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "imgconcat", version)]
struct Cli {
    /// Log debug details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Concatenate images into one file.
    Concat(ConcatArgs),
    /// List the images in a folder under the root as JSON.
    List(ListArgs),
    /// Write a PNG thumbnail of one image under the root.
    Thumb(ThumbArgs),
}

#[derive(Args, Debug)]
struct RootArg {
    /// Directory that every folder argument is resolved against.
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

#[derive(Parser, Debug)]
struct ConcatArgs {
    #[command(flatten)]
    root: RootArg,

    /// Image files to upload, in order.
    files: Vec<PathBuf>,

    /// Pick images from this folder (relative to the root) instead of uploading.
    #[arg(long, conflicts_with = "files")]
    folder: Option<String>,

    /// File names inside `--folder`, in order.
    #[arg(long = "select", requires = "folder")]
    selected: Vec<String>,

    #[arg(long, value_enum, default_value_t = OrientationArg::Horizontal)]
    orientation: OrientationArg,

    #[arg(long, value_enum, default_value_t = ResizeArg::None)]
    resize_mode: ResizeArg,

    /// Width bound for `fit-max`.
    #[arg(long)]
    max_width: Option<String>,

    /// Height bound for `fit-max`.
    #[arg(long)]
    max_height: Option<String>,

    #[arg(long, value_enum, default_value_t = AlignArg::Center)]
    alignment: AlignArg,

    /// Output file name; `.jpg`/`.jpeg` selects JPEG, anything else PNG.
    #[arg(long, default_value = imgconcat::DEFAULT_OUTPUT_NAME)]
    output_name: String,

    /// Save under the root instead of downloading, into `outputs` unless
    /// `--save-folder` names another folder.
    #[arg(long)]
    save: bool,

    /// Save under this folder (relative to the root); implies `--save`.
    #[arg(long)]
    save_folder: Option<String>,

    /// Where to write the downloaded bytes (`-` for stdout). Defaults to the output name.
    #[arg(long, conflicts_with_all = ["save", "save_folder"])]
    out: Option<PathBuf>,

    /// JPEG quality (1-100).
    #[arg(long, default_value_t = imgconcat::DEFAULT_JPEG_QUALITY)]
    jpeg_quality: u8,
}

#[derive(Parser, Debug)]
struct ListArgs {
    #[command(flatten)]
    root: RootArg,

    /// Folder relative to the root.
    #[arg(default_value = "")]
    folder: String,
}

#[derive(Parser, Debug)]
struct ThumbArgs {
    #[command(flatten)]
    root: RootArg,

    /// Folder relative to the root.
    folder: String,

    /// Image file name inside the folder.
    file: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrientationArg {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ResizeArg {
    None,
    MatchHeight,
    MatchWidth,
    FitMax,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlignArg {
    Start,
    Center,
    End,
}

impl OrientationArg {
    fn form_value(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl ResizeArg {
    fn form_value(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::MatchHeight => "match_height",
            Self::MatchWidth => "match_width",
            Self::FitMax => "fit_max",
        }
    }
}

impl AlignArg {
    fn form_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Concat(args) => cmd_concat(args),
        Command::List(args) => cmd_list(args),
        Command::Thumb(args) => cmd_thumb(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_concat(args: ConcatArgs) -> anyhow::Result<()> {
    let dirs = imgconcat::AppDirs::prepare(&args.root.root)?;

    let sources = match args.folder {
        Some(folder) => imgconcat::SourceSelection::Folder {
            folder,
            selected: args.selected,
        },
        None => imgconcat::SourceSelection::Upload(read_uploads(&args.files)?),
    };

    let req = imgconcat::ConcatRequest {
        sources,
        orientation: Some(args.orientation.form_value().to_string()),
        resize_mode: Some(args.resize_mode.form_value().to_string()),
        max_width: args.max_width,
        max_height: args.max_height,
        alignment: Some(args.alignment.form_value().to_string()),
        output_name: Some(args.output_name),
        save: match args.save_folder {
            Some(folder) => imgconcat::SaveOption::Save { folder },
            None if args.save => imgconcat::SaveOption::save_to_outputs(),
            None => imgconcat::SaveOption::Download,
        },
    };
    let opts = imgconcat::EncodeOptions {
        jpeg_quality: args.jpeg_quality,
    };

    match imgconcat::handle_concat(&dirs, req, &opts)? {
        imgconcat::ConcatOutcome::Saved { relative_path } => {
            println!("{relative_path}");
        }
        imgconcat::ConcatOutcome::Download {
            file_name, bytes, ..
        } => {
            let out = args.out.unwrap_or_else(|| PathBuf::from(&file_name));
            if out == Path::new("-") {
                std::io::stdout()
                    .lock()
                    .write_all(&bytes)
                    .context("write image to stdout")?;
            } else {
                imgconcat::write_image(&out, &bytes)?;
                eprintln!("wrote {}", out.display());
            }
        }
    }
    Ok(())
}

fn read_uploads(files: &[PathBuf]) -> anyhow::Result<Vec<imgconcat::UploadedFile>> {
    files
        .iter()
        .map(|path| {
            let bytes =
                std::fs::read(path).with_context(|| format!("read '{}'", path.display()))?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok(imgconcat::UploadedFile { file_name, bytes })
        })
        .collect()
}

fn cmd_list(args: ListArgs) -> anyhow::Result<()> {
    let body = match imgconcat::list_images(&args.root.root, &args.folder) {
        Ok(images) => serde_json::json!({ "ok": true, "images": images }),
        Err(err) => {
            println!("{}", serde_json::json!({ "ok": false, "error": err.to_string() }));
            return Err(err.into());
        }
    };
    println!("{body}");
    Ok(())
}

fn cmd_thumb(args: ThumbArgs) -> anyhow::Result<()> {
    let bytes = imgconcat::thumbnail_png(&args.root.root, &args.folder, &args.file)?;
    imgconcat::write_image(&args.out, &bytes)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
