use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use sha2::Digest as _;

use mood_eyes::{
    AssetJob, AssetSink, DirSink, EyeResult, GenerateOpts, GeneratedAsset, Mood,
};

#[derive(Parser, Debug)]
#[command(
    name = "mood-eyes",
    version,
    about = "Generate mood eyelid masks and iris textures as BMP files"
)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write 1 bpp upper/lower eyelid masks, one directory per mood.
    Eyelids(EyelidArgs),
    /// Write the 16 bpp love iris texture.
    Iris(IrisArgs),
    /// Write every eyelid pair plus the iris texture.
    All(AllArgs),
    /// List known moods and the assets each one gets.
    List,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Rasterize assets in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Print a JSON report (path, size, SHA-256) instead of the plain listing.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct EyelidArgs {
    /// Moods directory. Defaults to `M4_Eyes/eyes/moods` next to this crate.
    out_dir: Option<PathBuf>,

    /// Only generate these moods (repeatable).
    #[arg(long = "mood", value_name = "NAME")]
    moods: Vec<Mood>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Args, Debug)]
struct IrisArgs {
    /// Output BMP path. Defaults to `<moods dir>/love/iris.bmp`.
    out_path: Option<PathBuf>,

    /// Print a JSON report (path, size, SHA-256) instead of the plain listing.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct AllArgs {
    /// Moods directory. Defaults to `M4_Eyes/eyes/moods` next to this crate.
    out_dir: Option<PathBuf>,

    #[command(flatten)]
    run: RunArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Eyelids(args) => cmd_eyelids(args),
        Command::Iris(args) => cmd_iris(args),
        Command::All(args) => cmd_all(args),
        Command::List => cmd_list(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_moods_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("M4_Eyes")
        .join("eyes")
        .join("moods")
}

fn cmd_eyelids(args: EyelidArgs) -> anyhow::Result<()> {
    let moods = if args.moods.is_empty() {
        Mood::ALL.to_vec()
    } else {
        args.moods
    };
    let opts = GenerateOpts {
        moods,
        eyelids: true,
        iris: false,
        parallel: args.run.parallel,
        threads: args.run.threads,
    };
    let out_dir = args.out_dir.unwrap_or_else(default_moods_dir);
    let assets = run(&opts, &out_dir, args.run.json)?;
    if !args.run.json {
        let moods = assets.len() / 2;
        println!("\nGenerated eyelids for {moods} moods.");
        println!("Note: 'crazy' reuses stock eyelids, nothing is generated for it.");
    }
    Ok(())
}

fn cmd_iris(args: IrisArgs) -> anyhow::Result<()> {
    let out_path = args
        .out_path
        .unwrap_or_else(|| default_moods_dir().join("love").join("iris.bmp"));
    let file_name = out_path
        .file_name()
        .with_context(|| format!("'{}' is not a file path", out_path.display()))?;
    let root = out_path.parent().unwrap_or_else(|| Path::new(""));

    if !args.json {
        println!("Generating love iris texture (128x128 16-bit 565 BMP)...");
    }
    let job = AssetJob::Iris { mood: Mood::Love };
    let bytes = job.render()?;
    let mut sink = DigestSink::new(DirSink::new(root));
    let path = sink.write_asset(Path::new(file_name), &bytes)?;
    let asset = GeneratedAsset {
        job,
        format: job.format(),
        path,
        bytes: bytes.len(),
    };

    if args.json {
        print_json(std::slice::from_ref(&asset), &sink.digests)?;
    } else {
        println!("Saved: {} ({} bytes)", asset.path.display(), asset.bytes);
    }
    Ok(())
}

fn cmd_all(args: AllArgs) -> anyhow::Result<()> {
    let opts = GenerateOpts {
        parallel: args.run.parallel,
        threads: args.run.threads,
        ..GenerateOpts::default()
    };
    let out_dir = args.out_dir.unwrap_or_else(default_moods_dir);
    let assets = run(&opts, &out_dir, args.run.json)?;
    if !args.run.json {
        println!("\nGenerated {} files.", assets.len());
    }
    Ok(())
}

fn cmd_list() -> anyhow::Result<()> {
    for mood in Mood::ALL {
        let extra = if mood.has_iris() { " + iris.bmp" } else { "" };
        println!("{:<12} upper.bmp lower.bmp{extra}", mood.name());
    }
    Ok(())
}

fn run(opts: &GenerateOpts, out_dir: &Path, json: bool) -> anyhow::Result<Vec<GeneratedAsset>> {
    tracing::info!(out_dir = %out_dir.display(), moods = opts.moods.len(), "generating");
    let mut sink = DigestSink::new(DirSink::new(out_dir));
    let assets = mood_eyes::generate(opts, &mut sink)
        .with_context(|| format!("generate assets under '{}'", out_dir.display()))?;

    if json {
        print_json(&assets, &sink.digests)?;
    } else {
        for a in &assets {
            println!("  {} ({} bytes)", a.path.display(), a.bytes);
        }
    }
    Ok(assets)
}

/// Records a SHA-256 of every file passing through to the wrapped sink.
struct DigestSink<S> {
    inner: S,
    digests: BTreeMap<PathBuf, String>,
}

impl<S: AssetSink> DigestSink<S> {
    fn new(inner: S) -> Self {
        Self {
            inner,
            digests: BTreeMap::new(),
        }
    }
}

impl<S: AssetSink> AssetSink for DigestSink<S> {
    fn write_asset(&mut self, rel: &Path, bytes: &[u8]) -> EyeResult<PathBuf> {
        let path = self.inner.write_asset(rel, bytes)?;
        self.digests.insert(path.clone(), sha256_hex(bytes));
        Ok(path)
    }
}

#[derive(serde::Serialize)]
struct ReportEntry<'a> {
    #[serde(flatten)]
    asset: &'a GeneratedAsset,
    sha256: &'a str,
}

fn print_json(assets: &[GeneratedAsset], digests: &BTreeMap<PathBuf, String>) -> anyhow::Result<()> {
    let entries: Vec<ReportEntry<'_>> = assets
        .iter()
        .map(|asset| ReportEntry {
            asset,
            sha256: digests.get(&asset.path).map_or("", String::as_str),
        })
        .collect();
    let out = serde_json::to_string_pretty(&entries).context("serialize report")?;
    println!("{out}");
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
