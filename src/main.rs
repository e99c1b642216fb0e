//! uuidkit CLI
//!
//! Generate, parse and inspect UUIDs from the command line.
//!
//! # Commands
//!
//! - `v4` - Random UUIDs
//! - `v3` / `v5` - Name-based UUIDs (MD5 / SHA-1)
//! - `parse` - Normalise UUID text
//! - `inspect` - Show version, variant and every representation
//! - `benchmark` - Time generation

use clap::{Parser, Subcommand};
use std::hint::black_box;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uuidkit::config::{Config, OutputFormat, default_config_path};
use uuidkit::engine::NAMESPACE_DNS;
use uuidkit::{ParsePolicy, Uuid, Variant, namespace_name, resolve_namespace};

#[derive(Parser)]
#[command(name = "uuidkit")]
#[command(version)]
#[command(about = "Generate, parse and inspect UUIDs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (default: from config, else canonical)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random (version 4) UUIDs
    V4 {
        /// Number of UUIDs to generate
        #[arg(short, long, default_value = "1")]
        count: u32,

        /// Use the Microsoft variant instead of RFC 4122
        #[arg(long)]
        microsoft: bool,
    },

    /// Generate an MD5 name-based (version 3) UUID
    V3 {
        /// The name to hash
        name: String,

        /// Namespace: dns, url, oid, x500 or UUID text
        #[arg(short, long)]
        namespace: Option<String>,

        /// Use the Microsoft variant instead of RFC 4122
        #[arg(long)]
        microsoft: bool,
    },

    /// Generate a SHA-1 name-based (version 5) UUID
    V5 {
        /// The name to hash
        name: String,

        /// Namespace: dns, url, oid, x500 or UUID text
        #[arg(short, long)]
        namespace: Option<String>,

        /// Use the Microsoft variant instead of RFC 4122
        #[arg(long)]
        microsoft: bool,
    },

    /// Parse UUID text and print it in the chosen format
    Parse {
        /// UUID text in any accepted spelling
        text: String,

        /// Require a non-nil RFC 4122 UUID with a known version
        #[arg(long)]
        strict: bool,
    },

    /// Show what a UUID contains
    Inspect {
        /// UUID text in any accepted spelling
        text: String,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of UUIDs of each kind to generate
        #[arg(short, long, default_value = "100000")]
        count: u32,
    },
}

/// Settings after merging the config file with command-line flags
struct Settings {
    config: Config,
    format: OutputFormat,
}

impl Settings {
    fn variant(&self, microsoft: bool) -> Variant {
        if microsoft {
            Variant::Microsoft
        } else {
            self.config.variant
        }
    }

    fn namespace(&self, flag: Option<String>) -> anyhow::Result<Uuid> {
        let resolved = match flag {
            Some(text) => resolve_namespace(&text)
                .map_err(|e| anyhow::anyhow!("Invalid namespace `{}`: {}", text, e))?,
            None => self.config.namespace()?.unwrap_or(NAMESPACE_DNS),
        };
        tracing::debug!(
            namespace = %resolved,
            well_known = namespace_name(&resolved).unwrap_or("-"),
            "resolved namespace"
        );
        Ok(resolved)
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = load_settings(cli.config, cli.format).and_then(|settings| match cli.command {
        Commands::V4 { count, microsoft } => cmd_v4(&settings, count, microsoft),
        Commands::V3 {
            name,
            namespace,
            microsoft,
        } => cmd_name_based(&settings, &name, namespace, microsoft, |ns, name, variant| {
            Uuid::new_v3_with_variant(ns, name, variant)
        }),
        Commands::V5 {
            name,
            namespace,
            microsoft,
        } => cmd_name_based(&settings, &name, namespace, microsoft, |ns, name, variant| {
            Uuid::new_v5_with_variant(ns, name, variant)
        }),
        Commands::Parse { text, strict } => cmd_parse(&settings, &text, strict),
        Commands::Inspect { text } => cmd_inspect(&text),
        Commands::Benchmark { count } => cmd_benchmark(count),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_settings(path: Option<PathBuf>, format: Option<OutputFormat>) -> anyhow::Result<Settings> {
    let path = path.unwrap_or_else(default_config_path);
    let config = Config::load(&path)?;
    tracing::debug!(path = %path.display(), ?config, "loaded configuration");

    let format = format.unwrap_or(config.format);
    Ok(Settings { config, format })
}

fn cmd_v4(settings: &Settings, count: u32, microsoft: bool) -> anyhow::Result<()> {
    let variant = settings.variant(microsoft);

    for _ in 0..count {
        let uuid = Uuid::try_new_v4_with_variant(variant)
            .map_err(|e| anyhow::anyhow!("No entropy available: {}", e))?;
        println!("{}", settings.format.render(&uuid));
    }

    Ok(())
}

fn cmd_name_based(
    settings: &Settings,
    name: &str,
    namespace: Option<String>,
    microsoft: bool,
    derive: fn(&Uuid, &str, Variant) -> Uuid,
) -> anyhow::Result<()> {
    let namespace = settings.namespace(namespace)?;
    let uuid = derive(&namespace, name, settings.variant(microsoft));
    println!("{}", settings.format.render(&uuid));

    Ok(())
}

fn cmd_parse(settings: &Settings, text: &str, strict: bool) -> anyhow::Result<()> {
    let policy = if strict {
        ParsePolicy::Strict
    } else {
        settings.config.policy
    };
    tracing::debug!(?policy, "parsing");

    let uuid = Uuid::parse_with(text, policy)?;
    println!("{}", settings.format.render(&uuid));

    Ok(())
}

fn cmd_inspect(text: &str) -> anyhow::Result<()> {
    let uuid = Uuid::parse_str(text)?;

    let version = match uuid.version() {
        Some(v) => format!("{} ({:?})", v.number(), v),
        None => format!("none (nibble {:#x})", uuid.version_nibble()),
    };
    let variant = match uuid.variant() {
        Some(v) => format!("{} ({})", v.number(), v),
        None => "unsupported".to_string(),
    };

    println!("Version:   {}", version);
    println!("Variant:   {}", variant);
    println!("Nil:       {}", uuid.is_nil());
    println!("Valid:     {}", uuid.is_valid());
    if let Some(name) = namespace_name(&uuid) {
        println!("Namespace: {}", name);
    }
    println!();
    println!("Canonical: {}", OutputFormat::Canonical.render(&uuid));
    println!("URN:       {}", OutputFormat::Urn.render(&uuid));
    println!("Braced:    {}", OutputFormat::Braced.render(&uuid));
    println!("Compact:   {}", OutputFormat::Compact.render(&uuid));

    Ok(())
}

fn cmd_benchmark(count: u32) -> anyhow::Result<()> {
    println!("Running benchmark with {} UUIDs of each kind...", count);

    let start = Instant::now();
    for _ in 0..count {
        let uuid = Uuid::try_new_v4().map_err(|e| anyhow::anyhow!("No entropy available: {}", e))?;
        black_box(uuid);
    }
    let v4_elapsed = start.elapsed();
    tracing::debug!(?v4_elapsed, "v4 generation finished");

    let start = Instant::now();
    for i in 0..count {
        black_box(Uuid::new_v5(&NAMESPACE_DNS, i.to_le_bytes()));
    }
    let v5_elapsed = start.elapsed();
    tracing::debug!(?v5_elapsed, "v5 generation finished");

    println!("\nResults:");
    for (label, elapsed) in [("v4 (OS random)", v4_elapsed), ("v5 (SHA-1)", v5_elapsed)] {
        let rate = count as f64 / elapsed.as_secs_f64();
        println!(
            "  {:<15} {:.3}s  {:.0} UUIDs/s",
            label,
            elapsed.as_secs_f64(),
            rate
        );
    }

    Ok(())
}
