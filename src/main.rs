use byteorder::{LittleEndian, ReadBytesExt};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;
use warpack::table::is_placeholder;
use warpack::variant::ArchiveVariant;
use warpack::{Archive, LoadOptions, Manifest};

#[derive(Parser)]
#[command(name = "warpack", about = "Reader for the legacy .WAR game-asset container format")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show container metadata without a manifest
    Info {
        input: PathBuf,
    },
    /// List the files stored in an archive
    List {
        input: PathBuf,
        /// Manifest: a JSON array of filenames, one per table slot
        #[arg(short, long)]
        manifest: PathBuf,
        /// Keep slots the manifest leaves unnamed, under synthesized names
        #[arg(long)]
        load_unsupported: bool,
    },
    /// Extract every stored file into a directory
    Extract {
        input: PathBuf,
        /// Manifest: a JSON array of filenames, one per table slot
        #[arg(short, long)]
        manifest: PathBuf,
        #[arg(short = 'C', long, default_value = ".")]
        output_dir: PathBuf,
        /// Keep slots the manifest leaves unnamed, under synthesized names
        #[arg(long)]
        load_unsupported: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    match Cli::parse().command {

        // ── Info ─────────────────────────────────────────────────────────────
        Commands::Info { input } => {
            // Peek the header and table directly so Mac containers can still
            // be identified even though extraction rejects them.
            let mut file = File::open(&input)?;
            let mut magic = [0u8; 4];
            file.read_exact(&mut magic)?;

            let variant = ArchiveVariant::from_magic(magic);
            let count = file.read_u32::<LittleEndian>()?;
            let mut table = Vec::with_capacity(count as usize);
            for _ in 0..count {
                table.push(file.read_u32::<LittleEndian>()?);
            }
            let placeholders = (0..table.len())
                .filter(|&i| is_placeholder(&table, i))
                .count();

            println!("── .WAR container ───────────────────────────────────────");
            println!("  Path         {}", input.display());
            match variant {
                Some(v) => println!("  Variant      {v}"),
                None    => println!("  Variant      unknown (magic {magic:02x?})"),
            }
            println!("  Table slots  {count}");
            println!("  Placeholders {placeholders}");
            println!("  Present      {}", table.len() - placeholders);
        }

        // ── List ─────────────────────────────────────────────────────────────
        Commands::List { input, manifest, load_unsupported } => {
            let ar = open_archive(&input, &manifest, load_unsupported)?;
            println!("Archive: {} ({})", input.display(), ar.variant());
            println!("{:<26} {:>12}", "Name", "Size");

            let mut names: Vec<&str> = ar.names().collect();
            names.sort_unstable();
            for name in names {
                let size = ar.get(name).map(|d| d.len()).unwrap_or(0);
                println!("{name:<26} {size:>12}");
            }
        }

        // ── Extract ──────────────────────────────────────────────────────────
        Commands::Extract { input, manifest, output_dir, load_unsupported } => {
            let ar = open_archive(&input, &manifest, load_unsupported)?;
            if !output_dir.exists() {
                std::fs::create_dir_all(&output_dir)?;
            }

            let mut names: Vec<&str> = ar.names().collect();
            names.sort_unstable();
            for name in names {
                let data = ar.get(name).unwrap_or_default();
                File::create(output_dir.join(name))?.write_all(data)?;
                println!("  extracted  {name}");
            }
            println!("Extracted {} file(s) to: {}", ar.len(), output_dir.display());
        }
    }

    Ok(())
}

// ── helpers ──────────────────────────────────────────────────────────────────

fn open_archive(
    input:            &PathBuf,
    manifest_path:    &PathBuf,
    load_unsupported: bool,
) -> Result<Archive, Box<dyn std::error::Error>> {
    let manifest = Manifest::from_json_reader(File::open(manifest_path)?)?;
    let options = LoadOptions { load_unsupported };
    Ok(Archive::open(input, &manifest, options)?)
}
