//! cell_viewer — interactive entry point.

use clap::Parser;

use cell_viewer::{run, ViewerConfig};

/// Hand-gesture-controlled molecular point-cloud viewer.
#[derive(Parser, Debug)]
#[command(name = "cell_viewer", version, about)]
struct Cli {
    /// Points generated per scene model.
    #[arg(long, default_value_t = 1600)]
    points: usize,

    /// Log filter when RUST_LOG is unset (e.g. "debug", "cell_viewer=debug").
    #[arg(long, default_value = "info")]
    log: String,

    /// Start with gesture control disabled (toggle later with H).
    #[arg(long)]
    no_hand_control: bool,

    /// Open borderless fullscreen.
    #[arg(long)]
    fullscreen: bool,

    /// Route frame acquisition through the background capture worker.
    #[arg(long)]
    worker: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log);

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║        Cell Viewer — dual-hand gesture-controlled scenes     ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    #[cfg(feature = "leap")]
    println!("  Mode: LeapMotion hardware");
    #[cfg(not(feature = "leap"))]
    println!("  Mode: Keyboard simulation  (use --features leap for hardware)");
    println!();

    println!("  RIGHT hand (camera):   move palm = rotate    pinch = zoom");
    println!("  LEFT  hand (effects):  pinch = shake / split strands / dock enzyme");
    println!("                         fast movement = replicate PCR fragments");
    println!("  BOTH  hands:           touch left wrist with right index = next mode");
    println!();
    println!("  Keyboard: arrows+W/S right hand   IJKL+E/D left hand   T touch");
    println!("            C preview   H hand control   R reset   A spin   F fullscreen");
    println!("            mouse drag rotate   wheel zoom   Q quit");
    println!();
    println!("  Opening viewer window…");
    println!();

    run(ViewerConfig {
        points: cli.points,
        hand_control: !cli.no_hand_control,
        fullscreen: cli.fullscreen,
        use_worker: cli.worker,
    })?;

    println!("  Goodbye!");
    Ok(())
}

fn init_logging(fallback: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}
