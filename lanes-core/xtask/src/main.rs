use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use xshell::{cmd, Shell};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Test, verification and benchmark automation for lanes-core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Runs unit, scenario and property tests for the whole workspace
    Test {
        /// Number of proptest cases per property
        #[arg(long, default_value_t = 256)]
        cases: u32,
    },
    /// Runs the Kani proofs of lanes-core
    Kani {
        /// Run a single proof harness by name
        #[arg(long)]
        harness: Option<String>,
    },
    /// Runs the timing benchmark and the iai-callgrind instruction counts
    Bench {
        /// Pin the benchmark process to a specific CPU core (using taskset)
        #[arg(long, short = 'p')]
        pin_core: Option<usize>,

        /// Number of strings in the timing corpus
        #[arg(long, default_value_t = 100_000)]
        count: usize,

        /// Skip the iai-callgrind run (needs valgrind)
        #[arg(long)]
        skip_callgrind: bool,
    },
    /// Checks that lanes-core builds without std for the given target
    CheckNoStd {
        #[arg(long, short, value_enum, default_value_t = Target::Thumbv7em)]
        target: Target,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Target {
    /// Cortex-M4/M7 (no FPU ABI)
    Thumbv7em,
    /// Bare-metal ARMv7R
    Armv7r,
    /// WebAssembly
    Wasm32,
}

impl Target {
    fn triple(self) -> &'static str {
        match self {
            Target::Thumbv7em => "thumbv7em-none-eabi",
            Target::Armv7r => "armv7r-none-eabi",
            Target::Wasm32 => "wasm32-unknown-unknown",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    match cli.command {
        Commands::Test { cases } => {
            run_tests(&sh, cases)?;
        }
        Commands::Kani { harness } => {
            run_kani(&sh, harness.as_deref())?;
        }
        Commands::Bench {
            pin_core,
            count,
            skip_callgrind,
        } => {
            run_bench(&sh, pin_core, count, skip_callgrind)?;
        }
        Commands::CheckNoStd { target } => {
            check_no_std(&sh, target)?;
        }
    }

    Ok(())
}

fn run_tests(sh: &Shell, cases: u32) -> Result<()> {
    let _env = sh.push_env("PROPTEST_CASES", cases.to_string());

    println!(">> Running workspace tests ({} proptest cases)...", cases);
    cmd!(sh, "cargo test --workspace").run()?;

    println!(">> Running tests in release mode (no debug assertions)...");
    cmd!(sh, "cargo test -p lanes-core --release").run()?;

    println!(">> Running the tutorial example...");
    cmd!(sh, "cargo run -p lanes-core --example tutorial_digits").run()?;
    Ok(())
}

fn run_kani(sh: &Shell, harness: Option<&str>) -> Result<()> {
    if cmd!(sh, "cargo kani --version").read().is_err() {
        return Err(anyhow::anyhow!(
            "'cargo kani' is not installed. See https://model-checking.github.io/kani/install-guide.html"
        ));
    }

    match harness {
        Some(name) => {
            println!(">> Verifying harness {}...", name);
            cmd!(sh, "cargo kani --package lanes-core --harness {name}").run()?;
        }
        None => {
            println!(">> Verifying all lanes-core harnesses...");
            cmd!(sh, "cargo kani --package lanes-core").run()?;
        }
    }
    Ok(())
}

fn run_bench(sh: &Shell, pin_core: Option<usize>, count: usize, skip_callgrind: bool) -> Result<()> {
    let prefix = match pin_core {
        Some(c) => format!("taskset -c {} ", c),
        None => String::new(),
    };

    println!(">> Timing SWAR vs scalar parsing...");
    if let Some(c) = pin_core {
        println!("   (Pinned to Core {})", c);
    }
    let _env = sh.push_env("RUSTFLAGS", "-C target-cpu=native");
    let cmd_str = format!("{}cargo run -p lanes-atoi-bench --release -- --count {}", prefix, count);
    cmd!(sh, "bash -c {cmd_str}").run()?;
    drop(_env);

    if skip_callgrind {
        return Ok(());
    }
    if cmd!(sh, "valgrind --version").read().is_err() {
        println!("!! 'valgrind' not found. Skipping instruction counts.");
        return Ok(());
    }
    ensure_iai_runner(sh)?;

    println!(">> Counting instructions with iai-callgrind...");
    cmd!(sh, "cargo bench -p lanes-core --bench decode_ops").run()?;
    Ok(())
}

fn check_no_std(sh: &Shell, target: Target) -> Result<()> {
    let triple = target.triple();
    ensure_target(sh, triple)?;

    println!("--- Checking lanes-core for {} ---", triple);
    cmd!(sh, "cargo build -p lanes-core --lib --target {triple} --release").run()?;

    println!(">> lanes-core builds without std on {}.", triple);
    Ok(())
}

fn ensure_target(sh: &Shell, target: &str) -> Result<()> {
    let output = cmd!(sh, "rustup target list --installed").read()?;
    if !output.contains(target) {
        println!("!! Target '{}' not found. Installing via rustup...", target);
        cmd!(sh, "rustup target add {target}").run()?;
    }
    Ok(())
}

fn ensure_iai_runner(sh: &Shell) -> Result<()> {
    if cmd!(sh, "iai-callgrind-runner --version").read().is_err() {
        println!("!! 'iai-callgrind-runner' is not installed. Installing via cargo...");
        cmd!(sh, "cargo install iai-callgrind-runner --version 0.14.0").run()?;
    }
    Ok(())
}
