// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! CLI tool for emitting hash bucket collision matrices

use clap::{ArgAction, Parser};
use collision_matrix::{
    evaluate, BitReverse, ByteHash, Identity, Multiplicative, Permutation, Xor,
};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    prelude::*,
    registry::Registry,
};

macro_rules! die {
    ($fmt:literal, $($arg:tt)*) => {{
        eprintln!($fmt, $($arg)*);
        std::process::exit(1);
    }};

    ($msg:literal) => {{
        eprintln!($msg);
        std::process::exit(1);
    }};
}

#[allow(unused_imports)]
use tracing::{debug, error, info, trace, warn};

fn init_tracing(quiet: bool, verbose: u8) -> LevelFilter {
    let level_filter = if quiet {
        LevelFilter::ERROR
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    // Bridge log crate macros to tracing (for library code that uses log::*)
    tracing_log::LogTracer::init().expect("Failed to set log tracer");

    let registry = Registry::default();

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("CMX_LOG")
        .from_env_lossy();

    let subscriber = registry.with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .compact(),
    );

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        die!("INTERNAL ERROR: setting default tracing::subscriber failed");
    }

    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing_panic::panic_hook(info);
        prev_hook(info); // daisy-chain to old panic hook
    }));

    level_filter
}

/// CLI tool for emitting hash bucket collision matrices
#[derive(Parser, Debug)]
#[command(name = "cmx")]
#[command(about = "Emits bucket collision matrices for a set of candidate hash functions")]
struct ToolArgs {
    /// Suppress all output except for errors. This overrides the -v flag.
    #[arg(short, long)]
    quiet: bool,

    /// Turn on verbose output. Supply -v multiple times to increase verbosity.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Number of buckets per matrix axis (must be a power of two, at most 256)
    #[arg(short, long, default_value_t = 16)]
    buckets: usize,

    /// Seed for the random permutation candidate (omit for a fresh shuffle)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    let args = ToolArgs::parse();

    init_tracing(args.quiet, args.verbose);

    // Shuffled once up front; every evaluation shares the same table
    let permutation = match args.seed {
        Some(seed) => Permutation::shuffled(&mut StdRng::seed_from_u64(seed)),
        None => Permutation::shuffled(&mut rand::rng()),
    };

    let candidates: &[&dyn ByteHash] = &[
        &Identity,
        &permutation,
        &BitReverse,
        &Xor,
        &Multiplicative,
    ];

    for candidate in candidates {
        info!("evaluating Identity vs {}", candidate.name());

        let matrix = match evaluate(&Identity, *candidate, args.buckets) {
            Ok(matrix) => matrix,
            Err(e) => die!("{e}"),
        };

        // One JSONL row per candidate, ready for a plotting surface
        println!(
            r#"{{"hash":{:?},"buckets":{},"cells":{}}}"#,
            candidate.name(),
            matrix.bucket_count(),
            matrix.to_json(),
        );
    }
}
