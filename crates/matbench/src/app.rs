//! Application entry point and mode dispatch.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use matbench_cli::{completion, output, Presenter, SweepProgress};
use matbench_harness::{
    find_max_size, load_test, parse_selection, series_run, solve, BenchOptions, CancellationToken,
    HarnessError, LoggingObserver, Method, SearchOptions, SweepObserver, SweepOptions, TestPair,
};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let methods = parse_selection(&config.method)?;
    let ceiling = config
        .ceiling_duration()
        .ok_or_else(|| HarnessError::Config(format!("invalid ceiling: {:?}", config.ceiling)))?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone());

    if let Some(dir) = &config.tests {
        return run_test_files(config, dir, &methods);
    }
    if config.search {
        return run_search(config, &methods, ceiling, &mut rng, &cancel);
    }
    if config.sweep {
        return run_sweep(config, methods, ceiling, &mut rng, &cancel);
    }
    run_random(config, &methods, &mut rng)
}

/// One-off run: a random pair of side `n` through the selected methods.
fn run_random(config: &AppConfig, methods: &[Method], rng: &mut StdRng) -> Result<()> {
    let presenter = Presenter::new(config.verbose, config.quiet);
    let opts = BenchOptions {
        cutoff: config.cutoff,
    }
    .normalize();

    let pair = TestPair::random(config.n, rng);
    if config.verbose {
        println!("A =\n{}", pair.a);
        println!("B =\n{}", pair.b);
    }
    for &method in methods {
        let (product, elapsed) = solve(&pair, method, &opts)?;
        presenter.present_run(method, config.n, &product, elapsed);
    }
    Ok(())
}

/// Solve every `.txt` test case in `dir` with the selected methods.
fn run_test_files(config: &AppConfig, dir: &Path, methods: &[Method]) -> Result<()> {
    let presenter = Presenter::new(config.verbose, config.quiet);
    let opts = BenchOptions {
        cutoff: config.cutoff,
    }
    .normalize();

    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("reading test directory {}", dir.display()))?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();
    if files.is_empty() {
        return Err(
            HarnessError::Config(format!("no .txt test cases in {}", dir.display())).into(),
        );
    }

    for file in &files {
        let pair = load_test(file).with_context(|| format!("loading {}", file.display()))?;
        if !config.quiet {
            println!("{}:", file.display());
        }
        for &method in methods {
            let (product, elapsed) = solve(&pair, method, &opts)?;
            presenter.present_run(method, pair.size(), &product, elapsed);
        }
    }
    Ok(())
}

/// Adaptive max-size search per selected method.
fn run_search(
    config: &AppConfig,
    methods: &[Method],
    ceiling: Duration,
    rng: &mut StdRng,
    cancel: &CancellationToken,
) -> Result<()> {
    let presenter = Presenter::new(config.verbose, config.quiet);
    let opts = SearchOptions {
        start: config.start,
        step: config.step,
        ceiling,
        cutoff: config.cutoff,
    };

    // Quiet mode drops the spinner but keeps probes visible via RUST_LOG.
    let logging = LoggingObserver::new();
    let progress = SweepProgress::new(config.quiet);
    let observer: &dyn SweepObserver = if config.quiet { &logging } else { &progress };

    let mut outcomes = Vec::with_capacity(methods.len());
    for &method in methods {
        let outcome = find_max_size(method, &opts, rng, cancel, observer)?;
        outcomes.push((method, outcome));
    }
    progress.finish();

    for (method, outcome) in &outcomes {
        presenter.present_search(*method, outcome);
    }
    Ok(())
}

/// Full series sweep; prints the table and optionally exports it.
fn run_sweep(
    config: &AppConfig,
    methods: Vec<Method>,
    ceiling: Duration,
    rng: &mut StdRng,
    cancel: &CancellationToken,
) -> Result<()> {
    let presenter = Presenter::new(config.verbose, config.quiet);
    let opts = SweepOptions {
        start: config.start,
        step: config.step,
        ceiling,
        repetitions: config.reps,
        cutoff: config.cutoff,
        methods,
    };

    let logging = LoggingObserver::new();
    let progress = SweepProgress::new(config.quiet);
    let observer: &dyn SweepObserver = if config.quiet { &logging } else { &progress };
    let table = series_run(&opts, rng, cancel, observer)?;
    progress.finish();

    presenter.present_table(&table);
    if let Some(path) = &config.output {
        output::write_table(path, &table)
            .with_context(|| format!("writing {}", path.display()))?;
        if !config.quiet {
            println!("table written to {}", path.display());
        }
    }
    Ok(())
}

fn ctrlc_handler(cancel: CancellationToken) {
    if let Err(err) = ctrlc::set_handler(move || cancel.cancel()) {
        tracing::warn!("failed to install Ctrl+C handler: {err}");
    }
}
