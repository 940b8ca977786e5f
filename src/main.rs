// Site Layout Generator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/site-layout
// ```
//
// Or with a scenario file:
//
// ```console
// $ ./target/release/site-layout --config scenario.json --output-format json --verbose
// ```

use anyhow::Context;
use site_layout::placement::{
    GenerationStatistics, LoggingConfig, PlacementEvent, PlacementObserver, RecordingObserver,
    TracingObserver,
};
use site_layout::types::config::CliArgs;
use site_layout::types::{LayoutConfig, OutputFormat};
use site_layout::{LayoutError, Site, SiteGenerator};
use clap::Parser;
use std::process;
use std::time::Instant;
use tracing::{error, info, Level};

/// Records every event and forwards it to the log when verbose
struct CliObserver {
    recorder: RecordingObserver,
    verbose: bool,
}

impl PlacementObserver for CliObserver {
    fn on_event(&mut self, event: &PlacementEvent) {
        if self.verbose {
            TracingObserver.on_event(event);
        }
        self.recorder.on_event(event);
    }
}

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match LayoutConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let mut logging = if args.debug {
        LoggingConfig::new().with_level(Level::DEBUG).with_span_events()
    } else if args.verbose {
        LoggingConfig::new().with_level(Level::INFO)
    } else {
        // Default: warnings and errors only
        LoggingConfig::new().with_level(Level::WARN)
    };
    if args.json_logs {
        logging = logging.with_json_format();
    }
    if let Some(directory) = &args.log_dir {
        logging = logging.with_file_logging(directory.clone());
    }

    // The guard flushes file logs when dropped at the end of main
    let _log_guard = match logging.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting Site Layout Generator");

    // Load configuration from CLI arguments and optional config file
    let config = match LayoutConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no facilities will be placed.");
        print_configuration_summary(&config);
        return;
    }

    if let Err(e) = run(&config, args.verbose || args.debug) {
        error!("Layout generation failed: {:#}", e);
        process::exit(1);
    }

    info!("Site Layout Generator completed successfully");
}

/// Generate the layout and print it in the configured format
fn run(config: &LayoutConfig, verbose: bool) -> anyhow::Result<()> {
    let format = config.get_output_format().map_err(LayoutError::configuration_error)?;
    let facilities = config.build_facilities().context("Invalid facility in configuration")?;

    let start_time = Instant::now();
    let mut observer = CliObserver { recorder: RecordingObserver::new(), verbose };
    let result = SiteGenerator::generate_with_observer(
        config.width,
        config.height,
        &config.exclusion_zones,
        facilities,
        &mut observer,
    );

    let events = observer.recorder.take_events();
    let mut statistics = GenerationStatistics::from_events(&events);
    statistics.set_duration(start_time.elapsed());

    let site = match result {
        Ok(site) => site,
        Err(e) => {
            eprintln!("{}", statistics.summary());
            return Err(e.into());
        }
    };

    print_site(&site, format)?;
    eprintln!("{}", statistics.summary());
    Ok(())
}

fn print_site(site: &Site, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", site),
        OutputFormat::Json => {
            println!("{}", site.to_json().context("Failed to serialize site")?);
        }
    }
    Ok(())
}

/// Print configuration summary
fn print_configuration_summary(config: &LayoutConfig) {
    eprintln!("Configuration:");
    eprintln!("  Site: {} x {}", config.width, config.height);
    eprintln!("  Exclusion Zones: {}", config.exclusion_zones.len());
    eprintln!("  Facilities: {}", config.facilities.len());
    for spec in &config.facilities {
        let bounded = if spec.bounds.is_unconstrained() { "" } else { " (bounded)" };
        eprintln!(
            "    {} at ({}, {}) with dimensions {} x {}{}",
            spec.name, spec.x, spec.y, spec.width, spec.height, bounded
        );
    }
    eprintln!("  Output Format: {}", config.output_format);
    eprintln!();
}
