use anyhow::Context;
use clap::Parser;
use solid_demos::utils::logger;
use solid_demos::{
    CliConfig, ConfigProvider, ConsoleSink, DemoEngine, OutputFormat, Principle, RunSettings,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.list {
        for principle in Principle::all() {
            println!(
                "{:<4} {:<34} {}",
                principle.acronym().to_lowercase(),
                principle.title(),
                principle.definition()
            );
        }
        return Ok(());
    }

    let settings = match RunSettings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let level = settings.log_level.as_deref();
    match settings.output_format() {
        OutputFormat::Text => logger::init_cli_logger(cli.verbose, level),
        OutputFormat::Json => logger::init_json_logger(cli.verbose, level),
    }

    tracing::info!("Starting solid-demos");
    if let Some(path) = &cli.config {
        tracing::debug!("Loaded config file: {}", path.display());
    }
    tracing::debug!("Run settings: {:?}", settings);

    let sink = ConsoleSink::stdout(settings.output_format(), settings.show_definitions());
    let mut engine = DemoEngine::new(sink);

    let transcripts = engine.run(&settings).context("demonstration run failed")?;

    tracing::info!("✅ Printed {} demonstration(s)", transcripts.len());
    Ok(())
}
