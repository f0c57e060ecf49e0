use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use mwb_doctrine::app::column_renderer::RenderContext;
use mwb_doctrine::app::config::QuoteStrategy;
use mwb_doctrine::app::entity::render_entity_body;
use mwb_doctrine::app::type_hint::TypehintRegistry;
use mwb_doctrine::infra::adapters::{Doctrine2Converter, DoctrineTable, LogCrateSink};
use mwb_doctrine::infra::config::formatter_toml::resolve_formatter_config;
use mwb_doctrine::infra::config::manifest::ManifestFile;
use mwb_doctrine::{error, logging};

/// Render Doctrine 2 annotated entity properties and accessors from a column manifest
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML manifest listing tables and their columns
    manifest: PathBuf,

    /// Formatter options file (defaults to ~/.config/mwb-doctrine/formatter.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Identifier quoting: auto, always or none
    #[arg(long)]
    quote: Option<QuoteStrategy>,

    /// Type-hint setter parameters whose type is a known class
    #[arg(long)]
    typehint: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    let args = Args::parse();
    logging::init(args.verbose);

    let mut config = resolve_formatter_config(args.config.as_deref())?;
    if let Some(quote) = args.quote {
        config.quote_identifier_strategy = quote;
    }
    if args.typehint {
        config.property_typehint = true;
    }
    log::debug!(
        "Quoting identifiers: {}, type hints: {}",
        config.quote_identifier_strategy,
        config.property_typehint
    );

    let manifest = ManifestFile::load(&args.manifest)?;
    let tables = manifest.to_tables(&config);

    let converter = Doctrine2Converter::from_config(&config);
    let typehints = TypehintRegistry::new(config.typehint_classes.iter().cloned());
    let render_log = LogCrateSink;

    let mut out = io::stdout().lock();
    for table in &tables {
        let class_name = table.qualified_class_name();
        log::info!("Rendering table \"{}\" as {}", table.name, class_name);

        let doctrine_table = DoctrineTable::new(table, &config);
        let ctx = RenderContext {
            table: &doctrine_table,
            converter: &converter,
            config: &config,
            typehints: &typehints,
            log: &render_log,
        };
        let body = render_entity_body(table, ctx)
            .wrap_err_with(|| format!("Failed to render table {}", table.name))?;

        writeln!(out, "// {}", class_name)?;
        if let Some(comment) = &table.comment {
            writeln!(out, "// {}", comment)?;
        }
        write!(out, "{}", body)?;
        writeln!(out)?;
    }

    Ok(())
}
