//! Process command - extract one application and append it to the register.

use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use tracing::{debug, info};

use zayavka_core::application::{escape_line_breaks, ErrorLog, RecordAssembler};
use zayavka_core::lookup::LookupTables;
use zayavka_core::models::config::ZayavkaConfig;
use zayavka_core::models::record::OrderRecord;
use zayavka_core::register::{CsvRegisterStore, RegisterStore};

use super::config::default_config_path;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Application text; line breaks may be written as `\n`
    #[arg(conflicts_with = "file")]
    text: Option<String>,

    /// Read the application from a file
    #[arg(short = 'i', long = "file")]
    file: Option<PathBuf>,

    /// Output format for the produced rows
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Print the rows without saving the register
    #[arg(long)]
    dry_run: bool,

    /// Dictionary directory (overrides config)
    #[arg(short, long)]
    dictionary_dir: Option<PathBuf>,

    /// Register file (overrides config)
    #[arg(short, long)]
    register: Option<PathBuf>,

    /// Error file (overrides config)
    #[arg(short, long)]
    errors: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(dir) = &args.dictionary_dir {
        config.storage.dictionary_dir = dir.clone();
    }
    if let Some(path) = &args.register {
        config.storage.register_path = path.clone();
    }
    if let Some(path) = &args.errors {
        config.storage.errors_path = path.clone();
    }

    let text = escape_line_breaks(&read_application(&args)?);
    if text.trim().is_empty() {
        anyhow::bail!("Application text is empty");
    }

    let tables = LookupTables::load_dir(&config.storage.dictionary_dir)?;
    let store = CsvRegisterStore::from_config(&config.storage);
    let mut register = store.load()?;
    info!("Register has {} rows", register.len());

    let assembly = RecordAssembler::new(&tables, &config.pipeline).assemble(&text, register.len());

    println!("{}", format_records(&assembly.records, args.format)?);
    report_errors(&assembly.errors);

    if args.dry_run {
        println!(
            "{} Dry run, register not saved",
            style("ℹ").blue()
        );
    } else {
        let added = assembly.records.len();
        register.append(assembly.records);
        store.persist(&register, &assembly.errors)?;

        println!(
            "{} Appended {} row(s) to {}",
            style("✓").green(),
            added,
            store.register_path().display()
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn load_config(config_path: Option<&str>) -> anyhow::Result<ZayavkaConfig> {
    if let Some(path) = config_path {
        return Ok(ZayavkaConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config at {}", default_path.display());
        Ok(ZayavkaConfig::from_file(&default_path)?)
    } else {
        Ok(ZayavkaConfig::default())
    }
}

fn read_application(args: &ProcessArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
        info!("Reading application from {}", path.display());
        return Ok(fs::read_to_string(path)?);
    }

    if !std::io::stdin().is_terminal() {
        anyhow::bail!("No application given. Pass the text or --file, or run in a terminal.");
    }

    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Введите заявку")
        .interact_text()?;
    Ok(text)
}

fn report_errors(errors: &ErrorLog) {
    if errors.is_empty() {
        return;
    }

    eprintln!(
        "{}",
        style(format!("{} extraction error(s):", errors.len())).yellow()
    );
    for entry in errors.iter() {
        let first_line = entry.message.lines().next().unwrap_or_default();
        eprintln!("  - {}", first_line);
    }
}

fn format_records(records: &[OrderRecord], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Csv => format_csv(records),
        OutputFormat::Text => Ok(format_text(records)),
    }
}

fn format_csv(records: &[OrderRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    for record in records {
        wtr.serialize(record)?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data.trim_end().to_string())
}

fn format_text(records: &[OrderRecord]) -> String {
    let mut output = String::new();

    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("Заявка №{}\n", record.number));

        let date = record.date.map(|d| d.format("%d.%m.%Y").to_string());
        let quantity = record.quantity.map(|q| q.to_string());
        let requested = record.requested_quantity.map(|q| q.to_string());

        let fields = [
            ("Менеджер", record.manager.as_deref()),
            ("Дата", date.as_deref()),
            ("Вид доставки", record.delivery_type.as_deref()),
            ("Товар", record.product.as_deref()),
            ("Примечание к Товару", record.product_note.as_deref()),
            ("Кол-во", quantity.as_deref()),
            ("Кол-во в заявке", requested.as_deref()),
            ("Ед.изм.", record.unit.as_deref()),
            ("Машина/Водитель", record.vehicles.as_deref()),
            ("Продавец", record.seller.as_deref()),
            ("Откуда", record.origin.as_deref()),
            ("Покупатель", record.purchaser.as_deref()),
            ("Грузополучатель", record.consignee.as_deref()),
            ("Юр. адрес грузополучателя", record.consignee_legal_address.as_deref()),
            ("Адрес пункта разгрузки", record.unload_address.as_deref()),
            ("Контакт гп", record.phones.as_deref()),
            ("Время приемки", record.acceptance_time.as_deref()),
            ("Примечание Иное", record.note.as_deref()),
        ];

        for (label, value) in fields {
            if let Some(value) = value {
                output.push_str(&format!("  {}: {}\n", label, value));
            }
        }
    }

    output.trim_end().to_string()
}
