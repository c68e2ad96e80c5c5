use clap::{Parser, Subcommand, ValueEnum};
use indexmap::IndexMap;
use nlg_core::{DeviceClass, InputDocument};
use nlg_processor::{
    io::load_groups,
    render::{Html, PlainText},
    Processor, ProcessorError,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log render decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate JSON schema for notification group documents
    #[cfg(feature = "schema")]
    Schema,
    /// Render notification groups to markup
    Render {
        /// Path to the groups file (YAML, JSON or CBOR)
        #[arg(index = 1)]
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,

        /// Device class to render for (overrides the file's options)
        #[arg(short, long, value_enum)]
        device: Option<Device>,

        /// Notifications shown per group before the limit footer
        #[arg(short, long)]
        max_notifications: Option<usize>,

        /// Specific group ids to render (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        groups: Option<Vec<String>>,

        /// Output as JSON, keyed by group id
        #[arg(long)]
        json: bool,
    },
    /// Validate a notification groups file
    Validate {
        /// Path to the groups file (YAML, JSON or CBOR)
        path: PathBuf,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Format {
    Plain,
    Html,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Plain => write!(f, "plain"),
            Format::Html => write!(f, "html"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Device {
    Desktop,
    Tablet,
    Phone,
}

impl From<Device> for DeviceClass {
    fn from(device: Device) -> Self {
        match device {
            Device::Desktop => DeviceClass::Desktop,
            Device::Tablet => DeviceClass::Tablet,
            Device::Phone => DeviceClass::Phone,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        #[cfg(feature = "schema")]
        Commands::Schema => {
            let schema = schemars::schema_for!(nlg_core::InputDocument);
            match serde_json::to_string_pretty(&schema) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error serializing schema: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Render {
            input,
            format,
            device,
            max_notifications,
            groups,
            json,
        } => {
            let document = match load_groups(&input) {
                Ok(doc) => doc,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };

            // Command-line flags win over the file's options
            let mut options = document.options.clone();
            if let Some(device) = device {
                options.device = device.into();
            }
            if max_notifications.is_some() {
                options.max_notifications = max_notifications;
            }

            let document = select_groups(document, groups.as_deref());
            let processor = Processor::new(options);

            let rendered = match format {
                Format::Plain => processor.render_groups_with_format(&document.groups, PlainText),
                Format::Html => processor.render_groups_with_format(&document.groups, Html),
            };

            match rendered {
                Ok(rendered) if json => print_json(&rendered, format),
                Ok(rendered) => print_human(&rendered, format),
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Validate { path } => match validate(&path) {
            Ok(count) => println!("Notification groups file is valid ({} groups).", count),
            Err(e) => {
                eprintln!("Validation failed: {}", e);
                std::process::exit(1);
            }
        },
    }
}

/// Keep only the requested groups, in file order.
fn select_groups(mut document: InputDocument, ids: Option<&[String]>) -> InputDocument {
    if let Some(ids) = ids {
        document.groups.retain(|g| ids.contains(&g.id));
    }
    document
}

/// Parse the file and render every group, discarding the output.
fn validate(path: &std::path::Path) -> Result<usize, ProcessorError> {
    let document = load_groups(path)?;
    let processor = Processor::new(document.options.clone());
    let rendered = processor.render_groups(&document.groups)?;
    Ok(rendered.len())
}

fn print_human(rendered: &IndexMap<String, String>, format: Format) {
    for (id, output) in rendered {
        if output.is_empty() {
            tracing::info!(id = id.as_str(), "group rendered no output");
            continue;
        }
        match format {
            Format::Plain => println!("=== {} ===\n{}\n", id, output),
            Format::Html => println!("{}", output),
        }
    }
}

fn print_json(rendered: &IndexMap<String, String>, format: Format) {
    let result = serde_json::json!({
        "format": format.to_string(),
        "groups": rendered,
    });
    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            std::process::exit(1);
        }
    }
}
