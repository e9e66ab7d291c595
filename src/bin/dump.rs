//! tablewire Dump Binary
//!
//! Decodes a captured frame stream from a file and prints each message.

use std::fs::File;
use std::io::BufReader;

use clap::Parser;
use tablewire::{Message, Session, SessionConfig, Value};
use tracing_subscriber::{fmt, EnvFilter};

/// tablewire stream dumper
#[derive(Parser, Debug)]
#[command(name = "tablewire-dump")]
#[command(about = "Decode and print a captured tablewire frame stream")]
#[command(version)]
struct Args {
    /// Path to the captured stream
    input: String,

    /// Maximum String payload length in bytes
    #[arg(long, default_value = "16777216")]
    max_string_len: usize,

    /// Maximum fields per table definition
    #[arg(long, default_value = "1024")]
    max_fields: usize,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tablewire=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("tablewire-dump v{}", tablewire::VERSION);
    tracing::info!("Input: {}", args.input);

    let config = SessionConfig::builder()
        .max_string_len(args.max_string_len)
        .max_fields(args.max_fields)
        .build();

    let file = match File::open(&args.input) {
        Ok(f) => f,
        Err(e) => {
            tracing::error!("Failed to open {}: {}", args.input, e);
            std::process::exit(1);
        }
    };

    let mut reader = BufReader::new(file);
    let mut session = Session::new(config);
    let mut frame_count = 0usize;

    loop {
        let message = match session.read_message(&mut reader) {
            Ok(Some(m)) => m,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("Decode failed after {} frames: {}", frame_count, e);
                std::process::exit(1);
            }
        };

        print_message(&session, &message);

        if let Err(e) = session.apply(message) {
            tracing::error!("Apply failed after {} frames: {}", frame_count, e);
            std::process::exit(1);
        }

        frame_count += 1;
    }

    tracing::info!(
        "Done: {} frames, {} strings, {} tables",
        frame_count,
        session.strings().len(),
        session.schemas().len()
    );
}

/// Print one decoded message
///
/// Called before `apply`, so names reference the registries as they were
/// when the message arrived.
fn print_message(session: &Session, message: &Message) {
    match message {
        Message::String { uid, text } => {
            println!("string {:>6}  {:?}", uid, text);
        }
        Message::Table(schema) => {
            let fields: Vec<String> = schema
                .fields
                .iter()
                .map(|f| {
                    let name = session
                        .strings()
                        .resolve(f.name_id)
                        .map(str::to_owned)
                        .unwrap_or_else(|_| format!("#{}", f.name_id));
                    format!("{}: {:?}", name, f.field_type)
                })
                .collect();
            println!("table  {:>6}  ({})", schema.uid, fields.join(", "));
        }
        Message::Entry(entry) => {
            let values: Vec<String> = entry
                .values
                .iter()
                .map(|v| match v {
                    Value::Float(x) => format!("{}", x),
                    Value::Int(x) => format!("{}", x),
                    Value::Bool(x) => format!("{}", x),
                    Value::Str(id) => match session.strings().resolve(*id) {
                        Ok(s) => format!("{:?}", s),
                        Err(_) => format!("#{}", id),
                    },
                })
                .collect();
            println!("entry  {:>6}  [{}]", entry.table_uid, values.join(", "));
        }
    }
}
