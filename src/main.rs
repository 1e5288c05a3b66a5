//! borax - render untrusted rich text as safe HTML

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;

use borax::{classify, decode_entities, render_markdown, sanitize, to_safe_html};

#[derive(Parser)]
#[command(name = "borax")]
#[command(version, about = "Render untrusted rich text as safe HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    borax notes.md              Render a file to safe HTML on stdout
    borax -o out.html notes.md  Write the result to a file
    cat reply.txt | borax       Read from stdin
    borax --classify notes.md   Show how the input would be routed")]
struct Cli {
    /// Input file (reads stdin when omitted or "-")
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Output file (stdout when omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Treat the input as HTML, skipping the markdown renderer
    #[arg(long, conflicts_with = "markdown")]
    html: bool,

    /// Treat the input as markdown even if it looks like HTML
    #[arg(long)]
    markdown: bool,

    /// Print the input classification as JSON instead of rendering
    #[arg(long)]
    classify: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let raw = read_input(cli.input.as_deref())?;

    if cli.classify {
        let decoded = decode_entities(raw.trim());
        let classification = classify(&decoded);
        let json = serde_json::to_string_pretty(&classification).map_err(|e| e.to_string())?;
        return write_output(cli.output.as_deref(), &json);
    }

    let html = if cli.html {
        sanitize(&decode_entities(raw.trim()))
    } else if cli.markdown {
        sanitize(&render_markdown(&decode_entities(raw.trim())))
    } else {
        to_safe_html(&raw)
    };

    write_output(cli.output.as_deref(), &html)
}

fn read_input(path: Option<&str>) -> Result<String, String> {
    match path {
        Some(path) if path != "-" => {
            std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| e.to_string())?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<(), String> {
    match path {
        Some(path) => {
            std::fs::write(path, content).map_err(|e| format!("{path}: {e}"))
        }
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
