//! Stylebuddy - render JSON style descriptions to CSS
//!
//! Usage: stylebuddy [OPTIONS] <INPUT.json>...

use std::env;
use std::fs;
use std::process::ExitCode;

use serde_json::Value;

use stylebuddy_css::{ConfigOverride, SelectorMap, StaticSheet, StyleSheet};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Help,
    Version,
    Demo,
    Build(BuildOptions),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct BuildOptions {
    inputs: Vec<String>,
    overrides: ConfigOverride,
    config: Option<String>,
    out: Option<String>,
    selectors: Option<String>,
    passthrough: bool,
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("stylebuddy");

    let command = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(program);
            return ExitCode::FAILURE;
        }
    };

    let result = match command {
        Command::Help => {
            print_usage(program);
            Ok(())
        }
        Command::Version => {
            println!("Stylebuddy {}", VERSION);
            Ok(())
        }
        Command::Demo => run_demo(),
        Command::Build(options) => run_build(options),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_usage(program: &str) {
    println!(
        r#"Stylebuddy {} - render JSON style descriptions to CSS

USAGE:
    {} [OPTIONS] <INPUT.json>...

OPTIONS:
    -h, --help              Print this help message
    -V, --version           Print version information
    --demo                  Render a built-in example
    --prefix <P>            Text prepended to rewritten selectors (default ".")
    --delimiter <D>         Text between selector segments (default "_")
    --salt <S>              Text appended to every hash input
    --hash-selector         Replace selectors with their hash
    --no-append-hash        Do not append the secondary hash
    --config <FILE>         Read settings from a JSON file
    --static                Keep selectors unchanged
    -o, --out <FILE>        Write CSS to FILE instead of stdout
    --selectors <FILE>      Write the generated selector map as JSON

EXAMPLES:
    {} styles.json
    {} --salt app --out dist/app.css --selectors dist/classes.json styles.json
    {} --static reset.json
"#,
        VERSION, program, program, program, program
    );
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = BuildOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let arg = arg.as_str();
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{} requires a value", flag))
        };

        match arg {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--demo" => return Ok(Command::Demo),
            "--prefix" => options.overrides.prefix = Some(value(arg)?),
            "--delimiter" => options.overrides.delimiter = Some(value(arg)?),
            "--salt" => options.overrides.salt = Some(value(arg)?),
            "--hash-selector" => options.overrides.hash_selector = Some(true),
            "--no-append-hash" => options.overrides.append_hash = Some(false),
            "--config" => options.config = Some(value(arg)?),
            "--static" => options.passthrough = true,
            "-o" | "--out" => options.out = Some(value(arg)?),
            "--selectors" => options.selectors = Some(value(arg)?),
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("Unknown option: {}", flag));
            }
            input => options.inputs.push(input.to_string()),
        }
    }

    if options.inputs.is_empty() {
        return Err("No input files".to_string());
    }

    Ok(Command::Build(options))
}

/// Read a JSON config file; flags given on the command line win over it
fn load_config(path: &str) -> Result<ConfigOverride, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse config {}: {}", path, e))
}

fn read_input(path: &str) -> Result<Value, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse {}: {}", path, e))
}

fn run_build(options: BuildOptions) -> Result<(), String> {
    let base = match &options.config {
        Some(path) => load_config(path)?.or(options.overrides.clone()),
        None => options.overrides.clone(),
    };

    let mut css = String::new();
    let mut selectors = SelectorMap::new();

    if options.passthrough {
        for path in &options.inputs {
            let sheet = StaticSheet::from_json(&read_input(path)?).map_err(|e| format!("{}: {}", path, e))?;
            css.push_str(&sheet.render().map_err(|e| format!("{}: {}", path, e))?);
        }
    } else {
        let mut sheet = StyleSheet::new(base);
        for path in &options.inputs {
            let added = sheet
                .add_json(&read_input(path)?, &ConfigOverride::new())
                .map_err(|e| format!("{}: {}", path, e))?;
            log::info!("Rendered {} ({} selectors)", path, added.len());
            selectors.extend(added);
        }
        css = sheet.render();
    }

    match &options.out {
        Some(path) => {
            fs::write(path, &css).map_err(|e| format!("Failed to write {}: {}", path, e))?;
            log::info!("Wrote {} bytes to {}", css.len(), path);
        }
        None => println!("{}", css),
    }

    if let Some(path) = &options.selectors {
        let json = serde_json::to_string_pretty(&selectors)
            .map_err(|e| format!("Failed to serialize selectors: {}", e))?;
        fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path, e))?;
    }

    Ok(())
}

/// Render a small built-in stylesheet and print the selector map
fn run_demo() -> Result<(), String> {
    let input: Value = serde_json::from_str(DEMO_STYLES).map_err(|e| e.to_string())?;

    let mut sheet = StyleSheet::default();
    let selectors = sheet
        .add_json(&input, &ConfigOverride::new())
        .map_err(|e| e.to_string())?;

    println!("=== CSS ===\n");
    println!("{}", sheet.render());
    println!("\n=== Selectors ===\n");
    print!("{}", selectors);

    Ok(())
}

/// Demo style description
const DEMO_STYLES: &str = r#"
{
    "button": {
        "background": "yellow",
        "borderColor": "black",
        "display": ["-webkit-box", "-moz-box", "flex"],
        ":hover": { "background": "blue" },
        "@media screen and (min-width:720px)": {
            "WebkitTransition": "background 0.2s",
            ":focus": { "outline": "none" }
        }
    },
    "label": { "fontWeight": 700 }
}
"#;
