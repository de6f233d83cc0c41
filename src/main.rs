//! textpad - drive the editing core from the terminal

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use textpad::case::{convert_case, Dictionary};
use textpad::cli::{CaseArgs, CliArgs, Command, ConfigArgs, ReplaceArgs, RunArgs};
use textpad::config::EditorConfig;
use textpad::model::AppModel;
use textpad::runtime::{Clipboard, MemoryClipboard, Session, SystemClipboard};
use textpad::script::parse_script;
use textpad::search::{find_all, replace_all, SearchOptions};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    textpad::tracing::init();

    let config = match &args.config {
        Some(path) => EditorConfig::load_from(path),
        None => EditorConfig::load(),
    };

    match args.command {
        Command::Run(run) => run_script(run, config),
        Command::Case(case) => convert(case, config),
        Command::Replace(replace) => replace_in_file(replace),
        Command::Config(show) => show_config(show, args.config.as_deref(), &config),
    }
}

fn run_script(args: RunArgs, mut config: EditorConfig) -> Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let source = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let msgs = parse_script(&source)
        .with_context(|| format!("Invalid script {}", args.script.display()))?;

    if let Some(dictionary) = args.dictionary {
        config.dictionary_path = Some(dictionary);
    }

    let clipboard: Box<dyn Clipboard> = if args.system_clipboard {
        Box::new(SystemClipboard::new())
    } else {
        Box::new(MemoryClipboard::new())
    };

    let model = AppModel::with_file(args.file.clone(), &text, config);
    let mut session = Session::new(model, clipboard);
    session.load_configured_dictionary();
    session.wait_idle();
    session.run(msgs);

    let model = session.model();
    if let Some(err) = &model.last_error {
        tracing::warn!("Script finished with error: {}", err);
    }

    let output = if args.json {
        let mut json = serde_json::to_string_pretty(&model.render_state())
            .context("Failed to serialize render state")?;
        json.push('\n');
        json
    } else {
        model.text()
    };
    write_output(args.output.as_deref(), &output)
}

fn convert(args: CaseArgs, config: EditorConfig) -> Result<()> {
    let dictionary = if args.style.requires_dictionary() {
        let path = args
            .dictionary
            .clone()
            .or(config.dictionary_path)
            .or_else(textpad::config_paths::default_dictionary_file);
        match path {
            Some(path) if path.exists() => Some(Arc::new(
                Dictionary::load(&path)
                    .with_context(|| format!("Failed to load dictionary {}", path.display()))?,
            )),
            _ => None,
        }
    } else {
        None
    };

    let converted = convert_case(&args.joined_text(), args.style, dictionary.as_deref())?;
    println!("{}", converted);
    Ok(())
}

fn replace_in_file(args: ReplaceArgs) -> Result<()> {
    if args.find.is_empty() {
        bail!("--find must not be empty");
    }
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let opts = SearchOptions {
        case_sensitive: !args.ignore_case,
    };

    let count = find_all(&text, &args.find, opts).len();
    let replaced = replace_all(&text, &args.find, &args.replacement, opts);
    tracing::info!("Replaced {} occurrence(s) in {}", count, args.file.display());

    if args.in_place {
        if count > 0 {
            std::fs::write(&args.file, replaced)
                .with_context(|| format!("Failed to write {}", args.file.display()))?;
        }
        eprintln!("{} occurrence(s) replaced", count);
        Ok(())
    } else {
        write_output(None, &replaced)
    }
}

fn show_config(args: ConfigArgs, path: Option<&Path>, config: &EditorConfig) -> Result<()> {
    if args.init {
        let saved = match path {
            Some(path) => config.save_to(path),
            None => config.save(),
        };
        saved.map_err(anyhow::Error::msg)?;
    }
    let yaml = config.to_yaml().map_err(anyhow::Error::msg)?;
    write_output(None, &yaml)
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")
        }
    }
}
