use bionic::app::{App, AppEvent};
use bionic::cli::Cli;
use bionic::engine::{AnnotationConfig, TextAnnotator};
use bionic::ui::TuiManager;
use bionic::{export, input};
use clap::Parser;
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let annotation = cli.annotation_config()?;
    let reader = cli.reader_config()?;

    if cli.is_batch() {
        return run_batch(&cli, annotation);
    }

    let mut app = App::with_config(annotation, reader);
    if let Some(path) = cli.file.as_deref().filter(|path| *path != "-") {
        app.handle_event(AppEvent::LoadFile(path.to_string()));
    }

    // The TUI handles all further input, including file loading commands
    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}

fn run_batch(cli: &Cli, annotation: AnnotationConfig) -> Result<(), Box<dyn Error>> {
    let document = match cli.file.as_deref() {
        None | Some("-") => input::load_reader(io::stdin().lock(), "stdin")?,
        Some(path) => input::load_path(path)?,
    };

    let annotator = TextAnnotator::default();
    let spans = annotator.annotate(&document.text, &annotation);
    let format = cli.output_format();

    match cli.output.as_deref() {
        Some(path) => {
            export::write_to_path(path, format, &spans)?;
        }
        None if cli.format.is_some() => print!("{}", export::render_standalone(format, &spans)),
        None => {}
    }

    if cli.copy {
        let outcome = export::copy_rich_text(&spans)?;
        eprintln!("{}", outcome.message());
    }

    Ok(())
}

/// Logs go to stderr in batch mode. The reader owns the terminal, so there
/// logging is enabled only with `--log-file`.
fn init_logging(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let env = env_logger::Env::default().default_filter_or(cli.log_level());
    let mut builder = env_logger::Builder::from_env(env);

    if let Some(path) = &cli.log_file {
        let file = std::fs::File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else if !cli.is_batch() {
        return Ok(());
    }

    builder.init();
    Ok(())
}
