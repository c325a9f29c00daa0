use chrono::Local;
use clap::Parser;
use daybook::application::init::init;
use daybook::application::{ConfigService, EntryDraft, EntryEdit, EntryRepository, EntryService};
use daybook::cli::{format_entry, format_entry_list, format_search_summary, Cli, Commands};
use daybook::domain::day::entry_timestamp;
use daybook::domain::image::resolve_image;
use daybook::domain::{DayReference, SearchQuery};
use daybook::error::DaybookError;
use daybook::infrastructure::{EditorSession, FileSlotStore, Workspace};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr, filtered by DAYBOOK_LOG (default: warn)
fn init_logging() {
    let env_filter =
        EnvFilter::try_from_env("DAYBOOK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<(), DaybookError> {
    let Some(command) = cli.command else {
        println!("daybook - Personal diary");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized daybook diary at {}", path.display());
            Ok(())
        }
        Commands::Add {
            date,
            message,
            image,
        } => {
            let workspace = Workspace::discover()?;
            let date = parse_entry_date(&date)?;
            // Check the image before asking for any text
            let image_url = resolve_image(&image)?;
            let content = match message {
                Some(text) => text,
                None => compose_in_editor(&workspace, "")?,
            };

            let mut service = open_entries(&workspace)?;
            let entry = service.add(EntryDraft {
                date,
                content,
                image_url: Some(image_url),
            })?;
            println!("Saved entry {}", entry.id);
            Ok(())
        }
        Commands::Edit {
            id,
            date,
            message,
            editor,
            image,
        } => {
            let workspace = Workspace::discover()?;
            let mut service = open_entries(&workspace)?;
            let current = service.show(&id)?;

            let date = date.as_deref().map(parse_entry_date).transpose()?;
            let image_url = image.as_deref().map(resolve_image).transpose()?;
            let content = if editor {
                Some(compose_in_editor(&workspace, &current.content)?)
            } else {
                message
            };

            service.edit(
                &id,
                EntryEdit {
                    date,
                    content,
                    image_url,
                },
            )?;
            println!("Updated entry {}", id);
            Ok(())
        }
        Commands::Show { id } => {
            let service = open_entries(&Workspace::discover()?)?;
            print!("{}", format_entry(&service.show(&id)?));
            Ok(())
        }
        Commands::Delete { id } => {
            let mut service = open_entries(&Workspace::discover()?)?;
            service.remove(&id)?;
            println!("Deleted entry {}", id);
            Ok(())
        }
        Commands::List { limit } => {
            let service = open_entries(&Workspace::discover()?)?;
            let output = format_entry_list(&service.list(limit));
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
            Ok(())
        }
        Commands::Search { text, on } => {
            let mut service = open_entries(&Workspace::discover()?)?;
            let on = on
                .as_deref()
                .map(|day| DayReference::parse(day).map(|r| r.resolve(today())))
                .transpose()?;

            let found = service.search(SearchQuery::new(text, on));
            println!("{}", format_search_summary(found.len()));
            if !found.is_empty() {
                print!("{}", format_entry_list(&found));
            }
            Ok(())
        }
        Commands::Export { out } => {
            let workspace = Workspace::discover()?;
            let config = workspace.load_config()?;
            let dir = match (out, config.export_dir) {
                (Some(dir), _) => dir,
                (None, Some(dir)) if dir.is_relative() => workspace.root().join(dir),
                (None, Some(dir)) => dir,
                (None, None) => PathBuf::from("."),
            };

            let service = open_entries(&workspace)?;
            match service.export(&dir, today())? {
                Some(path) => println!("Exported entries to {}", path.display()),
                None => println!("No entries to export"),
            }
            Ok(())
        }
        Commands::Clear { yes } => {
            if !yes {
                return Err(DaybookError::Validation(
                    "Refusing to delete every entry without --yes".to_string(),
                ));
            }
            let mut service = open_entries(&Workspace::discover()?)?;
            let count = service.clear()?;
            println!("Deleted {} entries", count);
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(Workspace::discover()?);

            if list {
                let config = service.list()?;
                println!("storage_key = {}", config.storage_key);
                println!("editor = {}", config.editor);
                if let Some(dir) = config.export_dir {
                    println!("export_dir = {}", dir.display());
                }
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: daybook config [--list | <key> [<value>]]");
                println!("Valid keys: storage_key, editor, export_dir, created");
            }
            Ok(())
        }
    }
}

fn today() -> chrono::NaiveDate {
    Local::now().date_naive()
}

fn parse_entry_date(input: &str) -> Result<chrono::DateTime<chrono::Utc>, DaybookError> {
    let now = Local::now();
    let day = DayReference::parse(input)?.resolve(now.date_naive());
    Ok(entry_timestamp(day, now))
}

fn open_entries(workspace: &Workspace) -> Result<EntryService<FileSlotStore>, DaybookError> {
    let storage = workspace.entry_storage()?;
    Ok(EntryService::new(EntryRepository::open(storage)))
}

fn compose_in_editor(workspace: &Workspace, initial: &str) -> Result<String, DaybookError> {
    let config = workspace.load_config()?;
    let editor = EditorSession::new(config.get_editor());
    editor.compose(&workspace.daybook_dir().join("ENTRY_EDITMSG"), initial)
}
