use std::fmt::Write as FmtWrite;
use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use formloom::{
    CommandOutcome, DropTarget, Field, FieldId, FieldType, FileBlobStore, FormArchive,
    FormDocument, FormSession, LoadError, RowId,
};

const HELP_TEXT: &str = "\
Commands:
  drop surface <type>              place a field in a new row
  drop <row> <type>                place a field in row <row>
  rename <row> <field> <name...>   set a field label
  delete-field <row> <field>       remove a field (the row stays)
  delete-row <row>                 remove a whole row
  undo | redo                      step through history
  preview                          toggle preview mode
  show                             print the current form
  export                           print the form as JSON
  save | load                      write/read the store slot
  help | quit

Field types: singleLine, multiLine, itemSelect, checkbox, radio, date
Rows and fields are addressed by position, starting at 1.";

#[derive(Debug, Parser)]
#[command(
    name = "formloom",
    version,
    about = "Compose form layouts from the terminal, one command per line"
)]
struct Cli {
    /// Directory holding saved form slots
    #[arg(short = 'd', long = "store", value_name = "DIR", default_value = ".formloom")]
    store: PathBuf,

    /// Slot name to save to and load from
    #[arg(short = 'k', long = "key", value_name = "NAME", default_value = formloom::DEFAULT_FORM_KEY)]
    key: String,

    /// Load the saved form before reading the first command
    #[arg(long = "resume")]
    resume: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formloom=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let mut archive = FormArchive::with_key(FileBlobStore::new(&cli.store), cli.key);
    let mut session = FormSession::new();

    if cli.resume {
        match archive.load() {
            Ok(document) => {
                session = FormSession::with_document(document);
                println!("Form loaded successfully!");
            }
            Err(LoadError::NoSavedForm) => println!("No saved form found!"),
            Err(err) => return Err(err.into()),
        }
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(command)) => match apply(&mut session, &mut archive, command) {
                Ok(Reply::Text(text)) => println!("{text}"),
                Ok(Reply::Quit) => break,
                Err(message) => println!("error: {message}"),
            },
            Err(message) => println!("error: {message}"),
        }
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
enum DriverCommand {
    Drop {
        target: TargetRef,
        field_type: FieldType,
    },
    Rename {
        row: usize,
        field: usize,
        name: String,
    },
    DeleteField {
        row: usize,
        field: usize,
    },
    DeleteRow {
        row: usize,
    },
    Undo,
    Redo,
    Preview,
    Show,
    Export,
    Save,
    Load,
    Help,
    Quit,
}

/// Drop destination as typed: the surface, or a row by 1-based position.
#[derive(Debug, Clone, Copy, PartialEq)]
enum TargetRef {
    Surface,
    Row(usize),
}

enum Reply {
    Text(String),
    Quit,
}

fn parse_line(line: &str) -> Result<Option<DriverCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };

    let command = match head {
        "drop" => {
            let target = match words.next() {
                Some("surface") => TargetRef::Surface,
                Some(word) => TargetRef::Row(parse_position(word, "row")?),
                None => return Err("drop needs a target and a field type".to_string()),
            };
            let Some(tag) = words.next() else {
                return Err("drop needs a field type".to_string());
            };
            let field_type = parse_field_type(tag)?;
            expect_end(&mut words, "drop")?;
            DriverCommand::Drop { target, field_type }
        }
        "rename" => {
            let row = parse_position(required(&mut words, "rename", "row")?, "row")?;
            let field = parse_position(required(&mut words, "rename", "field")?, "field")?;
            let name = words.collect::<Vec<_>>().join(" ");
            if name.is_empty() {
                return Err("rename needs the new name".to_string());
            }
            DriverCommand::Rename { row, field, name }
        }
        "delete-field" => {
            let row = parse_position(required(&mut words, "delete-field", "row")?, "row")?;
            let field = parse_position(required(&mut words, "delete-field", "field")?, "field")?;
            expect_end(&mut words, "delete-field")?;
            DriverCommand::DeleteField { row, field }
        }
        "delete-row" => {
            let row = parse_position(required(&mut words, "delete-row", "row")?, "row")?;
            expect_end(&mut words, "delete-row")?;
            DriverCommand::DeleteRow { row }
        }
        "undo" => {
            expect_end(&mut words, "undo")?;
            DriverCommand::Undo
        }
        "redo" => {
            expect_end(&mut words, "redo")?;
            DriverCommand::Redo
        }
        "preview" => {
            expect_end(&mut words, "preview")?;
            DriverCommand::Preview
        }
        "show" => {
            expect_end(&mut words, "show")?;
            DriverCommand::Show
        }
        "export" => {
            expect_end(&mut words, "export")?;
            DriverCommand::Export
        }
        "save" => {
            expect_end(&mut words, "save")?;
            DriverCommand::Save
        }
        "load" => {
            expect_end(&mut words, "load")?;
            DriverCommand::Load
        }
        "help" => {
            expect_end(&mut words, "help")?;
            DriverCommand::Help
        }
        "quit" | "exit" => DriverCommand::Quit,
        other => return Err(format!("unknown command {other:?}; type 'help' for the list")),
    };

    Ok(Some(command))
}

fn required<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &str,
    what: &str,
) -> Result<&'a str, String> {
    words
        .next()
        .ok_or_else(|| format!("{command} needs a {what} position"))
}

fn parse_position(word: &str, what: &str) -> Result<usize, String> {
    match word.parse::<usize>() {
        Ok(position) if position >= 1 => Ok(position),
        _ => Err(format!(
            "{what} positions are numbers starting at 1, got {word:?}"
        )),
    }
}

fn parse_field_type(tag: &str) -> Result<FieldType, String> {
    tag.parse::<FieldType>().map_err(|_| {
        let tags: Vec<&str> = FieldType::ALL.iter().map(|kind| kind.tag()).collect();
        format!(
            "unknown field type {tag:?}; expected one of: {}",
            tags.join(", ")
        )
    })
}

fn expect_end<'a>(words: &mut impl Iterator<Item = &'a str>, command: &str) -> Result<(), String> {
    if words.next().is_some() {
        return Err(format!("too many arguments for {command}"));
    }
    Ok(())
}

fn apply(
    session: &mut FormSession,
    archive: &mut FormArchive<FileBlobStore>,
    command: DriverCommand,
) -> Result<Reply, String> {
    match command {
        DriverCommand::Drop { target, field_type } => {
            let target = match target {
                TargetRef::Surface => DropTarget::Surface,
                TargetRef::Row(position) => {
                    DropTarget::Row(row_id_at(session.document(), position)?)
                }
            };
            session
                .drop_field(&target, field_type)
                .map_err(|err| err.to_string())?;
            Ok(Reply::Text(render(session)))
        }
        DriverCommand::Rename { row, field, name } => {
            let (row_id, field_id) = field_id_at(session.document(), row, field)?;
            session.rename_field(&row_id, &field_id, &name);
            Ok(Reply::Text(render(session)))
        }
        DriverCommand::DeleteField { row, field } => {
            let (row_id, field_id) = field_id_at(session.document(), row, field)?;
            session.delete_field(&row_id, &field_id);
            Ok(Reply::Text(render(session)))
        }
        DriverCommand::DeleteRow { row } => {
            let row_id = row_id_at(session.document(), row)?;
            session.delete_row(&row_id);
            Ok(Reply::Text(render(session)))
        }
        DriverCommand::Undo => Ok(match session.undo() {
            CommandOutcome::Applied => Reply::Text(render(session)),
            CommandOutcome::NoOp => Reply::Text("Nothing to undo".to_string()),
        }),
        DriverCommand::Redo => Ok(match session.redo() {
            CommandOutcome::Applied => Reply::Text(render(session)),
            CommandOutcome::NoOp => Reply::Text("Nothing to redo".to_string()),
        }),
        DriverCommand::Preview => {
            session.toggle_preview();
            let mode = if session.preview() { "preview" } else { "edit" };
            Ok(Reply::Text(format!("-- {mode} --\n{}", render(session))))
        }
        DriverCommand::Show => Ok(Reply::Text(render(session))),
        DriverCommand::Export => serde_json::to_string_pretty(session.document())
            .map(Reply::Text)
            .map_err(|err| err.to_string()),
        DriverCommand::Save => {
            archive
                .save(session.document())
                .map_err(|err| err.to_string())?;
            Ok(Reply::Text("Form saved successfully!".to_string()))
        }
        DriverCommand::Load => match archive.load() {
            Ok(document) => {
                session.replace_document(document);
                Ok(Reply::Text(format!(
                    "Form loaded successfully!\n{}",
                    render(session)
                )))
            }
            Err(LoadError::NoSavedForm) => Ok(Reply::Text("No saved form found!".to_string())),
            Err(err) => Err(err.to_string()),
        },
        DriverCommand::Help => Ok(Reply::Text(HELP_TEXT.to_string())),
        DriverCommand::Quit => Ok(Reply::Quit),
    }
}

fn row_id_at(document: &FormDocument, position: usize) -> Result<RowId, String> {
    document
        .rows
        .get(position - 1)
        .map(|row| row.id.clone())
        .ok_or_else(|| format!("no row at position {position}"))
}

fn field_id_at(
    document: &FormDocument,
    row: usize,
    field: usize,
) -> Result<(RowId, FieldId), String> {
    let row_ref = document
        .rows
        .get(row - 1)
        .ok_or_else(|| format!("no row at position {row}"))?;
    let field_ref = row_ref
        .fields
        .get(field - 1)
        .ok_or_else(|| format!("no field at position {field} in row {row}"))?;
    Ok((row_ref.id.clone(), field_ref.id.clone()))
}

fn render(session: &FormSession) -> String {
    if session.preview() {
        render_preview(session.document())
    } else {
        render_outline(session.document())
    }
}

fn render_outline(document: &FormDocument) -> String {
    if document.is_empty() {
        return "(empty form)".to_string();
    }
    let mut out = String::new();
    for (row_index, row) in document.rows.iter().enumerate() {
        let _ = writeln!(out, "Row {}", row_index + 1);
        for (field_index, field) in row.fields.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. {} <{}>",
                field_index + 1,
                field.field_name,
                field.field_type
            );
        }
    }
    out.trim_end().to_string()
}

fn render_preview(document: &FormDocument) -> String {
    if document.is_empty() {
        return "(empty form)".to_string();
    }
    let mut out = String::new();
    for row in &document.rows {
        let widgets: Vec<String> = row.fields.iter().map(preview_widget).collect();
        let _ = writeln!(out, "{}", widgets.join("  |  "));
    }
    out.trim_end().to_string()
}

fn preview_widget(field: &Field) -> String {
    let control = match field.field_type {
        FieldType::SingleLine => "[ Single Line Input ]",
        FieldType::MultiLine => "[ Multi Line Input ]",
        FieldType::ItemSelect => "[ Option A / Option B / Option C v ]",
        FieldType::Checkbox => "[ ] Checkbox",
        FieldType::Radio => "( ) Radio Option",
        FieldType::Date => "[ yyyy-mm-dd ]",
    };
    format!("{}: {control}", field.field_name)
}
