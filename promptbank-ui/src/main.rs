// Binary-only modules (not part of the library)
mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use promptbank_layout::LayoutItem;
use promptbank_store::{
    FileSettingsStore, Language, PromptLibrary, PromptRecord, SettingsProvider, default_data_path,
};
use promptbank_ui::{CardHandle, PromptBoard};

use crate::cli::{Args, Command};
use crate::logging::setup_logging;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    tracing::info!("Starting promptbank");

    let settings_store = match &args.settings {
        Some(path) => FileSettingsStore::new(path),
        None => FileSettingsStore::default_location(),
    };
    let settings_path = settings_store.path().to_path_buf();
    let mut settings = SettingsProvider::load(Box::new(settings_store));

    let data_path = args.data.clone().unwrap_or_else(default_data_path);
    let library = PromptLibrary::open(&data_path)
        .with_context(|| format!("failed to load prompts from {}", data_path.display()))?;

    let mut board = PromptBoard::new(library, settings.settings().layout);
    if let Some(query) = &args.filter {
        board.filter(query);
    }

    match args.command {
        Command::List => {
            for (position, card) in board.cards().enumerate() {
                if !card.is_visible() {
                    continue;
                }
                let card = card.borrow();
                let record = card.record();
                let mut flags = Vec::new();
                if record.active_prompt().is_some() {
                    flags.push("+");
                }
                if record.active_negative_prompt().is_some() {
                    flags.push("-");
                }
                if record.has_image() {
                    flags.push("img");
                }
                println!("{position:>4}  {}\t[{}]", record.title, flags.join(" "));
            }
        }
        Command::Layout => {
            let height = board.resize(args.width);
            for card in board.visible_cards() {
                let card = card.borrow();
                let rect = card.geometry();
                println!(
                    "{:>7.1} {:>7.1} {:>6.1}x{:<6.1} {}",
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height,
                    card.title()
                );
            }
            let min = board.layout().minimum_size();
            println!(
                "content height {:.1} at width {:.1} (minimum {:.1}x{:.1})",
                height, args.width, min.width, min.height
            );
        }
        Command::Import { path } => {
            let added = board
                .import(&path)
                .with_context(|| format!("failed to import {}", path.display()))?;
            if added > 0 {
                println!("imported {added} new prompts ({} total)", board.card_count());
            } else {
                println!("no new prompts in {}", path.display());
            }
        }
        Command::Export { path } => {
            board
                .export(&path)
                .with_context(|| format!("failed to export to {}", path.display()))?;
            println!("exported {} prompts to {}", board.card_count(), path.display());
        }
        Command::Add { title, fields } => {
            let record = fields.apply(PromptRecord::new(title));
            let card = board
                .create(record)
                .with_context(|| format!("failed to save prompt to {}", data_path.display()))?;
            println!("added {}", card.borrow().title());
        }
        Command::Edit {
            target,
            title,
            fields,
        } => {
            let card = find_card(&board, &target)?;
            let mut record = card.borrow().record().clone();
            if let Some(title) = title {
                record.title = title;
            }
            let record = fields.apply(record);
            board
                .edit(&card, record)
                .with_context(|| format!("failed to edit prompt {target}"))?;
            println!("updated {}", card.borrow().title());
        }
        Command::Delete { target } => {
            let card = find_card(&board, &target)?;
            let record = board
                .delete(&card)
                .with_context(|| format!("failed to delete prompt {target}"))?;
            println!("deleted {}", record.title);
        }
        Command::Language { language } => {
            let language = Language::from(language);
            settings
                .set_language(language)
                .with_context(|| format!("failed to save settings to {}", settings_path.display()))?;
            println!("language: {language}");
        }
        Command::Theme => {
            let theme = settings
                .toggle_theme()
                .with_context(|| format!("failed to save settings to {}", settings_path.display()))?;
            println!("theme: {}", if theme.is_dark() { "dark" } else { "light" });
        }
    }

    let shown = board.visible_cards().count();
    tracing::debug!(shown, total = board.card_count(), "done");
    Ok(())
}

fn find_card(board: &PromptBoard, target: &str) -> Result<CardHandle> {
    board
        .find(target)
        .with_context(|| format!("no prompt at position or titled {target:?}"))
}
