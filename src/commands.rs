use crate::model::{classify, Pantry, DATE_FORMAT};
use crate::storage::{init_project_store, load_items, locate_store, save_items, StoreLocation};
use crate::ui;
use anyhow::{bail, Context, Result};
use chrono::Local;
use std::env;

pub fn init() -> Result<()> {
    let location = init_project_store()?;
    println!("Initialized store at {}", location.path.display());
    Ok(())
}

pub fn list() -> Result<()> {
    let (pantry, location) = load_current_pantry()?;
    println!(
        "Items: {} ({})",
        location.path.display(),
        match location.scope {
            crate::storage::StoreScope::Project => "project",
            crate::storage::StoreScope::Global => "global",
        }
    );
    if pantry.is_empty() {
        println!("  (no items yet)");
        return Ok(());
    }
    let today = Local::now().date_naive();
    for item in pantry.sorted() {
        let marker = classify(item.date, today)
            .label()
            .map(|l| format!("  [{}]", l))
            .unwrap_or_default();
        println!(
            "  {}  {}  {}{}",
            item.id,
            item.date.format(DATE_FORMAT),
            item.name,
            marker
        );
    }
    Ok(())
}

pub fn add(name: String, date: String) -> Result<()> {
    let (mut pantry, location) = load_current_pantry()?;
    let item = pantry
        .add(&name, &date)
        .with_context(|| format!("adding {}", name))?;
    save_items(&location, pantry.items())?;
    println!("Added {} ({}, expires {})", item.name, item.id, item.date);
    Ok(())
}

pub fn remove(id: String) -> Result<()> {
    let (mut pantry, location) = load_current_pantry()?;
    if pantry.remove(&id) {
        save_items(&location, pantry.items())?;
        println!("Removed {}", id);
    } else {
        println!("No item {}", id);
    }
    Ok(())
}

pub fn edit(id: String, name: Option<String>, date: Option<String>) -> Result<()> {
    let (mut pantry, location) = load_current_pantry()?;
    let current = match pantry.get(&id) {
        Some(item) => item.clone(),
        None => bail!("item {} not found", id),
    };
    let name = name.unwrap_or(current.name);
    let date = date.unwrap_or_else(|| current.date.format(DATE_FORMAT).to_string());
    pantry
        .update(&id, &name, &date)
        .with_context(|| format!("editing {}", id))?;
    save_items(&location, pantry.items())?;
    println!("Updated {}", id);
    Ok(())
}

pub fn tui() -> Result<()> {
    let (pantry, location) = load_current_pantry()?;
    ui::run(pantry, location)
}

fn load_current_pantry() -> Result<(Pantry, StoreLocation)> {
    let cwd = env::current_dir()?;
    let location = locate_store(&cwd)?;
    let pantry = Pantry::new(load_items(&location));
    Ok((pantry, location))
}
