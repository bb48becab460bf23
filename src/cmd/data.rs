use anyhow::Result;
use serde_json::json;

use super::{Context, print_success};

pub fn run_export(output_path: Option<&str>, human: bool) -> Result<()> {
    let ctx = Context::load()?;
    let content = ctx.store.export_data()?;

    if let Some(path) = output_path {
        std::fs::write(path, &content)?;
        if human {
            println!("Exported to {}", path);
        } else {
            print_success("export", json!({ "path": path }))?;
        }
    } else {
        println!("{}", content);
    }
    Ok(())
}

pub fn run_import(file_path: &str, human: bool) -> Result<()> {
    let ctx = Context::load()?;
    let content = std::fs::read_to_string(file_path)?;

    if !ctx.store.import_data(&content)? {
        anyhow::bail!("{} is not a valid fitcalc export; nothing was imported", file_path);
    }

    if human {
        println!("Imported {}", file_path);
    } else {
        print_success("import", json!({ "file": file_path }))?;
    }
    Ok(())
}

pub fn run_clear(yes: bool, human: bool) -> Result<()> {
    if !yes {
        anyhow::bail!("refusing to delete stored data without --yes");
    }
    let ctx = Context::load()?;
    ctx.store.clear_all_data()?;

    if human {
        println!("Profile, tracking data and settings deleted.");
    } else {
        print_success("clear", json!({ "cleared": true }))?;
    }
    Ok(())
}
