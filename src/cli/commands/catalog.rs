//! Catalog commands - list parts and show details

use std::io::BufRead;

use pcshop::core::models::Category;
use pcshop::output::{ComputerInfo, DetailsResult, PartListResult, Render};

use crate::cli::shell::Session;

/// Which parts `list` should show
enum Filter {
    All,
    Only(Category),
}

/// List parts, optionally of one category
pub fn list<R: BufRead>(session: &mut Session<'_, R>, args: &[&str]) -> anyhow::Result<()> {
    let filter = session.resolve(
        args.first().copied(),
        "Enter a category (Motherboard, RAM, CPU, PSU, Storage, GPU) or press enter to see all available parts.\n",
        |_, answer| {
            if answer.is_empty() {
                return Ok(Filter::All);
            }
            answer.parse().map(Filter::Only).map_err(|_| "Not a valid category.".to_string())
        },
    )?;

    let Some(filter) = filter else {
        return Ok(());
    };

    let result = match filter {
        Filter::All => PartListResult {
            category: None,
            parts: session.catalog.iter().collect(),
        },
        Filter::Only(category) => PartListResult {
            category: Some(category),
            parts: session.catalog.in_category(category).collect(),
        },
    };
    result.render(session.mode);
    Ok(())
}

/// Show details for a part or the current computer
pub fn details<R: BufRead>(session: &mut Session<'_, R>, args: &[&str]) -> anyhow::Result<()> {
    let found = session.resolve(args.first().copied(), "Enter a part ID: ", |s, answer| {
        let id = answer.to_uppercase();
        if let Some(computer) = s.current.as_ref().filter(|c| c.id() == id) {
            return Ok(DetailsResult::Computer {
                computer: ComputerInfo::from(computer),
            });
        }
        s.catalog
            .get(&id)
            .map(|part| DetailsResult::Part { part })
            .ok_or_else(|| format!("Part not found: {id}"))
    })?;

    if let Some(result) = found {
        result.render(session.mode);
    }
    Ok(())
}
