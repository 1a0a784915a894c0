//! Build command - assemble a computer and add it to the cart

use std::io::BufRead;

use pcshop::core::models::{BuildRequest, CartItem, Category, Computer};
use pcshop::output::{BuildResult, ComputerInfo, OperationResult, Render};

use crate::cli::shell::Session;

/// Prompt for every part of a build, then assemble it
///
/// Typing `exit` at any prompt abandons the build.
pub fn build<R: BufRead>(session: &mut Session<'_, R>) -> anyhow::Result<()> {
    let Some(request) = collect_request(session)? else {
        return Ok(());
    };

    match Computer::assemble(session.catalog, &request) {
        Ok(computer) => {
            let info = ComputerInfo::from(&computer);
            match session.customer.add_computer(computer.clone()) {
                Ok(()) => {
                    session.current = Some(computer);
                    BuildResult {
                        computer: info,
                        added_to_cart: true,
                    }
                    .render(session.mode);
                },
                Err(err) => OperationResult::failed(err.to_string()).render(session.mode),
            }
        },
        Err(err) => {
            OperationResult::failed(format!("Could not build computer: {err}")).render(session.mode);
        },
    }
    Ok(())
}

fn collect_request<R: BufRead>(
    session: &mut Session<'_, R>,
) -> anyhow::Result<Option<BuildRequest>> {
    let Some(id) = session.resolve(None, "Enter a computer ID: ", |s, answer| {
        let id = answer.to_uppercase();
        if id.is_empty() {
            Err("Computer ID cannot be empty.".to_string())
        } else if s.catalog.contains(&id) {
            Err(format!("{id} is already a part ID."))
        } else if s
            .customer
            .cart()
            .iter()
            .any(|item| matches!(item, CartItem::Computer(c) if c.id() == id))
        {
            Err(format!("A computer named {id} is already in the cart."))
        } else {
            Ok(id)
        }
    })?
    else {
        return Ok(None);
    };

    let Some(motherboard) =
        part_of(session, "Enter a motherboard ID: ", Category::Motherboard, "motherboard")?
    else {
        return Ok(None);
    };

    let Some(rams) = session.resolve(None, "Enter ram IDs separated by a space: ", |s, answer| {
        let ids: Vec<String> = answer.split_whitespace().map(str::to_uppercase).collect();
        if ids.iter().all(|id| is_category(s, id, Category::Ram)) {
            Ok(ids)
        } else {
            Err("Invalid RAM ID(s).".to_string())
        }
    })?
    else {
        return Ok(None);
    };

    let Some(cpu) = part_of(session, "Enter a CPU ID: ", Category::Cpu, "CPU")? else {
        return Ok(None);
    };
    let Some(psu) = part_of(session, "Enter a PSU ID: ", Category::Psu, "PSU")? else {
        return Ok(None);
    };
    let Some(storage) = part_of(session, "Enter a storage ID: ", Category::Storage, "storage")?
    else {
        return Ok(None);
    };
    let Some(storage2) = optional_part_of(
        session,
        "Enter another storage ID or press enter to skip: ",
        Category::Storage,
        "storage",
    )?
    else {
        return Ok(None);
    };
    let Some(gpu) =
        optional_part_of(session, "Enter a GPU ID or press enter to skip: ", Category::Gpu, "GPU")?
    else {
        return Ok(None);
    };

    Ok(Some(BuildRequest {
        id,
        motherboard,
        rams,
        cpu,
        psu,
        storage,
        storage2,
        gpu,
    }))
}

fn is_category<R>(session: &Session<'_, R>, id: &str, category: Category) -> bool {
    session.catalog.get(id).is_some_and(|p| p.category() == category)
}

fn part_of<R: BufRead>(
    session: &mut Session<'_, R>,
    prompt: &str,
    category: Category,
    label: &str,
) -> anyhow::Result<Option<String>> {
    session.resolve(None, prompt, |s, answer| {
        let id = answer.to_uppercase();
        if is_category(s, &id, category) {
            Ok(id)
        } else {
            Err(format!("Not a valid {label} ID."))
        }
    })
}

/// Like [`part_of`], but an empty answer skips the slot
///
/// The outer `Option` is `None` when the build was abandoned.
fn optional_part_of<R: BufRead>(
    session: &mut Session<'_, R>,
    prompt: &str,
    category: Category,
    label: &str,
) -> anyhow::Result<Option<Option<String>>> {
    session.resolve(None, prompt, |s, answer| {
        let id = answer.to_uppercase();
        if id.is_empty() {
            Ok(None)
        } else if is_category(s, &id, category) {
            Ok(Some(id))
        } else {
            Err(format!("Not a valid {label} ID."))
        }
    })
}
