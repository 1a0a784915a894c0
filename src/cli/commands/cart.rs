//! Cart commands - purchase, remove, view and checkout

use std::io::BufRead;

use pcshop::core::models::CartItem;
use pcshop::output::{OperationResult, RemovalResult, Render};

use crate::cli::shell::Session;

/// Add a part to the cart
pub fn purchase<R: BufRead>(session: &mut Session<'_, R>, args: &[&str]) -> anyhow::Result<()> {
    let catalog = session.catalog;
    let part_id = session.resolve(args.first().copied(), "Enter a part ID: ", |s, answer| {
        let id = answer.to_uppercase();
        if s.catalog.contains(&id) {
            Ok(id)
        } else {
            Err(format!("Part not found: {id}"))
        }
    })?;

    let Some(part_id) = part_id else {
        return Ok(());
    };

    match session.customer.add_part(catalog, &part_id) {
        Ok(part) => {
            OperationResult::ok(format!("{} added to cart ({}).", part.id, part.price))
                .render(session.mode);
        },
        Err(err) => OperationResult::failed(err.to_string()).render(session.mode),
    }
    Ok(())
}

/// Remove one or more parts or computers from the cart
pub fn remove<R: BufRead>(session: &mut Session<'_, R>, args: &[&str]) -> anyhow::Result<()> {
    let ids: Vec<String> = if args.is_empty() {
        match session.input.field("Enter part/computer ID(s) separated by a space: ")? {
            Some(answer) => answer.split_whitespace().map(str::to_uppercase).collect(),
            None => return Ok(()),
        }
    } else {
        args.iter().map(|id| id.to_uppercase()).collect()
    };

    if ids.is_empty() {
        OperationResult::failed("No IDs given.").render(session.mode);
        return Ok(());
    }

    let removal = session.customer.remove_many(
        session.catalog,
        session.current.as_ref(),
        &ids,
        session.removal,
    );

    RemovalResult {
        removed: removal.removed.iter().map(CartItem::line).collect(),
        error: removal.failure.map(|err| err.to_string()),
        total: session.customer.total(),
        cart_empty: session.customer.is_empty(),
    }
    .render(session.mode);
    Ok(())
}

/// Show the cart
pub fn cart<R: BufRead>(session: &Session<'_, R>) {
    session.customer.cart_view().render(session.mode);
}

/// Settle the cart against the budget
pub fn checkout<R: BufRead>(session: &mut Session<'_, R>) {
    match session.customer.checkout() {
        Ok(receipt) => receipt.render(session.mode),
        Err(err) => OperationResult::failed(err.to_string()).render(session.mode),
    }
}
