//! Budget command - set the customer's budget

use std::io::BufRead;

use pcshop::core::models::Money;
use pcshop::output::{OperationResult, Render};

use crate::cli::shell::Session;

/// Replace the customer's budget
pub fn budget<R: BufRead>(session: &mut Session<'_, R>, args: &[&str]) -> anyhow::Result<()> {
    let amount = session.resolve(args.first().copied(), "Enter your budget: ", |_, answer| {
        answer.parse::<Money>().map_err(|_| "Please enter a numerical amount.".to_string())
    })?;

    if let Some(amount) = amount {
        session.customer.set_budget(amount);
        OperationResult::ok(format!("Your new budget is {amount}")).render(session.mode);
    }
    Ok(())
}
