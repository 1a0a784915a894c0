//! Help command - list available commands

use pcshop::output::{CommandHelp, HelpResult, OutputMode, Render};

const COMMANDS: [(&str, &str); 12] = [
    ("help", "Show this list of commands."),
    ("list", "List available parts and all their attributes in the specified category."),
    ("details", "Show details for the specified part ID."),
    ("compatibility", "Check compatibility between specified parts given their IDs."),
    ("build", "Build a custom computer with specified parts and add the computer to the shopping cart."),
    ("remove", "Remove specified part or computer from current shopping cart."),
    ("compatibility-build", "Check compatibility between all parts in current build configuration."),
    ("budget", "Set the customer's budget."),
    ("purchase", "Add the specified part to shopping cart."),
    ("cart", "View the current shopping cart."),
    ("checkout", "Complete the purchase and checkout."),
    ("exit", "Exit the program or current command."),
];

/// List all commands and what they do
pub fn help(mode: OutputMode) {
    let result = HelpResult {
        commands: COMMANDS
            .iter()
            .map(|&(name, description)| CommandHelp { name, description })
            .collect(),
    };
    result.render(mode);
}
