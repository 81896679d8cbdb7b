//! The `items` command group.

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ItemsCommand {
    /// Create an item
    Create {
        /// Item to create
        item: String,
    },
    /// Delete an item
    Delete {
        /// Item to delete
        item: String,
    },
    /// Sell an item
    Sell {
        /// Item to sell
        item: String,
    },
}

pub fn run(command: ItemsCommand) -> Result<(), String> {
    match command {
        ItemsCommand::Create { item } => println!("Creating item: {}", item),
        ItemsCommand::Delete { item } => println!("Deleting item: {}", item),
        ItemsCommand::Sell { item } => println!("Selling item: {}", item),
    }
    Ok(())
}
