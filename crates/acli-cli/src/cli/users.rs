//! The `users` command group.

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    /// Create a user
    Create {
        /// Name of the user to create
        user_name: String,
    },
    /// Delete a user
    Delete {
        /// Name of the user to delete
        user_name: String,
    },
}

pub fn run(command: UsersCommand) -> Result<(), String> {
    match command {
        UsersCommand::Create { user_name } => println!("Creating user: {}", user_name),
        UsersCommand::Delete { user_name } => println!("Deleting user: {}", user_name),
    }
    Ok(())
}
