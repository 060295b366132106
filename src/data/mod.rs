//! Database repository layer.
//!
//! Repository structs handle database operations for each domain in the bot.
//! Repositories use SeaORM entity models internally and return domain models
//! to maintain separation between the data layer and the command handlers.

pub mod recruitment;
pub mod settings;

#[cfg(test)]
mod test;
