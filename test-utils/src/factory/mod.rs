//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let application = factory::recruitment_application::create_application(&db).await?;
//!
//!     // Toggle the recruitment gate
//!     factory::bot_setting::create_setting(&db, "recruitment_active", "true").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let application = factory::recruitment_application::ApplicationFactory::new(&db)
//!     .discord_user_id("987654321")
//!     .ign("CustomIgn")
//!     .status("accepted")
//!     .build()
//!     .await?;
//! ```

pub mod bot_setting;
pub mod helpers;
pub mod recruitment_application;

// Re-export commonly used factory functions for concise usage
pub use bot_setting::create_setting;
pub use recruitment_application::create_application;
