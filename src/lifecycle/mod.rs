//! # Session Lifecycle
//!
//! Opening and closing an editor page.
//!
//! ## Activation
//!
//! [`EditorSystem::activate`] is the page mount. It creates the session actor,
//! injects the [`EditorContext`](crate::collaborators::EditorContext) through
//! `run(ctx)`, spawns it and runs the load sequence exactly once before handing
//! back the client:
//!
//! ```rust,ignore
//! let system = EditorSystem::activate(ProductId::from("42"), ctx).await?;
//! if !system.load_report.is_complete() {
//!     warn!("Editing a partly loaded listing");
//! }
//! system.client.set_price("12000").await?;
//! system.client.submit().await?;
//! system.shutdown().await?;
//! ```
//!
//! ## Shutdown
//!
//! [`EditorSystem::shutdown`] is the page unmount:
//!
//! 1. **Close** - the session discards all local state, releases previews and
//!    leaves its loop
//! 2. **Drop the client** - the mailbox receiver is already gone
//! 3. **Await the task** - a panicked session surfaces as an error
//!
//! Clones of the client still held elsewhere do not delay shutdown. Their
//! requests fail with `SessionError::Closed` afterwards.
//!
//! ## Configuration & Tracing
//!
//! [`EditorConfig`] holds the bucket, upload folder, landing route, mailbox
//! size and the failed-load policy. [`setup_tracing`] installs the log
//! subscriber; see the [`tracing`] module.

pub mod config;
pub mod editor_system;
pub mod tracing;

pub use config::*;
pub use editor_system::*;
pub use tracing::*;
