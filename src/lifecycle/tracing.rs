//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the subscriber used by the demo binary. Libraries
//! embedding the editor install their own; the crate itself only emits events.
//!
//! ## Configuration
//!
//! Levels come from `RUST_LOG`. The compact format hides the module prefix
//! (`with_target(false)`) and prints spans inline, so every line of a
//! submission carries the `submit{product_id=..}` span it ran in.
//!
//! ```bash
//! RUST_LOG=info cargo run     # milestones only
//! RUST_LOG=debug cargo run    # payloads, every UI event, carousel moves
//! RUST_LOG=listing_editor::sequencer=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Session lifecycle**: start, local-state discard, shutdown
//! - **Load**: one event per fetch, with the image count
//! - **Submit**: validation rejects, the confirm answer, each completed step,
//!   and the step that aborted
//!
//! ## Submission Trace
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO submit:submit{product_id=42}: Product record updated
//! INFO submit:submit{product_id=42}: Images uploaded count=1
//! INFO submit:submit{product_id=42}: Image rows saved count=3
//! INFO submit:submit{product_id=42}: Submission complete
//! INFO Submit finished product_id=42 outcome=Completed
//! ```
//!
//! **With `RUST_LOG=debug`** the patch is logged once when the submission
//! starts:
//!
//! ```text
//! DEBUG submit:submit{product_id=42}: submit called patch=ProductPatch { title: "Book", .. } images=3
//! ```
//!
//! A failed step is logged at `error` with the failing step in the message and
//! the store error as a field.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // product_id fields identify the session
        .compact()
        .init();
}
