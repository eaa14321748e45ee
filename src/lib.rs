//! # Listing Editor
//!
//! > **The edit-and-resubmit workflow of a marketplace listing.**
//!
//! This crate implements the editor page of an existing listing as a headless
//! component: it loads the product and its photos, tracks the user's edits,
//! and writes them back through an ordered sequence of remote calls. Rendering
//! is left to the caller; everything else lives here.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One session, one mailbox
//! Every open editor is an actor task that owns its form. UI events, the load
//! sequence and the submit sequence all go through the same mailbox and run one
//! after the other. A submission that is awaiting the network therefore blocks
//! further edits instead of racing them, and the form needs no locks.
//!
//! ### Non-atomic writes, surfaced honestly
//! The remote store has no transactions. The submit sequence runs
//! update → upload → delete → insert and stops at the first failure. Each
//! failing step is its own [`SubmitError`](sequencer::SubmitError) variant, so
//! callers know exactly what was already written.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each layer has its own error enum: [`StoreError`](store::StoreError),
//! [`ValidationError`](editor::ValidationError),
//! [`SubmitError`](sequencer::SubmitError),
//! [`SessionError`](session::SessionError) and
//! [`ConfigError`](lifecycle::ConfigError). `#[from]` nests them as they
//! travel up.
//!
//! ### 2. Async Context Injection
//! Stores, dialogs and routing are bundled into an
//! [`EditorContext`](collaborators::EditorContext) that is passed to
//! `run(ctx)` when the session starts, not when it is built.
//!
//! ### 3. Observability
//! `tracing` everywhere, with `product_id` on every event. See
//! [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The State ([`editor`])
//! Pure, synchronous state of one page.
//! - **Key items**: [`ProductFormState`](editor::ProductFormState),
//!   [`ImageSet`](editor::ImageSet), [`CarouselWindow`](editor::CarouselWindow),
//!   [`GeolocationState`](editor::GeolocationState).
//!
//! ### 2. The Sequences ([`sequencer`])
//! The two async workflows that talk to the stores.
//! - **Key items**: [`LoadSequencer`](sequencer::LoadSequencer),
//!   [`SubmitSequencer`](sequencer::SubmitSequencer).
//!
//! ### 3. The Session ([`session`])
//! The actor that serialises everything, and its client.
//! - **Key items**: [`EditorActor`](session::EditorActor),
//!   [`EditorClient`](session::EditorClient).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! Mounting and unmounting a page, configuration and tracing.
//! - **Key items**: [`EditorSystem`](lifecycle::EditorSystem),
//!   [`EditorConfig`](lifecycle::EditorConfig).
//!
//! ### 5. The Boundaries ([`store`], [`collaborators`], [`model`])
//! Remote store contracts with in-memory and mock implementations, the dialog
//! and routing traits, and the plain data types.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo session against the in-memory stores
//! RUST_LOG=info cargo run
//! ```
//!
//! ## 🧪 Testing
//!
//! See [`store::mock`] for expectation-driven stores that script each remote
//! call, and [`collaborators`] for the recording prompt and navigator.

pub mod collaborators;
pub mod editor;
pub mod lifecycle;
pub mod model;
pub mod sequencer;
pub mod session;
pub mod store;
