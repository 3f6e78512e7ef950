//! # Autofilter Architecture
//!
//! Autofilter manages **named, reusable row filters** over the tabular layers of
//! a host project. A filter is a list of attribute names plus one condition
//! fragment; applying a selection of filters rewrites each layer's subset
//! expression with machine-generated, tagged clauses, and retracting them
//! restores whatever the user had written before.
//!
//! Like the rest of the code base, this is a library first. The `autofilter`
//! binary is one thin client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, prints messages, sets up logging       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs): FilterManager                          │
//! │  - Thin facade, one method per user operation               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - save, delete, apply, clear, load, list, fields, status   │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                │                 │
//!                 ▼                ▼                 ▼
//!        store.rs           catalog.rs         composer.rs
//!        FilterStore        FieldCatalog       strip / compose
//!                 │                │
//!                 ▼                ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host Project (project/)                                    │
//! │  - Project trait: variable bag + layers                     │
//! │  - FileProject (JSON document), InMemoryProject (testing)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tagged Fragments
//!
//! A layer filtered by `f1` and `f2` on top of the user's own `x = 1`:
//!
//! ```text
//! x = 1
//! -- AUTOFILTER: f1
//! AND ( "a" > 5 )
//! -- AUTOFILTER: f2
//! AND ( "b" IS NULL OR "c" IS NULL )
//! ```
//!
//! Applying a selection always strips every existing fragment first, so the
//! active set on a layer is exactly the latest selection.
//!
//! ## Example
//!
//! ```
//! use autofilter::api::FilterManager;
//! use autofilter::config::AutofilterConfig;
//! use autofilter::model::Layer;
//! use autofilter::project::memory::InMemoryProject;
//!
//! let project = InMemoryProject::new()
//!     .with_layer(Layer::new("roads", vec!["a".into(), "b".into()]).with_subset_string("x = 1"));
//! let mut api = FilterManager::new(project, AutofilterConfig::default());
//!
//! api.save_filter("f1", vec!["a".into(), "c".into()], "> 5")?;
//! api.apply_filters(&["f1"])?;
//! assert_eq!(
//!     api.project().subset_string("roads"),
//!     Some("x = 1\n-- AUTOFILTER: f1\nAND ( \"a\" > 5 )")
//! );
//! # Ok::<(), autofilter::error::AutofilterError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The `FilterManager` facade
//! - [`commands`]: One module per operation
//! - [`store`]: Filter definitions in the project variable bag
//! - [`catalog`]: Filterable fields across layers
//! - [`composer`]: Subset expression rewriting
//! - [`project`]: Host project abstraction and implementations
//! - [`model`]: `FilterDefinition`, `FieldSelection`, `Layer`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod composer;
pub mod config;
pub mod error;
pub mod model;
pub mod project;
pub mod store;
