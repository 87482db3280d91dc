//! Marquee - incremental search over an in-memory media catalog.
//!
//! Marquee wires a debounced input stream to a substring match engine, with
//! persisted recent searches and keyboard-driven selection. Rendering and
//! storage stay behind seams, so hosts decide how rows are drawn and where
//! history lives.
//!
//! # Architecture
//!
//! The library is organized into these main modules:
//!
//! - [`config`] - Configuration loading and management
//! - [`catalog`] - Item model, catalog snapshots, provider seam
//! - [`search`] - The substring match pass and result sets
//! - [`debounce`] - Cancellable delayed tasks (query settle, focus grace)
//! - [`nav`] - Highlight selection state machine
//! - [`recent`] - Persisted recent-search history
//! - [`store`] - Key-value persistence seam
//! - [`view`] - Renderer seam
//! - [`session`] - The controller tying everything together
//!
//! # Example
//!
//! ```ignore
//! use marquee::{Config, MemoryStore, NullView, SearchSession, StaticCatalog};
//! use std::time::{Duration, Instant};
//!
//! let catalog = StaticCatalog::new(marquee::sample::sample_catalog());
//! let mut session = SearchSession::new(
//!     Config::default(),
//!     &catalog,
//!     Box::new(MemoryStore::new()),
//!     Box::new(NullView),
//! );
//!
//! let now = Instant::now();
//! session.on_query_changed("witcher", now);
//! session.tick(now + Duration::from_millis(300));
//! assert!(session.is_visible());
//! ```

// Public modules
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod nav;
pub mod recent;
pub mod sample;
pub mod search;
pub mod session;
pub mod store;
pub mod view;

// Internal modules
mod error;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, CatalogItem, CatalogProvider, StaticCatalog};
pub use config::Config;
pub use error::{MarqueeError, MarqueeResult};
pub use nav::Direction;
pub use search::{ResultSet, SearchQuery};
pub use session::{Displayed, SearchSession};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
pub use view::{NullView, SearchView};
