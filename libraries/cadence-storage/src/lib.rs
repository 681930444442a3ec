//! Cadence Storage
//!
//! Persistence for Cadence: key-value store backends and the user playlist
//! library built on top of them.
//!
//! # Example
//!
//! ```rust,no_run
//! use cadence_storage::{FileStore, PlaylistLibrary};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = FileStore::open("/tmp/cadence")?;
//! let library = PlaylistLibrary::open(Box::new(store));
//!
//! for playlist in library.list_all() {
//!     println!("{} ({} songs)", playlist.name, playlist.songs.len());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod error;
mod playlists;
mod store;

pub use error::{Result, StorageError};
pub use playlists::{PlaylistLibrary, PLAYLISTS_KEY};
pub use store::{FileStore, MemoryStore};
