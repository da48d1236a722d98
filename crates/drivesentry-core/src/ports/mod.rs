//! Port definitions (trait interfaces for adapters)
//!
//! Ports keep the use-case layer independent of transport and storage
//! details. Adapter crates implement these traits:
//! - `drivesentry-drive` implements [`IFolderLister`]
//! - `drivesentry-notify` implements [`INotifier`]
//! - `drivesentry-store` implements [`ISeenSetStore`]

pub mod folder_lister;
pub mod notifier;
pub mod seen_store;

pub use folder_lister::IFolderLister;
pub use notifier::INotifier;
pub use seen_store::ISeenSetStore;
