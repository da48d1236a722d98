//! DriveSentry Core - Domain logic and business rules
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain entities** - `RemoteItem`, `SeenSet`, identifier newtypes
//! - **Delta computation** - pure filtering and chronological ordering of
//!   unseen items
//! - **Use cases** - `ReconcileUseCase`, the per-run driver that loads the
//!   seen set, walks the watched folders, delivers notifications, and
//!   guarantees the seen set is persisted exactly once per run
//! - **Port definitions** - Traits for adapters: `IFolderLister`,
//!   `INotifier`, `ISeenSetStore`
//!
//! # Architecture
//!
//! This crate follows the hexagonal (ports & adapters) architecture pattern.
//! The domain module contains pure logic with no I/O. Ports define trait
//! interfaces that adapter crates implement. Use cases orchestrate domain
//! entities through port interfaces.

pub mod config;
pub mod domain;
pub mod ports;
pub mod usecases;
