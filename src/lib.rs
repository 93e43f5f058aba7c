//! Taskboard: validated task records for todo tracking.
//!
//! A [`task::domain::Task`] carries an identifier, a title, an optional
//! description and one of three statuses. The record validates its own shape;
//! identity allocation and status transition rules are left to collaborators
//! expressed as ports.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure data validation with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external collaborators
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task records, storage ports and the task service

pub mod task;
