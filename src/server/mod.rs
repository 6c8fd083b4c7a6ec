//! Bot backend: gateway handlers, persisted state and the status API.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Bot Layer** (`bot/`) - Discord event handlers, slash commands and button presses
//! - **Controller Layer** (`controller/`) - HTTP request handlers of the status API
//! - **Service Layer** (`service/`) - Session, suggestion, request and status logic plus card rendering
//! - **Data Layer** (`data/`) - JSON store and the repositories built on it
//! - **Model Layer** (`model/`) - Domain models, interaction ids and operation parameters
//! - **Error Layer** (`error/`) - Application error types, user notices and HTTP response mapping
//! - **Middleware** (`middleware/`) - Capability gate for Discord actors and API key guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (config, store, HTTP client)
//! - **Startup** (`startup`) - Store and HTTP client initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - Cron jobs (presence rotation)
//!
//! # Interaction Flow
//!
//! 1. **Bot** receives a slash command or button press and decodes it
//! 2. **Middleware** checks the actor's capability before any state is touched
//! 3. **Service** applies the transition through the **Data** layer
//! 4. **Bot** renders the new state, edits or posts messages and acknowledges the actor

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
