// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! foodgalaxy: restaurant menu service with a public read API and a
//! session-gated admin panel, persisted as a JSON file on disk.

pub mod api;
pub mod config;
pub mod errors;
pub mod menu;
pub mod pages;
pub mod server;
pub mod session;
pub mod telemetry;
