//! # Enacted Legislation Tracker backend
//!
//! Turns a flat spreadsheet of enacted bills into faceted search results and
//! chart-ready views.
//!
//! ## Features
//!
//! - **Normalization**: Split multi-author bills into one record per author, parse
//!   dates, strip embedded URLs from titles
//! - **Filtering**: Facet index (authors, policy areas, enactment methods, date
//!   bounds) and one filter engine for basic search, advanced filtering and views
//! - **Views**: Scatter, relationship graph, flow diagram, timeline and yearly counts
//! - **Dataset snapshot**: Lazily loaded, explicitly reloadable, checksummed
//! - **HTTP API**: RESTful endpoints over the views
//!
//! ## Architecture
//!
//! - [`api`]: Data Transfer Objects (DTOs) for views and API responses
//! - [`models`]: Raw rows, records and facet selections
//! - [`services`]: Normalizer, facets, filter engine and view builders
//! - [`db`]: Record sources, configuration and the dataset store
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`routes`]: Route-specific data types and paths

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
