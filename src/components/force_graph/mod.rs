//! Force-directed neighborhood graph component.
//!
//! Renders a [`GraphModel`](crate::neighborhood::GraphModel) on an HTML canvas with:
//! - Physics-based node positioning via force simulation
//! - Rotated, length-fitted relation labels on every edge
//! - Pan, zoom and node dragging interactions
//! - Dimming of nodes that miss the active search term
//! - Automatic sizing to the parent container
//!
//! # Example
//!
//! ```ignore
//! use kn_explorer::components::force_graph::ForceGraphCanvas;
//!
//! let model = Memo::new(move |_| build(&extract(&triples, Some("Heart"), 2), ""));
//! view! { <ForceGraphCanvas data=model /> }
//! ```

mod component;
pub mod labels;
mod render;
pub mod scale;
mod state;
pub mod theme;
pub mod viewport;

pub use component::ForceGraphCanvas;
