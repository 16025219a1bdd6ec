//! irscope Core Types and Definitions
//!
//! This crate provides the foundational types shared by the irscope parser,
//! layout, and coloring stages. It includes:
//!
//! - **Graph**: Parsed IR nodes and their edge references ([`graph`] module)
//! - **Colors**: RGB colors, complementary pairs, and distinct palette
//!   generation ([`color`] module)
//! - **Geometry**: Normalized layout coordinates ([`geometry::Point`])

pub mod color;
pub mod geometry;
pub mod graph;
