#![forbid(unsafe_code)]

//! Core: aspect-ratio primitives and item storage for justified fluid layouts.
//!
//! # Role in fgrid
//! `fgrid-core` is the data layer. It owns the intrinsic dimensions supplied
//! by the caller and the normalized widths derived from them, which the
//! solver (`fgrid-layout`) consumes.
//!
//! # Primary responsibilities
//! - **Dimensions**: a plain width/height pair in pixels with aspect-ratio
//!   helpers.
//! - **AspectItem**: one layout unit, carrying its intrinsic size and the
//!   width it would have at the nominal row height.
//! - **ItemStore**: the ordered item sequence for one layout context, built
//!   with a permissive skip of unusable source data.
//!
//! # How it fits in the system
//! The solver never reads raw dimensions; it works entirely on the
//! normalized widths this crate computes. Anything that extracts raw
//! `{width, height}` pairs from an external source (markup, a manifest, a
//! database) sits above both crates and is out of scope here.

pub mod geometry;
pub mod item;

pub use geometry::Dimensions;
pub use item::{AspectItem, ItemStore};
