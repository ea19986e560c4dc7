/*!
 * Core Utilities
 * Helpers shared across the asset table and the VFS layer
 */

pub mod serde;
