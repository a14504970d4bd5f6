// ── Showroom Atoms Layer ───────────────────────────────────────────────────
// Pure data: types, catalogs, and error definitions — zero side effects.
// Dependency rule: atoms may only depend on std and external pure crates.
// Nothing here may import from engine/, commands/, or lib.rs.

pub mod constants;
pub mod error;
pub mod types;
