// handlers/mod.rs - 3-tier handler layout
//
// Public (no auth) → Protected (credential cookie) → Elevated (admin role)
pub mod public;    // Tier 1: No authentication required
pub mod protected; // Tier 2: Verified credential cookie required (/api/*)
pub mod elevated;  // Tier 3: Verified credential with admin role (/api/admin/*)

pub use public::*;
pub use protected::*;
pub use elevated::*;
