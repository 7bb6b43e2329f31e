// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Formal rules for the B8DEX token: supply accounting, the owner guard
// and the pause switch.
//
// STRUCTURE:
//
// - model.rs         : Skolem holder, construction helper, state snapshots
// - supply_specs.rs  : Transfers conserve supply, mint and burn move it
// - access_specs.rs  : Owner-only entry points and the running gate
//
// USAGE:
// - Unit tests: cargo test -p b8dex-token
// - Certora build: cargo build --features certora -p b8dex-token
// - Verification: certoraSorobanProver b8dex_token.conf
//
// ============================================================================

#[cfg(feature = "certora")]
pub mod model;

pub mod access_specs;
pub mod supply_specs;
