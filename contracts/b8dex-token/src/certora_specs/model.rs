// ============================================================================
// MODEL AND STATE SNAPSHOTS
// ============================================================================

use soroban_sdk::{Address, Env, String};

use crate::B8dexToken;

/// Skolem decimals, kept small enough for the supply to scale
static mut SKOLEM_DECIMALS: u32 = 0;

/// Skolem supply in whole tokens
static mut SKOLEM_MAX_SUPPLY: i128 = 0;

/// Pick an arbitrary but valid token shape
pub fn init() {
    use cvlr::asserts::cvlr_assume;
    use cvlr::nondet::nondet;

    unsafe {
        SKOLEM_DECIMALS = nondet();
        SKOLEM_MAX_SUPPLY = nondet();
        cvlr_assume!(SKOLEM_DECIMALS <= 18);
        cvlr_assume!(SKOLEM_MAX_SUPPLY > 0 && SKOLEM_MAX_SUPPLY <= 1_000_000_000_000);
    }
}

/// Construct the token with the Skolem shape and `owner` as deployer
pub fn construct(env: &Env, owner: &Address) {
    init();
    let (decimals, max_supply) = unsafe { (SKOLEM_DECIMALS, SKOLEM_MAX_SUPPLY) };
    B8dexToken::__constructor(
        env.clone(),
        owner.clone(),
        String::from_str(env, "B8DEX"),
        String::from_str(env, "B8T"),
        decimals,
        max_supply,
    );
}

/// Supply and two balances, for before/after comparisons
#[derive(Clone)]
pub struct TokenSnapshot {
    pub total_supply: i128,
    pub first: i128,
    pub second: i128,
    pub running: bool,
}

impl TokenSnapshot {
    pub fn capture(env: &Env, first: &Address, second: &Address) -> Self {
        Self {
            total_supply: B8dexToken::total_supply(env.clone()),
            first: B8dexToken::balance(env.clone(), first.clone()),
            second: B8dexToken::balance(env.clone(), second.clone()),
            running: B8dexToken::is_running(env.clone()),
        }
    }
}
