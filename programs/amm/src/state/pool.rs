// Pool State
//
// One Pool per unordered (mint_a, mint_b) pair. Reserve balances live in the
// two vault token accounts and are never cached here; `total_lp` mirrors the
// LP mint supply (minted minus burned).

use anchor_lang::prelude::*;

// Field order is wire-compatible with deployed pools. Do not reorder.
#[account]
#[derive(InitSpace, Debug)]
pub struct Pool {
    pub token_a_vault: Pubkey,
    pub token_b_vault: Pubkey,
    pub lp_mint: Pubkey,
    pub bump: u8,
    pub total_lp: u64,
    pub bump_lp_mint: u8,
}
