// Constant-Product AMM Program
//
// One pool per unordered token-mint pair. Pool, LP mint, and both vaults are
// PDAs derived from the pair, so any caller can recompute the addresses
// offline.
//
// Instructions:
// - initialize_pool: create pool, vaults, and LP mint for a pair
// - add_liquidity: deposit both tokens, receive LP tokens
// - remove_liquidity: burn LP tokens, receive proportional reserves
// - swap: exchange tokens along x * y = k

#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod helpers;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("3i6Xy9tVvVLB5LdYeAe3irwTTdzrHRNw7MC4qijcNVBW");

#[program]
pub mod cp_amm {
    use super::*;

    pub fn initialize_pool(ctx: Context<InitializePool>) -> Result<()> {
        ctx.accounts.initialize_pool(&ctx.bumps)
    }

    pub fn add_liquidity(ctx: Context<AddLiquidity>, amount_a: u64, amount_b: u64) -> Result<()> {
        ctx.accounts.add_liquidity(amount_a, amount_b)
    }

    pub fn remove_liquidity(ctx: Context<RemoveLiquidity>, lp_burn: u64) -> Result<()> {
        ctx.accounts.remove_liquidity(lp_burn)
    }

    pub fn swap(ctx: Context<Swap>, amount_in: u64, min_amount_out: u64) -> Result<()> {
        ctx.accounts.swap(amount_in, min_amount_out)
    }
}
