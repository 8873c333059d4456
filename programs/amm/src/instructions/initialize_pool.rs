// Initialize Pool Instruction
//
// Creates the Pool record, both vaults, and the LP mint for a token pair.
// All four addresses are PDAs, so a pair maps to exactly one pool and
// re-initialization fails on the account-create collision.
//
// Account order is part of the deployed interface. Do not reorder.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::AmmError, state::Pool};

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + Pool::INIT_SPACE,
        seeds = [SEED_POOL, lp_mint.key().as_ref()],
        bump
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        init,
        payer = payer,
        seeds = [SEED_VAULT_A, lp_mint.key().as_ref()],
        bump,
        token::mint = token_a_mint,
        token::authority = pool,
    )]
    pub token_a_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = payer,
        seeds = [SEED_VAULT_B, lp_mint.key().as_ref()],
        bump,
        token::mint = token_b_mint,
        token::authority = pool,
    )]
    pub token_b_vault: Box<Account<'info, TokenAccount>>,

    pub token_a_mint: Box<Account<'info, Mint>>,
    pub token_b_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = payer,
        seeds = [SEED_LP_MINT, token_a_mint.key().as_ref(), token_b_mint.key().as_ref()],
        bump,
        mint::decimals = LP_MINT_DECIMALS,
        mint::authority = pool,
    )]
    pub lp_mint: Box<Account<'info, Mint>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializePool<'info> {
    pub fn initialize_pool(&mut self, bumps: &InitializePoolBumps) -> Result<()> {
        // One pool per unordered pair: mints must arrive in canonical
        // (byte-lexicographic) order. Strict inequality also rejects a
        // pool over a single mint.
        require!(
            self.token_a_mint.key() < self.token_b_mint.key(),
            AmmError::InvalidTokenMint
        );

        self.pool.set_inner(Pool {
            token_a_vault: self.token_a_vault.key(),
            token_b_vault: self.token_b_vault.key(),
            lp_mint: self.lp_mint.key(),
            bump: bumps.pool,
            total_lp: 0,
            bump_lp_mint: bumps.lp_mint,
        });

        msg!(
            "Pool initialized: {} / {}",
            self.token_a_mint.key(),
            self.token_b_mint.key()
        );

        Ok(())
    }
}
