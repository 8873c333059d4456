// Swap Instruction
//
// Constant-product swap between the two vaults. Direction is implicit in the
// mint of the user's input token account; the output account must be for the
// other mint. LP supply is untouched.
//
// Account order is part of the deployed interface. Do not reorder.

use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Mint, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::AmmError, helpers, state::Pool};

#[derive(Accounts)]
pub struct Swap<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        has_one = token_a_vault,
        has_one = token_b_vault,
        has_one = lp_mint,
        seeds = [SEED_POOL, lp_mint.key().as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        seeds = [SEED_LP_MINT, token_a_mint.key().as_ref(), token_b_mint.key().as_ref()],
        bump = pool.bump_lp_mint,
    )]
    pub lp_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [SEED_VAULT_A, lp_mint.key().as_ref()],
        bump,
    )]
    pub token_a_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [SEED_VAULT_B, lp_mint.key().as_ref()],
        bump,
    )]
    pub token_b_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = (user_token_in.mint == token_a_mint.key()
            || user_token_in.mint == token_b_mint.key()) @ AmmError::InvalidTokenMint,
        constraint = user_token_in.owner == user.key() @ AmmError::InvalidTokenOwner,
    )]
    pub user_token_in: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = (user_token_out.mint == token_a_mint.key()
            || user_token_out.mint == token_b_mint.key()) @ AmmError::InvalidTokenMint,
        constraint = user_token_out.owner == user.key() @ AmmError::InvalidTokenOwner,
        constraint = user_token_in.mint != user_token_out.mint @ AmmError::InvalidSwapDirection,
    )]
    pub user_token_out: Box<Account<'info, TokenAccount>>,

    pub token_a_mint: Box<Account<'info, Mint>>,
    pub token_b_mint: Box<Account<'info, Mint>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Swap<'info> {
    pub fn swap(&mut self, amount_in: u64, min_amount_out: u64) -> Result<()> {
        require!(amount_in > 0, AmmError::InvalidAmount);

        let a_to_b = self.user_token_in.mint == self.token_a_vault.mint;
        let (reserve_in, reserve_out) = if a_to_b {
            (self.token_a_vault.amount, self.token_b_vault.amount)
        } else {
            (self.token_b_vault.amount, self.token_a_vault.amount)
        };

        let amount_out = helpers::swap_output(amount_in, reserve_in, reserve_out)?;
        require!(amount_out >= min_amount_out, AmmError::SlippageExceeded);

        let (vault_in, vault_out) = if a_to_b {
            (&self.token_a_vault, &self.token_b_vault)
        } else {
            (&self.token_b_vault, &self.token_a_vault)
        };

        // Input leg: user signs.
        transfer(
            CpiContext::new(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.user_token_in.to_account_info(),
                    to: vault_in.to_account_info(),
                    authority: self.user.to_account_info(),
                },
            ),
            amount_in,
        )?;

        // Output leg: pool PDA signs for its vault.
        let lp_mint_key = self.lp_mint.key();
        let pool_seeds = &[SEED_POOL, lp_mint_key.as_ref(), &[self.pool.bump]];
        let signer_seeds = &[&pool_seeds[..]];

        transfer(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: vault_out.to_account_info(),
                    to: self.user_token_out.to_account_info(),
                    authority: self.pool.to_account_info(),
                },
                signer_seeds,
            ),
            amount_out,
        )?;

        msg!("Swapped: {} in -> {} out", amount_in, amount_out);

        Ok(())
    }
}
