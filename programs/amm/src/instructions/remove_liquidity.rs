// Remove Liquidity Instruction
//
// Burns LP tokens and pays out the proportional share of both reserves.
// Withdrawal never moves the price: the reserve ratio is preserved up to
// flooring.
//
// Account order is part of the deployed interface. Do not reorder.

use anchor_lang::prelude::*;
use anchor_spl::token::{burn, transfer, Burn, Mint, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::AmmError, helpers, state::Pool};

#[derive(Accounts)]
pub struct RemoveLiquidity<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        has_one = token_a_vault,
        has_one = token_b_vault,
        has_one = lp_mint,
        seeds = [SEED_POOL, lp_mint.key().as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        mut,
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

    pub token_a_mint: Box<Account<'info, Mint>>,
    pub token_b_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        constraint = user_token_a.mint == token_a_mint.key() @ AmmError::InvalidTokenMint,
        constraint = user_token_a.owner == user.key() @ AmmError::InvalidTokenOwner,
    )]
    pub user_token_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = user_token_b.mint == token_b_mint.key() @ AmmError::InvalidTokenMint,
        constraint = user_token_b.owner == user.key() @ AmmError::InvalidTokenOwner,
    )]
    pub user_token_b: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = user_lp_token.mint == lp_mint.key() @ AmmError::InvalidTokenMint,
        constraint = user_lp_token.owner == user.key() @ AmmError::InvalidTokenOwner,
    )]
    pub user_lp_token: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> RemoveLiquidity<'info> {
    pub fn remove_liquidity(&mut self, lp_burn: u64) -> Result<()> {
        require!(lp_burn > 0, AmmError::InvalidAmount);
        require!(lp_burn <= self.pool.total_lp, AmmError::InvalidAmount);

        let (amount_a, amount_b) = helpers::withdrawal_amounts(
            lp_burn,
            self.token_a_vault.amount,
            self.token_b_vault.amount,
            self.pool.total_lp,
        )?;

        // The token program enforces that the user actually holds lp_burn.
        self.burn_lp(lp_burn)?;

        self.transfer_from_vault(&self.token_a_vault, &self.user_token_a, amount_a)?;
        self.transfer_from_vault(&self.token_b_vault, &self.user_token_b, amount_b)?;

        self.pool.total_lp = self
            .pool
            .total_lp
            .checked_sub(lp_burn)
            .ok_or(AmmError::MathOverflow)?;

        msg!("Withdrew: {} LP -> {} A, {} B", lp_burn, amount_a, amount_b);

        Ok(())
    }

    fn burn_lp(&self, amount: u64) -> Result<()> {
        burn(
            CpiContext::new(
                self.token_program.to_account_info(),
                Burn {
                    mint: self.lp_mint.to_account_info(),
                    from: self.user_lp_token.to_account_info(),
                    authority: self.user.to_account_info(),
                },
            ),
            amount,
        )
    }

    fn transfer_from_vault(
        &self,
        from: &Account<'info, TokenAccount>,
        to: &Account<'info, TokenAccount>,
        amount: u64,
    ) -> Result<()> {
        let lp_mint_key = self.lp_mint.key();
        let pool_seeds = &[SEED_POOL, lp_mint_key.as_ref(), &[self.pool.bump]];
        let signer_seeds = &[&pool_seeds[..]];

        transfer(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: from.to_account_info(),
                    to: to.to_account_info(),
                    authority: self.pool.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )
    }
}
