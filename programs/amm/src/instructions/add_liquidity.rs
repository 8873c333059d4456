// Add Liquidity Instruction
//
// Deposits both tokens and mints LP against them. The first deposit sets the
// exchange rate via floor(sqrt(a * b)); later deposits mint against the
// limiting side and absorb any excess on the other side without issuance.
//
// Account order is part of the deployed interface. Do not reorder.

use anchor_lang::prelude::*;
use anchor_spl::token::{mint_to, transfer, Mint, MintTo, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::AmmError, helpers, state::Pool};

#[derive(Accounts)]
pub struct AddLiquidity<'info> {
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

impl<'info> AddLiquidity<'info> {
    pub fn add_liquidity(&mut self, amount_a: u64, amount_b: u64) -> Result<()> {
        require!(amount_a > 0 && amount_b > 0, AmmError::ZeroLiquidityInput);

        // Reserves are read live from the vaults, never from the Pool record.
        let lp_to_mint = if self.pool.total_lp == 0 {
            helpers::first_deposit_lp(amount_a, amount_b)?
        } else {
            helpers::proportional_deposit_lp(
                amount_a,
                amount_b,
                self.token_a_vault.amount,
                self.token_b_vault.amount,
                self.pool.total_lp,
            )?
        };
        require!(lp_to_mint > 0, AmmError::ZeroLpMint);

        // Both sides are deposited in full, including any excess beyond the
        // limiting-side computation.
        self.transfer_to_vault(&self.user_token_a, &self.token_a_vault, amount_a)?;
        self.transfer_to_vault(&self.user_token_b, &self.token_b_vault, amount_b)?;

        self.mint_lp(lp_to_mint)?;

        self.pool.total_lp = self
            .pool
            .total_lp
            .checked_add(lp_to_mint)
            .ok_or(AmmError::MathOverflow)?;

        msg!("Deposited: {} A, {} B -> {} LP", amount_a, amount_b, lp_to_mint);

        Ok(())
    }

    fn transfer_to_vault(
        &self,
        from: &Account<'info, TokenAccount>,
        to: &Account<'info, TokenAccount>,
        amount: u64,
    ) -> Result<()> {
        transfer(
            CpiContext::new(
                self.token_program.to_account_info(),
                Transfer {
                    from: from.to_account_info(),
                    to: to.to_account_info(),
                    authority: self.user.to_account_info(),
                },
            ),
            amount,
        )
    }

    fn mint_lp(&self, amount: u64) -> Result<()> {
        let lp_mint_key = self.lp_mint.key();
        let pool_seeds = &[SEED_POOL, lp_mint_key.as_ref(), &[self.pool.bump]];
        let signer_seeds = &[&pool_seeds[..]];

        mint_to(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                MintTo {
                    mint: self.lp_mint.to_account_info(),
                    to: self.user_lp_token.to_account_info(),
                    authority: self.pool.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )
    }
}
