// AMM Math Helpers
//
// Pure curve arithmetic shared by the instruction handlers. Every
// multiply-then-divide runs in u128 and every narrowing back to u64 is
// checked; any failure surfaces as MathOverflow and aborts the instruction.

use anchor_lang::prelude::*;

use crate::errors::AmmError;

// Integer square root via the Babylonian method. Rounds down.
pub fn integer_sqrt(value: u128) -> u128 {
    if value == 0 {
        return 0;
    }
    let mut x = value;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + value / x) / 2;
    }
    x
}

// LP issuance for the very first deposit: floor(sqrt(amount_a * amount_b)).
// The depositor's ratio sets the pool's initial exchange rate.
pub fn first_deposit_lp(amount_a: u64, amount_b: u64) -> Result<u64> {
    let product = (amount_a as u128)
        .checked_mul(amount_b as u128)
        .ok_or(AmmError::MathOverflow)?;

    u64::try_from(integer_sqrt(product)).map_err(|_| AmmError::MathOverflow.into())
}

// LP issuance for a deposit into a live pool: proportional to the limiting
// side, min(amount_a * total_lp / reserve_a, amount_b * total_lp / reserve_b).
// Excess on the other side is absorbed by the vault with no extra issuance.
pub fn proportional_deposit_lp(
    amount_a: u64,
    amount_b: u64,
    reserve_a: u64,
    reserve_b: u64,
    total_lp: u64,
) -> Result<u64> {
    let lp_from_a = (amount_a as u128)
        .checked_mul(total_lp as u128)
        .ok_or(AmmError::MathOverflow)?
        .checked_div(reserve_a as u128)
        .ok_or(AmmError::MathOverflow)?;

    let lp_from_b = (amount_b as u128)
        .checked_mul(total_lp as u128)
        .ok_or(AmmError::MathOverflow)?
        .checked_div(reserve_b as u128)
        .ok_or(AmmError::MathOverflow)?;

    u64::try_from(lp_from_a.min(lp_from_b)).map_err(|_| AmmError::MathOverflow.into())
}

// Proportional share of both reserves for burning `lp_burn` LP tokens.
pub fn withdrawal_amounts(
    lp_burn: u64,
    reserve_a: u64,
    reserve_b: u64,
    total_lp: u64,
) -> Result<(u64, u64)> {
    let amount_a = (lp_burn as u128)
        .checked_mul(reserve_a as u128)
        .ok_or(AmmError::MathOverflow)?
        .checked_div(total_lp as u128)
        .ok_or(AmmError::MathOverflow)?;

    let amount_b = (lp_burn as u128)
        .checked_mul(reserve_b as u128)
        .ok_or(AmmError::MathOverflow)?
        .checked_div(total_lp as u128)
        .ok_or(AmmError::MathOverflow)?;

    Ok((
        u64::try_from(amount_a).map_err(|_| AmmError::MathOverflow)?,
        u64::try_from(amount_b).map_err(|_| AmmError::MathOverflow)?,
    ))
}

// Constant-product swap output:
// floor(reserve_out * amount_in / (reserve_in + amount_in)).
// Flooring guarantees the reserve product never decreases.
pub fn swap_output(amount_in: u64, reserve_in: u64, reserve_out: u64) -> Result<u64> {
    let new_reserve_in = (reserve_in as u128)
        .checked_add(amount_in as u128)
        .ok_or(AmmError::MathOverflow)?;

    let amount_out = (reserve_out as u128)
        .checked_mul(amount_in as u128)
        .ok_or(AmmError::MathOverflow)?
        .checked_div(new_reserve_in)
        .ok_or(AmmError::MathOverflow)?;

    u64::try_from(amount_out).map_err(|_| AmmError::MathOverflow.into())
}
