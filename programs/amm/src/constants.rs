// AMM Program Constants

pub const SEED_POOL: &[u8] = b"pool";
pub const SEED_LP_MINT: &[u8] = b"lp_mint";
pub const SEED_VAULT_A: &[u8] = b"vault_a";
pub const SEED_VAULT_B: &[u8] = b"vault_b";

pub const LP_MINT_DECIMALS: u8 = 9;
pub const ANCHOR_DISCRIMINATOR: usize = 8;
