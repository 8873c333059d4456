// Test utilities for the AMM program

use litesvm::types::TransactionResult;
use litesvm::LiteSVM;
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};

// Program ID matching declare_id!
pub const AMM_PROGRAM_ID: Pubkey = Pubkey::new_from_array(cp_amm::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
use solana_system_interface::program::ID as SYSTEM_PROGRAM_ID;

// PDA seeds (must match the program's constants)
pub const SEED_POOL: &[u8] = b"pool";
pub const SEED_LP_MINT: &[u8] = b"lp_mint";
pub const SEED_VAULT_A: &[u8] = b"vault_a";
pub const SEED_VAULT_B: &[u8] = b"vault_b";

pub const DECIMALS: u8 = 9;

// Build Anchor instruction discriminator
// Formula: first 8 bytes of sha256("global:method_name")
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash_result = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash_result.to_bytes()[..8]);
    discriminator
}

// Setup LiteSVM with the AMM program
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let so_path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../target/deploy/cp_amm.so");
    svm.add_program_from_file(AMM_PROGRAM_ID, so_path)
        .expect("program artifact missing; run `cargo build-sbf` first");
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Canonical pair order: byte-lexicographic, smaller mint first
pub fn canonical_order(mint_x: Pubkey, mint_y: Pubkey) -> (Pubkey, Pubkey) {
    if mint_x < mint_y {
        (mint_x, mint_y)
    } else {
        (mint_y, mint_x)
    }
}

// Derive LP mint PDA from the canonical pair
pub fn derive_lp_mint_pda(mint_a: &Pubkey, mint_b: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[SEED_LP_MINT, mint_a.as_ref(), mint_b.as_ref()],
        &AMM_PROGRAM_ID,
    )
}

// Derive pool PDA from the LP mint
pub fn derive_pool_pda(lp_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_POOL, lp_mint.as_ref()], &AMM_PROGRAM_ID)
}

// Derive vault PDAs from the LP mint
pub fn derive_vault_a_pda(lp_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_VAULT_A, lp_mint.as_ref()], &AMM_PROGRAM_ID)
}

pub fn derive_vault_b_pda(lp_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_VAULT_B, lp_mint.as_ref()], &AMM_PROGRAM_ID)
}

// Build initialize_pool instruction
pub fn build_initialize_pool_ix(
    payer: &Pubkey,
    mint_a: &Pubkey,
    mint_b: &Pubkey,
) -> Instruction {
    let (lp_mint, _) = derive_lp_mint_pda(mint_a, mint_b);
    let (pool, _) = derive_pool_pda(&lp_mint);
    let (vault_a, _) = derive_vault_a_pda(&lp_mint);
    let (vault_b, _) = derive_vault_b_pda(&lp_mint);

    let data = anchor_discriminator("initialize_pool").to_vec();

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(pool, false),
            AccountMeta::new(vault_a, false),
            AccountMeta::new(vault_b, false),
            AccountMeta::new_readonly(*mint_a, false),
            AccountMeta::new_readonly(*mint_b, false),
            AccountMeta::new(lp_mint, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
        data,
    }
}

// Build add_liquidity instruction
#[allow(clippy::too_many_arguments)]
pub fn build_add_liquidity_ix(
    user: &Pubkey,
    mint_a: &Pubkey,
    mint_b: &Pubkey,
    user_token_a: &Pubkey,
    user_token_b: &Pubkey,
    user_lp_token: &Pubkey,
    amount_a: u64,
    amount_b: u64,
) -> Instruction {
    let (lp_mint, _) = derive_lp_mint_pda(mint_a, mint_b);
    let (pool, _) = derive_pool_pda(&lp_mint);
    let (vault_a, _) = derive_vault_a_pda(&lp_mint);
    let (vault_b, _) = derive_vault_b_pda(&lp_mint);

    let mut data = anchor_discriminator("add_liquidity").to_vec();
    data.extend_from_slice(&amount_a.to_le_bytes());
    data.extend_from_slice(&amount_b.to_le_bytes());

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*user, true),
            AccountMeta::new(pool, false),
            AccountMeta::new(lp_mint, false),
            AccountMeta::new(vault_a, false),
            AccountMeta::new(vault_b, false),
            AccountMeta::new_readonly(*mint_a, false),
            AccountMeta::new_readonly(*mint_b, false),
            AccountMeta::new(*user_token_a, false),
            AccountMeta::new(*user_token_b, false),
            AccountMeta::new(*user_lp_token, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

// Build remove_liquidity instruction
#[allow(clippy::too_many_arguments)]
pub fn build_remove_liquidity_ix(
    user: &Pubkey,
    mint_a: &Pubkey,
    mint_b: &Pubkey,
    user_token_a: &Pubkey,
    user_token_b: &Pubkey,
    user_lp_token: &Pubkey,
    lp_burn: u64,
) -> Instruction {
    let (lp_mint, _) = derive_lp_mint_pda(mint_a, mint_b);
    let (pool, _) = derive_pool_pda(&lp_mint);
    let (vault_a, _) = derive_vault_a_pda(&lp_mint);
    let (vault_b, _) = derive_vault_b_pda(&lp_mint);

    let mut data = anchor_discriminator("remove_liquidity").to_vec();
    data.extend_from_slice(&lp_burn.to_le_bytes());

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*user, true),
            AccountMeta::new(pool, false),
            AccountMeta::new(lp_mint, false),
            AccountMeta::new(vault_a, false),
            AccountMeta::new(vault_b, false),
            AccountMeta::new_readonly(*mint_a, false),
            AccountMeta::new_readonly(*mint_b, false),
            AccountMeta::new(*user_token_a, false),
            AccountMeta::new(*user_token_b, false),
            AccountMeta::new(*user_lp_token, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

// Build swap instruction
#[allow(clippy::too_many_arguments)]
pub fn build_swap_ix(
    user: &Pubkey,
    mint_a: &Pubkey,
    mint_b: &Pubkey,
    user_token_in: &Pubkey,
    user_token_out: &Pubkey,
    amount_in: u64,
    min_amount_out: u64,
) -> Instruction {
    let (lp_mint, _) = derive_lp_mint_pda(mint_a, mint_b);
    let (pool, _) = derive_pool_pda(&lp_mint);
    let (vault_a, _) = derive_vault_a_pda(&lp_mint);
    let (vault_b, _) = derive_vault_b_pda(&lp_mint);

    let mut data = anchor_discriminator("swap").to_vec();
    data.extend_from_slice(&amount_in.to_le_bytes());
    data.extend_from_slice(&min_amount_out.to_le_bytes());

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(pool, false),
            AccountMeta::new_readonly(lp_mint, false),
            AccountMeta::new(vault_a, false),
            AccountMeta::new(vault_b, false),
            AccountMeta::new(*user_token_in, false),
            AccountMeta::new(*user_token_out, false),
            AccountMeta::new_readonly(*mint_a, false),
            AccountMeta::new_readonly(*mint_b, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

// Assert a transaction failed with the given custom error code
pub fn assert_custom_error(result: TransactionResult, code: u32) {
    let failed = result.expect_err("transaction should have failed");
    let rendered = format!("{:?}", failed.err);
    assert!(
        rendered.contains(&format!("Custom({})", code)),
        "expected custom error {}, got: {}",
        code,
        rendered
    );
}
