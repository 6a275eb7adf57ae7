//! # Instruction Encoding
//!
//! Hand-encoded instructions for the System and Token Metadata programs.
//! SPL Token and Associated Token Account instructions come from their own crates.
//!
//! Token Metadata instruction data is Borsh:
//! - strings: `u32` little-endian length, then UTF-8 bytes
//! - `Option<T>`: `0` for `None`, `1` followed by `T` for `Some`
//! - `Vec<T>`: `u32` little-endian length, then the elements
//! - `bool`: one byte

use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;

/// Token Metadata program.
pub const TOKEN_METADATA_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");

/// System program.
pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::from_str_const("11111111111111111111111111111111");

/// Size of an SPL Token mint account.
pub const MINT_ACCOUNT_LEN: u64 = 82;

const CREATE_ACCOUNT_INDEX: u32 = 0;
const CREATE_METADATA_ACCOUNT_V3: u8 = 33;
const CREATE_MASTER_EDITION_V3: u8 = 17;

/// Creator entry recorded in the metadata account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Creator {
    pub address: Pubkey,
    pub verified: bool,
    pub share: u8,
}

/// On-chain metadata fields (`DataV2` without collection and uses).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataData {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub creators: Vec<Creator>,
}

/// Metadata account address for `mint`.
pub fn metadata_pda(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[b"metadata", TOKEN_METADATA_PROGRAM_ID.as_ref(), mint.as_ref()],
        &TOKEN_METADATA_PROGRAM_ID,
    )
    .0
}

/// Master edition account address for `mint`.
pub fn master_edition_pda(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[b"metadata", TOKEN_METADATA_PROGRAM_ID.as_ref(), mint.as_ref(), b"edition"],
        &TOKEN_METADATA_PROGRAM_ID,
    )
    .0
}

/// System `CreateAccount`.
pub fn create_account(
    payer: &Pubkey,
    new_account: &Pubkey,
    lamports: u64,
    space: u64,
    owner: &Pubkey,
) -> Instruction {
    let mut data = Vec::with_capacity(52);
    data.extend_from_slice(&CREATE_ACCOUNT_INDEX.to_le_bytes());
    data.extend_from_slice(&lamports.to_le_bytes());
    data.extend_from_slice(&space.to_le_bytes());
    data.extend_from_slice(owner.as_ref());

    Instruction {
        program_id: SYSTEM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(*new_account, true),
        ],
        data,
    }
}

/// Token Metadata `CreateMetadataAccountV3`, always mutable, no collection.
pub fn create_metadata_account_v3(
    mint: &Pubkey,
    mint_authority: &Pubkey,
    payer: &Pubkey,
    update_authority: &Pubkey,
    data: &MetadataData,
) -> Instruction {
    let mut buf = vec![CREATE_METADATA_ACCOUNT_V3];
    write_string(&mut buf, &data.name);
    write_string(&mut buf, &data.symbol);
    write_string(&mut buf, &data.uri);
    buf.extend_from_slice(&data.seller_fee_basis_points.to_le_bytes());

    if data.creators.is_empty() {
        buf.push(0);
    } else {
        buf.push(1);
        buf.extend_from_slice(&(data.creators.len() as u32).to_le_bytes());
        for creator in &data.creators {
            buf.extend_from_slice(creator.address.as_ref());
            buf.push(creator.verified as u8);
            buf.push(creator.share);
        }
    }

    buf.push(0); // collection: None
    buf.push(0); // uses: None
    buf.push(1); // is_mutable
    buf.push(0); // collection_details: None

    Instruction {
        program_id: TOKEN_METADATA_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(metadata_pda(mint), false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(*mint_authority, true),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(*update_authority, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
        data: buf,
    }
}

/// Token Metadata `CreateMasterEditionV3`. `max_supply = Some(0)` makes the token
/// a one-of-one.
pub fn create_master_edition_v3(
    mint: &Pubkey,
    update_authority: &Pubkey,
    mint_authority: &Pubkey,
    payer: &Pubkey,
    max_supply: Option<u64>,
) -> Instruction {
    let mut data = vec![CREATE_MASTER_EDITION_V3];
    match max_supply {
        Some(supply) => {
            data.push(1);
            data.extend_from_slice(&supply.to_le_bytes());
        }
        None => data.push(0),
    }

    Instruction {
        program_id: TOKEN_METADATA_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(master_edition_pda(mint), false),
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(*update_authority, true),
            AccountMeta::new_readonly(*mint_authority, true),
            AccountMeta::new(*payer, true),
            AccountMeta::new(metadata_pda(mint), false),
            AccountMeta::new_readonly(spl_token::id(), false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
        data,
    }
}

fn write_string(buf: &mut Vec<u8>, value: &str) {
    buf.extend_from_slice(&(value.len() as u32).to_le_bytes());
    buf.extend_from_slice(value.as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_account_layout() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let ix = create_account(&payer, &mint, 1_461_600, MINT_ACCOUNT_LEN, &spl_token::id());

        assert_eq!(ix.program_id, SYSTEM_PROGRAM_ID);
        assert_eq!(ix.data.len(), 52);
        assert_eq!(&ix.data[0..4], &[0, 0, 0, 0]);
        assert_eq!(u64::from_le_bytes(ix.data[4..12].try_into().unwrap()), 1_461_600);
        assert_eq!(u64::from_le_bytes(ix.data[12..20].try_into().unwrap()), 82);
        assert_eq!(&ix.data[20..], spl_token::id().as_ref());
        assert!(ix.accounts.iter().all(|a| a.is_signer && a.is_writable));
    }

    #[test]
    fn test_metadata_layout() {
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let data = MetadataData {
            name: "Fox".to_string(),
            symbol: String::new(),
            uri: "ipfs://abc".to_string(),
            seller_fee_basis_points: 500,
            creators: vec![Creator { address: owner, verified: true, share: 100 }],
        };
        let ix = create_metadata_account_v3(&mint, &owner, &owner, &owner, &data);

        let mut expected = vec![33u8];
        expected.extend_from_slice(&3u32.to_le_bytes());
        expected.extend_from_slice(b"Fox");
        expected.extend_from_slice(&0u32.to_le_bytes());
        expected.extend_from_slice(&10u32.to_le_bytes());
        expected.extend_from_slice(b"ipfs://abc");
        expected.extend_from_slice(&500u16.to_le_bytes());
        expected.push(1);
        expected.extend_from_slice(&1u32.to_le_bytes());
        expected.extend_from_slice(owner.as_ref());
        expected.extend_from_slice(&[1, 100]);
        expected.extend_from_slice(&[0, 0, 1, 0]);

        assert_eq!(ix.data, expected);
        assert_eq!(ix.program_id, TOKEN_METADATA_PROGRAM_ID);
        assert_eq!(ix.accounts[0].pubkey, metadata_pda(&mint));
        assert_eq!(ix.accounts.len(), 6);
    }

    #[test]
    fn test_master_edition_layout() {
        let mint = Pubkey::new_unique();
        let authority = Pubkey::new_unique();
        let ix = create_master_edition_v3(&mint, &authority, &authority, &authority, Some(0));

        assert_eq!(ix.data, vec![17, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(ix.accounts[0].pubkey, master_edition_pda(&mint));
        assert_eq!(ix.accounts[5].pubkey, metadata_pda(&mint));
        assert!(ix.accounts[1].is_writable);
    }

    #[test]
    fn test_pdas_differ() {
        let mint = Pubkey::new_unique();
        assert_ne!(metadata_pda(&mint), master_edition_pda(&mint));
        assert_eq!(metadata_pda(&mint), metadata_pda(&mint));
    }
}
