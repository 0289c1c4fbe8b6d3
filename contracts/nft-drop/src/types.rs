use near_sdk::json_types::U128;
use near_sdk::{near, AccountId, BorshStorageKey};

#[derive(BorshStorageKey)]
#[near]
pub(crate) enum StorageKey {
    Claimed,
    UnitOwner,
    OwnedCount,
}

/// Which mint path is currently open. Exactly one value is active at a time;
/// transitions are owner-only and unconditional.
#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Debug, PartialEq, Default)]
pub enum MintStage {
    #[default]
    Inactive,
    Restricted,
    Public,
}

/// Restricted-path eligibility mechanism, fixed at construction.
///
/// `TokenGated` consumes one unit of an external NEP-141 allowance token per
/// mint (via `ft_on_transfer`). `MerkleRoot` accepts a caller-supplied
/// membership proof against the committed root, one claim per account.
#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Debug, PartialEq)]
pub enum AllowlistMode {
    TokenGated,
    MerkleRoot([u8; 32]),
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct PayoutShare {
    pub account_id: AccountId,
    /// Whole percent of the treasury balance; shares must sum to 100.
    pub percent: u8,
}

#[near(serializers = [json])]
pub struct RoyaltyInfo {
    pub receiver: AccountId,
    pub amount: U128,
}
