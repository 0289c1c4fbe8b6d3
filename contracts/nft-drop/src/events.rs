use crate::types::MintStage;
use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

#[near(event_json(standard = "nep297"))]
pub enum DropEvent {
    /// Emitted exactly once per successful mint operation, restricted or public.
    #[event_version("1.0.0")]
    MintedAnNft { minter: AccountId, quantity: u32 },
    #[event_version("1.0.0")]
    MintStageUpdated { stage: MintStage },
    #[event_version("1.0.0")]
    PublicMintPriceUpdated { price: U128 },
    #[event_version("1.0.0")]
    AllowanceTokenUpdated { token: AccountId },
    #[event_version("1.0.0")]
    MetadataUpdated { base_uri: String },
    #[event_version("1.0.0")]
    TreasuryDeposit { sender: AccountId, amount: U128 },
    #[event_version("1.0.0")]
    Withdrawal { amount: U128 },
    #[event_version("1.0.0")]
    OwnerChanged { new_owner: AccountId },
    #[event_version("1.0.0")]
    StateMigrated {
        old_version: String,
        new_version: String,
    },
}
