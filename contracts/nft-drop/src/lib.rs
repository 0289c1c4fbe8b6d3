//! Limited-supply NFT drop engine.
//!
//! Mints sequentially-numbered units under one of three mutually exclusive
//! stages (inactive / restricted / public), enforces exact payment and a hard
//! supply cap, and distributes collected funds to fixed payout recipients on
//! owner-triggered withdrawal. The restricted path consumes eligibility from
//! either an external NEP-141 allowance token or a Merkle allowlist
//! commitment, chosen at construction.

use near_sdk::json_types::U128;
use near_sdk::store::LookupMap;
use near_sdk::{
    env, near, require, AccountId, NearToken, PanicOnDefault, Promise, PromiseOrValue,
};

mod admin;
mod allowlist;
pub mod constants;
mod errors;
mod events;
mod ft_receiver;
mod mint;
mod treasury;
mod types;

pub use constants::*;
pub use errors::DropError;
pub use events::DropEvent;
pub use types::{AllowlistMode, MintStage, PayoutShare, RoyaltyInfo};
use types::StorageKey;


#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct DropContract {
    pub version: String,

    pub owner_id: AccountId,
    pub mint_stage: MintStage,

    // Monotonic supply ledger: counter only grows and never passes max_supply.
    pub mint_counter: u32,
    pub max_supply: u32,

    pub public_mint_price: u128,

    pub allowlist: AllowlistMode,
    pub allowance_token: Option<AccountId>,
    pub(crate) claimed: LookupMap<AccountId, bool>,

    pub(crate) unit_owner: LookupMap<u64, AccountId>,
    pub(crate) owned_count: LookupMap<AccountId, u32>,

    // Collected public-mint payments, distributed only via withdraw().
    pub treasury_balance: u128,
    pub payout_recipients: Vec<PayoutShare>,

    pub custom_base_uri: String,
    pub contract_uri: String,
}

#[near]
impl DropContract {
    #[init]
    pub fn new(
        custom_base_uri: String,
        contract_uri: String,
        max_supply: u32,
        payout_recipients: Vec<PayoutShare>,
        allowlist_root: Option<String>,
    ) -> Self {
        require!(max_supply > 0, "max_supply must be positive");
        require!(
            !payout_recipients.is_empty(),
            "At least one payout recipient is required"
        );
        let mut total_percent: u32 = 0;
        for share in &payout_recipients {
            require!(share.percent > 0, "Payout percent must be positive");
            total_percent += share.percent as u32;
        }
        require!(total_percent == 100, "Payout percents must sum to 100");

        let allowlist = match allowlist_root {
            Some(root_hex) => {
                let bytes = hex::decode(&root_hex)
                    .unwrap_or_else(|_| env::panic_str("allowlist_root must be hex encoded"));
                let root: [u8; MERKLE_ROOT_BYTES] = bytes
                    .try_into()
                    .unwrap_or_else(|_| env::panic_str("allowlist_root must be 32 bytes"));
                AllowlistMode::MerkleRoot(root)
            }
            None => AllowlistMode::TokenGated,
        };

        Self {
            version: CONTRACT_VERSION.to_string(),
            owner_id: env::predecessor_account_id(),
            mint_stage: MintStage::default(),
            mint_counter: 0,
            max_supply,
            public_mint_price: DEFAULT_PUBLIC_MINT_PRICE.as_yoctonear(),
            allowlist,
            allowance_token: None,
            claimed: LookupMap::new(StorageKey::Claimed),
            unit_owner: LookupMap::new(StorageKey::UnitOwner),
            owned_count: LookupMap::new(StorageKey::OwnedCount),
            treasury_balance: 0,
            payout_recipients,
            custom_base_uri,
            contract_uri,
        }
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        let mut state: Self =
            env::state_read().unwrap_or_else(|| env::panic_str("No prior state found"));
        if state.version != CONTRACT_VERSION {
            DropEvent::StateMigrated {
                old_version: state.version.clone(),
                new_version: CONTRACT_VERSION.to_string(),
            }
            .emit();
            state.version = CONTRACT_VERSION.to_string();
        }
        state
    }

    // --- Mint paths ---

    /// Public mint: the attached deposit must equal `quantity * price`
    /// exactly; there is no refund path for overpayment.
    #[payable]
    #[handle_result]
    pub fn public_mint(&mut self, quantity: u32) -> Result<(), DropError> {
        let minter_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        self.public_mint_internal(&minter_id, quantity, deposit)
    }

    /// Restricted mint for Merkle-committed drops; issues one unit per claim.
    /// Token-gated drops mint through `ft_on_transfer` instead.
    #[handle_result]
    pub fn mint_restricted(&mut self, proof: Option<Vec<String>>) -> Result<u64, DropError> {
        let minter_id = env::predecessor_account_id();
        self.restricted_mint_internal(&minter_id, proof)
    }

    // --- Treasury ---

    /// Funds the treasury outside the mint flow (anyone may contribute).
    #[payable]
    pub fn deposit(&mut self) {
        let amount = env::attached_deposit().as_yoctonear();
        require!(amount > 0, "Attached deposit must be positive");
        self.treasury_balance += amount;
        DropEvent::TreasuryDeposit {
            sender: env::predecessor_account_id(),
            amount: U128(amount),
        }
        .emit();
    }

    /// Distributes the entire treasury balance across the payout recipients;
    /// the last recipient absorbs integer-division dust.
    #[handle_result]
    pub fn withdraw(&mut self) -> Result<(), DropError> {
        let actor_id = env::predecessor_account_id();
        self.withdraw_internal(&actor_id)
    }

    // --- Owner administration ---

    #[handle_result]
    pub fn set_mint_stage(&mut self, stage: MintStage) -> Result<(), DropError> {
        let actor_id = env::predecessor_account_id();
        self.set_mint_stage_internal(&actor_id, stage)
    }

    #[handle_result]
    pub fn set_public_mint_price(&mut self, price: U128) -> Result<(), DropError> {
        let actor_id = env::predecessor_account_id();
        self.set_public_mint_price_internal(&actor_id, price)
    }

    #[handle_result]
    pub fn set_allowance_token(&mut self, token: AccountId) -> Result<(), DropError> {
        let actor_id = env::predecessor_account_id();
        self.set_allowance_token_internal(&actor_id, token)
    }

    #[handle_result]
    pub fn update_metadata(&mut self, new_base_uri: String) -> Result<(), DropError> {
        let actor_id = env::predecessor_account_id();
        self.update_metadata_internal(&actor_id, new_base_uri)
    }

    #[handle_result]
    pub fn set_owner(&mut self, new_owner: AccountId) -> Result<(), DropError> {
        let actor_id = env::predecessor_account_id();
        self.set_owner_internal(&actor_id, new_owner)
    }

    // --- Views ---

    pub fn owner(&self) -> AccountId {
        self.owner_id.clone()
    }

    pub fn mint_stage(&self) -> MintStage {
        self.mint_stage.clone()
    }

    pub fn mint_counter(&self) -> u32 {
        self.mint_counter
    }

    pub fn max_supply(&self) -> u32 {
        self.max_supply
    }

    pub fn public_mint_price(&self) -> U128 {
        U128(self.public_mint_price)
    }

    pub fn treasury_balance(&self) -> U128 {
        U128(self.treasury_balance)
    }

    pub fn balance_of(&self, account_id: AccountId) -> u32 {
        self.owned_count.get(&account_id).copied().unwrap_or(0)
    }

    pub fn unit_owner(&self, unit_id: u64) -> Option<AccountId> {
        self.unit_owner.get(&unit_id).cloned()
    }

    pub fn allowance_token(&self) -> Option<AccountId> {
        self.allowance_token.clone()
    }

    pub fn allowlist_root(&self) -> Option<String> {
        match &self.allowlist {
            AllowlistMode::MerkleRoot(root) => Some(hex::encode(root)),
            AllowlistMode::TokenGated => None,
        }
    }

    pub fn is_claimed(&self, account_id: AccountId) -> bool {
        self.is_claimed_flag(&account_id)
    }

    pub fn custom_base_uri(&self) -> String {
        self.custom_base_uri.clone()
    }

    pub fn contract_uri(&self) -> String {
        self.contract_uri.clone()
    }

    pub fn token_uri(&self, unit_id: u64) -> Option<String> {
        self.unit_owner
            .contains_key(&unit_id)
            .then(|| format!("{}{}", self.custom_base_uri, unit_id))
    }

    /// Informational royalty quote for marketplaces; defined for any unit id,
    /// minted or not. The beneficiary is the contract account itself.
    pub fn royalty_info(&self, unit_id: u64, sale_price: U128) -> RoyaltyInfo {
        let _ = unit_id;
        RoyaltyInfo {
            receiver: env::current_account_id(),
            amount: U128(self.royalty_amount(sale_price.0)),
        }
    }

    pub fn payout_recipients(&self) -> Vec<PayoutShare> {
        self.payout_recipients.clone()
    }
}
