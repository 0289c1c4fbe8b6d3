use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::{env, FunctionError};
use near_sdk_macros::NearSchema;

#[derive(Debug, PartialEq, NearSchema, BorshSerialize, BorshDeserialize)]
#[abi(borsh)]
pub enum DropError {
    NotOwner,
    InvalidStage,
    PublicMintDisabled,
    InvalidQuantity,
    InexactPayment,
    MaxMintExceeded,
    NotEligible,
    AlreadyClaimed,
    NoAllowanceToken,
    InvalidInput(String),
}

impl FunctionError for DropError {
    fn panic(&self) -> ! {
        let message = match self {
            DropError::NotOwner => "Only the contract owner can perform this action".to_string(),
            DropError::InvalidStage => "Drop is not active for this mint path".to_string(),
            DropError::PublicMintDisabled => "Public mint is disabled".to_string(),
            DropError::InvalidQuantity => "Quantity must be positive".to_string(),
            DropError::InexactPayment => {
                "Attached deposit must equal the exact mint cost".to_string()
            }
            DropError::MaxMintExceeded => "Mint would exceed the maximum supply".to_string(),
            DropError::NotEligible => "Caller is not eligible for the restricted mint".to_string(),
            DropError::AlreadyClaimed => "Allowlist allocation already claimed".to_string(),
            DropError::NoAllowanceToken => "Allowance token not configured".to_string(),
            DropError::InvalidInput(msg) => format!("Invalid input: {}", msg),
        };
        env::panic_str(&message)
    }
}
