use crate::*;
use near_sdk::FunctionError;

#[near]
impl DropContract {
    /// Token-gated restricted mint: the relayer calls `ft_transfer_call` on
    /// the allowance token, which lands here after the tokens have moved.
    /// Exactly one allowance unit is consumed per mint; the rest is returned
    /// for NEP-141 refund. Any validation failure panics so the token
    /// contract refunds the full transfer and no mint state is touched.
    pub fn ft_on_transfer(
        &mut self,
        sender_id: AccountId,
        amount: U128,
        msg: String,
    ) -> PromiseOrValue<U128> {
        let token = self
            .allowance_token
            .as_ref()
            .unwrap_or_else(|| DropError::NoAllowanceToken.panic());
        require!(
            env::predecessor_account_id() == *token,
            "Only the allowance token is accepted"
        );
        require!(
            self.allowlist == AllowlistMode::TokenGated,
            "Restricted path uses proof claims, not token transfers"
        );
        require!(amount.0 >= 1, "Amount must be positive");
        let _ = msg;

        if let Err(e) = self.token_gated_mint(&sender_id) {
            e.panic()
        }
        PromiseOrValue::Value(U128(amount.0 - 1))
    }
}
