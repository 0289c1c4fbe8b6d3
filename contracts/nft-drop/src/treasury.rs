use crate::*;

/// Splits `balance` across `recipients` by whole-percent shares. Truncating
/// division leaves dust; the last recipient absorbs it so the amounts always
/// sum to `balance` exactly.
pub(crate) fn split_payout(
    balance: u128,
    recipients: &[PayoutShare],
) -> Result<Vec<u128>, DropError> {
    let last = recipients.len() - 1;
    let mut amounts = Vec::with_capacity(recipients.len());
    let mut distributed: u128 = 0;
    for (i, share) in recipients.iter().enumerate() {
        let amount = if i == last {
            balance - distributed
        } else {
            balance
                .checked_mul(share.percent as u128)
                .ok_or_else(|| DropError::InvalidInput("payout overflow".into()))?
                / SHARE_DENOMINATOR
        };
        distributed += amount;
        amounts.push(amount);
    }
    Ok(amounts)
}

impl DropContract {
    pub(crate) fn withdraw_internal(&mut self, actor_id: &AccountId) -> Result<(), DropError> {
        self.check_owner(actor_id)?;
        let balance = self.treasury_balance;
        if balance == 0 {
            // Nothing to distribute; still a success.
            return Ok(());
        }
        let amounts = split_payout(balance, &self.payout_recipients)?;
        // Balance is snapshotted once and zeroed before transfers are issued.
        self.treasury_balance = 0;
        for (share, amount) in self.payout_recipients.iter().zip(amounts) {
            if amount > 0 {
                Promise::new(share.account_id.clone())
                    .transfer(NearToken::from_yoctonear(amount));
            }
        }
        DropEvent::Withdrawal {
            amount: U128(balance),
        }
        .emit();
        Ok(())
    }

    pub(crate) fn royalty_amount(&self, sale_price: u128) -> u128 {
        sale_price
            .checked_mul(ROYALTY_BPS as u128)
            .unwrap_or_else(|| env::panic_str("Royalty overflow"))
            / BASIS_POINTS as u128
    }
}
