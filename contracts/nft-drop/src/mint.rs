use crate::*;

impl DropContract {
    /// Supply check without mutation; returns the counter value after a mint
    /// of `quantity` would commit.
    pub(crate) fn ensure_supply(&self, quantity: u32) -> Result<u32, DropError> {
        let new_count = self
            .mint_counter
            .checked_add(quantity)
            .ok_or(DropError::MaxMintExceeded)?;
        if new_count > self.max_supply {
            return Err(DropError::MaxMintExceeded);
        }
        Ok(new_count)
    }

    /// Commits a mint: sequential ids `[counter+1 ..= counter+quantity]`, all
    /// owned by `receiver_id`, counter advanced, one event for the batch.
    /// Callers must have validated everything else already.
    pub(crate) fn issue_units(
        &mut self,
        receiver_id: &AccountId,
        quantity: u32,
    ) -> Result<(), DropError> {
        let new_count = self.ensure_supply(quantity)?;
        for unit_id in (self.mint_counter + 1)..=new_count {
            self.unit_owner.insert(unit_id as u64, receiver_id.clone());
        }
        self.mint_counter = new_count;
        let owned = self.owned_count.get(receiver_id).copied().unwrap_or(0);
        self.owned_count.insert(receiver_id.clone(), owned + quantity);
        DropEvent::MintedAnNft {
            minter: receiver_id.clone(),
            quantity,
        }
        .emit();
        Ok(())
    }

    pub(crate) fn public_mint_internal(
        &mut self,
        minter_id: &AccountId,
        quantity: u32,
        deposit: u128,
    ) -> Result<(), DropError> {
        if quantity == 0 {
            return Err(DropError::InvalidQuantity);
        }
        if self.mint_stage != MintStage::Public {
            return Err(DropError::PublicMintDisabled);
        }
        let required = self
            .public_mint_price
            .checked_mul(quantity as u128)
            .ok_or_else(|| DropError::InvalidInput("mint cost overflow".into()))?;
        // Overpayment fails too; there is no refund path.
        if deposit != required {
            return Err(DropError::InexactPayment);
        }
        self.issue_units(minter_id, quantity)?;
        self.treasury_balance += required;
        Ok(())
    }

    /// Restricted path always issues exactly one unit per claim.
    pub(crate) fn restricted_mint_internal(
        &mut self,
        minter_id: &AccountId,
        proof: Option<Vec<String>>,
    ) -> Result<u64, DropError> {
        if self.mint_stage != MintStage::Restricted {
            return Err(DropError::InvalidStage);
        }
        self.check_proof_claim(minter_id, proof.as_deref())?;
        self.ensure_supply(1)?;
        self.claimed.insert(minter_id.clone(), true);
        self.issue_units(minter_id, 1)?;
        Ok(self.mint_counter as u64)
    }

    /// Token-gated restricted mint, entered from `ft_on_transfer` after the
    /// allowance token has already moved one unit to this contract.
    pub(crate) fn token_gated_mint(&mut self, minter_id: &AccountId) -> Result<u64, DropError> {
        if self.mint_stage != MintStage::Restricted {
            return Err(DropError::InvalidStage);
        }
        self.ensure_supply(1)?;
        self.issue_units(minter_id, 1)?;
        Ok(self.mint_counter as u64)
    }
}
