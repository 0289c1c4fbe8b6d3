use crate::*;

impl DropContract {
    pub(crate) fn check_owner(&self, actor_id: &AccountId) -> Result<(), DropError> {
        if actor_id != &self.owner_id {
            return Err(DropError::NotOwner);
        }
        Ok(())
    }

    pub(crate) fn set_mint_stage_internal(
        &mut self,
        actor_id: &AccountId,
        stage: MintStage,
    ) -> Result<(), DropError> {
        self.check_owner(actor_id)?;
        self.mint_stage = stage.clone();
        DropEvent::MintStageUpdated { stage }.emit();
        Ok(())
    }

    pub(crate) fn set_public_mint_price_internal(
        &mut self,
        actor_id: &AccountId,
        price: U128,
    ) -> Result<(), DropError> {
        self.check_owner(actor_id)?;
        self.public_mint_price = price.0;
        DropEvent::PublicMintPriceUpdated { price }.emit();
        Ok(())
    }

    pub(crate) fn set_allowance_token_internal(
        &mut self,
        actor_id: &AccountId,
        token: AccountId,
    ) -> Result<(), DropError> {
        self.check_owner(actor_id)?;
        if self.allowlist != AllowlistMode::TokenGated {
            return Err(DropError::InvalidInput(
                "allowance token only applies to token-gated drops".into(),
            ));
        }
        self.allowance_token = Some(token.clone());
        DropEvent::AllowanceTokenUpdated { token }.emit();
        Ok(())
    }

    pub(crate) fn update_metadata_internal(
        &mut self,
        actor_id: &AccountId,
        new_base_uri: String,
    ) -> Result<(), DropError> {
        self.check_owner(actor_id)?;
        // No well-formedness validation; the URI is an opaque pointer.
        self.custom_base_uri = new_base_uri.clone();
        DropEvent::MetadataUpdated {
            base_uri: new_base_uri,
        }
        .emit();
        Ok(())
    }

    pub(crate) fn set_owner_internal(
        &mut self,
        actor_id: &AccountId,
        new_owner: AccountId,
    ) -> Result<(), DropError> {
        self.check_owner(actor_id)?;
        self.owner_id = new_owner.clone();
        DropEvent::OwnerChanged { new_owner }.emit();
        Ok(())
    }
}
