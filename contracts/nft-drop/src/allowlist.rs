use crate::*;

pub(crate) fn hash_leaf(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

// Pair ordering is canonical (lexicographic) so proofs need no position bits.
pub(crate) fn hash_pair(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(a.len() + b.len());
    if a <= b {
        data.extend_from_slice(a);
        data.extend_from_slice(b);
    } else {
        data.extend_from_slice(b);
        data.extend_from_slice(a);
    }
    env::sha256(&data)
}

/// Walks the proof path from `sha256(account_id)` up to the committed root.
pub(crate) fn verify_membership(
    account_id: &AccountId,
    proof: &[String],
    root: &[u8; 32],
) -> Result<bool, DropError> {
    let mut node = hash_leaf(account_id);
    for sibling_hex in proof {
        let sibling = hex::decode(sibling_hex)
            .map_err(|_| DropError::InvalidInput("proof entries must be hex encoded".into()))?;
        if sibling.len() != MERKLE_ROOT_BYTES {
            return Err(DropError::InvalidInput(
                "proof entries must be 32 bytes".into(),
            ));
        }
        node = hash_pair(&node, &sibling);
    }
    Ok(node.as_slice() == root)
}

impl DropContract {
    pub(crate) fn is_claimed_flag(&self, account_id: &AccountId) -> bool {
        self.claimed.get(account_id).copied().unwrap_or(false)
    }

    /// Merkle-variant eligibility: proof mismatch before double-claim, both
    /// before any state is touched.
    pub(crate) fn check_proof_claim(
        &self,
        account_id: &AccountId,
        proof: Option<&[String]>,
    ) -> Result<(), DropError> {
        let AllowlistMode::MerkleRoot(root) = &self.allowlist else {
            // Token-gated drops consume eligibility through ft_on_transfer only.
            return Err(DropError::NotEligible);
        };
        let proof = proof.ok_or(DropError::NotEligible)?;
        if !verify_membership(account_id, proof, root)? {
            return Err(DropError::NotEligible);
        }
        if self.is_claimed_flag(account_id) {
            return Err(DropError::AlreadyClaimed);
        }
        Ok(())
    }
}
