use sha2::{Digest, Sha256};

use crate::types::ItemId;

/// Identity of an ordered item list: sha256(each kind-tagged, length-prefixed id, then the count).
///
/// Two lists share a fingerprint only if they hold the same ids in the same
/// order, so a changed length, membership or ordering all register as a change.
pub fn list_fingerprint<'a, I>(ids: I) -> [u8; 32]
where
    I: IntoIterator<Item = &'a ItemId>,
{
    let mut hasher = Sha256::new();
    let mut count: u64 = 0;
    for id in ids {
        match id {
            ItemId::Numeric(n) => {
                hasher.update([0u8]);
                hasher.update(n.to_be_bytes());
            }
            ItemId::Text(s) => {
                hasher.update([1u8]);
                hasher.update((s.len() as u64).to_be_bytes());
                hasher.update(s.as_bytes());
            }
        }
        count += 1;
    }
    hasher.update(count.to_be_bytes());
    hasher.finalize().into()
}
