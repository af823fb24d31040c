//! Greedy order-based binding of concrete items to formal inputs.

use crate::slot::InputSlot;
use crate::store::{DataItem, DataStore};
use crate::suitability::Suitability;
use helix_description::InputKind;

/// One (item, resolved slot name, data-type) binding triple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBinding<I> {
    /// The bound concrete item
    pub item: I,
    /// Resolved slot name, with ordinal for multi slots
    pub name: String,
    /// Data-type tag of the slot
    pub kind: InputKind,
}

/// Binding failure
///
/// Both kinds are expected, user-visible states, not program faults: they
/// tell the UI the tool does not apply to the current selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// A required formal input (primary or metadata) found no item
    #[error("No compatible item for input {slot}")]
    NotEnoughInputs {
        /// The slot left unbound
        slot: String,
    },

    /// Items were left over after all slots were filled
    #[error("{count} selected items could not be bound")]
    TooManyInputs {
        /// Number of unbound items
        count: usize,
    },
}

impl BindError {
    /// The suitability classification of this failure
    #[must_use]
    pub fn suitability(&self) -> Suitability {
        match self {
            Self::NotEnoughInputs { .. } => Suitability::NotEnoughInputs,
            Self::TooManyInputs { .. } => Suitability::TooManyInputs,
        }
    }
}

/// Bind concrete data items to formal input slots
///
/// Formal slots are processed in declaration order and the first fitting
/// item wins; there is no backtracking and no optimality search, so once
/// an item is consumed it is never reconsidered. A multi slot keeps
/// consuming every fitting item in pool order. Every slot must bind at
/// least one item, a single item is never bound twice, and in the end all
/// items must be bound. Metadata slots are deferred and filled afterwards
/// from the ancestry of the bound items, pairing the Nth metadata slot
/// with the Nth binding.
///
/// The greedy first-match pass is deliberate: it keeps behavior
/// deterministic and cheap even though a global matching algorithm would
/// accept some selections this rejects.
///
/// # Errors
///
/// `NotEnoughInputs` when a slot binds nothing or ancestry metadata is
/// missing; `TooManyInputs` when items are left over. No partial bindings
/// are returned.
pub fn bind_inputs<I, S>(
    slots: &[InputSlot],
    items: impl IntoIterator<Item = I>,
    store: &S,
) -> Result<Vec<InputBinding<I>>, BindError>
where
    I: DataItem,
    S: DataStore<I>,
{
    let mut pool: Vec<I> = items.into_iter().collect();
    let mut bindings: Vec<InputBinding<I>> = Vec::new();
    let mut deferred: Vec<&InputSlot> = Vec::new();

    tracing::debug!(
        items = pool.len(),
        slots = slots.len(),
        "binding concrete items to formal inputs"
    );

    for slot in slots {
        // Metadata needs not be selected, it is fetched afterwards.
        if slot.is_metadata() {
            deferred.push(slot);
            continue;
        }

        // Ordinal counter for this attempt only; slots stay immutable.
        let mut ordinal = 1;
        let mut bound = false;

        let mut index = 0;
        while index < pool.len() {
            if store.is_compatible(slot, &pool[index]) {
                let item = pool.remove(index);
                let name = slot.resolved_name(ordinal);
                tracing::debug!(item = item.name(), slot = %name, "bound");
                bindings.push(InputBinding {
                    item,
                    name,
                    kind: slot.kind,
                });
                bound = true;
                if !slot.multi {
                    break;
                }
                ordinal += 1;
                // removal shifted the next candidate into `index`
            } else {
                index += 1;
            }
        }

        if !bound {
            tracing::debug!(slot = %slot.name, "no binding found");
            return Err(BindError::NotEnoughInputs {
                slot: slot.name.clone(),
            });
        }
    }

    if !pool.is_empty() {
        tracing::debug!(unbound = pool.len(), "concrete items left unbound");
        return Err(BindError::TooManyInputs { count: pool.len() });
    }

    // Attach ancestry metadata, pairing slots and bindings in order.
    let mut metadata_bindings = Vec::new();
    for (index, slot) in deferred.iter().enumerate() {
        let Some(binding) = bindings.get(index) else {
            return Err(BindError::NotEnoughInputs {
                slot: slot.name.clone(),
            });
        };
        match store.inherited_metadata(&binding.item) {
            Some(metadata) => metadata_bindings.push(InputBinding {
                item: metadata,
                name: slot.resolved_name(1),
                kind: slot.kind,
            }),
            None => {
                tracing::debug!(item = binding.item.name(), slot = %slot.name, "no ancestry metadata");
                return Err(BindError::NotEnoughInputs {
                    slot: slot.name.clone(),
                });
            }
        }
    }
    bindings.extend(metadata_bindings);

    Ok(bindings)
}
