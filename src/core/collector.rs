/*
 * Accumulates classified leaves into one container's record, applying the
 * collision-resolution policy. The field mapping is a fixed-shape record
 * (one optional slot per vocabulary header plus one continuation slot)
 * selected via `HeaderField`, rather than an ad hoc string-keyed bag.
 */
use super::identifier::ContainerIdentifier;
use super::vocabulary::HeaderField;

/// What `FieldSlots::record` did with one classified leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOutcome {
    /// The primary slot was vacant; the name was stored verbatim.
    Stored,
    /// "Oferta 1" collision: prior value moved to the continuation slot,
    /// primary blanked, the colliding name dropped.
    Promoted,
    /// Collision on any other header: name appended to the cell on a new line.
    Appended,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSlots {
    values: [Option<String>; HeaderField::COUNT],
    offer_continuation: Option<String>,
}

impl FieldSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /*
     * Applies the collision policy for one classified leaf, in flattened
     * encounter order:
     *
     * - Primary slot vacant (unset, or blanked by an earlier promotion):
     *   store the name verbatim.
     * - Occupied and the header is "Oferta 1": move the existing value to
     *   the continuation slot and leave the primary slot empty. The new
     *   name is dropped.
     * - Occupied and any other header: append the name to the existing
     *   value on a new line, accumulating all colliding values in one cell.
     *
     * Only the first "Oferta 1" collision promotes. A third colliding leaf
     * finds the primary slot blank and lands there verbatim; a fourth
     * promotes again, overwriting the continuation slot. That asymmetry is
     * a documented limitation of the format, kept as-is.
     */
    pub fn record(&mut self, field: HeaderField, element_name: &str) -> SlotOutcome {
        let slot = &mut self.values[field.index()];
        match slot {
            Some(existing) if !existing.is_empty() => {
                if field == HeaderField::Oferta1 {
                    self.offer_continuation = Some(std::mem::take(existing));
                    SlotOutcome::Promoted
                } else {
                    existing.push('\n');
                    existing.push_str(element_name);
                    SlotOutcome::Appended
                }
            }
            _ => {
                *slot = Some(element_name.to_string());
                SlotOutcome::Stored
            }
        }
    }

    /// Stored value for a header, or the empty string if absent.
    pub fn value(&self, field: HeaderField) -> &str {
        self.values[field.index()].as_deref().unwrap_or("")
    }

    /// The "Oferta 1" value displaced by a promotion, if any.
    pub fn offer_continuation(&self) -> Option<&str> {
        self.offer_continuation.as_deref()
    }
}

/*
 * One container's worth of output: the positional identifier parsed from
 * the container's own name plus the collected field slots. Built
 * incrementally leaf-by-leaf, consumed exactly once by the encoder.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractRecord {
    pub identifier: ContainerIdentifier,
    pub fields: FieldSlots,
}

impl ExtractRecord {
    pub fn new(identifier: ContainerIdentifier) -> Self {
        ExtractRecord {
            identifier,
            fields: FieldSlots::new(),
        }
    }
}
