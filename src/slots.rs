use std::num::IntErrorKind;

use crate::validate::MAX_STUDENTS;

/// Number of score slots that should be shown for a student-count text.
///
/// This is advisory and more lenient than validation: empty, non-numeric
/// or negative text shows nothing, and any positive count is returned as-is
/// without clamping to the slot capacity.
pub fn active_slot_count(count_text: &str) -> usize {
    if count_text.is_empty() {
        return 0;
    }

    match count_text.trim().parse::<i64>() {
        Ok(count) if count > 0 => usize::try_from(count).unwrap_or(usize::MAX),
        Ok(_) => 0,
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => usize::MAX,
        Err(_) => 0,
    }
}

pub fn is_slot_active(index: usize, count_text: &str) -> bool {
    index < active_slot_count(count_text)
}

/// One score input position together with the label shown next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub label: String,
    pub text: String,
}

/// Fixed set of score slots, addressed by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotBoard {
    slots: [Slot; MAX_STUDENTS],
}

impl Default for SlotBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotBoard {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|index| Slot {
                label: format!("Student {}", index + 1),
                text: String::new(),
            }),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Stores raw text in a slot. Returns `false` if the index is past capacity.
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                slot.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Slots that should be shown for the given count text, in index order.
    pub fn visible_slots<'a>(&'a self, count_text: &str) -> impl Iterator<Item = (usize, &'a Slot)> {
        let active = active_slot_count(count_text);
        self.slots
            .iter()
            .enumerate()
            .filter(move |(index, _)| *index < active)
    }

    /// Raw texts of every slot, in index order, as handed to validation.
    pub fn texts(&self) -> Vec<&str> {
        self.slots.iter().map(|slot| slot.text.as_str()).collect()
    }
}
