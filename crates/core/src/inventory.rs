//! Item inventory - remaining uses per item kind

use crate::types::ItemKind;

const SLOTS: usize = ItemKind::ALL.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Inventory {
    counts: [u32; SLOTS],
}

impl Inventory {
    /// No items at all (classic mode)
    pub fn empty() -> Self {
        Self::default()
    }

    /// `count` of every item
    pub fn uniform(count: u32) -> Self {
        Self {
            counts: [count; SLOTS],
        }
    }

    pub fn count(&self, item: ItemKind) -> u32 {
        self.counts[item.index()]
    }

    /// Spend one use. Returns false (and changes nothing) when none are left
    pub fn consume(&mut self, item: ItemKind) -> bool {
        let slot = &mut self.counts[item.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_never_goes_negative() {
        let mut inv = Inventory::uniform(1);
        for item in &ItemKind::ALL[1..] {
            assert!(inv.consume(*item));
        }
        assert!(inv.consume(ItemKind::Bomb));
        assert!(!inv.consume(ItemKind::Bomb));
        assert_eq!(inv.count(ItemKind::Bomb), 0);
        assert!(inv.is_empty());
    }

    #[test]
    fn test_uniform() {
        let inv = Inventory::uniform(3);
        for item in ItemKind::ALL {
            assert_eq!(inv.count(item), 3);
        }
    }
}
