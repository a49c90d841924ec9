//! Ledger layout and click handling
//!
//! A [`LedgerManager`] decides where each ledger of a screen sits and what
//! happens when one is clicked. Ledgers never hold on to their manager: the
//! tree hands it in for every position query, and the screen forwards click
//! notifications to it after input dispatch has finished.

use crate::config::LedgerLayoutConfig;
use crate::foundation::collections::ComponentKey;
use crate::foundation::math::Coordinate2D;
use crate::ui::host::ComponentTree;
use crate::ui::ledger::LedgerSide;

/// Change of a ledger's open target caused by a click
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerToggle {
    /// Ledger whose target changed
    pub key: ComponentKey,
    /// ID of that ledger
    pub id: String,
    /// New target
    pub open: bool,
}

/// Layout and click policy for the ledgers of one screen
pub trait LedgerManager {
    /// Start managing the ledger `id` stored under `key`
    fn register_ledger(&mut self, key: ComponentKey, id: &str, side: LedgerSide);

    /// Slot of ledger `id` on `side`, relative to the ledger's host
    ///
    /// For left ledgers the slot is the point the ledger's right edge hangs
    /// from; for right ledgers it is the point its left edge starts at.
    fn ledger_local_coordinate(&self, tree: &ComponentTree, side: LedgerSide, id: &str) -> Coordinate2D;

    /// React to a click on the ledger stored under `key`
    fn on_ledger_clicked(&mut self, tree: &mut ComponentTree, key: ComponentKey) -> Vec<LedgerToggle>;
}

#[derive(Debug, Clone)]
struct LedgerSlot {
    key: ComponentKey,
    id: String,
    side: LedgerSide,
}

/// Stacks ledgers top to bottom per side and opens one ledger per side at a time
///
/// Left ledgers hang from the GUI's left edge, right ledgers from its right
/// edge. Ledgers on one side are stacked in registration order, each placed
/// below the current height of the ones before it plus the configured
/// spacing, so ledgers never overlap while they animate. Hidden ledgers take
/// no space.
#[derive(Debug, Clone)]
pub struct StandardLedgerManager {
    layout: LedgerLayoutConfig,
    gui_width: i32,
    slots: Vec<LedgerSlot>,
}

impl StandardLedgerManager {
    /// Manager for a GUI `gui_width` pixels wide
    pub fn new(layout: LedgerLayoutConfig, gui_width: i32) -> Self {
        Self {
            layout,
            gui_width,
            slots: Vec::new(),
        }
    }

    /// Keys of the managed ledgers on `side`, in registration order
    pub fn ledgers_on(&self, side: LedgerSide) -> impl Iterator<Item = ComponentKey> + '_ {
        self.slots
            .iter()
            .filter(move |slot| slot.side == side)
            .map(|slot| slot.key)
    }

    fn set_open(tree: &mut ComponentTree, key: ComponentKey, open: bool) -> bool {
        let Some(ledger) = tree
            .component_mut(key)
            .and_then(|component| component.state_mut().ledger_mut())
        else {
            return false;
        };

        let changed = ledger.is_open() != open;
        ledger.set_open(open);
        changed
    }

    fn is_open(tree: &ComponentTree, key: ComponentKey) -> bool {
        tree.component(key)
            .and_then(|component| component.state().ledger())
            .is_some_and(|ledger| ledger.is_open())
    }
}

impl LedgerManager for StandardLedgerManager {
    fn register_ledger(&mut self, key: ComponentKey, id: &str, side: LedgerSide) {
        log::debug!("Managing ledger '{}' on the {:?} side", id, side);
        self.slots.push(LedgerSlot {
            key,
            id: id.to_string(),
            side,
        });
    }

    fn ledger_local_coordinate(&self, tree: &ComponentTree, side: LedgerSide, id: &str) -> Coordinate2D {
        let x = match side {
            LedgerSide::Left => 0,
            LedgerSide::Right => self.gui_width,
        };

        let mut y = self.layout.top_offset;
        for slot in self.slots.iter().filter(|slot| slot.side == side) {
            if slot.id == id {
                break;
            }
            let Some(component) = tree.component(slot.key) else {
                continue;
            };
            if !component.state().is_visible() {
                continue;
            }
            y += component.size().height + self.layout.spacing;
        }

        Coordinate2D::new(x, y)
    }

    fn on_ledger_clicked(&mut self, tree: &mut ComponentTree, key: ComponentKey) -> Vec<LedgerToggle> {
        let Some(clicked) = self.slots.iter().find(|slot| slot.key == key).cloned() else {
            log::warn!("Click on unmanaged ledger {:?} ignored", key);
            return Vec::new();
        };

        let mut toggles = Vec::new();
        if Self::is_open(tree, key) {
            Self::set_open(tree, key, false);
            toggles.push(LedgerToggle { key, id: clicked.id, open: false });
        } else {
            for other in self.slots.iter().filter(|slot| slot.side == clicked.side && slot.key != key) {
                if Self::set_open(tree, other.key, false) {
                    toggles.push(LedgerToggle { key: other.key, id: other.id.clone(), open: false });
                }
            }
            Self::set_open(tree, key, true);
            toggles.push(LedgerToggle { key, id: clicked.id, open: true });
        }

        log::debug!("Ledger click produced {} toggle(s)", toggles.len());
        toggles
    }
}
