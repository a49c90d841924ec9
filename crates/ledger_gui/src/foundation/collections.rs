//! Arena collections backing the component tree

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Handle to a component stored in a [`ComponentTree`](crate::ui::ComponentTree)
    pub struct ComponentKey;
}

/// Arena storage keyed by [`ComponentKey`]
pub type ComponentArena<T> = SlotMap<ComponentKey, T>;
