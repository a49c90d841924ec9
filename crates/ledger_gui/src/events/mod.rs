//! GUI event queue
//!
//! Screens post what happened during input dispatch (ledger clicks, ledgers
//! opening or closing, screens opening or closing) and the owner drains the
//! queue once per frame.
//! - Key-value arguments (no order dependency)
//! - Handler returns bool (true = consumed, stops forwarding)
//! - Registration system (only notify interested handlers)

use std::collections::HashMap;

use crate::input::MouseButton;

/// Event type identification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// A screen was opened and became active
    ScreenOpened,
    /// A screen was closed and its components destroyed
    ScreenClosed,
    /// A click landed on a ledger and no child consumed it
    LedgerClicked,
    /// A ledger's open target changed
    LedgerToggled,
    /// A key was typed while a screen was active
    KeyTyped,
}

/// Variant for type-safe event arguments
#[derive(Debug, Clone, PartialEq)]
pub enum EventArg {
    /// Component identifier
    ComponentId(String),
    /// Screen name
    Screen(String),
    /// New open target of a ledger
    Open(bool),
    /// Screen-space position of a click
    Position(i32, i32),
    /// Engine index of the clicking mouse button
    MouseButton(u32),
    /// Typed character
    Key(char),
}

/// Event with type ID and key-value arguments
#[derive(Debug, Clone)]
pub struct Event {
    /// Type of event
    pub event_type: EventType,
    /// Frame on which the event was raised
    pub frame: u64,
    args: HashMap<&'static str, EventArg>,
}

impl Event {
    /// Create a new event with the given type and frame number
    pub fn new(event_type: EventType, frame: u64) -> Self {
        Self {
            event_type,
            frame,
            args: HashMap::new(),
        }
    }

    /// Add an argument to the event (builder pattern)
    #[must_use]
    pub fn with_arg(mut self, key: &'static str, value: EventArg) -> Self {
        self.args.insert(key, value);
        self
    }

    /// Get an argument by key
    pub fn get_arg(&self, key: &str) -> Option<&EventArg> {
        self.args.get(key)
    }

    /// Get component_id argument if present
    pub fn get_component_id(&self) -> Option<&str> {
        if let Some(EventArg::ComponentId(id)) = self.get_arg("component_id") {
            Some(id)
        } else {
            None
        }
    }

    /// Get screen argument if present
    pub fn get_screen(&self) -> Option<&str> {
        if let Some(EventArg::Screen(name)) = self.get_arg("screen") {
            Some(name)
        } else {
            None
        }
    }

    /// Get open argument if present
    pub fn get_open(&self) -> Option<bool> {
        if let Some(EventArg::Open(open)) = self.get_arg("open") {
            Some(*open)
        } else {
            None
        }
    }

    /// Get position argument if present
    pub fn get_position(&self) -> Option<(i32, i32)> {
        if let Some(EventArg::Position(x, y)) = self.get_arg("position") {
            Some((*x, *y))
        } else {
            None
        }
    }

    /// Get mouse button argument if present and known
    pub fn get_mouse_button(&self) -> Option<MouseButton> {
        if let Some(EventArg::MouseButton(index)) = self.get_arg("button") {
            MouseButton::from_index(*index)
        } else {
            None
        }
    }

    /// Get key argument if present
    pub fn get_key(&self) -> Option<char> {
        if let Some(EventArg::Key(key)) = self.get_arg("key") {
            Some(*key)
        } else {
            None
        }
    }
}

/// Event handler trait
/// Returns true if event was consumed (stops forwarding)
/// Returns false to allow forwarding to other handlers
pub trait EventHandler {
    /// Handle an event, return true if consumed
    fn on_event(&mut self, event: &Event) -> bool;
}

/// Event system with registration and queuing
/// Follows chain of responsibility pattern
pub struct EventSystem {
    queue: Vec<Event>,
    handlers: HashMap<EventType, Vec<Box<dyn EventHandler>>>,
}

impl EventSystem {
    /// Create a new empty event system
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for a specific event type
    /// Only handlers registered for this type will be notified
    pub fn register_handler(&mut self, event_type: EventType, handler: Box<dyn EventHandler>) {
        self.handlers.entry(event_type).or_default().push(handler);
    }

    /// Queue an event for the next dispatch
    pub fn send(&mut self, event: Event) {
        log::trace!("Queued {:?} event (frame {})", event.event_type, event.frame);
        self.queue.push(event);
    }

    /// Events waiting for dispatch, oldest first
    pub fn pending(&self) -> &[Event] {
        &self.queue
    }

    /// Dispatch all pending events in the order they were sent
    pub fn dispatch(&mut self) {
        let queued = std::mem::take(&mut self.queue);
        for event in queued {
            self.dispatch_event(&event);
        }
    }

    /// Dispatch single event to registered handlers
    /// Stops on first handler that returns true (consumed)
    fn dispatch_event(&mut self, event: &Event) {
        if let Some(handlers) = self.handlers.get_mut(&event.event_type) {
            for handler in handlers.iter_mut() {
                if handler.on_event(event) {
                    break;
                }
            }
        }
    }

    /// Clear all queued events (useful for state transitions)
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl Default for EventSystem {
    fn default() -> Self {
        Self::new()
    }
}
