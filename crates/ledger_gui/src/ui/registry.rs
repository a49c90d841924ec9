//! Open screens
//!
//! Screens are stacked: the most recently opened one is active and receives
//! input, updates and rendering. Closing a screen drops its whole component
//! tree.

use crate::error::{GuiError, GuiResult};
use crate::events::{Event, EventArg, EventSystem, EventType};
use crate::input::{InputFrame, MouseButton};
use crate::ui::backend::RenderBackend;
use crate::ui::manager::GuiScreen;

/// Stack of open screens
#[derive(Default)]
pub struct ScreenRegistry {
    screens: Vec<GuiScreen>,
    event_system: EventSystem,
    frame_counter: u64,
}

impl ScreenRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `screen` on top of the stack, making it active
    ///
    /// A screen already open under the same name is closed first.
    pub fn open(&mut self, screen: GuiScreen) {
        if self.is_open(screen.name()) {
            let name = screen.name().to_string();
            self.remove(&name);
        }

        log::debug!("Opened screen '{}'", screen.name());
        self.event_system.send(
            Event::new(EventType::ScreenOpened, self.frame_counter)
                .with_arg("screen", EventArg::Screen(screen.name().to_string())),
        );
        self.screens.push(screen);
    }

    /// Close the screen called `name` and drop its components
    pub fn close(&mut self, name: &str) -> GuiResult<()> {
        if self.remove(name) {
            Ok(())
        } else {
            Err(GuiError::UnknownScreen(name.to_string()))
        }
    }

    fn remove(&mut self, name: &str) -> bool {
        let Some(index) = self.screens.iter().position(|screen| screen.name() == name) else {
            return false;
        };

        let screen = self.screens.remove(index);
        log::debug!("Closed screen '{}' ({} components dropped)", name, screen.tree().len());
        self.event_system.send(
            Event::new(EventType::ScreenClosed, self.frame_counter)
                .with_arg("screen", EventArg::Screen(name.to_string())),
        );
        true
    }

    /// Whether a screen called `name` is open
    pub fn is_open(&self, name: &str) -> bool {
        self.screens.iter().any(|screen| screen.name() == name)
    }

    /// Number of open screens
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Whether no screen is open
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// The active screen
    pub fn active(&self) -> GuiResult<&GuiScreen> {
        self.screens.last().ok_or(GuiError::NoActiveScreen)
    }

    /// The active screen, mutably
    pub fn active_mut(&mut self) -> GuiResult<&mut GuiScreen> {
        self.screens.last_mut().ok_or(GuiError::NoActiveScreen)
    }

    /// The open screen called `name`
    pub fn get(&self, name: &str) -> GuiResult<&GuiScreen> {
        self.screens
            .iter()
            .find(|screen| screen.name() == name)
            .ok_or_else(|| GuiError::UnknownScreen(name.to_string()))
    }

    /// The open screen called `name`, mutably
    pub fn get_mut(&mut self, name: &str) -> GuiResult<&mut GuiScreen> {
        self.screens
            .iter_mut()
            .find(|screen| screen.name() == name)
            .ok_or_else(|| GuiError::UnknownScreen(name.to_string()))
    }

    /// Advance the registry clock used for event timestamps
    pub fn next_frame(&mut self) {
        self.frame_counter += 1;
    }

    /// Frames advanced so far
    pub fn frame(&self) -> u64 {
        self.frame_counter
    }

    // ----------------------------------------------------------------------
    // Routing to the active screen
    // ----------------------------------------------------------------------

    /// Route a click to the active screen; `true` when a component consumed it
    pub fn mouse_clicked(&mut self, x: i32, y: i32, button: MouseButton) -> GuiResult<bool> {
        Ok(self.active_mut()?.mouse_clicked(x, y, button))
    }

    /// Route a typed character to the active screen
    pub fn key_typed(&mut self, key: char) -> GuiResult<()> {
        self.active_mut()?.key_typed(key);
        Ok(())
    }

    /// Apply one frame of input to the active screen and advance the clock
    pub fn process_input(&mut self, frame: &InputFrame) -> GuiResult<()> {
        self.active_mut()?.process_input(frame);
        self.next_frame();
        Ok(())
    }

    /// Update the active screen without input and advance the clock
    pub fn update(&mut self, partial_tick: f32) -> GuiResult<()> {
        self.active_mut()?.update(partial_tick);
        self.next_frame();
        Ok(())
    }

    /// Render the active screen
    pub fn render(&self, backend: &mut dyn RenderBackend) -> GuiResult<()> {
        self.active()?.render(backend);
        Ok(())
    }

    /// Dispatch screen lifecycle events, then every open screen's own events
    pub fn dispatch_events(&mut self) {
        self.event_system.dispatch();
        for screen in &mut self.screens {
            screen.dispatch_events();
        }
    }

    /// Get event system reference
    pub fn event_system(&self) -> &EventSystem {
        &self.event_system
    }

    /// Get event system mutable reference
    pub fn event_system_mut(&mut self) -> &mut EventSystem {
        &mut self.event_system
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::config::GuiConfig;
    use crate::events::EventHandler;
    use crate::input::InputProcessor;
    use crate::ui::rendering::CommandRecorder;

    struct Collect(Rc<RefCell<Vec<(EventType, String)>>>);

    impl EventHandler for Collect {
        fn on_event(&mut self, event: &Event) -> bool {
            self.0
                .borrow_mut()
                .push((event.event_type, event.get_screen().unwrap_or_default().to_string()));
            false
        }
    }

    fn screen(name: &str) -> GuiScreen {
        GuiScreen::new(name, GuiConfig::default()).unwrap()
    }

    #[test]
    fn test_last_opened_screen_is_active() {
        let mut registry = ScreenRegistry::new();
        assert!(matches!(registry.active(), Err(GuiError::NoActiveScreen)));

        registry.open(screen("furnace"));
        registry.open(screen("anvil"));
        assert_eq!(registry.active().unwrap().name(), "anvil");

        registry.close("anvil").unwrap();
        assert_eq!(registry.active().unwrap().name(), "furnace");
    }

    #[test]
    fn test_close_unknown_screen_fails() {
        let mut registry = ScreenRegistry::new();
        assert!(matches!(registry.close("missing"), Err(GuiError::UnknownScreen(name)) if name == "missing"));
    }

    #[test]
    fn test_reopening_replaces_screen_and_posts_events() {
        let mut registry = ScreenRegistry::new();
        registry.open(screen("furnace"));
        registry.open(screen("furnace"));
        assert_eq!(registry.len(), 1);

        let kinds: Vec<EventType> = registry.event_system().pending().iter().map(|event| event.event_type).collect();
        assert_eq!(kinds, vec![EventType::ScreenOpened, EventType::ScreenClosed, EventType::ScreenOpened]);
        assert_eq!(registry.event_system().pending()[1].get_screen(), Some("furnace"));
    }

    #[test]
    fn test_routing_needs_an_open_screen() {
        let mut registry = ScreenRegistry::new();
        let mut recorder = CommandRecorder::new();

        assert!(matches!(registry.mouse_clicked(1, 1, MouseButton::Left), Err(GuiError::NoActiveScreen)));
        assert!(matches!(registry.key_typed('e'), Err(GuiError::NoActiveScreen)));
        assert!(matches!(registry.update(1.0), Err(GuiError::NoActiveScreen)));
        assert!(matches!(registry.render(&mut recorder), Err(GuiError::NoActiveScreen)));
        assert_eq!(registry.frame(), 0);
        assert!(recorder.commands().is_empty());
    }

    #[test]
    fn test_input_and_frames_reach_only_the_active_screen() {
        let mut registry = ScreenRegistry::new();
        registry.open(screen("furnace"));
        registry.open(screen("anvil"));

        let mut input = InputProcessor::new();
        input.key_typed('q');
        registry.process_input(&input.finish_frame(1.0)).unwrap();
        registry.update(0.5).unwrap();

        assert_eq!(registry.frame(), 2);
        assert_eq!(registry.active().unwrap().frame(), 2);
        assert_eq!(registry.get("furnace").unwrap().frame(), 0);

        let anvil = registry.get("anvil").unwrap().event_system().pending();
        assert_eq!(anvil.len(), 1);
        assert_eq!(anvil[0].get_key(), Some('q'));
        assert!(registry.get("furnace").unwrap().event_system().pending().is_empty());
    }

    #[test]
    fn test_dispatch_delivers_lifecycle_and_screen_events() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ScreenRegistry::new();
        registry
            .event_system_mut()
            .register_handler(EventType::ScreenOpened, Box::new(Collect(Rc::clone(&seen))));
        registry
            .event_system_mut()
            .register_handler(EventType::ScreenClosed, Box::new(Collect(Rc::clone(&seen))));

        let mut furnace = screen("furnace");
        furnace
            .event_system_mut()
            .register_handler(EventType::KeyTyped, Box::new(Collect(Rc::clone(&seen))));
        registry.open(furnace);
        registry.key_typed('x').unwrap();
        registry.open(screen("anvil"));
        registry.close("anvil").unwrap();

        registry.dispatch_events();

        assert_eq!(
            *seen.borrow(),
            vec![
                (EventType::ScreenOpened, "furnace".to_string()),
                (EventType::ScreenOpened, "anvil".to_string()),
                (EventType::ScreenClosed, "anvil".to_string()),
                (EventType::KeyTyped, "furnace".to_string()),
            ]
        );
        assert!(registry.event_system().pending().is_empty());
        assert!(registry.active().unwrap().event_system().pending().is_empty());
    }
}
