//! Ledger demo application
//!
//! Builds a machine screen with two ledgers on each side, drives it through
//! a short scripted session of frames, clicks and key presses, and logs the
//! draw commands a backend would receive.
//!
//! Usage: `ledger_demo [config.toml|config.ron]`

use ledger_gui::config::{Config, ConfigError};
use ledger_gui::foundation::logging;
use ledger_gui::prelude::*;

/// Errors that end the demo
#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error("GUI error: {0}")]
    Gui(#[from] GuiError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Logs every event it sees without consuming it
struct EventLogger;

impl EventHandler for EventLogger {
    fn on_event(&mut self, event: &Event) -> bool {
        match event.event_type {
            EventType::ScreenOpened | EventType::ScreenClosed => {
                log::info!("[frame {}] {:?} '{}'", event.frame, event.event_type, event.get_screen().unwrap_or("?"))
            }
            EventType::LedgerClicked => log::info!(
                "[frame {}] ledger '{}' clicked at {:?}",
                event.frame,
                event.get_component_id().unwrap_or("?"),
                event.get_position().unwrap_or_default()
            ),
            EventType::LedgerToggled => log::info!(
                "[frame {}] ledger '{}' -> {}",
                event.frame,
                event.get_component_id().unwrap_or("?"),
                if event.get_open() == Some(true) { "open" } else { "closed" }
            ),
            _ => log::info!("[frame {}] {:?} {:?}", event.frame, event.event_type, event.get_component_id()),
        }
        false
    }
}

/// One step of the scripted session
enum Step {
    Frames(u32),
    Click(i32, i32),
    Key(char),
}

fn load_config() -> Result<GuiConfig, DemoError> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading GUI configuration from {}", path);
            GuiConfig::load_from_file(&path)?
        }
        None => GuiConfig::default(),
    };
    Ok(with_demo_textures(config))
}

fn with_demo_textures(mut config: GuiConfig) -> GuiConfig {
    for (name, width, height) in [("icons/info", 16, 16), ("icons/power", 16, 16), ("icons/redstone", 16, 16), ("icons/upgrades", 16, 16), ("gui/machine", 176, 166)] {
        if !config.resources.textures.iter().any(|texture| texture.name == name) {
            config.resources.textures.push(TextureResource::new(name, width, height));
        }
    }
    config
}

fn build_screen(config: GuiConfig) -> Result<GuiScreen, DemoError> {
    let mut screen = GuiScreen::new("machine", config)?;
    let root = screen.root();

    let background = screen.catalog().texture("gui/machine")?;
    screen.register_component(root, ComponentBackground::new("background", background))?;

    let font = screen.catalog().font(&screen.config().theme.font)?;
    screen.register_component(
        root,
        ComponentLabel::new("title", Coordinate2D::new(8, 6), 160, font.clone(), colors::from_rgb(0x40_40_40), "Machine"),
    )?;

    for (id, side, icon, header) in [
        ("info", LedgerSide::Left, "icons/info", "Information"),
        ("redstone", LedgerSide::Left, "icons/redstone", "Redstone"),
        ("power", LedgerSide::Right, "icons/power", "Energy"),
        ("upgrades", LedgerSide::Right, "icons/upgrades", "Upgrades"),
    ] {
        let ledger = screen.build_ledger(id, side, icon)?.with_header(header).with_max_size(110, 70);
        let key = screen.register_ledger(ledger)?;
        screen.register_component(
            key,
            ComponentLabel::new(format!("{id}_body"), Coordinate2D::new(8, 28), 90, font.clone(), colors::black(), header),
        )?;
    }

    screen.event_system_mut().register_handler(EventType::LedgerClicked, Box::new(EventLogger));
    screen.event_system_mut().register_handler(EventType::LedgerToggled, Box::new(EventLogger));
    screen.event_system_mut().register_handler(EventType::KeyTyped, Box::new(EventLogger));
    Ok(screen)
}

fn run(registry: &mut ScreenRegistry, script: &[Step]) -> Result<(), DemoError> {
    let mut input = InputProcessor::new();

    for step in script {
        match *step {
            Step::Click(x, y) => {
                input.update_mouse_position(x, y);
                input.update_mouse_button(MouseButton::Left, true);
                input.update_mouse_button(MouseButton::Left, false);
            }
            Step::Key(key) => input.key_typed(key),
            Step::Frames(count) => {
                for _ in 0..count {
                    let frame = input.finish_frame(1.0);
                    registry.process_input(&frame)?;
                    registry.dispatch_events();
                }
            }
        }
    }

    let mut recorder = CommandRecorder::new();
    registry.render(&mut recorder)?;

    log::info!("Final frame issued {} draw commands", recorder.commands().len());
    for command in recorder.commands() {
        log::debug!("  {:?}", command);
    }
    log::info!("Labels drawn: {:?}", recorder.labels());
    Ok(())
}

fn main() -> Result<(), DemoError> {
    logging::init_with_default("info")?;
    log::info!("Starting ledger demo...");

    let config = load_config()?;
    let mut registry = ScreenRegistry::new();
    registry.event_system_mut().register_handler(EventType::ScreenOpened, Box::new(EventLogger));
    registry.event_system_mut().register_handler(EventType::ScreenClosed, Box::new(EventLogger));
    registry.open(build_screen(config)?);

    // Root sits at (125, 37) on the default 427x240 screen
    let script = [
        Step::Frames(2),
        Step::Click(300, 50),
        Step::Frames(30),
        Step::Click(110, 50),
        Step::Key('e'),
        Step::Frames(10),
        Step::Click(300, 50),
        Step::Frames(30),
    ];
    run(&mut registry, &script)?;

    registry.close("machine")?;
    registry.dispatch_events();
    log::info!("Demo finished; {} screen(s) still open", registry.len());
    Ok(())
}
