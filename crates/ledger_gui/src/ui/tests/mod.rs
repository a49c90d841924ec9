//! Scenario tests across the component tree, ledgers and screens

mod support;
mod dispatch_scenarios;
mod render_scenarios;
