// Glass Tabs
// Demo application for the adaptive glass tab bar

// MODULES ------------------>>

mod render;

//--------------------------------------------------------<<
// IMPORTS ------------------>>

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::Rect,
    Terminal,
};
use std::fs::File;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Instant;

use glass_tabs::config_validation::{load_and_validate_config, ResolvedConfig};
use glass_tabs::constants::{FRAME_INTERVAL, LOG_FILE_ENV};
use glass_tabs::{
    AdaptiveTabState, AdaptiveTabView, Binding, CapabilityProbe, FloatingIndicatorState,
    RenderStrategy, TabBarPadding, TabEvent, TerminalProbe,
};
use render::{render_header, render_status, render_tab_content, HEADER_HEIGHT};

//--------------------------------------------------------<<

glass_tabs::tab_items! {
    /// Tabs shown by the demo
    pub enum DemoTab {
        Home => ("Home", "house.fill", "house"),
        Notifications => ("Notifications", "bell.fill", "bell"),
        Settings => ("Settings", "gearshape.fill", "gearshape"),
    }
}

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    init_logging()?;

    // Optional config path as the first argument
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let resolved = load_and_validate_config(config_path);

    // Probe once; the answer holds for the whole run
    let probe = resolved.style.resolve(&TerminalProbe::from_env());
    log::info!(
        "style {:?} -> {:?}",
        resolved.style,
        RenderStrategy::select(&probe)
    );

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter the alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let result = run(&mut terminal, &resolved, &probe);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Send log output to the file named by `GLASS_TABS_LOG`; without it nothing is logged
fn init_logging() -> Result<()> {
    let path = match std::env::var_os(LOG_FILE_ENV) {
        Some(path) => PathBuf::from(path),
        None => return Ok(()),
    };
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    resolved: &ResolvedConfig,
    probe: &dyn CapabilityProbe,
) -> Result<()> {
    let selection = Binding::new(DemoTab::Home);
    let mut tabs = AdaptiveTabState::new(selection.clone());
    let mut badge = FloatingIndicatorState::new(selection);
    let config = resolved.tab_bar;
    let padding = TabBarPadding::new(config.bar_height, probe);
    let application = &resolved.app.application;

    // ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                           MAIN LOOP                                            │
    // └────────────────────────────────────────────────────────────────────────────────────────────────┘

    loop {
        let now = Instant::now();

        terminal.draw(|f| {
            let area = f.area();
            let header = Rect {
                height: HEADER_HEIGHT.min(area.height),
                ..area
            };
            let status = Rect {
                y: area.bottom().saturating_sub(1).max(header.bottom()),
                height: area.height.saturating_sub(header.height).min(1),
                ..area
            };
            let body = Rect {
                y: header.bottom(),
                height: status.y - header.bottom(),
                ..area
            };

            let view = AdaptiveTabView::new(probe, |tab: DemoTab, area: Rect, buf: &mut Buffer| {
                render_tab_content(tab, area, buf, &padding)
            })
            .config(config)
            .at(now);
            f.render_stateful_widget(view, body, &mut tabs);

            let buf = f.buffer_mut();
            render_header(header, buf, &application.title, config, &mut badge, now);
            render_status(status, buf, &application.status_text);
        })?;

        // Poll at frame rate so slides and fades keep moving
        if event::poll(FRAME_INTERVAL)? {
            let event = event::read()?;
            if tabs.handle_event(&event, Instant::now()) == TabEvent::Quit {
                break;
            }
        }
    }

    Ok(())
}
