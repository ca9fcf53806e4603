pub mod app;
pub mod config;
pub mod definitions;
pub mod event;
pub mod expression;
pub mod logging;
pub mod tui;
pub mod ui;

use std::path::Path;

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, EventStream};
use futures_util::StreamExt;
use log::info;

use app::App;
use config::Config;
use event::Event;
use tui::{init, restore};
use ui::render;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load(Path::new(config::CONFIG_PATH))?;
    logging::init(&config.log)?;
    info!("starting clicalc");

    let mut tui = init()?;
    let mut app = App::new();

    let mut stream = EventStream::new();
    let mut interval = tokio::time::interval(config.tick_rate());

    while !app.should_quit {
        tui.draw(|frame| render(frame, &mut app))?;

        let event = tokio::select! {
            _ = interval.tick() => Event::Tick,
            maybe_event = stream.next() => {
                match maybe_event {
                    Some(Ok(CrosstermEvent::Key(key))) => Event::Key(key),
                    Some(Ok(CrosstermEvent::Mouse(mouse))) => Event::Mouse(mouse),
                    // Resize is handled implicitly by the next draw.
                    Some(Ok(_)) => continue,
                    // The event stream ended or errored; leave the loop.
                    Some(Err(_)) | None => break,
                }
            }
        };

        match event {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
        }
    }

    restore()?;
    info!("clicalc exited");
    Ok(())
}
