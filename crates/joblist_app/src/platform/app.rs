use std::sync::Arc;

use engine_logging::{engine_info, engine_warn};
use joblist_core::RouteData;
use joblist_engine::{JobListView, RefreshSignal, RestJobProvider, ViewServices};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::config::AppConfig;
use super::services::{RenderFlag, TerminalNotifier, TerminalRouter};
use super::ui::commands::{parse_command, Command, HELP};
use super::ui::render::render;

enum Event {
    Feed { alive: bool },
    Input(std::io::Result<Option<String>>),
}

pub async fn run_app(config: AppConfig, route: RouteData) -> anyhow::Result<()> {
    let provider = RestJobProvider::new(&config.base_url, config.provider_settings())?;
    engine_info!(
        "Polling {} every {}ms",
        provider.overview_url(),
        config.refresh_interval_ms
    );

    let refresh = RefreshSignal::new();
    let render_flag = Arc::new(RenderFlag::default());
    let services = ViewServices {
        provider: Arc::new(provider),
        refresh: refresh.clone(),
        notifier: Arc::new(TerminalNotifier),
        router: Arc::new(TerminalRouter),
        render: render_flag.clone(),
    };

    let mut view = JobListView::new(config.view_inputs(), services);
    view.on_init(&route);
    let ticker = refresh.spawn_interval(config.refresh_interval());

    print!("{}", render(&view.view()));
    println!("{HELP}");
    render_flag.take();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let event = tokio::select! {
            alive = view.next() => Event::Feed { alive },
            line = lines.next_line() => Event::Input(line),
        };

        match event {
            Event::Feed { alive: false } => {
                engine_warn!("Job feed ended");
                break;
            }
            Event::Feed { alive: true } => {}
            Event::Input(Err(err)) => return Err(err.into()),
            Event::Input(Ok(None)) => break,
            Event::Input(Ok(Some(line))) => match parse_command(&line) {
                Command::Open(number) => {
                    let rows = view.view().rows;
                    match number.checked_sub(1).and_then(|index| rows.get(index)) {
                        Some(row) => view.navigate_to_job(&row.record),
                        None => println!("No row {number}"),
                    }
                }
                Command::Sort(column, direction) => view.set_sort(column, direction),
                Command::Page(page_size) => view.set_page_size(page_size),
                Command::Refresh => {
                    refresh.tick();
                }
                Command::Help => println!("{HELP}"),
                Command::Quit => break,
                Command::Unknown(text) => println!("Unknown command {text:?}. {HELP}"),
            },
        }

        if render_flag.take() {
            print!("{}", render(&view.view()));
        }
    }

    view.on_destroy();
    ticker.cancel();
    engine_info!("Job list closed");
    Ok(())
}
