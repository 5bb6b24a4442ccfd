use macroquad::prelude::{BLACK, Conf, clear_background, get_frame_time, next_frame, screen_height, screen_width};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{error, info, warn};

use life_badge::{
    LifeConfig, Session,
    input,
    rendering::{self, CellLayout, MacroquadSink},
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn window_conf(config: &LifeConfig) -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: config.display_width as i32,
        window_height: config.display_height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

fn main() {
    init_tracing();

    let config = match LifeConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            warn!(%err, "falling back to default configuration");
            LifeConfig::default()
        }
    };
    let source = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    macroquad::Window::from_config(window_conf(&config), run(config, source));
}

async fn run(config: LifeConfig, source: StdRng) {
    let layout_px = (config.pixel_width as f32, config.pixel_height as f32);
    let mut session = match Session::new(config, source) {
        Ok(session) => session,
        Err(err) => {
            error!(%err, "could not start session");
            return;
        }
    };
    info!(dimensions = ?session.engine().dimensions(), "session started");

    loop {
        if !input::poll_commands().into_iter().all(|command| session.apply(command)) {
            break;
        }

        if let Err(err) = session.resize_display(screen_width(), screen_height()) {
            warn!(%err, "ignoring display resize");
        }

        session.update(get_frame_time());

        clear_background(BLACK);
        let layout = CellLayout {
            columns: session.engine().dimensions().0,
            pixel_width: layout_px.0,
            pixel_height: layout_px.1,
        };
        rendering::draw_grid(
            session.engine().current(),
            layout,
            session.colour().rgba(),
            &mut MacroquadSink,
        );

        next_frame().await;
    }

    info!(reseeds = session.reseeds(), "session ended");
}
