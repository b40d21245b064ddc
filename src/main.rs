use macroquad::logging::info;
use macroquad::prelude::*;
use life_editor::{
    AppConfig, AppError, GameState, Viewport,
    input, options::Args, rendering, ui,
};

fn window_conf(config: &AppConfig) -> Conf {
    Conf {
        window_title: config.window.title.clone(),
        window_width: config.window.width,
        window_height: config.window.height,
        window_resizable: true,
        ..Default::default()
    }
}

fn main() {
    match setup() {
        Ok(Some((config, state))) => {
            macroquad::Window::from_config(window_conf(&config), run(state));
        }
        Ok(None) => {}
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

/// Read arguments and config, then build the starting state.
/// Returns `None` when only help was requested.
fn setup() -> Result<Option<(AppConfig, GameState)>, AppError> {
    let Some(args) = Args::from_env("life_editor")? else {
        return Ok(None);
    };
    let config = args.settings()?;
    let board = args.initial_board(&config)?;
    let state = GameState::new(board, &config.simulation);
    Ok(Some((config, state)))
}

async fn run(mut state: GameState) {
    let (rows, cols) = state.board.dimensions();
    info!(
        "starting {}x{} board at {} gen/s",
        rows, cols, state.updates_per_second
    );
    let mut rng = ::rand::rng();

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();
        let viewport = Viewport::fit(ui::grid_area_width(), ui::grid_area_height(), rows, cols);

        // Process input
        state = input::process_button_clicks(state, &buttons, mouse_pos, &mut rng);
        input::handle_mouse_paint(&mut state, &viewport, mouse_pos);
        state = input::handle_pattern_stamp(state, &viewport, mouse_pos);
        state = input::process_keyboard_input(state, &mut rng);

        // Update game state
        state = state.tick(get_frame_time());

        // Render
        clear_background(BLACK);
        rendering::draw_board(&state.board, &viewport);
        rendering::draw_hover(&state.board, &viewport, mouse_pos);
        rendering::draw_controls(&state, &buttons, mouse_pos);

        next_frame().await;
    }
}
