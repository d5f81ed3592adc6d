mod camera;
mod globe;
mod state;
use state::State;

use ggez::{
    conf::{Conf, WindowMode, WindowSetup},
    event, ContextBuilder, GameError, GameResult,
};
use log::info;

pub fn main() -> GameResult {
    env_logger::init();

    let path_to_scene = {
        let args: Vec<String> = std::env::args().collect();
        if args.len() == 2 {
            args[1].clone()
        } else {
            "systems/default.json5".to_string()
        }
    };
    let contents = std::fs::read_to_string(&path_to_scene)?;
    let scene = loader::load(contents)
        .map_err(|why| GameError::ResourceLoadError(format!("{}: {}", path_to_scene, why)))?;
    info!("Loaded {}", path_to_scene);

    let c = Conf::new();
    let (ref mut ctx, ref mut event_loop) = ContextBuilder::new("galaxy_viewer", "gamma-delta")
        .conf(c)
        .window_setup(WindowSetup {
            title: "Solar system in a galaxy!".to_owned(),
            ..Default::default()
        })
        .window_mode(WindowMode {
            resizable: true,
            ..Default::default()
        })
        .build()?;

    let state = &mut State::new(ctx, scene)?;

    event::run(ctx, event_loop, state)
}
