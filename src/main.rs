/// Overlay preview entry point for native builds
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use image_overlay::RendererConfig;
    use image_overlay::scene::Scene;

    let mut args = std::env::args().skip(1);
    let Some(scene_path) = args.next().map(PathBuf::from) else {
        eprintln!("Usage: image-overlay-preview <scene.json> [config.json]");
        std::process::exit(2);
    };

    let config = match args.next() {
        Some(path) => match RendererConfig::load(&PathBuf::from(path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Config error: {}", e);
                std::process::exit(1);
            }
        },
        None => RendererConfig::default(),
    };

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .init();

    let scene = match Scene::load(&scene_path) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Scene error: {}", e);
            std::process::exit(1);
        }
    };

    let view = pollster::block_on(scene.render(config));
    match serde_json::to_string_pretty(&view) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Output error: {}", e);
            std::process::exit(1);
        }
    }
}

// The preview is a native tool; WASM hosts drive the renderer directly
#[cfg(target_arch = "wasm32")]
fn main() {}
