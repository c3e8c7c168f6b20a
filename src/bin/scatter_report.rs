//! 无界面运行：采样一组锚点，让指针横扫视口，打印间距与位移统计

use egui::Pos2;
use ukiyo::layout::{EngineConfig, FrameFlag, LayoutEngine};

const FRAMES: u32 = 600;
const FPS: f64 = 60.0;

fn main() {
    init_logging();

    let config = EngineConfig::glyphs(1280.0, 720.0).with_count(60).with_seed(2024);
    let flag = FrameFlag::new();
    let mut engine = match LayoutEngine::new(&config, flag.clone()) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let anchors: Vec<Pos2> = engine.items().iter().map(|item| item.anchor()).collect();
    let nearest = nearest_distances(&anchors);
    let min = nearest.iter().copied().fold(f32::INFINITY, f32::min);
    let mean = nearest.iter().sum::<f32>() / nearest.len().max(1) as f32;

    println!("Anchors:");
    println!("  Requested: {}", config.count);
    println!("  Placed: {}", anchors.len());
    println!("  Min distance: {:.2}", config.min_distance());
    println!("  Nearest neighbour min: {:.2}", min);
    println!("  Nearest neighbour mean: {:.2}", mean);

    // 指针沿视口中线从左向右扫过
    let pointer = engine.pointer();
    engine.start();
    let mut frame = 0;
    while flag.take() && frame < FRAMES {
        let progress = frame as f32 / FRAMES as f32;
        pointer.move_to(Pos2::new(progress * config.width, config.height * 0.5));
        engine.tick(frame as f64 / FPS);
        frame += 1;
    }
    pointer.leave();
    engine.stop();

    let displacements: Vec<f32> = engine
        .items()
        .iter()
        .map(|item| (item.position() - item.anchor()).length())
        .collect();
    let max = displacements.iter().copied().fold(0.0, f32::max);
    let mean = displacements.iter().sum::<f32>() / displacements.len().max(1) as f32;

    println!("Motion after {} frames:", engine.ticks());
    println!("  Max displacement: {:.2}", max);
    println!("  Mean displacement: {:.2}", mean);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    env_logger::init();
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {}

fn nearest_distances(points: &[Pos2]) -> Vec<f32> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            points
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, q)| p.distance(*q))
                .fold(f32::INFINITY, f32::min)
        })
        .collect()
}
