//! LED cube CLI - Play scripted animations from JSON scene descriptions.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use led_cube::{
    Animation, Color, Cube, CubeChange, CubeError, CubeObserver, Dimension, Light, ObserverHandle,
    Player, Shaper, State, point_factory,
};

/// Fixed tick length handed to the player; playback is frame-per-call.
const TICK_SECONDS: f32 = 1.0 / 60.0;

fn default_ticks() -> u64 {
    100
}

/// A playable scene: cube size plus the animation to run on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SceneConfig {
    /// Cube width in cells (X axis).
    width: u32,
    /// Cube height in cells (Y axis).
    height: u32,
    /// Cube depth in cells (Z axis).
    depth: u32,
    /// Number of player ticks to run.
    #[serde(default = "default_ticks")]
    ticks: u64,
    /// Restart the animation when it ends.
    #[serde(default)]
    repeat: bool,
    /// Animation to script.
    animation: AnimationSpec,
}

/// Stock animations buildable from a scene description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
enum AnimationSpec {
    /// Wipe every cell, cycling through a list of colors.
    Sweep { colors: Vec<Color> },
    /// Blink random LEDs on and off, optionally inset from the border.
    Sparkle {
        count: usize,
        seed: u64,
        color: Color,
        #[serde(default)]
        offset: u32,
    },
    /// Light one X plane at a time, clearing between planes.
    Scan { color: Color },
}

impl SceneConfig {
    fn dimension(&self) -> Result<Dimension, CubeError> {
        Dimension::new(self.width, self.height, self.depth)
    }

    fn build_animation(&self, dim: Dimension) -> Result<Animation, CubeError> {
        let shaper = Shaper::new(dim);
        let mut animation = Animation::new(State::new(dim));

        match &self.animation {
            AnimationSpec::Sweep { colors } => {
                let fallback = vec![Color::ON];
                let colors = if colors.is_empty() { &fallback } else { colors };
                for (i, point) in shaper.full_cube().into_iter().enumerate() {
                    animation.push_light(Light::with_color(point, colors[i % colors.len()]));
                }
            }
            AnimationSpec::Sparkle {
                count,
                seed,
                color,
                offset,
            } => {
                use rand::SeedableRng;
                let mut rng = rand::rngs::StdRng::seed_from_u64(*seed);
                for _ in 0..*count {
                    let point = point_factory::random_inset_with(&mut rng, dim, *offset)?;
                    animation.push_light(Light::with_color(point, *color));
                    animation.push_light(Light::new(point));
                }
            }
            AnimationSpec::Scan { color } => {
                for x in 0..dim.width() {
                    for point in &shaper.plane_x(x) {
                        animation.push_light(Light::with_color(*point, *color));
                    }
                    animation.push_state(State::new(dim));
                }
            }
        }

        Ok(animation)
    }
}

/// Observer that tallies change notifications.
#[derive(Default)]
struct ChangeCounter {
    cells: u64,
    repaints: u64,
}

impl CubeObserver for ChangeCounter {
    fn on_change(&mut self, change: &CubeChange) {
        match change {
            CubeChange::Cell(_) => self.cells += 1,
            CubeChange::Repaint => self.repaints += 1,
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <scene.json> [ticks]", args[0]);
        eprintln!();
        eprintln!("Play an LED cube animation from a JSON scene description.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  scene.json  Path to the scene description file");
        eprintln!("  ticks       Number of player ticks (overrides the scene)");
        eprintln!();
        eprintln!("An example scene is generated with --example.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_scene();
        return;
    }

    let scene_path = PathBuf::from(&args[1]);
    let scene_str = fs::read_to_string(&scene_path).unwrap_or_else(|e| {
        eprintln!("Error reading scene file: {}", e);
        std::process::exit(1);
    });
    let mut scene: SceneConfig = serde_json::from_str(&scene_str).unwrap_or_else(|e| {
        eprintln!("Error parsing scene: {}", e);
        std::process::exit(1);
    });
    if let Some(ticks) = args.get(2).and_then(|s| s.parse().ok()) {
        scene.ticks = ticks;
    }

    let dim = scene.dimension().unwrap_or_else(|e| {
        eprintln!("Error in scene dimensions: {}", e);
        std::process::exit(1);
    });
    let animation = scene.build_animation(dim).unwrap_or_else(|e| {
        eprintln!("Error building animation: {}", e);
        std::process::exit(1);
    });

    println!("LED Cube Player");
    println!("===============");
    println!("Cube: {}", dim);
    println!("Frames: {}", animation.len());
    println!("Ticks: {} (repeat: {})", scene.ticks, scene.repeat);
    println!();

    let cube = Rc::new(RefCell::new(Cube::new(dim)));
    let counter = Rc::new(RefCell::new(ChangeCounter::default()));
    let handle: ObserverHandle = counter.clone();
    cube.borrow_mut().add_observer(handle);

    let mut player = Player::new(Rc::clone(&cube));
    if scene.repeat {
        player.play(animation);
    } else {
        player.play_once(animation);
    }

    println!("Playing...");
    let start = Instant::now();
    for _ in 0..scene.ticks {
        player.update(TICK_SECONDS);
    }
    let elapsed = start.elapsed();

    let lit = {
        let cube = cube.borrow();
        Shaper::new(dim)
            .full_cube()
            .iter()
            .filter(|&&p| cube.get_color(p).is_ok_and(|c| c != Color::OFF))
            .count()
    };
    let counter = counter.borrow();

    println!();
    println!("Final state:");
    println!("  Lit cells: {}/{}", lit, dim.volume());
    println!("  Cell notifications: {}", counter.cells);
    println!("  Repaint notifications: {}", counter.repaints);
    println!(
        "Time: {:.2}ms ({:.1} ticks/s)",
        elapsed.as_secs_f32() * 1000.0,
        scene.ticks as f32 / elapsed.as_secs_f32()
    );
}

fn print_example_scene() {
    let scene = SceneConfig {
        width: 8,
        height: 8,
        depth: 8,
        ticks: 600,
        repeat: true,
        animation: AnimationSpec::Sparkle {
            count: 64,
            seed: 42,
            color: Color::GREEN,
            offset: 1,
        },
    };

    println!("Example scene (scene.json):");
    println!("{}", serde_json::to_string_pretty(&scene).unwrap());
}
