//! Top-down minigolf played on the `rputt` collision kernel.
//!
//! Click to strike the white ball toward the cursor once everything has come
//! to rest. Press `R` to start the hole again, `Escape` to quit.

use rputt::library::*;
use rputt::shuffle::shuffle_columns;
use rputt::{Ball, Course, PhysicsConfig, Wall};
use sdl2::event::Event;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::ttf::Font;
use sdl2::video::Window;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Window title displayed in the title bar
const TITLE: &str = "rputt";
const WINDOW_WIDTH: u32 = 1000;
const WINDOW_HEIGHT: u32 = 560;
/// Pixels per world unit
const SCALE: f32 = 5.0;
const BACKGROUND: Color = Color::RGB(16, 92, 40);
const FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";
/// Where the player's ball starts
const TEE: [f32; 2] = [-80.0, 0.0];
const HOLE: [f32; 2] = [80.0, 0.0];
/// Velocity per world unit of drag between ball and cursor
const STRIKE_POWER: f32 = 1.5;
const MAX_STRIKE: f32 = 90.0;
/// Obstacle balls drawn from the candidate slots each round
const OBSTACLE_COUNT: usize = 4;
const PLAYER: usize = 0;

fn to_abgr(color: Color) -> Color {
    Color::RGBA(color.a, color.b, color.g, color.r)
}

fn to_screen(p: [f32; 2]) -> (i16, i16) {
    let x = WINDOW_WIDTH as f32 / 2.0 + p[0] * SCALE;
    let y = WINDOW_HEIGHT as f32 / 2.0 + p[1] * SCALE;
    (x as i16, y as i16)
}

fn to_world(x: i32, y: i32) -> [f32; 2] {
    [
        (x as f32 - WINDOW_WIDTH as f32 / 2.0) / SCALE,
        (y as f32 - WINDOW_HEIGHT as f32 / 2.0) / SCALE,
    ]
}

/// Builds the course: border, two V-shaped bumpers, a baffle in front of the
/// hole, and a random subset of obstacle balls.
fn set_up(config: PhysicsConfig) -> Result<(Course, Vec<Color>), String> {
    let mut course = Course::new(config, HOLE).map_err(|e| e.to_string())?;
    course.add_border([-95.0, -50.0], [95.0, 50.0]).map_err(|e| e.to_string())?;

    let walls = [
        Wall::new([-30.0, -20.0], [-20.0, -30.0]),
        Wall::new([-30.0, -20.0], [-40.0, -30.0]),
        Wall::new([10.0, 20.0], [20.0, 30.0]),
        Wall::new([10.0, 20.0], [0.0, 30.0]),
        Wall::new([60.0, -12.0], [60.0, 12.0]),
    ];
    for wall in walls {
        course.add_wall(wall).map_err(|e| e.to_string())?;
    }

    let mut colors = vec![Color::WHITE];
    course.add_ball(Ball::new(TEE, None)).map_err(|e| e.to_string())?;

    let mut slots: Vec<[f32; 2]> = vec![
        [-40.0, 10.0],
        [-10.0, -5.0],
        [0.0, 5.0],
        [25.0, -15.0],
        [35.0, 10.0],
        [45.0, -30.0],
        [70.0, 20.0],
        [70.0, -20.0],
    ];
    let mut slot_colors = vec![
        Color::RED,
        Color::BLUE,
        Color::YELLOW,
        Color::CYAN,
        Color::MAGENTA,
        Color::RGB(255, 128, 0),
        Color::RGB(128, 0, 255),
        Color::RGB(0, 0, 0),
    ];
    shuffle_columns(&mut rand::rng(), &mut [&mut slots, &mut slot_colors])
        .map_err(|e| e.to_string())?;
    for (slot, color) in slots.into_iter().zip(slot_colors).take(OBSTACLE_COUNT) {
        course.add_ball(Ball::new(slot, None)).map_err(|e| e.to_string())?;
        colors.push(color);
    }
    Ok((course, colors))
}

fn draw_course(course: &Course, colors: &[Color], canvas: &mut Canvas<Window>) -> Result<(), String> {
    let radius = course.config().ball_radius;
    let (hx, hy) = to_screen(course.hole());
    canvas.filled_circle(hx, hy, (course.config().hole_radius * SCALE) as i16, to_abgr(Color::BLACK))?;

    for wall in course.walls() {
        let (x1, y1) = to_screen(wall.a);
        let (x2, y2) = to_screen(wall.b);
        canvas.thick_line(x1, y1, x2, y2, 4, to_abgr(Color::RGB(120, 72, 32)))?;
    }

    for (ball, color) in course.balls().iter().zip(colors) {
        if ball.sunk {
            continue;
        }
        let (x, y) = to_screen(ball.position);
        canvas.filled_circle(x, y, (radius * SCALE) as i16, to_abgr(*color))?;
        // Marker on the pole that started out facing up.
        let top = ball.orientation.rotate_vector([0.0, radius, 0.0]);
        if top[1] > 0.0 {
            let (mx, my) = to_screen(add(ball.position, [top[0], top[2]]));
            canvas.filled_circle(mx, my, 1, to_abgr(Color::GREY))?;
        }
    }
    Ok(())
}

fn draw_strokes(canvas: &mut Canvas<Window>, font: &Font, strokes: u32) -> Result<(), String> {
    let surface = font
        .render(&format!("Strokes: {strokes}"))
        .blended(Color::WHITE)
        .map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let texture = texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| e.to_string())?;
    let query = texture.query();
    canvas.copy(&texture, None, Some(Rect::new(12, 8, query.width, query.height)))
}

/// Runs one frame: physics step, scoring, rendering.
fn main_loop(
    course: &mut Course,
    colors: &[Color],
    strokes: &mut u32,
    canvas: &mut Canvas<Window>,
    font: Option<&Font>,
    dt: f32,
) -> Result<(), String> {
    let report = course.step(dt);
    if report.sunk.contains(&PLAYER) {
        let position = course.ball(PLAYER).map_err(|e| e.to_string())?.position;
        if distance_sq(position, HOLE) <= course.config().hole_radius.powi(2) {
            info!(strokes = *strokes, "holed out");
            *strokes = 0;
        } else {
            info!("out of bounds, one stroke penalty");
            *strokes += 1;
        }
        course.place_ball(PLAYER, TEE).map_err(|e| e.to_string())?;
    }

    canvas.set_draw_color(BACKGROUND);
    canvas.clear();
    draw_course(course, colors, canvas)?;
    if let Some(font) = font {
        draw_strokes(canvas, font, *strokes)?;
    }
    canvas.present();
    Ok(())
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt::init();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let ttf_context = sdl2::ttf::init().map_err(|e| e.to_string())?;

    let window = video_subsystem
        .window(TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    let font = match ttf_context.load_font(FONT_PATH, 20) {
        Ok(font) => Some(font),
        Err(e) => {
            warn!("no stroke counter, failed to load {FONT_PATH}: {e}");
            None
        }
    };
    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path).map_err(|e| format!("{path}: {e}"))?;
            PhysicsConfig::from_json_str(&json).map_err(|e| format!("{path}: {e}"))?
        }
        None => PhysicsConfig::default(),
    };
    info!(?config, "starting course");

    let (mut course, mut colors) = set_up(config)?;
    let mut strokes = 0;
    let mut last_frame_time = Instant::now();
    let mut event_pump = sdl_context.event_pump()?;

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::R),
                    ..
                } => {
                    (course, colors) = set_up(config)?;
                    strokes = 0;
                }
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } if course.is_at_rest() => {
                    let ball = course.ball(PLAYER).map_err(|e| e.to_string())?.position;
                    let drag = scale(find_vector(ball, to_world(x, y)), STRIKE_POWER);
                    let impulse = set_length(drag, get_magnitude(drag).min(MAX_STRIKE));
                    course.strike(PLAYER, impulse).map_err(|e| e.to_string())?;
                    strokes += 1;
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame_time).as_secs_f32();
        last_frame_time = now;

        main_loop(&mut course, &colors, &mut strokes, &mut canvas, font.as_ref(), dt)?;

        // Target 60 FPS
        ::std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }
    Ok(())
}
