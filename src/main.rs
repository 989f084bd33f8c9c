//! Demo game: a movable dot, two sine-animated rectangles, and a line
//! connecting their centers. Arrow keys move the dot, `q` quits.

use anyhow::Result;

use crossterm::event::KeyCode;

use gridframe::raster::{self, Orientation, RectGlyphs};
use gridframe::{Canvas, FrameLoop, Game, InputMode, LoopCtl, RedrawPolicy};

const FPS: f32 = 30.0;
const RECT_W: i32 = 10;
const RECT_H: i32 = 5;

struct ExampleGame {
    title: &'static str,
    phase: f32,
    player_x: i32,
    player_y: i32,
    rect_1_x: i32,
    rect_1_y: i32,
    rect_2_x: i32,
    rect_2_y: i32,
}

impl ExampleGame {
    fn new() -> Self {
        Self {
            title: "EXAMPLE GAME",
            phase: 1.0,
            player_x: 21,
            player_y: 21,
            rect_1_x: 20,
            rect_1_y: 10,
            rect_2_x: 50,
            rect_2_y: 10,
        }
    }
}

impl Game for ExampleGame {
    fn load(&mut self, ctl: &mut LoopCtl) {
        ctl.set_fps(FPS);
    }

    fn update(&mut self, ctl: &mut LoopCtl) {
        self.phase += 2.0 / ctl.fps();
        self.rect_1_y = (self.phase.sin() * 5.0) as i32 + 10;
        self.rect_2_x = (self.phase.sin() * 7.0) as i32 + 50;
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        let glyphs = RectGlyphs::default();
        let mid = i32::from(canvas.width()) / 2;

        raster::text(
            canvas,
            mid - self.title.len() as i32 / 2,
            3,
            self.title,
            Orientation::Horizontal,
        );
        raster::text(canvas, 5, 21, "You are here ->", Orientation::Horizontal);
        raster::text(
            canvas,
            5,
            22,
            "Use arrow keys to move, q to quit",
            Orientation::Horizontal,
        );

        raster::rect(canvas, self.rect_1_x, self.rect_1_y, RECT_W, RECT_H, &glyphs);
        raster::rect(canvas, self.rect_2_x, self.rect_2_y, RECT_W, RECT_H, &glyphs);
        raster::line(
            canvas,
            self.rect_1_x + RECT_W / 2,
            self.rect_1_y + RECT_H / 2,
            self.rect_2_x + RECT_W / 2,
            self.rect_2_y + RECT_H / 2,
            raster::DEFAULT_GLYPH,
        );
        raster::point(canvas, self.player_x, self.player_y, 'O');
    }

    fn on_key_press(&mut self, key: KeyCode, ctl: &mut LoopCtl) {
        match key {
            KeyCode::Up => self.player_y -= 1,
            KeyCode::Down => self.player_y += 1,
            KeyCode::Left => self.player_x -= 1,
            KeyCode::Right => self.player_x += 1,
            KeyCode::Char('q') => ctl.stop(),
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let mut game = ExampleGame::new();
    let mut frame_loop = FrameLoop::new(RedrawPolicy::OnChange, InputMode::EventPush);
    frame_loop.run(&mut game)
}
