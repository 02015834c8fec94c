//! Terminal rendering.
//!
//! The world is drawn into an RGB pixel buffer and flushed with unicode
//! half-blocks, two vertical pixels per terminal cell. Static screens
//! (menu, settings, pause, loading, game over) are plain crossterm text.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color as CColor, Print},
    terminal,
};

use crate::config;
use crate::game::Rect;
use crate::texture::Texture;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

const CLEAR: Rgb = Rgb(12, 12, 16);
const WHITE: Rgb = Rgb(255, 255, 255);
const SHADOW: Rgb = Rgb(30, 30, 30);

// ── Pixel buffer with half-block rendering ──────────────────────────────────

pub struct PixelBuf {
    w: usize,
    h: usize, // pixel height = terminal rows * 2
    px: Vec<Rgb>,
}

impl PixelBuf {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            px: vec![CLEAR; w * h],
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.px.clear();
        self.px.resize(w * h, CLEAR);
    }

    pub fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    /// Map a world-space rectangle (800x450 units) onto buffer pixels.
    fn to_device(&self, r: &Rect) -> (i32, i32, i32, i32) {
        let sx = self.w as f32 / config::WINDOW_WIDTH;
        let sy = self.h as f32 / config::WINDOW_HEIGHT;
        let x0 = (r.x * sx).floor() as i32;
        let y0 = (r.y * sy).floor() as i32;
        let x1 = ((r.x + r.width) * sx).ceil() as i32;
        let y1 = ((r.y + r.height) * sy).ceil() as i32;
        (x0, y0, x1 - x0, y1 - y0)
    }

    /// Nearest-neighbor blit of a texture into a world-space rectangle.
    /// Pixels below half alpha are treated as cut out.
    pub fn blit_scaled(&mut self, tex: &Texture, dest: Rect) {
        let (dx, dy, dw, dh) = self.to_device(&dest);
        if dw <= 0 || dh <= 0 || tex.width == 0 || tex.height == 0 {
            return;
        }
        for py in 0..dh {
            let v = ((py as f32 + 0.5) / dh as f32 * tex.height as f32) as u32;
            let v = v.min(tex.height - 1);
            for px in 0..dw {
                let u = ((px as f32 + 0.5) / dw as f32 * tex.width as f32) as u32;
                let u = u.min(tex.width - 1);
                let [r, g, b, a] = tex.rgba(u, v);
                if a >= 128 {
                    self.set(dx + px, dy + py, Rgb(r, g, b));
                }
            }
        }
    }

    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.h / 2;
        let mut prev_fg = Rgb(0, 0, 0);
        let mut prev_bg = Rgb(0, 0, 0);
        let mut need_fg = true;
        let mut need_bg = true;

        for row in 0..rows {
            for col in 0..self.w {
                let top = self.get(col, row * 2);
                let bot = self.get(col, row * 2 + 1);

                if top == bot {
                    if need_bg || prev_bg != top {
                        queue!(
                            out,
                            style::SetBackgroundColor(CColor::Rgb {
                                r: top.0,
                                g: top.1,
                                b: top.2
                            })
                        )?;
                        prev_bg = top;
                        need_bg = false;
                    }
                    queue!(out, style::Print(' '))?;
                } else {
                    if need_fg || prev_fg != top {
                        queue!(
                            out,
                            style::SetForegroundColor(CColor::Rgb {
                                r: top.0,
                                g: top.1,
                                b: top.2
                            })
                        )?;
                        prev_fg = top;
                        need_fg = false;
                    }
                    if need_bg || prev_bg != bot {
                        queue!(
                            out,
                            style::SetBackgroundColor(CColor::Rgb {
                                r: bot.0,
                                g: bot.1,
                                b: bot.2
                            })
                        )?;
                        prev_bg = bot;
                        need_bg = false;
                    }
                    queue!(out, style::Print('\u{2580}'))?; // ▀
                }
            }
            if row < rows.saturating_sub(1) {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                need_fg = true;
                need_bg = true;
            }
        }
        queue!(out, style::ResetColor)?;
        out.flush()
    }
}

// ── 3x5 bitmap digits ───────────────────────────────────────────────────────

#[rustfmt::skip]
const DIGITS: [[u8; 15]; 10] = [
    [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1], // 0
    [0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1], // 1
    [1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1], // 2
    [1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1], // 3
    [1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1], // 4
    [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1], // 5
    [1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1], // 6
    [1,1,1, 0,0,1, 0,1,0, 0,1,0, 0,1,0], // 7
    [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1], // 8
    [1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1], // 9
];

fn draw_digit(buf: &mut PixelBuf, x: i32, y: i32, d: u8, scale: i32, fg: Rgb) {
    let glyph = &DIGITS[d as usize];
    for row in 0..5 {
        for col in 0..3 {
            if glyph[row * 3 + col] == 1 {
                let px = x + col as i32 * scale;
                let py = y + row as i32 * scale;
                buf.fill_rect(px + 1, py + 1, scale, scale, SHADOW);
                buf.fill_rect(px, py, scale, scale, fg);
            }
        }
    }
}

fn draw_number(buf: &mut PixelBuf, cx: i32, y: i32, n: u32, scale: i32) {
    let s = n.to_string();
    let step = 4 * scale; // 3px glyph + 1px spacing
    let total_w = s.len() as i32 * step - scale;
    let start_x = cx - total_w / 2;
    for (i, ch) in s.chars().enumerate() {
        let d = ch as u8 - b'0';
        draw_digit(buf, start_x + i as i32 * step, y, d, scale, WHITE);
    }
}

/// Score HUD at the top center of the buffer.
pub fn draw_score(buf: &mut PixelBuf, score: u32) {
    let scale = ((buf.height() / 96).max(1)) as i32;
    let cx = buf.width() as i32 / 2;
    draw_number(buf, cx, 3 * scale, score, scale);
}

// ── Static screens ──────────────────────────────────────────────────────────

fn print_centered<W: Write>(out: &mut W, row: u16, color: CColor, text: &str) -> io::Result<()> {
    let (width, _) = terminal::size()?;
    let col = (width / 2).saturating_sub(text.chars().count() as u16 / 2);
    queue!(
        out,
        cursor::MoveTo(col, row),
        style::SetForegroundColor(color),
        Print(text)
    )
}

fn mid_row() -> io::Result<u16> {
    let (_, height) = terminal::size()?;
    Ok(height / 2)
}

pub fn draw_menu<W: Write>(out: &mut W) -> io::Result<()> {
    let cy = mid_row()?;
    print_centered(out, cy.saturating_sub(4), CColor::Yellow, config::WINDOW_TITLE)?;
    print_centered(out, cy.saturating_sub(1), CColor::White, "[Enter] Play")?;
    print_centered(out, cy, CColor::White, "[S] Settings")?;
    print_centered(out, cy + 1, CColor::White, "[Q] Exit")?;
    print_centered(
        out,
        cy + 4,
        CColor::DarkGrey,
        "In game: SPACE to jump, P to pause",
    )?;
    queue!(out, style::ResetColor)?;
    out.flush()
}

pub fn draw_game_over<W: Write>(out: &mut W, score: u32) -> io::Result<()> {
    let cy = mid_row()?;
    print_centered(out, cy.saturating_sub(3), CColor::Red, "Game Over")?;
    print_centered(out, cy, CColor::White, &format!("Your Score: {score}"))?;
    print_centered(out, cy + 3, CColor::DarkGrey, "[Enter] Back to menu")?;
    queue!(out, style::ResetColor)?;
    out.flush()
}

pub fn draw_paused<W: Write>(out: &mut W) -> io::Result<()> {
    let cy = mid_row()?;
    print_centered(out, cy, CColor::Yellow, "Paused")?;
    print_centered(out, cy + 2, CColor::DarkGrey, "[P] Resume")?;
    queue!(out, style::ResetColor)?;
    out.flush()
}

pub fn draw_settings<W: Write>(out: &mut W) -> io::Result<()> {
    let cy = mid_row()?;
    let audio = if config::DISABLE_AUDIO { "off" } else { "on" };
    print_centered(out, cy.saturating_sub(3), CColor::Yellow, "Settings")?;
    print_centered(out, cy.saturating_sub(1), CColor::White, &format!("Audio: {audio}"))?;
    print_centered(
        out,
        cy,
        CColor::White,
        &format!("Log file: {}", config::LOG_FILE),
    )?;
    print_centered(
        out,
        cy + 1,
        CColor::White,
        &format!("Target FPS: {}", config::FPS),
    )?;
    print_centered(out, cy + 4, CColor::DarkGrey, "[Esc] Back")?;
    queue!(out, style::ResetColor)?;
    out.flush()
}

pub fn draw_loading<W: Write>(out: &mut W) -> io::Result<()> {
    let cy = mid_row()?;
    print_centered(out, cy, CColor::White, "Loading...")?;
    print_centered(out, cy + 2, CColor::DarkGrey, "[Enter] Continue")?;
    queue!(out, style::ResetColor)?;
    out.flush()
}
