//! Rendering layer; all terminal I/O lives here.
//!
//! Each function receives a mutable writer and a read-only view of the
//! wave (its drawable enumeration plus a few HUD queries).  No game
//! logic is performed; this module only scales world coordinates to
//! terminal cells and translates them into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use alien_invaders::entities::BoltOrigin;
use alien_invaders::wave::{DrawKind, Drawable, Wave};

// ── Screen states (owned by the controller, drawn here) ──────────────────────

/// What the outer controller wants on screen this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Active,
    /// Ship lost with lives remaining; waiting for the continue key.
    Paused,
    Complete {
        won: bool,
    },
}

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_TITLE: Color = Color::Cyan;
const C_HUD_LIVES: Color = Color::Red;
const C_SHIP: Color = Color::White;
const C_ALIEN: [Color; 3] = [Color::Green, Color::Red, Color::Magenta];
const C_BOLT_PLAYER: Color = Color::Cyan;
const C_BOLT_FLEET: Color = Color::Magenta;
const C_DEFENSE_LINE: Color = Color::DarkGrey;
const C_BANNER: Color = Color::Blue;
const C_HINT: Color = Color::DarkGrey;

/// Glyphs for the three alien looks, indexed by sprite.
const ALIEN_GLYPHS: [&str; 3] = ["«▼»", "(◎)", "{ö}"];

// ── World → cell mapping ──────────────────────────────────────────────────────

/// Maps world coordinates (y up, origin bottom-left) onto the terminal
/// grid, reserving the HUD row at the top and the hint row at the
/// bottom.
struct Viewport {
    cols: u16,
    play_rows: u16,
    scale_x: f32,
    scale_y: f32,
    world_height: f32,
}

impl Viewport {
    fn new(cols: u16, rows: u16, world_width: f32, world_height: f32) -> Viewport {
        let play_rows = rows.saturating_sub(2).max(1);
        Viewport {
            cols,
            play_rows,
            scale_x: f32::from(cols.max(1)) / world_width,
            scale_y: f32::from(play_rows) / world_height,
            world_height,
        }
    }

    /// Cell for a world position; the world's y axis points up, the
    /// terminal's row axis points down.
    fn cell(&self, x: f32, y: f32) -> (u16, u16) {
        let col = (x * self.scale_x) as u16;
        let row = ((self.world_height - y) * self.scale_y) as u16;
        (col.min(self.cols.saturating_sub(1)), 1 + row.min(self.play_rows - 1))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, wave: &Wave, screen: Screen) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (cols, rows) = terminal::size()?;
    let view = Viewport::new(
        cols,
        rows,
        wave.config().game_width,
        wave.config().game_height,
    );

    draw_hud(out, wave, cols)?;
    for drawable in wave.drawables() {
        draw_entity(out, &view, &drawable)?;
    }
    match screen {
        Screen::Welcome => draw_banner(out, cols, rows, "ALIEN INVADERS", "Press S to Play")?,
        Screen::Paused => draw_banner(out, cols, rows, "SHIP DOWN", "Press S to Continue")?,
        Screen::Complete { won: true } => {
            draw_banner(out, cols, rows, "WOO, YOU'VE WON! :D", "R - New Wave  Q - Quit")?
        }
        Screen::Complete { won: false } => {
            draw_banner(out, cols, rows, "YOU'VE LOST! :(", "R - New Wave  Q - Quit")?
        }
        Screen::Active => {}
    }
    draw_controls_hint(out, rows)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, wave: &Wave, cols: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_TITLE))?;
    out.queue(Print("★ ALIEN INVADERS ★"))?;

    let hearts: String = "♥".repeat(wave.lives() as usize);
    let lives_str = format!("Lives:{hearts}");
    let rx = cols.saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_entity<W: Write>(
    out: &mut W,
    view: &Viewport,
    drawable: &Drawable,
) -> std::io::Result<()> {
    let (col, row) = view.cell(drawable.x, drawable.y);
    match drawable.kind {
        DrawKind::Ship => {
            out.queue(style::SetForegroundColor(C_SHIP))?;
            out.queue(cursor::MoveTo(col.saturating_sub(1), row))?;
            out.queue(Print("/▲\\"))?;
        }
        DrawKind::Alien { sprite } => {
            let look = sprite % ALIEN_GLYPHS.len();
            out.queue(style::SetForegroundColor(C_ALIEN[look]))?;
            out.queue(cursor::MoveTo(col.saturating_sub(1), row))?;
            out.queue(Print(ALIEN_GLYPHS[look]))?;
        }
        DrawKind::Bolt { origin } => {
            let (glyph, color) = match origin {
                BoltOrigin::Player => ("║", C_BOLT_PLAYER),
                BoltOrigin::Fleet => ("↓", C_BOLT_FLEET),
            };
            out.queue(style::SetForegroundColor(color))?;
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print(glyph))?;
        }
        DrawKind::DefenseLine => {
            out.queue(style::SetForegroundColor(C_DEFENSE_LINE))?;
            out.queue(cursor::MoveTo(0, row))?;
            out.queue(Print("─".repeat(view.cols as usize)))?;
        }
    }
    Ok(())
}

// ── Banners ───────────────────────────────────────────────────────────────────

fn draw_banner<W: Write>(
    out: &mut W,
    cols: u16,
    rows: u16,
    title: &str,
    hint: &str,
) -> std::io::Result<()> {
    let cx = cols / 2;
    let cy = rows / 2;

    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(1),
    ))?;
    out.queue(style::SetForegroundColor(C_BANNER))?;
    out.queue(Print(title))?;

    out.queue(cursor::MoveTo(
        cx.saturating_sub(hint.chars().count() as u16 / 2),
        cy + 1,
    ))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}
