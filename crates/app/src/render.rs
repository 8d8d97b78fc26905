//! Rendering for the dive view, status panel, and dive log.

use core::{Game, Pos, TileKind, content};
use macroquad::prelude::*;

use crate::app_loop::AppState;
use crate::format_seed;

const CELL: f32 = 22.0;
const MAP_ORIGIN_X: f32 = 20.0;
const MAP_ORIGIN_Y: f32 = 40.0;
const GLYPH_SIZE: f32 = 20.0;
const PANEL_X: f32 = 920.0;
const LINE_HEIGHT: f32 = 22.0;

const EXPLORED_DIM: Color = Color { r: 0.30, g: 0.32, b: 0.42, a: 1.0 };
const WATER_FLOOR: Color = Color { r: 0.35, g: 0.55, b: 0.75, a: 1.0 };

pub fn draw_frame(game: &Game, app: &AppState, run_seed: u64) {
    draw_map(game);
    draw_status_panel(game, run_seed);
    draw_dive_log(game, app);
    if game.status().game_over {
        draw_game_over_overlay();
    }
}

fn cell_origin(pos: Pos) -> (f32, f32) {
    (MAP_ORIGIN_X + pos.x as f32 * CELL, MAP_ORIGIN_Y + (pos.y as f32 + 1.0) * CELL)
}

fn draw_glyph(glyph: char, pos: Pos, color: Color) {
    let mut buffer = [0u8; 4];
    let (x, y) = cell_origin(pos);
    draw_text(glyph.encode_utf8(&mut buffer), x, y, GLYPH_SIZE, color);
}

fn tile_glyph(tile: TileKind) -> char {
    match tile {
        TileKind::Wall => '#',
        TileKind::Floor => '.',
        TileKind::Exit => '>',
    }
}

/// Visible cells render bright; explored-but-dark cells render dimmed
/// terrain only. Creatures and items exist on screen only while lit.
fn draw_map(game: &Game) {
    let state = game.state();
    let visibility = game.visibility();

    for y in 0..state.map.height as i32 {
        for x in 0..state.map.width as i32 {
            let pos = Pos { y, x };
            let lit = visibility.is_visible(pos);
            if !lit && !visibility.is_explored(pos) {
                continue;
            }
            let tile = state.map.tile_at(pos);
            let color = match (tile, lit) {
                (_, false) => EXPLORED_DIM,
                (TileKind::Wall, true) => GRAY,
                (TileKind::Floor, true) => WATER_FLOOR,
                (TileKind::Exit, true) => YELLOW,
            };
            draw_glyph(tile_glyph(tile), pos, color);
        }
    }

    for item in state.items.values() {
        if visibility.is_visible(item.pos) {
            draw_glyph(content::item_glyph(item.kind), item.pos, GREEN);
        }
    }
    for creature in state.creatures.values() {
        if visibility.is_visible(creature.pos) {
            draw_glyph(content::creature_glyph(creature.kind), creature.pos, RED);
        }
    }

    draw_glyph('@', state.player.pos, WHITE);
}

fn draw_status_panel(game: &Game, run_seed: u64) {
    let status = game.status();
    let player = &game.state().player;

    let mut lines = vec![
        format!("Depth {}: {}", status.depth, content::zone_name(status.depth)),
        format!("Oxygen:  {}/{}", player.hp, player.max_hp),
        format!("Harpoon: {}", player.attack_power),
        format!("Score:   {}", status.score),
        format!("Data:    {}", player.inventory.data_points),
        String::new(),
    ];
    for (kind, count) in player.inventory.stacks() {
        lines.push(format!("{} x{count}", content::item_name(kind)));
    }
    lines.push(String::new());
    lines.push("[wasd] swim  [1] tank".to_string());
    lines.push("[2] flare  [3] harpoon".to_string());
    lines.push("[r] restart".to_string());
    lines.push(format!("seed {}", format_seed(run_seed)));

    let mut text_y = MAP_ORIGIN_Y;
    for line in lines {
        draw_text(&line, PANEL_X, text_y, GLYPH_SIZE, WHITE);
        text_y += LINE_HEIGHT;
    }
}

fn draw_dive_log(game: &Game, app: &AppState) {
    let mut messages = game.recent_messages(5);
    if let Some(notice) = &app.notice {
        messages.push(notice.clone());
    }
    if messages.is_empty() {
        messages = vec![
            "Welcome to the abyss!".to_string(),
            "Use WASD or arrows to descend.".to_string(),
            "Swim into sea creatures to fight them.".to_string(),
            "Collect data and equipment, press 1/2 to use.".to_string(),
        ];
    }

    let log_y = MAP_ORIGIN_Y + 22.0 * CELL;
    draw_text("Dive Log", MAP_ORIGIN_X, log_y, GLYPH_SIZE, YELLOW);
    let mut text_y = log_y + LINE_HEIGHT;
    for message in messages {
        draw_text(&message, MAP_ORIGIN_X, text_y, 18.0, LIGHTGRAY);
        text_y += LINE_HEIGHT;
    }
}

fn draw_game_over_overlay() {
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::new(0.0, 0.0, 0.0, 0.6));
    let center_x = screen_width() / 2.0 - 170.0;
    let center_y = screen_height() / 2.0;
    draw_text("OXYGEN DEPLETED", center_x, center_y - 30.0, 36.0, RED);
    draw_text("MISSION FAILED", center_x, center_y + 10.0, 36.0, RED);
    draw_text("Press 'r' to restart", center_x, center_y + 50.0, 24.0, WHITE);
}
