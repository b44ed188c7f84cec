//! Turns the session context into page markup.
//!
//! The round area is rebuilt from scratch whenever it changes; the feedback
//! line, next button and tooltip are static elements updated in place.

use playpen_core::catalog::ItemColor;
use playpen_core::round::matching::{Tile, TileFace};
use playpen_core::round::{ChoiceOption, OptionStatus};

#[cfg(target_family = "wasm")]
use playpen_core::controller::SessionContext;
#[cfg(target_family = "wasm")]
use playpen_core::round::{ChoiceRound, MatchRound, Round};
#[cfg(target_family = "wasm")]
use wasm_bindgen::JsValue;

#[cfg(target_family = "wasm")]
use crate::app::Redraw;
#[cfg(target_family = "wasm")]
use crate::diag;

pub const CONTAINER_ID: &str = "game-container";
pub const NEXT_BUTTON_ID: &str = "next-button";
pub const FEEDBACK_ID: &str = "feedback";
pub const TOOLTIP_ID: &str = "emoji-tooltip";

/// Class list of a choice button.
pub fn option_class(option: &ChoiceOption) -> String {
    let mut class = String::from("option");
    if option.swatch.is_some() {
        class.push_str(" color-option");
    }
    match option.status {
        OptionStatus::Idle => {},
        OptionStatus::Correct => class.push_str(" correct"),
        OptionStatus::Shaking => class.push_str(" shake"),
    }
    class
}

pub fn face_kind(face: &TileFace) -> &'static str {
    match face {
        TileFace::Letter(_) => "letter",
        TileFace::Pictogram(_) => "image",
        TileFace::Swatch(_) => "color",
    }
}

/// Class list of a matching tile.
pub fn tile_class(tile: &Tile, selected: bool) -> String {
    let mut class = format!("match-item {}", face_kind(&tile.face));
    if selected {
        class.push_str(" selected");
    }
    if tile.matched {
        class.push_str(" matched");
    }
    if tile.shaking {
        class.push_str(" shake");
    }
    class
}

/// Element id of a board column, named after what its tiles show.
pub fn column_id(tiles: &[Tile]) -> &'static str {
    match tiles.first().map(|t| &t.face) {
        Some(TileFace::Letter(_)) => "letters-col",
        Some(TileFace::Pictogram(_)) => "images-col",
        Some(TileFace::Swatch(_)) => "colors-col",
        None => "empty-col",
    }
}

pub fn pictogram_row(pictogram: &str, repeat: usize) -> String {
    pictogram.repeat(repeat)
}

pub fn swatch_style(color: ItemColor) -> String {
    format!("background-color: {}", color.css_value())
}

/// Redraw whatever `redraw` says went stale.
#[cfg(target_family = "wasm")]
pub fn draw(ctx: &SessionContext, redraw: Redraw) {
    if redraw == Redraw::Nothing {
        return;
    }
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if redraw == Redraw::Everything
        && let Err(e) = draw_round(&document, ctx.round())
    {
        diag::console_warn!("Failed to draw round: {e:?}");
    }
    draw_chrome(&document, ctx);
}

#[cfg(target_family = "wasm")]
fn element(
    document: &web_sys::Document,
    tag: &str,
    class: &str,
) -> Result<web_sys::Element, JsValue> {
    let el = document.create_element(tag)?;
    el.set_class_name(class);
    Ok(el)
}

#[cfg(target_family = "wasm")]
fn draw_round(document: &web_sys::Document, round: Option<&Round>) -> Result<(), JsValue> {
    let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
        return Ok(());
    };
    container.set_inner_html("");
    let Some(round) = round else {
        return Ok(());
    };

    let heading = element(document, "h2", "prompt")?;
    heading.set_text_content(Some(round.prompt()));
    container.append_child(&heading)?;

    match round {
        Round::Choice(choice) => draw_choice(document, &container, choice),
        Round::Match(board) => draw_board(document, &container, board),
    }
}

#[cfg(target_family = "wasm")]
fn draw_choice(
    document: &web_sys::Document,
    container: &web_sys::Element,
    round: &ChoiceRound,
) -> Result<(), JsValue> {
    let area = element(document, "div", "game-area")?;
    if round.repeat == 1 {
        area.class_list().add_1("single")?;
    }
    area.set_text_content(Some(&pictogram_row(&round.subject.pictogram, round.repeat)));
    area.set_attribute("data-name", &round.subject.name)?;
    area.set_attribute("title", &round.subject.name)?;
    container.append_child(&area)?;

    let row_class = if round.options.iter().any(|o| o.swatch.is_some()) {
        "options color-options"
    } else {
        "options"
    };
    let row = element(document, "div", row_class)?;
    for option in &round.options {
        let button = element(document, "button", &option_class(option))?;
        button.set_attribute("data-answer", &option.value)?;
        match option.swatch {
            Some(color) => {
                let swatch = element(document, "div", "color-swatch")?;
                swatch.set_attribute("style", &swatch_style(color))?;
                button.append_child(&swatch)?;
                let label = element(document, "span", "color-name")?;
                label.set_text_content(Some(&option.label));
                button.append_child(&label)?;
            },
            None => button.set_text_content(Some(&option.label)),
        }
        row.append_child(&button)?;
    }
    container.append_child(&row)?;
    Ok(())
}

#[cfg(target_family = "wasm")]
fn draw_board(
    document: &web_sys::Document,
    container: &web_sys::Element,
    round: &MatchRound,
) -> Result<(), JsValue> {
    use playpen_core::round::matching::{Column, TileRef};

    let wrapper = element(document, "div", "match-board")?;
    wrapper.set_id("match-game-wrapper");
    for column in [Column::Left, Column::Right] {
        let tiles = round.board.column(column);
        let col = element(document, "div", "match-column")?;
        col.set_id(column_id(tiles));
        for (index, tile) in tiles.iter().enumerate() {
            let selected = round.board.is_selected(TileRef::new(column, index));
            let node = element(document, "div", &tile_class(tile, selected))?;
            node.set_attribute("data-column", column.as_str())?;
            node.set_attribute("data-index", &index.to_string())?;
            if let Some(name) = &tile.name {
                node.set_attribute("data-name", name)?;
                node.set_attribute("title", name)?;
            }
            match &tile.face {
                TileFace::Letter(glyph) => node.set_text_content(Some(&glyph.to_string())),
                TileFace::Pictogram(pictogram) => node.set_text_content(Some(pictogram)),
                TileFace::Swatch(color) => {
                    let swatch = element(document, "div", "color-swatch")?;
                    swatch.set_attribute("style", &swatch_style(*color))?;
                    node.append_child(&swatch)?;
                },
            }
            col.append_child(&node)?;
        }
        wrapper.append_child(&col)?;
    }
    container.append_child(&wrapper)?;
    Ok(())
}

#[cfg(target_family = "wasm")]
fn draw_chrome(document: &web_sys::Document, ctx: &SessionContext) {
    use wasm_bindgen::JsCast;

    if let Some(feedback) = document.get_element_by_id(FEEDBACK_ID) {
        feedback.set_text_content(Some(ctx.feedback().text()));
        feedback.set_class_name(ctx.feedback().css_class());
    }
    if let Some(next) = document.get_element_by_id(NEXT_BUTTON_ID) {
        let _ = next
            .class_list()
            .toggle_with_force("hidden", !ctx.next_visible());
    }
    if let Some(tip) = document.get_element_by_id(TOOLTIP_ID) {
        let tooltip = ctx.tooltip();
        tip.set_text_content(Some(&tooltip.text));
        let _ = tip.class_list().toggle_with_force("visible", tooltip.visible);
        if let Some(tip) = tip.dyn_ref::<web_sys::HtmlElement>() {
            let style = tip.style();
            let _ = style.set_property("left", &format!("{}px", tooltip.x));
            let _ = style.set_property("top", &format!("{}px", tooltip.y));
        }
    }
}
