// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entity gallery: route a large collection through `SmartGrid` and replay a
//! mount, a resize, and a burst of scroll events through `VirtualGrid`.
//!
//! Run:
//! - `cargo run -p folio_demos --example entity_gallery`

use folio_demos::{Entity, sample_entities};
use folio_grid::{GridConfig, GridFrame, GridInput, ScrollAlign, VirtualGrid};
use folio_smart_grid::{ContentDensity, GridRenderer, SmartGrid, ThresholdTable};
use kurbo::Size;

/// Renders cards as one-line strings.
struct TextCards {
    grid: VirtualGrid,
}

impl TextCards {
    fn print_frame(frame: &GridFrame<String>) {
        println!(
            "  window {:?} of a {:.0}x{:.0} canvas, {} cells realized",
            frame.window.indices(),
            frame.content_size().width,
            frame.content_size().height,
            frame.cells.len()
        );
        for cell in frame.cells.iter().take(3) {
            println!(
                "    #{:<4} at ({:>6.1}, {:>8.1})  {}",
                cell.index, cell.rect.x0, cell.rect.y0, cell.node
            );
        }
    }
}

impl GridRenderer<Entity> for TextCards {
    type Node = String;

    fn loading(&mut self) -> String {
        "[loading entities]".into()
    }

    fn empty(&mut self) -> Option<String> {
        Some("[no entities in this world yet]".into())
    }

    fn regular(&mut self, items: &[Entity]) -> String {
        format!("[flow layout of {} cards]", items.len())
    }

    fn virtualized(&mut self, items: &[Entity]) -> String {
        let frame = self
            .grid
            .frame(items, |entity, _| format!("{} ({:?})", entity.name, entity.kind));
        Self::print_frame(&frame);
        format!("[virtual grid, {} of {} cards]", frame.cells.len(), items.len())
    }
}

fn main() {
    let entities = sample_entities(2_000);
    let table = ThresholdTable::DEFAULT;
    let mut cards = TextCards {
        grid: VirtualGrid::new(GridConfig::default(), entities.len()),
    };

    println!("== before data arrives");
    let grid = SmartGrid::for_density(&entities, ContentDensity::Standard, &table).loading(true);
    println!("{}", grid.render(&mut cards));

    println!("== first paint, container not measured yet");
    let grid = SmartGrid::for_density(&entities, ContentDensity::Standard, &table);
    println!("{}", grid.render(&mut cards));

    println!("== container measured at 1280x900");
    cards
        .grid
        .apply(GridInput::Resize(Size::new(1280.0, 900.0)));
    println!("{}", grid.render(&mut cards));

    println!("== fling scroll, only the last offset matters");
    cards.grid.apply_all([
        GridInput::Scroll(1_000.0),
        GridInput::Scroll(12_000.0),
        GridInput::Scroll(40_000.0),
    ]);
    println!("{}", grid.render(&mut cards));

    println!("== overscroll bounce past the end");
    cards.grid.apply(GridInput::Scroll(10_000_000.0));
    println!("{}", grid.render(&mut cards));
    cards.grid.clamp_scroll_to_content();
    println!("  clamped scroll offset: {:.1}", cards.grid.scroll_offset());

    println!("== jump to entity #1234");
    cards.grid.scroll_to_index(1234, ScrollAlign::Center);
    println!("{}", grid.render(&mut cards));

    println!("== a small folder stays in flow layout");
    let folder = sample_entities(12);
    let small = SmartGrid::for_density(&folder, ContentDensity::Standard, &table);
    println!("{}", small.render(&mut cards));

    println!("== an empty world");
    let empty: Vec<Entity> = Vec::new();
    println!("{}", SmartGrid::new(&empty, 0).render(&mut cards));
}
