use std::collections::HashMap;

use reorderable::{BoundingBox, Item, ItemId};
use reorderable_adapter::{Controller, Easing, PointerEvent, SoftwareView};

fn row(i: usize) -> BoundingBox {
    let top = i as f32 * 50.0;
    BoundingBox::new(0.0, top, 200.0, top + 40.0)
}

fn main() {
    // Example: a self-painting host (e.g. a TUI) that owns no native nodes or timers.
    //
    // The host would:
    // - create one SoftwareView per item and register it
    // - forward raw pointer events
    // - call frame(now_ms) + advance_views(now_ms) every frame and paint at paint_box()
    let items: Vec<Item> = (1..=4)
        .map(|id| Item::new(id, format!("item {id}"), "#f5593d"))
        .collect();
    let views: HashMap<ItemId, SoftwareView> = items
        .iter()
        .enumerate()
        .map(|(i, it)| (it.id, SoftwareView::new(row(i)).with_easing(Easing::SmoothStep)))
        .collect();

    let mut c = Controller::new(items.clone()).with_on_commit({
        let views = views.clone();
        move |order: &[Item]| {
            for (i, it) in order.iter().enumerate() {
                views[&it.id].set_layout(row(i));
            }
        }
    });
    for it in items {
        let view = views[&it.id].clone();
        c.register(it, view);
    }

    let events = [
        (0u64, PointerEvent::Down { x: 100.0, y: 20.0 }),
        (16, PointerEvent::Move { x: 100.0, y: 45.0 }),
        (32, PointerEvent::Move { x: 100.0, y: 70.0 }),
    ];
    for (now_ms, event) in events {
        println!("t={now_ms} {event:?} -> {:?}", c.on_pointer(event, now_ms));
    }

    let mut now_ms = 32u64;
    loop {
        now_ms += 16;
        c.frame(now_ms);
        let animating = c.advance_views(now_ms);
        println!(
            "t={now_ms} item2 painted at top={:?}",
            views[&2].paint_box().map(|b| b.top)
        );
        if !animating {
            break;
        }
    }

    println!("release -> {:?}", c.on_pointer(PointerEvent::Up, now_ms));
    let ids: Vec<ItemId> = c.items().iter().map(|it| it.id).collect();
    println!("final order {ids:?}");
}
