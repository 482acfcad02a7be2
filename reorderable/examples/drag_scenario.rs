// Example: a fake host list driven through one drag session.
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use reorderable::{BoundingBox, DragController, Item, ItemId, Offset, ViewHandle};

#[derive(Clone, Default)]
struct Node(Rc<RefCell<(BoundingBox, Offset)>>);

impl ViewHandle for Node {
    fn bounding_box(&self) -> Option<BoundingBox> {
        let (layout, offset) = *self.0.borrow();
        Some(layout.translated(offset))
    }

    fn set_transform(&self, dx: f32, dy: f32) {
        self.0.borrow_mut().1 = Offset::new(dx, dy);
    }

    fn clear_transform(&self) {
        self.0.borrow_mut().1 = Offset::ZERO;
    }

    fn set_transition_duration(&self, duration_ms: Option<u32>) {
        println!("  transition={duration_ms:?}");
    }

    fn set_elevated(&self, _elevated: bool) {}
}

fn row(i: usize) -> BoundingBox {
    let top = i as f32 * 50.0;
    BoundingBox::new(0.0, top, 200.0, top + 40.0)
}

fn main() {
    let items: Vec<Item> = [12984, 12983, 12985, 12986, 12987, 12988]
        .into_iter()
        .map(|id| Item::new(id, "Hello World", "#f5593d"))
        .collect();

    let nodes: HashMap<ItemId, Node> = items
        .iter()
        .enumerate()
        .map(|(i, it)| {
            let node = Node::default();
            node.0.borrow_mut().0 = row(i);
            (it.id, node)
        })
        .collect();

    // The host re-lays its nodes whenever the engine commits a new order.
    let mut ctl = DragController::new(items.clone()).with_on_commit({
        let nodes = nodes.clone();
        move |order: &[Item]| {
            let ids: Vec<ItemId> = order.iter().map(|it| it.id).collect();
            println!("commit {ids:?}");
            for (i, it) in order.iter().enumerate() {
                nodes[&it.id].0.borrow_mut().0 = row(i);
            }
        }
    });
    for it in items {
        let node = nodes[&it.id].clone();
        ctl.register(it, node);
    }

    ctl.on_pointer_down(12984, 100.0, 20.0);
    let mut now_ms = 0u64;
    for y in [30.0, 50.0, 70.0, 20.0, 70.0, 120.0, 170.0] {
        now_ms += 120;
        match ctl.on_pointer_move(100.0, y, now_ms) {
            Ok(outcome) => println!("t={now_ms} y={y} {outcome:?}"),
            Err(err) => println!("t={now_ms} fault: {err}"),
        }
        if ctl.needs_animation_frame() {
            ctl.on_animation_frame();
        }
    }
    ctl.on_pointer_up();

    let ids: Vec<ItemId> = ctl.items().iter().map(|it| it.id).collect();
    println!("final order {ids:?}");
}
