//! Keeps a controller and a floem `RwSignal<Color>` in step.

use std::cell::RefCell;
use std::rc::Rc;

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::color::Color;
use crate::controller::SelectionController;

/// Bind `color` to `controller` in both directions.
///
/// Picks made through the controller are written to the signal; external
/// writes to the signal are pushed into the controller. The signal's value
/// wins when the binding is created.
pub fn bind_signal(controller: &Rc<RefCell<SelectionController>>, color: RwSignal<Color>) {
    controller.borrow_mut().set_on_change(move |change| {
        if color.get_untracked() != change.color {
            color.set(change.color);
        }
    });

    let controller = controller.clone();
    create_effect(move |_| {
        let c = color.get();
        // Already borrowed means the write came from the controller itself.
        let Ok(mut ctl) = controller.try_borrow_mut() else {
            return;
        };
        if ctl.color() != c {
            if let Err(e) = ctl.set_color(&c.hsb().into()) {
                log::warn!("bound color not applied: {e}");
            }
        }
    });
}

#[cfg(all(test, feature = "floem"))]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::config::PickerConfig;

    fn inline_controller() -> Rc<RefCell<SelectionController>> {
        Rc::new(RefCell::new(SelectionController::new(
            PickerConfig::default().inline(true),
        )))
    }

    /// Counts how many times the signal notifies its subscribers.
    fn count_writes(color: RwSignal<Color>) -> Rc<Cell<usize>> {
        let writes = Rc::new(Cell::new(0));
        let counter = writes.clone();
        create_effect(move |_| {
            let _ = color.get();
            counter.set(counter.get() + 1);
        });
        writes
    }

    #[test]
    fn test_signal_value_wins_on_bind() {
        let controller = inline_controller();
        let color = RwSignal::new(Color::from_hex("1976d2").unwrap());
        bind_signal(&controller, color);
        assert_eq!(controller.borrow().color().hex(), "1976d2");
        assert_eq!(color.get_untracked().hex(), "1976d2");
    }

    #[test]
    fn test_drag_updates_signal_once() {
        let controller = inline_controller();
        let color = RwSignal::new(Color::default());
        bind_signal(&controller, color);
        let writes = count_writes(color);
        assert_eq!(writes.get(), 1);

        controller.borrow_mut().on_surface_pointer_down(150.0, 0.0);
        assert_eq!(color.get_untracked(), controller.borrow().color());
        assert_eq!(writes.get(), 2);

        controller.borrow_mut().on_surface_pointer_move(0.0, 150.0);
        controller.borrow_mut().on_pointer_up();
        assert_eq!(color.get_untracked().hex(), "000000");
        assert_eq!(writes.get(), 3);
    }

    #[test]
    fn test_signal_write_updates_controller_once() {
        let controller = inline_controller();
        let color = RwSignal::new(Color::default());
        bind_signal(&controller, color);
        let writes = count_writes(color);

        let green = Color::from_hex("00ff00").unwrap();
        color.set(green);
        assert_eq!(controller.borrow().color(), green);
        assert_eq!(color.get_untracked(), green);
        assert_eq!(writes.get(), 2);
    }
}
