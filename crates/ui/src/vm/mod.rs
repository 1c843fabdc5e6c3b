mod alert_vm;
mod quiz_vm;
mod slot_vm;

pub use alert_vm::{AlertAction, AlertVm, map_alert};
pub use quiz_vm::{QuizScreenVm, map_quiz_screen};
pub use slot_vm::{FlagButtonVm, SlotVisual, map_flag_buttons, slot_visual};
