use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::mouse::MouseButton;

/// Input the game reacts to
///
/// Raw SDL2 events are reduced to these two cases; everything else
/// (key presses, mouse motion, window focus) is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Window close box clicked
    Quit,
    /// Left mouse button released at window coordinates
    MouseUp { x: i32, y: i32 },
}

/// Per-frame source of input events
pub trait EventSource {
    /// Drain every event queued since the last poll
    fn poll(&mut self) -> Vec<GameEvent>;
}

/// InputSystem processes SDL2 events and produces GameEvents
pub struct InputSystem {
    event_pump: EventPump,
}

impl InputSystem {
    pub fn new(event_pump: EventPump) -> Self {
        InputSystem { event_pump }
    }
}

impl EventSource for InputSystem {
    fn poll(&mut self) -> Vec<GameEvent> {
        self.event_pump.poll_iter().filter_map(|e| translate(&e)).collect()
    }
}

/// Map one SDL2 event to a game event, if the game cares about it
pub fn translate(event: &Event) -> Option<GameEvent> {
    match event {
        Event::Quit { .. } => Some(GameEvent::Quit),
        Event::MouseButtonUp {
            mouse_btn: MouseButton::Left,
            x,
            y,
            ..
        } => Some(GameEvent::MouseUp { x: *x, y: *y }),
        _ => None,
    }
}

/// Replays prepared batches of events, one batch per poll
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    frames: std::collections::VecDeque<Vec<GameEvent>>,
}

#[cfg(test)]
impl ScriptedEvents {
    pub fn new(frames: Vec<Vec<GameEvent>>) -> Self {
        ScriptedEvents {
            frames: frames.into(),
        }
    }
}

#[cfg(test)]
impl EventSource for ScriptedEvents {
    fn poll(&mut self) -> Vec<GameEvent> {
        // Once the script runs out, close the window so loops always end
        self.frames.pop_front().unwrap_or_else(|| vec![GameEvent::Quit])
    }
}
